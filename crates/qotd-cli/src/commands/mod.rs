pub mod add;
pub mod common;
pub mod completions;
pub mod export;
pub mod filter;
pub mod import;
pub mod list;
pub mod show;
pub mod sync;
pub mod watch;
