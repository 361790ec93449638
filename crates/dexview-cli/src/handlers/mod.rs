pub mod browse;
pub mod check;
pub mod export;
pub mod list;
pub mod show;
pub mod stats;
pub mod users;
pub mod watch;
