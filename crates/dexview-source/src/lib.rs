pub mod discovery;
pub mod error;
pub mod loader;

pub use discovery::{SNAPSHOT_SUBDIR, UserEntry, list_users, snapshot_path};
pub use error::{Error, Result};
pub use loader::{load_snapshot, load_user};
