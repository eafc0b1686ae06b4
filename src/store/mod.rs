pub mod adapter;
pub mod errlog;
pub mod file_store;
pub mod state;
pub mod watcher;

pub use adapter::{InflightTracker, RequestId, SourceAdapter, StoreError};
pub use file_store::FileStore;
pub use watcher::{StoreEvent, StoreWatcher};
