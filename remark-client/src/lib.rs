mod config;
pub use config::{seed, StoreConfig, DEFAULT_STORAGE_KEY};

mod db;
pub use db::DataDump;

mod storage;
pub use storage::{MemoryStorage, Storage};

mod store;
pub use store::CommentStore;

mod fuzz;

pub mod api {
    pub use remark_api::*;
}
