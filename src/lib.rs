//! Remembrance Library
//!
//! Remembers a user's name between runs in a small JSON record and greets them with it.

pub mod names;
pub mod storage;
pub mod survey;
pub mod types;
pub mod ui;

pub use storage::preference::{
    get_stored_value, request_and_store_value, resolve_value, store_value,
};
pub use storage::StorageError;
pub use types::{Location, Resolution};
