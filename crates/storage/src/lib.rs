pub mod catalog;
pub mod dto;
pub mod error;
pub mod format;
pub mod gateway;
pub mod models;
pub mod repository;
pub mod services;

pub use error::{Result, StorageError};
pub use gateway::{Database, Gateway, MemGateway, PgGateway};
