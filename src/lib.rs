pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod models;
pub mod services;

// Convenient re-exports (so call sites can do `hearth::RoomService`, etc.)
pub use error::{AppResult, DomainError};
pub use services::room::RoomService;
