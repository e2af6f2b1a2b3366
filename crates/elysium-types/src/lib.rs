pub mod message;
pub mod event;
pub mod notification;
pub mod config;
pub mod error;
pub mod session;


pub use error::AppError;
pub type Result<T> = std::result::Result<T, AppError>;
