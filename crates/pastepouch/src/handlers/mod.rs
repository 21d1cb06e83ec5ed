pub mod dispatch;
pub mod error;
pub mod pastes;
pub mod users;

pub use error::{AppError, RequestError};
