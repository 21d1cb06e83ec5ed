mod operations;
mod types;

pub use operations::{execute, Operation};
pub use types::{CreatePasteRequest, CreateUserRequest, Paste, UpdatePasteRequest, User};
