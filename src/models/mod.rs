pub mod user;
pub mod auth;
pub mod records;

pub use user::{EntityId, Role, User};
pub use auth::{LoginRequest, LoginResponse};
pub use records::*;
