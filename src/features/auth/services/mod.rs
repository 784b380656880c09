mod auth_service;
mod token_service;

pub use auth_service::{hash_password, AuthService};
pub use token_service::TokenService;
