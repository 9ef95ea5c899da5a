//! Authentication utilities

mod authenticator;
mod password;

pub use authenticator::{Authenticator, SessionPayload, TOKEN_TTL_SECONDS};
pub use password::{hash_password, verify_password, PasswordService};
