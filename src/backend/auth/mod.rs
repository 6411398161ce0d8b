//! Authentication Module
//!
//! - **`users`** - User records
//! - **`passwords`** - bcrypt hashing and verification
//! - **`sessions`** - Session token issuance and verification
//! - **`handlers`** - Signup and login endpoints

pub mod handlers;
pub mod passwords;
pub mod sessions;
pub mod users;

pub use sessions::{Claims, TokenConfig, TokenIssuer};
pub use users::User;
