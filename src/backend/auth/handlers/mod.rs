//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - User registration handler
//! └── login.rs    - User authentication handler
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /v1/user/signup/ - User registration
//! - **`login`** - POST /v1/user/login/ - Token issuance
//!
//! # Authentication Flow
//!
//! 1. **Signup**: full name, email and password → validated → user created
//! 2. **Login**: email and password → credentials verified → token returned
//! 3. Authenticated routes read the token from `Authorization: Bearer <token>`

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

// Re-export commonly used types
pub use types::{AuthResponse, LoginRequest, SignupRequest};

// Re-export handlers
pub use login::login;
pub use signup::signup;
