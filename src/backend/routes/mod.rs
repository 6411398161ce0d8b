//! Route Configuration Module
//!
//! - **`router`** - Main router creation, fallback and layers
//! - **`api_routes`** - The `/v1` endpoints
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - API endpoint registration
//! ```

/// Main router creation
pub mod router;

/// API endpoint registration
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
