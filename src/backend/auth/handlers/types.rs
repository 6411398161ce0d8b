/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the signup
 * and login handlers.
 */

use serde::{Deserialize, Serialize};

/// Sign up request
#[derive(Deserialize, Serialize, Debug)]
pub struct SignupRequest {
    /// User's full name (5-55 characters)
    #[serde(default)]
    pub full_name: String,
    /// User's email address
    #[serde(default)]
    pub email: String,
    /// User's password (will be hashed before storage)
    #[serde(default)]
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    /// User's password (will be verified against stored hash)
    #[serde(default)]
    pub password: String,
}

/// Login response
///
/// Written as-is, without an envelope key.
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    pub ok: bool,
    pub message: String,
    /// Session token (24-hour expiration)
    pub token: String,
}
