//! Tests against a live PostgreSQL database
//!
//! Each test returns early when `DATABASE_URL` is unset.

mod auth_flow_test;
mod catalog_test;
