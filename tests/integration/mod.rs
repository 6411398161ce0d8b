//! Integration tests over the HTTP router

mod database;
