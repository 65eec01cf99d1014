//! Blocking MongoDB facade.
//!
//! This module provides:
//! - `ConnectionManager`: runtime ownership and connection setup
//! - `ops`: sampling, insert and index operations driven through a `Model`

pub mod manager;
pub mod ops;

pub use manager::ConnectionManager;
