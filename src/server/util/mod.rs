//! Utility functions and helpers for server operations.
//!
//! This module provides password hashing for user accounts and the conversion of
//! database models into the DTOs returned by the API.

pub mod password;
pub mod serialize;
