//! Server application core modules.
//!
//! This module contains all server-side functionality for holonet: configuration, HTTP
//! routing, database access, favorites logic, and error mapping. Handlers live in
//! `controller`, business rules in `service`, and queries in `data`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
