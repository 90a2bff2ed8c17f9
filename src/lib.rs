//! Employee records and salary calculation.
//!
//! This crate manages employee records with soft deletion and computes
//! per-employee salary by employee type, behind a small HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;
