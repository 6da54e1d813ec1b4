//! Core domain layer for the Bikeshare Explorer.
//!
//! Defines the supported cities, trip records with their derived time
//! buckets, the filter specification, the error taxonomy, configuration,
//! and shared formatting helpers.

pub mod config;
pub mod error;
pub mod formatting;
pub mod models;
pub mod time_utils;
