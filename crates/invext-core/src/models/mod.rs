//! Data models: the output record and pipeline configuration.

pub mod config;
pub mod record;
