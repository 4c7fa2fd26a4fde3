//! Configuration for certrev
//!
//! This crate holds the immutable `Config` shared by components and the
//! `ConfigLoader` that layers defaults, an optional JSON file and
//! environment overrides.

pub mod config;
pub mod loader;


pub use config::Config;
pub use loader::ConfigLoader;
