pub mod api;
pub mod config;
pub mod error;
pub mod geometry;
pub mod hive;
pub mod loader;
pub mod options;
pub mod synth;
pub mod template;
// cmd and reports belong to the binary (main.rs).
