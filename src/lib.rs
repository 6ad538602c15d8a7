//! Arbor: In-Memory Filesystem Namespace
//!
//! A hierarchical filesystem simulated entirely in memory: directories and
//! files organized in a tree, navigated with a current-directory cursor and
//! mutated through a small command API.

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod meta;
pub mod path;
pub mod shell;
pub mod tree;
pub mod types;
