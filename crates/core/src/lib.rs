//! Clubhouse Core - Shared types library.
//!
//! This crate provides common types used across the Clubhouse components:
//! - `board` - The message board web application
//! - `cli` - Command-line tools for migrations and management
//!
//! The core crate contains only types - no I/O, no database access, no
//! HTTP handling. This keeps it lightweight and allows it to be used
//! anywhere.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
