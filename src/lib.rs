//! Chuckle Library
//!
//! This module exposes the application modules for use in integration
//! tests.

pub mod app;
pub mod cache;
pub mod cli;
pub mod data;
pub mod fetch;
pub mod theme;
pub mod ui;
