//! Mullion Core
//!
//! This crate contains the core functionality shared by the mullion widget
//! toolkit: bounded collections, configuration, logging, and math helpers.

pub mod collections;
pub mod config;
pub mod logging;
pub mod math;
