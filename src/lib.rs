//! Scenematch - season and episode guessing for media filenames
//!
//! This library crate exposes the CLI's configuration and rendering for
//! integration testing. The parsing itself lives in `scenematch-parser`.

pub mod config;
pub mod output;
