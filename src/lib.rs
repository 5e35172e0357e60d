//! Pollcast - live audience polling for interactive presentations.
//!
//! A presenter creates a presentation holding an ordered list of polls,
//! steps through them one at a time, and clients cast and read votes for
//! the poll that is currently live.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
