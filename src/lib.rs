//! cherubin: live network monitor for the terminal.
//!
//! Each tick samples per-interface counters and the socket tables, turns the
//! counters into per-interval deltas and Mbps, classifies rates into alert
//! tiers, ranks remote IPs by connection count, and hands the result to a
//! renderer.

pub mod app;
pub mod color_scheme;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod model;
pub mod severity;
pub mod system;
pub mod ui;
