//! # DevMeter stress test
//! Goose scenarios simulating the two kinds of DevMeter clients:
//! the IDE extension sending heartbeats ([`extension`]) and people browsing
//! the public dashboard ([`web`]).
//!
//! The `devmeter-stress` binary registers both scenarios, everything else
//! (ramp-up, scheduling, reports) is left to goose and its command line.

pub mod config;
pub mod extension;
pub mod heartbeat;
pub mod vocabulary;
pub mod web;
