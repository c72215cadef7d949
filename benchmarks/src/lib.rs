//! # autopt Suite Driver
//!
//! Runs batches of cycles against an [`autopt::Engine`] with synthetic,
//! reproducible input. A suite is nothing more than N sequential
//! `run_cycle` calls, optionally separated by a fixed delay; this crate
//! supplies the readings and tallies the results.

#![cfg_attr(not(any(feature = "std", test)), no_std)]

extern crate alloc;

pub mod generator;
pub mod suite;

pub use generator::SignalGenerator;
pub use suite::{run_suite, run_suite_with, SuiteConfig, SuiteReport};
