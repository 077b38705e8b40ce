//! `nova-score` library crate.
//!
//! Alternative credit scoring for gig-economy workers: an additive score
//! formula, a seeded synthetic dataset generator and a rule-based
//! recommendation engine, plus the CLI plumbing around them.
//!
//! The binary (`nova`) is a thin wrapper around this library.

pub mod advice;
pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod plot;
pub mod report;
pub mod scoring;
pub mod store;
pub mod telemetry;
pub mod training;
