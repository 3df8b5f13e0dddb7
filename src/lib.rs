//! `score-lens` library crate.
//!
//! Derives everything a credit-score dashboard shows from one bureau report:
//! category, per-metric status, explanations, score history, gauge geometry
//! and count-up animations for the displayed numbers.
//!
//! The binary (`score-lens`) only wires config, logging and the JSON API
//! around this library.

pub mod animate;
pub mod classifier;
pub mod config;
pub mod dashboard;
pub mod engine;
pub mod explain;
pub mod format;
pub mod gauge;
pub mod history;
pub mod metrics;
pub mod report;
pub mod status;
pub mod web;
