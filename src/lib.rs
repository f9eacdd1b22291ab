//! Flappy Bird game library crate.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// These modules are excluded from coverage.
#[cfg_attr(coverage_nightly, coverage(off))]
pub mod app;
#[cfg_attr(coverage_nightly, coverage(off))]
pub mod audio;
#[cfg_attr(coverage_nightly, coverage(off))]
pub mod formatter;
#[cfg_attr(coverage_nightly, coverage(off))]
pub mod platform;

pub mod asset;
pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod game;
pub mod systems;
pub mod texture;
