//! Structural patterns: wrapping and fronting existing types.

pub mod adapter;
pub mod decorator;
pub mod facade;
