//! Behavioral patterns: how objects hand work to each other.

pub mod command;
pub mod strategy;
