//! Creational patterns: who builds objects, and how many of them exist.

pub mod abstract_factory;
pub mod builder;
pub mod singleton;
