//! # Design Patterns Playground
//!
//! Small, independent snippets for classic object-oriented patterns,
//! expressed with traits, enums and composition.
//!
//! ## Behavioral
//! - Command (trait objects and closures in one queue)
//! - Strategy (swappable sort order)
//!
//! ## Creational
//! - Abstract Factory (factory producer with a default fallback)
//! - Builder (director with an optional builder)
//! - Singleton (lazy `OnceLock` instance)
//!
//! ## Structural
//! - Adapter (media player delegating foreign formats)
//! - Decorator (generic composition instead of inheritance)
//! - Facade (one front for several shapes)
//!
//! Every snippet writes through a [`console::Console`] so the output can be
//! printed or captured. Run a single snippet with its own binary:
//!
//! ```bash
//! cargo run --bin strategy
//! ```
//!
//! or several through the runner:
//!
//! ```bash
//! cargo run --bin patterns -- builder adapter
//! ```

pub mod behavioral;
pub mod cli;
pub mod config;
pub mod console;
pub mod creational;
pub mod demo;
pub mod error;
pub mod logging;
pub mod runner;
pub mod structural;

pub use console::{Console, Stdout, Transcript};
pub use demo::Demo;
pub use error::{PatternError, Result};
