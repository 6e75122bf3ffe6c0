//! Facade pattern: one maker fronts three shapes.
//!
//! Run with: cargo run --bin facade

use design_patterns::structural::facade;
use design_patterns::{logging, Stdout};

fn main() {
    // Demo output does not depend on logging, so a failed setup is ignored.
    logging::init(0, false, true).ok();
    facade::drive(&mut Stdout);
}
