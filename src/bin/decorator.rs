//! Decorator pattern: a red decorator wraps a circle.
//!
//! Run with: cargo run --bin decorator

use design_patterns::structural::decorator;
use design_patterns::{logging, Stdout};

fn main() {
    // Demo output does not depend on logging, so a failed setup is ignored.
    logging::init(0, false, true).ok();
    decorator::drive(&mut Stdout);
}
