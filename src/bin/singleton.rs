//! Singleton pattern: two handles on one shared instance.
//!
//! Run with: cargo run --bin singleton

use design_patterns::creational::singleton;
use design_patterns::{logging, Stdout};

fn main() {
    // Demo output does not depend on logging, so a failed setup is ignored.
    logging::init(0, false, true).ok();
    singleton::drive(&mut Stdout);
}
