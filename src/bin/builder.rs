//! Builder pattern: a house manager directs a builder.
//!
//! Run with: cargo run --bin builder

use design_patterns::creational::builder;
use design_patterns::{logging, Stdout};

fn main() {
    // Demo output does not depend on logging, so a failed setup is ignored.
    logging::init(0, false, true).ok();
    builder::drive(&mut Stdout);
}
