//! Strategy pattern: one context, two sort orders.
//!
//! Run with: cargo run --bin strategy

use design_patterns::behavioral::strategy;
use design_patterns::{logging, Stdout};

fn main() {
    // Demo output does not depend on logging, so a failed setup is ignored.
    logging::init(0, false, true).ok();
    strategy::drive(&mut Stdout);
}
