//! Abstract Factory pattern: a producer hands out shape factories.
//!
//! Run with: cargo run --bin abstract_factory

use design_patterns::creational::abstract_factory;
use design_patterns::{logging, Stdout};

fn main() {
    // Demo output does not depend on logging, so a failed setup is ignored.
    logging::init(0, false, true).ok();
    abstract_factory::drive(&mut Stdout);
}
