//! Command pattern: an invoker runs a queue of command objects.
//!
//! Run with: cargo run --bin command

use design_patterns::behavioral::command;
use design_patterns::{logging, Stdout};

fn main() {
    // Demo output does not depend on logging, so a failed setup is ignored.
    logging::init(0, false, true).ok();
    command::drive(&mut Stdout);
}
