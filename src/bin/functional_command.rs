//! Command pattern with closures as the queued commands.
//!
//! Run with: cargo run --bin functional_command

use design_patterns::behavioral::command;
use design_patterns::{logging, Stdout};

fn main() {
    // Demo output does not depend on logging, so a failed setup is ignored.
    logging::init(0, false, true).ok();
    command::drive_functional(&mut Stdout);
}
