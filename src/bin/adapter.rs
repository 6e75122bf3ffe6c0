//! Adapter pattern: an mp3 player plays foreign formats through an adapter.
//!
//! Run with: cargo run --bin adapter

use design_patterns::structural::adapter;
use design_patterns::{logging, Stdout};

fn main() {
    // Demo output does not depend on logging, so a failed setup is ignored.
    logging::init(0, false, true).ok();
    adapter::drive(&mut Stdout);
}
