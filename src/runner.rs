//! Runs a selection of demos against one console.

use crate::config::RunConfig;
use crate::console::Console;
use crate::demo::Demo;
use colored::Colorize;
use tracing::info;

pub fn run(config: &RunConfig, out: &mut dyn Console) {
    for (index, demo) in config.demos.iter().enumerate() {
        if config.headers {
            if index > 0 {
                out.line("");
            }
            out.line(&header(*demo, config.color));
        }
        info!(demo = %demo, "running demo");
        demo.run(out);
    }
}

fn header(demo: Demo, color: bool) -> String {
    let text = format!("=== {} ===", demo.title());
    if color {
        text.bold().to_string()
    } else {
        text
    }
}
