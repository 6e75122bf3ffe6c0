// Pattern: Command
// An action is wrapped in an object so it can be queued and triggered later.

use crate::console::Console;
use tracing::debug;

pub const COMMAND_A_OUTPUT: &str = "Command A executes some operations";
pub const COMMAND_B_OUTPUT: &str = "Command B executes some operations";

// ============================================================================
// Example: Command Objects
// ============================================================================

pub trait Command {
    fn execute(&self, out: &mut dyn Console);
}

pub struct CommandA;

impl Command for CommandA {
    fn execute(&self, out: &mut dyn Console) {
        out.line(COMMAND_A_OUTPUT);
    }
}

pub struct CommandB;

impl Command for CommandB {
    fn execute(&self, out: &mut dyn Console) {
        out.line(COMMAND_B_OUTPUT);
    }
}

// ============================================================================
// Example: Functional Command (closure as the command object)
// ============================================================================

pub struct FunctionalCommand {
    execute_fn: Box<dyn Fn(&mut dyn Console)>,
}

impl FunctionalCommand {
    pub fn new(execute_fn: impl Fn(&mut dyn Console) + 'static) -> Self {
        Self {
            execute_fn: Box::new(execute_fn),
        }
    }
}

impl Command for FunctionalCommand {
    fn execute(&self, out: &mut dyn Console) {
        (self.execute_fn)(out);
    }
}

// ============================================================================
// Invoker
// ============================================================================

/// Queues commands and runs them in the order they were added.
#[derive(Default)]
pub struct Invoker {
    command_queue: Vec<Box<dyn Command>>,
}

impl Invoker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, command: impl Command + 'static) {
        self.command_queue.push(Box::new(command));
    }

    /// Executes every queued command once. The queue is left intact, so a
    /// second `run` repeats the same sequence.
    pub fn run(&self, out: &mut dyn Console) {
        debug!(queued = self.command_queue.len(), "running command queue");
        for command in &self.command_queue {
            command.execute(out);
        }
    }

    pub fn len(&self) -> usize {
        self.command_queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.command_queue.is_empty()
    }
}

pub fn drive(out: &mut dyn Console) {
    let mut invoker = Invoker::new();
    invoker.add(CommandA);
    invoker.add(CommandA);
    invoker.add(CommandB);
    invoker.add(CommandA);
    invoker.add(CommandA);
    invoker.run(out);
}

pub fn drive_functional(out: &mut dyn Console) {
    let command_a = || FunctionalCommand::new(|out| out.line(COMMAND_A_OUTPUT));

    let mut invoker = Invoker::new();
    invoker.add(command_a());
    invoker.add(command_a());
    invoker.add(FunctionalCommand::new(|out| out.line(COMMAND_B_OUTPUT)));
    invoker.add(command_a());
    invoker.add(command_a());
    invoker.run(out);
}

// ============================================================================
// Tests
// ============================================================================
