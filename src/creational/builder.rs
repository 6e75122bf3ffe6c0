// Pattern: Builder
// A manager (director) knows the construction steps for each house type;
// the builder it holds decides what each step produces.

use crate::console::Console;
use tracing::debug;

pub trait HouseBuilder {
    fn build_door(&self, out: &mut dyn Console);
    fn build_window(&self, out: &mut dyn Console);
    fn build_wall(&self, out: &mut dyn Console);
}

pub struct ConcreteBuilder1;

impl HouseBuilder for ConcreteBuilder1 {
    fn build_door(&self, out: &mut dyn Console) {
        out.line("build door 1");
    }

    fn build_window(&self, out: &mut dyn Console) {
        out.line("build window 1");
    }

    fn build_wall(&self, out: &mut dyn Console) {
        out.line("build wall 1");
    }
}

pub struct ConcreteBuilder2;

impl HouseBuilder for ConcreteBuilder2 {
    fn build_door(&self, out: &mut dyn Console) {
        out.line("build door 2");
    }

    fn build_window(&self, out: &mut dyn Console) {
        out.line("build window 2");
    }

    fn build_wall(&self, out: &mut dyn Console) {
        out.line("build wall 2");
    }
}

/// Runs fixed build sequences against whichever builder is set.
/// Without a builder every sequence is a no-op.
#[derive(Default)]
pub struct HouseManager {
    builder: Option<Box<dyn HouseBuilder>>,
}

impl HouseManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, builder: impl HouseBuilder + 'static) {
        self.builder = Some(Box::new(builder));
    }

    pub fn has_builder(&self) -> bool {
        self.builder.is_some()
    }

    // Type A has no window; type B has one. Both orders are fixed.
    pub fn build_house_type_a(&self, out: &mut dyn Console) {
        let Some(builder) = self.builder() else {
            return;
        };
        builder.build_door(out);
        builder.build_wall(out);
        builder.build_wall(out);
        builder.build_wall(out);
    }

    pub fn build_house_type_b(&self, out: &mut dyn Console) {
        let Some(builder) = self.builder() else {
            return;
        };
        builder.build_wall(out);
        builder.build_window(out);
        builder.build_door(out);
    }

    fn builder(&self) -> Option<&dyn HouseBuilder> {
        if self.builder.is_none() {
            debug!("no builder set, skipping house");
        }
        self.builder.as_deref()
    }
}

pub fn drive(out: &mut dyn Console) {
    let mut manager = HouseManager::new();
    manager.set(ConcreteBuilder1);
    manager.build_house_type_a(out);
    manager.build_house_type_b(out);
}

// ============================================================================
// Tests
// ============================================================================
