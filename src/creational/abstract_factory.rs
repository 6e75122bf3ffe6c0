// Pattern: Abstract Factory
// Clients ask a producer for a factory, then ask the factory for shapes,
// without naming a concrete shape type.

use crate::console::Console;
use tracing::debug;

// ============================================================================
// Products
// ============================================================================

pub trait Shape {
    fn draw(&self, out: &mut dyn Console);
}

pub struct Rect;

impl Shape for Rect {
    fn draw(&self, out: &mut dyn Console) {
        out.line("rect");
    }
}

pub struct RoundedRect;

impl Shape for RoundedRect {
    fn draw(&self, out: &mut dyn Console) {
        out.line("rounded rect");
    }
}

// ============================================================================
// Factories
// ============================================================================

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactoryType {
    #[default]
    Shape,
    RoundedShape,
}

impl FactoryType {
    pub const ALL: [FactoryType; 2] = [FactoryType::Shape, FactoryType::RoundedShape];

    /// Unrecognised names select the default factory rather than failing.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "shape" => FactoryType::Shape,
            "rounded-shape" | "rounded_shape" | "roundedshape" => FactoryType::RoundedShape,
            _ => FactoryType::default(),
        }
    }
}

pub trait AbstractFactory {
    fn shape(&self, name: &str) -> Box<dyn Shape>;
    fn kind(&self) -> FactoryType;
}

pub struct ShapeFactory;

impl AbstractFactory for ShapeFactory {
    fn shape(&self, name: &str) -> Box<dyn Shape> {
        match name {
            "RECT" => Box::new(Rect),
            _ => Box::new(Rect),
        }
    }

    fn kind(&self) -> FactoryType {
        FactoryType::Shape
    }
}

pub struct RoundedShapeFactory;

impl AbstractFactory for RoundedShapeFactory {
    fn shape(&self, name: &str) -> Box<dyn Shape> {
        match name {
            "RECT" => Box::new(RoundedRect),
            _ => Box::new(RoundedRect),
        }
    }

    fn kind(&self) -> FactoryType {
        FactoryType::RoundedShape
    }
}

pub struct FactoryProducer;

impl FactoryProducer {
    pub fn factory(of: FactoryType) -> Box<dyn AbstractFactory> {
        debug!(factory = ?of, "producing factory");
        match of {
            FactoryType::Shape => Box::new(ShapeFactory),
            FactoryType::RoundedShape => Box::new(RoundedShapeFactory),
        }
    }
}

pub fn drive(out: &mut dyn Console) {
    FactoryProducer::factory(FactoryType::Shape).shape("RECT").draw(out);
    FactoryProducer::factory(FactoryType::RoundedShape).shape("RECT").draw(out);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Transcript;

    fn drawn(shape: &dyn Shape) -> Vec<String> {
        let mut out = Transcript::new();
        shape.draw(&mut out);
        out.into_lines()
    }

    #[test]
    fn test_producer_is_stable() {
        for kind in FactoryType::ALL {
            let first = FactoryProducer::factory(kind);
            let second = FactoryProducer::factory(kind);
            assert_eq!(first.kind(), kind);
            assert_eq!(second.kind(), kind);
        }
    }

    #[test]
    fn test_each_factory_draws_its_family() {
        let plain = FactoryProducer::factory(FactoryType::Shape);
        let rounded = FactoryProducer::factory(FactoryType::RoundedShape);

        assert_eq!(drawn(&*plain.shape("RECT")), ["rect"]);
        assert_eq!(drawn(&*rounded.shape("RECT")), ["rounded rect"]);
    }

    #[test]
    fn test_unknown_shape_name_falls_back() {
        let plain = FactoryProducer::factory(FactoryType::Shape);
        let rounded = FactoryProducer::factory(FactoryType::RoundedShape);

        assert_eq!(drawn(&*plain.shape("HEXAGON")), ["rect"]);
        assert_eq!(drawn(&*rounded.shape("")), ["rounded rect"]);
    }

    #[test]
    fn test_factory_type_from_name() {
        assert_eq!(FactoryType::from_name("shape"), FactoryType::Shape);
        assert_eq!(FactoryType::from_name("Rounded-Shape"), FactoryType::RoundedShape);
        assert_eq!(FactoryType::from_name("rounded_shape"), FactoryType::RoundedShape);
    }

    #[test]
    fn test_unknown_factory_type_uses_default() {
        assert_eq!(FactoryType::from_name("triangle"), FactoryType::Shape);
        assert_eq!(
            FactoryProducer::factory(FactoryType::from_name("")).kind(),
            FactoryType::Shape
        );
    }

    #[test]
    fn test_drive_output() {
        let mut out = Transcript::new();
        drive(&mut out);
        assert_eq!(out.lines(), ["rect", "rounded rect"]);
    }
}
