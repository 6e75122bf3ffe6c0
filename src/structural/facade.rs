// Pattern: Facade
// `ShapeMaker` is the only public way to draw; the shapes behind it stay
// private to this module.

use crate::console::Console;

mod shapes {
    use crate::console::Console;

    pub trait Shape {
        fn draw(&self, out: &mut dyn Console);
    }

    pub struct Circle;
    impl Shape for Circle {
        fn draw(&self, out: &mut dyn Console) {
            out.line("circle");
        }
    }

    pub struct Rectangle;
    impl Shape for Rectangle {
        fn draw(&self, out: &mut dyn Console) {
            out.line("rectangle");
        }
    }

    pub struct Square;
    impl Shape for Square {
        fn draw(&self, out: &mut dyn Console) {
            out.line("square");
        }
    }
}

use shapes::Shape;

pub struct ShapeMaker {
    circle: shapes::Circle,
    rect: shapes::Rectangle,
    square: shapes::Square,
}

impl ShapeMaker {
    pub fn new() -> Self {
        Self {
            circle: shapes::Circle,
            rect: shapes::Rectangle,
            square: shapes::Square,
        }
    }

    pub fn draw_circle(&self, out: &mut dyn Console) {
        self.circle.draw(out);
    }

    pub fn draw_rectangle(&self, out: &mut dyn Console) {
        self.rect.draw(out);
    }

    pub fn draw_square(&self, out: &mut dyn Console) {
        self.square.draw(out);
    }
}

impl Default for ShapeMaker {
    fn default() -> Self {
        Self::new()
    }
}

pub fn drive(out: &mut dyn Console) {
    let facade = ShapeMaker::new();
    facade.draw_circle(out);
    facade.draw_square(out);
    facade.draw_rectangle(out);
}

// ============================================================================
// Tests
// ============================================================================
