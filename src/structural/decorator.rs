// Pattern: Decorator
// Behaviour is added by wrapping a shape in another shape. Each layer draws
// what it wraps first, then adds its own line.

use crate::console::Console;

pub trait Shape {
    fn draw(&self, out: &mut dyn Console);
}

impl<S: Shape + ?Sized> Shape for &S {
    fn draw(&self, out: &mut dyn Console) {
        (**self).draw(out);
    }
}

impl<S: Shape + ?Sized> Shape for Box<S> {
    fn draw(&self, out: &mut dyn Console) {
        (**self).draw(out);
    }
}

pub struct Circle;

impl Shape for Circle {
    fn draw(&self, out: &mut dyn Console) {
        out.line("Shape: circle");
    }
}

/// Pass-through wrapper; draws exactly what it decorates.
pub struct ShapeDecorator<S> {
    decorated: S,
}

impl<S: Shape> ShapeDecorator<S> {
    pub fn new(shape: S) -> Self {
        Self { decorated: shape }
    }
}

impl<S: Shape> Shape for ShapeDecorator<S> {
    fn draw(&self, out: &mut dyn Console) {
        self.decorated.draw(out);
    }
}

pub struct RedShapeDecorator<S> {
    inner: ShapeDecorator<S>,
}

impl<S: Shape> RedShapeDecorator<S> {
    pub fn new(shape: S) -> Self {
        Self {
            inner: ShapeDecorator::new(shape),
        }
    }
}

impl<S: Shape> Shape for RedShapeDecorator<S> {
    fn draw(&self, out: &mut dyn Console) {
        self.inner.draw(out);
        out.line("And it's Red");
    }
}

pub fn drive(out: &mut dyn Console) {
    let circle = Circle;
    circle.draw(out);

    let red_circle = RedShapeDecorator::new(&circle);
    red_circle.draw(out);
}

// ============================================================================
// Tests
// ============================================================================
