/*
 * Surface Module
 *
 * This module defines the drawing interface the simulation talks to and a
 * retained-mode shape store that implements it. The simulation creates,
 * moves and deletes shapes through handles; the renderer walks the store
 * every frame and turns the shapes into nannou draw calls.
 */

use std::collections::BTreeMap;

use nannou::prelude::*;

use crate::color::HexColor;

// Opaque handle to a shape living on a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeHandle(u64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle {
        center: Vec2,
        radius: f32,
        color: HexColor,
    },
    Line {
        start: Vec2,
        end: Vec2,
        color: HexColor,
        weight: f32,
    },
}

/// Shape operations the simulation needs from whatever is drawing it.
///
/// All positions are canvas coordinates (origin top-left, y down).
pub trait Surface {
    fn create_circle(&mut self, center: Vec2, radius: f32, color: HexColor) -> ShapeHandle;
    fn move_circle(&mut self, handle: ShapeHandle, center: Vec2);
    fn create_line(&mut self, start: Vec2, end: Vec2, color: HexColor, weight: f32) -> ShapeHandle;
    /// Deleting a handle that is already gone is a no-op.
    fn delete_shape(&mut self, handle: ShapeHandle);
}

// Retained shapes keyed by handle. Handles are never reused, so
// iteration order is creation order.
#[derive(Debug, Default)]
pub struct ShapeStore {
    next_id: u64,
    shapes: BTreeMap<ShapeHandle, Shape>,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, shape: Shape) -> ShapeHandle {
        let handle = ShapeHandle(self.next_id);
        self.next_id += 1;
        self.shapes.insert(handle, shape);
        handle
    }

    pub fn get(&self, handle: ShapeHandle) -> Option<&Shape> {
        self.shapes.get(&handle)
    }

    pub fn contains(&self, handle: ShapeHandle) -> bool {
        self.shapes.contains_key(&handle)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn circle_count(&self) -> usize {
        self.circles().count()
    }

    pub fn line_count(&self) -> usize {
        self.lines().count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShapeHandle, &Shape)> {
        self.shapes.iter().map(|(handle, shape)| (*handle, shape))
    }

    pub fn circles(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.values().filter(|shape| matches!(shape, Shape::Circle { .. }))
    }

    pub fn lines(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.values().filter(|shape| matches!(shape, Shape::Line { .. }))
    }
}

impl Surface for ShapeStore {
    fn create_circle(&mut self, center: Vec2, radius: f32, color: HexColor) -> ShapeHandle {
        self.insert(Shape::Circle { center, radius, color })
    }

    fn move_circle(&mut self, handle: ShapeHandle, new_center: Vec2) {
        if let Some(Shape::Circle { center, .. }) = self.shapes.get_mut(&handle) {
            *center = new_center;
        }
    }

    fn create_line(&mut self, start: Vec2, end: Vec2, color: HexColor, weight: f32) -> ShapeHandle {
        self.insert(Shape::Line { start, end, color, weight })
    }

    fn delete_shape(&mut self, handle: ShapeHandle) {
        self.shapes.remove(&handle);
    }
}
