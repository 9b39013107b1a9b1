//! Scoped compositing layers.

use super::Canvas;
use std::ops::{Deref, DerefMut};

/// An open layer on a [`Canvas`].
///
/// Drawing through the guard lands in the layer. Dropping the guard restores
/// the canvas to the save count it had before the layer was opened, which
/// composites the layer and discards any saves left unbalanced inside it.
pub struct LayerGuard<'a> {
    canvas: &'a mut Canvas,
    restore_count: usize,
}

impl<'a> LayerGuard<'a> {
    pub(super) fn new(canvas: &'a mut Canvas, restore_count: usize) -> Self {
        Self {
            canvas,
            restore_count,
        }
    }

    /// Save count the canvas returns to when the guard is dropped.
    pub fn restore_count(&self) -> usize {
        self.restore_count
    }
}

impl Deref for LayerGuard<'_> {
    type Target = Canvas;

    fn deref(&self) -> &Canvas {
        self.canvas
    }
}

impl DerefMut for LayerGuard<'_> {
    fn deref_mut(&mut self) -> &mut Canvas {
        self.canvas
    }
}

impl Drop for LayerGuard<'_> {
    fn drop(&mut self) {
        self.canvas.restore_to_count(self.restore_count);
    }
}
