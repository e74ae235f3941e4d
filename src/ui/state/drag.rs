// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles grab-and-drag interaction state for panning a magnified image.
//! Unlike a scrollable viewport, the image follows the pointer: moving the
//! cursor right moves the picture right.

use iced::{Point, Vector};

/// Manages grab-and-drag state
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Whether a drag operation is currently active
    pub is_dragging: bool,

    /// Pointer position where the drag started
    pub start_position: Option<Point>,

    /// Pan offset when the drag started
    pub start_offset: Option<Vector>,
}

impl DragState {
    /// Starts a drag operation
    pub fn start(&mut self, position: Point, offset: Vector) {
        self.is_dragging = true;
        self.start_position = Some(position);
        self.start_offset = Some(offset);
    }

    /// Stops the drag operation
    pub fn stop(&mut self) {
        self.is_dragging = false;
        self.start_position = None;
        self.start_offset = None;
    }

    /// Pan offset for the current pointer position: `start_offset + (pointer - start)`.
    #[must_use]
    pub fn calculate_offset(&self, current_position: Point) -> Option<Vector> {
        if !self.is_dragging {
            return None;
        }

        let start_pos = self.start_position?;
        let start_offset = self.start_offset?;

        Some(start_offset + (current_position - start_pos))
    }
}
