//! Layout-container collaborator.
//!
//! The margin resolver reads grid line offsets and the container's actual
//! extent; it never mutates container structure.

use maquette_core::geometry::{Axis, Size};

/// Read access to a grid-like container's line geometry.
pub trait GridProvider {
    /// Accumulated offsets of the defined lines along the given axis, one
    /// per defined track; `offsets[i]` is the line at the start of track
    /// `i`.
    fn line_offsets(&self, axis: Axis) -> &[f64];

    /// The container's actual extent along the given axis.
    fn extent(&self, axis: Axis) -> f64;
}

/// Offset of line `index` along `axis`.
///
/// Index 0 is always 0, even for a container with no defined tracks. An
/// index past the defined lines (an implicit track, or the line after the
/// last track) resolves to the container's actual extent.
#[must_use]
pub fn line_offset(grid: &dyn GridProvider, axis: Axis, index: usize) -> f64 {
    if index == 0 {
        return 0.0;
    }
    let offsets = grid.line_offsets(axis);
    if index < offsets.len() {
        offsets[index]
    } else {
        grid.extent(axis)
    }
}

/// A concrete grid description, for hosts that already resolved track
/// geometry (and for tests).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridDefinition {
    column_lines: Vec<f64>,
    row_lines: Vec<f64>,
    size: Size,
}

impl GridDefinition {
    /// Create a grid with the given resolved line offsets and actual size.
    #[must_use]
    pub fn new(column_lines: Vec<f64>, row_lines: Vec<f64>, size: Size) -> Self {
        Self {
            column_lines,
            row_lines,
            size,
        }
    }

    /// The actual size of the container.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }
}

impl GridProvider for GridDefinition {
    fn line_offsets(&self, axis: Axis) -> &[f64] {
        match axis {
            Axis::Horizontal => &self.column_lines,
            Axis::Vertical => &self.row_lines,
        }
    }

    fn extent(&self, axis: Axis) -> f64 {
        self.size.extent(axis)
    }
}
