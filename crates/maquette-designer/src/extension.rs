//! Margin handle extension.
//!
//! Owns the four handles of one positioned element and drives the per-axis
//! resolution when a gesture arrives. Handles exist only when the
//! prerequisites were satisfied at attach time; the gesture path does not
//! re-validate them.

use crate::element::ElementStore;
use crate::grid::{GridProvider, line_offset};
use crate::handle::{HandleMask, HandleOrientation, MarginHandle};
use crate::resolver::{AxisInput, resolve_axis};
use maquette_core::geometry::{Axis, HAlign, VAlign};

/// Where a gesture originated.
///
/// A hidden handle is represented by a stub in the UI; clicks on the stub
/// route through the same resolution path as clicks on the handle itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureSource {
    Handle,
    Stub,
}

/// The four margin handles adorning one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarginHandleSet {
    handles: [MarginHandle; 4],
}

impl MarginHandleSet {
    /// Create handles for an element, when the prerequisites hold.
    ///
    /// Returns `None` when the element has no grid-like parent or carries a
    /// rotation/skew transform; no handles are created in that case and no
    /// gesture can ever reach the resolution path.
    #[must_use]
    pub fn attach(
        element: &dyn ElementStore,
        parent: Option<&dyn GridProvider>,
    ) -> Option<Self> {
        parent?;
        if element.has_render_transform() {
            return None;
        }

        let mut set = Self {
            handles: [
                MarginHandle::new(HandleOrientation::Left),
                MarginHandle::new(HandleOrientation::Top),
                MarginHandle::new(HandleOrientation::Right),
                MarginHandle::new(HandleOrientation::Bottom),
            ],
        };
        set.decide_visibility(element);
        Some(set)
    }

    /// The handle for the given edge.
    #[must_use]
    pub fn handle(&self, orientation: HandleOrientation) -> &MarginHandle {
        &self.handles[orientation.index()]
    }

    /// Mask of currently visible handles.
    #[must_use]
    pub fn visible_mask(&self) -> HandleMask {
        let mut mask = HandleMask::empty();
        for handle in &self.handles {
            if handle.is_visible() {
                mask |= handle.orientation().into();
            }
        }
        mask
    }

    /// Hide all four handles (selection left the element).
    pub fn hide_handles(&mut self) {
        for handle in &mut self.handles {
            handle.set_should_be_visible(false);
        }
    }

    /// Show the handles again, re-deriving per-edge visibility from the
    /// element's current alignment.
    pub fn show_handles(&mut self, element: &dyn ElementStore) {
        for handle in &mut self.handles {
            handle.set_should_be_visible(true);
        }
        self.decide_visibility(element);
    }

    /// Resolve a gesture on one handle (or its stub).
    ///
    /// Reads the element's margin, placement, and rendered bounds, resolves
    /// the gesture's axis, writes size and alignment as the branch dictates,
    /// and writes the fully mutated margin back in one update. The
    /// perpendicular axis is untouched.
    pub fn on_gesture(
        &mut self,
        element: &mut dyn ElementStore,
        grid: &dyn GridProvider,
        orientation: HandleOrientation,
        source: GestureSource,
    ) {
        #[cfg(not(feature = "tracing"))]
        let _ = source;

        let axis = orientation.axis();
        let placement = element.placement();
        let (index, span) = match axis {
            Axis::Horizontal => (placement.column, placement.column_span),
            Axis::Vertical => (placement.row, placement.row_span),
        };
        let bounds = element.bounds_in_container();
        let mut margin = element.margin();

        let input = AxisInput {
            dragged: orientation.side(),
            dragged_visible: self.handle(orientation).is_visible(),
            opposite_visible: self.handle(orientation.opposite()).is_visible(),
            leading_pos: bounds.leading(axis),
            trailing_pos: bounds.trailing(axis),
            extent: bounds.extent(axis),
            leading_line: line_offset(grid, axis, index),
            trailing_line: line_offset(grid, axis, index + span),
        };
        let resolution = resolve_axis(&input);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "margin.resolve",
            orientation = ?orientation,
            source = ?source,
            alignment = ?resolution.alignment,
            leading_margin = ?resolution.leading_margin,
            trailing_margin = ?resolution.trailing_margin,
            pinned_size = ?resolution.size,
        );

        if let Some(value) = resolution.leading_margin {
            margin.set_leading(axis, value);
        }
        if let Some(value) = resolution.trailing_margin {
            margin.set_trailing(axis, value);
        }
        if let Some(size) = resolution.size {
            match axis {
                Axis::Horizontal => element.set_explicit_width(size),
                Axis::Vertical => element.set_explicit_height(size),
            }
        }
        match axis {
            Axis::Horizontal => element.set_h_align(resolution.alignment.to_horizontal()),
            Axis::Vertical => element.set_v_align(resolution.alignment.to_vertical()),
        }
        element.set_margin(margin);

        self.decide_visibility(element);
    }

    /// Re-derive each handle's visibility from the element's alignment.
    ///
    /// A stretch axis leaves both margins draggable; an anchored axis leaves
    /// only the anchored edge's margin in effect; a centered axis leaves
    /// neither.
    pub fn decide_visibility(&mut self, element: &dyn ElementStore) {
        let (left, right) = match element.h_align() {
            HAlign::Stretch => (true, true),
            HAlign::Left => (true, false),
            HAlign::Right => (false, true),
            HAlign::Center => (false, false),
        };
        let (top, bottom) = match element.v_align() {
            VAlign::Stretch => (true, true),
            VAlign::Top => (true, false),
            VAlign::Bottom => (false, true),
            VAlign::Center => (false, false),
        };

        self.handles[HandleOrientation::Left.index()].set_visible(left);
        self.handles[HandleOrientation::Top.index()].set_visible(top);
        self.handles[HandleOrientation::Right.index()].set_visible(right);
        self.handles[HandleOrientation::Bottom.index()].set_visible(bottom);
    }
}
