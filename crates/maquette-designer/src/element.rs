//! Element property-store collaborator.
//!
//! Replaces the host toolkit's attached-property bags with a typed accessor
//! interface. All writes are last-write-wins; the resolver computes the full
//! new margin first and writes it in one call.

use maquette_core::geometry::{HAlign, Rect, Thickness, VAlign};

/// Where the element sits in its grid container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPlacement {
    pub column: usize,
    pub column_span: usize,
    pub row: usize,
    pub row_span: usize,
}

impl Default for GridPlacement {
    fn default() -> Self {
        Self {
            column: 0,
            column_span: 1,
            row: 0,
            row_span: 1,
        }
    }
}

impl GridPlacement {
    /// Placement at the given cell with span 1×1.
    #[must_use]
    pub fn at(column: usize, row: usize) -> Self {
        Self {
            column,
            row,
            ..Self::default()
        }
    }

    /// Set the column span.
    #[must_use]
    pub fn with_column_span(mut self, span: usize) -> Self {
        self.column_span = span;
        self
    }

    /// Set the row span.
    #[must_use]
    pub fn with_row_span(mut self, span: usize) -> Self {
        self.row_span = span;
        self
    }
}

/// Typed get/set access to the positioned element's layout properties.
pub trait ElementStore {
    /// The element's current margin.
    fn margin(&self) -> Thickness;
    /// Replace the element's margin in one update.
    fn set_margin(&mut self, margin: Thickness);

    /// Pin the element's explicit width.
    fn set_explicit_width(&mut self, width: f64);
    /// Pin the element's explicit height.
    fn set_explicit_height(&mut self, height: f64);

    fn h_align(&self) -> HAlign;
    fn set_h_align(&mut self, align: HAlign);
    fn v_align(&self) -> VAlign;
    fn set_v_align(&mut self, align: VAlign);

    /// The element's grid cell and spans.
    fn placement(&self) -> GridPlacement;

    /// The element's rendered bounds in container coordinates.
    fn bounds_in_container(&self) -> Rect;

    /// Whether a rotation/skew render transform is active.
    ///
    /// Margin handles are never created for transformed elements.
    fn has_render_transform(&self) -> bool;
}

/// A plain in-memory element, for hosts without a live property system and
/// for tests.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DesignElement {
    margin: Thickness,
    explicit_width: Option<f64>,
    explicit_height: Option<f64>,
    h_align: HAlign,
    v_align: VAlign,
    placement: GridPlacement,
    bounds: Rect,
    render_transform: bool,
}

impl DesignElement {
    /// Create an element with default (stretch) alignment and no margin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rendered bounds in container coordinates.
    #[must_use]
    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }

    /// Set the grid placement.
    #[must_use]
    pub fn with_placement(mut self, placement: GridPlacement) -> Self {
        self.placement = placement;
        self
    }

    /// Set the initial margin.
    #[must_use]
    pub fn with_margin(mut self, margin: Thickness) -> Self {
        self.margin = margin;
        self
    }

    /// Set the initial alignments.
    #[must_use]
    pub fn with_alignment(mut self, h_align: HAlign, v_align: VAlign) -> Self {
        self.h_align = h_align;
        self.v_align = v_align;
        self
    }

    /// Mark the element as carrying a rotation/skew transform.
    #[must_use]
    pub fn with_render_transform(mut self, transformed: bool) -> Self {
        self.render_transform = transformed;
        self
    }

    /// Update the rendered bounds (the host's layout pass moved the
    /// element).
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// The pinned explicit width, if any.
    #[must_use]
    pub fn explicit_width(&self) -> Option<f64> {
        self.explicit_width
    }

    /// The pinned explicit height, if any.
    #[must_use]
    pub fn explicit_height(&self) -> Option<f64> {
        self.explicit_height
    }
}

impl ElementStore for DesignElement {
    fn margin(&self) -> Thickness {
        self.margin
    }

    fn set_margin(&mut self, margin: Thickness) {
        self.margin = margin;
    }

    fn set_explicit_width(&mut self, width: f64) {
        self.explicit_width = Some(width);
    }

    fn set_explicit_height(&mut self, height: f64) {
        self.explicit_height = Some(height);
    }

    fn h_align(&self) -> HAlign {
        self.h_align
    }

    fn set_h_align(&mut self, align: HAlign) {
        self.h_align = align;
    }

    fn v_align(&self) -> VAlign {
        self.v_align
    }

    fn set_v_align(&mut self, align: VAlign) {
        self.v_align = align;
    }

    fn placement(&self) -> GridPlacement {
        self.placement
    }

    fn bounds_in_container(&self) -> Rect {
        self.bounds
    }

    fn has_render_transform(&self) -> bool {
        self.render_transform
    }
}
