//! Generic per-axis margin resolution.
//!
//! The four edge cases (Left/Top/Right/Bottom) collapse into one function
//! over {dragged edge, opposing edge, grid lines}, invoked once per gesture
//! for the axis the handle lives on. The perpendicular axis is untouched.

use maquette_core::geometry::{HAlign, VAlign};

/// Which end of the axis an edge sits at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeSide {
    /// Left or top.
    Leading,
    /// Right or bottom.
    Trailing,
}

impl EdgeSide {
    /// The opposing edge on the same axis.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Leading => Self::Trailing,
            Self::Trailing => Self::Leading,
        }
    }
}

/// Axis-generic alignment produced by a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisAlignment {
    /// Anchored at the leading edge (Left/Top).
    Leading,
    /// Anchored at the trailing edge (Right/Bottom).
    Trailing,
    /// Both margins in effect.
    Stretch,
}

impl AxisAlignment {
    /// Anchored at the given edge.
    #[must_use]
    pub fn anchored_at(side: EdgeSide) -> Self {
        match side {
            EdgeSide::Leading => Self::Leading,
            EdgeSide::Trailing => Self::Trailing,
        }
    }

    /// The horizontal alignment this resolves to.
    #[must_use]
    pub fn to_horizontal(self) -> HAlign {
        match self {
            Self::Leading => HAlign::Left,
            Self::Trailing => HAlign::Right,
            Self::Stretch => HAlign::Stretch,
        }
    }

    /// The vertical alignment this resolves to.
    #[must_use]
    pub fn to_vertical(self) -> VAlign {
        match self {
            Self::Leading => VAlign::Top,
            Self::Trailing => VAlign::Bottom,
            Self::Stretch => VAlign::Stretch,
        }
    }
}

/// Inputs to one axis resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisInput {
    /// Which edge the gesture hit.
    pub dragged: EdgeSide,
    /// Whether the dragged edge's handle is visible (still floating).
    pub dragged_visible: bool,
    /// Whether the opposing handle is visible (still floating).
    pub opposite_visible: bool,
    /// Element's leading edge position in container coordinates.
    pub leading_pos: f64,
    /// Element's trailing edge position in container coordinates.
    pub trailing_pos: f64,
    /// Element's rendered extent along the axis.
    pub extent: f64,
    /// Grid line offset at the element's track index.
    pub leading_line: f64,
    /// Grid line offset at the element's track index plus span.
    pub trailing_line: f64,
}

/// The property writes one axis resolution dictates.
///
/// `None` margins are retained as-is; the final margin record is written
/// back in a single update by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisResolution {
    pub leading_margin: Option<f64>,
    pub trailing_margin: Option<f64>,
    /// Explicit extent to pin, when the branch pins one.
    pub size: Option<f64>,
    pub alignment: AxisAlignment,
}

impl AxisResolution {
    fn new(alignment: AxisAlignment) -> Self {
        Self {
            leading_margin: None,
            trailing_margin: None,
            size: None,
            alignment,
        }
    }

    fn set_margin(&mut self, side: EdgeSide, value: f64) {
        match side {
            EdgeSide::Leading => self.leading_margin = Some(value),
            EdgeSide::Trailing => self.trailing_margin = Some(value),
        }
    }
}

/// Resolve a gesture on one edge of an axis.
///
/// Branch semantics, with `D` the dragged edge and `O` the opposing edge:
///
/// - `O` floating, `D` floating: zero `D`'s margin, pin the rendered extent,
///   anchor at `O` (first pin of the axis).
/// - `O` floating, `D` fixed: re-anchor; `D`'s margin becomes the distance
///   from its grid line, alignment returns to stretch.
/// - `O` fixed, `D` floating: pin `D` too; zero its margin, compute `O`'s
///   margin from the opposite grid line, pin the extent, anchor at `O`.
/// - `O` fixed, `D` fixed: recompute `D`'s margin and toggle the anchor to
///   the edge just dragged.
#[must_use]
pub fn resolve_axis(input: &AxisInput) -> AxisResolution {
    let dragged = input.dragged;
    let opposite = dragged.opposite();
    let margin_toward = |side: EdgeSide| match side {
        EdgeSide::Leading => input.leading_pos - input.leading_line,
        EdgeSide::Trailing => input.trailing_line - input.trailing_pos,
    };

    if input.opposite_visible {
        if input.dragged_visible {
            let mut res = AxisResolution::new(AxisAlignment::anchored_at(opposite));
            res.set_margin(dragged, 0.0);
            res.size = Some(input.extent);
            res
        } else {
            let mut res = AxisResolution::new(AxisAlignment::Stretch);
            res.set_margin(dragged, margin_toward(dragged));
            res
        }
    } else if input.dragged_visible {
        let mut res = AxisResolution::new(AxisAlignment::anchored_at(opposite));
        res.set_margin(dragged, 0.0);
        res.set_margin(opposite, margin_toward(opposite));
        res.size = Some(input.extent);
        res
    } else {
        let mut res = AxisResolution::new(AxisAlignment::anchored_at(dragged));
        res.set_margin(dragged, margin_toward(dragged));
        res
    }
}
