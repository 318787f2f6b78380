//! Walks the per-axis anchoring state machine through a full gesture
//! sequence. The element does not move between gestures: a gesture pins or
//! re-anchors edges against the element's current rendered position, so the
//! expected margins are all derivable from one fixed geometry.

use maquette_core::geometry::{HAlign, Rect, Size, Thickness, VAlign};
use maquette_designer::element::{DesignElement, ElementStore, GridPlacement};
use maquette_designer::extension::{GestureSource, MarginHandleSet};
use maquette_designer::grid::GridDefinition;
use maquette_designer::handle::{HandleMask, HandleOrientation};
use proptest::prelude::*;

/// 2×2 grid: columns at 0/150, rows at 0/80, actual size 300×160.
fn grid() -> GridDefinition {
    GridDefinition::new(vec![0.0, 150.0], vec![0.0, 80.0], Size::new(300.0, 160.0))
}

/// Element rendered at 10..130 × 20..60 in the first cell.
fn element() -> DesignElement {
    DesignElement::new()
        .with_bounds(Rect::new(10.0, 20.0, 120.0, 40.0))
        .with_placement(GridPlacement::at(0, 0))
        .with_margin(Thickness::new(10.0, 20.0, 20.0, 20.0))
}

#[test]
fn horizontal_axis_walk() {
    let grid = grid();
    let mut element = element();
    let mut handles = MarginHandleSet::attach(&element, Some(&grid)).expect("attach");
    assert_eq!(handles.visible_mask(), HandleMask::all());

    // First pin: drag Left while both float.
    handles.on_gesture(&mut element, &grid, HandleOrientation::Left, GestureSource::Handle);
    assert_eq!(element.margin().left, 0.0);
    assert_eq!(element.explicit_width(), Some(120.0));
    assert_eq!(element.h_align(), HAlign::Right);
    assert!(!handles.handle(HandleOrientation::Left).is_visible());
    assert!(handles.handle(HandleOrientation::Right).is_visible());

    // Re-anchor: the hidden left handle's stub re-floats the axis.
    handles.on_gesture(&mut element, &grid, HandleOrientation::Left, GestureSource::Stub);
    assert_eq!(element.margin().left, 10.0);
    assert_eq!(element.h_align(), HAlign::Stretch);
    assert_eq!(
        handles.visible_mask() & (HandleMask::LEFT | HandleMask::RIGHT),
        HandleMask::LEFT | HandleMask::RIGHT
    );

    // Pin the other end: drag Right while both float again.
    handles.on_gesture(&mut element, &grid, HandleOrientation::Right, GestureSource::Handle);
    assert_eq!(element.margin().right, 0.0);
    assert_eq!(element.margin().left, 10.0); // retained
    assert_eq!(element.h_align(), HAlign::Left);

    // And re-float it.
    handles.on_gesture(&mut element, &grid, HandleOrientation::Right, GestureSource::Stub);
    assert_eq!(element.margin().right, 20.0);
    assert_eq!(element.h_align(), HAlign::Stretch);

    // The vertical axis never participated.
    assert_eq!(element.v_align(), VAlign::Stretch);
    assert_eq!(element.margin().top, 20.0);
    assert_eq!(element.margin().bottom, 20.0);
    assert_eq!(element.explicit_height(), None);
}

#[test]
fn vertical_axis_walk() {
    let grid = grid();
    let mut element = element();
    let mut handles = MarginHandleSet::attach(&element, Some(&grid)).expect("attach");

    handles.on_gesture(&mut element, &grid, HandleOrientation::Top, GestureSource::Handle);
    assert_eq!(element.margin().top, 0.0);
    assert_eq!(element.explicit_height(), Some(40.0));
    assert_eq!(element.v_align(), VAlign::Bottom);

    handles.on_gesture(&mut element, &grid, HandleOrientation::Top, GestureSource::Stub);
    assert_eq!(element.margin().top, 20.0);
    assert_eq!(element.v_align(), VAlign::Stretch);

    handles.on_gesture(&mut element, &grid, HandleOrientation::Bottom, GestureSource::Handle);
    assert_eq!(element.margin().bottom, 0.0);
    assert_eq!(element.v_align(), VAlign::Top);

    handles.on_gesture(&mut element, &grid, HandleOrientation::Bottom, GestureSource::Stub);
    // Row line at index 1 is 80; element bottom edge is 60.
    assert_eq!(element.margin().bottom, 20.0);
    assert_eq!(element.v_align(), VAlign::Stretch);
}

#[test]
fn centered_axis_escapes_via_either_stub() {
    let grid = grid();
    let mut element = element().with_alignment(HAlign::Center, VAlign::Center);
    let mut handles = MarginHandleSet::attach(&element, Some(&grid)).expect("attach");
    assert_eq!(handles.visible_mask(), HandleMask::empty());

    handles.on_gesture(&mut element, &grid, HandleOrientation::Right, GestureSource::Stub);
    assert_eq!(element.margin().right, 20.0);
    assert_eq!(element.h_align(), HAlign::Right);
    assert!(handles.handle(HandleOrientation::Right).is_visible());

    handles.on_gesture(&mut element, &grid, HandleOrientation::Bottom, GestureSource::Stub);
    assert_eq!(element.margin().bottom, 20.0);
    assert_eq!(element.v_align(), VAlign::Bottom);
}

proptest! {
    /// Every gesture writes the dragged edge's margin, pins a size exactly
    /// when the dragged edge was floating, and stretches exactly when the
    /// dragged edge was pinned while its opposite still floated.
    #[test]
    fn resolver_branch_invariants(
        dragged_leading in any::<bool>(),
        dragged_visible in any::<bool>(),
        opposite_visible in any::<bool>(),
        leading_pos in 0.0f64..500.0,
        extent in 1.0f64..500.0,
        leading_line in 0.0f64..500.0,
        line_gap in 1.0f64..1000.0,
    ) {
        use maquette_designer::resolver::{AxisAlignment, AxisInput, EdgeSide, resolve_axis};

        let dragged = if dragged_leading { EdgeSide::Leading } else { EdgeSide::Trailing };
        let input = AxisInput {
            dragged,
            dragged_visible,
            opposite_visible,
            leading_pos,
            trailing_pos: leading_pos + extent,
            extent,
            leading_line,
            trailing_line: leading_line + line_gap,
        };
        let res = resolve_axis(&input);

        let dragged_margin = match dragged {
            EdgeSide::Leading => res.leading_margin,
            EdgeSide::Trailing => res.trailing_margin,
        };
        prop_assert!(dragged_margin.is_some());
        prop_assert_eq!(res.size.is_some(), dragged_visible);
        prop_assert_eq!(
            res.alignment == AxisAlignment::Stretch,
            opposite_visible && !dragged_visible
        );
        if dragged_visible {
            prop_assert_eq!(dragged_margin, Some(0.0));
            prop_assert_eq!(res.size, Some(extent));
        }
    }
}
