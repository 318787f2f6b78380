//! Window-placement memento.
//!
//! Captures the main window's state and, for a normal-state window, its
//! placement. Restoring applies defaults for anything missing, so a memento
//! from an older session (or an empty one) still yields a usable placement.

use maquette_core::geometry::Rect;
use serde::{Deserialize, Serialize};

const DEFAULT_LEFT: f64 = 10.0;
const DEFAULT_TOP: f64 = 10.0;
const DEFAULT_WIDTH: f64 = 600.0;
const DEFAULT_HEIGHT: f64 = 400.0;

/// Main-window state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WindowState {
    Normal,
    Minimized,
    #[default]
    Maximized,
}

/// A live window placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowPlacement {
    pub state: WindowState,
    /// Bounds of the window while in the normal state.
    pub bounds: Rect,
}

/// Persisted window placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowMemento {
    #[serde(default)]
    pub window_state: WindowState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl WindowMemento {
    /// Capture a placement.
    ///
    /// Bounds are only recorded for a normal-state window; a maximized or
    /// minimized window restores to its default normal-state placement.
    #[must_use]
    pub fn capture(placement: &WindowPlacement) -> Self {
        let bounds = (placement.state == WindowState::Normal).then_some(placement.bounds);
        Self {
            window_state: placement.state,
            left: bounds.map(|b| b.x),
            top: bounds.map(|b| b.y),
            width: bounds.map(|b| b.width),
            height: bounds.map(|b| b.height),
        }
    }

    /// Restore a placement, applying defaults for missing fields.
    #[must_use]
    pub fn restore(&self) -> WindowPlacement {
        WindowPlacement {
            state: self.window_state,
            bounds: Rect::new(
                self.left.unwrap_or(DEFAULT_LEFT),
                self.top.unwrap_or(DEFAULT_TOP),
                self.width.unwrap_or(DEFAULT_WIDTH),
                self.height.unwrap_or(DEFAULT_HEIGHT),
            ),
        }
    }
}

impl Default for WindowMemento {
    fn default() -> Self {
        Self {
            window_state: WindowState::default(),
            left: None,
            top: None,
            width: None,
            height: None,
        }
    }
}
