#![forbid(unsafe_code)]

//! Core primitives for the Maquette presentation layer.
//!
//! Everything in this crate is single-threaded by design: the presentation
//! layer runs inside one owning UI thread, and all mutation happens
//! synchronously within a single event-handler invocation. In a
//! multi-threaded embedding, marshal calls onto the owning thread before
//! touching any of these types.

pub mod geometry;
pub mod observer;

pub use geometry::{Axis, HAlign, Point, Rect, Size, Thickness, VAlign};
pub use observer::{ObserverList, Subscription};
