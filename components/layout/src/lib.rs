#![no_std]
//! Composite layouts for `autolayout`.
//!
//! A composite layout takes a group of views and generates every relation
//! needed to arrange them, so callers don't write each constraint by hand.
//!
//! # Example
//!
//! ```rust,ignore
//! use autolayout_core::AttributeRef;
//! use autolayout_layout::{Axis, Layout, ListLayout};
//!
//! let buttons = ListLayout::builder(button_bar.clone(), Axis::Horizontal)
//!     .trailing(AttributeRef::equal_to)
//!     .build([ok, cancel]);
//! buttons.activate()?;
//! ```

extern crate alloc;

use autolayout_core::PlatformView;

pub mod axis;
pub mod list;

pub use axis::Axis;
pub use list::{ListLayout, ListLayoutBuilder, ListLayoutConfig, TrailingRelation};

/// Read-only view of a generated layout.
pub trait Layout {
    /// The view type the layout arranges.
    type View: PlatformView;

    /// The views the layout manages, in order.
    fn views(&self) -> &[Self::View];

    /// Every constraint the layout generated.
    fn constraints(&self) -> impl Iterator<Item = &<Self::View as PlatformView>::Constraint>;
}
