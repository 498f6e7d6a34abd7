#![doc = include_str!("../README.md")]

pub mod logging;

pub use autolayout_layout as layout;

#[doc(inline)]
pub use autolayout_core::{
    Attribute, AttributeRef, LayoutAnchors, LayoutOption, PlatformConstraint, PlatformView,
    Priority, Relation, RelationOperator, WeakView, install_all,
};
#[doc(inline)]
pub use autolayout_layout::{Axis, Layout, ListLayout, ListLayoutConfig};

/// Headless reference platform.
#[cfg(feature = "memory")]
pub use autolayout_memory as memory;

pub mod prelude {
    //! Commonly used traits and types.
    //!
    //! ```rust
    //! use autolayout::prelude::*;
    //! ```
    pub use autolayout_core::{
        AttributeRef, LayoutAnchors, LayoutOption, PlatformView, Priority, install_all,
    };
    pub use autolayout_layout::{Axis, Layout, ListLayout};
}

pub use tracing as log;
