#![no_std]
//! Core types for `autolayout`.
//!
//! This crate describes layout constraints declaratively and hands them to a
//! native constraint engine. It never solves anything: the platform does.
//!
//! - [`Attribute`] and [`AttributeRef`] name a geometric property of a view,
//! - [`Relation`] relates two attributes (or an attribute and a constant),
//! - [`LayoutOption`] adjusts the constant, multiplier, or [`Priority`],
//! - [`Relation::install`] and [`install_all`] register the result with the
//!   toolkit through the [`platform`] traits.
//!
//! # Example
//!
//! ```rust,ignore
//! use autolayout_core::{LayoutAnchors, Priority, install_all};
//!
//! install_all([
//!     parent.left().equal_to(child.left()),
//!     parent.right().equal_to(child.right()).priority(Priority::DEFAULT_HIGH),
//!     parent.center_y().equal_to(child.center_y()).constant(-10.0),
//!     child.height().equal_to_constant(14),
//! ])?;
//! ```

extern crate alloc;

pub mod attribute;
pub mod install;
pub mod platform;
pub mod priority;
pub mod relation;

pub use attribute::{Attribute, AttributeRef, LayoutAnchors};
pub use install::install_all;
pub use platform::{PlatformConstraint, PlatformView, WeakView};
pub use priority::Priority;
pub use relation::{LayoutOption, Relation, RelationOperator};

#[cfg(test)]
mod tests;
