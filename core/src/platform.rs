//! Capabilities the constraint layer needs from a native toolkit.
//!
//! Autolayout never solves constraints itself. It builds a description of a
//! single relation and hands it to the toolkit through the traits below.
//! Each supported toolkit (UIKit, AppKit, a headless test tree, ...) provides
//! one implementation of [`PlatformView`] together with its weak handle and
//! constraint types.
//!
//! # Thread confinement
//!
//! None of these traits require `Send` or `Sync`. View hierarchies live on
//! the UI thread and implementations are free to use `Rc`-based handles so
//! the compiler keeps them there.

use core::fmt::Debug;

use alloc::vec::Vec;

use crate::{Attribute, Priority, RelationOperator};

/// A handle to a view in the native hierarchy.
///
/// Handles are cheap to clone and compare by identity, not by value.
pub trait PlatformView: Clone + Debug + Sized {
    /// Non-owning handle used by [`AttributeRef`](crate::AttributeRef).
    type Weak: WeakView<Self>;
    /// Native constraint object produced during installation.
    type Constraint: PlatformConstraint<Self>;
    /// Error the toolkit reports when it refuses a constraint.
    type Error: core::error::Error;

    /// Creates a weak handle that does not keep the view alive.
    fn downgrade(&self) -> Self::Weak;

    /// Returns the direct parent of this view, if any.
    fn superview(&self) -> Option<Self>;

    /// Returns the direct children of this view, in order.
    fn subviews(&self) -> Vec<Self>;

    /// Attaches `child` as the last subview, detaching it from its previous
    /// parent first.
    fn add_subview(&self, child: &Self);

    /// Registers `constraint` with this view so the layout engine honors it.
    ///
    /// # Errors
    ///
    /// Returns the toolkit's own error when it rejects the constraint, for
    /// example when the participating views share no common ancestor.
    fn add_constraint(&self, constraint: &Self::Constraint) -> Result<(), Self::Error>;

    /// Identity comparison.
    fn same_view(&self, other: &Self) -> bool;
}

/// Weak counterpart of a [`PlatformView`].
pub trait WeakView<V>: Clone + Debug {
    /// Returns the view if it is still alive.
    fn upgrade(&self) -> Option<V>;
}

/// A native constraint object.
pub trait PlatformConstraint<V: PlatformView>: Debug {
    /// Builds an inactive constraint of the form
    /// `item.attribute <operator> to_item.to_attribute * multiplier + constant`.
    ///
    /// `to_item` is `None` (and `to_attribute` is [`Attribute::NotAnAttribute`])
    /// for constraints against a plain constant.
    fn new(
        item: &V,
        attribute: Attribute,
        operator: RelationOperator,
        to_item: Option<&V>,
        to_attribute: Attribute,
        multiplier: f64,
        constant: f64,
    ) -> Self;

    /// Sets the priority. Called once, right after construction.
    fn set_priority(&mut self, priority: Priority);
}
