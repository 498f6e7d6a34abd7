//! Relations between attributes and the options that modify them.
//!
//! A [`Relation`] reads as
//! `from <operator> to * multiplier + constant`, weighted by a priority.
//! Relations are plain values: the builders on [`AttributeRef`] create them
//! and every modifier consumes a relation and returns the modified copy, so
//! modifiers chain left to right:
//!
//! ```ignore
//! let relation = label
//!     .center_y()
//!     .equal_to(icon.center_y())
//!     .constant(-10.0)
//!     .priority(Priority::DEFAULT_HIGH);
//! ```

use core::fmt;

use crate::{AttributeRef, Priority, platform::PlatformView};

/// Comparison between the two sides of a [`Relation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RelationOperator {
    /// `from == to * multiplier + constant`
    Equal,
    /// `from <= to * multiplier + constant`
    LessThanOrEqual,
    /// `from >= to * multiplier + constant`
    GreaterThanOrEqual,
}

impl RelationOperator {
    /// The comparison symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Equal => "==",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThanOrEqual => ">=",
        }
    }
}

impl fmt::Display for RelationOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single field override applied with [`Relation::with`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutOption {
    /// Additive offset.
    Constant(f64),
    /// Factor applied to the right-hand side.
    Multiplier(f64),
    /// Constraint priority.
    Priority(Priority),
}

/// A declarative description of one layout constraint.
pub struct Relation<V: PlatformView> {
    from: AttributeRef<V>,
    to: AttributeRef<V>,
    operator: RelationOperator,
    constant: f64,
    multiplier: f64,
    priority: Priority,
}

impl<V: PlatformView> Relation<V> {
    /// Creates a relation with a zero constant, a unit multiplier, and
    /// required priority.
    #[must_use]
    pub fn new(from: AttributeRef<V>, operator: RelationOperator, to: AttributeRef<V>) -> Self {
        Self {
            from,
            to,
            operator,
            constant: 0.0,
            multiplier: 1.0,
            priority: Priority::REQUIRED,
        }
    }

    /// Returns a copy with the field named by `option` overwritten.
    #[must_use]
    pub fn with(mut self, option: LayoutOption) -> Self {
        match option {
            LayoutOption::Constant(value) => self.constant = value,
            LayoutOption::Multiplier(value) => self.multiplier = value,
            LayoutOption::Priority(value) => self.priority = value,
        }
        self
    }

    /// Shorthand for `with(LayoutOption::Constant(value))`.
    #[must_use]
    pub fn constant(self, value: impl Into<f64>) -> Self {
        self.with(LayoutOption::Constant(value.into()))
    }

    /// Shorthand for `with(LayoutOption::Multiplier(value))`.
    #[must_use]
    pub fn multiplier(self, value: impl Into<f64>) -> Self {
        self.with(LayoutOption::Multiplier(value.into()))
    }

    /// Shorthand for `with(LayoutOption::Priority(value))`.
    #[must_use]
    pub fn priority(self, value: impl Into<Priority>) -> Self {
        self.with(LayoutOption::Priority(value.into()))
    }

    /// The constrained (left-hand) side.
    #[must_use]
    pub const fn from(&self) -> &AttributeRef<V> {
        &self.from
    }

    /// The reference (right-hand) side.
    #[must_use]
    pub const fn to(&self) -> &AttributeRef<V> {
        &self.to
    }

    /// The comparison operator.
    #[must_use]
    pub const fn operator(&self) -> RelationOperator {
        self.operator
    }

    /// The additive offset.
    #[must_use]
    pub const fn constant_value(&self) -> f64 {
        self.constant
    }

    /// The factor applied to the right-hand side.
    #[must_use]
    pub const fn multiplier_value(&self) -> f64 {
        self.multiplier
    }

    /// The priority.
    #[must_use]
    pub const fn priority_value(&self) -> Priority {
        self.priority
    }
}

impl<V: PlatformView> Clone for Relation<V> {
    fn clone(&self) -> Self {
        Self {
            from: self.from.clone(),
            to: self.to.clone(),
            operator: self.operator,
            constant: self.constant,
            multiplier: self.multiplier,
            priority: self.priority,
        }
    }
}

impl<V: PlatformView> fmt::Debug for Relation<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Relation")
            .field("from", &self.from)
            .field("operator", &self.operator)
            .field("to", &self.to)
            .field("constant", &self.constant)
            .field("multiplier", &self.multiplier)
            .field("priority", &self.priority)
            .finish()
    }
}

// ============================================================================
// Builders
// ============================================================================

impl<V: PlatformView> AttributeRef<V> {
    /// Relates this attribute to `other` with `operator`.
    #[must_use]
    pub fn relate(self, operator: RelationOperator, other: Self) -> Relation<V> {
        Relation::new(self, operator, other)
    }

    /// Relates this attribute to a plain constant with `operator`.
    ///
    /// The right-hand side becomes [`AttributeRef::Constant`] and `value` is
    /// stored as the relation's constant.
    #[must_use]
    pub fn relate_constant(self, operator: RelationOperator, value: impl Into<f64>) -> Relation<V> {
        Relation::new(self, operator, Self::Constant).constant(value)
    }

    /// `self == other`
    #[must_use]
    pub fn equal_to(self, other: Self) -> Relation<V> {
        self.relate(RelationOperator::Equal, other)
    }

    /// `self <= other`
    #[must_use]
    pub fn less_than_or_equal_to(self, other: Self) -> Relation<V> {
        self.relate(RelationOperator::LessThanOrEqual, other)
    }

    /// `self >= other`
    #[must_use]
    pub fn greater_than_or_equal_to(self, other: Self) -> Relation<V> {
        self.relate(RelationOperator::GreaterThanOrEqual, other)
    }

    /// `self == value`
    #[must_use]
    pub fn equal_to_constant(self, value: impl Into<f64>) -> Relation<V> {
        self.relate_constant(RelationOperator::Equal, value)
    }

    /// `self <= value`
    #[must_use]
    pub fn less_than_or_equal_to_constant(self, value: impl Into<f64>) -> Relation<V> {
        self.relate_constant(RelationOperator::LessThanOrEqual, value)
    }

    /// `self >= value`
    #[must_use]
    pub fn greater_than_or_equal_to_constant(self, value: impl Into<f64>) -> Relation<V> {
        self.relate_constant(RelationOperator::GreaterThanOrEqual, value)
    }
}
