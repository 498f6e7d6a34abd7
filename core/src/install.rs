//! Turning relations into native constraints.
//!
//! Installation is a write-once handoff: the relation's fields are copied
//! into a [`PlatformConstraint`], the constraint is registered on the view
//! that owns the relation's left-hand side, and the handle is returned so the
//! caller can keep it for later removal or animation.

use alloc::vec::Vec;

use crate::{
    Relation,
    platform::{PlatformConstraint, PlatformView},
};

impl<V: PlatformView> Relation<V> {
    /// Builds the native constraint without registering it.
    ///
    /// # Panics
    ///
    /// Panics if the left-hand side is the constant operand, or if either
    /// side refers to a view that has already been dropped. Both are
    /// programming errors: a constraint must govern at least one live view.
    #[must_use]
    pub fn to_constraint(&self) -> V::Constraint {
        let (item, to_item) = self.resolve_views();
        self.build(&item, to_item.as_ref())
    }

    /// Builds the native constraint and registers it on the view owning the
    /// left-hand side.
    ///
    /// # Errors
    ///
    /// Returns the platform's error unchanged when it rejects the
    /// constraint, for example because the two views share no common
    /// ancestor. Nothing is validated up front.
    ///
    /// # Panics
    ///
    /// Same conditions as [`Relation::to_constraint`].
    pub fn install(self) -> Result<V::Constraint, V::Error> {
        let (item, to_item) = self.resolve_views();
        let constraint = self.build(&item, to_item.as_ref());
        item.add_constraint(&constraint)?;
        tracing::debug!(
            from = %self.from().attribute(),
            operator = %self.operator(),
            to = %self.to().attribute(),
            constant = self.constant_value(),
            multiplier = self.multiplier_value(),
            priority = %self.priority_value(),
            "installed constraint"
        );
        Ok(constraint)
    }

    fn resolve_views(&self) -> (V, Option<V>) {
        assert!(
            !self.from().is_constant(),
            "cannot install a relation whose left-hand side is a constant"
        );
        let Some(item) = self.from().view() else {
            panic!(
                "view owning `{}` was dropped before its relation was installed",
                self.from().attribute()
            );
        };
        let to_item = if self.to().is_constant() {
            None
        } else {
            let Some(view) = self.to().view() else {
                panic!(
                    "view owning `{}` was dropped before its relation was installed",
                    self.to().attribute()
                );
            };
            Some(view)
        };
        (item, to_item)
    }

    fn build(&self, item: &V, to_item: Option<&V>) -> V::Constraint {
        let mut constraint = V::Constraint::new(
            item,
            self.from().attribute(),
            self.operator(),
            to_item,
            self.to().attribute(),
            self.multiplier_value(),
            self.constant_value(),
        );
        constraint.set_priority(self.priority_value());
        tracing::trace!(?constraint, "built constraint");
        constraint
    }
}

/// Installs every relation in order and returns the constraints in the same
/// order.
///
/// # Errors
///
/// Stops at the first relation the platform rejects and returns its error.
/// Relations installed before it stay registered.
///
/// # Panics
///
/// Same conditions as [`Relation::to_constraint`].
pub fn install_all<V, I>(relations: I) -> Result<Vec<V::Constraint>, V::Error>
where
    V: PlatformView,
    I: IntoIterator<Item = Relation<V>>,
{
    relations.into_iter().map(Relation::install).collect()
}
