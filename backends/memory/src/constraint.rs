use std::fmt;

use autolayout_core::{Attribute, PlatformConstraint, Priority, RelationOperator};

use crate::view::{MemoryView, WeakMemoryView};

/// A constraint recorded by the in-memory tree.
///
/// Items are held weakly, so a constraint never keeps a view alive.
#[derive(Clone)]
pub struct MemoryConstraint {
    item: WeakMemoryView,
    attribute: Attribute,
    operator: RelationOperator,
    to_item: Option<WeakMemoryView>,
    to_attribute: Attribute,
    multiplier: f64,
    constant: f64,
    priority: Priority,
}

impl MemoryConstraint {
    /// The constrained view, if still alive.
    #[must_use]
    pub fn item(&self) -> Option<MemoryView> {
        self.item.get()
    }

    /// The constrained attribute.
    #[must_use]
    pub const fn attribute(&self) -> Attribute {
        self.attribute
    }

    /// The comparison operator.
    #[must_use]
    pub const fn operator(&self) -> RelationOperator {
        self.operator
    }

    /// The reference view, `None` for constant constraints or dropped views.
    #[must_use]
    pub fn to_item(&self) -> Option<MemoryView> {
        self.to_item.as_ref().and_then(WeakMemoryView::get)
    }

    /// Returns true when the constraint has a reference view.
    #[must_use]
    pub const fn has_to_item(&self) -> bool {
        self.to_item.is_some()
    }

    /// The reference attribute.
    #[must_use]
    pub const fn to_attribute(&self) -> Attribute {
        self.to_attribute
    }

    /// The factor applied to the reference attribute.
    #[must_use]
    pub const fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// The additive offset.
    #[must_use]
    pub const fn constant(&self) -> f64 {
        self.constant
    }

    /// The priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    pub(crate) fn participants(&self) -> impl Iterator<Item = &WeakMemoryView> {
        std::iter::once(&self.item).chain(self.to_item.as_ref())
    }
}

impl PlatformConstraint<MemoryView> for MemoryConstraint {
    fn new(
        item: &MemoryView,
        attribute: Attribute,
        operator: RelationOperator,
        to_item: Option<&MemoryView>,
        to_attribute: Attribute,
        multiplier: f64,
        constant: f64,
    ) -> Self {
        Self {
            item: item.weak(),
            attribute,
            operator,
            to_item: to_item.map(MemoryView::weak),
            to_attribute,
            multiplier,
            constant,
            priority: Priority::REQUIRED,
        }
    }

    fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }
}

impl PartialEq for MemoryConstraint {
    fn eq(&self, other: &Self) -> bool {
        self.item == other.item
            && self.attribute == other.attribute
            && self.operator == other.operator
            && self.to_item == other.to_item
            && self.to_attribute == other.to_attribute
            && self.multiplier.to_bits() == other.multiplier.to_bits()
            && self.constant.to_bits() == other.constant.to_bits()
            && self.priority == other.priority
    }
}

impl fmt::Debug for MemoryConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}.{} {} ", self.item, self.attribute, self.operator)?;
        if let Some(to_item) = &self.to_item {
            write!(f, "{to_item:?}.{}", self.to_attribute)?;
            if (self.multiplier - 1.0).abs() > f64::EPSILON {
                write!(f, " * {}", self.multiplier)?;
            }
            write!(f, " + {}", self.constant)?;
        } else {
            write!(f, "{}", self.constant)?;
        }
        write!(f, " @{}", self.priority)
    }
}
