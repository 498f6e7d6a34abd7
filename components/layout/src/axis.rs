//! Stacking directions for composite layouts.

use autolayout_core::Attribute;

/// The direction along which a composite layout chains its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Children are chained top to bottom (default).
    #[default]
    Vertical,
    /// Children are chained leading to trailing.
    Horizontal,
}

impl Axis {
    /// The edge a child is chained by: `Top` or `Leading`.
    #[must_use]
    pub const fn leading_attribute(self) -> Attribute {
        match self {
            Self::Vertical => Attribute::Top,
            Self::Horizontal => Attribute::Leading,
        }
    }

    /// The edge the next child is chained to: `Bottom` or `Trailing`.
    #[must_use]
    pub const fn trailing_attribute(self) -> Attribute {
        match self {
            Self::Vertical => Attribute::Bottom,
            Self::Horizontal => Attribute::Trailing,
        }
    }

    /// The two edges pinned to the container across the axis.
    #[must_use]
    pub const fn off_axis_attributes(self) -> [Attribute; 2] {
        match self {
            Self::Vertical => [Attribute::Left, Attribute::Right],
            Self::Horizontal => [Attribute::Top, Attribute::Bottom],
        }
    }

    /// The perpendicular axis.
    #[must_use]
    pub const fn cross(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }
}
