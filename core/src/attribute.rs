//! Geometric attributes and references to them.

use core::fmt;

use crate::platform::{PlatformView, WeakView};

/// A geometric property of a view that can take part in a constraint.
///
/// Edge and center attributes are positions, `Width` and `Height` are
/// dimensions. `Leading` and `Trailing` follow the layout direction of the
/// view; `Left` and `Right` do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Attribute {
    /// The top edge.
    Top,
    /// The left edge.
    Left,
    /// The right edge.
    Right,
    /// The bottom edge.
    Bottom,
    /// The leading edge (left in left-to-right layouts).
    Leading,
    /// The trailing edge (right in left-to-right layouts).
    Trailing,
    /// The width.
    Width,
    /// The height.
    Height,
    /// The horizontal center.
    CenterX,
    /// The vertical center.
    CenterY,
    /// The text baseline.
    Baseline,
    /// Placeholder used on the right-hand side of constant relations.
    NotAnAttribute,
}

impl Attribute {
    /// Every real attribute, in declaration order.
    pub const ALL: [Self; 11] = [
        Self::Top,
        Self::Left,
        Self::Right,
        Self::Bottom,
        Self::Leading,
        Self::Trailing,
        Self::Width,
        Self::Height,
        Self::CenterX,
        Self::CenterY,
        Self::Baseline,
    ];

    /// Returns true for attributes measured along the x axis.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(
            self,
            Self::Left | Self::Right | Self::Leading | Self::Trailing | Self::Width | Self::CenterX
        )
    }

    /// Returns true for attributes measured along the y axis.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(
            self,
            Self::Top | Self::Bottom | Self::Height | Self::CenterY | Self::Baseline
        )
    }

    /// Returns true for `Width` and `Height`.
    #[must_use]
    pub const fn is_dimension(self) -> bool {
        matches!(self, Self::Width | Self::Height)
    }

    /// Short lowercase name, used in log output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Left => "left",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Leading => "leading",
            Self::Trailing => "trailing",
            Self::Width => "width",
            Self::Height => "height",
            Self::CenterX => "centerX",
            Self::CenterY => "centerY",
            Self::Baseline => "baseline",
            Self::NotAnAttribute => "none",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One operand of a relation: an attribute of a specific view, or a plain
/// constant.
///
/// The view is held weakly. An `AttributeRef` never keeps a view alive and
/// is meant to be consumed right away by one of the relation builders.
pub enum AttributeRef<V: PlatformView> {
    /// An attribute of a live view.
    View {
        /// Weak handle to the owning view.
        view: V::Weak,
        /// The referenced attribute. Never [`Attribute::NotAnAttribute`].
        attribute: Attribute,
    },
    /// The constant-only operand, with no view and no attribute.
    Constant,
}

impl<V: PlatformView> AttributeRef<V> {
    /// Creates a reference to `attribute` on `view`.
    ///
    /// Passing [`Attribute::NotAnAttribute`] yields [`AttributeRef::Constant`],
    /// so a view can never be paired with the placeholder attribute.
    #[must_use]
    pub fn new(view: &V, attribute: Attribute) -> Self {
        if attribute == Attribute::NotAnAttribute {
            return Self::Constant;
        }
        Self::View {
            view: view.downgrade(),
            attribute,
        }
    }

    /// The constant-only operand.
    #[must_use]
    pub const fn constant() -> Self {
        Self::Constant
    }

    /// The referenced attribute.
    #[must_use]
    pub const fn attribute(&self) -> Attribute {
        match self {
            Self::View { attribute, .. } => *attribute,
            Self::Constant => Attribute::NotAnAttribute,
        }
    }

    /// Upgrades and returns the owning view.
    ///
    /// `None` for [`AttributeRef::Constant`] or when the view was dropped.
    #[must_use]
    pub fn view(&self) -> Option<V> {
        match self {
            Self::View { view, .. } => view.upgrade(),
            Self::Constant => None,
        }
    }

    /// Returns true for [`AttributeRef::Constant`].
    #[must_use]
    pub const fn is_constant(&self) -> bool {
        matches!(self, Self::Constant)
    }
}

impl<V: PlatformView> Clone for AttributeRef<V> {
    fn clone(&self) -> Self {
        match self {
            Self::View { view, attribute } => Self::View {
                view: view.clone(),
                attribute: *attribute,
            },
            Self::Constant => Self::Constant,
        }
    }
}

impl<V: PlatformView> fmt::Debug for AttributeRef<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::View { view, attribute } => f
                .debug_struct("AttributeRef")
                .field("view", view)
                .field("attribute", attribute)
                .finish(),
            Self::Constant => f.write_str("AttributeRef::Constant"),
        }
    }
}

/// Attribute accessors, available on every [`PlatformView`].
///
/// ```ignore
/// let relation = child.top().equal_to(container.top()).constant(8.0);
/// ```
pub trait LayoutAnchors: PlatformView {
    /// Reference to `attribute` on this view.
    fn anchor(&self, attribute: Attribute) -> AttributeRef<Self> {
        AttributeRef::new(self, attribute)
    }

    /// The top edge.
    fn top(&self) -> AttributeRef<Self> {
        self.anchor(Attribute::Top)
    }

    /// The left edge.
    fn left(&self) -> AttributeRef<Self> {
        self.anchor(Attribute::Left)
    }

    /// The right edge.
    fn right(&self) -> AttributeRef<Self> {
        self.anchor(Attribute::Right)
    }

    /// The bottom edge.
    fn bottom(&self) -> AttributeRef<Self> {
        self.anchor(Attribute::Bottom)
    }

    /// The leading edge.
    fn leading(&self) -> AttributeRef<Self> {
        self.anchor(Attribute::Leading)
    }

    /// The trailing edge.
    fn trailing(&self) -> AttributeRef<Self> {
        self.anchor(Attribute::Trailing)
    }

    /// The width.
    fn width(&self) -> AttributeRef<Self> {
        self.anchor(Attribute::Width)
    }

    /// The height.
    fn height(&self) -> AttributeRef<Self> {
        self.anchor(Attribute::Height)
    }

    /// The horizontal center.
    fn center_x(&self) -> AttributeRef<Self> {
        self.anchor(Attribute::CenterX)
    }

    /// The vertical center.
    fn center_y(&self) -> AttributeRef<Self> {
        self.anchor(Attribute::CenterY)
    }

    /// The text baseline.
    fn baseline(&self) -> AttributeRef<Self> {
        self.anchor(Attribute::Baseline)
    }
}

impl<V: PlatformView> LayoutAnchors for V {}
