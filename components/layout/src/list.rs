//! Linear list layout.
//!
//! [`ListLayout`] lines views up end to end inside a container:
//!
//! ```text
//! vertical                 horizontal
//! ┌───────────┐            ┌───────────────────┐
//! │ ┌───────┐ │            │┌───┐┌───┐┌───┐    │
//! │ │   a   │ │            ││ a ││ b ││ c │    │
//! │ ├───────┤ │            │└───┘└───┘└───┘    │
//! │ │   b   │ │            └───────────────────┘
//! │ └───────┘ │
//! └───────────┘
//! ```
//!
//! Along the axis, each child's leading edge is tied to the previous child's
//! trailing edge (the first one to the container). Across the axis, both
//! edges of every child are pinned to the container. All of these use a soft
//! priority so impossible sizes degrade the layout instead of breaking it.

use alloc::{boxed::Box, vec::Vec};
use core::fmt;

use autolayout_core::{AttributeRef, LayoutAnchors, PlatformView, Priority, Relation};

use crate::{Axis, Layout};

/// Closes the last child against the container's trailing edge.
///
/// Receives the last child's trailing attribute and the container's.
/// `AttributeRef::equal_to` pins the list flush; `AttributeRef::less_than_or_equal_to`
/// leaves a flexible gap.
pub type TrailingRelation<'a, V> =
    Box<dyn FnOnce(AttributeRef<V>, AttributeRef<V>) -> Relation<V> + 'a>;

/// Tunables for [`ListLayout`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListLayoutConfig {
    /// Priority given to every generated relation.
    pub priority: Priority,
}

impl Default for ListLayoutConfig {
    fn default() -> Self {
        Self {
            priority: Priority::DEFAULT_HIGH,
        }
    }
}

/// A one-shot list of views chained along an [`Axis`].
///
/// The constraints are generated once, at construction. To change the list,
/// build a new `ListLayout`.
pub struct ListLayout<V: PlatformView> {
    views: Vec<V>,
    container: V,
    axis: Axis,
    axis_constraints: Vec<V::Constraint>,
    off_axis_constraints: Vec<V::Constraint>,
}

impl<V: PlatformView> ListLayout<V> {
    /// Lays `views` out inside `container` with the default configuration and
    /// no trailing relation.
    #[must_use]
    pub fn new(views: impl IntoIterator<Item = V>, container: V, axis: Axis) -> Self {
        Self::builder(container, axis).build(views)
    }

    /// Starts configuring a list inside `container`.
    #[must_use]
    pub fn builder<'a>(container: V, axis: Axis) -> ListLayoutBuilder<'a, V> {
        ListLayoutBuilder {
            container,
            axis,
            config: ListLayoutConfig::default(),
            trailing: None,
        }
    }

    /// The container the views were placed in.
    #[must_use]
    pub const fn container(&self) -> &V {
        &self.container
    }

    /// The stacking axis.
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// Constraints along the axis, including the trailing one if any.
    #[must_use]
    pub fn axis_constraints(&self) -> &[V::Constraint] {
        &self.axis_constraints
    }

    /// Constraints pinning the children across the axis.
    #[must_use]
    pub fn off_axis_constraints(&self) -> &[V::Constraint] {
        &self.off_axis_constraints
    }

    /// Registers every generated constraint on the container.
    ///
    /// # Errors
    ///
    /// Returns the platform's error for the first constraint it rejects.
    /// Constraints registered before it stay registered.
    pub fn activate(&self) -> Result<(), V::Error> {
        for constraint in self.constraints() {
            self.container.add_constraint(constraint)?;
        }
        tracing::debug!(
            container = ?self.container,
            count = self.axis_constraints.len() + self.off_axis_constraints.len(),
            "activated list layout"
        );
        Ok(())
    }
}

impl<V: PlatformView> Layout for ListLayout<V> {
    type View = V;

    fn views(&self) -> &[V] {
        &self.views
    }

    fn constraints(&self) -> impl Iterator<Item = &V::Constraint> {
        self.axis_constraints
            .iter()
            .chain(self.off_axis_constraints.iter())
    }
}

impl<V: PlatformView> fmt::Debug for ListLayout<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListLayout")
            .field("views", &self.views)
            .field("container", &self.container)
            .field("axis", &self.axis)
            .field("axis_constraints", &self.axis_constraints)
            .field("off_axis_constraints", &self.off_axis_constraints)
            .finish()
    }
}

/// Configures and builds a [`ListLayout`].
pub struct ListLayoutBuilder<'a, V: PlatformView> {
    container: V,
    axis: Axis,
    config: ListLayoutConfig,
    trailing: Option<TrailingRelation<'a, V>>,
}

impl<'a, V: PlatformView> ListLayoutBuilder<'a, V> {
    /// Replaces the whole configuration.
    #[must_use]
    pub fn config(mut self, config: ListLayoutConfig) -> Self {
        self.config = config;
        self
    }

    /// Priority for every generated relation.
    #[must_use]
    pub fn priority(mut self, priority: impl Into<Priority>) -> Self {
        self.config.priority = priority.into();
        self
    }

    /// Closes the last child against the container with `relation`.
    ///
    /// Not called when the list is empty.
    #[must_use]
    pub fn trailing(
        mut self,
        relation: impl FnOnce(AttributeRef<V>, AttributeRef<V>) -> Relation<V> + 'a,
    ) -> Self {
        self.trailing = Some(Box::new(relation));
        self
    }

    /// Places `views` in the container and generates their constraints.
    ///
    /// Every view that is not already a direct subview of the container is
    /// moved into it first.
    ///
    /// # Panics
    ///
    /// Panics if the trailing relation returns a relation whose left-hand
    /// side is a constant.
    #[must_use]
    pub fn build(self, views: impl IntoIterator<Item = V>) -> ListLayout<V> {
        let Self {
            container,
            axis,
            config,
            trailing,
        } = self;
        let views: Vec<V> = views.into_iter().collect();

        for view in &views {
            let attached = view
                .superview()
                .is_some_and(|parent| parent.same_view(&container));
            if !attached {
                tracing::debug!(?view, ?container, "moving view into list container");
                container.add_subview(view);
            }
        }

        let leading = axis.leading_attribute();
        let trailing_edge = axis.trailing_attribute();

        let mut axis_relations = Vec::with_capacity(views.len() + 1);
        let mut off_axis_relations = Vec::with_capacity(views.len() * 2);
        let mut previous: Option<&V> = None;

        for view in &views {
            let anchor = previous.map_or_else(
                || container.anchor(leading),
                |previous| previous.anchor(trailing_edge),
            );
            axis_relations.push(view.anchor(leading).equal_to(anchor).priority(config.priority));

            for attribute in axis.off_axis_attributes() {
                off_axis_relations.push(
                    view.anchor(attribute)
                        .equal_to(container.anchor(attribute))
                        .priority(config.priority),
                );
            }

            previous = Some(view);
        }

        if let (Some(last), Some(trailing)) = (previous, trailing) {
            let relation = trailing(last.anchor(trailing_edge), container.anchor(trailing_edge));
            axis_relations.push(relation.priority(config.priority));
        }

        let axis_constraints: Vec<V::Constraint> =
            axis_relations.iter().map(Relation::to_constraint).collect();
        let off_axis_constraints: Vec<V::Constraint> =
            off_axis_relations.iter().map(Relation::to_constraint).collect();

        tracing::debug!(
            ?axis,
            views = views.len(),
            axis_constraints = axis_constraints.len(),
            off_axis_constraints = off_axis_constraints.len(),
            "built list layout"
        );

        ListLayout {
            views,
            container,
            axis,
            axis_constraints,
            off_axis_constraints,
        }
    }
}

impl<V: PlatformView> fmt::Debug for ListLayoutBuilder<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListLayoutBuilder")
            .field("container", &self.container)
            .field("axis", &self.axis)
            .field("config", &self.config)
            .field("trailing", &self.trailing.is_some())
            .finish()
    }
}
