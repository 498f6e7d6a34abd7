//! Rc-backed view tree.

use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};

use autolayout_core::{PlatformView, WeakView};

use crate::{MemoryConstraint, MemoryError};

struct Node {
    name: String,
    parent: RefCell<Weak<Node>>,
    children: RefCell<Vec<MemoryView>>,
    constraints: RefCell<Vec<MemoryConstraint>>,
}

/// A view in a headless, in-memory hierarchy.
///
/// Cloning yields another handle to the same view. Parents own their
/// children; children refer to their parent weakly.
#[derive(Clone)]
pub struct MemoryView(Rc<Node>);

impl MemoryView {
    /// Creates a detached view. `name` only shows up in debug output and
    /// errors.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(Rc::new(Node {
            name: name.into(),
            parent: RefCell::new(Weak::new()),
            children: RefCell::new(Vec::new()),
            constraints: RefCell::new(Vec::new()),
        }))
    }

    /// The debug name given at creation.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Constraints registered on this view, in registration order.
    #[must_use]
    pub fn constraints(&self) -> Vec<MemoryConstraint> {
        self.0.constraints.borrow().clone()
    }

    /// The topmost ancestor, or the view itself when detached.
    #[must_use]
    pub fn root(&self) -> Self {
        let mut current = self.clone();
        while let Some(parent) = current.superview() {
            current = parent;
        }
        current
    }

    /// The closest view that is an ancestor of (or equal to) both views.
    #[must_use]
    pub fn common_ancestor(&self, other: &Self) -> Option<Self> {
        let mut candidate = Some(self.clone());
        while let Some(view) = candidate {
            if other.is_descendant_of(&view) {
                return Some(view);
            }
            candidate = view.superview();
        }
        None
    }

    /// Returns true if `ancestor` is this view or one of its ancestors.
    #[must_use]
    pub fn is_descendant_of(&self, ancestor: &Self) -> bool {
        let mut current = Some(self.clone());
        while let Some(view) = current {
            if view.same_view(ancestor) {
                return true;
            }
            current = view.superview();
        }
        false
    }

    /// Detaches this view from its parent, if any.
    pub fn remove_from_superview(&self) {
        let Some(parent) = self.superview() else {
            return;
        };
        parent
            .0
            .children
            .borrow_mut()
            .retain(|child| !child.same_view(self));
        *self.0.parent.borrow_mut() = Weak::new();
    }

    pub(crate) fn weak(&self) -> WeakMemoryView {
        WeakMemoryView(Rc::downgrade(&self.0))
    }
}

impl PartialEq for MemoryView {
    fn eq(&self, other: &Self) -> bool {
        self.same_view(other)
    }
}

impl Eq for MemoryView {}

impl fmt::Debug for MemoryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.name)
    }
}

impl PlatformView for MemoryView {
    type Weak = WeakMemoryView;
    type Constraint = MemoryConstraint;
    type Error = MemoryError;

    fn downgrade(&self) -> WeakMemoryView {
        self.weak()
    }

    fn superview(&self) -> Option<Self> {
        self.0.parent.borrow().upgrade().map(Self)
    }

    fn subviews(&self) -> Vec<Self> {
        self.0.children.borrow().clone()
    }

    fn add_subview(&self, child: &Self) {
        assert!(
            !self.is_descendant_of(child),
            "cannot add `{}` as a subview of its own descendant `{}`",
            child.name(),
            self.name()
        );
        child.remove_from_superview();
        *child.0.parent.borrow_mut() = Rc::downgrade(&self.0);
        self.0.children.borrow_mut().push(child.clone());
    }

    /// Accepts the constraint when this view and every participant belong to
    /// the same tree.
    fn add_constraint(&self, constraint: &MemoryConstraint) -> Result<(), MemoryError> {
        let root = self.root();
        for participant in constraint.participants() {
            let view = participant.get().ok_or(MemoryError::ViewDropped)?;
            if !view.root().same_view(&root) {
                tracing::warn!(view = %view.name(), owner = %self.name(), "constraint rejected");
                return Err(MemoryError::NoCommonAncestor {
                    first: self.name().to_owned(),
                    second: view.name().to_owned(),
                });
            }
        }
        self.0.constraints.borrow_mut().push(constraint.clone());
        Ok(())
    }

    fn same_view(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Weak handle to a [`MemoryView`].
#[derive(Clone)]
pub struct WeakMemoryView(Weak<Node>);

impl WeakMemoryView {
    /// Upgrades the handle.
    #[must_use]
    pub fn get(&self) -> Option<MemoryView> {
        self.0.upgrade().map(MemoryView)
    }
}

impl WeakView<MemoryView> for WeakMemoryView {
    fn upgrade(&self) -> Option<MemoryView> {
        self.get()
    }
}

impl PartialEq for WeakMemoryView {
    fn eq(&self, other: &Self) -> bool {
        Weak::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for WeakMemoryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(view) => f.write_str(view.name()),
            None => f.write_str("<dropped>"),
        }
    }
}
