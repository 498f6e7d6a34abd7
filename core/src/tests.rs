//! Relation building and installation tests.
//!
//! These run against a minimal in-crate view tree so the core can be tested
//! without a toolkit.

use alloc::{
    rc::{Rc, Weak},
    string::{String, ToString},
    vec::Vec,
};
use core::{
    cell::{Cell, RefCell},
    fmt,
};

use crate::{
    Attribute, AttributeRef, LayoutAnchors, LayoutOption, PlatformConstraint, PlatformView,
    Priority, Relation, RelationOperator, WeakView, install_all,
};

// ============================================================================
// Test Infrastructure
// ============================================================================

/// A view that records the constraints registered on it.
#[derive(Clone)]
struct MockView(Rc<MockNode>);

struct MockNode {
    name: String,
    parent: RefCell<Weak<MockNode>>,
    children: RefCell<Vec<MockView>>,
    constraints: RefCell<Vec<MockConstraint>>,
    rejects: Cell<bool>,
}

impl MockView {
    fn new(name: &str) -> Self {
        Self(Rc::new(MockNode {
            name: name.to_string(),
            parent: RefCell::new(Weak::new()),
            children: RefCell::new(Vec::new()),
            constraints: RefCell::new(Vec::new()),
            rejects: Cell::new(false),
        }))
    }

    fn installed(&self) -> Vec<MockConstraint> {
        self.0.constraints.borrow().clone()
    }
}

impl fmt::Debug for MockView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MockView({})", self.0.name)
    }
}

#[derive(Clone, Debug)]
struct MockWeak(Weak<MockNode>);

impl WeakView<MockView> for MockWeak {
    fn upgrade(&self) -> Option<MockView> {
        self.0.upgrade().map(MockView)
    }
}

#[derive(Clone, Debug, PartialEq)]
struct MockConstraint {
    item: String,
    attribute: Attribute,
    operator: RelationOperator,
    to_item: Option<String>,
    to_attribute: Attribute,
    multiplier: f64,
    constant: f64,
    priority: Option<Priority>,
}

impl PlatformConstraint<MockView> for MockConstraint {
    fn new(
        item: &MockView,
        attribute: Attribute,
        operator: RelationOperator,
        to_item: Option<&MockView>,
        to_attribute: Attribute,
        multiplier: f64,
        constant: f64,
    ) -> Self {
        Self {
            item: item.0.name.clone(),
            attribute,
            operator,
            to_item: to_item.map(|v| v.0.name.clone()),
            to_attribute,
            multiplier,
            constant,
            priority: None,
        }
    }

    fn set_priority(&mut self, priority: Priority) {
        self.priority = Some(priority);
    }
}

#[derive(Debug)]
struct Rejected;

impl fmt::Display for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("rejected")
    }
}

impl core::error::Error for Rejected {}

impl PlatformView for MockView {
    type Weak = MockWeak;
    type Constraint = MockConstraint;
    type Error = Rejected;

    fn downgrade(&self) -> MockWeak {
        MockWeak(Rc::downgrade(&self.0))
    }

    fn superview(&self) -> Option<Self> {
        self.0.parent.borrow().upgrade().map(MockView)
    }

    fn subviews(&self) -> Vec<Self> {
        self.0.children.borrow().clone()
    }

    fn add_subview(&self, child: &Self) {
        *child.0.parent.borrow_mut() = Rc::downgrade(&self.0);
        self.0.children.borrow_mut().push(child.clone());
    }

    fn add_constraint(&self, constraint: &MockConstraint) -> Result<(), Rejected> {
        if self.0.rejects.get() {
            return Err(Rejected);
        }
        self.0.constraints.borrow_mut().push(constraint.clone());
        Ok(())
    }

    fn same_view(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

fn assert_refers_to(reference: &AttributeRef<MockView>, view: &MockView, attribute: Attribute) {
    let referenced = reference.view().expect("reference should hold a live view");
    assert!(referenced.same_view(view), "{reference:?} does not refer to {view:?}");
    assert_eq!(reference.attribute(), attribute);
}

// ============================================================================
// Attribute References
// ============================================================================

#[test]
fn accessors_bind_view_and_attribute() {
    let view = MockView::new("view");
    let accessors: [(AttributeRef<MockView>, Attribute); 11] = [
        (view.top(), Attribute::Top),
        (view.left(), Attribute::Left),
        (view.right(), Attribute::Right),
        (view.bottom(), Attribute::Bottom),
        (view.leading(), Attribute::Leading),
        (view.trailing(), Attribute::Trailing),
        (view.width(), Attribute::Width),
        (view.height(), Attribute::Height),
        (view.center_x(), Attribute::CenterX),
        (view.center_y(), Attribute::CenterY),
        (view.baseline(), Attribute::Baseline),
    ];

    for (reference, attribute) in &accessors {
        assert_refers_to(reference, &view, *attribute);
    }
    for attribute in Attribute::ALL {
        assert_refers_to(&view.anchor(attribute), &view, attribute);
    }
}

#[test]
fn placeholder_attribute_never_pairs_with_a_view() {
    let view = MockView::new("view");
    let reference = view.anchor(Attribute::NotAnAttribute);
    assert!(reference.is_constant());
    assert!(reference.view().is_none());
}

#[test]
fn references_do_not_keep_views_alive() {
    let view = MockView::new("view");
    let reference = view.width();
    drop(view);
    assert!(reference.view().is_none());
    assert_eq!(reference.attribute(), Attribute::Width);
}

#[test]
fn attribute_axes() {
    assert!(Attribute::Leading.is_horizontal());
    assert!(!Attribute::Leading.is_vertical());
    assert!(Attribute::Baseline.is_vertical());
    assert!(Attribute::Height.is_dimension());
    assert!(!Attribute::CenterX.is_dimension());
    assert!(!Attribute::NotAnAttribute.is_horizontal());
    assert!(!Attribute::NotAnAttribute.is_vertical());
}

// ============================================================================
// Relation Builders
// ============================================================================

#[test]
fn attribute_relations_use_defaults() {
    let a = MockView::new("a");
    let b = MockView::new("b");

    let cases = [
        (a.left().equal_to(b.left()), RelationOperator::Equal),
        (a.left().less_than_or_equal_to(b.left()), RelationOperator::LessThanOrEqual),
        (a.left().greater_than_or_equal_to(b.left()), RelationOperator::GreaterThanOrEqual),
    ];

    for (relation, operator) in cases {
        assert_eq!(relation.operator(), operator);
        assert_refers_to(relation.from(), &a, Attribute::Left);
        assert_refers_to(relation.to(), &b, Attribute::Left);
        assert_eq!(relation.constant_value(), 0.0);
        assert_eq!(relation.multiplier_value(), 1.0);
        assert_eq!(relation.priority_value(), Priority::REQUIRED);
    }
}

#[test]
fn constant_relations_use_constant_operand() {
    let view = MockView::new("view");

    let cases = [
        (view.height().equal_to_constant(14), RelationOperator::Equal, 14.0),
        (view.height().less_than_or_equal_to_constant(20.5), RelationOperator::LessThanOrEqual, 20.5),
        (view.height().greater_than_or_equal_to_constant(-3), RelationOperator::GreaterThanOrEqual, -3.0),
    ];

    for (relation, operator, constant) in cases {
        assert_eq!(relation.operator(), operator);
        assert_refers_to(relation.from(), &view, Attribute::Height);
        assert!(relation.to().is_constant());
        assert_eq!(relation.to().attribute(), Attribute::NotAnAttribute);
        assert_eq!(relation.constant_value(), constant);
        assert_eq!(relation.multiplier_value(), 1.0);
        assert_eq!(relation.priority_value(), Priority::REQUIRED);
    }
}

// ============================================================================
// Modifiers
// ============================================================================

#[test]
fn later_modifier_of_same_kind_wins() {
    let a = MockView::new("a");
    let b = MockView::new("b");

    let relation = a
        .top()
        .equal_to(b.top())
        .priority(Priority::DEFAULT_LOW)
        .priority(Priority::DEFAULT_HIGH);
    assert_eq!(relation.priority_value(), Priority::DEFAULT_HIGH);

    let relation = a.top().equal_to(b.top()).constant(4).constant(-8.0);
    assert_eq!(relation.constant_value(), -8.0);
}

#[test]
fn distinct_modifiers_commute() {
    let a = MockView::new("a");
    let b = MockView::new("b");

    let first = a
        .width()
        .equal_to(b.width())
        .with(LayoutOption::Constant(12.0))
        .with(LayoutOption::Multiplier(0.5));
    let second = a
        .width()
        .equal_to(b.width())
        .with(LayoutOption::Multiplier(0.5))
        .with(LayoutOption::Constant(12.0));

    assert_eq!(first.constant_value(), second.constant_value());
    assert_eq!(first.multiplier_value(), second.multiplier_value());
    assert_eq!(first.priority_value(), second.priority_value());
    assert_eq!(first.operator(), second.operator());
    assert_eq!(first.to_constraint(), second.to_constraint());
}

#[test]
fn modifiers_leave_the_original_untouched() {
    let a = MockView::new("a");
    let b = MockView::new("b");

    let base = a.center_y().equal_to(b.center_y());
    let modified = base.clone().constant(-10.0).priority(Priority::new(500.0));

    assert_eq!(base.constant_value(), 0.0);
    assert_eq!(base.priority_value(), Priority::REQUIRED);
    assert_eq!(modified.constant_value(), -10.0);
    assert_eq!(modified.priority_value().value(), 500.0);
}

// ============================================================================
// Installation
// ============================================================================

#[test]
fn install_registers_on_the_left_hand_view() {
    let parent = MockView::new("parent");
    let child = MockView::new("child");
    parent.add_subview(&child);

    let constraint = child
        .right()
        .less_than_or_equal_to(parent.right())
        .multiplier(2)
        .constant(-10.0)
        .priority(Priority::DEFAULT_HIGH)
        .install()
        .unwrap();

    let expected = MockConstraint {
        item: "child".to_string(),
        attribute: Attribute::Right,
        operator: RelationOperator::LessThanOrEqual,
        to_item: Some("parent".to_string()),
        to_attribute: Attribute::Right,
        multiplier: 2.0,
        constant: -10.0,
        priority: Some(Priority::DEFAULT_HIGH),
    };
    assert_eq!(constraint, expected);
    assert_eq!(child.installed(), [expected]);
    assert!(parent.installed().is_empty());
}

#[test]
fn install_constant_relation_has_no_second_item() {
    let view = MockView::new("view");

    let constraint = view.height().equal_to_constant(14).install().unwrap();

    assert_eq!(constraint.to_item, None);
    assert_eq!(constraint.to_attribute, Attribute::NotAnAttribute);
    assert_eq!(constraint.constant, 14.0);
    assert_eq!(constraint.priority, Some(Priority::REQUIRED));
}

#[test]
fn to_constraint_does_not_register() {
    let view = MockView::new("view");
    let _constraint = view.width().equal_to_constant(10).to_constraint();
    assert!(view.installed().is_empty());
}

#[test]
fn install_all_preserves_order() {
    let parent = MockView::new("parent");
    let child = MockView::new("child");
    parent.add_subview(&child);

    let constraints = install_all([
        parent.left().equal_to(child.left()),
        parent.right().equal_to(child.right()).priority(Priority::DEFAULT_HIGH),
        parent.center_y().equal_to(child.center_y()).constant(-10.0),
        child.height().equal_to_constant(14),
    ])
    .unwrap();

    let attributes: Vec<Attribute> = constraints.iter().map(|c| c.attribute).collect();
    assert_eq!(
        attributes,
        [Attribute::Left, Attribute::Right, Attribute::CenterY, Attribute::Height]
    );
    assert_eq!(parent.installed(), constraints[..3]);
    assert_eq!(child.installed(), constraints[3..]);
}

#[test]
fn install_all_keeps_earlier_constraints_on_failure() {
    let accepting = MockView::new("accepting");
    let rejecting = MockView::new("rejecting");
    rejecting.0.rejects.set(true);

    let result = install_all([
        accepting.width().equal_to_constant(10),
        rejecting.width().equal_to_constant(20),
        accepting.height().equal_to_constant(30),
    ]);

    assert!(result.is_err());
    assert_eq!(accepting.installed().len(), 1);
    assert_eq!(accepting.installed()[0].attribute, Attribute::Width);
}

#[test]
fn install_surfaces_platform_error() {
    let view = MockView::new("view");
    view.0.rejects.set(true);
    let error = view.width().equal_to_constant(1).install().unwrap_err();
    assert_eq!(error.to_string(), "rejected");
}

#[test]
#[should_panic(expected = "left-hand side is a constant")]
fn installing_from_a_constant_panics() {
    let view = MockView::new("view");
    let relation: Relation<MockView> =
        AttributeRef::constant().equal_to(view.width());
    let _ = relation.install();
}

#[test]
#[should_panic(expected = "was dropped")]
fn installing_after_the_view_is_dropped_panics() {
    let view = MockView::new("view");
    let relation = view.width().equal_to_constant(10);
    drop(view);
    let _ = relation.install();
}

#[test]
#[should_panic(expected = "was dropped")]
fn installing_against_a_dropped_view_panics() {
    let view = MockView::new("view");
    let other = MockView::new("other");
    let relation = view.width().equal_to(other.width());
    drop(other);
    let _ = relation.install();
}
