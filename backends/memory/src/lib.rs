//! Headless platform for `autolayout`.
//!
//! [`MemoryView`] implements the platform traits on a plain `Rc` tree. It
//! records installed constraints instead of solving them, which makes it
//! useful for tests and for inspecting what a layout generates:
//!
//! ```rust
//! use autolayout_core::{LayoutAnchors, PlatformView};
//! use autolayout_memory::MemoryView;
//!
//! let parent = MemoryView::new("parent");
//! let child = MemoryView::new("child");
//! parent.add_subview(&child);
//!
//! child.left().equal_to(parent.left()).constant(8).install().unwrap();
//! assert_eq!(child.constraints().len(), 1);
//! ```
//!
//! Like a real toolkit, it rejects constraints between views that share no
//! common ancestor.

mod constraint;
mod error;
mod view;

pub use constraint::MemoryConstraint;
pub use error::MemoryError;
pub use view::{MemoryView, WeakMemoryView};
