//! Constraint priorities.

use core::fmt;

/// How strongly the layout engine must honor a constraint.
///
/// Priorities live in `0.0..=1000.0`. [`Priority::REQUIRED`] marks a
/// mandatory constraint; anything lower may be broken when the constraint
/// set cannot be satisfied as a whole.
///
/// Values outside the range are clamped on construction, and NaN becomes
/// [`Priority::REQUIRED`]. Both cases are logged at `warn` level.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "f32", into = "f32")
)]
pub struct Priority(f32);

impl Priority {
    /// Lowest valid priority.
    pub const MIN_VALUE: f32 = 0.0;
    /// Highest valid priority.
    pub const MAX_VALUE: f32 = 1000.0;

    /// A mandatory constraint.
    pub const REQUIRED: Self = Self(1000.0);
    /// The level a button uses to resist compression.
    pub const DEFAULT_HIGH: Self = Self(750.0);
    /// The level a button uses to hug its content.
    pub const DEFAULT_LOW: Self = Self(250.0);
    /// The level at which a view tries to reach its fitting size.
    pub const FITTING_SIZE_LEVEL: Self = Self(50.0);

    /// Creates a priority, clamping `value` into the valid range.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            tracing::warn!("NaN layout priority replaced with required");
            return Self::REQUIRED;
        }
        let clamped = value.clamp(Self::MIN_VALUE, Self::MAX_VALUE);
        if clamped != value {
            tracing::warn!(
                requested = value,
                clamped,
                "layout priority out of range"
            );
        }
        Self(clamped)
    }

    /// The raw priority value.
    #[must_use]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Returns true for [`Priority::REQUIRED`].
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_required(self) -> bool {
        self.0 == Self::MAX_VALUE
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::REQUIRED
    }
}

impl From<f32> for Priority {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl From<u16> for Priority {
    fn from(value: u16) -> Self {
        Self::new(f32::from(value))
    }
}

impl From<Priority> for f32 {
    fn from(priority: Priority) -> Self {
        priority.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
