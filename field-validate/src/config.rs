//! Application-wide defaults for validated fields.

use std::time::Duration;

/// Debounce window used when a field does not set one.
pub const DEFAULT_VALIDATION_DELAY: Duration = Duration::from_millis(200);

/// Defaults applied when building [`FieldProps`](crate::FieldProps).
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use field_validate::{FieldDefaults, FieldProps};
///
/// let defaults = FieldDefaults::new()
///     .validation_delay(Duration::from_millis(350))
///     .show_errors(true);
///
/// let props = FieldProps::with_defaults(&defaults, "email", String::new(), ());
/// assert_eq!(props.validation_delay, Duration::from_millis(350));
/// assert!(props.show_errors);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDefaults {
    /// Debounce window between the last trigger and validation.
    pub validation_delay: Duration,

    /// Show errors before the field has been touched.
    pub show_errors: bool,
}

impl Default for FieldDefaults {
    fn default() -> Self {
        Self {
            validation_delay: DEFAULT_VALIDATION_DELAY,
            show_errors: false,
        }
    }
}

impl FieldDefaults {
    /// Create defaults with a 200 ms delay and hidden untouched errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the debounce window.
    pub fn validation_delay(mut self, delay: Duration) -> Self {
        self.validation_delay = delay;
        self
    }

    /// Force errors to show before the first blur.
    pub fn show_errors(mut self, show: bool) -> Self {
        self.show_errors = show;
        self
    }
}
