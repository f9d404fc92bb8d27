//! Per-instance validation state and its transition function.

/// Validation state owned by one [`WithValidate`](crate::WithValidate).
///
/// The state is an immutable value: transitions go through
/// [`reduce`](FieldState::reduce), which returns the next state, and states
/// are compared by value when deciding whether to re-render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    touched: bool,
    error_message: String,
}

/// A transition applied to [`FieldState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldAction {
    /// The field lost focus.
    Blurred,
    /// Validation produced a new message (empty when valid).
    Validated(String),
}

impl FieldState {
    /// Whether the field has lost focus at least once.
    pub fn touched(&self) -> bool {
        self.touched
    }

    /// The current error message, empty when valid.
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Whether the last validation passed.
    pub fn is_valid(&self) -> bool {
        self.error_message.is_empty()
    }

    /// The message a view should display.
    ///
    /// Errors stay hidden until the field is touched unless `show_errors`
    /// forces them.
    pub fn visible_error(&self, show_errors: bool) -> &str {
        if self.touched || show_errors {
            &self.error_message
        } else {
            ""
        }
    }

    /// Compute the state after `action`.
    ///
    /// `touched` never goes back to false.
    pub fn reduce(&self, action: FieldAction) -> FieldState {
        match action {
            FieldAction::Blurred => FieldState {
                touched: true,
                error_message: self.error_message.clone(),
            },
            FieldAction::Validated(error_message) => FieldState {
                touched: self.touched,
                error_message,
            },
        }
    }
}
