//! Render delegation to the wrapped view.

use crate::event::BlurHandler;

/// Everything the wrapped view receives.
///
/// The validation-only props never appear here. `error_message` is already
/// filtered: it is empty until the field is touched or `show_errors` is set.
pub struct ViewProps<'a, T, P> {
    pub name: &'a str,
    pub value: &'a T,
    pub view: &'a P,
    pub error_message: &'a str,
    pub on_blur: &'a BlurHandler,
}

/// A presentational unit wrapped by [`WithValidate`](crate::WithValidate).
///
/// Implemented for plain functions and closures taking [`ViewProps`].
pub trait FieldView<T, P> {
    /// Whatever the host framework renders into.
    type Output;

    fn render(&self, props: ViewProps<'_, T, P>) -> Self::Output;
}

impl<T, P, O, F> FieldView<T, P> for F
where
    F: Fn(ViewProps<'_, T, P>) -> O,
{
    type Output = O;

    fn render(&self, props: ViewProps<'_, T, P>) -> O {
        self(props)
    }
}
