//! Props accepted by a validated field.

use std::time::Duration;

use crate::callback::Callback;
use crate::config::FieldDefaults;
use crate::event::{BlurEvent, ValidationEvent};
use crate::validator::{Validate, Validator};

/// Validation configuration plus the props forwarded to the wrapped view.
///
/// `validate`, `on_blur`, `on_validate`, `show_errors` and
/// `validation_delay` are consumed by the decorator and never reach the
/// view. `name`, `value` and `view` are forwarded.
///
/// Callbacks and validators compare by identity, everything else by
/// [`PartialEq`].
#[derive(Debug, Clone)]
pub struct FieldProps<T, P = ()> {
    /// Passed through to `on_validate`.
    pub name: String,
    /// Value under validation.
    pub value: T,
    /// Validator configuration. `None` always passes.
    pub validate: Option<Validate<T>>,
    /// Show errors before the field is touched.
    pub show_errors: bool,
    /// Debounce window, read once when the field is constructed.
    pub validation_delay: Duration,
    /// Notified on every change of the error message.
    pub on_validate: Option<Callback<ValidationEvent>>,
    /// Receives every blur event after the field has handled it.
    pub on_blur: Option<Callback<BlurEvent>>,
    /// Remaining view props, forwarded untouched.
    pub view: P,
}

impl<T> FieldProps<T, ()> {
    /// Props with default settings and no extra view props.
    pub fn new(name: impl Into<String>, value: T) -> Self {
        Self::with_defaults(&FieldDefaults::default(), name, value, ())
    }
}

impl<T, P> FieldProps<T, P> {
    /// Props built from application-wide defaults.
    pub fn with_defaults(defaults: &FieldDefaults, name: impl Into<String>, value: T, view: P) -> Self {
        Self {
            name: name.into(),
            value,
            validate: None,
            show_errors: defaults.show_errors,
            validation_delay: defaults.validation_delay,
            on_validate: None,
            on_blur: None,
            view,
        }
    }

    /// Replace the value.
    pub fn value(mut self, value: T) -> Self {
        self.value = value;
        self
    }

    /// Set the validator configuration.
    pub fn validate(mut self, validate: impl Into<Validate<T>>) -> Self {
        self.validate = Some(validate.into());
        self
    }

    /// Set a single validator from a closure.
    pub fn validator<F>(self, f: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.validate(Validator::new(f))
    }

    /// Clear the validator configuration.
    pub fn without_validate(mut self) -> Self {
        self.validate = None;
        self
    }

    /// Force errors to show before the first blur.
    pub fn show_errors(mut self, show: bool) -> Self {
        self.show_errors = show;
        self
    }

    /// Set the debounce window.
    pub fn validation_delay(mut self, delay: Duration) -> Self {
        self.validation_delay = delay;
        self
    }

    /// Set the validity sink.
    pub fn on_validate(mut self, callback: Callback<ValidationEvent>) -> Self {
        self.on_validate = Some(callback);
        self
    }

    /// Set the external blur handler.
    pub fn on_blur(mut self, callback: Callback<BlurEvent>) -> Self {
        self.on_blur = Some(callback);
        self
    }

    /// Replace the forwarded view props.
    pub fn view<Q>(self, view: Q) -> FieldProps<T, Q> {
        FieldProps {
            name: self.name,
            value: self.value,
            validate: self.validate,
            show_errors: self.show_errors,
            validation_delay: self.validation_delay,
            on_validate: self.on_validate,
            on_blur: self.on_blur,
            view,
        }
    }
}

impl<T: PartialEq, P: PartialEq> FieldProps<T, P> {
    /// Whether any prop other than `validate` differs from `other`.
    pub fn differs_ignoring_validate(&self, other: &Self) -> bool {
        self.name != other.name
            || self.value != other.value
            || self.show_errors != other.show_errors
            || self.validation_delay != other.validation_delay
            || self.on_validate != other.on_validate
            || self.on_blur != other.on_blur
            || self.view != other.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> FieldProps<String> {
        FieldProps::new("email", String::new())
    }

    #[test]
    fn test_new_uses_defaults() {
        let props = base();
        assert_eq!(props.validation_delay, Duration::from_millis(200));
        assert!(!props.show_errors);
        assert!(props.validate.is_none());
    }

    #[test]
    fn test_clone_is_not_different() {
        let props = base()
            .validator(|v: &String| v.clone())
            .on_validate(Callback::new(|_: ValidationEvent| {}));

        assert!(!props.clone().differs_ignoring_validate(&props));
    }

    #[test]
    fn test_value_change_is_different() {
        let props = base();
        assert!(props.clone().value("a".into()).differs_ignoring_validate(&props));
    }

    #[test]
    fn test_new_callback_is_different() {
        let props = base().on_blur(Callback::new(|_: BlurEvent| {}));
        let next = props.clone().on_blur(Callback::new(|_: BlurEvent| {}));

        assert!(next.differs_ignoring_validate(&props));
    }

    #[test]
    fn test_validate_is_ignored() {
        let props = base().validator(|_: &String| String::new());
        let next = props.clone().validator(|_: &String| "other".to_string());

        assert!(!next.differs_ignoring_validate(&props));
    }

    #[test]
    fn test_view_props_are_compared() {
        let props = base().view("placeholder");
        assert!(props.clone().view("other").differs_ignoring_validate(&props));
        assert!(!props.clone().differs_ignoring_validate(&props));
    }
}
