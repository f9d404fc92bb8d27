//! Validator handles and the single-or-many validator configuration.
//!
//! A validator maps the current value to an error message, where an empty
//! string means the value is valid. Callers configure a field with either one
//! validator or an ordered list of them; lists may contain inert `None`
//! entries (typically produced by `cond.then(|| rule)`), which are skipped.
//!
//! # Example
//!
//! ```
//! use field_validate::{Validate, Validator};
//!
//! let required = Validator::new(|v: &String| {
//!     if v.is_empty() { "required".to_string() } else { String::new() }
//! });
//! let short = Validator::new(|v: &String| {
//!     if v.len() < 3 { "too short".to_string() } else { String::new() }
//! });
//!
//! let validate = Validate::many([Some(required), None, Some(short)]);
//! assert_eq!(validate.validators().len(), 2);
//! assert_eq!(validate.first_error(&"ab".to_string()), "too short");
//! ```

use std::fmt;
use std::sync::Arc;

type CheckFn<T> = dyn Fn(&T) -> String + Send + Sync;

/// A shared validation function.
///
/// Like [`Callback`](crate::Callback), equality is pointer identity, so a
/// validator list rebuilt from the same handles compares equal element-wise.
pub struct Validator<T> {
    check: Arc<CheckFn<T>>,
}

impl<T> Validator<T> {
    /// Wrap a validation closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self { check: Arc::new(f) }
    }

    /// Run the validator against a value.
    pub fn check(&self, value: &T) -> String {
        (self.check)(value)
    }

    /// Whether both handles point at the same function.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.check, &other.check)
    }
}

impl<T> Clone for Validator<T> {
    fn clone(&self) -> Self {
        Self {
            check: Arc::clone(&self.check),
        }
    }
}

impl<T> PartialEq for Validator<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<T> Eq for Validator<T> {}

impl<T> fmt::Debug for Validator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validator({:p})", Arc::as_ptr(&self.check))
    }
}

/// Validator configuration for a field: one function or an ordered list.
///
/// `None` entries in a list are inert. They are never invoked and never
/// contribute an error.
pub enum Validate<T> {
    Single(Validator<T>),
    Many(Vec<Option<Validator<T>>>),
}

impl<T> Validate<T> {
    /// Configure a single validator from a closure.
    pub fn single<F>(f: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self::Single(Validator::new(f))
    }

    /// Configure an ordered list that may contain inert entries.
    pub fn many<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = Option<Validator<T>>>,
    {
        Self::Many(entries.into_iter().collect())
    }

    /// Configure an ordered list of validators.
    pub fn all<I>(validators: I) -> Self
    where
        I: IntoIterator<Item = Validator<T>>,
    {
        Self::Many(validators.into_iter().map(Some).collect())
    }

    /// The callable validators, in declaration order.
    pub fn validators(&self) -> Vec<&Validator<T>> {
        match self {
            Self::Single(validator) => vec![validator],
            Self::Many(entries) => entries.iter().flatten().collect(),
        }
    }

    /// The first non-empty message for `value`, or `""`.
    pub fn first_error(&self, value: &T) -> String {
        first_error(&self.validators(), value)
    }
}

impl<T> Clone for Validate<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Single(validator) => Self::Single(validator.clone()),
            Self::Many(entries) => Self::Many(entries.clone()),
        }
    }
}

impl<T> fmt::Debug for Validate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(validator) => f.debug_tuple("Single").field(validator).finish(),
            Self::Many(entries) => f.debug_tuple("Many").field(entries).finish(),
        }
    }
}

impl<T> From<Validator<T>> for Validate<T> {
    fn from(validator: Validator<T>) -> Self {
        Self::Single(validator)
    }
}

impl<T> From<Vec<Validator<T>>> for Validate<T> {
    fn from(validators: Vec<Validator<T>>) -> Self {
        Self::all(validators)
    }
}

/// Flatten an optional configuration into an ordered list of callables.
///
/// An absent configuration yields an empty list.
pub fn normalize<T>(validate: Option<&Validate<T>>) -> Vec<&Validator<T>> {
    validate.map(Validate::validators).unwrap_or_default()
}

/// Evaluate validators in order and return the first non-empty message.
///
/// Evaluation stops at the first failure; later validators are not called.
pub fn first_error<T>(validators: &[&Validator<T>], value: &T) -> String {
    validators
        .iter()
        .map(|validator| validator.check(value))
        .find(|message| !message.is_empty())
        .unwrap_or_default()
}

/// Whether the validator configuration changed in a way that needs a re-render.
///
/// Lists are compared element-wise by identity over the indices of `next`;
/// a missing index in `current` (or a `current` that is not a list) counts as
/// a change. A list that only got shorter while keeping the same prefix is
/// not reported. A single validator is compared by identity. An absent `next`
/// never reports a change.
pub fn validators_changed<T>(next: Option<&Validate<T>>, current: Option<&Validate<T>>) -> bool {
    match next {
        Some(Validate::Many(entries)) => entries.iter().enumerate().any(|(index, entry)| {
            let previous = match current {
                Some(Validate::Many(previous)) => previous.get(index),
                _ => None,
            };
            previous != Some(entry)
        }),
        Some(Validate::Single(validator)) => {
            !matches!(current, Some(Validate::Single(previous)) if previous == validator)
        }
        None => false,
    }
}
