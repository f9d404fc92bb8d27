//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use field_validate::prelude::*;
use field_validate::BlurHandler;

/// What the test view renders: the forwarded props it was given.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub name: String,
    pub value: String,
    pub hint: &'static str,
    pub error: String,
    pub on_blur: BlurHandler,
}

pub type View = fn(ViewProps<'_, String, &'static str>) -> Rendered;

pub type Field = WithValidate<String, &'static str, View>;

pub fn render(props: ViewProps<'_, String, &'static str>) -> Rendered {
    Rendered {
        name: props.name.to_string(),
        value: props.value.clone(),
        hint: *props.view,
        error: props.error_message.to_string(),
        on_blur: props.on_blur.clone(),
    }
}

pub fn props(value: &str) -> FieldProps<String, &'static str> {
    FieldProps::new("username", value.to_string()).view("enter a username")
}

pub fn field(props: FieldProps<String, &'static str>, clock: &ManualClock) -> Field {
    WithValidate::with_clock(render as View, props, clock.clone())
}

pub fn required() -> Validator<String> {
    Validator::new(|v: &String| {
        if v.is_empty() {
            "required".to_string()
        } else {
            String::new()
        }
    })
}

pub fn fails_with(message: &'static str) -> Validator<String> {
    Validator::new(move |_: &String| message.to_string())
}

pub fn passes() -> Validator<String> {
    Validator::new(|_: &String| String::new())
}

/// A validator that records every value it sees and reports `message`.
pub fn recording(seen: &Arc<Mutex<Vec<String>>>, message: &'static str) -> Validator<String> {
    let seen = Arc::clone(seen);
    Validator::new(move |v: &String| {
        seen.lock().unwrap().push(v.clone());
        message.to_string()
    })
}

/// An `on_validate` callback that records every notification.
pub fn notifications() -> (Callback<ValidationEvent>, Arc<Mutex<Vec<ValidationEvent>>>) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    let callback = Callback::new(move |event: ValidationEvent| {
        sink.lock().unwrap().push(event);
    });
    (callback, log)
}

/// An `on_blur` callback that records every forwarded event.
pub fn blur_log() -> (Callback<BlurEvent>, Arc<Mutex<Vec<BlurEvent>>>) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    let callback = Callback::new(move |event: BlurEvent| {
        sink.lock().unwrap().push(event);
    });
    (callback, log)
}
