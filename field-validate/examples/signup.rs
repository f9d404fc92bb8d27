//! A two-field signup form driven on tokio tasks.
//!
//! Simulates a user typing an email and a password, leaving each field, and
//! prints what each field view would show along with the form's validity.
//! Debug logs go to `signup.log`.

use std::fs::File;
use std::time::Duration;

use field_validate::driver::{self, Driver};
use field_validate::prelude::*;
use regex::Regex;
use simplelog::{Config, LevelFilter, WriteLogger};
use tokio::time::sleep;

// ============================================================================
// View
// ============================================================================

/// What the text input shows: a label, the value and any visible error.
fn input(props: ViewProps<'_, String, &'static str>) -> String {
    if props.error_message.is_empty() {
        format!("{}: [{}]", props.view, props.value)
    } else {
        format!("{}: [{}]  ! {}", props.view, props.value, props.error_message)
    }
}

type Input = fn(ViewProps<'_, String, &'static str>) -> String;

// ============================================================================
// Validators
// ============================================================================

fn required() -> Validator<String> {
    Validator::new(|v: &String| {
        if v.trim().is_empty() {
            "This field is required".to_string()
        } else {
            String::new()
        }
    })
}

fn email() -> Validator<String> {
    let pattern = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok();
    Validator::new(move |v: &String| match &pattern {
        Some(pattern) if !pattern.is_match(v) => "Enter a valid email address".to_string(),
        _ => String::new(),
    })
}

fn min_length(min: usize) -> Validator<String> {
    Validator::new(move |v: &String| {
        if v.chars().count() < min {
            format!("Use at least {min} characters")
        } else {
            String::new()
        }
    })
}

// ============================================================================
// Fields
// ============================================================================

struct Field {
    driver: Driver<String, &'static str, String>,
    props: FieldProps<String, &'static str>,
}

impl Field {
    fn spawn(props: FieldProps<String, &'static str>) -> Self {
        let view = WithValidate::with_clock(input as Input, props.clone(), TokioClock);
        Self {
            driver: driver::spawn(view),
            props,
        }
    }

    /// Simulate typing one character at a time.
    async fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            let mut value = self.props.value.clone();
            value.push(c);
            self.props = self.props.clone().value(value);
            if self.driver.handle.set_props(self.props.clone()).is_err() {
                return;
            }
            sleep(Duration::from_millis(60)).await;
        }
    }

    fn leave(&self) {
        self.driver.handle.blur(BlurEvent::new(self.props.name.clone()));
    }

    fn print_frames(&mut self) {
        while let Ok(frame) = self.driver.frames.try_recv() {
            println!("  {frame}");
        }
    }
}

fn report(form: &FormValidity) {
    if form.is_valid() {
        println!("form: ready to submit");
    } else {
        println!("form: invalid fields {:?}", form.invalid_fields());
    }
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Ok(log_file) = File::create("signup.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let defaults = FieldDefaults::new().validation_delay(Duration::from_millis(300));
    let form = FormValidity::new();
    let on_validate = form.callback();

    let mut email_field = Field::spawn(
        FieldProps::with_defaults(&defaults, "email", String::new(), "Email")
            .validate(Validate::all([required(), email()]))
            .on_validate(on_validate.clone()),
    );
    let mut password_field = Field::spawn(
        FieldProps::with_defaults(&defaults, "password", String::new(), "Password")
            .validate(Validate::many([
                Some(required()),
                Some(min_length(8)),
                None,
            ]))
            .on_validate(on_validate),
    );

    sleep(Duration::from_millis(400)).await;
    println!("initial render:");
    email_field.print_frames();
    password_field.print_frames();
    report(&form);

    println!("typing an email:");
    email_field.type_text("ada@example").await;
    email_field.leave();
    sleep(Duration::from_millis(400)).await;
    email_field.print_frames();
    report(&form);

    println!("finishing the email:");
    email_field.type_text(".com").await;
    sleep(Duration::from_millis(400)).await;
    email_field.print_frames();

    println!("typing a password:");
    password_field.type_text("hunter2").await;
    password_field.leave();
    sleep(Duration::from_millis(400)).await;
    password_field.print_frames();
    report(&form);

    password_field.type_text("!").await;
    sleep(Duration::from_millis(400)).await;
    password_field.print_frames();
    report(&form);

    for field in [email_field, password_field] {
        if let Err(e) = field.driver.shutdown().await {
            eprintln!("Error: {}", e);
        }
    }
}
