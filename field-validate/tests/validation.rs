//! Debounced validation, touch tracking and visible-error behaviour.

mod common;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use common::*;
use field_validate::prelude::*;
use field_validate::Phase;

const DELAY: Duration = Duration::from_millis(200);

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_required_error_hidden_until_touched() {
    let clock = ManualClock::new();
    let mut field = field(props("").validate(required()), &clock);

    let mounted = field.mount().unwrap();
    assert_eq!(mounted.error, "");

    clock.advance(DELAY);
    let rendered = field.fire_due().unwrap();

    assert_eq!(field.state().error_message(), "required");
    assert!(!field.state().touched());
    assert_eq!(rendered.error, "");
}

#[test]
fn test_required_error_shown_after_blur() {
    let clock = ManualClock::new();
    let mut field = field(props("").validate(required()), &clock);
    let mounted = field.mount().unwrap();
    clock.advance(DELAY);
    field.fire_due();

    mounted.on_blur.call(BlurEvent::new("username"));
    let outputs = field.pump();

    assert_eq!(outputs.len(), 1);
    assert_eq!(outputs[0].error, "required");
    assert!(field.state().touched());
}

#[test]
fn test_first_failing_validator_wins() {
    let too_short = Validator::new(|v: &String| {
        if v.len() < 3 {
            "too short".to_string()
        } else {
            String::new()
        }
    });
    let digit = regex::Regex::new("[0-9]").unwrap();
    let needs_digit = Validator::new(move |v: &String| {
        if digit.is_match(v) {
            String::new()
        } else {
            "needs digit".to_string()
        }
    });

    let clock = ManualClock::new();
    let mut field = field(props("ab").validate(Validate::all([too_short, needs_digit])), &clock);
    field.mount();
    clock.advance(DELAY);
    field.fire_due();

    assert_eq!(field.state().error_message(), "too short");
}

#[test]
fn test_unmount_cancels_pending_validation() {
    let (on_validate, notified) = notifications();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let clock = ManualClock::new();
    let mut field = field(
        props("")
            .validate(recording(&seen, "bad"))
            .on_validate(on_validate),
        &clock,
    );

    field.mount();
    clock.advance(DELAY / 2);
    assert!(field.is_pending());

    field.unmount();
    clock.advance(DELAY * 10);

    assert!(field.fire_due().is_none());
    assert!(!field.is_pending());
    assert_eq!(field.phase(), Phase::Unmounted);
    assert_eq!(field.state(), &FieldState::default());
    assert!(seen.lock().unwrap().is_empty());
    assert!(notified.lock().unwrap().is_empty());
}

// ============================================================================
// Validator evaluation
// ============================================================================

#[test]
fn test_declaration_order_is_preserved() {
    let clock = ManualClock::new();
    let validate = Validate::all([passes(), fails_with("second"), fails_with("third")]);
    let mut field = field(props("x").validate(validate), &clock);
    field.mount();
    clock.advance(DELAY);
    field.fire_due();

    assert_eq!(field.state().error_message(), "second");
}

#[test]
fn test_inert_entries_are_skipped() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let clock = ManualClock::new();
    let validate = Validate::many([None, Some(passes()), None, Some(recording(&seen, "bad")), None]);
    let mut field = field(props("x").validate(validate), &clock);
    field.mount();
    clock.advance(DELAY);
    field.fire_due();

    assert_eq!(field.state().error_message(), "bad");
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[test]
fn test_absent_validate_never_changes_state() {
    let (on_validate, notified) = notifications();
    let clock = ManualClock::new();
    let mut field = field(props("").on_validate(on_validate), &clock);
    field.mount();
    clock.advance(DELAY);

    assert!(field.fire_due().is_none());
    assert_eq!(field.state(), &FieldState::default());
    assert!(notified.lock().unwrap().is_empty());
}

#[test]
fn test_notifies_on_each_change() {
    let (on_validate, notified) = notifications();
    let clock = ManualClock::new();
    let base = props("").validate(required()).on_validate(on_validate);
    let mut field = field(base.clone(), &clock);
    field.mount();
    clock.advance(DELAY);
    field.fire_due();

    field.receive_props(base.clone().value("alice".into()));
    clock.advance(DELAY);
    field.fire_due();

    let notified = notified.lock().unwrap();
    assert_eq!(
        *notified,
        vec![
            ValidationEvent {
                name: "username".into(),
                is_valid: false,
            },
            ValidationEvent {
                name: "username".into(),
                is_valid: true,
            },
        ]
    );
    assert!(field.state().is_valid());
}

#[test]
fn test_unchanged_result_does_not_renotify() {
    let (on_validate, notified) = notifications();
    let clock = ManualClock::new();
    let mut field = field(
        props("").validate(required()).on_validate(on_validate),
        &clock,
    );
    field.mount();
    clock.advance(DELAY);
    field.fire_due();

    // The state change re-armed the timer; the second run finds nothing new.
    assert!(field.is_pending());
    clock.advance(DELAY);
    assert!(field.fire_due().is_none());

    assert_eq!(field.state().error_message(), "required");
    assert_eq!(notified.lock().unwrap().len(), 1);
    assert!(!field.is_pending());
}

// ============================================================================
// Debounce
// ============================================================================

#[test]
fn test_burst_of_updates_validates_once_with_last_value() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let clock = ManualClock::new();
    let validator = recording(&seen, "");
    let mut field = field(props("").validate(validator.clone()), &clock);
    field.mount();

    for value in ["a", "ab", "abc", "abcd"] {
        clock.advance(Duration::from_millis(50));
        assert!(field.fire_due().is_none());
        field.receive_props(props(value).validate(validator.clone()));
    }

    clock.advance(DELAY - Duration::from_millis(1));
    field.fire_due();
    assert!(seen.lock().unwrap().is_empty());

    clock.advance(Duration::from_millis(1));
    field.fire_due();
    assert_eq!(*seen.lock().unwrap(), vec!["abcd".to_string()]);
}

#[test]
fn test_every_update_rearms_even_without_value_change() {
    let clock = ManualClock::new();
    let mut field = field(props("x").validate(required()), &clock);
    field.mount();

    clock.advance(Duration::from_millis(150));
    field.receive_props(props("x").validate(required()).show_errors(true));

    assert_eq!(
        field.next_deadline(),
        Some(clock.now() + DELAY)
    );
}

// ============================================================================
// Touch tracking and visibility
// ============================================================================

#[test]
fn test_touched_survives_updates() {
    let clock = ManualClock::new();
    let mut field = field(props("").validate(required()), &clock);
    field.mount();

    field.on_blur(BlurEvent::new("username"));
    field.receive_props(props("a").validate(required()));
    clock.advance(DELAY);
    field.fire_due();
    field.receive_props(props("").validate(required()));
    clock.advance(DELAY);
    field.fire_due();

    assert!(field.state().touched());
    assert_eq!(field.render().error, "required");
}

#[test]
fn test_untouched_error_stays_hidden() {
    let clock = ManualClock::new();
    let mut field = field(props("").validate(required()), &clock);
    field.mount();

    for _ in 0..3 {
        clock.advance(DELAY);
        if let Some(rendered) = field.fire_due() {
            assert_eq!(rendered.error, "");
        }
        if let Some(rendered) = field.receive_props(props("").validate(required())) {
            assert_eq!(rendered.error, "");
        }
    }

    assert_eq!(field.state().error_message(), "required");
    assert_eq!(field.render().error, "");
}

#[test]
fn test_show_errors_reveals_untouched_error() {
    let clock = ManualClock::new();
    let validator = required();
    let mut field = field(props("").validate(validator.clone()), &clock);
    field.mount();
    clock.advance(DELAY);
    field.fire_due();

    let rendered = field
        .receive_props(props("").validate(validator).show_errors(true))
        .unwrap();

    assert!(!field.state().touched());
    assert_eq!(rendered.error, "required");
}

#[test]
fn test_blur_is_forwarded_every_time() {
    let (on_blur, forwarded) = blur_log();
    let clock = ManualClock::new();
    let mut field = field(props("").on_blur(on_blur), &clock);
    field.mount();

    assert!(field.on_blur(BlurEvent::new("first")).is_some());
    // Already touched: no re-render, but still forwarded.
    assert!(field.on_blur(BlurEvent::new("second")).is_none());

    assert_eq!(
        *forwarded.lock().unwrap(),
        vec![BlurEvent::new("first"), BlurEvent::new("second")]
    );
}

#[test]
fn test_blur_after_unmount_is_dropped() {
    let (on_blur, forwarded) = blur_log();
    let clock = ManualClock::new();
    let mut field = field(props("").on_blur(on_blur), &clock);
    let mounted = field.mount().unwrap();

    field.unmount();
    mounted.on_blur.call(BlurEvent::new("username"));

    assert!(field.pump().is_empty());
    assert!(field.on_blur(BlurEvent::new("username")).is_none());
    assert!(!field.state().touched());
    assert!(forwarded.lock().unwrap().is_empty());
}

// ============================================================================
// Render delegation
// ============================================================================

#[test]
fn test_view_receives_forwarded_props() {
    let clock = ManualClock::new();
    let mut field = field(props("alice").validate(required()), &clock);

    let rendered = field.mount().unwrap();

    assert_eq!(rendered.name, "username");
    assert_eq!(rendered.value, "alice");
    assert_eq!(rendered.hint, "enter a username");
    assert_eq!(rendered.error, "");
}

fn labelled(label: &'static str) -> impl Fn(ViewProps<'_, String, ()>) -> String {
    move |props| format!("{label}: {}", props.error_message)
}

#[test]
fn test_closure_views_are_supported() {
    let clock = ManualClock::new();
    let mut field = WithValidate::with_clock(
        labelled("Email"),
        FieldProps::new("email", String::new())
            .validator(|v: &String| if v.contains('@') { String::new() } else { "invalid".into() })
            .show_errors(true),
        clock.clone(),
    );

    assert_eq!(field.mount().unwrap(), "Email: ");
    clock.advance(DELAY);
    assert_eq!(field.fire_due().unwrap(), "Email: invalid");
}
