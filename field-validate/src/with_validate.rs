//! The validation decorator.
//!
//! [`WithValidate`] wraps a [`FieldView`] and owns one [`FieldState`]. It
//! re-validates on mount and on every update after a debounce window, tracks
//! the first blur, skips re-renders whose inputs did not change and reports
//! validity changes through `on_validate`.
//!
//! The host drives it with [`mount`](WithValidate::mount),
//! [`receive_props`](WithValidate::receive_props),
//! [`fire_due`](WithValidate::fire_due), [`pump`](WithValidate::pump) and
//! [`unmount`](WithValidate::unmount). Each returns the rendered output when
//! a render happened. The tokio [`driver`](crate::driver) runs that loop for
//! you.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use field_validate::{FieldProps, ManualClock, ViewProps, WithValidate};
//!
//! fn error_text(props: ViewProps<'_, String, ()>) -> String {
//!     props.error_message.to_string()
//! }
//!
//! let clock = ManualClock::new();
//! let props = FieldProps::new("name", String::new())
//!     .validator(|v: &String| if v.is_empty() { "required".into() } else { String::new() })
//!     .show_errors(true);
//!
//! let mut field = WithValidate::with_clock(error_text, props, clock.clone());
//! assert_eq!(field.mount().as_deref(), Some(""));
//!
//! clock.advance(Duration::from_millis(200));
//! assert_eq!(field.fire_due().as_deref(), Some("required"));
//! ```

use std::sync::Arc;
use std::time::Instant;

use log::{debug, trace};

use crate::clock::{Clock, SystemClock};
use crate::debounce::Debounce;
use crate::event::{BlurEvent, BlurHandler, BlurQueue, ValidationEvent, blur_channel};
use crate::lifecycle::Lifecycle;
use crate::props::FieldProps;
use crate::state::{FieldAction, FieldState};
use crate::validator::{first_error, validators_changed};
use crate::view::{FieldView, ViewProps};

/// Where the field is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed, not yet mounted.
    Created,
    /// Mounted and live.
    Mounted,
    /// Torn down. Every entry point is a no-op.
    Unmounted,
}

/// Debounced multi-validator decorator around a field view.
pub struct WithValidate<T, P, V> {
    view: V,
    props: FieldProps<T, P>,
    state: FieldState,
    debounce: Debounce,
    clock: Arc<dyn Clock>,
    blur_handler: BlurHandler,
    blur_queue: BlurQueue,
    phase: Phase,
}

impl<T, P, V> WithValidate<T, P, V>
where
    T: Clone + PartialEq,
    P: Clone + PartialEq,
    V: FieldView<T, P>,
{
    /// Wrap `view` using the system clock.
    pub fn new(view: V, props: FieldProps<T, P>) -> Self {
        Self::with_clock(view, props, SystemClock)
    }

    /// Wrap `view` with an explicit time source.
    ///
    /// The debounce window is taken from `props.validation_delay` here and is
    /// not re-read when later props change it.
    pub fn with_clock(view: V, props: FieldProps<T, P>, clock: impl Clock + 'static) -> Self {
        let (blur_handler, blur_queue) = blur_channel();
        Self {
            view,
            debounce: Debounce::new(props.validation_delay),
            props,
            state: FieldState::default(),
            clock: Arc::new(clock),
            blur_handler,
            blur_queue,
            phase: Phase::Created,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn props(&self) -> &FieldProps<T, P> {
        &self.props
    }

    pub fn state(&self) -> &FieldState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The handler given to the view. Clones feed the same queue.
    pub fn blur_handler(&self) -> &BlurHandler {
        &self.blur_handler
    }

    /// When a pending validation is due, if one is armed.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debounce.deadline()
    }

    /// Whether a validation is waiting for its debounce window.
    pub fn is_pending(&self) -> bool {
        self.debounce.is_pending()
    }

    // -------------------------------------------------------------------------
    // Host entry points
    // -------------------------------------------------------------------------

    /// First render followed by `on_mount`.
    ///
    /// Returns `None` if the field was already mounted or torn down.
    pub fn mount(&mut self) -> Option<V::Output> {
        if self.phase != Phase::Created {
            debug!("field '{}': mount ignored in phase {:?}", self.props.name, self.phase);
            return None;
        }
        let output = self.render();
        self.on_mount();
        Some(output)
    }

    /// Accept new props from the parent.
    ///
    /// Props are always replaced; a render and `on_update` only follow when
    /// [`should_update`](Lifecycle::should_update) says so.
    pub fn receive_props(&mut self, next: FieldProps<T, P>) -> Option<V::Output> {
        match self.phase {
            Phase::Unmounted => {
                debug!("field '{}': props ignored after unmount", self.props.name);
                return None;
            }
            Phase::Created => {
                self.props = next;
                return None;
            }
            Phase::Mounted => {}
        }

        let needs_update = self.should_update(&next, &self.state);
        let prev_props = std::mem::replace(&mut self.props, next);
        if !needs_update {
            trace!("field '{}': props unchanged, render skipped", self.props.name);
            return None;
        }

        let output = self.render();
        let state = self.state.clone();
        self.on_update(&prev_props, &state);
        Some(output)
    }

    /// Run the pending validation if its deadline has passed.
    pub fn fire_due(&mut self) -> Option<V::Output> {
        if self.phase != Phase::Mounted {
            return None;
        }
        if !self.debounce.poll(self.clock.now()) {
            return None;
        }
        trace!("field '{}': debounce fired", self.props.name);
        self.check_validation()
    }

    /// Apply every blur event queued through the view's [`BlurHandler`].
    pub fn pump(&mut self) -> Vec<V::Output> {
        let mut outputs = Vec::new();
        while let Some(event) = self.blur_queue.try_next() {
            outputs.extend(self.on_blur(event));
        }
        outputs
    }

    /// Mark the field touched and forward the event to the external handler.
    pub fn on_blur(&mut self, event: BlurEvent) -> Option<V::Output> {
        if self.phase == Phase::Unmounted {
            debug!("field '{}': blur ignored after unmount", self.props.name);
            return None;
        }

        let output = if self.state.touched() {
            None
        } else {
            self.commit(self.state.reduce(FieldAction::Blurred))
        };

        if let Some(on_blur) = &self.props.on_blur {
            on_blur.call(event);
        }
        output
    }

    /// Tear down. Idempotent.
    pub fn unmount(&mut self) {
        if self.phase != Phase::Unmounted {
            self.on_unmount();
        }
    }

    /// Render the view with the current props and state.
    pub fn render(&self) -> V::Output {
        self.view.render(ViewProps {
            name: &self.props.name,
            value: &self.props.value,
            view: &self.props.view,
            error_message: self.state.visible_error(self.props.show_errors),
            on_blur: &self.blur_handler,
        })
    }

    /// Wait for the next queued blur event.
    pub(crate) async fn next_blur(&mut self) -> Option<BlurEvent> {
        self.blur_queue.recv().await
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    /// Re-arm the debounce timer.
    fn trigger(&mut self) {
        if self.phase != Phase::Mounted {
            return;
        }
        let deadline = self.debounce.schedule(self.clock.now());
        trace!(
            "field '{}': validation scheduled in {:?}",
            self.props.name,
            deadline.saturating_duration_since(self.clock.now())
        );
    }

    /// Evaluate validators against the current value and publish a change.
    fn check_validation(&mut self) -> Option<V::Output> {
        let validate = self.props.validate.as_ref()?;
        let error_message = first_error(&validate.validators(), &self.props.value);

        if error_message == self.state.error_message() {
            trace!("field '{}': validation unchanged", self.props.name);
            return None;
        }

        let is_valid = error_message.is_empty();
        debug!(
            "field '{}': error message changed to {:?}",
            self.props.name, error_message
        );
        let output = self.commit(self.state.reduce(FieldAction::Validated(error_message)));

        if let Some(on_validate) = &self.props.on_validate {
            on_validate.call(ValidationEvent {
                name: self.props.name.clone(),
                is_valid,
            });
        }
        output
    }

    /// Move to `next`, rendering and calling `on_update` when needed.
    fn commit(&mut self, next: FieldState) -> Option<V::Output> {
        if !self.should_update(&self.props, &next) {
            self.state = next;
            return None;
        }

        let prev_state = std::mem::replace(&mut self.state, next);
        debug!("field '{}': state {:?} -> {:?}", self.props.name, prev_state, self.state);
        let output = self.render();
        let props = self.props.clone();
        self.on_update(&props, &prev_state);
        Some(output)
    }
}

impl<T, P, V> Lifecycle for WithValidate<T, P, V>
where
    T: Clone + PartialEq,
    P: Clone + PartialEq,
    V: FieldView<T, P>,
{
    type Props = FieldProps<T, P>;
    type State = FieldState;

    fn on_mount(&mut self) {
        self.phase = Phase::Mounted;
        self.trigger();
    }

    fn on_update(&mut self, _prev_props: &FieldProps<T, P>, _prev_state: &FieldState) {
        // Every update re-arms the timer; the debounce absorbs bursts.
        self.trigger();
    }

    fn on_unmount(&mut self) {
        if self.debounce.cancel() {
            debug!("field '{}': pending validation cancelled", self.props.name);
        }
        self.blur_queue.close();
        self.phase = Phase::Unmounted;
    }

    fn should_update(&self, next_props: &FieldProps<T, P>, next_state: &FieldState) -> bool {
        if *next_state != self.state {
            return true;
        }
        if next_props.differs_ignoring_validate(&self.props) {
            return true;
        }
        validators_changed(next_props.validate.as_ref(), self.props.validate.as_ref())
    }
}
