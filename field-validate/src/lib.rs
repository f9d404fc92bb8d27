//! Debounced, multi-validator validation for field views.
//!
//! [`WithValidate`] decorates a [`FieldView`]: it runs the configured
//! validators a short while after the value settles, keeps the first error,
//! hides that error until the user has left the field, and tells an
//! aggregator (such as [`FormValidity`]) whenever the field's validity flips.

pub mod aggregate;
pub mod callback;
pub mod clock;
pub mod config;
pub mod debounce;
pub mod driver;
pub mod error;
pub mod event;
pub mod lifecycle;
pub mod props;
pub mod state;
pub mod validator;
pub mod view;
pub mod with_validate;

pub use aggregate::FormValidity;
pub use callback::Callback;
pub use clock::{Clock, ManualClock, SystemClock, TokioClock};
pub use config::{DEFAULT_VALIDATION_DELAY, FieldDefaults};
pub use debounce::Debounce;
pub use driver::{Driver, FieldCommand, FieldHandle};
pub use error::DriverError;
pub use event::{BlurEvent, BlurHandler, ValidationEvent};
pub use lifecycle::Lifecycle;
pub use props::FieldProps;
pub use state::{FieldAction, FieldState};
pub use validator::{Validate, Validator};
pub use view::{FieldView, ViewProps};
pub use with_validate::{Phase, WithValidate};

pub mod prelude {
    pub use crate::aggregate::FormValidity;
    pub use crate::callback::Callback;
    pub use crate::clock::{Clock, ManualClock, TokioClock};
    pub use crate::config::FieldDefaults;
    pub use crate::event::{BlurEvent, ValidationEvent};
    pub use crate::lifecycle::Lifecycle;
    pub use crate::props::FieldProps;
    pub use crate::state::FieldState;
    pub use crate::validator::{Validate, Validator};
    pub use crate::view::{FieldView, ViewProps};
    pub use crate::with_validate::WithValidate;
}
