//! Tokio host loop for a single validated field.
//!
//! [`spawn`] moves a [`WithValidate`] onto a task that plays the host
//! framework's part: it mounts the field, applies props and blur events as
//! they arrive, sleeps until the debounce deadline and tears the field down
//! on request. Rendered outputs are sent on the `frames` channel.
//!
//! Give the field a [`TokioClock`](crate::TokioClock) so deadlines follow
//! tokio time (and paused time in tests).
//!
//! # Example
//!
//! ```ignore
//! let field = WithValidate::with_clock(view, props, TokioClock);
//! let mut driver = driver::spawn(field);
//!
//! let first = driver.frames.recv().await;
//! driver.handle.set_props(next_props)?;
//! driver.handle.blur(BlurEvent::new("email"));
//! driver.shutdown().await?;
//! ```

use std::time::Instant;

use log::{debug, info};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::sleep_until;

use crate::error::DriverError;
use crate::event::{BlurEvent, BlurHandler};
use crate::props::FieldProps;
use crate::view::FieldView;
use crate::with_validate::WithValidate;

/// Commands accepted by the driver loop.
#[derive(Debug)]
pub enum FieldCommand<T, P> {
    /// New props from the parent.
    Props(FieldProps<T, P>),
    /// Tear the field down and stop the loop.
    Unmount,
}

/// Sending side of a running driver.
#[derive(Debug)]
pub struct FieldHandle<T, P> {
    commands: mpsc::UnboundedSender<FieldCommand<T, P>>,
    blur: BlurHandler,
}

impl<T, P> Clone for FieldHandle<T, P> {
    fn clone(&self) -> Self {
        Self {
            commands: self.commands.clone(),
            blur: self.blur.clone(),
        }
    }
}

impl<T, P> FieldHandle<T, P> {
    /// Deliver new props.
    pub fn set_props(&self, props: FieldProps<T, P>) -> Result<(), DriverError> {
        self.commands
            .send(FieldCommand::Props(props))
            .map_err(|_| DriverError::Closed)
    }

    /// Deliver a blur event, as the view's own handler would.
    pub fn blur(&self, event: BlurEvent) {
        self.blur.call(event);
    }

    /// Ask the loop to tear the field down.
    pub fn unmount(&self) -> Result<(), DriverError> {
        self.commands
            .send(FieldCommand::Unmount)
            .map_err(|_| DriverError::Closed)
    }

    /// Whether the loop has ended.
    pub fn is_closed(&self) -> bool {
        self.commands.is_closed()
    }
}

/// A field running on its own task.
pub struct Driver<T, P, O> {
    /// Command sender; clone it to drive the field from elsewhere.
    pub handle: FieldHandle<T, P>,
    /// Rendered outputs, in render order.
    pub frames: mpsc::UnboundedReceiver<O>,
    task: JoinHandle<()>,
}

impl<T, P, O> Driver<T, P, O> {
    /// Whether the loop task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Unmount the field and wait for the loop to exit.
    ///
    /// Outputs still buffered in `frames` are dropped.
    pub async fn shutdown(self) -> Result<(), DriverError> {
        // Already stopped is fine; the join below reports real failures.
        let _ = self.handle.unmount();
        self.task
            .await
            .map_err(|e| DriverError::Join(e.to_string()))
    }
}

/// Spawn the host loop for `field` on the current tokio runtime.
pub fn spawn<T, P, V>(field: WithValidate<T, P, V>) -> Driver<T, P, V::Output>
where
    T: Clone + PartialEq + Send + 'static,
    P: Clone + PartialEq + Send + 'static,
    V: FieldView<T, P> + Send + 'static,
    V::Output: Send + 'static,
{
    let (commands_tx, commands_rx) = mpsc::unbounded_channel();
    let (frames_tx, frames_rx) = mpsc::unbounded_channel();
    let handle = FieldHandle {
        commands: commands_tx,
        blur: field.blur_handler().clone(),
    };
    let task = tokio::spawn(run(field, commands_rx, frames_tx));

    Driver {
        handle,
        frames: frames_rx,
        task,
    }
}

/// Sleep until a deadline, or wait forever if None.
/// This is used as a branch in tokio::select!
async fn sleep_until_optional(deadline: Option<Instant>) {
    match deadline {
        Some(d) => sleep_until(tokio::time::Instant::from_std(d)).await,
        None => std::future::pending::<()>().await,
    }
}

/// Run the host loop until unmounted or every handle is dropped.
pub async fn run<T, P, V>(
    mut field: WithValidate<T, P, V>,
    mut commands: mpsc::UnboundedReceiver<FieldCommand<T, P>>,
    frames: mpsc::UnboundedSender<V::Output>,
) where
    T: Clone + PartialEq,
    P: Clone + PartialEq,
    V: FieldView<T, P>,
{
    let emit = |output: Option<V::Output>| {
        if let Some(output) = output {
            // Receiver dropped = nobody is watching; keep validating anyway.
            let _ = frames.send(output);
        }
    };

    emit(field.mount());

    loop {
        let deadline = field.next_deadline();

        tokio::select! {
            command = commands.recv() => match command {
                Some(FieldCommand::Props(props)) => {
                    emit(field.receive_props(props));
                }
                Some(FieldCommand::Unmount) => {
                    debug!("field '{}': unmount requested", field.props().name);
                    break;
                }
                None => {
                    debug!("field '{}': all handles dropped", field.props().name);
                    break;
                }
            },

            Some(event) = field.next_blur() => {
                emit(field.on_blur(event));
            }

            _ = sleep_until_optional(deadline) => {
                emit(field.fire_due());
            }
        }
    }

    field.unmount();
    info!("field '{}': driver stopped", field.props().name);
}
