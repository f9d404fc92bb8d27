//! Lifecycle interface between a component and its host.
//!
//! The host calls these at lifecycle events: once after the first render
//! (`on_mount`), after every re-render (`on_update`), once at teardown
//! (`on_unmount`), and before every potential re-render (`should_update`).

/// Lifecycle hooks a host drives.
pub trait Lifecycle {
    type Props;
    type State;

    /// Called after the first render.
    fn on_mount(&mut self);

    /// Called after a re-render, with what was current before it.
    fn on_update(&mut self, prev_props: &Self::Props, prev_state: &Self::State);

    /// Called at teardown. Nothing may happen after this returns.
    fn on_unmount(&mut self);

    /// Decide whether moving to `next_props`/`next_state` needs a re-render.
    fn should_update(&self, next_props: &Self::Props, next_state: &Self::State) -> bool;
}
