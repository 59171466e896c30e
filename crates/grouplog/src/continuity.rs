#![forbid(unsafe_code)]

//! Which group's block is currently open on screen.
//!
//! Log groups that share a [`Continuity`] context take turns: a call from the
//! group whose title was recorded last extends the open block in place, any
//! other call closes it and opens a new one. The recorded width travels with
//! the title so an extended block keeps its original width.
//!
//! ```
//! use grouplog::{Continuity, Transition};
//!
//! let ctx = Continuity::new();
//! assert_eq!(ctx.enter("build", 40), (Transition::Open, 40));
//! assert_eq!(ctx.enter("build", 90), (Transition::Continue, 40));
//! assert_eq!(ctx.enter("test", 90), (Transition::Open, 90));
//! ```

use std::sync::{Arc, LazyLock, Mutex, MutexGuard, PoisonError};

use crate::width;

/// Snapshot of the active block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContinuityState {
    pub active_title: Option<String>,
    pub active_width: Option<u16>,
}

impl ContinuityState {
    /// Whether a call by `title` extends the active block.
    #[must_use]
    pub fn continues(&self, title: &str) -> bool {
        self.active_title.as_deref() == Some(title)
    }
}

/// Outcome of [`Continuity::enter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Draw a new top border.
    Open,
    /// Move up over the previous bottom edge and keep drawing.
    Continue,
}

static GLOBAL: LazyLock<Continuity> = LazyLock::new(Continuity::new);

/// Shared continuity context.
///
/// Clones refer to the same state. Groups built without an explicit context
/// use [`Continuity::global`].
#[derive(Debug, Clone, Default)]
pub struct Continuity {
    state: Arc<Mutex<ContinuityState>>,
}

impl Continuity {
    /// A fresh context with no active block.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide context.
    #[must_use]
    pub fn global() -> Self {
        GLOBAL.clone()
    }

    fn lock(&self) -> MutexGuard<'_, ContinuityState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the current state.
    #[must_use]
    pub fn state(&self) -> ContinuityState {
        self.lock().clone()
    }

    /// Forget the active block; the next call from any group opens a new one.
    pub fn reset(&self) {
        *self.lock() = ContinuityState::default();
    }

    /// Whether both handles share one state.
    #[must_use]
    pub fn same_context(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }

    /// Decide between opening and continuing for a call by `title`.
    ///
    /// Opening records `title` with `base_width` and returns that width;
    /// continuing leaves the state alone and returns the recorded width.
    pub fn enter(&self, title: &str, base_width: u16) -> (Transition, u16) {
        let mut state = self.lock();
        if state.continues(title) && state.active_width.is_some() {
            return (
                Transition::Continue,
                width::resolve_width(&state, title, base_width),
            );
        }

        state.active_title = Some(title.to_string());
        state.active_width = Some(base_width);
        (Transition::Open, base_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_call_opens() {
        let ctx = Continuity::new();
        assert_eq!(ctx.state(), ContinuityState::default());
        assert_eq!(ctx.enter("", 50), (Transition::Open, 50));
        assert_eq!(ctx.state().active_title.as_deref(), Some(""));
    }

    #[test]
    fn same_title_continues_with_recorded_width() {
        let ctx = Continuity::new();
        ctx.enter("a", 30);
        assert_eq!(ctx.enter("a", 80), (Transition::Continue, 30));
        assert_eq!(ctx.state().active_width, Some(30));
    }

    #[test]
    fn interleaving_reopens() {
        let ctx = Continuity::new();
        ctx.enter("a", 30);
        ctx.enter("b", 40);
        assert_eq!(ctx.enter("a", 50), (Transition::Open, 50));
    }

    #[test]
    fn reset_forgets_block() {
        let ctx = Continuity::new();
        ctx.enter("a", 30);
        ctx.reset();
        assert_eq!(ctx.enter("a", 30), (Transition::Open, 30));
    }

    #[test]
    fn clones_share_state_but_new_contexts_do_not() {
        let ctx = Continuity::new();
        let clone = ctx.clone();
        ctx.enter("a", 10);
        assert_eq!(clone.enter("a", 99), (Transition::Continue, 10));
        assert!(ctx.same_context(&clone));

        let other = Continuity::new();
        assert!(!ctx.same_context(&other));
        assert_eq!(other.enter("a", 99), (Transition::Open, 99));
    }

    #[test]
    fn global_is_one_context() {
        assert!(Continuity::global().same_context(&Continuity::global()));
    }
}
