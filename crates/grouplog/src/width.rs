#![forbid(unsafe_code)]

//! Block width resolution.

use crate::continuity::ContinuityState;

/// Width a freshly opened block would get.
///
/// Uses the terminal's column count when known and positive, otherwise
/// `fallback`, capped at `max`.
#[must_use]
pub fn base_width(columns: Option<u16>, fallback: u16, max: u16) -> u16 {
    columns.filter(|cols| *cols > 0).unwrap_or(fallback).min(max)
}

/// Width for a call by the group titled `title`.
///
/// A continued block keeps the width recorded when it opened, so it stays
/// aligned even if the terminal was resized in between.
#[must_use]
pub fn resolve_width(state: &ContinuityState, title: &str, base: u16) -> u16 {
    match state.active_width {
        Some(width) if state.continues(title) => width,
        _ => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active(title: &str, width: u16) -> ContinuityState {
        ContinuityState {
            active_title: Some(title.to_string()),
            active_width: Some(width),
        }
    }

    #[test]
    fn terminal_columns_win_over_fallback() {
        assert_eq!(base_width(Some(120), 50, 1000), 120);
    }

    #[test]
    fn unknown_or_zero_columns_use_fallback() {
        assert_eq!(base_width(None, 50, 1000), 50);
        assert_eq!(base_width(Some(0), 50, 1000), 50);
    }

    #[test]
    fn max_width_caps() {
        assert_eq!(base_width(Some(300), 50, 80), 80);
        assert_eq!(base_width(None, 50, 20), 20);
    }

    #[test]
    fn continuing_keeps_recorded_width() {
        assert_eq!(resolve_width(&active("P1", 40), "P1", 90), 40);
    }

    #[test]
    fn other_title_uses_base() {
        assert_eq!(resolve_width(&active("P1", 40), "P2", 90), 90);
        assert_eq!(resolve_width(&ContinuityState::default(), "P1", 90), 90);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn base_never_exceeds_max(cols in proptest::option::of(0u16..2000), fallback in 1u16..500, max in 1u16..1500) {
            let width = base_width(cols, fallback, max);
            prop_assert!(width <= max);
            prop_assert!(width > 0);
        }

        #[test]
        fn continued_width_ignores_terminal(recorded in 1u16..500, base in 1u16..500) {
            let state = ContinuityState {
                active_title: Some("t".into()),
                active_width: Some(recorded),
            };
            prop_assert_eq!(resolve_width(&state, "t", base), recorded);
        }
    }
}
