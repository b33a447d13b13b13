//! Render-state derivation: turning a collection snapshot into the one
//! thing the panel body should show.

use dash_core::{CollectionState, LoadStatus};

/// Per-panel wording. The empty description differs depending on whether
/// a search is active, matching the two distinct empty situations.
#[derive(Debug, Clone, Copy)]
pub struct PanelCopy {
    pub loading: &'static str,
    pub load_error: &'static str,
    pub empty_title: &'static str,
    pub empty_no_data: &'static str,
    pub empty_no_results: &'static str,
}

/// What the panel body renders. Exactly one of these applies at any time.
#[derive(Debug, PartialEq)]
pub enum PanelRender<'a, T> {
    Loading {
        label: &'static str,
    },
    Failed {
        message: String,
        can_retry: bool,
    },
    Empty {
        title: &'static str,
        description: &'static str,
    },
    Populated {
        rows: &'a [T],
    },
}

/// Derive the body state from a collection snapshot. An idle collection
/// renders as loading since its first fetch is about to happen.
pub fn derive_render<'a, T, S>(
    state: &'a CollectionState<T, S>,
    copy: &PanelCopy,
) -> PanelRender<'a, T> {
    match state.status {
        LoadStatus::Idle | LoadStatus::Loading => PanelRender::Loading {
            label: copy.loading,
        },
        LoadStatus::Failed => PanelRender::Failed {
            message: state
                .error
                .clone()
                .unwrap_or_else(|| copy.load_error.to_string()),
            can_retry: true,
        },
        LoadStatus::Succeeded if state.items.is_empty() => PanelRender::Empty {
            title: copy.empty_title,
            description: if state.search.trim().is_empty() {
                copy.empty_no_data
            } else {
                copy.empty_no_results
            },
        },
        LoadStatus::Succeeded => PanelRender::Populated {
            rows: &state.items,
        },
    }
}

/// Visual weight of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Success,
    Warning,
    Danger,
    Neutral,
}

#[cfg(test)]
mod tests {
    use super::*;

    const COPY: PanelCopy = PanelCopy {
        loading: "Loading things",
        load_error: "Failed to load things",
        empty_title: "No things found",
        empty_no_data: "No things have been added yet.",
        empty_no_results: "Try adjusting your search.",
    };

    fn state(status: LoadStatus) -> CollectionState<u32, ()> {
        let mut state = CollectionState::new((), 8);
        state.status = status;
        state
    }

    #[test]
    fn test_idle_renders_as_loading() {
        let state = state(LoadStatus::Idle);
        assert_eq!(
            derive_render(&state, &COPY),
            PanelRender::Loading { label: "Loading things" }
        );
    }

    #[test]
    fn test_failed_prefers_recorded_error() {
        let mut state = state(LoadStatus::Failed);
        state.error = Some("boom".to_string());
        match derive_render(&state, &COPY) {
            PanelRender::Failed { message, can_retry } => {
                assert_eq!(message, "boom");
                assert!(can_retry);
            }
            other => panic!("unexpected render: {other:?}"),
        }
    }

    #[test]
    fn test_empty_copy_depends_on_search() {
        let mut state = state(LoadStatus::Succeeded);
        match derive_render(&state, &COPY) {
            PanelRender::Empty { description, .. } => {
                assert_eq!(description, "No things have been added yet.")
            }
            other => panic!("unexpected render: {other:?}"),
        }
        state.search = "zzz".to_string();
        match derive_render(&state, &COPY) {
            PanelRender::Empty { description, .. } => {
                assert_eq!(description, "Try adjusting your search.")
            }
            other => panic!("unexpected render: {other:?}"),
        }
    }

    #[test]
    fn test_populated_borrows_rows() {
        let mut state = state(LoadStatus::Succeeded);
        state.items = vec![1, 2, 3];
        match derive_render(&state, &COPY) {
            PanelRender::Populated { rows } => assert_eq!(rows, &[1, 2, 3]),
            other => panic!("unexpected render: {other:?}"),
        }
    }
}
