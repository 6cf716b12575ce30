pub mod reducer;
pub mod state;

pub use reducer::{reduce, Effect, Transition, WidgetEvent};
pub use state::{InvariantViolation, Phase, PlaylistItem, RequestId, WidgetState};

use tracing::{debug, trace};

/// Owns the widget state; every mutation goes through [`PlaylistWidget::dispatch`].
#[derive(Debug)]
pub struct PlaylistWidget {
    state: WidgetState,
    mounted: bool,
}

impl Default for PlaylistWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaylistWidget {
    pub fn new() -> Self {
        Self {
            state: WidgetState::default(),
            mounted: true,
        }
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn dispatch(&mut self, event: WidgetEvent) -> Vec<Effect> {
        if !self.mounted {
            debug!(?event, "widget unmounted, dropping event");
            return Vec::new();
        }

        let from = self.state.phase;
        let Transition { state, effects } = reduce(std::mem::take(&mut self.state), event);
        self.state = state;

        debug_assert!(
            self.state.check_invariants().is_ok(),
            "invariant broken: {:?}",
            self.state.check_invariants()
        );

        if from != self.state.phase {
            debug!(?from, to = ?self.state.phase, "transition");
        } else {
            trace!(phase = ?from, effects = effects.len(), "no phase change");
        }
        effects
    }

    /// The genre confirmation text, while it is on screen.
    pub fn confirmation_message(&self) -> Option<String> {
        match (self.state.phase, self.state.selected_genre) {
            (Phase::GenreConfirmed, Some(genre)) => Some(genre.message()),
            _ => None,
        }
    }

    /// After this, late API completions can no longer touch the state.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genre::GENRES;

    #[test]
    fn test_confirmation_message_only_while_confirmed() {
        let mut widget = PlaylistWidget::new();
        assert!(widget.confirmation_message().is_none());

        widget.dispatch(WidgetEvent::StartCreating);
        widget.dispatch(WidgetEvent::SelectGenre(&GENRES[0]));
        let msg = widget.confirmation_message().unwrap();
        assert!(msg.contains("Afrobeats"));

        widget.dispatch(WidgetEvent::GeneratePlaylist);
        assert!(widget.confirmation_message().is_none());
    }

    #[test]
    fn test_unmounted_widget_ignores_completion() {
        let mut widget = PlaylistWidget::new();
        widget.dispatch(WidgetEvent::StartCreating);
        widget.dispatch(WidgetEvent::SelectGenre(&GENRES[4]));
        widget.dispatch(WidgetEvent::GeneratePlaylist);
        let request = widget.state().pending_request().unwrap();

        widget.unmount();
        let effects = widget.dispatch(WidgetEvent::PlaylistLoaded {
            request,
            items: vec![PlaylistItem {
                title: "So What".into(),
                artist: "Miles Davis".into(),
            }],
        });

        assert!(!widget.is_mounted());
        assert!(effects.is_empty());
        assert_eq!(widget.phase(), Phase::Loading);
        assert!(widget.state().playlist().is_empty());
    }
}
