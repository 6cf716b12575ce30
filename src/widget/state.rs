use crate::genre::Genre;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which panel the widget is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    GenreSelection,
    GenreConfirmed,
    Loading,
    PlaylistShown,
}

impl Phase {
    /// Phases in which a genre must be selected.
    pub fn holds_genre(self) -> bool {
        matches!(
            self,
            Phase::GenreConfirmed | Phase::Loading | Phase::PlaylistShown
        )
    }
}

/// One song entry returned by the generation API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub title: String,
    pub artist: String,
}

/// Tags an outbound request so a late answer can be told apart from the
/// current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(pub(crate) u64);

impl RequestId {
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidgetState {
    pub(crate) phase: Phase,
    pub(crate) selected_genre: Option<&'static Genre>,
    pub(crate) playlist: Vec<PlaylistItem>,
    pub(crate) loading: bool,
    pub(crate) pending: Option<RequestId>,
    pub(crate) next_request: u64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("loading flag set while in {0:?}")]
    LoadingOutsideLoadingPhase(Phase),
    #[error("in Loading without the loading flag")]
    LoadingPhaseNotLoading,
    #[error("{0} playlist items held while in {1:?}")]
    PlaylistOutsideShownPhase(usize, Phase),
    #[error("selected genre is {} in {phase:?}", presence(.has_genre))]
    GenreMismatch { phase: Phase, has_genre: bool },
    #[error("pending request is {} in {phase:?}", presence(.has_pending))]
    PendingMismatch { phase: Phase, has_pending: bool },
}

fn presence(flag: &bool) -> &'static str {
    if *flag {
        "set"
    } else {
        "unset"
    }
}

impl WidgetState {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selected_genre(&self) -> Option<&'static Genre> {
        self.selected_genre
    }

    pub fn playlist(&self) -> &[PlaylistItem] {
        &self.playlist
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn pending_request(&self) -> Option<RequestId> {
        self.pending
    }

    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let in_loading = self.phase == Phase::Loading;
        if self.loading && !in_loading {
            return Err(InvariantViolation::LoadingOutsideLoadingPhase(self.phase));
        }
        if in_loading && !self.loading {
            return Err(InvariantViolation::LoadingPhaseNotLoading);
        }
        if !self.playlist.is_empty() && self.phase != Phase::PlaylistShown {
            return Err(InvariantViolation::PlaylistOutsideShownPhase(
                self.playlist.len(),
                self.phase,
            ));
        }
        let has_genre = self.selected_genre.is_some();
        if has_genre != self.phase.holds_genre() {
            return Err(InvariantViolation::GenreMismatch {
                phase: self.phase,
                has_genre,
            });
        }
        let has_pending = self.pending.is_some();
        if has_pending != in_loading {
            return Err(InvariantViolation::PendingMismatch {
                phase: self.phase,
                has_pending,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genre::GENRES;

    #[test]
    fn test_default_is_idle_and_valid() {
        let state = WidgetState::default();
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.selected_genre().is_none());
        assert!(state.playlist().is_empty());
        assert!(!state.is_loading());
        assert_eq!(state.check_invariants(), Ok(()));
    }

    #[test]
    fn test_detects_loading_flag_outside_loading() {
        let state = WidgetState {
            phase: Phase::GenreConfirmed,
            selected_genre: Some(&GENRES[0]),
            loading: true,
            ..Default::default()
        };
        assert_eq!(
            state.check_invariants(),
            Err(InvariantViolation::LoadingOutsideLoadingPhase(
                Phase::GenreConfirmed
            ))
        );
    }

    #[test]
    fn test_detects_genre_in_idle() {
        let state = WidgetState {
            selected_genre: Some(&GENRES[3]),
            ..Default::default()
        };
        assert!(matches!(
            state.check_invariants(),
            Err(InvariantViolation::GenreMismatch {
                phase: Phase::Idle,
                has_genre: true
            })
        ));
    }

    #[test]
    fn test_detects_playlist_outside_shown() {
        let state = WidgetState {
            phase: Phase::GenreConfirmed,
            selected_genre: Some(&GENRES[0]),
            playlist: vec![PlaylistItem {
                title: "Essence".into(),
                artist: "Wizkid".into(),
            }],
            ..Default::default()
        };
        assert!(matches!(
            state.check_invariants(),
            Err(InvariantViolation::PlaylistOutsideShownPhase(1, _))
        ));
    }
}
