use super::state::{Phase, PlaylistItem, RequestId, WidgetState};
use crate::genre::Genre;
use crate::notify::{Notice, GENERATE_FAILED, SIGN_IN_SOON, SIGN_UP_SOON};

/// A user intent or an API completion fed into the widget.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetEvent {
    StartCreating,
    CloseGenrePopup,
    SelectGenre(&'static Genre),
    SignUp,
    SignIn,
    GeneratePlaylist,
    PlaylistLoaded {
        request: RequestId,
        items: Vec<PlaylistItem>,
    },
    /// The cause is logged by whoever saw the error; the widget only needs the id.
    PlaylistFailed { request: RequestId },
    ClosePlaylist,
}

/// Work the caller has to carry out after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Notify(Notice),
    RequestPlaylist { request: RequestId, genre: String },
}

#[derive(Debug)]
pub struct Transition {
    pub state: WidgetState,
    pub effects: Vec<Effect>,
}

/// Pure transition function. Events that don't apply to the current phase
/// leave the state untouched and produce no effects.
pub fn reduce(mut state: WidgetState, event: WidgetEvent) -> Transition {
    let mut effects = Vec::new();

    match (state.phase, event) {
        (Phase::Idle, WidgetEvent::StartCreating) => {
            state.phase = Phase::GenreSelection;
        }
        (Phase::GenreSelection, WidgetEvent::CloseGenrePopup) => {
            state.phase = Phase::Idle;
        }
        (Phase::GenreSelection, WidgetEvent::SelectGenre(genre)) => {
            state.selected_genre = Some(genre);
            state.phase = Phase::GenreConfirmed;
        }
        (Phase::Idle | Phase::GenreConfirmed, WidgetEvent::SignUp) => {
            effects.push(Effect::Notify(Notice::info(SIGN_UP_SOON)));
        }
        (Phase::Idle | Phase::GenreConfirmed, WidgetEvent::SignIn) => {
            effects.push(Effect::Notify(Notice::info(SIGN_IN_SOON)));
        }
        (Phase::GenreConfirmed, WidgetEvent::GeneratePlaylist) => {
            if let Some(genre) = state.selected_genre {
                let request = RequestId(state.next_request);
                state.next_request += 1;
                state.phase = Phase::Loading;
                state.loading = true;
                state.pending = Some(request);
                effects.push(Effect::RequestPlaylist {
                    request,
                    genre: genre.name.to_string(),
                });
            }
        }
        (Phase::Loading, WidgetEvent::PlaylistLoaded { request, items })
            if state.pending == Some(request) =>
        {
            state.loading = false;
            state.pending = None;
            state.playlist = items;
            state.phase = Phase::PlaylistShown;
        }
        (Phase::Loading, WidgetEvent::PlaylistFailed { request })
            if state.pending == Some(request) =>
        {
            // Genre stays selected so the user can retry straight away.
            state.loading = false;
            state.pending = None;
            state.playlist.clear();
            state.phase = Phase::GenreConfirmed;
            effects.push(Effect::Notify(Notice::error(GENERATE_FAILED)));
        }
        (Phase::PlaylistShown, WidgetEvent::ClosePlaylist) => {
            state.playlist.clear();
            state.selected_genre = None;
            state.phase = Phase::Idle;
        }
        _ => {}
    }

    Transition { state, effects }
}
