use crate::app::App;
use crate::widget::Phase;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the user asked for, independent of which key was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleKeyhints,
    StartCreating,
    SignUp,
    SignIn,
    CursorUp,
    CursorDown,
    SelectHighlighted,
    SelectIndex(usize),
    CloseGenrePopup,
    Generate,
    ScrollUp,
    ScrollDown,
    ClosePlaylist,
}

/// Maps a key press to an action for the current phase.
pub fn handle_key(key: KeyEvent, app: &App) -> Option<Action> {
    let keys = &app.keys;

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    // Key hints popup swallows everything except its own toggle, Esc and quit
    if app.show_keyhints {
        if keys.matches(key, &keys.toggle_keyhints) || key.code == KeyCode::Esc {
            return Some(Action::ToggleKeyhints);
        }
        if keys.matches(key, &keys.quit) {
            return Some(Action::Quit);
        }
        return None;
    }

    if keys.matches(key, &keys.toggle_keyhints) {
        return Some(Action::ToggleKeyhints);
    }

    let up = keys.matches(key, &keys.nav_up) || keys.matches(key, &keys.nav_up_alt);
    let down = keys.matches(key, &keys.nav_down) || keys.matches(key, &keys.nav_down_alt);

    let action = match app.phase() {
        Phase::Idle => {
            if keys.matches(key, &keys.start) || keys.matches(key, &keys.start_alt) {
                Some(Action::StartCreating)
            } else if keys.matches(key, &keys.sign_up) {
                Some(Action::SignUp)
            } else if keys.matches(key, &keys.sign_in) {
                Some(Action::SignIn)
            } else {
                None
            }
        }
        Phase::GenreSelection => {
            if keys.matches(key, &keys.close) {
                Some(Action::CloseGenrePopup)
            } else if keys.matches(key, &keys.select) {
                Some(Action::SelectHighlighted)
            } else if up {
                Some(Action::CursorUp)
            } else if down {
                Some(Action::CursorDown)
            } else if let KeyCode::Char(ch @ '0'..='9') = key.code {
                // 1..9 then 0 for the tenth genre
                let digit = ch.to_digit(10).unwrap_or(0) as usize;
                Some(Action::SelectIndex(if digit == 0 { 9 } else { digit - 1 }))
            } else {
                None
            }
        }
        Phase::GenreConfirmed => {
            if keys.matches(key, &keys.generate) || keys.matches(key, &keys.generate_alt) {
                Some(Action::Generate)
            } else if keys.matches(key, &keys.sign_up) {
                Some(Action::SignUp)
            } else if keys.matches(key, &keys.sign_in) {
                Some(Action::SignIn)
            } else {
                None
            }
        }
        Phase::Loading => None,
        Phase::PlaylistShown => {
            if keys.matches(key, &keys.close_playlist) || keys.matches(key, &keys.close) {
                Some(Action::ClosePlaylist)
            } else if up {
                Some(Action::ScrollUp)
            } else if down {
                Some(Action::ScrollDown)
            } else {
                None
            }
        }
    };

    // Quit is checked last so a rebound phase key can shadow it
    action.or_else(|| keys.matches(key, &keys.quit).then_some(Action::Quit))
}
