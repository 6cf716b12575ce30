use super::config::AppConfig;
use super::input_handler::Action;
use super::keys::KeyConfig;
use crate::api::ApiError;
use crate::genre::GENRES;
use crate::notify::{Notice, Notifier, ToastSlot};
use crate::theme::Theme;
use crate::widget::{Effect, Phase, PlaylistItem, PlaylistWidget, RequestId, WidgetEvent};
use std::time::Instant;
use tracing::warn;

pub struct App {
    pub theme: Theme,
    pub keys: KeyConfig,

    pub is_running: bool,

    /// The playlist state machine 🎶
    pub widget: PlaylistWidget,

    /// Toast notification slot 🔔
    pub toasts: ToastSlot,

    /// Highlighted row in the genre popup
    pub genre_cursor: usize,
    /// First visible row of the playlist view
    pub playlist_scroll: usize,

    /// UI State
    pub show_keyhints: bool, // WhichKey popup visible
    pub ticks: u64,          // Drives the loading spinner
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            theme: config.theme.clone(),
            keys: config.keys.clone(),
            is_running: true,
            widget: PlaylistWidget::new(),
            toasts: ToastSlot::default(),
            genre_cursor: 0,
            playlist_scroll: 0,
            show_keyhints: false,
            ticks: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.widget.phase()
    }

    /// Runs a user action. Notices are shown right away; whatever is
    /// returned has to be performed by the caller.
    pub fn handle_action(&mut self, action: Action) -> Vec<Effect> {
        let event = match action {
            Action::Quit => {
                self.quit();
                return Vec::new();
            }
            Action::ToggleKeyhints => {
                self.show_keyhints = !self.show_keyhints;
                return Vec::new();
            }
            Action::CursorUp => {
                self.genre_cursor = self
                    .genre_cursor
                    .checked_sub(1)
                    .unwrap_or(GENRES.len() - 1);
                return Vec::new();
            }
            Action::CursorDown => {
                self.genre_cursor = (self.genre_cursor + 1) % GENRES.len();
                return Vec::new();
            }
            Action::ScrollUp => {
                self.playlist_scroll = self.playlist_scroll.saturating_sub(1);
                return Vec::new();
            }
            Action::ScrollDown => {
                let last = self.widget.state().playlist().len().saturating_sub(1);
                self.playlist_scroll = (self.playlist_scroll + 1).min(last);
                return Vec::new();
            }
            Action::StartCreating => {
                self.genre_cursor = 0;
                WidgetEvent::StartCreating
            }
            Action::SelectHighlighted => WidgetEvent::SelectGenre(&GENRES[self.genre_cursor]),
            Action::SelectIndex(index) => match GENRES.get(index) {
                Some(genre) => {
                    self.genre_cursor = index;
                    WidgetEvent::SelectGenre(genre)
                }
                None => return Vec::new(),
            },
            Action::CloseGenrePopup => WidgetEvent::CloseGenrePopup,
            Action::SignUp => WidgetEvent::SignUp,
            Action::SignIn => WidgetEvent::SignIn,
            Action::Generate => WidgetEvent::GeneratePlaylist,
            Action::ClosePlaylist => {
                self.playlist_scroll = 0;
                WidgetEvent::ClosePlaylist
            }
        };

        let effects = self.widget.dispatch(event);
        self.apply_notices(effects)
    }

    /// Feeds an API completion back into the widget.
    pub fn on_playlist_response(
        &mut self,
        request: RequestId,
        result: Result<Vec<PlaylistItem>, ApiError>,
    ) -> Vec<Effect> {
        let event = match result {
            Ok(items) => WidgetEvent::PlaylistLoaded { request, items },
            Err(e) => {
                warn!(request = request.value(), error = %e, "playlist generation failed");
                WidgetEvent::PlaylistFailed { request }
            }
        };
        self.playlist_scroll = 0;
        let effects = self.widget.dispatch(event);
        self.apply_notices(effects)
    }

    fn apply_notices(&mut self, effects: Vec<Effect>) -> Vec<Effect> {
        effects
            .into_iter()
            .filter_map(|effect| match effect {
                Effect::Notify(notice) => {
                    self.notify(notice);
                    None
                }
                other => Some(other),
            })
            .collect()
    }

    pub fn quit(&mut self) {
        self.is_running = false;
        self.widget.unmount();
    }

    /// Called every tick to update state
    pub fn on_tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
        self.toasts.expire(Instant::now());
    }
}

impl Notifier for App {
    fn notify(&mut self, notice: Notice) {
        self.toasts.notify(notice);
    }
}
