use crate::api::ApiError;
use crate::widget::{PlaylistItem, RequestId};
use crossterm::event::Event;

pub enum AppEvent {
    Input(Event),
    PlaylistResponse(RequestId, Result<Vec<PlaylistItem>, ApiError>),
    Tick,
}
