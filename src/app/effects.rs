use crate::api::PlaylistApi;
use crate::app::events::AppEvent;
use crate::widget::Effect;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

/// Starts the outbound work described by `effects`. Each playlist request
/// runs on its own task and reports back through `tx`.
pub fn perform(
    effects: Vec<Effect>,
    api: &Arc<dyn PlaylistApi>,
    tx: &mpsc::Sender<AppEvent>,
) -> Vec<JoinHandle<()>> {
    let mut handles = Vec::new();

    for effect in effects {
        match effect {
            Effect::RequestPlaylist { request, genre } => {
                let api = Arc::clone(api);
                let tx = tx.clone();
                handles.push(tokio::spawn(async move {
                    let result = api.generate_song_list(&genre).await;
                    if tx
                        .send(AppEvent::PlaylistResponse(request, result))
                        .await
                        .is_err()
                    {
                        debug!(request = request.value(), "app closed, dropping playlist response");
                    }
                }));
            }
            Effect::Notify(notice) => {
                trace!(message = %notice.message, "notice reached effect runner, ignoring");
            }
        }
    }

    handles
}
