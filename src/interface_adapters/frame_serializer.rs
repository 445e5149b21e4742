use crate::interface_adapters::protocol::{FrameDto, FrameMessage, SessionStatusDto};
use crate::use_cases::{FrameUpdate, SessionStatus};
use std::sync::Arc;
use tokio::sync::{broadcast, watch};
use tracing::{error, warn};

/// Serializes each frame once and keeps the latest JSON for renderers that poll.
///
/// Paused sessions produce no frames, so status changes a frame has not already
/// reported are published as `Status` messages.
pub async fn frame_serializer(
    mut frame_rx: broadcast::Receiver<FrameUpdate>,
    mut status_rx: watch::Receiver<SessionStatus>,
    latest_tx: watch::Sender<Arc<str>>,
) {
    let mut published = *status_rx.borrow_and_update();
    let mut status_open = true;

    loop {
        tokio::select! {
            // Buffered frames go out before a later status change.
            biased;

            res = frame_rx.recv() => match res {
                Ok(frame) => {
                    published = frame.status;
                    publish(&latest_tx, &FrameMessage::Frame(FrameDto::from(frame)));
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    warn!(missed = n, "frame serializer lagged; skipping to latest frame");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    warn!("frame channel closed; serializer exiting");
                    break;
                }
            },
            changed = status_rx.changed(), if status_open => {
                if changed.is_err() {
                    status_open = false;
                    continue;
                }
                let status = *status_rx.borrow_and_update();
                if status != published {
                    published = status;
                    publish(&latest_tx, &FrameMessage::Status(SessionStatusDto::from(status)));
                }
            }
        }
    }
}

fn publish(latest_tx: &watch::Sender<Arc<str>>, msg: &FrameMessage) {
    match serde_json::to_string(msg) {
        Ok(txt) => {
            latest_tx.send_replace(Arc::from(txt));
        }
        Err(e) => error!(error = ?e, "failed to serialize frame message"),
    }
}
