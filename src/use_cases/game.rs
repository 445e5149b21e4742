use super::session::Session;
use super::types::{FrameUpdate, SessionCommand, SessionStatus};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, broadcast, mpsc, watch};
use tracing::{debug, info};

pub async fn session_task(
    mut session: Session,
    mut command_rx: mpsc::Receiver<SessionCommand>,
    frame_tx: broadcast::Sender<FrameUpdate>,
    status_tx: watch::Sender<SessionStatus>,
    tick_interval: Duration,
    shutdown: Arc<Notify>,
) {
    // send_replace stores the value even while nobody is subscribed.
    status_tx.send_replace(session.status());
    info!(mode = %session.mode(), ?tick_interval, "session started");

    // Drive the fixed-step loop at the configured tick rate.
    let mut interval = tokio::time::interval(tick_interval);

    loop {
        tokio::select! {
            _ = shutdown.notified() => {
                // Exit cleanly when the session is removed.
                break;
            }
            _ = interval.tick() => {}
        }

        while let Ok(command) = command_rx.try_recv() {
            debug!(?command, "session command");
            if session.apply(command) {
                status_tx.send_replace(session.status());
            }
        }

        if let Some(frame) = session.advance() {
            if frame.status != *status_tx.borrow() {
                status_tx.send_replace(frame.status);
            }
            // No receivers is fine; frames are only for whoever listens.
            let _ = frame_tx.send(frame);
        }
    }

    info!(tick = session.tick(), "session stopped");
}
