// Presentation side effects driven by frame updates: HUD text, audio cues and logs.

use crate::domain::{GameOverReason, TickEvent, WorldSnapshot};
use crate::use_cases::{FrameUpdate, SessionStatus};
use std::time::Duration;
use tokio::sync::{broadcast, mpsc, watch};
use tracing::{debug, info, warn};

/// Something that reacts to session output. Sinks must never block the caller.
pub trait EventSink: Send {
    fn on_frame(&mut self, frame: &FrameUpdate);

    fn on_status(&mut self, _status: SessionStatus) {}
}

#[derive(Default)]
pub struct Dispatcher {
    sinks: Vec<Box<dyn EventSink>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, sink: impl EventSink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    pub fn dispatch(&mut self, frame: &FrameUpdate) {
        for sink in &mut self.sinks {
            sink.on_frame(frame);
        }
    }

    pub fn dispatch_status(&mut self, status: SessionStatus) {
        for sink in &mut self.sinks {
            sink.on_status(status);
        }
    }
}

/// Fans frames and status changes out to the dispatcher until the session goes away.
pub async fn dispatch_task(
    mut frame_rx: broadcast::Receiver<FrameUpdate>,
    mut status_rx: watch::Receiver<SessionStatus>,
    mut dispatcher: Dispatcher,
) {
    let mut status_open = true;
    loop {
        tokio::select! {
            frame = frame_rx.recv() => match frame {
                Ok(frame) => dispatcher.dispatch(&frame),
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    // Missed frames are gone; keep going from the next one.
                    warn!(missed = n, "dispatch lagged; skipping to latest frame");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    debug!("frame channel closed; dispatch exiting");
                    break;
                }
            },
            changed = status_rx.changed(), if status_open => {
                if changed.is_err() {
                    status_open = false;
                    continue;
                }
                let status = *status_rx.borrow_and_update();
                dispatcher.dispatch_status(status);
            }
        }
    }
}

/// What a heads-up display shows.
#[derive(Debug, Clone, PartialEq)]
pub struct HudView {
    pub score_text: String,
    /// Health bar fill in percent; `None` in modes without health.
    pub health_percent: Option<f32>,
    pub banner: Option<&'static str>,
}

impl Default for HudView {
    fn default() -> Self {
        Self {
            score_text: "Score: 0".to_string(),
            health_percent: None,
            banner: None,
        }
    }
}

/// Keeps a `HudView` up to date and publishes it on a watch channel.
pub struct HudSink {
    view: HudView,
    view_tx: watch::Sender<HudView>,
}

impl HudSink {
    pub fn new(view_tx: watch::Sender<HudView>) -> Self {
        Self {
            view: HudView::default(),
            view_tx,
        }
    }

    fn publish(&self) {
        self.view_tx.send_if_modified(|current| {
            if *current == self.view {
                return false;
            }
            *current = self.view.clone();
            true
        });
    }
}

fn banner_for(status: SessionStatus) -> Option<&'static str> {
    match status {
        SessionStatus::Running => None,
        SessionStatus::Paused => Some("Paused"),
        SessionStatus::GameOver { .. } => Some("Game Over"),
    }
}

impl EventSink for HudSink {
    fn on_frame(&mut self, frame: &FrameUpdate) {
        self.view.score_text = format!("Score: {}", frame.snapshot.score());
        self.view.health_percent = match &frame.snapshot {
            WorldSnapshot::Platformer(s) if s.max_health > 0 => {
                Some(s.health.max(0) as f32 / s.max_health as f32 * 100.0)
            }
            _ => None,
        };
        self.view.banner = banner_for(frame.status);
        self.publish();
    }

    fn on_status(&mut self, status: SessionStatus) {
        self.view.banner = banner_for(status);
        self.publish();
    }
}

/// A short beep request for whatever plays audio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration: Duration,
}

impl Tone {
    pub const fn new(frequency_hz: f32, millis: u64) -> Self {
        Self {
            frequency_hz,
            duration: Duration::from_millis(millis),
        }
    }

    pub fn for_event(event: &TickEvent) -> Option<Self> {
        match event {
            TickEvent::Jumped => Some(Tone::new(880.0, 100)),
            TickEvent::Collected { .. } => Some(Tone::new(1320.0, 100)),
            TickEvent::Hit { .. } => Some(Tone::new(220.0, 200)),
            TickEvent::GameOver { .. } => Some(Tone::new(110.0, 500)),
            _ => None,
        }
    }
}

/// Turns events into tones. Tones are dropped rather than awaited when the player is busy.
pub struct AudioCueSink {
    tone_tx: mpsc::Sender<Tone>,
}

impl AudioCueSink {
    pub fn new(tone_tx: mpsc::Sender<Tone>) -> Self {
        Self { tone_tx }
    }
}

impl EventSink for AudioCueSink {
    fn on_frame(&mut self, frame: &FrameUpdate) {
        for tone in frame.events.iter().filter_map(Tone::for_event) {
            if let Err(e) = self.tone_tx.try_send(tone) {
                debug!(error = %e, "tone dropped");
            }
        }
    }
}

/// One structured log record per event.
pub struct LogSink;

impl EventSink for LogSink {
    fn on_frame(&mut self, frame: &FrameUpdate) {
        let tick = frame.tick;
        for event in &frame.events {
            match event {
                TickEvent::Jumped => debug!(tick, "jumped"),
                TickEvent::Landed => debug!(tick, "landed"),
                TickEvent::Hit {
                    obstacle_id,
                    damage,
                    health,
                } => info!(tick, obstacle_id, damage, health, "hit obstacle"),
                TickEvent::Collected {
                    collectible_id,
                    value,
                    ..
                } => info!(tick, collectible_id, value, "collected"),
                TickEvent::Fired { projectile_id } => debug!(tick, projectile_id, "fired"),
                TickEvent::EnemyDestroyed {
                    enemy_id, value, ..
                } => info!(tick, enemy_id, value, "enemy destroyed"),
                TickEvent::GameOver { reason } => {
                    let reason = match reason {
                        GameOverReason::Fell => "fell",
                        GameOverReason::HealthZero => "health_zero",
                    };
                    info!(tick, reason, score = frame.snapshot.score(), "game over");
                }
            }
        }
    }

    fn on_status(&mut self, status: SessionStatus) {
        info!(?status, "session status changed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tuning::Difficulty;
    use crate::domain::Level;
    use crate::use_cases::{PlatformerSim, Simulation};

    fn frame(events: Vec<TickEvent>, status: SessionStatus) -> FrameUpdate {
        let sim = PlatformerSim::new(Level::classic(), Difficulty::Medium);
        FrameUpdate {
            tick: 1,
            status,
            snapshot: sim.snapshot(),
            events,
        }
    }

    #[test]
    fn when_frame_arrives_then_hud_shows_score_and_full_health() {
        let (view_tx, view_rx) = watch::channel(HudView::default());
        let mut hud = HudSink::new(view_tx);

        hud.on_frame(&frame(Vec::new(), SessionStatus::Running));

        let view = view_rx.borrow().clone();
        assert_eq!(view.score_text, "Score: 0");
        assert_eq!(view.health_percent, Some(100.0));
        assert_eq!(view.banner, None);
    }

    #[test]
    fn when_paused_then_hud_shows_banner() {
        let (view_tx, view_rx) = watch::channel(HudView::default());
        let mut hud = HudSink::new(view_tx);

        hud.on_status(SessionStatus::Paused);

        assert_eq!(view_rx.borrow().banner, Some("Paused"));
    }

    #[test]
    fn when_events_map_to_tones_then_they_are_queued_in_order() {
        let (tone_tx, mut tone_rx) = mpsc::channel(8);
        let mut audio = AudioCueSink::new(tone_tx);

        audio.on_frame(&frame(
            vec![
                TickEvent::Jumped,
                TickEvent::Landed,
                TickEvent::GameOver {
                    reason: GameOverReason::Fell,
                },
            ],
            SessionStatus::GameOver {
                reason: GameOverReason::Fell,
            },
        ));

        assert_eq!(tone_rx.try_recv().unwrap(), Tone::new(880.0, 100));
        assert_eq!(tone_rx.try_recv().unwrap(), Tone::new(110.0, 500));
        assert!(tone_rx.try_recv().is_err());
    }

    #[test]
    fn when_tone_queue_is_full_then_extra_tones_are_dropped() {
        let (tone_tx, mut tone_rx) = mpsc::channel(1);
        let mut audio = AudioCueSink::new(tone_tx);

        audio.on_frame(&frame(
            vec![TickEvent::Jumped, TickEvent::Jumped, TickEvent::Jumped],
            SessionStatus::Running,
        ));

        assert!(tone_rx.try_recv().is_ok());
        assert!(tone_rx.try_recv().is_err());
    }
}
