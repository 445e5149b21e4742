// Framework bootstrap for the headless simulation runner.

use crate::domain::Level;
use crate::domain::tuning::{Difficulty, FlightTuning, ProjectileTuning};
use crate::frameworks::config;
use crate::interface_adapters::dispatch::{
    AudioCueSink, Dispatcher, HudSink, HudView, LogSink, Tone, dispatch_task,
};
use crate::interface_adapters::frame_serializer::frame_serializer;
use crate::interface_adapters::level_file::load_level;
use crate::interface_adapters::script::InputScript;
use crate::interface_adapters::utils::rng::{clock_seed, session_id};
use crate::use_cases::{
    FlightSim, FrameUpdate, GameMode, PlatformerSim, Session, SessionRegistry, SessionSettings,
    SessionStatus, Simulation,
};

use std::io::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc, watch};
use tracing::{debug, info, warn};

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// Everything a run needs, resolved from configuration up front.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub level: Level,
    pub script: InputScript,
    pub tick_interval: Duration,
    /// 0 runs until the script ends.
    pub max_ticks: u64,
    pub seed: u64,
}

impl RunOptions {
    pub fn from_env() -> Result<Self> {
        let mode = config::game_mode().map_err(std::io::Error::other)?;
        let difficulty = config::difficulty().map_err(std::io::Error::other)?;
        let level = match config::level_path() {
            Some(path) => load_level(&path).map_err(std::io::Error::other)?,
            None => Level::classic(),
        };
        let script = match config::input_script() {
            Some(path) => InputScript::load(&path).map_err(std::io::Error::other)?,
            None => InputScript::default(),
        };

        Ok(Self {
            mode,
            difficulty,
            level,
            script,
            tick_interval: config::tick_interval(),
            max_ticks: config::max_ticks(),
            seed: config::seed().unwrap_or_else(clock_seed),
        })
    }

    fn tick_limit(&self) -> u64 {
        if self.max_ticks > 0 {
            self.max_ticks
        } else {
            self.script.total_ticks()
        }
    }
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub session_id: String,
    pub ticks: u64,
    pub score: u32,
    pub status: SessionStatus,
    pub hud: HudView,
    /// JSON of the last frame the serializer produced.
    pub last_frame: Arc<str>,
}

fn build_simulation(options: &RunOptions) -> Box<dyn Simulation> {
    match options.mode {
        GameMode::Platformer => Box::new(PlatformerSim::new(
            options.level.clone(),
            options.difficulty,
        )),
        GameMode::Flight => Box::new(FlightSim::new(
            FlightTuning::default(),
            ProjectileTuning::default(),
            options.seed,
        )),
    }
}

// Stands in for an audio backend: holds each tone for its duration.
async fn tone_player(mut tone_rx: mpsc::Receiver<Tone>) {
    while let Some(tone) = tone_rx.recv().await {
        debug!(frequency_hz = tone.frequency_hz, duration = ?tone.duration, "tone");
        tokio::time::sleep(tone.duration).await;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Progress {
    ticks: u64,
    score: u32,
    status: SessionStatus,
}

impl Progress {
    fn record(&mut self, frame: &FrameUpdate) {
        self.ticks = frame.tick;
        self.score = frame.snapshot.score();
        self.status = frame.status;
    }
}

// Follows frames until game over or `limit` ticks. A terminal session produces no
// further frames, so after a lag the status watch decides whether it already ended.
async fn follow_session(
    frame_rx: &mut broadcast::Receiver<FrameUpdate>,
    status_rx: &mut watch::Receiver<SessionStatus>,
    limit: u64,
) -> Progress {
    let mut progress = Progress {
        ticks: 0,
        score: 0,
        status: SessionStatus::Running,
    };
    loop {
        match frame_rx.recv().await {
            Ok(frame) => {
                progress.record(&frame);
                if progress.status.is_terminal() || progress.ticks >= limit {
                    break;
                }
            }
            Err(broadcast::error::RecvError::Lagged(n)) => {
                warn!(missed = n, "runner lagged behind the session");
                let current = *status_rx.borrow_and_update();
                if current.is_terminal() {
                    while let Ok(frame) = frame_rx.try_recv() {
                        progress.record(&frame);
                    }
                    progress.status = current;
                    break;
                }
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
    progress
}

/// Runs one session to game over or the tick limit, feeding it the scripted input.
pub async fn run(options: RunOptions) -> Result<RunSummary> {
    let limit = options.tick_limit();
    if limit == 0 {
        return Err(std::io::Error::other(
            "no tick limit: set MAX_TICKS or provide an input script",
        ));
    }

    let registry = SessionRegistry::new(SessionSettings {
        command_channel_capacity: config::COMMAND_CHANNEL_CAPACITY,
        frame_broadcast_capacity: config::FRAME_BROADCAST_CAPACITY,
        tick_interval: options.tick_interval,
    });

    // Scripted input is read by the session on every tick.
    let session =
        Session::new(build_simulation(&options)).with_feed(Box::new(options.script.clone()));

    let id = session_id();
    let handle = registry
        .create_session(id.clone(), session)
        .await
        .map_err(std::io::Error::other)?;
    info!(
        session_id = %id,
        mode = %options.mode,
        difficulty = options.difficulty.as_str(),
        tick_limit = limit,
        "run started"
    );

    // Presentation side effects run on their own tasks.
    let (tone_tx, tone_rx) = mpsc::channel::<Tone>(config::TONE_CHANNEL_CAPACITY);
    let (hud_tx, hud_rx) = watch::channel(HudView::default());
    let (latest_tx, latest_rx) = watch::channel::<Arc<str>>(Arc::from(""));
    let dispatcher = Dispatcher::new()
        .with(HudSink::new(hud_tx))
        .with(AudioCueSink::new(tone_tx))
        .with(LogSink);
    let tasks = [
        tokio::spawn(dispatch_task(
            handle.subscribe_frames(),
            handle.watch_status(),
            dispatcher,
        )),
        tokio::spawn(tone_player(tone_rx)),
        tokio::spawn(frame_serializer(
            handle.subscribe_frames(),
            handle.watch_status(),
            latest_tx,
        )),
    ];

    let mut frame_rx = handle.subscribe_frames();
    let mut status_rx = handle.watch_status();
    let progress = follow_session(&mut frame_rx, &mut status_rx, limit).await;

    registry
        .remove_session(&id)
        .await
        .map_err(std::io::Error::other)?;
    drop(frame_rx);
    drop(status_rx);
    drop(handle);
    for task in tasks {
        if let Err(e) = task.await {
            warn!(error = %e, "presentation task failed");
        }
    }

    let summary = RunSummary {
        session_id: id,
        ticks: progress.ticks,
        score: progress.score,
        status: progress.status,
        hud: hud_rx.borrow().clone(),
        last_frame: latest_rx.borrow().clone(),
    };
    info!(
        session_id = %summary.session_id,
        ticks = summary.ticks,
        score = summary.score,
        status = ?summary.status,
        "run finished"
    );
    Ok(summary)
}

pub async fn run_with_config() -> Result<RunSummary> {
    init_runtime();
    let options = RunOptions::from_env().inspect_err(|e| {
        tracing::error!(error = %e, "invalid configuration");
    })?;
    run(options).await.inspect_err(|e| {
        tracing::error!(error = %e, "run failed");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GameOverReason;
    use glam::Vec3;

    #[tokio::test(start_paused = true)]
    async fn when_runner_lags_past_game_over_then_it_still_stops() {
        let registry = SessionRegistry::new(SessionSettings {
            command_channel_capacity: 4,
            frame_broadcast_capacity: 1,
            tick_interval: Duration::from_millis(10),
        });
        let session = Session::new(Box::new(PlatformerSim::new(
            Level::new(Vec3::ZERO),
            Difficulty::Medium,
        )));
        let handle = registry
            .create_session("lag".to_string(), session)
            .await
            .unwrap();
        let mut frame_rx = handle.subscribe_frames();
        let mut status_rx = handle.watch_status();
        handle
            .watch_status()
            .wait_for(SessionStatus::is_terminal)
            .await
            .unwrap();

        let progress = tokio::time::timeout(
            Duration::from_secs(5),
            follow_session(&mut frame_rx, &mut status_rx, 10_000),
        )
        .await
        .unwrap();

        assert_eq!(
            progress.status,
            SessionStatus::GameOver {
                reason: GameOverReason::Fell
            }
        );
        assert!(progress.ticks > 1);
    }
}
