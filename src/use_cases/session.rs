// Session controller: pause, restart and game-over handling around one simulation.

use super::simulation::{InputFeed, Simulation};
use super::types::{FrameUpdate, GameMode, SessionCommand, SessionStatus};
use crate::domain::{InputIntent, TickEvent, WorldSnapshot};
use tracing::info;

pub struct Session {
    sim: Box<dyn Simulation>,
    status: SessionStatus,
    tick: u64,
    input: InputIntent,
    feed: Option<Box<dyn InputFeed>>,
}

impl Session {
    pub fn new(sim: Box<dyn Simulation>) -> Self {
        Self {
            sim,
            status: SessionStatus::Running,
            tick: 0,
            input: InputIntent::default(),
            feed: None,
        }
    }

    /// Reads controls from `feed` on every tick, replacing `Input` commands.
    pub fn with_feed(mut self, feed: Box<dyn InputFeed>) -> Self {
        self.feed = Some(feed);
        self
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn mode(&self) -> GameMode {
        self.sim.mode()
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        self.sim.snapshot()
    }

    /// Applies a command. Returns true when the status changed.
    pub fn apply(&mut self, command: SessionCommand) -> bool {
        let before = self.status;
        match command {
            SessionCommand::Input(input) => {
                self.input = input;
            }
            SessionCommand::TogglePause => {
                self.status = match self.status {
                    SessionStatus::Running => SessionStatus::Paused,
                    SessionStatus::Paused => SessionStatus::Running,
                    over @ SessionStatus::GameOver { .. } => over,
                };
            }
            SessionCommand::Restart { difficulty } => {
                self.sim.restart(difficulty);
                self.tick = 0;
                self.status = SessionStatus::Running;
                info!(mode = %self.sim.mode(), "session restarted");
            }
        }
        before != self.status
    }

    /// Runs one tick if the session is running.
    pub fn advance(&mut self) -> Option<FrameUpdate> {
        if self.status != SessionStatus::Running {
            return None;
        }

        if let Some(feed) = &self.feed {
            self.input = feed.intent_at(self.tick).unwrap_or_default();
        }
        let events = self.sim.step(&self.input);
        self.tick += 1;

        if let Some(reason) = events.iter().find_map(|ev| match ev {
            TickEvent::GameOver { reason } => Some(*reason),
            _ => None,
        }) {
            self.status = SessionStatus::GameOver { reason };
            info!(tick = self.tick, ?reason, "game over");
        }

        Some(FrameUpdate {
            tick: self.tick,
            status: self.status,
            snapshot: self.sim.snapshot(),
            events,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tuning::Difficulty;
    use crate::domain::{GameOverReason, Level};
    use crate::use_cases::platformer::PlatformerSim;
    use glam::Vec3;

    fn void_session() -> Session {
        // No platforms: the avatar falls until the threshold.
        Session::new(Box::new(PlatformerSim::new(
            Level::new(Vec3::ZERO),
            Difficulty::Medium,
        )))
    }

    struct JumpOnTick(u64);

    impl InputFeed for JumpOnTick {
        fn intent_at(&self, tick: u64) -> Option<InputIntent> {
            (tick <= self.0).then(|| InputIntent {
                jump: tick == self.0,
                ..InputIntent::default()
            })
        }
    }

    #[test]
    fn when_feed_is_set_then_each_tick_reads_its_own_intent() {
        let mut session = Session::new(Box::new(PlatformerSim::new(
            Level::classic(),
            Difficulty::Easy,
        )))
        .with_feed(Box::new(JumpOnTick(1)));
        // Commanded input is overridden by the feed.
        session.apply(SessionCommand::Input(InputIntent {
            jump: true,
            ..InputIntent::default()
        }));

        let landed = session.advance().unwrap();
        let jumped = session.advance().unwrap();
        let after = session.advance().unwrap();

        assert_eq!(landed.events, vec![TickEvent::Landed]);
        assert!(jumped.events.contains(&TickEvent::Jumped));
        assert!(!after.events.contains(&TickEvent::Jumped));
    }

    #[test]
    fn when_paused_then_advance_produces_nothing() {
        let mut session = void_session();

        assert!(session.apply(SessionCommand::TogglePause));
        assert!(session.advance().is_none());
        assert_eq!(session.tick(), 0);

        assert!(session.apply(SessionCommand::TogglePause));
        assert_eq!(session.advance().map(|f| f.tick), Some(1));
    }

    #[test]
    fn when_falling_forever_then_session_ends_and_stops_advancing() {
        let mut session = void_session();

        let mut last = None;
        while let Some(frame) = session.advance() {
            last = Some(frame);
            assert!(session.tick() < 1_000);
        }

        let last = last.expect("at least one frame");
        assert_eq!(
            last.status,
            SessionStatus::GameOver {
                reason: GameOverReason::Fell
            }
        );
        assert!(last.events.contains(&TickEvent::GameOver {
            reason: GameOverReason::Fell
        }));
        // Pause is ignored once over.
        assert!(!session.apply(SessionCommand::TogglePause));
    }

    #[test]
    fn when_restarted_after_game_over_then_running_from_tick_zero() {
        let mut session = void_session();
        while session.advance().is_some() {}

        assert!(session.apply(SessionCommand::Restart {
            difficulty: Some(Difficulty::Easy)
        }));

        assert_eq!(session.status(), SessionStatus::Running);
        assert_eq!(session.tick(), 0);
        let WorldSnapshot::Platformer(snapshot) = session.snapshot() else {
            panic!("expected platformer snapshot");
        };
        assert_eq!(snapshot.health, 150);
        assert_eq!(snapshot.avatar.position, Vec3::ZERO);
    }
}
