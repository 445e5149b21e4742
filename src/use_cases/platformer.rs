// Platformer game mode: the resolver plus the level it restarts from.

use super::simulation::Simulation;
use super::types::GameMode;
use crate::domain::systems::Resolver;
use crate::domain::tuning::{Difficulty, PhysicsProfile, PlayerTuning};
use crate::domain::{
    AvatarPose, AvatarSnapshot, InputIntent, Level, PlatformerSnapshot, SimState, TickEvent,
    TuningError, VolumeSnapshot, World, WorldSnapshot,
};
use tracing::info;

pub struct PlatformerSim {
    level: Level,
    world: World,
    state: SimState,
    profile: PhysicsProfile,
    resolver: Resolver,
    // Whether movement keys were held on the last tick, for the pose hint.
    moving: bool,
}

impl PlatformerSim {
    pub fn new(level: Level, difficulty: Difficulty) -> Self {
        let resolver = Resolver::new(PlayerTuning::default(), level.pickups());
        Self::build(level, difficulty.profile(), resolver)
    }

    /// Runs with a hand-tuned profile instead of one of the difficulty presets.
    pub fn with_profile(
        level: Level,
        profile: PhysicsProfile,
        resolver: Resolver,
    ) -> Result<Self, TuningError> {
        profile.validate()?;
        Ok(Self::build(level, profile, resolver))
    }

    fn build(level: Level, profile: PhysicsProfile, resolver: Resolver) -> Self {
        let world = level.instantiate();
        let state = SimState::new(level.spawn, profile.max_health);
        Self {
            level,
            world,
            state,
            profile,
            resolver,
            moving: false,
        }
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn profile(&self) -> &PhysicsProfile {
        &self.profile
    }
}

impl Simulation for PlatformerSim {
    fn mode(&self) -> GameMode {
        GameMode::Platformer
    }

    fn step(&mut self, input: &InputIntent) -> Vec<TickEvent> {
        self.moving = input.is_moving();
        self.resolver
            .step(&mut self.state, &mut self.world, input, &self.profile)
    }

    fn restart(&mut self, difficulty: Option<Difficulty>) {
        if let Some(difficulty) = difficulty {
            self.profile = difficulty.profile();
            info!(difficulty = difficulty.as_str(), "difficulty changed");
        }
        self.world = self.level.instantiate();
        self.state = SimState::new(self.level.spawn, self.profile.max_health);
        self.moving = false;
    }

    fn snapshot(&self) -> WorldSnapshot {
        let avatar = &self.state.avatar;
        let volumes = self
            .world
            .platforms
            .iter()
            .chain(&self.world.obstacles)
            .chain(&self.world.collectibles)
            .map(VolumeSnapshot::from)
            .collect();

        WorldSnapshot::Platformer(PlatformerSnapshot {
            avatar: AvatarSnapshot {
                position: avatar.position,
                velocity: avatar.velocity,
                on_ground: avatar.on_ground,
                pose: AvatarPose::from_motion(avatar.on_ground, self.moving),
            },
            health: self.state.health,
            max_health: self.profile.max_health,
            score: self.state.score,
            volumes,
        })
    }
}
