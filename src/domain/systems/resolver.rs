// One platformer tick: moving platforms, avatar movement, then collision passes.

use super::obstacles::{ObstacleConfig, resolve_obstacles};
use super::platforms::{FirstAxisWins, PlatformPolicy};
use super::{intent, movement, oscillators, pickups};
use crate::domain::state::{GameOverReason, InputIntent, SimState, TickEvent, World};
use crate::domain::tuning::{PhysicsProfile, PickupTuning, PlayerTuning};

/// Movement and collision resolver for the platformer avatar.
///
/// `step` is deterministic: the same state, world, intent and profile always produce the
/// same result. It never fails; gameplay failure is reported as a `GameOver` event and
/// makes every later call a no-op.
#[derive(Debug, Clone)]
pub struct Resolver<P = FirstAxisWins> {
    policy: P,
    player: PlayerTuning,
    pickups: PickupTuning,
}

impl Resolver<FirstAxisWins> {
    pub fn new(player: PlayerTuning, pickups: PickupTuning) -> Self {
        Self::with_policy(FirstAxisWins, player, pickups)
    }
}

impl Default for Resolver<FirstAxisWins> {
    fn default() -> Self {
        Self::new(PlayerTuning::default(), PickupTuning::default())
    }
}

impl<P: PlatformPolicy> Resolver<P> {
    pub fn with_policy(policy: P, player: PlayerTuning, pickups: PickupTuning) -> Self {
        Self {
            policy,
            player,
            pickups,
        }
    }

    pub fn step(
        &self,
        state: &mut SimState,
        world: &mut World,
        input: &InputIntent,
        profile: &PhysicsProfile,
    ) -> Vec<TickEvent> {
        let mut events = Vec::new();
        if state.is_over() {
            return events;
        }

        // Platforms move first so the avatar resolves against their new positions.
        oscillators::advance_platforms(&mut world.platforms);

        let avatar = &mut state.avatar;
        let was_grounded = avatar.on_ground;

        intent::accumulate(avatar, input, profile.move_speed);
        if movement::try_jump(avatar, input.jump, profile.jump_force) {
            events.push(TickEvent::Jumped);
        }
        movement::apply_gravity(avatar, profile.gravity);
        movement::integrate(avatar);
        movement::reset_horizontal(avatar);

        self.policy
            .resolve(avatar, self.player.half_extents, &world.platforms);
        if avatar.on_ground && !was_grounded {
            events.push(TickEvent::Landed);
        }

        resolve_obstacles(
            state,
            &world.obstacles,
            ObstacleConfig {
                damage: profile.damage_per_hit,
                knockback: self.player.knockback,
                half_extents: self.player.half_extents,
            },
            &mut events,
        );
        if state.is_over() {
            return events;
        }

        pickups::collect(
            state,
            &mut world.collectibles,
            self.player.half_extents,
            self.pickups.reward,
            &mut events,
        );

        if state.avatar.position.y < self.player.fall_threshold {
            state.outcome = Some(GameOverReason::Fell);
            events.push(TickEvent::GameOver {
                reason: GameOverReason::Fell,
            });
        }

        events
    }
}
