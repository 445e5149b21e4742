mod support;

use glam::Vec3;
use platformer_sim::domain::systems::Resolver;
use platformer_sim::domain::{
    CameraBasis, GameOverReason, InputIntent, SimState, TickEvent,
};
use support::{coin, floor, moving_platform, obstacle, platform, profile, world};

#[test]
fn when_resting_without_input_or_gravity_then_position_never_changes() {
    let resolver = Resolver::default();
    let mut world = world([floor()]);
    let mut state = support::standing_on_floor(10);
    let before = state.avatar.position;

    for _ in 0..20 {
        let events = resolver.step(&mut state, &mut world, &InputIntent::default(), &profile(0.0));
        assert!(events.is_empty());
    }

    assert_eq!(state.avatar.position, before);
    assert!(state.avatar.on_ground);
}

#[test]
fn when_falling_freely_then_vertical_velocity_grows_by_gravity_each_tick() {
    let resolver = Resolver::default();
    let mut world = world([]);
    let mut state = SimState::new(Vec3::new(0.0, 100.0, 0.0), 10);

    for n in 1..=5 {
        resolver.step(&mut state, &mut world, &InputIntent::default(), &profile(0.5));
        assert_eq!(state.avatar.velocity.y, -0.5 * n as f32);
    }
    assert_eq!(state.avatar.position.y, 92.5);
}

#[test]
fn when_falling_onto_a_platform_then_bottom_sits_exactly_on_its_top() {
    let resolver = Resolver::default();
    let mut world = world([floor()]);
    let mut state = SimState::new(Vec3::new(0.0, 1.3, 0.0), 10);
    state.avatar.velocity.y = -0.4;

    let events = resolver.step(&mut state, &mut world, &InputIntent::default(), &profile(0.05));

    assert_eq!(state.avatar.position.y - support::HALF.y, 0.5);
    assert_eq!(state.avatar.velocity.y, 0.0);
    assert!(state.avatar.on_ground);
    assert_eq!(events, vec![TickEvent::Landed]);
}

#[test]
fn when_touching_an_obstacle_then_health_drops_by_the_profile_damage() {
    let resolver = Resolver::default();
    let mut world = world([obstacle(7, Vec3::new(0.5, 5.0, 0.0))]);
    let mut state = SimState::new(Vec3::new(0.0, 5.0, 0.0), 10);

    let events = resolver.step(&mut state, &mut world, &InputIntent::default(), &profile(0.0));

    assert_eq!(state.health, 8);
    assert_eq!(
        events,
        vec![TickEvent::Hit {
            obstacle_id: 7,
            damage: 2,
            health: 8
        }]
    );
    // Knocked away from the obstacle center along -X.
    assert_eq!(state.avatar.position, Vec3::new(-0.5, 5.0, 0.0));
}

#[test]
fn when_health_runs_out_then_game_over_is_reported_once_and_damage_stops() {
    // No knockback keeps the avatar inside the obstacle.
    let resolver = support::resolver_with_knockback(0.0);
    let mut world = world([obstacle(7, Vec3::new(0.5, 5.0, 0.0))]);
    let mut state = SimState::new(Vec3::new(0.0, 5.0, 0.0), 3);

    let first = resolver.step(&mut state, &mut world, &InputIntent::default(), &profile(0.0));
    let second = resolver.step(&mut state, &mut world, &InputIntent::default(), &profile(0.0));
    let third = resolver.step(&mut state, &mut world, &InputIntent::default(), &profile(0.0));

    assert_eq!(first.len(), 1);
    assert_eq!(
        second,
        vec![
            TickEvent::Hit {
                obstacle_id: 7,
                damage: 2,
                health: 0
            },
            TickEvent::GameOver {
                reason: GameOverReason::HealthZero
            },
        ]
    );
    assert!(third.is_empty());
    assert_eq!(state.health, 0);
    assert_eq!(state.outcome, Some(GameOverReason::HealthZero));
}

#[test]
fn when_overlapping_a_coin_then_it_is_collected_exactly_once() {
    let resolver = Resolver::default();
    let mut world = world([coin(40, Vec3::new(0.0, 5.0, 0.0))]);
    let mut state = SimState::new(Vec3::new(0.0, 5.0, 0.0), 10);

    let first = resolver.step(&mut state, &mut world, &InputIntent::default(), &profile(0.0));
    let second = resolver.step(&mut state, &mut world, &InputIntent::default(), &profile(0.0));

    assert_eq!(state.score, 10);
    assert_eq!(first.len(), 1);
    assert!(matches!(
        first[0],
        TickEvent::Collected {
            collectible_id: 40,
            value: 10,
            ..
        }
    ));
    assert!(second.is_empty());
    assert!(world.collectibles.is_empty());
}

#[test]
fn when_a_moving_platform_runs_then_it_ping_pongs_between_its_bounds() {
    let resolver = Resolver::default();
    let lift = moving_platform(3, Vec3::new(50.0, 0.0, 50.0), Vec3::new(6.0, 1.0, 6.0), 3.0, 0.02);
    let mut world = world([lift]);
    let mut state = SimState::new(Vec3::ZERO, 10);

    let mut heights = Vec::new();
    for _ in 0..320 {
        resolver.step(&mut state, &mut world, &InputIntent::default(), &profile(0.0));
        heights.push(world.platforms[0].bounds.center.y);
    }

    // One step of overshoot is allowed at either end before reversing.
    assert!(heights.iter().all(|y| (-0.03..=3.03).contains(y)));
    let peak = heights.iter().cloned().fold(f32::MIN, f32::max);
    assert!(peak >= 3.0);
    assert!(heights[319] < 0.5);
    assert!(heights[200] < heights[150]);
}

#[test]
fn when_walking_into_a_wall_then_avatar_stops_at_its_edge() {
    let resolver = Resolver::default();
    // Tall slab spanning x 2..4 and y -1..3.
    let mut world = world([platform(9, Vec3::new(3.0, 1.0, 0.0), Vec3::new(2.0, 4.0, 10.0))]);
    let mut state = SimState::new(Vec3::new(1.45, 1.0, 0.0), 10);
    let walk = InputIntent {
        forward: true,
        camera: CameraBasis::from_look_direction(Vec3::X),
        ..InputIntent::default()
    };

    resolver.step(&mut state, &mut world, &walk, &profile(0.0));

    assert_eq!(state.avatar.position.x, 1.5);
    assert_eq!(state.avatar.position.y, 1.0);
    assert_eq!(state.avatar.velocity.x, 0.0);
}

#[test]
fn when_falling_below_the_threshold_then_the_run_ends() {
    let resolver = Resolver::default();
    let mut world = world([]);
    let mut state = SimState::new(Vec3::new(0.0, -9.5, 0.0), 10);

    let events = resolver.step(&mut state, &mut world, &InputIntent::default(), &profile(1.0));

    assert_eq!(
        events,
        vec![TickEvent::GameOver {
            reason: GameOverReason::Fell
        }]
    );
    assert!(
        resolver
            .step(&mut state, &mut world, &InputIntent::default(), &profile(1.0))
            .is_empty()
    );
}

#[test]
fn when_jumping_from_the_ground_then_jumped_is_emitted_and_avatar_rises() {
    let resolver = Resolver::default();
    let mut world = world([floor()]);
    let mut state = support::standing_on_floor(10);
    let jump = InputIntent {
        jump: true,
        ..InputIntent::default()
    };

    let events = resolver.step(&mut state, &mut world, &jump, &profile(0.05));

    assert_eq!(events, vec![TickEvent::Jumped]);
    assert!(!state.avatar.on_ground);
    assert!((state.avatar.position.y - 2.45).abs() < 1e-5);
}
