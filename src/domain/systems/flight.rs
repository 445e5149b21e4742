use crate::domain::state::{Craft, InputIntent};
use crate::domain::tuning::FlightTuning;

/// Throttle, strafe and altitude update for the helicopter.
///
/// Unlike the platformer avatar, the craft keeps momentum: throttle speed builds up while
/// forward/back is held and bleeds off slowly otherwise.
pub fn tick_craft(craft: &mut Craft, input: &InputIntent, cfg: &FlightTuning) {
    let forward = input.camera.forward;
    let right = input.camera.right;

    // throttle
    if input.forward {
        craft.speed = (craft.speed + cfg.acceleration).min(cfg.max_speed);
        craft.position += forward * craft.speed;
    } else if input.back {
        craft.speed = (craft.speed - cfg.acceleration).max(-cfg.max_speed / 2.0);
        craft.position += forward * craft.speed;
    } else {
        craft.speed *= 1.0 - cfg.deceleration;
    }

    // strafing only works with some airspeed
    if craft.speed.abs() > cfg.min_turn_speed {
        let strafe = craft.speed * cfg.strafe_factor;
        if input.left {
            craft.position -= right * strafe;
            let bank = forward - right;
            craft.heading = bank.x.atan2(bank.z);
        }
        if input.right {
            craft.position += right * strafe;
            let bank = forward + right;
            craft.heading = bank.x.atan2(bank.z);
        }
    }

    craft.position.y = craft.position.y.max(cfg.min_altitude);
}
