// Jump, gravity and explicit position integration for the avatar.

use crate::domain::state::AvatarState;

/// Starts a jump when requested from the ground. Returns true if the jump happened.
pub fn try_jump(avatar: &mut AvatarState, requested: bool, jump_force: f32) -> bool {
    if !(requested && avatar.on_ground) {
        return false;
    }
    avatar.velocity.y = jump_force;
    avatar.on_ground = false;
    true
}

pub fn apply_gravity(avatar: &mut AvatarState, gravity: f32) {
    avatar.velocity.y -= gravity;
}

/// Moves by the full velocity, which already includes this tick's gravity.
pub fn integrate(avatar: &mut AvatarState) {
    avatar.position += avatar.velocity;
}

/// Horizontal velocity never carries over between ticks; only vertical motion persists.
pub fn reset_horizontal(avatar: &mut AvatarState) {
    avatar.velocity.x = 0.0;
    avatar.velocity.z = 0.0;
}
