use crate::domain::state::{SimState, TickEvent, Volume};
use glam::Vec3;

/// Removes every collectible the avatar overlaps and credits its reward.
///
/// Removal happens in place, so a collectible can only ever be credited once.
pub fn collect(
    state: &mut SimState,
    collectibles: &mut Vec<Volume>,
    half_extents: Vec3,
    reward: u32,
    events: &mut Vec<TickEvent>,
) {
    let avatar = state.avatar.bounds(half_extents);
    collectibles.retain(|coin| {
        if !avatar.overlaps(&coin.bounds) {
            return true;
        }
        state.score += reward;
        events.push(TickEvent::Collected {
            collectible_id: coin.id,
            value: reward,
            position: coin.bounds.center,
        });
        false
    });
}
