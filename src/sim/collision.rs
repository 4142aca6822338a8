//! Collision detection between the platform and falling items

use super::entity::{Bounds, Item, Player};

/// Ids of every item currently overlapping the player.
///
/// Items with an id at or above `newer_than` were spawned during the current
/// tick and are left for the next one.
pub fn colliding_items(player: &Player, items: &[Item], newer_than: u32) -> Vec<u32> {
    let player_box = player.bounds();
    items
        .iter()
        .filter(|item| item.id < newer_than)
        .filter(|item| player_box.overlaps(&item.bounds()))
        .map(|item| item.id)
        .collect()
}
