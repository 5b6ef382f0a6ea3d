//! Item pickups

use super::collision::circle_rect_overlap;
use super::level::ItemKind;
use super::state::{GameEvent, GameState, ItemId};
use crate::consts::*;

/// Collect every item the player is touching
pub fn collect_items(state: &mut GameState) {
    let body = state.player.body();
    let touched: Vec<ItemId> = state
        .items
        .iter()
        .filter(|(_, item)| circle_rect_overlap(&item.shape(), &body))
        .map(|(id, _)| id)
        .collect();

    for id in touched {
        // Removal first: an item can only ever pay out once
        let Some(item) = state.items.remove(id) else {
            continue;
        };

        match item.kind {
            ItemKind::Health => {
                state.player.heal(HEALTH_PACK_RESTORE);
            }
            ItemKind::Coin => {
                state.score += COIN_SCORE;
            }
        }
        log::debug!(
            "Collected {:?} (health {}, score {})",
            item.kind,
            state.player.health,
            state.score
        );
        state.emit(GameEvent::ItemCollected { id, kind: item.kind });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Item;
    use glam::Vec2;
    use slotmap::SlotMap;

    fn with_items(items: &[(Vec2, ItemKind)]) -> GameState {
        let mut state = GameState::new(1);
        state.items = SlotMap::with_key();
        for &(pos, kind) in items {
            state.items.insert(Item { pos, kind });
        }
        state.player.pos = Vec2::new(800.0, 440.0);
        state
    }

    #[test]
    fn test_coin_at_full_health() {
        let mut state = with_items(&[(Vec2::new(800.0, 440.0), ItemKind::Coin)]);
        collect_items(&mut state);
        assert_eq!(state.score, 10);
        assert_eq!(state.player.health, 100);
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_health_pack_caps() {
        let mut state = with_items(&[(Vec2::new(810.0, 450.0), ItemKind::Health)]);
        state.player.health = 90;
        collect_items(&mut state);
        assert_eq!(state.player.health, 100);
    }

    #[test]
    fn test_health_pack_restores() {
        let mut state = with_items(&[(Vec2::new(810.0, 450.0), ItemKind::Health)]);
        state.player.health = 40;
        collect_items(&mut state);
        assert_eq!(state.player.health, 65);
    }

    #[test]
    fn test_no_double_pickup() {
        let mut state = with_items(&[(Vec2::new(800.0, 440.0), ItemKind::Coin)]);
        collect_items(&mut state);
        collect_items(&mut state);
        assert_eq!(state.score, 10);
        assert_eq!(state.drain_events().len(), 1);
    }

    #[test]
    fn test_out_of_reach() {
        let mut state = with_items(&[(Vec2::new(900.0, 440.0), ItemKind::Coin)]);
        collect_items(&mut state);
        assert_eq!(state.score, 0);
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn test_several_at_once() {
        let mut state = with_items(&[
            (Vec2::new(795.0, 440.0), ItemKind::Coin),
            (Vec2::new(805.0, 440.0), ItemKind::Coin),
        ]);
        collect_items(&mut state);
        assert_eq!(state.score, 20);
    }
}
