//! Exploring the unknown.
//!
//! Stepping toward an empty cell draws tiles from the pile matching the
//! crossed edge and tries to fit them against every neighbour. Rotation is
//! limited by the exploration rules, and a tile that fits no allowed
//! rotation goes to the discard pile.

use smallvec::{smallvec, SmallVec};

use crate::board::{Compass, Orientation, Position, TileBack};
use crate::core::{AdventurerId, ExplorationRules, GameEvent, Result, Ruleset, TileId};
use crate::game::Game;

/// What came of an attempt to explore a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exploration {
    /// A tile was drawn, fitted and placed.
    Placed(TileId),
    /// Every draw failed to fit; the cell stays empty.
    Failed,
    /// Nothing left to draw for this back.
    Exhausted(TileBack),
}

/// Rotations a freshly drawn tile may try, in order, when entered from
/// `direction`.
#[must_use]
pub fn rotation_candidates(
    current: Orientation,
    direction: Compass,
    rules: ExplorationRules,
) -> SmallVec<[Orientation; 3]> {
    let clockwise = current.rotate_clockwise();
    let counterclockwise = current.rotate_counterclockwise();
    match rules {
        ExplorationRules::Clockwise => smallvec![current, clockwise, counterclockwise],
        // One turning direction only, set by the arrow axis and the arrival axis.
        ExplorationRules::Continuous => {
            let toward_clockwise = current.is_rising() != direction.is_meridional();
            if toward_clockwise {
                smallvec![current, clockwise]
            } else {
                smallvec![current, counterclockwise]
            }
        }
    }
}

/// Reward for filling a gap, counting the known edges around it other than
/// the one just crossed.
#[must_use]
pub fn exploration_value(
    ruleset: &Ruleset,
    adjoining: &[Option<bool>; 4],
    crossing_water: bool,
) -> u32 {
    let water = adjoining.iter().filter(|e| **e == Some(true)).count();
    let land = adjoining.iter().filter(|e| **e == Some(false)).count();
    if crossing_water {
        ruleset.fill_gap_value(water.saturating_sub(1), land)
    } else {
        ruleset.fill_gap_value(water, land.saturating_sub(1))
    }
}

impl Game {
    /// Try to fill `target` with tiles drawn from the `back` pile.
    ///
    /// On success the explorer's Chest earns the gap value and the tile is
    /// on the board, but the explorer has not moved. Running out of tiles
    /// completes the map: the explorer's owner is paid and the turn ends.
    pub(crate) fn explore(
        &mut self,
        id: AdventurerId,
        target: Position,
        direction: Compass,
        back: TileBack,
    ) -> Result<Exploration> {
        let adjoining = self.board.adjoining_edges(target);
        let crossing_water = adjoining[direction.opposite().index()].unwrap_or(true);
        let attempts = self.ruleset.max_exploration_attempts.max(1);
        // Drawn tiles start out facing the same way as the explorer's tile.
        let current = self.adventurer_tile(id)?.orientation;

        for _ in 0..attempts {
            let Some(drawn) = self.draw_tile(back) else {
                let player = self.adventurer(id)?.player;
                self.vaults[player] += self.ruleset.value_complete_map;
                self.stats.num_failed_explorations += 1;
                self.record(GameEvent::MapCompleted { player, back });
                tracing::info!(%player, %back, "map completed");
                self.end_turn(id)?;
                self.check_win_conditions();
                return Ok(Exploration::Exhausted(back));
            };

            let drawn_facing = self.board.tile(drawn)?.orientation;
            for orientation in rotation_candidates(current, direction, self.ruleset.exploration_rules)
            {
                let tile = self.board.tile_mut(drawn)?;
                tile.orientation = orientation;
                if !tile.fits(&adjoining) {
                    continue;
                }

                self.place_tile(drawn, target)?;
                let value = exploration_value(&self.ruleset, &adjoining, crossing_water);
                self.adventurer_mut(id)?.wealth += value;
                tracing::debug!(adventurer = %id, tile = %drawn, %target, value, "explored");
                return Ok(Exploration::Placed(drawn));
            }

            let tile = self.board.tile_mut(drawn)?;
            tile.orientation = drawn_facing;
            if let Some(pair) = self.piles.get_mut(&back) {
                pair.discard.add(self.board.tile(drawn)?)?;
            }
            self.stats.exploration_attempts += 1;
        }

        self.stats.num_failed_explorations += 1;
        self.record(GameEvent::ExplorationFailed {
            adventurer: id,
            position: target,
        });
        tracing::debug!(adventurer = %id, %target, "exploration failed");
        Ok(Exploration::Failed)
    }

    /// Top of the draw pile, refreshing from the discard pile first if the
    /// draw pile is empty.
    fn draw_tile(&mut self, back: TileBack) -> Option<TileId> {
        let pair = self.piles.get(&back)?;
        if pair.draw.is_empty() && !pair.discard.is_empty() {
            self.refresh_pile(back);
        }
        self.piles.get_mut(&back)?.draw.draw()
    }
}
