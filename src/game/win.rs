//! Win conditions.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Game;
use crate::board::TileBack;
use crate::core::{GameEvent, PlayerId};

/// How the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinType {
    /// One Vault pulled far enough ahead of the rest.
    WealthDifference,
    /// A tile back ran out; the map is complete.
    Exhausted(TileBack),
}

impl fmt::Display for WinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WinType::WealthDifference => write!(f, "wealth difference"),
            WinType::Exhausted(back) => write!(f, "exhausted {back} tiles"),
        }
    }
}

/// Result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// `None` when the map ran out before anyone held any wealth.
    pub winner: Option<PlayerId>,
    pub win_type: WinType,
}

impl GameOutcome {
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == Some(player)
    }
}

impl Game {
    /// Refresh [`GameStats`](super::GameStats) and end the game if a win
    /// condition holds. Returns whether the game is over.
    ///
    /// Safe to call at any time; a finished game stays finished.
    pub fn check_win_conditions(&mut self) -> bool {
        self.refresh_stats();
        if self.is_over() {
            return true;
        }

        if self.stats.wealth_difference > self.ruleset.game_winning_difference {
            self.finish(self.stats.leader, WinType::WealthDifference);
            return true;
        }

        for &back in self.ruleset.tile_backs() {
            let exhausted = self.piles.get(&back).is_some_and(|pair| pair.is_exhausted());
            if exhausted {
                let winner = self.stats.leader.or_else(|| self.richest_chest());
                self.finish(winner, WinType::Exhausted(back));
                return true;
            }
        }
        false
    }

    fn refresh_stats(&mut self) {
        let mut vaults: Vec<u32> = self.vaults.values().copied().collect();
        vaults.sort_unstable_by(|a, b| b.cmp(a));
        let max = vaults.first().copied().unwrap_or(0);
        let second = vaults.get(1).copied().unwrap_or(0);

        let leader = if max > 0 {
            self.players().find(|&p| self.vaults[p] == max)
        } else {
            None
        };

        let dropped = self
            .disaster_tiles
            .iter()
            .filter_map(|&tile| self.board.tile(tile).ok())
            .map(|tile| tile.dropped_wealth)
            .sum();

        let stats = &mut self.stats;
        stats.total_vault_wealth = vaults.iter().sum();
        stats.total_chest_wealth = self.adventurers.iter().map(|a| a.wealth).sum();
        stats.max_wealth = max;
        stats.wealth_difference = max - second;
        stats.leader = leader;
        stats.dropped_wealth = dropped;
    }

    /// Owner of the fullest Chest, if any Chest holds anything. Earlier
    /// seats win ties.
    fn richest_chest(&self) -> Option<PlayerId> {
        let mut best: Option<(PlayerId, u32)> = None;
        for adventurer in &self.adventurers {
            if adventurer.wealth == 0 {
                continue;
            }
            let better = match best {
                None => true,
                Some((player, wealth)) => {
                    adventurer.wealth > wealth
                        || (adventurer.wealth == wealth && adventurer.player < player)
                }
            };
            if better {
                best = Some((adventurer.player, adventurer.wealth));
            }
        }
        best.map(|(player, _)| player)
    }

    fn finish(&mut self, winner: Option<PlayerId>, win_type: WinType) {
        tracing::info!(
            turn = self.turn,
            winner = ?winner,
            %win_type,
            difference = self.stats.wealth_difference,
            "game over"
        );
        self.outcome = Some(GameOutcome { winner, win_type });
        self.record(GameEvent::GameOver { winner, win_type });
    }

    /// Swap in the shuffled discard pile once a draw pile runs dry.
    ///
    /// Returns whether a refresh happened. A back with nothing left in
    /// either pile triggers a win check instead.
    pub fn refresh_pile(&mut self, back: TileBack) -> bool {
        let Some(pair) = self.piles.get_mut(&back) else {
            return false;
        };
        if pair.refresh(&mut self.rng) {
            let tiles = pair.draw.len();
            tracing::debug!(%back, tiles, "refreshed draw pile");
            self.record(GameEvent::PileRefreshed { back, tiles });
            return true;
        }
        if pair.is_exhausted() {
            self.check_win_conditions();
        }
        false
    }
}
