//! The round loop.
//!
//! A round is one game turn: every player, in seat order, plays each of
//! their Adventurers until that Adventurer has completed the turn. Moves
//! themselves are made by each player's [`DecisionMaker`].

use super::{Game, GameOutcome};
use crate::core::{EngineError, PlayerId, Result};
use crate::decision::DecisionMaker;

impl Game {
    /// Play one full round, advancing the turn counter first.
    ///
    /// `deciders` holds one decision maker per seat. Adventurers hired
    /// during the round are already marked as having moved and wait for the
    /// next one. Returns whether the game is over.
    pub fn play_round(&mut self, deciders: &mut [Box<dyn DecisionMaker>]) -> Result<bool> {
        if deciders.len() != self.player_count {
            return Err(EngineError::DeciderCountMismatch {
                expected: self.player_count,
                found: deciders.len(),
            });
        }
        if self.is_over() {
            return Ok(true);
        }

        self.turn += 1;
        tracing::debug!(turn = self.turn, "round started");

        for player in PlayerId::all(self.player_count) {
            let decider = deciders[player.index()].as_mut();
            let mut index = 0;
            while let Some(&adventurer) = self.player_adventurers[player].get(index) {
                index += 1;
                while !self.is_over() && self.adventurer(adventurer)?.turns_moved < self.turn {
                    let actions = self.actions;
                    decider.continue_turn(self, adventurer)?;
                    // A decider that did nothing waits instead.
                    if self.actions == actions
                        && !self.is_over()
                        && self.adventurer(adventurer)?.turns_moved < self.turn
                    {
                        self.wait(adventurer, decider)?;
                    }
                }
                if self.check_win_conditions() {
                    return Ok(true);
                }
            }
        }
        Ok(self.is_over())
    }

    /// Play rounds until someone wins.
    ///
    /// Deciders that never explore may never finish the game; use
    /// [`Game::play_rounds`] to bound it.
    pub fn play(&mut self, deciders: &mut [Box<dyn DecisionMaker>]) -> Result<GameOutcome> {
        loop {
            if self.play_round(deciders)? {
                if let Some(outcome) = self.outcome.clone() {
                    return Ok(outcome);
                }
            }
        }
    }

    /// Play at most `limit` rounds. Returns the outcome if the game ended.
    pub fn play_rounds(
        &mut self,
        deciders: &mut [Box<dyn DecisionMaker>],
        limit: u32,
    ) -> Result<Option<GameOutcome>> {
        for _ in 0..limit {
            if self.play_round(deciders)? {
                break;
            }
        }
        Ok(self.outcome.clone())
    }
}
