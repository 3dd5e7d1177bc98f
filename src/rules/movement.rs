//! Movement legality and stepping.
//!
//! An Adventurer spends one of three budgets on every step: land moves for
//! crossing a land edge, downwind moves for water edges the wind arrow points
//! toward, upwind moves for the other water edges. Waiting in place costs a
//! downwind move. Resting with an Agent or ending the turn refills them.

use crate::board::{Compass, TileBack};
use crate::core::{AdventurerId, GameEvent, MoveRecord, MovementRules, Result, Step, TileId};
use crate::decision::DecisionMaker;
use crate::game::Game;
use crate::tokens::Adventurer;

use super::exploration::Exploration;

impl Game {
    /// Whether the Adventurer may step toward `direction`, or with `None`,
    /// whether it can still do anything at all this turn.
    pub fn can_move(&self, id: AdventurerId, direction: Option<Compass>) -> Result<bool> {
        let adventurer = self.adventurer(id)?;
        match direction {
            Some(side) => self.can_cross(adventurer, side),
            None => {
                if !adventurer.has_remaining_moves(self.ruleset.max_downwind_moves) {
                    return Ok(false);
                }
                if self.ruleset.mode.piracy() && self.can_act_in_place(adventurer)? {
                    return Ok(true);
                }
                for side in Compass::ALL {
                    if self.can_cross(adventurer, side)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
        }
    }

    fn can_cross(&self, adventurer: &Adventurer, side: Compass) -> Result<bool> {
        let rules = &self.ruleset;
        let tile = self.board.tile(adventurer.tile)?;
        let water = tile.edge_water(side);
        let downwind = tile.is_downwind(side);
        let since_rest = adventurer.moves_since_rest();
        let unburdened = rules.mode.unburdened_movement() && adventurer.wealth == 0;

        if rules.mode.piracy() && since_rest >= rules.max_downwind_moves {
            return Ok(false);
        }

        let legal = match rules.movement_rules {
            MovementRules::Initial => {
                if !water {
                    since_rest < rules.max_land_moves
                        || (unburdened && since_rest < rules.max_land_moves_unburdened)
                } else if downwind {
                    since_rest < rules.max_downwind_moves
                } else {
                    since_rest < rules.max_upwind_moves
                        || (unburdened && since_rest < rules.max_upwind_moves_unburdened)
                }
            }
            MovementRules::Budgetted => {
                if !water {
                    (adventurer.land_moves < rules.max_land_moves
                        || (unburdened && adventurer.land_moves < rules.max_land_moves_unburdened))
                        && adventurer.upwind_moves == 0
                } else if downwind {
                    since_rest < rules.max_downwind_moves
                } else {
                    (adventurer.upwind_moves < rules.max_upwind_moves
                        || (unburdened
                            && adventurer.upwind_moves < rules.max_upwind_moves_unburdened))
                        && adventurer.land_moves == 0
                }
            }
        };
        Ok(legal)
    }

    /// Someone to rob or an Agent not yet rested with, on the current tile.
    fn can_act_in_place(&self, adventurer: &Adventurer) -> Result<bool> {
        let tile = self.board.tile(adventurer.tile)?;
        for other in &tile.adventurers {
            if *other != adventurer.id && self.adventurer(*other)?.wealth > 0 {
                return Ok(true);
            }
        }
        Ok(tile
            .agent
            .is_some_and(|agent| !adventurer.has_rested_with(agent)))
    }

    /// Step toward `direction`, exploring if the cell is empty.
    ///
    /// Returns whether the Adventurer changed tile. A legal step that fails
    /// to explore still spends its move. The turn ends here once no further
    /// step is possible. Once the game is over this only ends the turn.
    pub fn move_adventurer(
        &mut self,
        id: AdventurerId,
        direction: Compass,
        decider: &mut dyn DecisionMaker,
    ) -> Result<bool> {
        if self.is_over() {
            self.end_turn(id)?;
            return Ok(false);
        }

        let turns_before = self.adventurer(id)?.turns_moved;
        self.adventurer_mut(id)?.record = MoveRecord::starting(Step::Move(direction));

        let mut moved = false;
        if self.can_move(id, Some(direction))? {
            self.actions += 1;
            moved = self.step(id, direction, turns_before, decider)?;
        } else {
            tracing::debug!(adventurer = %id, %direction, "move refused");
        }

        self.finish_step(id, turns_before)?;
        Ok(moved)
    }

    fn step(
        &mut self,
        id: AdventurerId,
        direction: Compass,
        turns_before: u32,
        decider: &mut dyn DecisionMaker,
    ) -> Result<bool> {
        let from = self.adventurer(id)?.tile;
        let (water, downwind, origin) = {
            let tile = self.board.tile(from)?;
            (tile.edge_water(direction), tile.is_downwind(direction), self.board.position_of(from)?)
        };

        let adventurer = self.adventurer_mut(id)?;
        if !water {
            adventurer.land_moves += 1;
        } else if downwind {
            adventurer.downwind_moves += 1;
        } else {
            adventurer.upwind_moves += 1;
        }
        tracing::debug!(
            adventurer = %id,
            %direction,
            water,
            downwind,
            chest = adventurer.wealth,
            "moving"
        );

        let target = origin.neighbour(direction);
        match self.board.tile_at(target) {
            Some(next) => {
                self.depart(id, decider)?;
                self.arrive(id, next, decider)?;
                self.record(GameEvent::Moved {
                    adventurer: id,
                    direction,
                    to: target,
                });
                if self.still_on(id, next, turns_before)? {
                    if self.board.tile(next)?.is_city() {
                        self.visit_city(id, next, false, decider)?;
                    } else {
                        self.interact_tile(id, decider)?;
                        self.interact_tokens(id, decider)?;
                    }
                }
                Ok(true)
            }
            None => {
                let back = if self.ruleset.mode.land_tiles() {
                    TileBack::for_edge(water)
                } else {
                    TileBack::Water
                };
                match self.explore(id, target, direction, back)? {
                    Exploration::Placed(next) => {
                        self.depart(id, decider)?;
                        self.arrive(id, next, decider)?;
                        self.record(GameEvent::Moved {
                            adventurer: id,
                            direction,
                            to: target,
                        });
                        if self.still_on(id, next, turns_before)? {
                            self.discover(id, next, decider)?;
                        }
                        Ok(true)
                    }
                    Exploration::Failed => {
                        if !self.board.tile(from)?.is_city() {
                            self.interact_tile(id, decider)?;
                            self.interact_tokens(id, decider)?;
                        }
                        Ok(false)
                    }
                    Exploration::Exhausted(_) => Ok(false),
                }
            }
        }
    }

    /// Leave the current tile, drawing travel money when setting out from
    /// a city.
    fn depart(&mut self, id: AdventurerId, decider: &mut dyn DecisionMaker) -> Result<()> {
        let adventurer = self.adventurer(id)?;
        let player = adventurer.player;
        let vault = self.vaults[player];
        if vault > 0 && self.board.tile(adventurer.tile)?.is_city() {
            let amount = decider.check_travel_money(self, id, vault).min(vault);
            self.vaults[player] -= amount;
            self.adventurer_mut(id)?.wealth += amount;
        }
        self.leave_tile(id)
    }

    /// Enter a tile, springing it first if it is a disaster.
    fn arrive(
        &mut self,
        id: AdventurerId,
        to: TileId,
        decider: &mut dyn DecisionMaker,
    ) -> Result<()> {
        self.enter_tile(id, to)?;
        if self.board.tile(to)?.is_disaster() {
            self.enter_disaster(id, to, decider)?;
        }
        Ok(())
    }

    /// Still on `tile` with the same turn running: no disaster sent it home.
    fn still_on(&self, id: AdventurerId, tile: TileId, turns_before: u32) -> Result<bool> {
        let adventurer = self.adventurer(id)?;
        Ok(adventurer.tile == tile && adventurer.turns_moved == turns_before && !self.is_over())
    }

    /// Spend a downwind move in place.
    ///
    /// Collects dropped wealth, trades and rests as if arriving. Waiting on
    /// a city visits it. Always returns `true` unless the game is over.
    pub fn wait(&mut self, id: AdventurerId, decider: &mut dyn DecisionMaker) -> Result<bool> {
        if self.is_over() {
            self.end_turn(id)?;
            return Ok(false);
        }

        let turns_before = self.adventurer(id)?.turns_moved;
        self.actions += 1;
        let adventurer = self.adventurer_mut(id)?;
        adventurer.record = MoveRecord::starting(Step::Wait);
        adventurer.downwind_moves += 1;
        let tile = adventurer.tile;
        self.record(GameEvent::Waited { adventurer: id });
        tracing::debug!(adventurer = %id, %tile, "waiting");

        if self.board.tile(tile)?.is_city() {
            self.visit_city(id, tile, false, decider)?;
        } else {
            let found = if self.board.tile(tile)?.is_disaster() {
                0
            } else {
                self.board.tile_mut(tile)?.take_dropped_wealth()
            };
            self.adventurer_mut(id)?.wealth += found;
            self.interact_tile(id, decider)?;
            self.interact_tokens(id, decider)?;
        }

        self.finish_step(id, turns_before)?;
        Ok(true)
    }

    /// End the turn if nothing else is possible, then re-check the winner.
    fn finish_step(&mut self, id: AdventurerId, turns_before: u32) -> Result<()> {
        let turn_running = self.adventurer(id)?.turns_moved == turns_before;
        if turn_running && !self.can_move(id, None)? {
            tracing::debug!(
                adventurer = %id,
                chest = self.adventurer(id)?.wealth,
                "no moves left, ending turn"
            );
            self.end_turn(id)?;
        }
        self.check_win_conditions();
        Ok(())
    }

    /// Close the Adventurer's turn: count it, refill the move budgets and
    /// let every Agent serve it again.
    pub fn end_turn(&mut self, id: AdventurerId) -> Result<()> {
        let adventurer = self.adventurer_mut(id)?;
        adventurer.turns_moved += 1;
        adventurer.reset_moves();
        adventurer.agents_rested.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Edges, Orientation, Position, TileKind};
    use crate::core::{ExplorationRules, PlayerId, Ruleset};
    use crate::decision::Passive;

    fn sea(game: &mut Game, position: Position, edges: Edges, orientation: Orientation) -> TileId {
        game.add_tile(TileBack::Water, TileKind::Plain, edges, orientation, position)
            .unwrap()
    }

    /// A single plain tile with the Adventurer on it.
    fn lone_tile(ruleset: Ruleset, edges: Edges) -> (Game, AdventurerId) {
        let mut game = Game::new(ruleset, 2, 3).unwrap();
        let tile = sea(&mut game, Position::origin(), edges, Orientation::NorthEast);
        let adventurer = game.spawn_adventurer(PlayerId(0), tile).unwrap();
        game.turn = 1;
        (game, adventurer)
    }

    #[test]
    fn test_initial_mode_budgets() {
        // NE: North and East are downwind; West is upwind-clockwise (land).
        let edges = Edges::new(false, true, true, true);
        let (mut game, adv) = lone_tile(Ruleset::beginner(), edges);

        assert!(game.can_move(adv, Some(Compass::North)).unwrap());
        assert!(game.can_move(adv, Some(Compass::West)).unwrap());
        assert!(game.can_move(adv, Some(Compass::South)).unwrap());

        game.adventurer_mut(adv).unwrap().downwind_moves = 2;
        // Land and upwind only early after a rest.
        assert!(!game.can_move(adv, Some(Compass::West)).unwrap());
        assert!(!game.can_move(adv, Some(Compass::South)).unwrap());
        assert!(game.can_move(adv, Some(Compass::East)).unwrap());

        game.adventurer_mut(adv).unwrap().downwind_moves = 4;
        assert!(!game.can_move(adv, Some(Compass::East)).unwrap());
        assert!(!game.can_move(adv, None).unwrap());
    }

    #[test]
    fn test_budgetted_mode_budgets() {
        let edges = Edges::new(false, true, true, true);
        let ruleset = Ruleset::beginner().with_movement_rules(MovementRules::Budgetted);
        let (mut game, adv) = lone_tile(ruleset, edges);

        game.adventurer_mut(adv).unwrap().downwind_moves = 3;
        // Land still allowed after downwind moves, within its own budget.
        assert!(game.can_move(adv, Some(Compass::West)).unwrap());
        assert!(game.can_move(adv, Some(Compass::South)).unwrap());

        let adventurer = game.adventurer_mut(adv).unwrap();
        adventurer.downwind_moves = 0;
        adventurer.upwind_moves = 1;
        // No land after upwind, and no upwind after land.
        assert!(!game.can_move(adv, Some(Compass::West)).unwrap());

        let adventurer = game.adventurer_mut(adv).unwrap();
        adventurer.upwind_moves = 0;
        adventurer.land_moves = 1;
        assert!(!game.can_move(adv, Some(Compass::South)).unwrap());
    }

    #[test]
    fn test_unburdened_caps_need_an_empty_chest() {
        let edges = Edges::new(false, true, true, true);
        let ruleset = Ruleset::regular().with_unburdened_limits(3, 3);
        let (mut game, adv) = lone_tile(ruleset, edges);

        game.adventurer_mut(adv).unwrap().downwind_moves = 2;
        assert!(game.can_move(adv, Some(Compass::West)).unwrap());

        game.adventurer_mut(adv).unwrap().wealth = 1;
        assert!(!game.can_move(adv, Some(Compass::West)).unwrap());
    }

    #[test]
    fn test_move_onto_existing_tile_counts_move() {
        let mut game = Game::new(Ruleset::beginner(), 2, 0).unwrap();
        let start = sea(&mut game, Position::origin(), Edges::all_water(), Orientation::NorthEast);
        let north = sea(&mut game, Position::new(0, 1), Edges::all_water(), Orientation::NorthEast);
        let adv = game.spawn_adventurer(PlayerId(0), start).unwrap();
        game.turn = 1;

        let moved = game.move_adventurer(adv, Compass::North, &mut Passive).unwrap();

        assert!(moved);
        let adventurer = game.adventurer(adv).unwrap();
        assert_eq!(adventurer.tile, north);
        assert_eq!(adventurer.downwind_moves, 1);
        assert_eq!(adventurer.route, vec![start, north]);
        assert_eq!(adventurer.record.step, Some(Step::Move(Compass::North)));
    }

    #[test]
    fn test_turn_ends_when_budget_spent() {
        let mut game = Game::new(Ruleset::beginner(), 2, 0).unwrap();
        let start = sea(&mut game, Position::origin(), Edges::all_water(), Orientation::NorthEast);
        sea(&mut game, Position::new(0, 1), Edges::all_water(), Orientation::NorthEast);
        let adv = game.spawn_adventurer(PlayerId(0), start).unwrap();
        game.turn = 1;
        game.adventurer_mut(adv).unwrap().downwind_moves = 3;

        game.move_adventurer(adv, Compass::North, &mut Passive).unwrap();

        let adventurer = game.adventurer(adv).unwrap();
        assert_eq!(adventurer.turns_moved, 1);
        assert_eq!(adventurer.moves_since_rest(), 0);
    }

    #[test]
    fn test_refused_move_spends_nothing() {
        let (mut game, adv) = lone_tile(Ruleset::beginner(), Edges::all_water());
        game.adventurer_mut(adv).unwrap().upwind_moves = 2;

        // South is upwind under NE and the upwind budget is spent.
        let moved = game.move_adventurer(adv, Compass::South, &mut Passive).unwrap();

        assert!(!moved);
        assert_eq!(game.adventurer(adv).unwrap().moves_since_rest(), 2);
        assert_eq!(game.actions, 0);
    }

    #[test]
    fn test_wait_spends_downwind_move() {
        let (mut game, adv) = lone_tile(Ruleset::beginner(), Edges::all_water());
        let tile = game.adventurer(adv).unwrap().tile;
        game.tile_mut(tile).unwrap().dropped_wealth = 3;

        assert!(game.wait(adv, &mut Passive).unwrap());

        let adventurer = game.adventurer(adv).unwrap();
        assert_eq!(adventurer.downwind_moves, 1);
        assert_eq!(adventurer.wealth, 3);
        assert_eq!(adventurer.record.step, Some(Step::Wait));
    }

    #[test]
    fn test_failed_exploration_spends_move() {
        let ruleset = Ruleset::beginner().with_exploration_rules(ExplorationRules::Clockwise);
        let (mut game, adv) = lone_tile(ruleset, Edges::all_water());
        // All-land tile cannot sit against the water edge in any rotation.
        game.add_to_pile(TileBack::Water, TileKind::Plain, Edges::all_land())
            .unwrap();
        game.add_to_pile(TileBack::Water, TileKind::Plain, Edges::all_land())
            .unwrap();

        let moved = game.move_adventurer(adv, Compass::North, &mut Passive).unwrap();

        assert!(!moved);
        assert_eq!(game.adventurer(adv).unwrap().downwind_moves, 1);
        assert_eq!(game.stats().num_failed_explorations, 1);
        assert_eq!(game.stats().exploration_attempts, 1);
        assert_eq!(game.piles(TileBack::Water).unwrap().discard.len(), 1);
        assert!(!game.board().is_occupied(Position::new(0, 1)));
    }
}
