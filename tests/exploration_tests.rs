//! Exploring empty cells through ordinary moves.

use trade_winds::board::{Compass, Edges, Orientation, Position, TileBack, TileKind};
use trade_winds::core::{
    AdventurerId, EngineError, ExplorationRules, GameEvent, PlayerId, Ruleset, TileId,
};
use trade_winds::decision::Passive;
use trade_winds::game::{Game, WinType};

fn sea(game: &mut Game, position: Position) -> TileId {
    game.add_tile(
        TileBack::Water,
        TileKind::Plain,
        Edges::all_water(),
        Orientation::NorthEast,
        position,
    )
    .unwrap()
}

fn start(ruleset: Ruleset, pile: usize) -> (Game, AdventurerId) {
    let mut game = Game::new(ruleset, 2, 31).unwrap();
    let origin = sea(&mut game, Position::origin());
    for _ in 0..pile {
        game.add_to_pile(TileBack::Water, TileKind::Plain, Edges::all_water())
            .unwrap();
    }
    let adventurer = game.spawn_adventurer(PlayerId(0), origin).unwrap();
    (game, adventurer)
}

fn gap_table(water: usize, land: usize, value: u32) -> [[u32; 5]; 5] {
    let mut table = [[0; 5]; 5];
    table[water][land] = value;
    table
}

#[test]
fn test_moving_into_the_unknown_explores() {
    let ruleset = Ruleset::beginner().with_fill_gap_table(gap_table(0, 0, 3));
    let (mut game, adv) = start(ruleset, 2);

    assert!(game.move_adventurer(adv, Compass::North, &mut Passive).unwrap());

    let placed = game.board().tile_at(Position::new(0, 1)).unwrap();
    let adventurer = game.adventurer(adv).unwrap();
    assert_eq!(adventurer.tile, placed);
    assert_eq!(adventurer.wealth, 3);
    assert_eq!(game.piles(TileBack::Water).unwrap().draw.len(), 1);
}

#[test]
fn test_gap_value_counts_other_neighbours() {
    let ruleset = Ruleset::beginner().with_fill_gap_table(gap_table(1, 0, 5));
    let (mut game, adv) = start(ruleset, 1);
    // Borders the gap at (0, 1) from the east.
    sea(&mut game, Position::new(1, 1));

    game.move_adventurer(adv, Compass::North, &mut Passive).unwrap();

    assert_eq!(game.adventurer(adv).unwrap().wealth, 5);
}

#[test]
fn test_running_out_completes_the_map() {
    let (mut game, adv) = start(Ruleset::beginner(), 0);

    assert!(!game.move_adventurer(adv, Compass::East, &mut Passive).unwrap());

    let bonus = game.ruleset().value_complete_map;
    assert_eq!(game.vault(PlayerId(0)), bonus);
    let outcome = game.outcome().unwrap();
    assert_eq!(outcome.winner, Some(PlayerId(0)));
    assert_eq!(outcome.win_type, WinType::Exhausted(TileBack::Water));
    assert!(game
        .history()
        .iter()
        .any(|r| r.event == GameEvent::MapCompleted { player: PlayerId(0), back: TileBack::Water }));
}

#[test]
fn test_moves_after_game_over_only_end_the_turn() {
    let (mut game, adv) = start(Ruleset::beginner(), 0);
    game.move_adventurer(adv, Compass::East, &mut Passive).unwrap();
    let turns = game.adventurer(adv).unwrap().turns_moved;

    assert!(!game.move_adventurer(adv, Compass::North, &mut Passive).unwrap());
    assert!(!game.wait(adv, &mut Passive).unwrap());
    assert_eq!(game.adventurer(adv).unwrap().turns_moved, turns + 2);
}

#[test]
fn test_occupied_cell_is_rejected() {
    let (mut game, _) = start(Ruleset::beginner(), 0);
    assert_eq!(
        game.add_tile(
            TileBack::Water,
            TileKind::Wonder,
            Edges::all_water(),
            Orientation::SouthWest,
            Position::origin(),
        ),
        Err(EngineError::CellOccupied {
            position: Position::origin()
        })
    );
}

#[test]
fn test_land_pile_used_across_land_edges() {
    let mut game = Game::new(Ruleset::regular(), 2, 5).unwrap();
    // Under NE the West side is the upwind-clockwise edge.
    let origin = game
        .add_tile(
            TileBack::Land,
            TileKind::Plain,
            Edges::new(false, true, true, true),
            Orientation::NorthEast,
            Position::origin(),
        )
        .unwrap();
    let land = game
        .add_to_pile(TileBack::Land, TileKind::Plain, Edges::all_land())
        .unwrap();
    game.add_to_pile(TileBack::Water, TileKind::Plain, Edges::all_water())
        .unwrap();
    let adv = game.spawn_adventurer(PlayerId(0), origin).unwrap();

    assert!(game.move_adventurer(adv, Compass::West, &mut Passive).unwrap());

    assert_eq!(game.board().tile_at(Position::new(-1, 0)), Some(land));
    assert_eq!(game.adventurer(adv).unwrap().land_moves, 1);
}

/// Explorer standing on an all-water tile facing `facing` at the origin,
/// with `drawn` as the only tile in the water pile.
fn explorer_facing(facing: Orientation, rules: ExplorationRules, drawn: Edges) -> (Game, AdventurerId, TileId) {
    let ruleset = Ruleset::regular().with_exploration_rules(rules);
    let mut game = Game::new(ruleset, 2, 31).unwrap();
    let origin = game
        .add_tile(
            TileBack::Water,
            TileKind::Plain,
            Edges::all_water(),
            facing,
            Position::origin(),
        )
        .unwrap();
    let drawn = game
        .add_to_pile(TileBack::Water, TileKind::Plain, drawn)
        .unwrap();
    let adventurer = game.spawn_adventurer(PlayerId(0), origin).unwrap();
    (game, adventurer, drawn)
}

fn land_at(game: &mut Game, position: Position) {
    game.add_tile(
        TileBack::Land,
        TileKind::Plain,
        Edges::all_land(),
        Orientation::NorthEast,
        position,
    )
    .unwrap();
}

#[test]
fn test_drawn_tile_takes_the_explorers_wind() {
    for rules in [ExplorationRules::Clockwise, ExplorationRules::Continuous] {
        let (mut game, adv, drawn) = explorer_facing(Orientation::SouthWest, rules, Edges::all_water());
        assert!(game.move_adventurer(adv, Compass::South, &mut Passive).unwrap());
        assert_eq!(game.tile(drawn).unwrap().orientation, Orientation::SouthWest);

        let (mut game, adv, drawn) = explorer_facing(Orientation::NorthWest, rules, Edges::all_water());
        assert!(game.move_adventurer(adv, Compass::East, &mut Passive).unwrap());
        assert_eq!(game.tile(drawn).unwrap().orientation, Orientation::NorthWest);
    }
}

#[test]
fn test_clockwise_keeps_explorers_wind_when_it_fits() {
    // Downwind-anticlockwise land faces South under SW, leaving water to the north.
    let (mut game, adv, drawn) = explorer_facing(
        Orientation::SouthWest,
        ExplorationRules::Clockwise,
        Edges::new(true, true, true, false),
    );

    assert!(game.move_adventurer(adv, Compass::South, &mut Passive).unwrap());

    assert_eq!(game.board().tile_at(Position::new(0, -1)), Some(drawn));
    assert_eq!(game.tile(drawn).unwrap().orientation, Orientation::SouthWest);
}

#[test]
fn test_clockwise_turns_relative_to_explorer() {
    // Water west and land east only lines up under SW, one turn back from NW.
    let (mut game, adv, drawn) = explorer_facing(
        Orientation::NorthWest,
        ExplorationRules::Clockwise,
        Edges::new(false, true, true, true),
    );
    land_at(&mut game, Position::new(2, 0));

    assert!(game.move_adventurer(adv, Compass::East, &mut Passive).unwrap());

    assert_eq!(game.board().tile_at(Position::new(1, 0)), Some(drawn));
    assert_eq!(game.tile(drawn).unwrap().orientation, Orientation::SouthWest);
}

#[test]
fn test_continuous_turns_relative_to_explorer() {
    // From SW heading south the only turn allowed is to SE.
    let (mut game, adv, drawn) = explorer_facing(
        Orientation::SouthWest,
        ExplorationRules::Continuous,
        Edges::new(true, true, false, true),
    );
    land_at(&mut game, Position::new(0, -2));

    assert!(game.move_adventurer(adv, Compass::South, &mut Passive).unwrap());

    assert_eq!(game.board().tile_at(Position::new(0, -1)), Some(drawn));
    assert_eq!(game.tile(drawn).unwrap().orientation, Orientation::SouthEast);

    // From NW heading east the only turn allowed is to SW.
    let (mut game, adv, drawn) = explorer_facing(
        Orientation::NorthWest,
        ExplorationRules::Continuous,
        Edges::new(false, true, true, true),
    );
    land_at(&mut game, Position::new(2, 0));

    assert!(game.move_adventurer(adv, Compass::East, &mut Passive).unwrap());

    assert_eq!(game.tile(drawn).unwrap().orientation, Orientation::SouthWest);
}

#[test]
fn test_misfit_goes_back_unturned() {
    // Land on every side but the one it needs to show the explorer.
    let (mut game, adv, drawn) = explorer_facing(
        Orientation::NorthWest,
        ExplorationRules::Continuous,
        Edges::all_land(),
    );

    game.move_adventurer(adv, Compass::East, &mut Passive).unwrap();

    assert!(game.board().tile_at(Position::new(1, 0)).is_none());
    let tile = game.tile(drawn).unwrap();
    assert!(tile.position.is_none());
    assert_eq!(tile.orientation, Orientation::NorthEast);
}
