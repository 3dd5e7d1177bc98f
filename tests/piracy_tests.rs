//! Piracy and disasters, driven through ordinary moves.

use trade_winds::board::{Compass, Edges, Orientation, Position, TileBack, TileKind};
use trade_winds::core::{AdventurerId, AgentId, GameEvent, PlayerId, Result, Ruleset, TileId, Token};
use trade_winds::decision::{DecisionMaker, Passive};
use trade_winds::game::Game;

/// Attacks whatever it is allowed to and courts every disaster.
struct Raider;

impl DecisionMaker for Raider {
    fn continue_turn(&mut self, game: &mut Game, adventurer: AdventurerId) -> Result<()> {
        game.wait(adventurer, self)?;
        Ok(())
    }

    fn check_attack_adventurer(&mut self, _: &Game, _: AdventurerId, _: AdventurerId) -> bool {
        true
    }

    fn check_attack_agent(&mut self, _: &Game, _: AdventurerId, _: AgentId) -> bool {
        true
    }

    fn check_restore_agent(&mut self, _: &Game, _: AdventurerId, _: AgentId) -> bool {
        true
    }

    fn check_court_disaster(&mut self, _: &Game, _: AdventurerId, _: TileId) -> bool {
        true
    }
}

/// Regular game where every gamble succeeds, with a capital at the origin
/// and open sea to its north.
fn waters() -> (Game, TileId, TileId) {
    let ruleset = Ruleset::regular().with_attack_success_prob(1.0);
    let mut game = Game::new(ruleset, 2, 17).unwrap();
    for back in TileBack::ALL {
        game.add_to_pile(back, TileKind::Plain, Edges::all_water())
            .unwrap();
    }
    let capital = game
        .add_tile(
            TileBack::Land,
            TileKind::City {
                capital: true,
                discovered: true,
            },
            Edges::all_water(),
            Orientation::NorthEast,
            Position::origin(),
        )
        .unwrap();
    let sea = game
        .add_tile(
            TileBack::Water,
            TileKind::Plain,
            Edges::all_water(),
            Orientation::NorthEast,
            Position::new(0, 1),
        )
        .unwrap();
    (game, capital, sea)
}

/// Walk a fresh Adventurer from the capital onto the sea tile.
fn sail_out(game: &mut Game, player: u8, capital: TileId, wealth: u32) -> AdventurerId {
    let id = game.spawn_adventurer(PlayerId(player), capital).unwrap();
    game.move_adventurer(id, Compass::North, &mut Passive).unwrap();
    game.adventurer_mut(id).unwrap().wealth = wealth;
    id
}

#[test]
fn test_robbery_on_arrival() {
    let (mut game, capital, _) = waters();
    let victim = sail_out(&mut game, 1, capital, 10);
    let raider = game.spawn_adventurer(PlayerId(0), capital).unwrap();
    game.set_vault(PlayerId(0), 10);

    struct Funded;
    impl DecisionMaker for Funded {
        fn continue_turn(&mut self, game: &mut Game, adventurer: AdventurerId) -> Result<()> {
            game.wait(adventurer, self)?;
            Ok(())
        }
        fn check_travel_money(&mut self, _: &Game, _: AdventurerId, max: u32) -> u32 {
            max
        }
        fn check_attack_adventurer(&mut self, _: &Game, _: AdventurerId, _: AdventurerId) -> bool {
            true
        }
    }

    game.move_adventurer(raider, Compass::North, &mut Funded).unwrap();

    assert_eq!(game.adventurer(raider).unwrap().wealth, 15);
    assert_eq!(game.adventurer(victim).unwrap().wealth, 5);
    assert!(game.adventurer(raider).unwrap().pirate);
    assert_eq!(game.attack_history(PlayerId(0)).len(), 1);
    assert_eq!(game.adventurer(raider).unwrap().record.attacked, 1);
}

#[test]
fn test_pirate_arrested_on_arrival() {
    let (mut game, capital, _) = waters();
    let pirate = sail_out(&mut game, 1, capital, 8);
    game.adventurer_mut(pirate).unwrap().pirate = true;
    let sheriff = game.spawn_adventurer(PlayerId(0), capital).unwrap();

    game.move_adventurer(sheriff, Compass::North, &mut Raider).unwrap();

    let bounty = game.ruleset().value_arrest;
    assert_eq!(game.adventurer(sheriff).unwrap().wealth, bounty);
    assert!(!game.adventurer(sheriff).unwrap().pirate);
    let pirate = game.adventurer(pirate).unwrap();
    assert_eq!(pirate.tile, capital);
    assert_eq!(pirate.wealth, 0);
    assert!(game.history().iter().any(|r| matches!(
        r.event,
        GameEvent::Attacked {
            target: Token::Adventurer(_),
            success: true,
            ..
        }
    )));
}

#[test]
fn test_raid_then_restore() {
    let (mut game, capital, sea) = waters();
    let agent = game.spawn_agent(PlayerId(1), sea).unwrap();
    game.agent_mut(agent).unwrap().wealth = 3;
    let raider = game.spawn_adventurer(PlayerId(0), capital).unwrap();

    game.move_adventurer(raider, Compass::North, &mut Raider).unwrap();

    let bonus = game.ruleset().value_dispossess_agent;
    assert_eq!(game.adventurer(raider).unwrap().wealth, 3 + bonus);
    assert!(game.agent(agent).unwrap().dispossessed);
    assert!(game.tile(sea).unwrap().agent.is_some());

    struct Restorer;
    impl DecisionMaker for Restorer {
        fn continue_turn(&mut self, game: &mut Game, adventurer: AdventurerId) -> Result<()> {
            game.wait(adventurer, self)?;
            Ok(())
        }
        fn check_restore_agent(&mut self, _: &Game, _: AdventurerId, _: AgentId) -> bool {
            true
        }
    }

    // The owner comes by and pays to restore it.
    let owner = sail_out(&mut game, 1, capital, 2);
    game.wait(owner, &mut Restorer).unwrap();

    assert!(!game.agent(agent).unwrap().dispossessed);
    assert_eq!(
        game.adventurer(owner).unwrap().wealth,
        2 - game.ruleset().cost_agent_restore
    );
}

#[test]
fn test_disaster_sends_adventurer_home() {
    let (mut game, capital, sea) = waters();
    let disaster = game
        .add_tile(
            TileBack::Water,
            TileKind::Disaster,
            Edges::all_water(),
            Orientation::NorthEast,
            Position::new(0, 2),
        )
        .unwrap();
    let adv = sail_out(&mut game, 0, capital, 4);
    assert_eq!(game.adventurer(adv).unwrap().tile, sea);

    game.move_adventurer(adv, Compass::North, &mut Raider).unwrap();

    let adventurer = game.adventurer(adv).unwrap();
    assert_eq!(adventurer.tile, capital);
    assert_eq!(adventurer.wealth, 0);
    assert_eq!(adventurer.turns_moved, 1);
    assert_eq!(game.tile(disaster).unwrap().dropped_wealth, 4);
    assert_eq!(game.disaster_tiles(), &[disaster]);
    assert_eq!(game.stats().dropped_wealth, 4);
}

#[test]
fn test_pirate_survives_disaster() {
    let (mut game, capital, _) = waters();
    let disaster = game
        .add_tile(
            TileBack::Water,
            TileKind::Disaster,
            Edges::all_water(),
            Orientation::NorthEast,
            Position::new(0, 2),
        )
        .unwrap();
    game.tile_mut(disaster).unwrap().dropped_wealth = 9;
    let adv = sail_out(&mut game, 0, capital, 0);
    game.adventurer_mut(adv).unwrap().pirate = true;

    game.move_adventurer(adv, Compass::North, &mut Raider).unwrap();

    let adventurer = game.adventurer(adv).unwrap();
    assert_eq!(adventurer.tile, disaster);
    assert_eq!(adventurer.wealth, 5);
    assert_eq!(game.tile(disaster).unwrap().dropped_wealth, 4);
}

#[test]
fn test_no_piracy_in_beginner_games() {
    let mut game = Game::new(Ruleset::beginner().with_attack_success_prob(1.0), 2, 0).unwrap();
    game.add_to_pile(TileBack::Water, TileKind::Plain, Edges::all_water())
        .unwrap();
    let sea = game
        .add_tile(
            TileBack::Water,
            TileKind::Plain,
            Edges::all_water(),
            Orientation::NorthEast,
            Position::origin(),
        )
        .unwrap();
    let a = game.spawn_adventurer(PlayerId(0), sea).unwrap();
    let b = game.spawn_adventurer(PlayerId(1), sea).unwrap();
    game.adventurer_mut(b).unwrap().wealth = 6;

    game.wait(a, &mut Raider).unwrap();

    assert_eq!(game.adventurer(b).unwrap().wealth, 6);
    assert!(!game.adventurer(a).unwrap().pirate);
    assert!(game.attack_history(PlayerId(0)).is_empty());
}
