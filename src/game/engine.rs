//! Round-resolution engine.
//!
//! `Game` owns the players, the shared board and the shuffle RNG, and runs
//! the round state machine:
//!
//! ```text
//! ActiveRound --tie--> BurnRound --(face-down round)--> ActiveRound
//!      |
//!      +--decided--> Compared --collect--> RoundResolved --> ActiveRound
//!                                               |
//!                                               +--> GameOver
//! ```
//!
//! A burn does not resolve anything by itself. The next face-up round is
//! compared on its own cards only, and its winner collects the whole board,
//! burned cards included.
//!
//! The display layer either drives the primitives (`play_round`, `is_draw`,
//! `winner_collect_cards`) or calls `step` once per user action.
//!
//! ## Usage
//!
//! ```
//! use burn_the_cities::{Game, Player};
//!
//! let mut game = Game::builder()
//!     .player(Player::new("Rasmus"))
//!     .player(Player::new("Liza"))
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(game.max_cards(), 52);
//! let standings = game.play_game();
//! assert_eq!(standings.players.len(), 2);
//! ```

use std::collections::HashSet;

use tracing::{debug, info};

use super::board::Board;
use super::outcome::{GameResult, Phase, RoundOutcome, Standings};
use super::player::{Player, PlayerSummary};
use crate::cards::Deck;
use crate::core::{
    decks_for, GameConfig, GameRng, PlayerId, CARDS_PER_DECK, MAX_PLAYERS,
    MIN_PLAYERS,
};
use crate::error::GameError;

/// A game of Burn the Cities.
#[derive(Debug)]
pub struct Game {
    players: Vec<Player>,
    board: Board,
    rng: GameRng,
    config: GameConfig,
    num_decks: usize,
    max_cards: usize,
    dealt_cards: usize,
    /// Active players at the start of the latest round; sizes the
    /// board window used for tie and winner checks.
    cards_placed: usize,
    phase: Phase,
    rounds_played: u64,
    last_round_winner: Option<PlayerId>,
}

/// Builder for creating a Game.
#[derive(Debug, Default)]
pub struct GameBuilder {
    players: Vec<Player>,
    config: GameConfig,
    pre_dealt: bool,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat one more player.
    pub fn player(mut self, player: Player) -> Self {
        self.players.push(player);
        self
    }

    /// Seat several players in order.
    pub fn players(mut self, players: impl IntoIterator<Item = Player>) -> Self {
        self.players.extend(players);
        self
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn max_rounds(mut self, max_rounds: Option<u64>) -> Self {
        self.config.max_rounds = max_rounds;
        self
    }

    /// Skip dealing; players keep the cards they were given.
    pub fn pre_dealt(mut self) -> Self {
        self.pre_dealt = true;
        self
    }

    /// Validate the roster, then deal.
    pub fn build(self) -> Result<Game, GameError> {
        let count = self.players.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(GameError::InvalidPlayerCount {
                count,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }

        let mut seen = HashSet::with_capacity(count);
        for player in &self.players {
            if !seen.insert(player.id()) {
                return Err(GameError::DuplicatePlayer(player.id()));
            }
        }

        let rng = self.config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let num_decks = decks_for(count);

        let mut game = Game {
            players: self.players,
            board: Board::new(),
            rng,
            config: self.config,
            num_decks,
            max_cards: num_decks * CARDS_PER_DECK,
            dealt_cards: 0,
            cards_placed: 0,
            phase: Phase::ActiveRound,
            rounds_played: 0,
            last_round_winner: None,
        };

        if !self.pre_dealt {
            game.deal_cards();
        }
        game.dealt_cards = game.players.iter().map(Player::card_count).sum();

        Ok(game)
    }
}

impl Game {
    /// Start building a game.
    #[must_use]
    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }

    /// Seat `players`, shuffle with a random seed and deal.
    pub fn new(players: Vec<Player>) -> Result<Self, GameError> {
        GameBuilder::new().players(players).build()
    }

    /// Seat `players` and deal using `config`.
    pub fn with_config(players: Vec<Player>, config: GameConfig) -> Result<Self, GameError> {
        GameBuilder::new().players(players).config(config).build()
    }

    /// Deal `52 / player_count` cards from each freshly shuffled deck to
    /// every player. The remainder of each deck is left out of play.
    fn deal_cards(&mut self) {
        let per_player = CARDS_PER_DECK / self.players.len();
        info!(
            num_decks = self.num_decks,
            cards_per_player = per_player,
            seed = self.rng.seed(),
            "dealing"
        );

        for _ in 0..self.num_decks {
            let mut deck = Deck::standard();
            deck.shuffle(&mut self.rng);

            for player in &mut self.players {
                for _ in 0..per_player {
                    let Some(card) = deck.draw() else { break };
                    player.hand_mut().add(card);
                }
            }

            if !deck.is_empty() {
                debug!(undealt = deck.len(), "discarding remainder");
            }
        }
    }

    // === Queries ===

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    /// Display name of a seated player.
    #[must_use]
    pub fn get_name(&self, id: PlayerId) -> Option<&str> {
        self.player(id).map(Player::name)
    }

    /// Players holding at least one card, in seating order.
    #[must_use]
    pub fn players_with_cards(&self) -> Vec<&Player> {
        self.players.iter().filter(|p| p.has_cards()).collect()
    }

    fn active_count(&self) -> usize {
        self.players.iter().filter(|p| p.has_cards()).count()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// One line per placement, hiding face-down cards.
    #[must_use]
    pub fn describe_board(&self) -> Vec<String> {
        self.board
            .placements()
            .iter()
            .map(|p| {
                let name = self.get_name(p.player).unwrap_or("?");
                if p.hidden {
                    format!("{name} placed a card")
                } else {
                    format!("{name} played {}", p.card)
                }
            })
            .collect()
    }

    #[must_use]
    pub fn num_decks(&self) -> usize {
        self.num_decks
    }

    /// Size of the full pool across all decks.
    #[must_use]
    pub fn max_cards(&self) -> usize {
        self.max_cards
    }

    /// Cards that entered play (the dealt hands).
    #[must_use]
    pub fn dealt_cards(&self) -> usize {
        self.dealt_cards
    }

    /// Cards in hands, graveyards and on the board. Always `dealt_cards()`.
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        self.players.iter().map(Player::card_count).sum::<usize>() + self.board.len()
    }

    #[must_use]
    pub fn cards_placed(&self) -> usize {
        self.cards_placed
    }

    #[must_use]
    pub fn rounds_played(&self) -> u64 {
        self.rounds_played
    }

    /// Whoever collected the most recent board.
    #[must_use]
    pub fn last_round_winner(&self) -> Option<PlayerId> {
        self.last_round_winner
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Shuffle seed; replaying it with the same roster reproduces the deal.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }


    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.is_game_over() {
            Phase::GameOver
        } else {
            self.phase
        }
    }

    /// Whether the next `step` plays face down.
    #[must_use]
    pub fn next_round_hidden(&self) -> bool {
        self.phase == Phase::BurnRound
    }

    #[must_use]
    pub fn summaries(&self) -> Vec<PlayerSummary> {
        self.players.iter().map(Player::summary).collect()
    }

    /// Whether the latest round's cards all share one rank.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.board.is_tie(self.cards_placed)
    }

    /// Some active player holds the entire pool.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.get_game_winner().is_some()
    }

    #[must_use]
    pub fn get_game_winner(&self) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|p| p.has_cards() && p.card_count() == self.max_cards)
            .map(Player::id)
    }

    // === Round primitives ===

    /// Every active player places their top card.
    pub fn place_cards(&mut self, hidden: bool) {
        for player in self.players.iter_mut().filter(|p| p.has_cards()) {
            let Some(card) = player.draw() else { continue };
            if hidden {
                debug!(player = %player.name(), "placed a card");
            } else {
                debug!(player = %player.name(), card = %card, "played");
            }
            self.board.place(player.id(), card, hidden);
        }
    }

    /// Play one round. Returns whether the next round must be hidden.
    ///
    /// With fewer than two active players nothing happens. A face-up tie
    /// leaves the cards on the board and asks for a burn; a face-down round
    /// always hands control back to face-up play.
    pub fn play_round(&mut self, hidden: bool) -> bool {
        self.cards_placed = self.active_count();
        if self.cards_placed < MIN_PLAYERS {
            return false;
        }

        self.place_cards(hidden);
        self.rounds_played += 1;

        if hidden {
            self.phase = Phase::ActiveRound;
            return false;
        }

        if self.is_draw() {
            info!(pending = self.board.len(), "tie, burning the cities");
            self.phase = Phase::BurnRound;
            return true;
        }

        self.phase = Phase::Compared;
        false
    }

    /// Highest card of the latest round takes every card on the board.
    pub fn winner_collect_cards(&mut self) {
        self.collect();
    }

    fn collect(&mut self) -> Option<PlayerId> {
        let window = match self.cards_placed {
            0 => self.board.len(),
            n => n,
        };
        let winner = self.board.leader(window)?;
        self.award_board(winner);
        Some(winner)
    }

    fn award_board(&mut self, winner: PlayerId) {
        let Some(player) = self.players.iter_mut().find(|p| p.id() == winner) else {
            return;
        };
        let cards = self.board.take_cards();
        info!(player = %player.name(), cards = cards.len(), "won the round");
        player.add_to_graveyard(cards);

        self.last_round_winner = Some(winner);
        self.phase = Phase::RoundResolved;
    }

    // === Drivers ===

    /// Advance by one user action or AI tick.
    ///
    /// Plays face down after a tie, collects after a decided face-up round,
    /// and hands a stranded board to the only player still holding cards.
    pub fn step(&mut self) -> RoundOutcome {
        if self.active_count() < MIN_PLAYERS {
            return self.settle_stranded_board();
        }

        let hidden = self.next_round_hidden();
        let burn_next = self.play_round(hidden);

        if hidden {
            return RoundOutcome::Burned {
                pending: self.board.len(),
            };
        }
        if burn_next {
            return RoundOutcome::Tie;
        }

        let cards = self.board.len();
        match self.collect() {
            Some(winner) => RoundOutcome::Won { winner, cards },
            None => RoundOutcome::Idle,
        }
    }

    fn settle_stranded_board(&mut self) -> RoundOutcome {
        if self.board.is_empty() {
            return RoundOutcome::Idle;
        }
        match self.sole_survivor() {
            Some(winner) => {
                let cards = self.board.len();
                self.award_board(winner);
                RoundOutcome::Settled { winner, cards }
            }
            None => RoundOutcome::Idle,
        }
    }

    fn sole_survivor(&self) -> Option<PlayerId> {
        match self.players_with_cards().as_slice() {
            [only] => Some(only.id()),
            _ => None,
        }
    }

    /// Step until someone holds the whole pool, play stalls, or the round
    /// cap is hit.
    pub fn play_game(&mut self) -> Standings {
        let result = loop {
            if let Some(winner) = self.get_game_winner() {
                break GameResult::Winner(winner);
            }
            if self
                .config
                .max_rounds
                .is_some_and(|max| self.rounds_played >= max)
            {
                break GameResult::RoundLimit;
            }
            if self.step() == RoundOutcome::Idle {
                break match self.sole_survivor() {
                    Some(id) => GameResult::LastStanding(id),
                    None => GameResult::Stalemate,
                };
            }
        };

        info!(?result, rounds = self.rounds_played, "game over");
        for player in &self.players {
            debug!(
                player = %player.name(),
                hand = player.hand().len(),
                graveyard = player.graveyard().len(),
                "final standing"
            );
        }

        Standings {
            result,
            rounds_played: self.rounds_played,
            players: self.summaries(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Suit};

    fn card(rank: u8) -> Card {
        Card::new(Suit::Hearts, rank).unwrap()
    }

    /// Player whose hand is `ranks` bottom to top.
    fn holding(name: &str, ranks: &[u8]) -> Player {
        let mut player = Player::new(name);
        player.hand_mut().extend(ranks.iter().map(|&r| card(r)));
        player
    }

    fn scripted(players: Vec<Player>) -> Game {
        Game::builder().players(players).pre_dealt().seed(1).build().unwrap()
    }

    #[test]
    fn test_player_count_validation() {
        for count in [0, 1, 5] {
            let players = (0..count).map(|i| Player::new(format!("P{i}"))).collect();
            assert_eq!(
                Game::new(players).unwrap_err(),
                GameError::InvalidPlayerCount { count, min: 2, max: 4 }
            );
        }
    }

    #[test]
    fn test_duplicate_player_rejected() {
        let id = PlayerId::random();
        let err = Game::builder()
            .player(Player::with_id(id, "A", true))
            .player(Player::with_id(id, "B", true))
            .build()
            .unwrap_err();
        assert_eq!(err, GameError::DuplicatePlayer(id));
    }

    #[test]
    fn test_deal_two_players() {
        let game = Game::builder()
            .players([Player::new("A"), Player::new("B")])
            .seed(42)
            .build()
            .unwrap();

        assert_eq!(game.num_decks(), 1);
        assert_eq!(game.max_cards(), 52);
        assert!(game.board().is_empty());
        for player in game.players() {
            assert_eq!(player.hand().len(), 26);
            assert!(player.graveyard().is_empty());
        }
        assert_eq!(game.phase(), Phase::ActiveRound);
    }

    #[test]
    fn test_deal_three_players_drops_remainder() {
        let game = Game::builder()
            .players([Player::new("A"), Player::new("B"), Player::new("C")])
            .seed(7)
            .build()
            .unwrap();

        assert_eq!(game.num_decks(), 1);
        assert_eq!(game.max_cards(), 52);
        assert_eq!(game.dealt_cards(), 51);
        assert!(game.players().iter().all(|p| p.hand().len() == 17));
    }

    #[test]
    fn test_deal_four_players_two_decks() {
        let players = ["A", "B", "C", "D"].map(Player::new);
        let game = Game::builder().players(players).seed(9).build().unwrap();

        assert_eq!(game.num_decks(), 2);
        assert_eq!(game.max_cards(), 104);
        assert_eq!(game.dealt_cards(), 104);
        assert!(game.players().iter().all(|p| p.hand().len() == 26));
    }

    #[test]
    fn test_same_seed_same_deal() {
        let deal = |seed| {
            let game = Game::builder()
                .players([Player::new("A"), Player::new("B")])
                .seed(seed)
                .build()
                .unwrap();
            game.players()[0]
                .hand()
                .iter()
                .map(|c| (c.suit(), c.rank()))
                .collect::<Vec<_>>()
        };
        assert_eq!(deal(5), deal(5));
        assert_ne!(deal(5), deal(6));
    }

    #[test]
    fn test_is_draw_on_equal_ranks() {
        let mut game = scripted(vec![holding("A", &[7]), holding("B", &[7])]);
        assert!(game.play_round(false));
        assert_eq!(game.cards_placed(), 2);
        assert!(game.is_draw());
        assert_eq!(game.phase(), Phase::BurnRound);
    }

    #[test]
    fn test_is_draw_on_different_ranks() {
        let mut game = scripted(vec![holding("A", &[7]), holding("B", &[8])]);
        assert!(!game.play_round(false));
        assert!(!game.is_draw());
        assert_eq!(game.phase(), Phase::Compared);
    }

    #[test]
    fn test_is_draw_before_any_round() {
        let game = scripted(vec![holding("A", &[7]), holding("B", &[7])]);
        assert!(!game.is_draw());
    }

    #[test]
    fn test_round_is_noop_with_one_active_player() {
        let mut game = scripted(vec![holding("A", &[3, 4]), Player::new("B")]);
        assert!(!game.play_round(false));
        assert_eq!(game.cards_placed(), 1);
        assert!(game.board().is_empty());
        assert_eq!(game.rounds_played(), 0);
    }

    #[test]
    fn test_hidden_round_never_requests_burn() {
        let mut game = scripted(vec![holding("A", &[5]), holding("B", &[5])]);
        assert!(!game.play_round(true));
        assert!(game.board().placements().iter().all(|p| p.hidden));
        assert_eq!(game.phase(), Phase::ActiveRound);
    }

    #[test]
    fn test_winner_collects_board() {
        let mut game = scripted(vec![holding("A", &[2, 10]), holding("B", &[3, 4])]);
        let a = game.players()[0].id();

        game.play_round(false);
        game.winner_collect_cards();

        assert!(game.board().is_empty());
        assert_eq!(game.last_round_winner(), Some(a));
        let winner = game.player(a).unwrap();
        assert_eq!(
            winner.graveyard().iter().map(Card::rank).collect::<Vec<_>>(),
            vec![10, 4]
        );
        assert_eq!(game.phase(), Phase::RoundResolved);
    }

    #[test]
    fn test_collect_on_empty_board_is_noop() {
        let mut game = scripted(vec![holding("A", &[2]), holding("B", &[3])]);
        game.winner_collect_cards();
        assert_eq!(game.last_round_winner(), None);
        assert_eq!(game.cards_in_play(), 2);
    }

    #[test]
    fn test_describe_board() {
        let mut game = scripted(vec![holding("Rasmus", &[9, 12]), holding("Liza", &[4, 12])]);
        game.play_round(false);
        game.play_round(true);

        assert_eq!(
            game.describe_board(),
            vec![
                "Rasmus played Queen of Hearts",
                "Liza played Queen of Hearts",
                "Rasmus placed a card",
                "Liza placed a card",
            ]
        );
    }

    #[test]
    fn test_get_name() {
        let game = scripted(vec![holding("A", &[2]), holding("B", &[3])]);
        let b = game.players()[1].id();
        assert_eq!(game.get_name(b), Some("B"));
        assert_eq!(game.get_name(PlayerId::random()), None);
    }

    #[test]
    fn test_step_settles_stranded_board() {
        // Both tie with B's last card; A alone can continue.
        let mut game = scripted(vec![holding("A", &[3, 6]), holding("B", &[6])]);
        let a = game.players()[0].id();

        assert_eq!(game.step(), RoundOutcome::Tie);
        assert_eq!(game.step(), RoundOutcome::Settled { winner: a, cards: 2 });
        assert_eq!(game.player(a).unwrap().card_count(), 3);
        assert_eq!(game.step(), RoundOutcome::Idle);
    }

    #[test]
    fn test_step_stalemate() {
        let mut game = scripted(vec![holding("A", &[6]), holding("B", &[6])]);
        assert_eq!(game.step(), RoundOutcome::Tie);
        assert_eq!(game.step(), RoundOutcome::Idle);
        assert_eq!(game.board().len(), 2);

        let standings = game.play_game();
        assert_eq!(standings.result, GameResult::Stalemate);
    }
}
