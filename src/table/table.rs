//! Dealing table: one hand per seat, one deck to deal from.

use tracing::{debug, info};

use crate::cards::{Card, Deck};
use crate::core::{GameRng, SeatId, SeatMap, TableConfig};
use crate::error::{HandResult, TableResult};
use crate::hand::Hand;

/// Hands for every participant plus the deck they are dealt from.
///
/// ```
/// use war_hand::core::TableConfig;
/// use war_hand::table::Table;
///
/// let config = TableConfig::new().with_player("One").with_player("Two").with_seed(1);
/// let mut table = Table::new(config).unwrap();
///
/// assert_eq!(table.deal(), 52);
/// assert_eq!(table.summary(), vec![
///     "Player One has 26 cards.".to_string(),
///     "Player Two has 26 cards.".to_string(),
/// ]);
/// ```
#[derive(Clone, Debug)]
pub struct Table {
    config: TableConfig,
    hands: SeatMap<Hand<Card>>,
    deck: Deck,
    rng: GameRng,
}

impl Table {
    /// Seat every configured player with an empty hand.
    pub fn new(config: TableConfig) -> TableResult<Self> {
        config.validate()?;

        let mut names = config.players.iter();
        let hands = SeatMap::new(config.players.len(), |_| {
            Hand::new(names.next().map(String::as_str).unwrap_or_default())
        });

        debug!(seats = hands.seat_count(), seed = config.seed, "table created");

        Ok(Self {
            rng: GameRng::new(config.seed),
            hands,
            deck: Deck::standard(),
            config,
        })
    }

    /// Shuffle (if configured) and deal the whole deck round-robin from seat 0.
    ///
    /// Returns the number of cards dealt; 0 once the deck is exhausted.
    pub fn deal(&mut self) -> usize {
        if self.config.shuffle {
            self.deck.shuffle(&mut self.rng.for_context("deck"));
        }

        let mut hands: Vec<&mut Hand<Card>> = self.hands.iter_mut().map(|(_, h)| h).collect();
        let seats = hands.len();
        let mut dealt = 0;

        while let Some(card) = self.deck.deal_one() {
            hands[dealt % seats].add_card(card);
            dealt += 1;
        }

        info!(dealt, seats, seed = self.config.seed, "dealt deck");
        dealt
    }

    /// Draw the top card of one seat's hand.
    pub fn draw(&mut self, seat: SeatId) -> HandResult<Card> {
        self.hands[seat].draw_top()
    }

    #[must_use]
    pub fn hand(&self, seat: SeatId) -> &Hand<Card> {
        &self.hands[seat]
    }

    pub fn hand_mut(&mut self, seat: SeatId) -> &mut Hand<Card> {
        &mut self.hands[seat]
    }

    /// Iterate over (SeatId, &Hand) pairs in seat order.
    pub fn hands(&self) -> impl Iterator<Item = (SeatId, &Hand<Card>)> {
        self.hands.iter()
    }

    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.hands.seat_count()
    }

    /// Cards not yet dealt.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// `describe()` of every hand, in seat order.
    #[must_use]
    pub fn summary(&self) -> Vec<String> {
        self.hands.iter().map(|(_, hand)| hand.describe()).collect()
    }

    /// Cards in all hands plus the undealt deck.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.hands.iter().map(|(_, hand)| hand.len()).sum::<usize>() + self.deck.len()
    }
}
