//! Deck construction and card lookup.
//!
//! A deck holds `2 × N` cards: two instances per face, each with its own
//! `InstanceId` and a `PairId` shared with its twin. Cards are shuffled once
//! at build time and stay in place afterwards; only statuses change.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::card::{Card, CardStatus, FaceRef};
use crate::core::config::GameConfig;
use crate::core::ids::{IdAllocator, InstanceId, PairId};
use crate::core::rng::GameRng;

/// Ids of the currently open cards. Never more than two in a valid session.
pub type OpenCards = SmallVec<[InstanceId; 2]>;

/// Ordered set of cards with O(1) lookup by instance id.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
    index: FxHashMap<InstanceId, usize>,
}

impl Deck {
    /// Wrap an already ordered list of cards.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        let index = cards
            .iter()
            .enumerate()
            .map(|(pos, card)| (card.instance_id, pos))
            .collect();
        Self { cards, index }
    }

    /// Build a shuffled deck for `config`.
    pub fn build(config: &GameConfig, rng: &mut GameRng, ids: &mut IdAllocator) -> Self {
        let faces: Vec<(PairId, FaceRef)> = (0..config.unique_faces)
            .map(|i| {
                (
                    PairId::new(i as u32),
                    FaceRef::positional(&config.asset_base_dir, i, &config.asset_extension),
                )
            })
            .collect();

        let unshuffled: Vec<Card> = faces
            .iter()
            .chain(faces.iter())
            .map(|(pair_id, face)| Card::new(*pair_id, ids.next_instance(), face.clone()))
            .collect();

        Self::from_cards(rng.shuffle(&unshuffled))
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: InstanceId) -> Option<&Card> {
        self.index.get(&id).map(|&pos| &self.cards[pos])
    }

    #[must_use]
    pub fn contains(&self, id: InstanceId) -> bool {
        self.index.contains_key(&id)
    }

    /// Set the status of one card. Returns `false` if the id is unknown.
    pub fn set_status(&mut self, id: InstanceId, status: CardStatus) -> bool {
        match self.index.get(&id) {
            Some(&pos) => {
                self.cards[pos].status = status;
                true
            }
            None => false,
        }
    }

    /// Set the status of every card in `ids`.
    pub fn set_status_many(&mut self, ids: &[InstanceId], status: CardStatus) {
        for &id in ids {
            self.set_status(id, status);
        }
    }

    /// Ids of open cards, in deck order.
    #[must_use]
    pub fn open_cards(&self) -> OpenCards {
        self.cards
            .iter()
            .filter(|c| c.is_open())
            .map(|c| c.instance_id)
            .collect()
    }

    #[must_use]
    pub fn count_with_status(&self, status: CardStatus) -> usize {
        self.cards.iter().filter(|c| c.status == status).count()
    }

    /// Whether exactly two cards are open and they belong to the same pair.
    #[must_use]
    pub fn open_cards_match(&self) -> bool {
        let mut open = self.cards.iter().filter(|c| c.is_open());
        match (open.next(), open.next(), open.next()) {
            (Some(a), Some(b), None) => a.pair_id == b.pair_id,
            _ => false,
        }
    }

    /// Whether every card has been matched.
    #[must_use]
    pub fn all_hidden(&self) -> bool {
        self.cards.iter().all(Card::is_hidden)
    }
}

/// Build a shuffled deck of `unique_faces` pairs with default assets.
pub fn build_deck(unique_faces: usize, rng: &mut GameRng, ids: &mut IdAllocator) -> Deck {
    Deck::build(&GameConfig::new(unique_faces), rng, ids)
}
