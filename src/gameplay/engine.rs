//! The gameplay state machine.
//!
//! `Gameplay` owns the deck, the single close timer and the start time of the
//! current game. All mutation happens in `start_game`, `end_game`,
//! `click_card` and the timer entry points; everything else is a pure query.
//!
//! ## Click handling
//!
//! | open before click | effect                                              |
//! |-------------------|-----------------------------------------------------|
//! | 0                 | schedule close after the first-card delay           |
//! | 1                 | schedule close after the second-card delay          |
//! | 2                 | close both now, schedule close after first delay    |
//!
//! The clicked card then opens. Two open cards of the same pair are hidden
//! at once and the pending timer is cancelled. When every card is hidden the
//! game is over: a `GameOverEvent` is returned and a new deck is dealt.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::timer::{PendingTimer, TimerSlot};
use crate::cards::{Card, CardStatus, Deck, OpenCards};
use crate::core::clock::{Clock, Millis};
use crate::core::config::GameConfig;
use crate::core::ids::{IdAllocator, InstanceId, PairId, TimerHandle};
use crate::core::rng::GameRng;

/// Emitted once per completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOverEvent {
    /// Time the last pair was hidden.
    pub completed_at: Millis,
    /// Time from the first card opened to the last pair hidden.
    pub duration_ms: Millis,
}

/// What a click did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Unknown card, card not face down, or no deck dealt.
    Ignored,
    /// The card is now open.
    Opened,
    /// The card completed a pair; both cards are hidden.
    Matched(PairId),
    /// The card completed the last pair. A fresh deck has been dealt.
    GameOver(GameOverEvent),
}

/// Gameplay session.
#[derive(Debug)]
pub struct Gameplay<C: Clock> {
    config: GameConfig,
    clock: C,
    rng: GameRng,
    ids: IdAllocator,
    deck: Option<Deck>,
    timer: TimerSlot,
    started_at: Option<Millis>,
}

impl<C: Clock> Gameplay<C> {
    /// Create a session. No deck is dealt until `start_game`.
    pub fn new(config: GameConfig, clock: C) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self {
            config,
            clock,
            rng,
            ids: IdAllocator::new(),
            deck: None,
            timer: TimerSlot::new(),
            started_at: None,
        }
    }

    // === Lifecycle ===

    /// Deal a fresh shuffled deck, face down.
    pub fn start_game(&mut self) {
        self.deck = Some(Deck::build(&self.config, &mut self.rng, &mut self.ids));
        self.timer.cancel();
        self.started_at = None;
        info!(cards = self.config.deck_size(), "game started");
    }

    /// Drop the deck and any pending timer.
    pub fn end_game(&mut self) {
        self.deck = None;
        self.timer.cancel();
        debug!("game ended");
    }

    /// Handle a click on `id`.
    ///
    /// An overdue timer is fired first, so the click sees the board as it
    /// stood at the moment it arrived. This happens even when the click is
    /// then ignored: a click on an unknown or face-up card still lets an
    /// overdue close land.
    pub fn click_card(&mut self, id: InstanceId) -> ClickOutcome {
        self.poll_timer();

        let now = self.clock.now_ms();
        let Some(deck) = self.deck.as_mut() else {
            return ClickOutcome::Ignored;
        };

        let pair_id = match deck.get(id) {
            Some(card) if card.status == CardStatus::Closed => card.pair_id,
            _ => {
                debug!(card = %id, "click ignored");
                return ClickOutcome::Ignored;
            }
        };

        if self.started_at.is_none() {
            self.started_at = Some(now);
        }

        let open = deck.open_cards();
        let delay = match open.len() {
            0 => self.config.first_card_timeout_ms,
            1 => self.config.second_card_timeout_ms,
            _ => {
                // Never let a third card open next to an unmatched pair
                deck.set_status_many(&open, CardStatus::Closed);
                self.config.first_card_timeout_ms
            }
        };
        self.timer.schedule(self.ids.next_timer(), now.saturating_add(delay));

        deck.set_status(id, CardStatus::Open);
        debug!(card = %id, "card opened");

        let mut outcome = ClickOutcome::Opened;

        if deck.open_cards_match() {
            let pair = deck.open_cards();
            deck.set_status_many(&pair, CardStatus::Hidden);
            self.timer.cancel();
            debug!(pair = %pair_id, "pair matched");
            outcome = ClickOutcome::Matched(pair_id);
        }

        if deck.all_hidden() {
            return ClickOutcome::GameOver(self.game_over());
        }

        outcome
    }

    fn game_over(&mut self) -> GameOverEvent {
        let now = self.clock.now_ms();
        let duration_ms = now.saturating_sub(self.started_at.unwrap_or(now));

        self.timer.cancel();
        self.started_at = None;
        info!(duration_ms, "game over");

        self.start_game();

        GameOverEvent {
            completed_at: now,
            duration_ms,
        }
    }

    // === Timer ===

    /// Fire the pending timer if it is due. Returns whether it fired.
    pub fn poll_timer(&mut self) -> bool {
        let now = self.clock.now_ms();
        match self.timer.take_due(now) {
            Some(timer) => {
                debug!(handle = timer.handle.0, "close timer fired");
                self.close_open_cards();
                true
            }
            None => false,
        }
    }

    /// Fire the timer identified by `handle`, regardless of its due time.
    ///
    /// A handle that has been replaced or cancelled is a no-op.
    pub fn fire_timer(&mut self, handle: TimerHandle) -> bool {
        match self.timer.take_if(handle) {
            Some(_) => {
                debug!(handle = handle.0, "close timer fired");
                self.close_open_cards();
                true
            }
            None => false,
        }
    }

    /// Turn every open card face down. Returns how many were closed.
    pub fn close_open_cards(&mut self) -> usize {
        let Some(deck) = self.deck.as_mut() else {
            return 0;
        };
        let open = deck.open_cards();
        deck.set_status_many(&open, CardStatus::Closed);
        open.len()
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn deck(&self) -> Option<&Deck> {
        self.deck.as_ref()
    }

    /// Cards in board order. Empty before the first deal.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.deck.as_ref().map(Deck::cards).unwrap_or_default()
    }

    #[must_use]
    pub fn open_cards(&self) -> OpenCards {
        self.deck.as_ref().map(Deck::open_cards).unwrap_or_default()
    }

    #[must_use]
    pub fn open_count(&self) -> usize {
        self.deck
            .as_ref()
            .map_or(0, |d| d.count_with_status(CardStatus::Open))
    }

    /// Whether exactly two cards are open and share a pair.
    #[must_use]
    pub fn opened_cards_are_same(&self) -> bool {
        self.deck.as_ref().is_some_and(Deck::open_cards_match)
    }

    /// Whether every card on the board is hidden.
    ///
    /// A finished game is redealt immediately, so this is only observed
    /// true between the last match and the redeal.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.deck.as_ref().is_some_and(|d| !d.is_empty() && d.all_hidden())
    }

    /// Time of the first click of the current game.
    #[must_use]
    pub fn started_at(&self) -> Option<Millis> {
        self.started_at
    }

    /// Time since the first click of the current game.
    #[must_use]
    pub fn elapsed_ms(&self) -> Option<Millis> {
        self.started_at
            .map(|start| self.clock.now_ms().saturating_sub(start))
    }

    #[must_use]
    pub fn pending_timer(&self) -> Option<PendingTimer> {
        self.timer.pending()
    }
}
