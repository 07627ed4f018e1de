//! Gameplay state machine tests.
//!
//! These tests drive `Gameplay` through click sequences with a manual clock:
//! - Deck integrity on every deal
//! - Open-count bound under arbitrary clicks and timer firings
//! - Match, mismatch, timeout and third-click behavior
//! - Win detection and redeal

use proptest::prelude::*;
use rustc_hash::FxHashMap;

use memory_match::{
    build_deck, CardStatus, ClickOutcome, GameConfig, GameRng, Gameplay, IdAllocator, InstanceId,
    ManualClock, PairId,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn new_game(faces: usize, seed: u64) -> (Gameplay<ManualClock>, ManualClock) {
    init_tracing();
    let clock = ManualClock::new(0);
    let mut game = Gameplay::new(GameConfig::new(faces).with_seed(seed), clock.clone());
    game.start_game();
    (game, clock)
}

fn twin_of(game: &Gameplay<ManualClock>, id: InstanceId) -> InstanceId {
    let pair = game.deck().unwrap().get(id).unwrap().pair_id;
    game.cards()
        .iter()
        .find(|c| c.pair_id == pair && c.instance_id != id)
        .unwrap()
        .instance_id
}

fn status(game: &Gameplay<ManualClock>, id: InstanceId) -> CardStatus {
    game.deck().unwrap().get(id).unwrap().status
}

/// Test the `build_deck(2)` walk-through: matching a pair hides both cards.
#[test]
fn test_two_pair_example() {
    let deck = build_deck(2, &mut GameRng::new(5), &mut IdAllocator::new());
    assert_eq!(deck.len(), 4);

    let mut pairs: Vec<PairId> = deck.cards().iter().map(|c| c.pair_id).collect();
    pairs.sort();
    pairs.dedup();
    assert_eq!(pairs.len(), 2);

    let (mut game, _) = new_game(2, 5);
    let a = game.cards()[0].instance_id;
    let b = twin_of(&game, a);

    game.click_card(a);
    assert_eq!(game.open_count(), 1);
    assert!(!game.opened_cards_are_same());

    assert!(matches!(game.click_card(b), ClickOutcome::Matched(_)));
    assert_eq!(status(&game, a), CardStatus::Hidden);
    assert_eq!(status(&game, b), CardStatus::Hidden);
    assert!(!game.opened_cards_are_same());
    assert_eq!(game.open_count(), 0);
}

/// Test that a mismatched pair stays open until the timer fires.
#[test]
fn test_mismatch_closes_on_timeout() {
    let (mut game, clock) = new_game(4, 9);
    let a = game.cards()[0].instance_id;
    let pair_a = game.cards()[0].pair_id;
    let b = game
        .cards()
        .iter()
        .find(|c| c.pair_id != pair_a)
        .unwrap()
        .instance_id;

    game.click_card(a);
    clock.advance(1_000);
    game.click_card(b);

    clock.advance(4_999);
    assert!(!game.poll_timer());
    assert_eq!(game.open_count(), 2);

    clock.advance(1);
    assert!(game.poll_timer());
    assert_eq!(status(&game, a), CardStatus::Closed);
    assert_eq!(status(&game, b), CardStatus::Closed);
}

/// Test that a match cancels the pending timer, so a later card is not
/// closed early by a stale deadline.
#[test]
fn test_match_cancels_timer() {
    let (mut game, clock) = new_game(4, 2);
    let a = game.cards()[0].instance_id;
    let twin = twin_of(&game, a);
    let c = game
        .cards()
        .iter()
        .find(|card| card.instance_id != a && card.instance_id != twin)
        .unwrap()
        .instance_id;

    game.click_card(a);
    clock.advance(4_000);
    game.click_card(twin);
    assert!(game.pending_timer().is_none());

    clock.advance(500);
    game.click_card(c);

    // The timer armed by the first click would have fired at 5000
    clock.advance(1_000);
    assert!(!game.poll_timer());
    assert_eq!(status(&game, c), CardStatus::Open);
}

/// Test a full game: one result, measured from the first click, then a redeal.
#[test]
fn test_full_game_reports_once() {
    let (mut game, clock) = new_game(5, 17);
    clock.set(2_000);

    let cards = game.cards().to_vec();
    let mut seen: Vec<PairId> = Vec::new();
    let mut game_overs = Vec::new();

    for card in &cards {
        if seen.contains(&card.pair_id) {
            continue;
        }
        seen.push(card.pair_id);

        for id in [card.instance_id, twin_of(&game, card.instance_id)] {
            if let ClickOutcome::GameOver(event) = game.click_card(id) {
                game_overs.push(event);
            }
            clock.advance(250);
        }
    }

    assert_eq!(game_overs.len(), 1);
    assert_eq!(game_overs[0].duration_ms, 9 * 250);
    assert_eq!(game_overs[0].completed_at, 2_000 + 9 * 250);

    assert_eq!(game.cards().len(), 10);
    assert!(game.cards().iter().all(|c| c.status == CardStatus::Closed));
    assert!(game.started_at().is_none());
}

/// Test that old instance ids are dead after a redeal.
#[test]
fn test_click_from_previous_deck_ignored() {
    let (mut game, _) = new_game(2, 1);
    let old = game.cards()[0].instance_id;

    game.start_game();
    assert_eq!(game.click_card(old), ClickOutcome::Ignored);
    assert_eq!(game.open_count(), 0);
}

#[derive(Clone, Debug)]
enum Step {
    Click(usize),
    Wait(u64),
    Fire,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        4 => (0usize..64).prop_map(Step::Click),
        1 => (0u64..8_000).prop_map(Step::Wait),
        1 => Just(Step::Fire),
    ]
}

proptest! {
    /// Deck integrity holds for any size and seed.
    #[test]
    fn prop_deck_integrity(faces in 1usize..40, seed in any::<u64>()) {
        let deck = build_deck(faces, &mut GameRng::new(seed), &mut IdAllocator::new());
        prop_assert_eq!(deck.len(), faces * 2);

        let mut counts: FxHashMap<PairId, usize> = FxHashMap::default();
        for card in deck.cards() {
            *counts.entry(card.pair_id).or_default() += 1;
            prop_assert_eq!(card.status, CardStatus::Closed);
        }
        prop_assert!(counts.values().all(|&n| n == 2));

        let mut ids: Vec<_> = deck.cards().iter().map(|c| c.instance_id).collect();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), faces * 2);
    }

    /// Shuffle is a permutation and never touches its input.
    #[test]
    fn prop_shuffle_permutation(items in prop::collection::vec(any::<u16>(), 0..50), seed in any::<u64>()) {
        let before = items.clone();
        let mut shuffled = GameRng::new(seed).shuffle(&items);

        prop_assert_eq!(&items, &before);
        if items.len() <= 1 {
            prop_assert_eq!(&shuffled, &items);
        }

        let mut sorted = items.clone();
        sorted.sort();
        shuffled.sort();
        prop_assert_eq!(shuffled, sorted);
    }

    /// Never more than two cards open, hidden cards stay hidden, and pairs
    /// are hidden together.
    #[test]
    fn prop_open_count_bounded(faces in 1usize..8, seed in any::<u64>(), steps in prop::collection::vec(step(), 0..120)) {
        let (mut game, clock) = new_game(faces, seed);
        let mut hidden: Vec<InstanceId> = Vec::new();

        for step in steps {
            match step {
                Step::Click(i) => {
                    let cards = game.cards();
                    let id = cards[i % cards.len()].instance_id;
                    if let ClickOutcome::GameOver(_) = game.click_card(id) {
                        hidden.clear();
                    }
                }
                Step::Wait(ms) => clock.advance(ms),
                Step::Fire => {
                    game.poll_timer();
                }
            }

            prop_assert!(game.open_count() <= 2);
            prop_assert!(game.pending_timer().is_none() || game.open_count() > 0);

            for id in &hidden {
                prop_assert_eq!(status(&game, *id), CardStatus::Hidden);
            }
            hidden = game
                .cards()
                .iter()
                .filter(|c| c.status == CardStatus::Hidden)
                .map(|c| c.instance_id)
                .collect();

            for id in &hidden {
                prop_assert_eq!(status(&game, twin_of(&game, *id)), CardStatus::Hidden);
            }
        }
    }
}
