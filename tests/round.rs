//! Round flow integration tests.

use bjtrain::Rank::{Ace, Eight, Five, Four, Jack, King, Nine, Queen, Seven, Six, Ten, Three, Two};
use bjtrain::count::count_cards;
use bjtrain::shoe::{next_seed, shuffled_shoe};
use bjtrain::{
    Action, ActionError, ActionKind, BetError, Card, DealError, Hand, HandStatus, Outcome, Phase, Rank,
    RoundState, Rules, RulesError, Suit, TableConfig, TransitionError, transition, try_transition,
};

fn cards(ranks: &[Rank]) -> Vec<Card> {
    ranks.iter().map(|&rank| Card::new(rank, Suit::Spades)).collect()
}

fn rules() -> Rules {
    Rules::default().with_decks(1).with_penetration(1.0)
}

fn table_with(ranks: &[Rank], rules: Rules) -> RoundState {
    RoundState::new(
        TableConfig::default()
            .with_bankroll(100)
            .with_rules(rules)
            .with_shoe(cards(ranks)),
    )
}

fn table(ranks: &[Rank]) -> RoundState {
    table_with(ranks, rules())
}

fn bet_and_deal(state: &RoundState, amount: usize) -> RoundState {
    let state = transition(state, Action::SetBet { seat: 0, amount });
    let state = transition(&state, Action::ToggleReady { seat: 0, ready: true });
    transition(&state, Action::Deal)
}

fn outcomes(state: &RoundState) -> Vec<Outcome> {
    state
        .last_result()
        .map(|result| result.hands().map(|hand| hand.outcome).collect())
        .unwrap_or_default()
}

fn bankroll(state: &RoundState, seat: usize) -> usize {
    state.seat(seat).map_or(0, bjtrain::Seat::bankroll)
}

#[test]
fn natural_pays_three_to_two_without_dealer_play() {
    let state = bet_and_deal(&table(&[Ace, Nine, King, Seven]), 10);

    assert_eq!(state.phase(), Phase::Betting);
    assert_eq!(outcomes(&state), [Outcome::Blackjack]);
    assert_eq!(bankroll(&state, 0), 115);
    assert_eq!(state.round_id(), 1);
    assert_eq!(state.discard().len(), 4);
}

#[test]
fn bust_on_hit_settles_without_dealer_play() {
    let state = bet_and_deal(&table(&[Ten, Nine, Eight, Seven, Nine]), 10);
    assert_eq!(state.phase(), Phase::PlayerTurn);

    let state = transition(&state, Action::Hit);
    assert_eq!(state.phase(), Phase::Betting);
    assert_eq!(outcomes(&state), [Outcome::Lose]);
    assert_eq!(bankroll(&state, 0), 90);
    assert_eq!(state.dealer_hand().len(), 0);
}

#[test]
fn dealer_hits_soft_17_when_configured() {
    let soft_17 = rules()
        .with_dealer_stands_on_soft_17(false)
        .with_insurance(false);
    let state = bet_and_deal(&table_with(&[Nine, Ace, Eight, Six, Nine, Two], soft_17), 10);
    let state = transition(&state, Action::Stand);
    assert_eq!(state.phase(), Phase::DealerTurn);

    let played = transition(&state, Action::DealerPlay);
    let result = played.last_result().expect("round settled");
    assert_eq!(result.dealer_total, 18);
    assert_eq!(outcomes(&played), [Outcome::Lose]);

    let mut ticked = state;
    for _ in 0..10 {
        if ticked.phase() != Phase::DealerTurn {
            break;
        }
        ticked = transition(&ticked, Action::DealerTick);
    }
    assert_eq!(ticked, played);
}

#[test]
fn dealer_stands_on_soft_17_by_default() {
    let state = bet_and_deal(&table_with(&[Ten, Ace, Nine, Six], rules().with_insurance(false)), 10);
    let state = transition(&state, Action::Stand);
    let state = transition(&state, Action::DealerPlay);

    let result = state.last_result().expect("round settled");
    assert_eq!(result.dealer_total, 17);
    assert_eq!(outcomes(&state), [Outcome::Win]);
    assert_eq!(bankroll(&state, 0), 110);
}

#[test]
fn split_pair_makes_two_hands() {
    let state = bet_and_deal(&table(&[Eight, Five, Eight, Nine, Two, Three]), 10);
    assert!(state.can_split());

    let state = transition(&state, Action::Split);
    let seat = state.seat(0).expect("seat 0");
    assert_eq!(seat.hands().len(), 2);
    assert_eq!(seat.hands()[0].len(), 2);
    assert_eq!(seat.hands()[1].len(), 2);
    assert_eq!(seat.bankroll(), 80);
    assert_eq!(state.active_hand().map(|hand| hand.value().total), Some(10));
}

#[test]
fn split_aces_stand_and_21_is_not_a_natural() {
    let state = bet_and_deal(&table(&[Ace, Nine, Ace, Seven, King, Six, Ten]), 10);
    let state = transition(&state, Action::Split);

    assert_eq!(state.phase(), Phase::DealerTurn);
    let hands = state.seat(0).expect("seat 0").hands();
    assert!(hands.iter().all(|hand| hand.status() == HandStatus::Stood));
    assert!(hands.iter().all(|hand| hand.len() == 2));

    let state = transition(&state, Action::DealerPlay);
    assert_eq!(outcomes(&state), [Outcome::Win, Outcome::Win]);
    assert_eq!(bankroll(&state, 0), 120);
}

#[test]
fn split_aces_may_hit_when_allowed() {
    let state = bet_and_deal(
        &table_with(&[Ace, Nine, Ace, Seven, Five, Six], rules().with_hit_split_aces(true)),
        10,
    );
    let state = transition(&state, Action::Split);

    assert_eq!(state.phase(), Phase::PlayerTurn);
    assert!(state.can_hit());
    assert_eq!(state.active_hand().map(|hand| hand.value().total), Some(16));
}

#[test]
fn double_respects_allowed_totals() {
    let only_ten_eleven = rules().with_double_totals([10, 11]);
    let state = bet_and_deal(&table_with(&[Five, Nine, Four, Seven], only_ten_eleven), 10);
    assert!(!state.can_double());
    assert_eq!(
        try_transition(&state, Action::Double),
        Err(TransitionError::Action(ActionError::CannotDouble))
    );

    let state = bet_and_deal(&table(&[Five, Nine, Four, Seven, Ten, Ten]), 10);
    assert!(state.can_double());
    let state = transition(&state, Action::Double);
    assert_eq!(state.phase(), Phase::DealerTurn);
    assert_eq!(bankroll(&state, 0), 80);

    let hand = &state.seat(0).expect("seat 0").hands()[0];
    assert!(hand.is_doubled());
    assert_eq!(hand.bet(), 20);
    assert_eq!(hand.len(), 3);

    let state = transition(&state, Action::DealerPlay);
    assert_eq!(outcomes(&state), [Outcome::Win]);
    assert_eq!(bankroll(&state, 0), 120);
}

#[test]
fn double_needs_funds() {
    let state = bet_and_deal(&table(&[Five, Nine, Four, Seven]), 60);
    assert!(!state.can_double());
    assert_eq!(
        try_transition(&state, Action::Double),
        Err(TransitionError::Action(ActionError::InsufficientFunds))
    );
}

#[test]
fn surrender_returns_half_and_skips_dealer() {
    let state = bet_and_deal(&table(&[Ten, Nine, Six, Seven]), 10);
    assert!(state.can_surrender());

    let state = transition(&state, Action::Surrender);
    assert_eq!(state.phase(), Phase::Betting);
    assert_eq!(outcomes(&state), [Outcome::Surrender]);
    assert_eq!(bankroll(&state, 0), 95);
}

#[test]
fn insurance_pays_against_dealer_blackjack() {
    let state = bet_and_deal(&table(&[Nine, Ace, Seven, King]), 10);
    assert_eq!(state.phase(), Phase::Insurance);
    assert!(state.dealer_hole_hidden());
    assert_eq!(state.max_insurance(), 5);

    let state = transition(&state, Action::TakeInsurance { amount: 5 });
    assert_eq!(state.phase(), Phase::Betting);

    let result = state.last_result().expect("round settled");
    assert!(result.dealer_blackjack);
    let seat = result.seat(0).expect("seat result");
    assert_eq!(seat.insurance_bet, 5);
    assert_eq!(seat.insurance_payout, 15);
    assert_eq!(seat.net, 0);
    assert_eq!(outcomes(&state), [Outcome::Lose]);
    assert_eq!(bankroll(&state, 0), 100);
}

#[test]
fn insurance_is_capped_and_lost_without_dealer_blackjack() {
    let state = bet_and_deal(&table(&[Ten, Ace, Nine, Six]), 10);
    let state = transition(&state, Action::TakeInsurance { amount: 50 });

    assert_eq!(state.phase(), Phase::PlayerTurn);
    let seat = state.seat(0).expect("seat 0");
    assert_eq!(seat.insurance_bet(), 5);
    assert_eq!(seat.bankroll(), 85);

    let state = transition(&state, Action::Stand);
    let state = transition(&state, Action::DealerPlay);
    let result = state.last_result().expect("round settled");
    let seat = result.seat(0).expect("seat result");
    assert_eq!(seat.insurance_payout, 0);
    assert_eq!(seat.net, 5);
    assert_eq!(bankroll(&state, 0), 105);
}

#[test]
fn declined_insurance_moves_to_player_turn() {
    let state = bet_and_deal(&table(&[Ten, Ace, Nine, Six]), 10);
    assert!(state.can_take_insurance());

    let state = transition(&state, Action::DeclineInsurance);
    assert_eq!(state.phase(), Phase::PlayerTurn);
    assert_eq!(bankroll(&state, 0), 90);
    assert_eq!(
        try_transition(&state, Action::DeclineInsurance),
        Err(TransitionError::WrongPhase {
            phase: Phase::PlayerTurn,
            action: ActionKind::DeclineInsurance,
        })
    );
}

#[test]
fn insurance_disabled_settles_dealer_blackjack_at_once() {
    let state = bet_and_deal(&table_with(&[Nine, Ace, Seven, King], rules().with_insurance(false)), 10);
    assert_eq!(state.phase(), Phase::Betting);
    assert_eq!(outcomes(&state), [Outcome::Lose]);
}

#[test]
fn dealer_ten_up_blackjack_settles_without_insurance() {
    let state = bet_and_deal(&table(&[Nine, King, Seven, Ace]), 10);
    assert_eq!(state.phase(), Phase::Betting);
    assert!(state.last_result().expect("round settled").dealer_blackjack);
    assert_eq!(
        try_transition(&state, Action::TakeInsurance { amount: 5 }),
        Err(TransitionError::WrongPhase {
            phase: Phase::Betting,
            action: ActionKind::TakeInsurance,
        })
    );
}

#[test]
fn seats_act_in_round_order_and_idle_bets_skip() {
    let state = RoundState::new(
        TableConfig::default()
            .with_bankroll(100)
            .with_seats(3)
            .with_rules(rules())
            .with_shoe(cards(&[Ten, Nine, Seven, Eight, Ten, Nine, Ten])),
    );
    let state = transition(&state, Action::SetBet { seat: 0, amount: 10 });
    let state = transition(&state, Action::ToggleReady { seat: 0, ready: true });
    let state = transition(&state, Action::SetBet { seat: 1, amount: 10 });
    let state = transition(&state, Action::SetBet { seat: 2, amount: 10 });
    let state = transition(&state, Action::ToggleReady { seat: 2, ready: true });
    let state = transition(&state, Action::Deal);

    assert_eq!(state.participants(), [0, 2]);
    assert_eq!(state.active_seat_index(), 0);
    assert!(state.seat(1).expect("seat 1").skipped_round());
    assert!(state.seat(1).expect("seat 1").hands().is_empty());

    let state = transition(&state, Action::Stand);
    assert_eq!(state.active_seat_index(), 2);
    let state = transition(&state, Action::Stand);
    assert_eq!(state.phase(), Phase::DealerTurn);

    let state = transition(&state, Action::DealerPlay);
    let result = state.last_result().expect("round settled");
    assert!(result.dealer_bust);
    assert_eq!(
        result.seats.iter().map(|seat| seat.seat).collect::<Vec<_>>(),
        [0, 2]
    );
    assert_eq!(bankroll(&state, 0), 110);
    assert_eq!(bankroll(&state, 1), 100);
    assert_eq!(bankroll(&state, 2), 110);
}

#[test]
fn wrong_phase_leaves_state_unchanged() {
    let state = table(&[Ten, Nine, Eight, Seven]);

    assert_eq!(
        try_transition(&state, Action::Hit),
        Err(TransitionError::WrongPhase {
            phase: Phase::Betting,
            action: ActionKind::Hit,
        })
    );
    assert_eq!(transition(&state, Action::Hit), state);
    assert_eq!(transition(&state, Action::DealerTick), state);

    let dealt = bet_and_deal(&state, 10);
    assert_eq!(transition(&dealt, Action::AddSeat), dealt);
    assert_eq!(transition(&dealt, Action::Reshuffle { seed: 3 }), dealt);
    assert_eq!(transition(&dealt, Action::SetRules(rules())), dealt);
}

#[test]
fn bets_must_be_covered() {
    let state = table(&[Ten, Nine, Eight, Seven]);
    let state = transition(&state, Action::SetBet { seat: 0, amount: 500 });
    assert_eq!(
        try_transition(&state, Action::ToggleReady { seat: 0, ready: true }),
        Err(TransitionError::Bet(BetError::InvalidBet {
            bet: 500,
            bankroll: 100,
        }))
    );
    assert_eq!(
        try_transition(&state, Action::SetBet { seat: 4, amount: 10 }),
        Err(TransitionError::Bet(BetError::SeatNotFound(4)))
    );

    let state = transition(&state, Action::PlaceBet { amount: 500 });
    assert!(!state.can_deal());
    assert_eq!(
        try_transition(&state, Action::Deal),
        Err(TransitionError::Deal(DealError::NoParticipants))
    );

    let state = transition(&state, Action::PlaceBet { amount: 100 });
    assert!(state.can_deal());
}

#[test]
fn short_shoe_refuses_to_deal() {
    let state = table(&[Ten, Nine, Eight]);
    let state = transition(&state, Action::PlaceBet { amount: 10 });
    assert_eq!(
        try_transition(&state, Action::Deal),
        Err(TransitionError::Deal(DealError::NotEnoughCards {
            needed: 4,
            remaining: 3,
        }))
    );
}

#[test]
fn stepped_deal_matches_full_deal() {
    let state = table(&[Ten, Nine, Eight, Seven]);
    let state = transition(&state, Action::PlaceBet { amount: 10 });
    let dealt = transition(&state, Action::Deal);

    let mut stepped = transition(&state, Action::BeginDeal);
    assert_eq!(stepped.phase(), Phase::Dealing);
    assert_eq!(stepped.deal_queue().len(), 4);
    while stepped.phase() == Phase::Dealing {
        stepped = transition(&stepped, Action::DealStep);
    }
    assert_eq!(stepped, dealt);
}

#[test]
fn table_holds_seven_seats() {
    let state = table(&[Ten]);
    let state = transition(&state, Action::AddSeat);
    assert_eq!(state.seats().len(), 2);
    assert_eq!(bankroll(&state, 1), 100);

    let full = RoundState::new(TableConfig::default().with_seats(9));
    assert_eq!(full.seats().len(), 7);
    assert_eq!(
        try_transition(&full, Action::AddSeat),
        Err(TransitionError::Bet(BetError::TableFull))
    );
}

#[test]
fn end_round_refunds_wagers() {
    let state = bet_and_deal(&table(&[Ten, Nine, Eight, Seven]), 10);
    assert_eq!(state.phase(), Phase::PlayerTurn);
    assert_eq!(bankroll(&state, 0), 90);

    let state = transition(&state, Action::EndRound);
    assert_eq!(state.phase(), Phase::Betting);
    assert_eq!(bankroll(&state, 0), 100);
    assert_eq!(state.discard().len(), 4);
    assert!(state.last_result().is_none());
    assert!(state.seat(0).expect("seat 0").hands().is_empty());
    assert_eq!(state.cards_accounted(), state.card_total());
}

#[test]
fn reshuffle_is_deterministic() {
    let base = RoundState::new(TableConfig::default().with_rules(Rules::default().with_decks(1)));
    let played = bet_and_deal(&base, 10);
    let played = transition(&played, Action::EndRound);
    assert_eq!(played.discard().len(), 4);

    let first = transition(&played, Action::Reshuffle { seed: 42 });
    let second = transition(&base, Action::Reshuffle { seed: 42 });

    assert_eq!(first.shoe().len(), 52);
    assert!(first.discard().is_empty());
    assert_eq!(first.running_count(), 0);
    assert_eq!(first.shoe(), second.shoe());
    assert_eq!(first.shoe(), &shuffled_shoe(1, 42));
}

#[test]
fn penetration_triggers_reshuffle_on_next_deal() {
    let seed = 9;
    let state = RoundState::new(
        TableConfig::default()
            .with_rules(Rules::default().with_decks(1).with_penetration(0.05))
            .with_seed(seed),
    );
    assert!(!state.needs_reshuffle());

    let state = transition(&state, Action::PlaceBet { amount: 10 });
    let state = transition(&state, Action::Deal);
    let state = transition(&state, Action::EndRound);
    assert!(state.needs_reshuffle());

    let state = transition(&state, Action::PlaceBet { amount: 10 });
    let state = transition(&state, Action::Deal);

    let expected = shuffled_shoe(1, next_seed(seed));
    assert_eq!(state.cards_remaining(), 48);
    assert!(state.shoe().iter().eq(expected.iter().skip(4)));
    assert_eq!(state.running_count(), count_cards(0, expected.iter().take(4)));
    assert_eq!(state.cards_accounted(), 52);
}

#[test]
fn running_count_carries_across_rounds() {
    let state = table(&[Two, Five, Three, Six, King, Queen, Seven, Jack, Eight]);
    let state = bet_and_deal(&state, 10);
    assert_eq!(state.running_count(), 4);

    let state = transition(&state, Action::Stand);
    let state = transition(&state, Action::DealerPlay);
    assert_eq!(state.running_count(), 3);
    assert_eq!(outcomes(&state), [Outcome::Lose]);
    let true_count = state.true_count().expect("cards left");
    assert!((true_count - 39.0).abs() < 1e-9);

    let state = transition(&state, Action::PlaceBet { amount: 10 });
    let state = transition(&state, Action::Deal);
    assert_eq!(state.round_id(), 2);
    assert_eq!(state.running_count(), 1);
    assert_eq!(state.true_count(), None);
}

#[test]
fn set_rules_rebuilds_shoe_on_deck_change() {
    let state = RoundState::new(TableConfig::default().with_rules(Rules::default().with_decks(1)));

    let state = transition(&state, Action::SetRules(Rules::default().with_decks(2)));
    assert_eq!(state.shoe().len(), 104);
    assert_eq!(state.card_total(), 104);
    assert_eq!(state.rules().decks, 2);

    assert_eq!(
        try_transition(&state, Action::SetRules(Rules::default().with_decks(0))),
        Err(TransitionError::Rules(RulesError::NoDecks))
    );
    assert_eq!(
        try_transition(&state, Action::SetRules(Rules::default().with_penetration(1.5))),
        Err(TransitionError::Rules(RulesError::Penetration))
    );
}

#[test]
fn insurance_decisions_follow_round_order() {
    let state = RoundState::new(
        TableConfig::default()
            .with_bankroll(100)
            .with_seats(2)
            .with_rules(rules())
            .with_shoe(cards(&[Ten, Nine, Ace, Nine, Ten, Six, Ten])),
    );
    let state = transition(&state, Action::PlaceBet { amount: 10 });
    let state = transition(&state, Action::SetBet { seat: 1, amount: 20 });
    let state = transition(&state, Action::ToggleReady { seat: 1, ready: true });
    let state = transition(&state, Action::Deal);

    assert_eq!(state.phase(), Phase::Insurance);
    assert_eq!(state.active_seat_index(), 0);
    let state = transition(&state, Action::DeclineInsurance);
    assert_eq!(state.active_seat_index(), 1);
    assert_eq!(state.max_insurance(), 10);

    let state = transition(&state, Action::TakeInsurance { amount: 10 });
    assert_eq!(state.phase(), Phase::PlayerTurn);
    assert_eq!(state.active_seat_index(), 0);
    assert_eq!(
        try_transition(&state, Action::TakeInsurance { amount: 1 }),
        Err(TransitionError::WrongPhase {
            phase: Phase::PlayerTurn,
            action: ActionKind::TakeInsurance,
        })
    );
}

#[test]
fn recommended_play_tracks_active_hand() {
    let state = table(&[Ten]);
    assert_eq!(state.recommended_play(), None);

    let state = bet_and_deal(&table(&[Ten, Ten, Six, Seven]), 10);
    assert_eq!(state.recommended_play(), Some(bjtrain::Play::Surrender));

    let state = bet_and_deal(&table_with(&[Ten, Ten, Six, Seven], rules().with_surrender(false)), 10);
    assert_eq!(state.recommended_play(), Some(bjtrain::Play::Hit));
}

#[test]
fn split_is_capped_by_max_hands() {
    let shoe = [Eight, Five, Eight, Nine, Eight, Three];

    let state = bet_and_deal(&table(&shoe), 10);
    let state = transition(&state, Action::Split);
    assert_eq!(state.active_hand().map(Hand::len), Some(2));
    assert!(state.can_split());

    let capped = bet_and_deal(&table_with(&shoe, rules().with_max_hands(2)), 10);
    let capped = transition(&capped, Action::Split);
    assert_eq!(capped.seat(0).expect("seat 0").hands().len(), 2);
    assert!(!capped.can_split());
    assert_eq!(
        try_transition(&capped, Action::Split),
        Err(TransitionError::Action(ActionError::CannotSplit))
    );
}

#[test]
fn split_aces_resplit_only_when_allowed() {
    let shoe = [Ace, Five, Ace, Nine, Ace, Three, Four, Six];
    let hittable = rules().with_hit_split_aces(true);

    let state = bet_and_deal(&table_with(&shoe, hittable.clone()), 10);
    let state = transition(&state, Action::Split);
    assert_eq!(state.phase(), Phase::PlayerTurn);
    assert!(!state.can_split());
    assert_eq!(
        try_transition(&state, Action::Split),
        Err(TransitionError::Action(ActionError::CannotSplit))
    );

    let state = bet_and_deal(&table_with(&shoe, hittable.with_resplit_aces(true)), 10);
    let state = transition(&state, Action::Split);
    assert!(state.can_split());
    let state = transition(&state, Action::Split);
    assert_eq!(state.seat(0).expect("seat 0").hands().len(), 3);
}

#[test]
fn split_needs_funds() {
    let state = bet_and_deal(&table(&[Eight, Five, Eight, Nine]), 60);
    assert_eq!(bankroll(&state, 0), 40);
    assert!(!state.can_split());
    assert_eq!(
        try_transition(&state, Action::Split),
        Err(TransitionError::Action(ActionError::InsufficientFunds))
    );
}

#[test]
fn double_after_split_follows_rules() {
    let shoe = [Eight, Five, Eight, Nine, Three, Two];

    let state = bet_and_deal(&table(&shoe), 10);
    let state = transition(&state, Action::Split);
    assert_eq!(state.active_hand().map(|hand| hand.value().total), Some(11));
    assert!(state.can_double());

    let state = bet_and_deal(&table_with(&shoe, rules().with_double_after_split(false)), 10);
    let state = transition(&state, Action::Split);
    assert_eq!(state.active_hand().map(|hand| hand.value().total), Some(11));
    assert!(!state.can_double());
    assert_eq!(
        try_transition(&state, Action::Double),
        Err(TransitionError::Action(ActionError::CannotDouble))
    );
}

#[test]
fn surrender_needs_rules_and_two_cards() {
    let state = bet_and_deal(&table_with(&[Ten, Nine, Six, Seven], rules().with_surrender(false)), 10);
    assert!(!state.can_surrender());
    assert_eq!(
        try_transition(&state, Action::Surrender),
        Err(TransitionError::Action(ActionError::CannotSurrender))
    );

    let state = bet_and_deal(&table(&[Ten, Nine, Two, Seven, Two]), 10);
    assert!(state.can_surrender());
    let state = transition(&state, Action::Hit);
    assert_eq!(state.active_hand().map(Hand::len), Some(3));
    assert!(!state.can_surrender());
    assert_eq!(
        try_transition(&state, Action::Surrender),
        Err(TransitionError::Action(ActionError::CannotSurrender))
    );
}

#[test]
fn zero_penetration_reshuffles_before_every_deal() {
    let seed = 5;
    let mut state = RoundState::new(
        TableConfig::default()
            .with_rules(Rules::default().with_decks(1).with_penetration(0.0))
            .with_seed(seed),
    );
    assert!(state.needs_reshuffle());

    let mut chain = seed;
    for _ in 0..20 {
        chain = next_seed(chain);
        state = transition(&state, Action::PlaceBet { amount: 10 });
        state = transition(&state, Action::Deal);
        assert_eq!(state.cards_remaining(), 48);
        assert!(state.shoe().iter().eq(shuffled_shoe(1, chain).iter().skip(4)));
        state = transition(&state, Action::EndRound);
    }
    assert_eq!(state.round_id(), 20);
}

#[test]
fn constructor_raises_empty_rules() {
    let state = RoundState::new(
        TableConfig::default().with_rules(
            Rules::default()
                .with_decks(0)
                .with_max_hands(0)
                .with_penetration(3.0),
        ),
    );
    assert_eq!(state.rules().decks, 1);
    assert_eq!(state.rules().max_hands, 1);
    assert!((state.rules().penetration - 1.0).abs() < f64::EPSILON);
    assert_eq!(state.card_total(), 52);

    let state = transition(&state, Action::PlaceBet { amount: 10 });
    assert!(try_transition(&state, Action::Deal).is_ok());
}
