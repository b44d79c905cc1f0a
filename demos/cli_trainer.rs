//! CLI blackjack trainer with Hi-Lo count display and basic-strategy hints.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjtrain::{
    Action, Card, DealerHand, Hand, Phase, RoundState, Rules, Suit, TableConfig, transition,
    try_transition,
};
use pico_args::Arguments;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Blackjack counting trainer

USAGE:
  cli_trainer [OPTIONS]

OPTIONS:
  --seed N              Shuffle seed  [default: current time]
  --bankroll N          Starting bankroll  [default: 500]
  --rules FILE          Table rules as JSON
  --hints               Show the basic-strategy play for each decision
  --count               Show the running and true count

FLAGS:
  -h, --help            Print help information
";

struct Args {
    seed: u64,
    bankroll: usize,
    rules: Option<String>,
    hints: bool,
    count: bool,
}

fn main() {
    let mut pargs = Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let args = Args {
        seed: pargs.value_from_str("--seed").unwrap_or_else(|_| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        }),
        bankroll: pargs.value_from_str("--bankroll").unwrap_or(500),
        rules: pargs.opt_value_from_str("--rules").ok().flatten(),
        hints: pargs.contains("--hints"),
        count: pargs.contains("--count"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let rules = match args.rules.as_deref().map(load_rules).transpose() {
        Ok(rules) => rules.unwrap_or_default(),
        Err(err) => {
            eprintln!("Could not load rules: {err}");
            std::process::exit(1);
        }
    };

    run(&args, rules);
}

fn load_rules(path: &str) -> Result<Rules, String> {
    let text = std::fs::read_to_string(path).map_err(|err| format!("{path}: {err}"))?;
    serde_json::from_str(&text).map_err(|err| format!("{path}: {err}"))
}

fn run(args: &Args, rules: Rules) {
    println!("Blackjack trainer (seed {}, type 'q' to quit)", args.seed);

    let mut state = RoundState::new(
        TableConfig::default()
            .with_bankroll(args.bankroll)
            .with_rules(rules)
            .with_seed(args.seed),
    );

    loop {
        let money = state.seat(0).map_or(0, bjtrain::Seat::bankroll);
        if money == 0 {
            println!("You are out of money. Game over.");
            break;
        }

        if args.count {
            print_count(&state);
        }
        if state.needs_reshuffle() {
            println!("The shoe will be reshuffled before this deal.");
        }

        let Some(bet) = prompt_usize(&format!("Bet amount (1-{money}, 0 to quit): ")) else {
            break;
        };
        if bet == 0 {
            println!("Goodbye.");
            break;
        }

        state = transition(&state, Action::PlaceBet { amount: bet });
        match try_transition(&state, Action::Deal) {
            Ok(next) => state = next,
            Err(err) => {
                println!("Deal error: {err}");
                continue;
            }
        }

        while state.phase() == Phase::Insurance {
            print_table(&state);
            let cap = state.max_insurance();
            let action = match prompt_line(&format!("Dealer shows an Ace. Insure up to {cap}? (y/n): ")).as_str() {
                "y" | "yes" if state.can_take_insurance() => Action::TakeInsurance { amount: cap },
                "q" | "quit" => return,
                _ => Action::DeclineInsurance,
            };
            state = transition(&state, action);
        }

        while state.phase() == Phase::PlayerTurn {
            print_table(&state);
            if let Some(play) = state.recommended_play().filter(|_| args.hints) {
                println!("Hint: {play:?}");
            }
            println!("{}", format_actions(&state));

            let action = match prompt_line("Action: ").as_str() {
                "h" | "hit" => Action::Hit,
                "s" | "stand" => Action::Stand,
                "d" | "double" => Action::Double,
                "p" | "split" => Action::Split,
                "u" | "surrender" => Action::Surrender,
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            match try_transition(&state, action) {
                Ok(next) => state = next,
                Err(err) => println!("Action error: {err}"),
            }
        }

        while state.phase() == Phase::DealerTurn {
            let drawn = state.dealer_hand().len();
            state = transition(&state, Action::DealerTick);
            if state.phase() == Phase::DealerTurn && state.dealer_hand().len() > drawn {
                println!("Dealer draws: {}", format_dealer(state.dealer_hand(), false));
            }
        }

        print_result(&state);
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_count(state: &RoundState) {
    let true_count = state
        .true_count()
        .map_or_else(|| "-".to_string(), |count| format!("{count:+.1}"));
    println!(
        "Running count {:+} | true count {} | {:.0}% dealt",
        state.running_count(),
        true_count,
        state.penetration_used() * 100.0
    );
}

fn print_table(state: &RoundState) {
    println!("\nShoe: {} cards remaining", state.cards_remaining());

    let dealer = state.dealer_hand();
    let hidden = state.dealer_hole_hidden();
    let dealer_value = if hidden {
        dealer.up_card_value()
    } else {
        dealer.value().total
    };
    println!("\nDealer: {} (value {dealer_value})", format_dealer(dealer, hidden));

    let Some(seat) = state.seat(0) else {
        return;
    };
    for (index, hand) in seat.hands().iter().enumerate() {
        let marker = if index == seat.active_hand_index() { "*" } else { " " };
        println!(
            "{} Hand {}: {} | value {} | bet {} | {:?}",
            marker,
            index,
            format_hand(hand),
            hand.value().total,
            hand.bet(),
            hand.status()
        );
    }
    println!();
}

fn print_result(state: &RoundState) {
    let Some(result) = state.last_result() else {
        return;
    };
    println!(
        "\nDealer finished on {}{}",
        result.dealer_total,
        if result.dealer_bust { " (bust)" } else { "" }
    );
    for hand in result.hands() {
        println!(
            "Hand {}: {:?} | value {} | bet {} | paid {}",
            hand.hand_index, hand.outcome, hand.player_total, hand.bet, hand.payout
        );
    }
    if let Some(seat) = result.seat(0) {
        if seat.insurance_bet > 0 {
            println!("Insurance payout: {}", seat.insurance_payout);
        }
        println!("Net {:+}", seat.net);
    }
    println!("Round {} complete.\n", result.round_id);
}

fn format_actions(state: &RoundState) -> String {
    let parts = [
        format_action("hit", "h", state.can_hit()),
        format_action("stand", "s", state.can_stand()),
        format_action("double", "d", state.can_double()),
        format_action("split", "p", state.can_split()),
        format_action("surrender", "u", state.can_surrender()),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_dealer(dealer: &DealerHand, hidden: bool) -> String {
    if dealer.is_empty() {
        return "(no cards)".to_string();
    }
    if !hidden {
        return join_cards(dealer.cards());
    }
    let mut parts = Vec::new();
    if let Some(card) = dealer.up_card() {
        parts.push(format_card(card));
    }
    if dealer.len() > 1 {
        parts.push("??".to_string());
    }
    parts.join(" ")
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    join_cards(hand.cards())
}

fn join_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
