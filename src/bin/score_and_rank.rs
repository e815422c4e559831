use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use rand::{SeedableRng, rngs::StdRng};
use tracing_subscriber::EnvFilter;

use poker_rank::core::{
    AceRule, Card, PokerRankError, RankConfig, TieRule, WindowStrategy, parse_cards,
};
use poker_rank::holdem::{HoldemRanker, deal_missing, format_cards};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Ties {
    /// Every player gets a distinct position
    Positional,
    /// Equal hands share a rank
    Competition,
}

impl From<Ties> for TieRule {
    fn from(t: Ties) -> Self {
        match t {
            Ties::Positional => TieRule::Positional,
            Ties::Competition => TieRule::Competition,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "score_and_rank")]
#[command(about = "Score and rank Hold'em hands against a board")]
struct Cli {
    /// Number of random hands to deal when no --hand is given
    #[arg(short, long, default_value_t = 5)]
    players: usize,

    /// Seed for the deck shuffle
    #[arg(short, long)]
    seed: Option<u64>,

    /// Five board cards, e.g. "5s 2s 4s 7c 8d"
    #[arg(short, long)]
    board: Option<String>,

    /// Two hole cards, e.g. "7h Tc". Repeat for every player.
    #[arg(long = "hand")]
    hands: Vec<String>,

    /// JSON file with a rank config
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// How equal hands are ranked
    #[arg(short, long, value_enum)]
    ties: Option<Ties>,

    /// Score every 5 card subset instead of contiguous windows
    #[arg(long)]
    all_windows: bool,

    /// Let ten to ace count as a straight
    #[arg(long)]
    ace_high: bool,

    /// Don't reject a card repeated in one player's cards
    #[arg(long)]
    allow_duplicates: bool,
}

impl Cli {
    fn rank_config(&self) -> Result<RankConfig, PokerRankError> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .map_err(|e| PokerRankError::InvalidConfig(format!("{}: {e}", path.display())))?;
                RankConfig::from_json(&text)?
            }
            None => RankConfig::default(),
        };
        if let Some(ties) = self.ties {
            config = config.with_ties(ties.into());
        }
        if self.all_windows {
            config = config.with_windows(WindowStrategy::AllCombinations);
        }
        if self.ace_high {
            config = config.with_aces(AceRule::LowOrHigh);
        }
        if self.allow_duplicates {
            config = config.with_duplicate_cards(true);
        }
        Ok(config)
    }

    /// Hands and board from the command line, dealing whatever is missing.
    fn table(&self) -> Result<(Vec<Vec<Card>>, Vec<Card>), PokerRankError> {
        let hands = self
            .hands
            .iter()
            .map(|h| parse_cards(h))
            .collect::<Result<Vec<_>, _>>()?;
        let board = self.board.as_deref().map(parse_cards).transpose()?;

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        deal_missing(&mut rng, self.players, hands, board)
    }
}

fn run(cli: &Cli) -> Result<(), PokerRankError> {
    let config = cli.rank_config()?;
    let (hands, board) = cli.table()?;

    let ranker = HoldemRanker::new(config);
    let scores = ranker.score_hands(&hands, &board)?;
    let ranks = ranker.rank_scores(&scores);

    println!("Board: {}", format_cards(&board));
    for (idx, (hand, score)) in hands.iter().zip(&scores).enumerate() {
        println!(
            "Hand {idx}: {}  {:<15}  {:?}",
            format_cards(hand),
            score.label().unwrap_or("-"),
            score.as_slice()
        );
    }
    println!("Ranks: {ranks:?}");
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
