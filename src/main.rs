#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_gym::{
    benchmark, init_logging, print_board, static_fleet_v1, Agent, BattleshipEnv, Board,
    BoardConfig, EnvConfig, FloodHunt, PolicyAgent, RandomSearch, Scorecard, ShipConfig,
    SweepPolicy,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum AgentKind {
    Trivial,
    Hunt,
    Policy,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Let one agent play a single board to completion.
    Play {
        #[arg(long, value_enum, default_value_t = AgentKind::Hunt)]
        agent: AgentKind,
        #[arg(long, default_value_t = 10)]
        dim: usize,
        #[arg(long, help = "Use the frozen 10x10 preset layout instead of random placement")]
        preset: bool,
        #[arg(long, help = "Show ship positions on the final board")]
        reveal: bool,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Play many games per agent and print scorecards as JSON.
    Bench {
        #[arg(long, default_value_t = 100)]
        games: usize,
        #[arg(long, default_value_t = 10)]
        dim: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            agent,
            dim,
            preset,
            reveal,
            seed,
        } => {
            let mut rng = if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let ships = if preset {
                ShipConfig::Explicit(static_fleet_v1().map_err(|e| anyhow::anyhow!(e))?)
            } else {
                ShipConfig::Default
            };
            let config = BoardConfig {
                dim,
                ships,
                playmode: !reveal,
            };
            let board = Board::new(&config, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
            let (score, board) = play_once(agent, board, rng)?;
            print_board(&board);
            println!("{:?} agent finished in {} shots", agent, score);
        }
        Commands::Bench { games, dim, seed } => {
            let mut report = serde_json::Map::new();
            for agent in [AgentKind::Trivial, AgentKind::Hunt, AgentKind::Policy] {
                let card = bench_agent(agent, games, dim, seed)?;
                report.insert(
                    format!("{:?}", agent).to_lowercase(),
                    serde_json::to_value(card)?,
                );
            }
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn play_once(agent: AgentKind, board: Board, rng: SmallRng) -> anyhow::Result<(usize, Board)> {
    match agent {
        AgentKind::Trivial => {
            let mut a = Agent::new(board, RandomSearch::new(), rng);
            let score = a.play_until_completion().map_err(|e| anyhow::anyhow!(e))?;
            Ok((score, a.into_board()))
        }
        AgentKind::Hunt => {
            let mut a = Agent::new(board, FloodHunt::new(), rng);
            let score = a.play_until_completion().map_err(|e| anyhow::anyhow!(e))?;
            Ok((score, a.into_board()))
        }
        AgentKind::Policy => {
            let env_config = EnvConfig {
                dim: board.dim(),
                ..EnvConfig::default()
            };
            let env = BattleshipEnv::new(env_config, 0).map_err(|e| anyhow::anyhow!(e))?;
            let mut a = PolicyAgent::new(Some(board), SweepPolicy, env)
                .map_err(|e| anyhow::anyhow!(e))?;
            let (score, reward) = a.play_until_completion().map_err(|e| anyhow::anyhow!(e))?;
            println!("Episode reward: {}", reward);
            Ok((score, a.board().clone()))
        }
    }
}

#[cfg(feature = "std")]
fn bench_agent(
    agent: AgentKind,
    games: usize,
    dim: usize,
    seed: u64,
) -> anyhow::Result<Scorecard> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let config = BoardConfig::with_dim(dim);
    benchmark(games, |_| {
        let board = Board::new(&config, &mut rng)?;
        let agent_rng = SmallRng::from_rng(&mut rng);
        match agent {
            AgentKind::Trivial => {
                Agent::new(board, RandomSearch::new(), agent_rng).play_until_completion()
            }
            AgentKind::Hunt => {
                Agent::new(board, FloodHunt::new(), agent_rng).play_until_completion()
            }
            AgentKind::Policy => {
                let env_config = EnvConfig {
                    dim,
                    ..EnvConfig::default()
                };
                let env = BattleshipEnv::new(env_config, seed)?;
                PolicyAgent::new(Some(board), SweepPolicy, env)?
                    .play_until_completion()
                    .map(|(score, _)| score)
            }
        }
    })
    .map_err(|e| anyhow::anyhow!(e))
}
