//! Zombie Dice Binary
//!
//! Plays one game against the expectimax robot, which always moves first.
//!
//! Options: --opponent {human,robot,fish}, --depth, --seed, --json

use clap::Parser;
use clap::ValueEnum;
use zombiedice::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Opponent {
    Human,
    Robot,
    Fish,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Who plays second against the robot.
    #[arg(long, value_enum, default_value = "human")]
    opponent: Opponent,
    /// Decision rounds searched before the heuristic takes over.
    #[arg(long, default_value_t = DEPTH_LIMIT)]
    depth: usize,
    /// Seed for the fish opponent.
    #[arg(long)]
    seed: Option<u64>,
    /// Print the final position as JSON.
    #[arg(long)]
    json: bool,
}

impl Opponent {
    fn agent(&self, args: &Args) -> Box<dyn Agent> {
        match self {
            Self::Human => Box::new(Human),
            Self::Robot => Box::new(Robot::from(Expectimax::from(args.depth))),
            Self::Fish => match args.seed {
                Some(seed) => Box::new(Fish::from(seed)),
                None => Box::new(Fish::default()),
            },
        }
    }
}

fn main() -> anyhow::Result<()> {
    log()?;
    let args = Args::parse();
    log::info!("robot searching {} plies against {:?}", args.depth, args.opponent);
    let robot = Box::new(Robot::from(Expectimax::from(args.depth)));
    let ref mut session = Session::new(robot, args.opponent.agent(&args)).rendered();
    let winner = session.play()?;
    match winner {
        Player::One => println!("\nCOMPUTER WINS!\n"),
        Player::Two => println!("\n{:?} WINS!\n", args.opponent),
    }
    if args.json {
        println!("{}", serde_json::to_string_pretty(session.position())?);
    }
    Ok(())
}
