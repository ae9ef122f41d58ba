//! Depth-limited expectimax search for Zombie Dice.
//!
//! Two players take turns drawing three dice from a shared cup and rolling them.
//! Brains are banked, blasts accumulate toward a bust, and feet stay in hand to be
//! re-rolled. A player may stop at any decision point to eat the banked brains.
//!
//! ## Modules
//!
//! - [`dice`] — [`Color`], [`Face`], [`Die`], [`Roll`] and the [`Cup`] they are drawn from
//! - [`game`] — [`Position`], the full game state, with [`Player`] and [`Decision`]
//! - [`search`] — [`Expectimax`] look-ahead and the constant-time [`heuristic`]
//! - [`players`] — [`Agent`] implementations that pick roll or stop
//! - [`play`] — [`Session`], the live game loop
pub mod dice;
pub mod game;
pub mod play;
pub mod players;
pub mod search;

pub use dice::*;
pub use game::*;
pub use play::*;
pub use players::*;
pub use search::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Expected values, payoffs, and heuristic estimates.
pub type Utility = f64;
/// Face odds, draw odds, and joint roll weights.
pub type Probability = f64;
/// Brains eaten or banked.
pub type Score = u32;

// ============================================================================
// CUP CONTENTS
// ============================================================================
/// Green dice in a full cup.
pub const DICE_GREEN: usize = 6;
/// Yellow dice in a full cup.
pub const DICE_YELLOW: usize = 4;
/// Red dice in a full cup.
pub const DICE_RED: usize = 3;
/// Total dice in play. Conserved across cup, hand, and collected piles.
pub const DICE: usize = DICE_GREEN + DICE_YELLOW + DICE_RED;

// ============================================================================
// FACE QUOTAS
// Faces per die, listed as (brains, feet, blasts) out of SIDES.
// ============================================================================
/// Sides on every die.
pub const SIDES: u8 = 6;
/// Green dice favor brains.
pub const FACES_GREEN: (u8, u8, u8) = (3, 2, 1);
/// Yellow dice are even.
pub const FACES_YELLOW: (u8, u8, u8) = (2, 2, 2);
/// Red dice favor blasts.
pub const FACES_RED: (u8, u8, u8) = (1, 2, 3);

// ============================================================================
// TURN RULES
// ============================================================================
/// Dice rolled at once. Feet are kept and topped up to this size.
pub const HAND_SIZE: usize = 3;
/// Blasts that end a turn and forfeit banked brains.
pub const BLASTS_TO_BUST: Score = 3;
/// Brains eaten to trigger the end of the game.
pub const BRAINS_TO_WIN: Score = 13;

// ============================================================================
// SEARCH
// ============================================================================
/// Payoff magnitude of a decided game. Heuristic values stay within ±WIN_PAYOFF.
pub const WIN_PAYOFF: Utility = 100.0;
/// Decision plies searched before falling back to the heuristic.
pub const DEPTH_LIMIT: usize = 3;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
