use crate::*;
use std::fmt::Debug;

/// Anything that can choose between rolling and stopping.
///
/// The [`Session`] asks the agent seated for the player to move whenever
/// that player is undecided. Agents only read the position; the session
/// applies the decision.
pub trait Agent: Debug {
    /// Pick [`Decision::Roll`] or [`Decision::Stop`] for the player to move.
    fn decide(&mut self, position: &Position) -> anyhow::Result<Decision>;
}
