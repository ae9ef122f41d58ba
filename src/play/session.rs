use crate::*;
use anyhow::Context;

/// A live game between two agents.
///
/// The session owns the one real [`Position`] and is the only thing that
/// mutates it: agents propose decisions, [`take`](Self::take) resolves them.
/// Player one is seated first and maximizes; player two minimizes.
#[derive(Debug)]
pub struct Session {
    position: Position,
    agents: [Box<dyn Agent>; 2],
    render: bool,
}

impl Session {
    /// Fresh game with a shaken cup.
    pub fn new(one: Box<dyn Agent>, two: Box<dyn Agent>) -> Self {
        Self::resume(Position::new(), one, two)
    }
    /// Continue from an existing position.
    pub fn resume(position: Position, one: Box<dyn Agent>, two: Box<dyn Agent>) -> Self {
        Self {
            position,
            agents: [one, two],
            render: false,
        }
    }
    /// Print the position to stdout after every action.
    pub fn rendered(mut self) -> Self {
        self.render = true;
        self
    }
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Play until the game is decided and return the winner.
    pub fn play(&mut self) -> anyhow::Result<Player> {
        log::info!("ZOMBIE DICE!");
        self.show();
        while !self.position.is_terminal() {
            self.step()?;
        }
        let winner = self
            .position
            .winner()
            .context("terminal position without a winner")?;
        log::info!(
            "{} WINS {} to {}",
            winner,
            self.position.score(winner),
            self.position.score(winner.other())
        );
        Ok(winner)
    }

    /// Ask the player to move for a decision and resolve it.
    pub fn step(&mut self) -> anyhow::Result<()> {
        let turn = self.position.turn();
        let decision = self.agents[usize::from(turn)]
            .decide(&self.position)
            .with_context(|| format!("{} failed to decide", turn))?;
        log::info!("{} {}", turn, decision);
        self.take(decision)
            .with_context(|| format!("{} could not resolve {:?}", turn, decision))?;
        self.show();
        Ok(())
    }

    /// Resolve a decision for the player to move. Mutates the live position.
    ///
    /// Rolling draws a full hand, rolls it, and collects brains and blasts;
    /// a bust (or a hand that cannot be filled) ends the turn. Stopping ends
    /// the turn and passes the dice unless the game is over. Anything else
    /// clears the pending decision and fails.
    pub fn take(&mut self, decision: Decision) -> anyhow::Result<()> {
        self.position.set_decision(decision);
        match decision {
            Decision::Roll => {
                if !self.position.draw_hand() {
                    log::warn!("cannot draw a complete hand from the cup");
                    return self.take(Decision::Stop);
                }
                self.position.roll_hand();
                self.position.collect_hand();
                if self.position.is_busted() {
                    self.show();
                    log::info!("{} SHOTGUNNED!", self.position.turn());
                    return self.take(Decision::Stop);
                }
                Ok(())
            }
            Decision::Stop => {
                self.position.end_turn();
                if !self.position.is_terminal() {
                    self.position.advance_turn();
                }
                Ok(())
            }
            Decision::Undecided | Decision::Unset => {
                self.position.set_decision(Decision::Unset);
                Err(anyhow::anyhow!("attempting invalid action {:?}", decision))
            }
        }
    }

    fn show(&self) {
        if self.render {
            println!("\n{}", self.position);
        }
    }
}
