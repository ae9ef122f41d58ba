use crate::*;
use colored::Colorize;

/// The complete state of a Zombie Dice game.
///
/// `Position` is designed both for tracking live play and for exploring
/// hypothetical futures. Methods taking `&mut self` mutate in place and are
/// meant for the live game; search clones the position (a deep copy, since
/// every die is owned) before each hypothetical step, or uses the
/// copy-returning [`rolled`](Self::rolled).
///
/// # Fields
///
/// - `scores` — brains eaten so far, by [`Player`]
/// - `turn` — the side to move
/// - `decision` — what the side to move has chosen (see [`Decision`])
/// - `brains_collected` / `blasts_collected` — running counts for this turn.
///   The brain count survives [`reuse_brains`](Self::reuse_brains), so it can
///   exceed the number of brain dice still held.
/// - `brains` / `blasts` — collected dice set aside this turn
/// - `hand` — dice to be rolled, at most [`HAND_SIZE`]
/// - `cup` — everything else
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    scores: [Score; 2],
    turn: Player,
    decision: Decision,
    brains_collected: Score,
    blasts_collected: Score,
    brains: Vec<Die>,
    blasts: Vec<Die>,
    hand: Vec<Die>,
    cup: Cup,
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

/// Start of game with the given cup, unshaken.
impl From<Cup> for Position {
    fn from(cup: Cup) -> Self {
        Self {
            scores: [0; 2],
            turn: Player::One,
            decision: Decision::Undecided,
            brains_collected: 0,
            blasts_collected: 0,
            brains: Vec::with_capacity(DICE),
            blasts: Vec::with_capacity(DICE),
            hand: Vec::with_capacity(HAND_SIZE),
            cup,
        }
    }
}

/// Accessors.
impl Position {
    /// Start of game: player one to move, full cup already shaken.
    pub fn new() -> Self {
        let mut cup = Cup::new();
        cup.shake();
        Self::from(cup)
    }
    pub fn score(&self, player: Player) -> Score {
        self.scores[usize::from(player)]
    }
    pub fn turn(&self) -> Player {
        self.turn
    }
    pub fn decision(&self) -> Decision {
        self.decision
    }
    pub fn brains_collected(&self) -> Score {
        self.brains_collected
    }
    pub fn blasts_collected(&self) -> Score {
        self.blasts_collected
    }
    pub fn brains(&self) -> &[Die] {
        &self.brains
    }
    pub fn blasts(&self) -> &[Die] {
        &self.blasts
    }
    pub fn hand(&self) -> &[Die] {
        &self.hand
    }
    pub fn cup(&self) -> &Cup {
        &self.cup
    }
    pub fn hand_is_full(&self) -> bool {
        self.hand.len() >= HAND_SIZE
    }
    pub fn cup_is_empty(&self) -> bool {
        self.cup.is_empty()
    }
    /// Dice across cup, hand, and both collected piles.
    pub fn dice_in_play(&self) -> usize {
        self.cup.total() + self.hand.len() + self.brains.len() + self.blasts.len()
    }
}

/// Direct setters for driving the state machine from outside.
impl Position {
    pub fn set_decision(&mut self, decision: Decision) {
        self.decision = decision;
    }
    pub fn set_turn(&mut self, turn: Player) {
        self.turn = turn;
    }
    pub fn set_score(&mut self, player: Player, score: Score) {
        self.scores[usize::from(player)] = score;
    }
}

/// Drawing dice.
impl Position {
    /// Move the front die of the cup into the hand, reset to feet.
    /// `None` if the hand is full or the cup is empty.
    pub fn draw(&mut self) -> Option<Die> {
        if self.hand_is_full() {
            return None;
        }
        let die = self.cup.draw()?;
        Some(self.take(die))
    }
    /// Move a die of the given color into the hand, reset to feet.
    /// `None` if the hand is full or no such die is left in the cup.
    pub fn draw_color(&mut self, color: Color) -> Option<Die> {
        if self.hand_is_full() {
            return None;
        }
        let die = self.cup.draw_color(color)?;
        Some(self.take(die))
    }
    /// Return the most recently drawn hand die to the cup.
    pub fn undraw(&mut self) -> Option<Die> {
        let die = self.hand.pop()?;
        self.cup.replace(die);
        Some(die)
    }
    /// Chance that the next die drawn is `color`. The cup must not be empty.
    pub fn draw_probability(&self, color: Color) -> Probability {
        self.cup.probability(color)
    }
    /// Put collected brain dice back into the cup so there is something to draw.
    /// The running brain count is not reset.
    pub fn reuse_brains(&mut self) {
        log::debug!("reusing {} brain dice", self.brains.len());
        self.cup.extend(self.brains.drain(..));
    }
    /// Draw until the hand is full, reusing brain dice whenever the cup runs dry.
    /// Returns `false` if the hand still cannot be filled.
    pub fn draw_hand(&mut self) -> bool {
        for _ in 0..=DICE {
            if self.hand_is_full() {
                return true;
            }
            if self.draw().is_none() {
                if self.brains.is_empty() {
                    return false;
                }
                self.reuse_brains();
            }
        }
        self.hand_is_full()
    }
    fn take(&mut self, mut die: Die) -> Die {
        die.set_face(Face::Feet);
        self.hand.push(die);
        die
    }
}

/// Rolling dice.
impl Position {
    /// Joint chance of the hand landing on `roll`, slot by slot.
    /// Zero unless the hand is full.
    pub fn roll_probability(&self, roll: &Roll) -> Probability {
        if !self.hand_is_full() {
            return 0.0;
        }
        self.hand
            .iter()
            .zip(roll.faces())
            .map(|(die, face)| die.probability(*face))
            .product()
    }
    /// Force the hand onto `roll`. Mutates in place.
    pub fn set_roll(&mut self, roll: &Roll) {
        for (die, face) in self.hand.iter_mut().zip(roll.faces()) {
            die.set_face(*face);
        }
    }
    /// A copy of this position with the hand forced onto `roll`.
    pub fn rolled(&self, roll: &Roll) -> Self {
        let mut next = self.clone();
        next.set_roll(roll);
        next
    }
    /// Roll every die in hand at random and await the next choice. Mutates in place.
    pub fn roll_hand(&mut self) {
        for die in self.hand.iter_mut() {
            die.roll();
        }
        self.decision = Decision::Undecided;
    }
}

/// Turn bookkeeping.
impl Position {
    /// Set brains and blasts aside, leaving only feet in hand.
    pub fn collect_hand(&mut self) {
        for die in std::mem::take(&mut self.hand) {
            match die.face() {
                Face::Brain => {
                    self.brains_collected += 1;
                    self.brains.push(die);
                }
                Face::Blast => {
                    self.blasts_collected += 1;
                    self.blasts.push(die);
                }
                Face::Feet => self.hand.push(die),
            }
        }
    }
    /// Too many blasts this turn; banked brains are lost.
    pub fn is_busted(&self) -> bool {
        self.blasts_collected >= BLASTS_TO_BUST
    }
    /// Eat banked brains unless busted, return every die to the cup,
    /// and shake it. Leaves the decision at `Stop`.
    pub fn end_turn(&mut self) {
        if !self.is_busted() {
            self.scores[usize::from(self.turn)] += self.brains_collected;
        }
        self.brains_collected = 0;
        self.blasts_collected = 0;
        self.cup.extend(self.brains.drain(..));
        self.cup.extend(self.blasts.drain(..));
        self.cup.extend(self.hand.drain(..));
        self.cup.shake();
        self.decision = Decision::Stop;
    }
    /// Hand the dice to the other player. Assumes the turn has ended.
    pub fn advance_turn(&mut self) {
        self.turn = self.turn.other();
        self.decision = Decision::Undecided;
    }
}

/// Game outcome.
impl Position {
    /// The game ends only once player two has stopped, the scores differ,
    /// and someone has reached [`BRAINS_TO_WIN`]. Player one reaching the
    /// threshold still leaves player two a final turn; a tie plays on.
    pub fn is_terminal(&self) -> bool {
        let one = self.score(Player::One);
        let two = self.score(Player::Two);
        self.turn == Player::Two
            && self.decision == Decision::Stop
            && one != two
            && (one >= BRAINS_TO_WIN || two >= BRAINS_TO_WIN)
    }
    pub fn winner(&self) -> Option<Player> {
        match self.is_terminal() {
            false => None,
            true if self.score(Player::One) > self.score(Player::Two) => Some(Player::One),
            true => Some(Player::Two),
        }
    }
    /// Exact payoff for terminal positions, heuristic estimate otherwise.
    pub fn payoff(&self) -> Utility {
        match self.winner() {
            Some(player) => player.sign() * WIN_PAYOFF,
            None => heuristic(self),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{}", "GAME STATE:".bold())?;
        for player in Player::ALL {
            writeln!(f, "  {} BRAINS EATEN = {:>2}", player, self.score(player))?;
        }
        writeln!(f)?;
        writeln!(f, "  CURRENT PLAYER = {}", self.turn)?;
        writeln!(f)?;
        write!(f, "  BLASTS COLLECTED =")?;
        if self.blasts.is_empty() {
            write!(f, " NONE.")?;
        }
        for die in self.blasts.iter() {
            write!(f, "\n    {}", die)?;
        }
        writeln!(f, "\n")?;
        write!(f, "  BRAINS COLLECTED =")?;
        if self.brains_collected == 0 {
            write!(f, " NONE.")?;
        } else {
            let reused = (self.brains_collected as usize).saturating_sub(self.brains.len());
            if reused > 0 {
                write!(f, "\n    {} reused brains", reused)?;
            }
            for die in self.brains.iter() {
                write!(f, "\n    {}", die)?;
            }
        }
        writeln!(f, "\n")?;
        write!(f, "  DICE IN HAND =")?;
        if self.hand.is_empty() {
            write!(f, " NONE.")?;
        }
        for die in self.hand.iter() {
            write!(f, "\n    {}", die)?;
        }
        writeln!(f)
    }
}
