use crate::*;
use rand::seq::SliceRandom;

/// The shared supply of dice not currently in play.
///
/// Tracks the dice themselves (in draw order) alongside per-color counts,
/// so draw odds are a constant-time lookup. Counts always agree with the
/// contents: `total() == dice.len()` and the per-color counts sum to it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cup {
    dice: Vec<Die>,
    counts: [usize; 3],
}

impl Default for Cup {
    fn default() -> Self {
        Self::new()
    }
}

impl Cup {
    /// A full, unshaken cup: greens, then yellows, then reds.
    pub fn new() -> Self {
        let dice = Color::ALL
            .iter()
            .flat_map(|c| std::iter::repeat_n(Die::from(*c), c.quota()))
            .collect::<Vec<Die>>();
        Self {
            dice,
            counts: Color::ALL.map(|c| c.quota()),
        }
    }
    /// An empty cup.
    pub fn empty() -> Self {
        Self {
            dice: Vec::with_capacity(DICE),
            counts: [0; 3],
        }
    }
    pub fn total(&self) -> usize {
        self.dice.len()
    }
    pub fn count(&self, color: Color) -> usize {
        self.counts[usize::from(color)]
    }
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }
    /// Randomize draw order in place.
    pub fn shake(&mut self) {
        self.dice.shuffle(&mut rand::rng());
    }
    /// Remove the die at the front of the cup.
    pub fn draw(&mut self) -> Option<Die> {
        if self.dice.is_empty() {
            return None;
        }
        let die = self.dice.remove(0);
        self.counts[usize::from(die.color())] -= 1;
        Some(die)
    }
    /// Remove the first die of the given color, scanning in draw order.
    pub fn draw_color(&mut self, color: Color) -> Option<Die> {
        let i = self.dice.iter().position(|d| d.color() == color)?;
        let die = self.dice.remove(i);
        self.counts[usize::from(color)] -= 1;
        Some(die)
    }
    /// Put a die back at the end of the cup.
    pub fn replace(&mut self, die: Die) {
        self.counts[usize::from(die.color())] += 1;
        self.dice.push(die);
    }
    /// Chance that a random draw comes up `color`.
    ///
    /// # Panics
    ///
    /// Panics on an empty cup; check [`Cup::is_empty`] first.
    pub fn probability(&self, color: Color) -> Probability {
        assert!(!self.is_empty(), "draw odds from an empty cup");
        self.count(color) as Probability / self.total() as Probability
    }
}

impl Extend<Die> for Cup {
    fn extend<I: IntoIterator<Item = Die>>(&mut self, dice: I) {
        for die in dice {
            self.replace(die);
        }
    }
}

impl std::fmt::Display for Cup {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}G {}Y {}R",
            self.count(Color::Green),
            self.count(Color::Yellow),
            self.count(Color::Red)
        )
    }
}
