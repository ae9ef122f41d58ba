use crate::*;

/// Which side is acting. `One` moves first and maximizes the payoff;
/// `Two` moves second and minimizes it.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    #[default]
    One = 0,
    Two = 1,
}

impl Player {
    pub const ALL: [Self; 2] = [Self::One, Self::Two];

    pub fn other(&self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
    /// Sign of this side's stake in the payoff.
    pub fn sign(&self) -> Utility {
        match self {
            Self::One => 1.0,
            Self::Two => -1.0,
        }
    }
    /// Pick the better of two values from this side's point of view.
    pub fn best(&self, a: Utility, b: Utility) -> Utility {
        match self {
            Self::One => a.max(b),
            Self::Two => a.min(b),
        }
    }
    /// Whether this side would rather have `a` than `b`. Ties go to `a`.
    pub fn prefers(&self, a: Utility, b: Utility) -> bool {
        match self {
            Self::One => a >= b,
            Self::Two => a <= b,
        }
    }
}

impl From<Player> for usize {
    fn from(p: Player) -> usize {
        p as usize
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::One => write!(f, "P1"),
            Self::Two => write!(f, "P2"),
        }
    }
}
