use crate::*;
use colored::ColoredString;
use colored::Colorize;

/// The color of a die, which fixes its face distribution.
///
/// Green dice are the safest to roll, red the most dangerous. The cup holds
/// [`DICE_GREEN`], [`DICE_YELLOW`] and [`DICE_RED`] of each.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    #[default]
    Green = 0,
    Yellow = 1,
    Red = 2,
}

impl Color {
    pub const ALL: [Self; 3] = [Self::Green, Self::Yellow, Self::Red];

    /// How many dice of this color a full cup holds.
    pub const fn quota(&self) -> usize {
        match self {
            Self::Green => DICE_GREEN,
            Self::Yellow => DICE_YELLOW,
            Self::Red => DICE_RED,
        }
    }
    /// (brains, feet, blasts) faces out of [`SIDES`].
    pub const fn faces(&self) -> (u8, u8, u8) {
        match self {
            Self::Green => FACES_GREEN,
            Self::Yellow => FACES_YELLOW,
            Self::Red => FACES_RED,
        }
    }
    pub(crate) fn paint(&self, s: &str) -> ColoredString {
        match self {
            Self::Green => s.green(),
            Self::Yellow => s.yellow(),
            Self::Red => s.red(),
        }
    }
}

impl From<Color> for usize {
    fn from(c: Color) -> usize {
        c as usize
    }
}

impl TryFrom<&str> for Color {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "g" | "green" => Ok(Self::Green),
            "y" | "yellow" => Ok(Self::Yellow),
            "r" | "red" => Ok(Self::Red),
            _ => Err(anyhow::anyhow!("unknown die color {:?}", s)),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Green => "GREEN",
                Self::Yellow => "YELLOW",
                Self::Red => "RED",
            }
        )
    }
}
