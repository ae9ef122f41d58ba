use colored::*;

/// The choice pending for the player to move.
///
/// `Unset` marks a position whose turn resolution was aborted; it is never
/// a legal move. `Undecided` waits on a roll-or-stop choice. `Roll` and
/// `Stop` are the two moves.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Decision {
    Unset,
    #[default]
    Undecided,
    Roll,
    Stop,
}

impl Decision {
    pub fn is_move(&self) -> bool {
        matches!(self, Self::Roll | Self::Stop)
    }
}

/// First letter decides, case-insensitive: "r..." rolls and "s..." stops.
impl TryFrom<&str> for Decision {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('r') => Ok(Self::Roll),
            Some('s') => Ok(Self::Stop),
            _ => Err(anyhow::anyhow!("expected roll or stop, got {:?}", s)),
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Unset => write!(f, "{}", "UNSET".white()),
            Self::Undecided => write!(f, "{}", "UNDECIDED".white()),
            Self::Roll => write!(f, "{}", "ROLL".green()),
            Self::Stop => write!(f, "{}", "STOP".red()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_first_letter() {
        assert!(Decision::try_from("r").unwrap() == Decision::Roll);
        assert!(Decision::try_from("Roll").unwrap() == Decision::Roll);
        assert!(Decision::try_from("  stop").unwrap() == Decision::Stop);
        assert!(Decision::try_from("S").unwrap() == Decision::Stop);
    }

    #[test]
    fn reject_malformed() {
        assert!(Decision::try_from("").is_err());
        assert!(Decision::try_from("   ").is_err());
        assert!(Decision::try_from("quit").is_err());
        assert!(Decision::try_from("1").is_err());
    }

    #[test]
    fn only_roll_and_stop_are_moves() {
        assert!(Decision::Roll.is_move());
        assert!(Decision::Stop.is_move());
        assert!(!Decision::Undecided.is_move());
        assert!(!Decision::Unset.is_move());
    }
}
