/// The symbol showing on a rolled die.
///
/// Brains are banked toward the score, blasts count toward a bust,
/// and feet stay in hand to be rolled again.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Face {
    Brain = 0,
    Blast = 1,
    #[default]
    Feet = 2,
}

impl Face {
    /// Enumeration order for joint roll outcomes.
    pub const ALL: [Self; 3] = [Self::Brain, Self::Blast, Self::Feet];
}

impl From<u8> for Face {
    fn from(n: u8) -> Face {
        match n {
            0 => Face::Brain,
            1 => Face::Blast,
            2 => Face::Feet,
            _ => panic!("invalid face"),
        }
    }
}
impl From<Face> for u8 {
    fn from(f: Face) -> u8 {
        f as u8
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Face::Brain => "BRAIN",
                Face::Blast => "BLAST",
                Face::Feet => "FEET",
            }
        )
    }
}
