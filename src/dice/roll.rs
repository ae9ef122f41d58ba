use crate::*;

/// One joint outcome for a full hand: the face each die lands on, by hand slot.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Roll([Face; HAND_SIZE]);

impl Roll {
    /// Number of distinct joint outcomes, `3^HAND_SIZE`.
    pub const COUNT: usize = Face::ALL.len().pow(HAND_SIZE as u32);

    /// Every joint outcome, slot 0 varying slowest.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT).map(Self::from)
    }
    pub fn faces(&self) -> &[Face; HAND_SIZE] {
        &self.0
    }
}

/// mixed-radix decode, base = number of faces
impl From<usize> for Roll {
    fn from(mut n: usize) -> Self {
        let base = Face::ALL.len();
        let mut faces = [Face::default(); HAND_SIZE];
        for slot in faces.iter_mut().rev() {
            *slot = Face::from((n % base) as u8);
            n /= base;
        }
        Self(faces)
    }
}

impl From<[Face; HAND_SIZE]> for Roll {
    fn from(faces: [Face; HAND_SIZE]) -> Self {
        Self(faces)
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let faces = self.0.iter().map(|f| f.to_string()).collect::<Vec<_>>();
        write!(f, "({})", faces.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn enumerates_every_outcome_once() {
        let rolls = Roll::all().collect::<HashSet<_>>();
        assert!(rolls.len() == 27);
        assert!(Roll::COUNT == 27);
    }

    #[test]
    fn lexicographic_order() {
        let mut rolls = Roll::all();
        assert!(rolls.next() == Some(Roll::from([Face::Brain; HAND_SIZE])));
        assert!(rolls.last() == Some(Roll::from([Face::Feet; HAND_SIZE])));
    }
}
