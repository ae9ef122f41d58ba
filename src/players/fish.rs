use crate::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Random player for testing and simulation.
///
/// Always rolls with nothing banked, otherwise flips a coin.
/// Seed it for reproducible games.
#[derive(Debug)]
pub struct Fish(SmallRng);

impl Default for Fish {
    fn default() -> Self {
        Self(SmallRng::from_os_rng())
    }
}

impl From<u64> for Fish {
    fn from(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Agent for Fish {
    fn decide(&mut self, position: &Position) -> anyhow::Result<Decision> {
        if position.brains_collected() == 0 || self.0.random_bool(0.5) {
            Ok(Decision::Roll)
        } else {
            Ok(Decision::Stop)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_legal_moves() {
        let ref mut fish = Fish::from(7);
        let position = Position::new();
        for _ in 0..32 {
            assert!(fish.decide(&position).unwrap().is_move());
        }
    }

    #[test]
    fn same_seed_same_choices() {
        let mut position = Position::from(Cup::new());
        assert!(position.draw_hand());
        position.set_roll(&Roll::from([Face::Brain; HAND_SIZE]));
        position.collect_hand();
        let ref mut a = Fish::from(42);
        let ref mut b = Fish::from(42);
        for _ in 0..32 {
            assert!(a.decide(&position).unwrap() == b.decide(&position).unwrap());
        }
    }
}
