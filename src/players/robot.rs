use crate::*;

/// Computer player driven by [`Expectimax`] look-ahead.
///
/// Works from either seat: the engine maximizes for player one
/// and minimizes for player two.
#[derive(Debug, Default)]
pub struct Robot(Expectimax);

impl From<Expectimax> for Robot {
    fn from(engine: Expectimax) -> Self {
        Self(engine)
    }
}

impl Agent for Robot {
    fn decide(&mut self, position: &Position) -> anyhow::Result<Decision> {
        Ok(self.0.choose(position))
    }
}
