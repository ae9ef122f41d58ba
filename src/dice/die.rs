use crate::*;

/// A single die: its color, the face showing, and cached face odds.
///
/// Odds are derived once from the color's integer face quotas. The face is
/// the only mutable part; it starts (and is reset to) feet whenever the die
/// enters a hand, and is overwritten by [`Die::roll`] or [`Die::set_face`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Die {
    color: Color,
    face: Face,
    brain: Probability,
    feet: Probability,
    blast: Probability,
}

impl From<Color> for Die {
    fn from(color: Color) -> Self {
        let (brains, feet, blasts) = color.faces();
        let sides = SIDES as Probability;
        Self {
            color,
            face: Face::Feet,
            brain: brains as Probability / sides,
            feet: feet as Probability / sides,
            blast: blasts as Probability / sides,
        }
    }
}

impl Die {
    pub fn color(&self) -> Color {
        self.color
    }
    pub fn face(&self) -> Face {
        self.face
    }
    /// Force the showing face. Mutates in place.
    pub fn set_face(&mut self, face: Face) -> Face {
        self.face = face;
        self.face
    }
    /// Chance of this die landing on `face`.
    pub fn probability(&self, face: Face) -> Probability {
        match face {
            Face::Brain => self.brain,
            Face::Feet => self.feet,
            Face::Blast => self.blast,
        }
    }
    /// Map a uniform draw in [0, 1) onto a face by cumulative odds.
    /// Brains occupy the bottom of the interval, then feet, then blasts.
    pub fn sample(&mut self, x: Probability) -> Face {
        self.face = if x < self.brain {
            Face::Brain
        } else if x < self.brain + self.feet {
            Face::Feet
        } else {
            Face::Blast
        };
        self.face
    }
    /// Roll the die with the process-wide random source. Mutates in place.
    pub fn roll(&mut self) -> Face {
        self.sample(rand::random::<Probability>())
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let label = format!("[{} {}]", self.color, self.face);
        write!(f, "{}", self.color.paint(&label))
    }
}
