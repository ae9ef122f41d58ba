use crate::*;
use std::cell::Cell;

/// Depth-limited expectimax over Zombie Dice positions.
///
/// Decision nodes alternate between a maximizing [`Player::One`] and a
/// minimizing [`Player::Two`]. Two layers of chance sit under every roll:
/// which colors get drawn from the depleting cup, then which faces the full
/// hand lands on. Both are enumerated exactly, never sampled.
///
/// Depth counts decision rounds. It advances only when a rolled hand leaves
/// the player undecided again, or when a stop hands the dice over. Drawing,
/// busting, and refilling the cup are free. Once the limit is reached the
/// [`heuristic`] stands in for the rest of the game.
///
/// Every hypothetical step works on its own clone of the [`Position`], so
/// sibling branches never see each other and the caller's position is
/// never touched.
#[derive(Debug, Clone)]
pub struct Expectimax {
    depth: usize,
    nodes: Cell<usize>,
}

impl Default for Expectimax {
    fn default() -> Self {
        Self::from(DEPTH_LIMIT)
    }
}

impl From<usize> for Expectimax {
    fn from(depth: usize) -> Self {
        Self {
            depth,
            nodes: Cell::new(0),
        }
    }
}

impl Expectimax {
    /// Depth limit for this engine.
    pub fn depth(&self) -> usize {
        self.depth
    }
    /// Positions evaluated by [`value_at`](Self::value_at) so far.
    pub fn nodes(&self) -> usize {
        self.nodes.get()
    }

    /// Expected payoff of a position, searching from depth zero.
    pub fn value(&self, position: &Position) -> Utility {
        self.value_at(position, 0)
    }

    /// Expected payoff of a position already `depth` decision rounds deep.
    pub fn value_at(&self, position: &Position, depth: usize) -> Utility {
        self.nodes.set(self.nodes.get() + 1);
        if position.is_terminal() || depth >= self.depth {
            return position.payoff();
        }
        match position.decision() {
            Decision::Roll => self.value_roll(position, depth),
            Decision::Stop => self.value_stop(position, depth),
            Decision::Undecided => self.value_choose(position, depth),
            Decision::Unset => {
                log::error!("no pending decision for {} at depth {}", position.turn(), depth);
                0.0
            }
        }
    }

    /// The player to move is about to draw up to a full hand and roll.
    pub fn value_roll(&self, position: &Position, depth: usize) -> Utility {
        if position.hand_is_full() {
            return self.value_roll_hand(position, depth);
        }
        if position.cup_is_empty() {
            if position.brains().is_empty() {
                log::warn!("cup and brain pile both empty with a short hand");
                return position.payoff();
            }
            let mut refilled = position.clone();
            refilled.reuse_brains();
            return self.value_roll(&refilled, depth);
        }
        let mut next = position.clone();
        Color::ALL
            .iter()
            .filter(|c| position.cup().count(**c) > 0)
            .map(|c| {
                let p = next.draw_probability(*c);
                next.draw_color(*c);
                let eu = self.value_roll(&next, depth);
                next.undraw();
                p * eu
            })
            .sum()
    }

    /// The hand is full; weight every joint face outcome by its odds.
    pub fn value_roll_hand(&self, position: &Position, depth: usize) -> Utility {
        Roll::all()
            .map(|roll| (position.roll_probability(&roll), roll))
            .filter(|(p, _)| *p > 0.0)
            .map(|(p, roll)| p * self.value_rolled_hand(&position.rolled(&roll), depth))
            .sum()
    }

    /// The hand shows its faces; collect them and see whether the turn survives.
    pub fn value_rolled_hand(&self, rolled: &Position, depth: usize) -> Utility {
        let mut next = rolled.clone();
        next.collect_hand();
        if next.is_busted() {
            next.set_decision(Decision::Stop);
            self.value_at(&next, depth)
        } else {
            next.set_decision(Decision::Undecided);
            self.value_at(&next, depth + 1)
        }
    }

    /// The player to move ends the turn.
    pub fn value_stop(&self, position: &Position, depth: usize) -> Utility {
        let mut next = position.clone();
        next.end_turn();
        if next.is_terminal() {
            return next.payoff();
        }
        next.advance_turn();
        self.value_at(&next, depth + 1)
    }

    /// The player to move picks the better of rolling and stopping.
    /// With nothing banked, stopping gains nothing, so rolling is forced.
    pub fn value_choose(&self, position: &Position, depth: usize) -> Utility {
        let mut roll = position.clone();
        roll.set_decision(Decision::Roll);
        let eu_roll = self.value_at(&roll, depth);
        if position.brains_collected() == 0 {
            return eu_roll;
        }
        let mut stop = position.clone();
        stop.set_decision(Decision::Stop);
        let eu_stop = self.value_at(&stop, depth);
        position.turn().best(eu_roll, eu_stop)
    }

    /// Pick a move for the player to move in a live position.
    /// Each branch is scored from the move itself, so a stop is judged
    /// after its brains are eaten.
    pub fn choose(&self, position: &Position) -> Decision {
        self.nodes.set(0);
        if position.brains_collected() == 0 {
            return Decision::Roll;
        }
        let mut roll = position.clone();
        roll.set_decision(Decision::Roll);
        let mut stop = position.clone();
        stop.set_decision(Decision::Stop);
        let eu_roll = self.value_roll(&roll, 0);
        let eu_stop = self.value_stop(&stop, 0);
        log::debug!(
            "{} weighs roll {:+.3} against stop {:+.3} ({} nodes)",
            position.turn(),
            eu_roll,
            eu_stop,
            self.nodes()
        );
        if position.turn().prefers(eu_roll, eu_stop) {
            Decision::Roll
        } else {
            Decision::Stop
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Unshaken game, player to move has `banked` brains from green dice.
    fn banked(turn: Player, one: Score, two: Score, banked: usize) -> Position {
        let mut position = Position::from(Cup::new());
        position.set_score(Player::One, one);
        position.set_score(Player::Two, two);
        position.set_turn(turn);
        if banked > 0 {
            assert!(position.draw_hand());
            let mut faces = [Face::Feet; HAND_SIZE];
            faces.iter_mut().take(banked).for_each(|f| *f = Face::Brain);
            position.set_roll(&Roll::from(faces));
            position.collect_hand();
        }
        position.set_decision(Decision::Undecided);
        position
    }

    fn with(position: &Position, decision: Decision) -> Position {
        let mut next = position.clone();
        next.set_decision(decision);
        next
    }

    #[test]
    fn depth_limit_is_heuristic() {
        let engine = Expectimax::default();
        for decision in [Decision::Undecided, Decision::Roll, Decision::Stop] {
            for position in [banked(Player::One, 4, 7, 2), banked(Player::Two, 9, 3, 1)] {
                let position = with(&position, decision);
                assert!(!position.is_terminal());
                assert!(engine.value_at(&position, DEPTH_LIMIT) == heuristic(&position));
            }
        }
    }

    #[test]
    fn terminal_is_payoff() {
        let engine = Expectimax::default();
        let mut position = Position::from(Cup::new());
        position.set_score(Player::One, 13);
        position.set_score(Player::Two, 5);
        position.set_turn(Player::Two);
        position.set_decision(Decision::Stop);
        assert!(engine.value(&position) == WIN_PAYOFF);
        position.set_score(Player::One, 5);
        position.set_score(Player::Two, 13);
        assert!(engine.value(&position) == -WIN_PAYOFF);
    }

    #[test]
    fn roll_weights_sum_to_one() {
        // player one is already past the threshold, so every leaf is worth WIN_PAYOFF
        let engine = Expectimax::from(1);
        let mut position = banked(Player::One, 20, 0, 0);
        position.set_decision(Decision::Roll);
        let full = {
            let mut full = position.clone();
            assert!(full.draw_hand());
            full
        };
        assert!((engine.value_roll_hand(&full, 0) - WIN_PAYOFF).abs() < 1e-9);
        assert!((engine.value_roll(&position, 0) - WIN_PAYOFF).abs() < 1e-9);
    }

    #[test]
    fn forced_roll_skips_stop_branch() {
        let position = banked(Player::One, 3, 6, 0);
        let choosing = Expectimax::from(1);
        let rolling = Expectimax::from(1);
        let chosen = choosing.value_choose(&position, 0);
        let rolled = rolling.value_at(&with(&position, Decision::Roll), 0);
        assert!(chosen == rolled);
        assert!(choosing.nodes() == rolling.nodes());
    }

    #[test]
    fn maximizer_stops_on_winning_bank() {
        let engine = Expectimax::from(1);
        let position = banked(Player::One, 10, 0, 3);
        let eu_roll = engine.value(&with(&position, Decision::Roll));
        let eu_stop = engine.value(&with(&position, Decision::Stop));
        assert!(eu_stop == WIN_PAYOFF);
        assert!(eu_roll < eu_stop);
        assert!(engine.value_choose(&position, 0) == eu_stop);
        assert!(engine.choose(&position) == Decision::Stop);
    }

    #[test]
    fn minimizer_stops_on_winning_bank() {
        let engine = Expectimax::from(1);
        let position = banked(Player::Two, 0, 10, 3);
        let eu_stop = engine.value(&with(&position, Decision::Stop));
        let eu_roll = engine.value(&with(&position, Decision::Roll));
        assert!(eu_stop == -WIN_PAYOFF);
        assert!(eu_roll > eu_stop);
        assert!(engine.value_choose(&position, 0) == -WIN_PAYOFF);
        assert!(engine.choose(&position) == Decision::Stop);
    }

    #[test]
    fn nothing_banked_means_roll() {
        let engine = Expectimax::default();
        let position = banked(Player::Two, 12, 0, 0);
        assert!(engine.choose(&position) == Decision::Roll);
        assert!(engine.nodes() == 0);
    }

    #[test]
    fn second_seat_takes_the_winning_stop() {
        let engine = Expectimax::from(1);
        let position = banked(Player::Two, 13, 11, 3);
        let mut ended = with(&position, Decision::Stop);
        ended.end_turn();
        assert!(ended.score(Player::Two) == 14);
        assert!(ended.payoff() == -WIN_PAYOFF);
        assert!(engine.value_stop(&with(&position, Decision::Stop), 0) == -WIN_PAYOFF);
        assert!(engine.choose(&position) == Decision::Stop);
    }

    #[test]
    fn bust_stops_without_spending_depth() {
        let engine = Expectimax::from(1);
        let mut bust = banked(Player::One, 4, 4, 1);
        assert!(bust.draw_hand());
        bust.set_roll(&Roll::from([Face::Blast; HAND_SIZE]));
        let mut expected = bust.clone();
        expected.collect_hand();
        assert!(expected.is_busted());
        expected.end_turn();
        expected.advance_turn();
        assert!(expected.score(Player::One) == 4);
        assert!(heuristic(&expected) == 0.0);
        assert!(engine.value_rolled_hand(&bust, 0) == heuristic(&expected));
    }

    #[test]
    fn nodes_count_per_decision() {
        let engine = Expectimax::from(1);
        let position = banked(Player::One, 4, 4, 1);
        engine.choose(&position);
        let first = engine.nodes();
        assert!(first > 0);
        engine.choose(&position);
        assert!(engine.nodes() == first);
    }

    #[test]
    fn search_leaves_position_untouched() {
        let engine = Expectimax::from(2);
        let position = banked(Player::One, 2, 4, 1);
        let before = position.clone();
        let value = engine.value(&position);
        assert!(position == before);
        assert!(value >= -WIN_PAYOFF && value <= WIN_PAYOFF);
    }

    #[test]
    fn unset_decision_is_neutral() {
        let engine = Expectimax::default();
        let position = with(&banked(Player::One, 2, 4, 1), Decision::Unset);
        assert!(engine.value(&position) == 0.0);
    }

    #[test]
    fn stop_hands_over_the_dice() {
        let engine = Expectimax::from(1);
        let position = with(&banked(Player::One, 4, 4, 2), Decision::Stop);
        let mut expected = position.clone();
        expected.end_turn();
        expected.advance_turn();
        assert!(engine.value_stop(&position, 0) == heuristic(&expected));
        assert!(heuristic(&expected) > 0.0);
    }
}
