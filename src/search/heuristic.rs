use crate::*;

/// Constant-time estimate of a non-terminal position, from player one's side.
///
/// Player one's progress counts brains already eaten plus brains banked this
/// turn (when it is player one's turn). Reaching [`BRAINS_TO_WIN`] that way
/// scores a full [`WIN_PAYOFF`]. Otherwise the lead over player two's eaten
/// brains is scaled by the win threshold, so a lead of the whole threshold
/// saturates at ±[`WIN_PAYOFF`].
pub fn heuristic(position: &Position) -> Utility {
    let banked = match position.turn() {
        Player::One => position.brains_collected(),
        Player::Two => 0,
    };
    let ours = position.score(Player::One) + banked;
    if ours >= BRAINS_TO_WIN {
        return WIN_PAYOFF;
    }
    let lead = ours as Utility - position.score(Player::Two) as Utility;
    (lead / BRAINS_TO_WIN as Utility * WIN_PAYOFF).clamp(-WIN_PAYOFF, WIN_PAYOFF)
}
