/// Final score of a won run: ten points per second left plus twenty per
/// unused move, floored at zero.
pub fn final_score(time_left: u32, min_moves: u32, moves: u32) -> u32 {
    let raw = i64::from(time_left) * 10 + (i64::from(min_moves) - i64::from(moves)) * 20;
    u32::try_from(raw.max(0)).unwrap_or(u32::MAX)
}
