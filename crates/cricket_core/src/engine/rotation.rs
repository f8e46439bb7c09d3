/// Strike rotation for one applied delivery.
///
/// Two triggers exist and they cancel rather than stack:
///
/// * run parity: an odd value in the `runs_off_bat` channel leaves the
///   batters crossed. Byes and leg-byes ride that channel, so an odd bye
///   rotates even though nobody scored off the bat. Wide and no-ball
///   penalty runs travel in `extra_runs` and never rotate, whatever
///   their magnitude.
/// * over end: the batters swap ends for the new over.
///
/// An odd single off the last ball of an over therefore keeps the same
/// batter on strike (both triggers fire, XOR yields no swap). A delivery
/// that takes a wicket never rotates; the replacement rule decides who
/// faces next instead.
pub fn should_rotate_strike(runs_off_bat: u8, over_completed: bool, is_wicket: bool) -> bool {
    if is_wicket {
        return false;
    }
    let odd_runs = runs_off_bat % 2 == 1;
    odd_runs ^ over_completed
}
