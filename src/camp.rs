/// One of the two opposing sides. `Undecided` is a scratch value carried by
/// half-board templates before `mark_camp` runs; it is never a playable camp.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Camp {
    Cho,
    Han,
    Undecided,
}
