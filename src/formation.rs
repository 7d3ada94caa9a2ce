/// One of the four valid opening arrangements for the horse/elephant flank
/// squares of the back rank, named by where the elephants stand. `Undecided`
/// is the scratch value of half-board templates.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Formation {
    OuterElephant,
    LeftElephant,
    RightElephant,
    InnerElephant,
    Undecided,
}

impl Formation {
    /// The four playable formations, in no particular order.
    pub const ALL: [Formation; 4] = [
        Formation::OuterElephant,
        Formation::LeftElephant,
        Formation::RightElephant,
        Formation::InnerElephant,
    ];
}
