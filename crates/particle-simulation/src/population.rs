//! Commands that grow, shrink or reset the particle population

/// Population changes requested by the input handler.
///
/// These are the only way the population changes; ticking never spawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopulationCommand {
    AddOne,
    AddFive,
    ClearAll,
    ResetToOne,
}

impl PopulationCommand {
    /// Key bindings: `o` adds one, `p` adds five, `r` removes all, `n` resets to one
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            'o' => Some(Self::AddOne),
            'p' => Some(Self::AddFive),
            'r' => Some(Self::ClearAll),
            'n' => Some(Self::ResetToOne),
            _ => None,
        }
    }
}
