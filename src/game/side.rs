use super::board::Cell;

/// One of the two participants: the person at the keyboard, or the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Human,
    Automated,
}

impl Side {
    /// Get the other side
    pub fn other(self) -> Side {
        match self {
            Side::Human => Side::Automated,
            Side::Automated => Side::Human,
        }
    }

    /// Convert side to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Side::Human => Cell::Human,
            Side::Automated => Cell::Automated,
        }
    }

    /// Get side name for display
    pub fn name(self) -> &'static str {
        match self {
            Side::Human => "You",
            Side::Automated => "Computer",
        }
    }
}
