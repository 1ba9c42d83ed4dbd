/// The mark a player places on the board.
///
/// `X` always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub const ALL: [Self; 2] = [Self::X, Self::O];

    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    /// Position of this mark in per-player arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::O => 1,
        }
    }
}

/// State of a single cell as seen by one player.
///
/// This is the encoding fed to evolved programs: the same board reads differently
/// depending on whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Empty,
    Own,
    Other,
}

impl CellState {
    #[must_use]
    pub fn relative_to(cell: Option<Mark>, viewer: Mark) -> Self {
        match cell {
            None => Self::Empty,
            Some(mark) if mark == viewer => Self::Own,
            Some(_) => Self::Other,
        }
    }

    /// Integer code of the state: 0 empty, 1 own piece, 2 opponent piece.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Own => 1,
            Self::Other => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        for mark in Mark::ALL {
            assert_ne!(mark.opponent(), mark);
            assert_eq!(mark.opponent().opponent(), mark);
        }
    }

    #[test]
    fn test_cell_state_codes() {
        assert_eq!(CellState::relative_to(None, Mark::X).code(), 0);
        assert_eq!(CellState::relative_to(Some(Mark::X), Mark::X).code(), 1);
        assert_eq!(CellState::relative_to(Some(Mark::O), Mark::X).code(), 2);
        assert_eq!(CellState::relative_to(Some(Mark::X), Mark::O).code(), 2);
    }
}
