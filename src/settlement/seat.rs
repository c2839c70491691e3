use crate::Chips;

/// A seat's participation in the current hand.
///
/// - `Free`: nobody sits here
/// - `Waiting`: seated but not dealt in
/// - `Active`: still betting
/// - `AllIn`: committed everything, still contesting
/// - `Folded`: out of the hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum State {
    Free,
    Waiting,
    Active,
    AllIn,
    Folded,
}

impl State {
    /// True if the seat can still win chips at showdown.
    pub fn is_contesting(&self) -> bool {
        matches!(self, Self::Active | Self::AllIn)
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            State::Free => write!(f, "F"),
            State::Waiting => write!(f, "W"),
            State::Active => write!(f, "P"),
            State::AllIn => write!(f, "S"),
            State::Folded => write!(f, "X"),
        }
    }
}

/// Chips behind and participation of one seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Seat {
    state: State,
    stack: Chips,
}

impl From<(State, Chips)> for Seat {
    fn from((state, stack): (State, Chips)) -> Self {
        Self { state, stack }
    }
}

impl Seat {
    pub fn stack(&self) -> Chips {
        self.stack
    }
    pub fn state(&self) -> State {
        self.state
    }
    /// Adds winnings to the stack. Returns the new stack, or `None` on overflow
    /// in which case the stack is left unchanged.
    pub fn win(&mut self, prize: Chips) -> Option<Chips> {
        self.stack = self.stack.checked_add(prize)?;
        Some(self.stack)
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ${:>6}", self.state, self.stack)
    }
}
