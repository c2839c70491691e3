use super::podium::Mode;
use crate::Chips;
use crate::Position;

/// Settlement failures. None of these leave a mode half-paid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettlementError {
    #[error("cannot split {requested} off a pot holding {remaining}")]
    Split { requested: Chips, remaining: Chips },
    #[error("{mode} pot #{pot} has no eligible seat on the podium")]
    Unclaimed { mode: Mode, pot: usize },
    #[error("paying {prize} to seat {position} overflows its stack of {stack}")]
    Overflow {
        position: Position,
        stack: Chips,
        prize: Chips,
    },
    #[error("chips committed up to {level} overflow a pot")]
    PotOverflow { level: Chips },
    #[error("seat {0} is not at this table")]
    UnknownSeat(Position),
}
