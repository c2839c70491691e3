use super::podium::Mode;
use crate::Chips;
use crate::Position;

/// Settlement notifications, in the order observers should replay them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// A mode is about to pay out.
    ShowdownOccurring { mode: Mode },
    /// A mode has no podium this hand and pays nothing.
    ShowdownSkipped { mode: Mode },
    /// One winner's share of one pot, with the stack it leaves them.
    PlayerWonChips {
        position: Position,
        mode: Mode,
        pot: usize,
        prize: Chips,
        stack: Chips,
    },
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Event::ShowdownOccurring { mode } => write!(f, "{} showdown", mode),
            Event::ShowdownSkipped { mode } => write!(f, "{} showdown skipped", mode),
            Event::PlayerWonChips {
                position,
                mode,
                pot,
                prize,
                stack,
            } => write!(
                f,
                "P{} wins ${} from {} pot #{} (stack ${})",
                position, prize, mode, pot, stack
            ),
        }
    }
}

/// Receiver of settlement notifications, usually the table's broadcaster.
pub trait Sink {
    fn notify(&self, event: Event);
}

impl<F> Sink for F
where
    F: Fn(Event),
{
    fn notify(&self, event: Event) {
        self(event)
    }
}

impl Sink for tokio::sync::mpsc::UnboundedSender<Event> {
    fn notify(&self, event: Event) {
        log::trace!("[showdown] notify: {}", event);
        if let Err(e) = self.send(event) {
            log::warn!("[showdown] notify failed: {:?}", e);
        }
    }
}
