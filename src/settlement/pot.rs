use super::error::SettlementError;
use crate::Chips;
use crate::Position;
use std::collections::BTreeSet;

/// Dead money plus the seats still eligible to win it.
///
/// Seats are kept ordered so that every split of the pot hands odd chips
/// to the lowest positions, which reveal their hands first.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Pot {
    amount: Chips,
    seats: BTreeSet<Position>,
}

impl Pot {
    pub fn new(amount: Chips, seats: impl IntoIterator<Item = Position>) -> Self {
        Self {
            amount,
            seats: seats.into_iter().collect(),
        }
    }
    pub fn amount(&self) -> Chips {
        self.amount
    }
    /// Eligible positions, ascending.
    pub fn seats(&self) -> impl Iterator<Item = Position> + '_ {
        self.seats.iter().copied()
    }
    pub fn is_eligible(&self, position: Position) -> bool {
        self.seats.contains(&position)
    }
    /// Drops a seat that folded or left the table. Its chips stay in the pot.
    pub fn seat_has_left(&mut self, position: Position) -> bool {
        self.seats.remove(&position)
    }
    /// Carves sub-pots of the given sizes off this pot, plus one trailing pot
    /// with whatever is left. Every sub-pot keeps the same eligible seats.
    ///
    /// Each amount must be strictly less than the balance still unsplit.
    pub fn split(&self, amounts: &[Chips]) -> Result<Vec<Pot>, SettlementError> {
        let mut remaining = self.amount;
        let mut pots = Vec::with_capacity(amounts.len() + 1);
        for &requested in amounts {
            if requested >= remaining {
                return Err(SettlementError::Split {
                    requested,
                    remaining,
                });
            }
            remaining -= requested;
            pots.push(Self::new(requested, self.seats()));
        }
        pots.push(Self::new(remaining, self.seats()));
        Ok(pots)
    }
    /// Splits the pot among the candidates that are eligible for it.
    ///
    /// `None` when no candidate is eligible, which tells the caller to try
    /// the next tie group down the podium.
    pub fn award(&self, candidates: &[Position]) -> Option<Award> {
        let winners = candidates
            .iter()
            .copied()
            .filter(|p| self.is_eligible(*p))
            .collect::<BTreeSet<Position>>()
            .into_iter()
            .collect::<Vec<Position>>();
        let n = winners.len() as Chips;
        match n {
            0 => None,
            _ => Some(Award {
                share: self.amount / n,
                remainder: self.amount % n,
                winners,
            }),
        }
    }
}

impl std::fmt::Display for Pot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "${} {:?}", self.amount, self.seats)
    }
}

/// An even split of one pot. The first `remainder` winners get one extra chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Award {
    winners: Vec<Position>,
    share: Chips,
    remainder: Chips,
}

impl Award {
    /// Winning positions, ascending.
    pub fn winners(&self) -> &[Position] {
        &self.winners
    }
    pub fn share(&self) -> Chips {
        self.share
    }
    pub fn remainder(&self) -> Chips {
        self.remainder
    }
    /// Prize of each winner, odd chips included.
    pub fn prizes(&self) -> impl Iterator<Item = (Position, Chips)> + '_ {
        self.winners
            .iter()
            .enumerate()
            .map(|(i, p)| (*p, self.share + ((i as Chips) < self.remainder) as Chips))
    }
}

/// Side pot construction from what each seat committed over the hand.
pub struct Pots;

impl Pots {
    /// Builds the main pot and side pots from `(position, committed, contesting)`.
    ///
    /// Folded chips are dead money: they count toward the size of every
    /// layer they reach, but folded seats are never eligible. Adjacent layers
    /// with the same eligible seats are merged, and chips committed above the
    /// deepest contesting stack join the last pot. A pot that would exceed
    /// [`Chips::MAX`] is [`SettlementError::PotOverflow`].
    pub fn layered(
        contributions: &[(Position, Chips, bool)],
    ) -> Result<Vec<Pot>, SettlementError> {
        let mut levels = contributions
            .iter()
            .map(|(_, committed, _)| *committed)
            .filter(|committed| *committed > 0)
            .collect::<Vec<Chips>>();
        levels.sort_unstable();
        levels.dedup();
        let mut pots = Vec::<Pot>::new();
        let mut floor = 0;
        for level in levels {
            let amount = contributions
                .iter()
                .map(|(_, committed, _)| (*committed).min(level).saturating_sub(floor))
                .try_fold(0 as Chips, Chips::checked_add)
                .ok_or(SettlementError::PotOverflow { level })?;
            let seats = contributions
                .iter()
                .filter(|(_, committed, contesting)| *contesting && *committed >= level)
                .map(|(position, _, _)| *position)
                .collect::<BTreeSet<Position>>();
            floor = level;
            match pots.last_mut() {
                Some(last) if seats.is_empty() || last.seats == seats => {
                    last.amount = last
                        .amount
                        .checked_add(amount)
                        .ok_or(SettlementError::PotOverflow { level })?;
                }
                _ => pots.push(Pot { amount, seats }),
            }
        }
        Ok(pots)
    }
}
