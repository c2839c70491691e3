use super::error::RankError;
use super::power::Power;
use crate::cards::Card;
use crate::cards::Rank;

/// Occupancy increment per rank wire value, Ace high. Codes 0, 1, 15 are unused.
static HIGH: [u64; 16] = increments(false);
/// Occupancy increment per rank wire value, Ace low. Codes 0, 1, 15 are unused.
static LOWBALL: [u64; 16] = increments(true);

const fn increments(ace_low: bool) -> [u64; 16] {
    let mut table = [0u64; 16];
    let mut rank = 2;
    while rank <= 14 {
        let slot = match (ace_low, rank) {
            (true, 14) => 0,
            (true, _) => rank - 1,
            (false, _) => rank - 2,
        };
        table[rank] = 1 << (3 * slot);
        rank += 1;
    }
    table
}

/// Which way the Ace plays, and therefore which way power is read.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Metric {
    /// Ace high (and low only inside the wheel). Flushes and straights count.
    High,
    /// Ace low. Flushes and straights do not count.
    Lowball,
}

impl Metric {
    /// Rank slot 0..13 this metric assigns to a rank.
    pub fn slot(&self, rank: Rank) -> u8 {
        self.increment(rank).trailing_zeros() as u8 / 3
    }
    /// Occupancy contribution of one card of this rank.
    pub fn increment(&self, rank: Rank) -> u64 {
        match self {
            Metric::High => HIGH[u8::from(rank) as usize],
            Metric::Lowball => LOWBALL[u8::from(rank) as usize],
        }
    }
    /// Validates a card and returns its occupancy increment and one-hot suit bit.
    pub fn read(&self, card: &Card) -> Result<(u64, u8), RankError> {
        match card {
            Card::Spanish(_) => Err(RankError::InvalidCard(card.to_string())),
            Card::French(french) if french.is_unknown() => Err(RankError::NilCard),
            Card::French(french) => french
                .standard()
                .map(|(rank, suit)| (self.increment(rank), suit.bit()))
                .ok_or_else(|| RankError::InvalidCard(card.to_string())),
        }
    }
    /// True if `challenger` strictly beats `incumbent` under this metric.
    pub fn prefers(&self, challenger: Power, incumbent: Power) -> bool {
        match self {
            Metric::High => challenger > incumbent,
            Metric::Lowball => challenger < incumbent,
        }
    }
}
