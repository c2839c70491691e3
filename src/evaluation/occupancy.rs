/// One-hot vector width: one bit per rank slot.
pub const RANKS: u64 = (1 << 13) - 1;

/// Wheel (A-2-3-4-5) under the Ace-high layout: slots 12, 0, 1, 2, 3.
const WHEEL: u64 = 0b001000000000000000000000000001001001001;
/// Five consecutive occupied slots starting at slot 0 (2-3-4-5-6).
const RUN: u64 = 0b1001001001001;
/// Unit added to a [`Group`]'s count field.
const COUNT: u64 = 1 << 60;

/// How many cards sit at each of the 13 rank slots, three bits per slot.
///
/// ```text
/// AAAKKKQQQJJJTTT999888777666555444333222   (Ace-high layout)
/// 001000000000000000000000000000000010001   Ace, 3, 3
/// ```
///
/// Order- and suit-independent, so summing card increments in any order
/// yields the same value. Which slot a rank lands in is decided by the
/// [`Metric`] that produced the increments.
///
/// [`Metric`]: super::metric::Metric
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Occupancy(u64);

impl Occupancy {
    /// Cards held at a slot.
    pub fn count(&self, slot: u8) -> u8 {
        (self.0 >> (3 * slot as u64) & 0b111) as u8
    }
    /// One-hot vector of occupied slots.
    pub fn presence(&self) -> u64 {
        (0..13)
            .filter(|slot| self.count(*slot) > 0)
            .fold(0, |bits, slot| bits | 1 << slot)
    }
    /// One-hot top slot of a five-card straight, if any. Assumes Ace-high layout.
    ///
    /// The wheel is tested first as a literal; otherwise a five-slot window
    /// slides upward and the first fully occupied window wins.
    pub fn straight(&self) -> Option<u64> {
        if self.0 & WHEEL == WHEEL {
            return Some(1 << 3);
        }
        (0..9)
            .find(|i| self.0 & RUN << (3 * i) == RUN << (3 * i))
            .map(|i| 1 << (4 + i))
    }
    /// Buckets every occupied slot by how many cards it holds.
    ///
    /// Returns `None` when some slot holds five or more cards, which no
    /// single 52-card deck can produce.
    pub fn patterns(&self) -> Option<Patterns> {
        let mut patterns = Patterns::default();
        for slot in 0..13 {
            match self.count(slot) {
                0 => continue,
                1 => patterns.kicks.push(slot),
                2 => patterns.pairs.push(slot),
                3 => patterns.trips.push(slot),
                4 => patterns.quads.push(slot),
                _ => return None,
            }
        }
        Some(patterns)
    }
}

/// Increments are summed, not OR-ed, so repeated ranks accumulate.
impl std::ops::Add<u64> for Occupancy {
    type Output = Self;
    fn add(self, increment: u64) -> Self {
        Self(self.0 + increment)
    }
}

/// u64 isomorphism
impl From<u64> for Occupancy {
    fn from(n: u64) -> Self {
        Self(n)
    }
}
impl From<Occupancy> for u64 {
    fn from(o: Occupancy) -> u64 {
        o.0
    }
}

/// Ranks sharing one multiplicity.
///
/// ```text
/// [cccc][...][rrrrrrrrrrrrr]
///  count       one-hot ranks
/// ```
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Group(u64);

impl Group {
    fn push(&mut self, slot: u8) {
        self.0 |= 1 << slot;
        self.0 += COUNT;
    }
    pub fn ranks(&self) -> u64 {
        self.0 & RANKS
    }
    pub fn count(&self) -> u64 {
        self.0 >> 60
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

/// Rank groupings of a hand, independent of suit.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Patterns {
    pub quads: Group,
    pub trips: Group,
    pub pairs: Group,
    pub kicks: Group,
}
