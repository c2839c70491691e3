use super::metric::Metric;
use super::occupancy::Occupancy;
use super::power::Power;

/// Five-card draw: the whole pool plays.
pub const DRAW: [Combo; 1] = [Combo(0b11111)];
/// Every 5-card subset of a 7-card pool, lexicographic by index set.
pub const STUD: [Combo; 21] = stud();
/// Two of four hole cards (indices 0..4) with three of five board cards
/// (indices 4..9). Hole pairs vary slowest, board triples fastest.
pub const OMAHA: [Combo; 60] = omaha();

/// Selection of pool indices, bit `i` set when card `i` plays.
///
/// The pool is always hand cards followed by community cards, so a combo
/// doubles as the reveal mask reported alongside a winning [`Power`].
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Combo(u32);

impl Combo {
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    pub fn contains(&self, index: usize) -> bool {
        index < 32 && self.0 & 1 << index != 0
    }
    /// Selected indices, ascending.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..32).filter(|i| self.contains(*i))
    }
    /// The selected items of a pool, in pool order.
    pub fn pick<T: Copy>(&self, pool: &[T]) -> Vec<T> {
        self.indices().filter_map(|i| pool.get(i).copied()).collect()
    }
    /// Power of the selected cards, given each pool card's occupancy increment and suit bit.
    ///
    /// Flushes only count under [`Metric::High`]. `None` if some rank is held
    /// five or more times.
    pub fn evaluate(&self, reads: &[(u64, u8)], metric: Metric) -> Option<Power> {
        let (occupancy, suits) = self
            .pick(reads)
            .into_iter()
            .fold((Occupancy::default(), 0b1111), |(o, s), (increment, suit)| {
                (o + increment, s & suit)
            });
        match metric {
            Metric::High => Power::high(occupancy, suits != 0),
            Metric::Lowball => Power::lowball(occupancy),
        }
    }
}

/// Excluding two of seven in descending pair order yields the
/// lexicographic order of the five that remain.
const fn stud() -> [Combo; 21] {
    let mut table = [Combo(0); 21];
    let mut n = 0;
    let mut i = 6;
    while i > 0 {
        i -= 1;
        let mut j = 7;
        while j > i + 1 {
            j -= 1;
            table[n] = Combo(0b1111111 ^ 1 << i ^ 1 << j);
            n += 1;
        }
    }
    table
}

const fn omaha() -> [Combo; 60] {
    let mut table = [Combo(0); 60];
    let mut n = 0;
    let mut a = 0;
    while a < 4 {
        let mut b = a + 1;
        while b < 4 {
            let mut c = 4;
            while c < 9 {
                let mut d = c + 1;
                while d < 9 {
                    let mut e = d + 1;
                    while e < 9 {
                        table[n] = Combo(1 << a | 1 << b | 1 << c | 1 << d | 1 << e);
                        n += 1;
                        e += 1;
                    }
                    d += 1;
                }
                c += 1;
            }
            b += 1;
        }
        a += 1;
    }
    table
}

/// u32 isomorphism
impl From<u32> for Combo {
    fn from(n: u32) -> Self {
        Self(n)
    }
}
impl From<Combo> for u32 {
    fn from(c: Combo) -> u32 {
        c.0
    }
}

impl std::fmt::Display for Combo {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:#b}", self.0)
    }
}
