use super::category::Category;
use super::occupancy::Occupancy;
use super::occupancy::Patterns;
use super::occupancy::RANKS;

/// Bit offset of the [`Category`] code.
const CATEGORY: u64 = 39;
/// Bit offset of the primary rank vector (quads, trips, or pairs).
const PRIMARY: u64 = 13;

/// A single comparable word summarizing a five-card selection.
///
/// ```text
/// [cccc][0000000000000][ppppppppppppp][kkkkkkkkkkkkk]
///  category  unused      primary ranks   kickers
/// ```
///
/// Straights and straight flushes carry the one-hot top of the run in the
/// kicker field; flushes and high-card hands carry the presence vector of all
/// five ranks. Under [`Metric::High`] larger is stronger; under
/// [`Metric::Lowball`] the bit layout is the same over Ace-low slots and
/// smaller is stronger.
///
/// [`Metric::High`]: super::metric::Metric::High
/// [`Metric::Lowball`]: super::metric::Metric::Lowball
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Power(u64);

impl Power {
    /// Ace-high power of five cards. `flush` is true when all five share a suit.
    ///
    /// `None` when some rank is held five or more times.
    pub fn high(occupancy: Occupancy, flush: bool) -> Option<Self> {
        let patterns = occupancy.patterns()?;
        let power = match (flush, occupancy.straight()) {
            (true, Some(top)) => Self::pack(Category::StraightFlush, 0, top),
            (true, None) => Self::pack(Category::Flush, 0, occupancy.presence()),
            (false, Some(top)) => Self::pack(Category::Straight, 0, top),
            (false, None) => return Some(Self::grouped(patterns)),
        };
        Some(power)
    }
    /// Ace-low power of five cards. Flushes and straights are ignored.
    ///
    /// `None` when some rank is held five or more times.
    pub fn lowball(occupancy: Occupancy) -> Option<Self> {
        occupancy.patterns().map(Self::grouped)
    }
    /// Category code of this power, if it names one.
    pub fn category(&self) -> Option<Category> {
        Category::try_from(self.0 >> CATEGORY).ok()
    }
    /// Lowball qualifier for split high-low games: five distinct ranks, none above eight.
    ///
    /// Only meaningful for lowball powers, where unpaired hands carry no
    /// category bits and the presence vector sits in the low 13 bits.
    pub fn is_eight_or_better(&self) -> bool {
        self.0 < 1 << 8
    }

    fn grouped(p: Patterns) -> Self {
        if !p.quads.is_empty() {
            Self::pack(Category::FourOAK, p.quads.ranks(), p.kicks.ranks())
        } else if !p.trips.is_empty() && !p.pairs.is_empty() {
            Self::pack(Category::FullHouse, p.trips.ranks(), p.pairs.ranks())
        } else if !p.trips.is_empty() {
            Self::pack(Category::ThreeOAK, p.trips.ranks(), p.kicks.ranks())
        } else if p.pairs.count() >= 2 {
            Self::pack(Category::TwoPair, p.pairs.ranks(), p.kicks.ranks())
        } else if !p.pairs.is_empty() {
            Self::pack(Category::OnePair, p.pairs.ranks(), p.kicks.ranks())
        } else {
            Self::pack(Category::HighCard, 0, p.kicks.ranks())
        }
    }
    fn pack(category: Category, primary: u64, kickers: u64) -> Self {
        Self((category as u64) << CATEGORY | (primary & RANKS) << PRIMARY | kickers & RANKS)
    }
}

/// u64 isomorphism
impl From<u64> for Power {
    fn from(n: u64) -> Self {
        Self(n)
    }
}
impl From<Power> for u64 {
    fn from(p: Power) -> u64 {
        p.0
    }
}

impl std::fmt::Display for Power {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.category() {
            Some(category) => write!(f, "{:<14}{:#045b}", category.to_string(), self.0),
            None => write!(f, "{:#045b}", self.0),
        }
    }
}
