use super::rank::Rank;
use super::suit::Suit;
use crate::Arbitrary;

/// A card from a standard French deck, encoded in one byte.
///
/// The high nibble is the suit tag and the low nibble is the rank:
///
/// ```text
/// Ts   0b0100_1010   (spade tag 4, rank 10)
/// ??   0b0000_0000   (face down, not yet revealed)
/// *w   0b0101_0000   (joker)
/// ```
///
/// Any byte is representable so that face-down and corrupt cards can travel
/// through the same containers as real ones. Validity is only enforced when a
/// ranking function reads the card.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct French(u8);

impl French {
    /// A card that has not been revealed.
    pub const UNKNOWN: Self = Self(0x00);
    /// The only wildcard of the French deck.
    pub const JOKER: Self = Self(0x50);

    /// Rank of a standard card; `None` for face-down, joker, or corrupt bytes.
    pub fn rank(&self) -> Option<Rank> {
        self.standard().map(|(rank, _)| rank)
    }
    /// Suit of a standard card; `None` for face-down, joker, or corrupt bytes.
    pub fn suit(&self) -> Option<Suit> {
        self.standard().map(|(_, suit)| suit)
    }
    pub fn is_unknown(&self) -> bool {
        *self == Self::UNKNOWN
    }
    pub fn is_joker(&self) -> bool {
        *self == Self::JOKER
    }
    /// Decodes one of the 52 standard cards.
    pub fn standard(&self) -> Option<(Rank, Suit)> {
        let suit = Suit::try_from(self.0 >> 4).ok()?;
        let rank = Rank::try_from(self.0 & 0xF).ok()?;
        Some((rank, suit))
    }
    /// Position `0..52` in a suit-major ordering of the standard deck.
    pub fn index(&self) -> Option<usize> {
        self.standard()
            .map(|(rank, suit)| suit.index() as usize * 13 + (u8::from(rank) - 2) as usize)
    }
    /// Draws `n` distinct standard cards uniformly at random.
    pub fn distinct(n: usize) -> Vec<Self> {
        rand::seq::index::sample(&mut rand::rng(), 52, n)
            .into_iter()
            .map(Self::nth)
            .collect()
    }
    /// Inverse of [`French::index`].
    fn nth(i: usize) -> Self {
        let suit = Suit::all()[i / 13];
        let rank = Rank::all()[i % 13];
        Self::from((rank, suit))
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for French {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self(u8::from(suit) << 4 | u8::from(rank))
    }
}

/// u8 isomorphism (unchecked)
impl From<u8> for French {
    fn from(n: u8) -> Self {
        Self(n)
    }
}
impl From<French> for u8 {
    fn from(c: French) -> u8 {
        c.0
    }
}

impl Arbitrary for French {
    fn random() -> Self {
        use rand::Rng;
        Self::nth(rand::rng().random_range(0..52))
    }
}

/// str isomorphism
impl TryFrom<&str> for French {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        match s {
            "??" => Ok(Self::UNKNOWN),
            "*w" | "*W" => Ok(Self::JOKER),
            _ if s.chars().count() == 2 => {
                let mut chars = s.chars();
                let rank = chars.next().map(String::from).unwrap_or_default();
                let suit = chars.next().map(String::from).unwrap_or_default();
                let rank = Rank::try_from(rank.as_str())?;
                let suit = Suit::try_from(suit.as_str())?;
                Ok(Self::from((rank, suit)))
            }
            _ => Err(format!("invalid card str: {}", s)),
        }
    }
}

impl std::fmt::Display for French {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.standard() {
            Some((rank, suit)) => write!(f, "{}{}", rank, suit),
            None if self.is_unknown() => write!(f, "??"),
            None if self.is_joker() => write!(f, "*w"),
            None => write!(f, "!!"),
        }
    }
}
