/// A card from a Spanish deck (48 cards plus a joker), encoded by position.
///
/// Positions `0..48` run suit-major through copas, oros, bastos, and espadas,
/// each holding ranks 1..=9, sota, caballo, rey. Position 48 is the joker.
/// No ranking metric in this crate accepts Spanish cards.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Spanish(u8);

const SUITS: [char; 4] = ['c', 'o', 'b', 'e'];
const RANKS: [char; 12] = ['1', '2', '3', '4', '5', '6', '7', '8', '9', 'S', 'C', 'R'];

impl Spanish {
    pub const JOKER: Self = Self(48);

    /// Rank 1..=12 of a standard card.
    pub fn rank(&self) -> Option<u8> {
        (self.0 < 48).then(|| self.0 % 12 + 1)
    }
    /// Suit position 0..4 of a standard card.
    pub fn suit(&self) -> Option<u8> {
        (self.0 < 48).then(|| self.0 / 12)
    }
    pub fn is_joker(&self) -> bool {
        *self == Self::JOKER
    }
}

/// u8 isomorphism (unchecked)
impl From<u8> for Spanish {
    fn from(n: u8) -> Self {
        Self(n)
    }
}
impl From<Spanish> for u8 {
    fn from(c: Spanish) -> u8 {
        c.0
    }
}

/// str isomorphism
impl TryFrom<&str> for Spanish {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let chars = s.trim().chars().collect::<Vec<char>>();
        match chars.as_slice() {
            ['*', 'w'] => Ok(Self::JOKER),
            [r, u] => {
                let rank = RANKS.iter().position(|c| c == r);
                let suit = SUITS.iter().position(|c| c == u);
                rank.zip(suit)
                    .map(|(rank, suit)| Self((suit * 12 + rank) as u8))
                    .ok_or_else(|| format!("invalid spanish card str: {}", s))
            }
            _ => Err(format!("invalid spanish card str: {}", s)),
        }
    }
}

impl std::fmt::Display for Spanish {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.0 {
            0..48 => write!(
                f,
                "{}{}",
                RANKS[(self.0 % 12) as usize],
                SUITS[(self.0 / 12) as usize]
            ),
            48 => write!(f, "*w"),
            _ => write!(f, "!!"),
        }
    }
}
