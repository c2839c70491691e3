/// French card suit: clubs, hearts, diamonds, spades.
///
/// Discriminants follow the wire tag of [`French`] cards, where tag 0 is
/// reserved for face-down cards and tag 5 for the joker.
///
/// [`French`]: super::french::French
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    Club = 1,
    Heart = 2,
    Diamond = 3,
    Spade = 4,
}

impl Suit {
    /// All four suits in tag order.
    pub const fn all() -> [Suit; 4] {
        [Suit::Club, Suit::Heart, Suit::Diamond, Suit::Spade]
    }
    /// Zero-based position in tag order.
    pub const fn index(&self) -> u8 {
        *self as u8 - 1
    }
    /// One-hot suit bit. Intersecting these across cards detects flushes.
    pub const fn bit(&self) -> u8 {
        1 << self.index()
    }
}

/// u8 tag isomorphism
impl TryFrom<u8> for Suit {
    type Error = String;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Suit::Club),
            2 => Ok(Suit::Heart),
            3 => Ok(Suit::Diamond),
            4 => Ok(Suit::Spade),
            _ => Err(format!("invalid suit tag: {}", n)),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// str isomorphism
impl TryFrom<&str> for Suit {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "c" | "♣" => Ok(Suit::Club),
            "h" | "♥" => Ok(Suit::Heart),
            "d" | "♦" => Ok(Suit::Diamond),
            "s" | "♠" => Ok(Suit::Spade),
            _ => Err(format!("invalid suit str: {}", s)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Suit::Club => write!(f, "c"),
            Suit::Heart => write!(f, "h"),
            Suit::Diamond => write!(f, "d"),
            Suit::Spade => write!(f, "s"),
        }
    }
}
