/// Hand category, stored in bits 39..43 of a [`Power`].
///
/// Lowball powers reuse the same codes but never produce
/// `Straight`, `Flush`, or `StraightFlush`.
///
/// [`Power`]: super::power::Power
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOAK = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOAK = 7,
    StraightFlush = 8,
}

impl TryFrom<u64> for Category {
    type Error = String;
    fn try_from(n: u64) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Category::HighCard),
            1 => Ok(Category::OnePair),
            2 => Ok(Category::TwoPair),
            3 => Ok(Category::ThreeOAK),
            4 => Ok(Category::Straight),
            5 => Ok(Category::Flush),
            6 => Ok(Category::FullHouse),
            7 => Ok(Category::FourOAK),
            8 => Ok(Category::StraightFlush),
            _ => Err(format!("invalid category: {}", n)),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Category::HighCard => write!(f, "HighCard"),
            Category::OnePair => write!(f, "OnePair"),
            Category::TwoPair => write!(f, "TwoPair"),
            Category::ThreeOAK => write!(f, "ThreeOfAKind"),
            Category::Straight => write!(f, "Straight"),
            Category::Flush => write!(f, "Flush"),
            Category::FullHouse => write!(f, "FullHouse"),
            Category::FourOAK => write!(f, "FourOfAKind"),
            Category::StraightFlush => write!(f, "StraightFlush"),
        }
    }
}
