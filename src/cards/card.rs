use super::french::French;
use super::spanish::Spanish;

/// A card from any supported deck family.
///
/// Ranking functions pattern-match on the family and reject the ones they do
/// not understand, rather than assuming every card is French.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Card {
    French(French),
    Spanish(Spanish),
}

impl Card {
    /// Parses whitespace-separated French cards, e.g. `"As Kh ?? *w"`.
    pub fn parse(s: &str) -> Result<Vec<Self>, String> {
        s.split_whitespace()
            .map(Self::try_from)
            .collect::<Result<Vec<Self>, _>>()
    }
}

impl From<French> for Card {
    fn from(c: French) -> Self {
        Card::French(c)
    }
}
impl From<Spanish> for Card {
    fn from(c: Spanish) -> Self {
        Card::Spanish(c)
    }
}

/// str isomorphism. Text is read as French notation.
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        French::try_from(s).map(Card::French)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Card::French(c) => write!(f, "{}", c),
            Card::Spanish(c) => write!(f, "{}", c),
        }
    }
}
