/// Precondition violations detected while ranking a hand.
///
/// These indicate a programming error upstream (a face-down card reaching
/// showdown, a joker in a game without wildcards, a miscounted pool). Ranking
/// stops at the first one instead of producing a degraded power.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RankError {
    #[error("face-down card cannot be ranked")]
    NilCard,
    #[error("card {0} cannot be ranked by this metric")]
    InvalidCard(String),
    #[error("expected {expected} cards, found {found}")]
    CardCount { expected: usize, found: usize },
    #[error("more than four cards share a rank")]
    ImpossibleHand,
}
