use super::combo::Combo;
use super::error::RankError;
use super::power::Power;
use super::variant::Best;
use crate::cards::Card;
use crate::cards::Rank;
use crate::cards::Suit;

/// Bits that take part in collisions: rank bits and suit bits.
const COLLIDES: u32 = 0b1111111111111111100;
/// Rank bits: Ace at bit 6, deuce through King at bits 7..=18.
const RANKS: u32 = 0b1111111111111000000;
/// Original position of the card in the hand.
const INDEX: u32 = 0b11;
/// Offset of the discarded-card count in a badugi [`Power`].
const REMOVED: u64 = 19;

/// Collision mask of one card, Ace low.
///
/// ```text
/// [KQJT98765432A][sdhc][ii]
///   one-hot rank  suit  index
/// ```
fn mask(rank: Rank, suit: Suit) -> u32 {
    let rank = match rank {
        Rank::Ace => 1 << 6,
        rank => 1 << (7 + u8::from(rank) as u32 - 2),
    };
    rank | 1 << (2 + suit.index() as u32)
}

/// Badugi power of exactly four cards. Smaller is stronger.
///
/// Cards that share a rank or suit with another card are discarded until
/// the survivors are pairwise distinct in both. Cards colliding with two or
/// more others go first; then, scanning from the highest card down, any card
/// still colliding with a lower one goes. The power packs the discard count
/// above the survivors' rank bits, so a four-card badugi beats any
/// three-card one regardless of ranks. The combo marks the survivors.
pub fn power_badugi(hand: &[Card]) -> Result<Best, RankError> {
    if hand.len() != 4 {
        return Err(RankError::CardCount {
            expected: 4,
            found: hand.len(),
        });
    }
    let mut masks = [0u32; 4];
    for (i, card) in hand.iter().enumerate() {
        let (rank, suit) = match card {
            Card::French(french) if french.is_unknown() => Err(RankError::NilCard),
            Card::French(french) => french
                .standard()
                .ok_or_else(|| RankError::InvalidCard(card.to_string())),
            Card::Spanish(_) => Err(RankError::InvalidCard(card.to_string())),
        }?;
        masks[i] = mask(rank, suit) | i as u32;
    }
    masks.sort_unstable_by(|a, b| b.cmp(a));
    let mut removed = 0u64;
    for i in 0..4 {
        let collisions = (0..4)
            .filter(|j| *j != i)
            .filter(|j| masks[i] & masks[*j] & COLLIDES != 0)
            .count();
        if collisions > 1 {
            masks[i] = 0;
            removed += 1;
        }
    }
    for i in 0..3 {
        if (i + 1..4).any(|j| masks[i] & masks[j] & COLLIDES != 0) {
            masks[i] = 0;
            removed += 1;
        }
    }
    let ranks = masks.iter().fold(0, |bits, m| bits | m & RANKS);
    let combo = masks
        .iter()
        .filter(|m| **m != 0)
        .fold(0, |bits, m| bits | 1 << (m & INDEX));
    Ok(Best {
        combo: Combo::from(combo),
        power: Power::from(removed << REMOVED | ranks as u64),
    })
}
