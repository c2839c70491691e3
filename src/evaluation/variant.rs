use super::combo::Combo;
use super::combo::DRAW;
use super::combo::OMAHA;
use super::combo::STUD;
use super::error::RankError;
use super::metric::Metric;
use super::power::Power;
use crate::cards::Card;

/// Winning selection of a pool and the power it achieves.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Best {
    pub combo: Combo,
    pub power: Power,
}

/// How a pool of hand and community cards may be reduced to five.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    /// Five cards, all of which play.
    Draw,
    /// Seven cards, any five play. Covers hold'em and seven-card stud.
    Stud,
    /// Four hole cards and five board cards; exactly two hole cards play.
    Omaha,
}

impl Variant {
    pub fn combos(&self) -> &'static [Combo] {
        match self {
            Variant::Draw => &DRAW,
            Variant::Stud => &STUD,
            Variant::Omaha => &OMAHA,
        }
    }
    /// Strongest five-card selection under the high metric.
    pub fn high(&self, hand: &[Card], community: &[Card]) -> Result<Best, RankError> {
        self.best(Metric::High, hand, community)
    }
    /// Strongest five-card selection under the ace-to-five lowball metric.
    pub fn low(&self, hand: &[Card], community: &[Card]) -> Result<Best, RankError> {
        self.best(Metric::Lowball, hand, community)
    }
    /// Scans every allowed selection in table order.
    /// Ties keep the first selection found.
    pub fn best(&self, metric: Metric, hand: &[Card], community: &[Card]) -> Result<Best, RankError> {
        self.check(hand, community)?;
        let reads = hand
            .iter()
            .chain(community.iter())
            .map(|card| metric.read(card))
            .collect::<Result<Vec<_>, _>>()?;
        let mut best: Option<Best> = None;
        for combo in self.combos() {
            let power = combo
                .evaluate(&reads, metric)
                .ok_or(RankError::ImpossibleHand)?;
            match best {
                Some(incumbent) if !metric.prefers(power, incumbent.power) => continue,
                _ => best = Some(Best { combo: *combo, power }),
            }
        }
        best.ok_or(RankError::ImpossibleHand)
    }
    fn check(&self, hand: &[Card], community: &[Card]) -> Result<(), RankError> {
        let mismatch = |expected: usize, found: usize| {
            if expected == found {
                Ok(())
            } else {
                Err(RankError::CardCount { expected, found })
            }
        };
        match self {
            Variant::Draw => mismatch(5, hand.len() + community.len()),
            Variant::Stud => mismatch(7, hand.len() + community.len()),
            Variant::Omaha => mismatch(4, hand.len()).and(mismatch(5, community.len())),
        }
    }
}

/// Best high selection of a pool.
pub fn power_high(variant: Variant, hand: &[Card], community: &[Card]) -> Result<Best, RankError> {
    variant.high(hand, community)
}
/// Best lowball selection of a pool.
pub fn power_low(variant: Variant, hand: &[Card], community: &[Card]) -> Result<Best, RankError> {
    variant.low(hand, community)
}

/// str isomorphism
impl TryFrom<&str> for Variant {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "draw" | "5" => Ok(Variant::Draw),
            "stud" | "holdem" | "7" => Ok(Variant::Stud),
            "omaha" => Ok(Variant::Omaha),
            _ => Err(format!("invalid variant: {}", s)),
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Variant::Draw => write!(f, "draw"),
            Variant::Stud => write!(f, "stud"),
            Variant::Omaha => write!(f, "omaha"),
        }
    }
}
