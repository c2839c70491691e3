use super::pot::Pot;
use crate::Position;
use crate::evaluation::Metric;
use crate::evaluation::Power;
use std::collections::BTreeMap;

/// Scoring mode of one showdown pass.
///
/// Single-board games resolve `Standard` only. Split games resolve `High`
/// and `Low` (the latter only when some hand qualifies). Two-hand games
/// resolve `Front` and `Back`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    Standard,
    High,
    Low,
    Front,
    Back,
}

impl Mode {
    /// Every mode, in resolution order.
    pub const ALL: [Mode; 5] = [Mode::Standard, Mode::High, Mode::Low, Mode::Front, Mode::Back];
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Mode::Standard => write!(f, "standard"),
            Mode::High => write!(f, "high"),
            Mode::Low => write!(f, "low"),
            Mode::Front => write!(f, "front"),
            Mode::Back => write!(f, "back"),
        }
    }
}

/// Showdown ranking of one mode: tie groups, strongest first.
///
/// Positions inside a group are ascending, which is the order odd chips
/// are handed out in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Podium(Vec<Vec<Position>>);

impl Podium {
    /// Groups positions by equal power, strongest group first.
    pub fn rank(entries: &[(Position, Power)], metric: Metric) -> Self {
        let mut entries = entries.to_vec();
        entries.sort_by(|(p1, s1), (p2, s2)| match metric {
            Metric::High => s2.cmp(s1).then(p1.cmp(p2)),
            Metric::Lowball => s1.cmp(s2).then(p1.cmp(p2)),
        });
        let mut ties = Vec::<Vec<Position>>::new();
        let mut last = None;
        for (position, power) in entries {
            match ties.last_mut() {
                Some(group) if last == Some(power) => group.push(position),
                _ => ties.push(vec![position]),
            }
            last = Some(power);
        }
        Self(ties)
    }
    /// Larger power wins.
    pub fn highest(entries: &[(Position, Power)]) -> Self {
        Self::rank(entries, Metric::High)
    }
    /// Smaller power wins.
    pub fn lowest(entries: &[(Position, Power)]) -> Self {
        Self::rank(entries, Metric::Lowball)
    }
    pub fn ties(&self) -> &[Vec<Position>] {
        &self.0
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Tie groups given directly, strongest first. Positions are sorted within each group.
impl From<Vec<Vec<Position>>> for Podium {
    fn from(mut ties: Vec<Vec<Position>>) -> Self {
        ties.iter_mut().for_each(|group| group.sort_unstable());
        Self(ties)
    }
}

/// Podium per mode. `None` marks a mode that is skipped this hand,
/// such as a low half with no qualifying hand.
pub type Podiums = BTreeMap<Mode, Option<Podium>>;
/// Pots per mode, main pot first.
pub type PotsByMode = BTreeMap<Mode, Vec<Pot>>;
