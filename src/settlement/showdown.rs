use super::error::SettlementError;
use super::event::Event;
use super::event::Sink;
use super::podium::Mode;
use super::podium::Podium;
use super::podium::Podiums;
use super::podium::PotsByMode;
use super::pot::Pot;
use super::seat::Seat;
use crate::Chips;
use crate::Position;

/// One prize credited to one seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Payout {
    pub mode: Mode,
    pub pot: usize,
    pub position: Position,
    pub prize: Chips,
    pub stack: Chips,
}

impl From<Payout> for Event {
    fn from(p: Payout) -> Self {
        Event::PlayerWonChips {
            position: p.position,
            mode: p.mode,
            pot: p.pot,
            prize: p.prize,
            stack: p.stack,
        }
    }
}

/// Pays every pot of one mode to its winners.
///
/// Pots are walked main pot first. Each goes to the strongest tie group
/// with at least one eligible seat; the scan stops at the first such group.
/// All payouts are staged before any seat is credited, so on error no stack
/// has changed and nothing was notified.
pub fn award_mode_pots(
    mode: Mode,
    pots: &[Pot],
    podium: &Podium,
    seats: &mut [Seat],
    sink: &impl Sink,
) -> Result<Vec<Payout>, SettlementError> {
    let mut staged = seats.to_vec();
    let mut payouts = Vec::new();
    for (index, pot) in pots.iter().enumerate() {
        let award = podium
            .ties()
            .iter()
            .find_map(|group| pot.award(group))
            .ok_or(SettlementError::Unclaimed { mode, pot: index })?;
        for (position, prize) in award.prizes() {
            let seat = staged
                .get_mut(position)
                .ok_or(SettlementError::UnknownSeat(position))?;
            let stack = seat.win(prize).ok_or(SettlementError::Overflow {
                position,
                stack: seat.stack(),
                prize,
            })?;
            payouts.push(Payout {
                mode,
                pot: index,
                position,
                prize,
                stack,
            });
        }
    }
    seats.copy_from_slice(&staged);
    for payout in payouts.iter() {
        log::debug!(
            "[showdown] P{} +${} from {} pot #{}",
            payout.position,
            payout.prize,
            payout.mode,
            payout.pot
        );
        sink.notify(Event::from(*payout));
    }
    Ok(payouts)
}

/// Resolves every mode of a showdown, in [`Mode::ALL`] order.
///
/// Modes missing from both maps are ignored. A mode whose podium is
/// `None` (or absent) is announced as skipped and its pots are left alone.
/// Between consecutive modes the task sleeps for `pause`, so observers can
/// animate one reveal before the next; a zero pause never sleeps.
///
/// Modes settle independently: an error stops the showdown, but modes
/// already paid stay paid.
///
/// ```no_run
/// # async fn run() -> Result<(), showdown::settlement::SettlementError> {
/// use showdown::settlement::*;
/// let mut seats = vec![Seat::from((State::Active, 0)); 2];
/// let podiums = Podiums::from([(Mode::Standard, Some(Podium::from(vec![vec![0, 1]])))]);
/// let pots = PotsByMode::from([(Mode::Standard, Pots::layered(&[(0, 51, true), (1, 50, true)])?)]);
/// award_pots(&podiums, &pots, &mut seats, &|_: Event| {}, showdown::pause()).await?;
/// assert_eq!(seats[0].stack(), 51);
/// # Ok(())
/// # }
/// ```
pub async fn award_pots(
    podiums: &Podiums,
    pots: &PotsByMode,
    seats: &mut [Seat],
    sink: &impl Sink,
    pause: std::time::Duration,
) -> Result<Vec<Payout>, SettlementError> {
    let modes = Mode::ALL
        .into_iter()
        .filter(|mode| podiums.contains_key(mode) || pots.contains_key(mode))
        .collect::<Vec<Mode>>();
    let mut payouts = Vec::new();
    for (i, mode) in modes.into_iter().enumerate() {
        if i > 0 && !pause.is_zero() {
            tokio::time::sleep(pause).await;
        }
        match podiums.get(&mode).and_then(Option::as_ref) {
            None => {
                log::info!("[showdown] {} skipped", mode);
                sink.notify(Event::ShowdownSkipped { mode });
            }
            Some(podium) => {
                log::info!("[showdown] {} occurring", mode);
                sink.notify(Event::ShowdownOccurring { mode });
                let empty = Vec::new();
                let mode_pots = pots.get(&mode).unwrap_or(&empty);
                match award_mode_pots(mode, mode_pots, podium, seats, sink) {
                    Ok(paid) => payouts.extend(paid),
                    Err(e) => {
                        log::warn!("[showdown] {} settlement failed: {}", mode, e);
                        return Err(e);
                    }
                }
            }
        }
    }
    Ok(payouts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::evaluation::Power;
    use crate::evaluation::Variant;
    use crate::settlement::Pots;
    use crate::settlement::State;
    use std::cell::RefCell;
    use std::time::Duration;

    fn table(stacks: &[Chips]) -> Vec<Seat> {
        stacks.iter().map(|s| Seat::from((State::Active, *s))).collect()
    }
    fn strengths(powers: &[u64]) -> Podium {
        Podium::highest(
            &powers
                .iter()
                .enumerate()
                .map(|(i, p)| (i, Power::from(*p)))
                .collect::<Vec<_>>(),
        )
    }
    fn rewards(seats: &[Seat]) -> Vec<Chips> {
        seats.iter().map(Seat::stack).collect()
    }
    fn ignore(_: Event) {}

    #[test]
    fn heads_up_showdown() {
        let pots = Pots::layered(&[(0, 100, true), (1, 100, true)]).unwrap();
        let mut seats = table(&[0, 0]);
        award_mode_pots(Mode::Standard, &pots, &strengths(&[1, 2]), &mut seats, &ignore).unwrap();
        assert_eq!(rewards(&seats), vec![0, 200]);
    }

    #[test]
    fn winners_folded() {
        let pots = Pots::layered(&[(0, 50, false), (1, 100, true), (2, 75, false), (3, 100, true)]).unwrap();
        let podium = strengths(&[5, 3, 5, 2]);
        let mut seats = table(&[0, 0, 0, 0]);
        award_mode_pots(Mode::Standard, &pots, &podium, &mut seats, &ignore).unwrap();
        assert_eq!(rewards(&seats), vec![0, 325, 0, 0]);
    }

    #[test]
    fn multiway_all_in_with_uneven_stacks() {
        let pots = Pots::layered(&[(0, 150, true), (1, 200, true), (2, 350, true), (3, 50, true)]).unwrap();
        let mut seats = table(&[0, 0, 0, 0]);
        award_mode_pots(Mode::Standard, &pots, &strengths(&[5, 4, 2, 1]), &mut seats, &ignore)
            .unwrap();
        assert_eq!(rewards(&seats), vec![500, 100, 150, 0]);
    }

    #[test]
    fn multiway_all_in_with_side_pot() {
        let pots = Pots::layered(&[(0, 50, true), (1, 100, true), (2, 150, true), (3, 150, true)]).unwrap();
        let mut seats = table(&[0, 0, 0, 0]);
        award_mode_pots(Mode::Standard, &pots, &strengths(&[5, 4, 2, 1]), &mut seats, &ignore)
            .unwrap();
        assert_eq!(rewards(&seats), vec![200, 150, 100, 0]);
    }

    #[test]
    fn side_pot_split_with_odd_chip() {
        let pots = Pots::layered(&[(0, 51, true), (1, 100, true), (2, 100, true)]).unwrap();
        let mut seats = table(&[0, 0, 0]);
        let payouts =
            award_mode_pots(Mode::Standard, &pots, &strengths(&[5, 3, 3]), &mut seats, &ignore)
                .unwrap();
        assert_eq!(rewards(&seats), vec![153, 49, 49]);
        assert_eq!(payouts.iter().map(|p| p.prize).sum::<Chips>(), 251);
        let pots = vec![Pot::new(97, [1, 2])];
        let mut seats = table(&[0, 0, 0]);
        award_mode_pots(Mode::Standard, &pots, &strengths(&[5, 3, 3]), &mut seats, &ignore)
            .unwrap();
        assert_eq!(rewards(&seats), vec![0, 49, 48]);
    }

    #[test]
    fn showdown_from_real_hands() {
        let board = Card::parse("Kh 9d 5c 2s 2h").unwrap();
        let holes = ["As Ks", "Kd Qc", "9h 9c", "Kc Qd"];
        let entries = holes
            .iter()
            .enumerate()
            .map(|(i, h)| {
                let hole = Card::parse(h).unwrap();
                (i, Variant::Stud.high(&hole, &board).unwrap().power)
            })
            .collect::<Vec<_>>();
        let podium = Podium::highest(&entries);
        assert_eq!(podium.ties(), &[vec![2], vec![0], vec![1, 3]]);
        let pots = Pots::layered(&[(0, 100, true), (1, 100, true), (2, 100, true), (3, 100, true)]).unwrap();
        let mut seats = table(&[0, 0, 0, 0]);
        award_mode_pots(Mode::Standard, &pots, &podium, &mut seats, &ignore).unwrap();
        assert_eq!(rewards(&seats), vec![0, 0, 400, 0]);
    }

    #[test]
    fn unclaimed_pot_changes_nothing() {
        let pots = vec![Pot::new(100, [0, 1]), Pot::new(50, [3])];
        let events = RefCell::new(Vec::new());
        let sink = |e: Event| events.borrow_mut().push(e);
        let mut seats = table(&[10, 10, 10, 10]);
        let result = award_mode_pots(Mode::High, &pots, &strengths(&[2, 1, 3]), &mut seats, &sink);
        assert_eq!(result, Err(SettlementError::Unclaimed { mode: Mode::High, pot: 1 }));
        assert_eq!(rewards(&seats), vec![10, 10, 10, 10]);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn overflow_changes_nothing() {
        let pots = vec![Pot::new(100, [0]), Pot::new(10, [1])];
        let mut seats = table(&[0, Chips::MAX - 5]);
        let result = award_mode_pots(Mode::Standard, &pots, &strengths(&[2, 1]), &mut seats, &ignore);
        assert_eq!(
            result,
            Err(SettlementError::Overflow {
                position: 1,
                stack: Chips::MAX - 5,
                prize: 10
            })
        );
        assert_eq!(rewards(&seats), vec![0, Chips::MAX - 5]);
    }

    #[test]
    fn unknown_seat() {
        let pots = vec![Pot::new(100, [9])];
        let mut seats = table(&[0, 0]);
        let podium = Podium::from(vec![vec![9]]);
        let result = award_mode_pots(Mode::Standard, &pots, &podium, &mut seats, &ignore);
        assert_eq!(result, Err(SettlementError::UnknownSeat(9)));
    }

    #[test]
    fn payouts_are_notified_in_order() {
        let pots = vec![Pot::new(7, [0, 1]), Pot::new(4, [1])];
        let events = RefCell::new(Vec::new());
        let sink = |e: Event| events.borrow_mut().push(e);
        let mut seats = table(&[0, 0]);
        award_mode_pots(Mode::Standard, &pots, &Podium::from(vec![vec![0, 1]]), &mut seats, &sink)
            .unwrap();
        assert_eq!(
            *events.borrow(),
            vec![
                Event::PlayerWonChips { position: 0, mode: Mode::Standard, pot: 0, prize: 4, stack: 4 },
                Event::PlayerWonChips { position: 1, mode: Mode::Standard, pot: 0, prize: 3, stack: 3 },
                Event::PlayerWonChips { position: 1, mode: Mode::Standard, pot: 1, prize: 4, stack: 7 },
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn hi_lo_with_skipped_modes() {
        let mut podiums = Podiums::new();
        podiums.insert(Mode::High, Some(Podium::from(vec![vec![0], vec![1]])));
        podiums.insert(Mode::Low, Some(Podium::from(vec![vec![1]])));
        podiums.insert(Mode::Front, None);
        let mut pots = PotsByMode::new();
        pots.insert(Mode::High, vec![Pot::new(51, [0, 1])]);
        pots.insert(Mode::Low, vec![Pot::new(50, [0, 1])]);
        pots.insert(Mode::Front, vec![Pot::new(10, [0, 1])]);
        let events = RefCell::new(Vec::new());
        let sink = |e: Event| events.borrow_mut().push(e);
        let mut seats = table(&[0, 0]);
        let start = tokio::time::Instant::now();
        let payouts = award_pots(&podiums, &pots, &mut seats, &sink, Duration::from_secs(2))
            .await
            .unwrap();
        assert!(start.elapsed() >= Duration::from_secs(4));
        assert!(start.elapsed() < Duration::from_secs(5));
        assert_eq!(payouts.len(), 2);
        assert_eq!(rewards(&seats), vec![51, 50]);
        assert_eq!(
            *events.borrow(),
            vec![
                Event::ShowdownOccurring { mode: Mode::High },
                Event::PlayerWonChips { position: 0, mode: Mode::High, pot: 0, prize: 51, stack: 51 },
                Event::ShowdownOccurring { mode: Mode::Low },
                Event::PlayerWonChips { position: 1, mode: Mode::Low, pot: 0, prize: 50, stack: 50 },
                Event::ShowdownSkipped { mode: Mode::Front },
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn zero_pause_never_sleeps() {
        let mut podiums = Podiums::new();
        podiums.insert(Mode::High, Some(Podium::from(vec![vec![0]])));
        podiums.insert(Mode::Low, None);
        let mut pots = PotsByMode::new();
        pots.insert(Mode::High, vec![Pot::new(30, [0])]);
        let mut seats = table(&[0]);
        let start = tokio::time::Instant::now();
        award_pots(&podiums, &pots, &mut seats, &ignore, Duration::ZERO)
            .await
            .unwrap();
        assert_eq!(start.elapsed(), Duration::ZERO);
        assert_eq!(rewards(&seats), vec![30]);
    }

    #[tokio::test]
    async fn failed_mode_keeps_earlier_modes() {
        let mut podiums = Podiums::new();
        podiums.insert(Mode::High, Some(Podium::from(vec![vec![0]])));
        podiums.insert(Mode::Low, Some(Podium::from(vec![vec![0]])));
        let mut pots = PotsByMode::new();
        pots.insert(Mode::High, vec![Pot::new(30, [0])]);
        pots.insert(Mode::Low, vec![Pot::new(30, [1])]);
        let mut seats = table(&[0, 0]);
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<Event>();
        let result = award_pots(&podiums, &pots, &mut seats, &tx, Duration::ZERO).await;
        assert_eq!(result, Err(SettlementError::Unclaimed { mode: Mode::Low, pot: 0 }));
        assert_eq!(rewards(&seats), vec![30, 0]);
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        assert_eq!(events.len(), 3);
        assert_eq!(events[2], Event::ShowdownOccurring { mode: Mode::Low });
    }
}
