//! Hand Evaluation Binary
//!
//! Ranks a hand from the command line and prints the winning cards.
//!
//! ```text
//! evaluate high omaha "As Ks 2c 3d" "Qs Js Ts 4h 5h"
//! evaluate low stud "Ah 6d 6h 8d 3d 8h Th"
//! evaluate badugi "Ac 2h 3d 3s"
//! ```

use clap::Parser;
use showdown::cards::Card;
use showdown::evaluation::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
enum Query {
    #[command(about = "Best hand under the ace-high metric", alias = "hi")]
    High {
        #[arg(required = true, value_parser = variant)]
        variant: Variant,
        #[arg(required = true)]
        hand: String,
        #[arg(default_value = "")]
        community: String,
    },
    #[command(about = "Best hand under the ace-to-five lowball metric", alias = "lo")]
    Low {
        #[arg(required = true, value_parser = variant)]
        variant: Variant,
        #[arg(required = true)]
        hand: String,
        #[arg(default_value = "")]
        community: String,
    },
    #[command(about = "Badugi power of a four-card hand", alias = "bd")]
    Badugi {
        #[arg(required = true)]
        hand: String,
    },
}

fn variant(s: &str) -> Result<Variant, String> {
    Variant::try_from(s)
}

fn cards(s: &str) -> anyhow::Result<Vec<Card>> {
    Card::parse(s).map_err(anyhow::Error::msg)
}

fn report(pool: &[Card], best: Best) {
    let played = best
        .combo
        .pick(pool)
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<String>>()
        .join(" ");
    println!("{:<16}{}", "cards", played);
    println!("{:<16}{}", "combo", best.combo);
    println!("{:<16}{}", "power", best.power);
}

fn main() -> anyhow::Result<()> {
    showdown::log();
    match Query::parse() {
        Query::High {
            variant,
            hand,
            community,
        } => {
            let (hand, community) = (cards(&hand)?, cards(&community)?);
            let best = variant.high(&hand, &community)?;
            log::info!("{} high {}", variant, best.power);
            report(&[hand, community].concat(), best);
        }
        Query::Low {
            variant,
            hand,
            community,
        } => {
            let (hand, community) = (cards(&hand)?, cards(&community)?);
            let best = variant.low(&hand, &community)?;
            log::info!("{} low {}", variant, best.power);
            report(&[hand, community].concat(), best);
            if best.power.is_eight_or_better() {
                println!("{:<16}{}", "qualifies", "eight or better");
            }
        }
        Query::Badugi { hand } => {
            let hand = cards(&hand)?;
            let best = power_badugi(&hand)?;
            log::info!("badugi {}", best.power);
            report(&hand, best);
        }
    }
    Ok(())
}
