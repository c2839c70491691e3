//! Hand ranking and pot settlement for multi-variant poker tables.
//!
//! ## Modules
//!
//! - [`cards`]: Compact card codec over the supported card families
//! - [`evaluation`]: Bit-packed hand power under every ranking metric
//! - [`settlement`]: Deterministic chip distribution over main and side pots
//! - [`sync`]: Countdown gate and gated loop used to pace showdown consumers
pub mod cards;
pub mod evaluation;
pub mod settlement;
pub mod sync;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Stack sizes and pot amounts in minimum-denomination units.
pub type Chips = u64;
/// Seat index around the table. Lower indices reveal first at showdown.
pub type Position = usize;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// SHOWDOWN PARAMETERS
// ============================================================================
/// Default pause between consecutive scoring modes of one showdown.
/// Gives observers time to animate each reveal before the next mode resolves.
pub const SHOWDOWN_PAUSE: std::time::Duration = std::time::Duration::from_millis(1500);
/// Environment variable overriding [`SHOWDOWN_PAUSE`] (e.g. "500ms", "2s", "0s").
pub const SHOWDOWN_PAUSE_VAR: &str = "SHOWDOWN_PAUSE";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Inter-mode showdown pause, read from the environment when present.
/// Falls back to [`SHOWDOWN_PAUSE`] when unset or unparseable.
pub fn pause() -> std::time::Duration {
    pause_from(std::env::var(SHOWDOWN_PAUSE_VAR).ok().as_deref())
}

fn pause_from(value: Option<&str>) -> std::time::Duration {
    match value {
        None => SHOWDOWN_PAUSE,
        Some(value) => parse_duration(value).unwrap_or_else(|| {
            log::warn!("ignoring unparseable {}={}", SHOWDOWN_PAUSE_VAR, value);
            SHOWDOWN_PAUSE
        }),
    }
}

/// Parse duration string like "250ms", "30s", "5m", "2h" into Duration.
pub fn parse_duration(s: &str) -> Option<std::time::Duration> {
    let s = s.trim();
    if let Some(millis) = s.strip_suffix("ms") {
        return millis.parse().ok().map(std::time::Duration::from_millis);
    }
    let (num, unit) = s.split_at(s.char_indices().last().map(|(i, _)| i)?);
    let value: u64 = num.parse().ok()?;
    match unit {
        "s" => Some(std::time::Duration::from_secs(value)),
        "m" => value.checked_mul(60).map(std::time::Duration::from_secs),
        "h" => value.checked_mul(3600).map(std::time::Duration::from_secs),
        _ => None,
    }
}
