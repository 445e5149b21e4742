use std::{
    sync::{
        OnceLock,
        atomic::{AtomicU64, Ordering},
    },
    time::{SystemTime, UNIX_EPOCH},
};

fn now_nanos() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64
}

/// Returns a process-unique, monotonically increasing identifier.
///
/// Seeded from the clock once, then counted up, so ids minted in the same instant differ.
pub fn rand_id() -> u64 {
    static COUNTER: OnceLock<AtomicU64> = OnceLock::new();
    let counter = COUNTER.get_or_init(|| AtomicU64::new(now_nanos()));
    counter.fetch_add(1, Ordering::Relaxed)
}

/// A fresh session id such as `session-1a2b3c`.
pub fn session_id() -> String {
    format!("session-{:x}", rand_id())
}

/// Seed for flight enemy placement when none is configured.
pub fn clock_seed() -> u64 {
    now_nanos() ^ rand_id().rotate_left(17)
}
