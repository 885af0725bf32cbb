// SPDX-License-Identifier: MPL-2.0

//! Process-wide deterministic seeding
//!
//! A single seeded generator shared by the whole process. [`set_seed`] is
//! meant to be called once at program start, before any draw whose
//! determinism matters; calling it again reseeds the generator (last call
//! wins). ChaCha8 keeps the stream identical across platforms and crate
//! versions.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::ops::Range;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

static GLOBAL_RNG: Mutex<Option<ChaCha8Rng>> = Mutex::new(None);
static ACCEL_DETERMINISM: AtomicBool = AtomicBool::new(false);

/// Seed the process-wide generator for reproducibility
///
/// When `deterministic_accel` is set, compute backends that consult
/// [`accel_determinism`] should disable auto-tuning/benchmarking modes and
/// run deterministic kernels.
pub fn set_seed(seed_value: u64, deterministic_accel: bool) {
    let mut guard = GLOBAL_RNG.lock().unwrap_or_else(|e| e.into_inner());
    *guard = Some(ChaCha8Rng::seed_from_u64(seed_value));
    ACCEL_DETERMINISM.store(deterministic_accel, Ordering::Relaxed);
    debug!(seed = seed_value, deterministic_accel, "Seeded global RNG");
}

/// Whether deterministic accelerator execution was requested
pub fn accel_determinism() -> bool {
    ACCEL_DETERMINISM.load(Ordering::Relaxed)
}

/// Run a closure with exclusive access to the process-wide generator
///
/// If [`set_seed`] has not been called, the generator is initialized from
/// OS entropy on first use.
pub fn with_rng<T>(f: impl FnOnce(&mut ChaCha8Rng) -> T) -> T {
    let mut guard = GLOBAL_RNG.lock().unwrap_or_else(|e| e.into_inner());
    let rng = guard.get_or_insert_with(ChaCha8Rng::from_entropy);
    f(rng)
}

/// Draw a single u64 from the process-wide generator
pub fn random_u64() -> u64 {
    with_rng(|rng| rng.next_u64())
}

/// Draw a value in `range` from the process-wide generator
pub fn random_range(range: Range<u64>) -> u64 {
    with_rng(|rng| rng.gen_range(range))
}
