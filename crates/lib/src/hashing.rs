//! Process-wide hash seeding.
//!
//! Hash-based containers built with [`SeededState`] share one seed, chosen
//! randomly the first time it is needed and fixed for the rest of the process.
//! Iteration order of such containers is stable within a process and differs
//! between runs, so nothing may depend on it being reproducible.

use std::{
    collections::hash_map::DefaultHasher,
    hash::{BuildHasher, Hasher},
    sync::OnceLock,
};

static PROCESS_SEED: OnceLock<u64> = OnceLock::new();

/// The seed shared by every [`SeededState`] in this process.
///
/// Initialization is thread safe; concurrent first calls observe the same seed.
pub fn process_seed() -> u64 {
    *PROCESS_SEED.get_or_init(|| {
        let seed = rand::random::<u64>();
        tracing::trace!("Initialized process hash seed");
        seed
    })
}

/// A [`BuildHasher`] keyed by [`process_seed`].
///
/// ```
/// use std::collections::HashSet;
/// use carton::hashing::SeededState;
///
/// let mut set: HashSet<&str, SeededState> = HashSet::default();
/// set.insert("a");
/// assert!(set.contains("a"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SeededState {
    seed: u64,
}

impl SeededState {
    pub fn new() -> Self {
        Self {
            seed: process_seed(),
        }
    }
}

impl Default for SeededState {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildHasher for SeededState {
    type Hasher = DefaultHasher;

    fn build_hasher(&self) -> DefaultHasher {
        let mut hasher = DefaultHasher::new();
        hasher.write_u64(self.seed);
        hasher
    }
}
