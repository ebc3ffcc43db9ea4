//! Key-value persistence of the match counters.
//!
//! The score is stored as four independent integer slots identified by
//! fixed keys:
//!
//! ```text
//! Key 1: player 1 points
//! Key 2: player 2 points
//! Key 3: player 1 sets
//! Key 4: player 2 sets
//! ```
//!
//! A missing key reads back as 0. The embedded binary backs a
//! [`StoredScores`] cache with internal flash; host tests use it directly.

/// One persisted counter slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ScoreKey {
    Player1Points = 1,
    Player2Points = 2,
    Player1Sets = 3,
    Player2Sets = 4,
}

impl ScoreKey {
    /// Every key, in storage-id order.
    pub const ALL: [ScoreKey; 4] = [
        ScoreKey::Player1Points,
        ScoreKey::Player2Points,
        ScoreKey::Player1Sets,
        ScoreKey::Player2Sets,
    ];

    /// Raw storage id of this key.
    pub const fn id(self) -> u8 {
        self as u8
    }

    const fn slot(self) -> usize {
        self as usize - 1
    }
}

/// A key-value store holding the four counters.
pub trait ScoreStore {
    /// Read a counter, `None` if it was never written.
    fn read(&self, key: ScoreKey) -> Option<u32>;

    /// Write a counter.
    fn write(&mut self, key: ScoreKey, value: u32);
}

/// In-memory cache of the persisted counters, synced with flash by the
/// firmware.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoredScores {
    slots: [Option<u32>; 4],
    /// True if the cache differs from what was last loaded or committed.
    dirty: bool,
}

impl StoredScores {
    /// Create an empty store.
    pub const fn new() -> Self {
        Self {
            slots: [None; 4],
            dirty: false,
        }
    }

    /// Fill a slot from backing storage without marking the cache dirty.
    pub fn restore(&mut self, key: ScoreKey, value: u32) {
        self.slots[key.slot()] = Some(value);
    }

    /// Drop every slot, as if nothing was ever stored.
    pub fn clear(&mut self) {
        self.slots = [None; 4];
        self.dirty = false;
    }

    /// True if there are writes not yet committed to backing storage.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the cache as in sync with backing storage.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Present slots as `(key, value)` pairs.
    pub fn entries(&self) -> impl Iterator<Item = (ScoreKey, u32)> + '_ {
        ScoreKey::ALL
            .into_iter()
            .filter_map(|key| self.slots[key.slot()].map(|value| (key, value)))
    }
}

impl ScoreStore for StoredScores {
    fn read(&self, key: ScoreKey) -> Option<u32> {
        self.slots[key.slot()]
    }

    fn write(&mut self, key: ScoreKey, value: u32) {
        let slot = &mut self.slots[key.slot()];
        if *slot != Some(value) {
            *slot = Some(value);
            self.dirty = true;
        }
    }
}
