//! Persistent storage for the match counters.
//!
//! Uses the nRF52840's internal flash via `sequential-storage` crate
//! to keep the score across power cycles.
//!
//! Storage layout:
//!   - One map item per counter, keyed by its `ScoreKey` id (1..=4).
//!   - Values are `u32`; a missing item reads back as 0.
//!   - Items are appended sequentially; the flash pages are managed
//!     by `sequential-storage` which handles wear levelling and GC.

use bordtennis::persist::{ScoreKey, StoredScores};
use defmt::{debug, error, info};
use embedded_storage_async::nor_flash::NorFlash;
use sequential_storage::cache::NoCache;
use sequential_storage::map::{fetch_item, store_item};

use crate::config::{STORAGE_FLASH_PAGE_COUNT, STORAGE_FLASH_PAGE_START};
use crate::error::Error;

/// Flash page size for nRF52840 (4 KB).
const FLASH_PAGE_SIZE: u32 = 4096;

/// Start address of our storage region.
const STORAGE_START: u32 = STORAGE_FLASH_PAGE_START * FLASH_PAGE_SIZE;

/// End address (exclusive) of our storage region.
const STORAGE_END: u32 = (STORAGE_FLASH_PAGE_START + STORAGE_FLASH_PAGE_COUNT) * FLASH_PAGE_SIZE;

/// Scratch buffer size for one map item (header + u8 key + u32 value,
/// padded to the flash word size).
const ITEM_BUF_SIZE: usize = 64;

/// Fill `store` from flash.
///
/// On a read error the store is left empty, so the match starts at 0-0.
pub async fn load_from_flash(store: &mut StoredScores, flash: &mut impl NorFlash) {
    store.clear();

    for key in ScoreKey::ALL {
        let mut buf = [0u8; ITEM_BUF_SIZE];
        match fetch_item::<u8, u32, _>(
            flash,
            STORAGE_START..STORAGE_END,
            &mut NoCache::new(),
            &mut buf,
            &key.id(),
        )
        .await
        {
            Ok(Some(value)) => store.restore(key, value),
            Ok(None) => debug!("Storage: no value for {}", key),
            Err(e) => {
                error!("Flash read error: {:?}", defmt::Debug2Format(&e));
                store.clear();
                return;
            }
        }
    }

    info!("Loaded {} score values from flash", store.entries().count());
}

/// Commit every slot of `store` to flash if it changed since the last
/// load or commit.
///
/// On failure the store stays dirty so the next call retries.
pub async fn save_to_flash(store: &mut StoredScores, flash: &mut impl NorFlash) -> Result<(), Error> {
    if !store.is_dirty() {
        debug!("Storage: no changes to save");
        return Ok(());
    }

    for (key, value) in store.entries() {
        let mut buf = [0u8; ITEM_BUF_SIZE];
        if let Err(e) = store_item::<u8, u32, _>(
            flash,
            STORAGE_START..STORAGE_END,
            &mut NoCache::new(),
            &mut buf,
            &key.id(),
            &value,
        )
        .await
        {
            error!("Flash write error: {:?}", defmt::Debug2Format(&e));
            return Err(Error::Storage);
        }
    }

    store.mark_clean();
    info!("Saved score to flash");
    Ok(())
}
