//! Startup Seeding
//!
//! Populates the record store with synthetic records before the server
//! starts accepting requests. Diagnostic scaffolding, not core logic: the
//! service runs fine with a seed count of zero.

use tracing::info;

use crate::error::Result;
use crate::store::RecordStore;

/// First halves of generated stage names.
const LEADS: &[&str] = &[
    "Velvet", "Neon", "Midnight", "Golden", "Crimson", "Electric", "Silver", "Lunar", "Scarlet",
    "Howling", "Rustic", "Phantom", "Wandering", "Marble", "Atomic", "Cobalt",
];

/// Second halves of generated stage names.
const TAILS: &[&str] = &[
    "Orchestra", "Choir", "Parade", "Syndicate", "Quartet", "Collective", "Ensemble", "Brigade",
    "Union", "Caravan", "Society", "Revue", "Assembly", "Circuit", "Foundry",
];

/// Deterministic synthetic stage name for seed index `i`.
///
/// Cycles through every lead/tail pairing before repeating, with a numeric
/// suffix once all pairings are exhausted.
pub fn synthetic_name(i: usize) -> String {
    let lead = LEADS[i % LEADS.len()];
    let tail = TAILS[(i / LEADS.len()) % TAILS.len()];
    let cycle = i / (LEADS.len() * TAILS.len());
    if cycle == 0 {
        format!("{} {}", lead, tail)
    } else {
        format!("{} {} {}", lead, tail, cycle + 1)
    }
}

/// Creates `count` synthetic records in the store.
///
/// Returns the number of records created. A count of zero is a no-op.
pub async fn seed_records<S: RecordStore>(store: &S, count: usize) -> Result<usize> {
    for i in 0..count {
        store.create(synthetic_name(i)).await?;
    }
    if count > 0 {
        info!("Seeded {} synthetic records", count);
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use crate::store::MemoryRecordStore;

    #[test]
    fn test_synthetic_name_is_deterministic() {
        assert_eq!(synthetic_name(0), synthetic_name(0));
        assert_eq!(synthetic_name(0), "Velvet Orchestra");
        assert_eq!(synthetic_name(1), "Neon Orchestra");
    }

    #[test]
    fn test_synthetic_names_unique_within_cycle() {
        let cycle = LEADS.len() * TAILS.len();
        let names: HashSet<String> = (0..cycle).map(synthetic_name).collect();
        assert_eq!(names.len(), cycle);
    }

    #[test]
    fn test_synthetic_name_suffix_past_cycle() {
        let cycle = LEADS.len() * TAILS.len();
        let wrapped = synthetic_name(cycle);
        assert!(wrapped.ends_with(" 2"), "got {}", wrapped);
    }

    #[test]
    fn test_seed_records_populates_store() {
        tokio_test::block_on(async {
            let store = MemoryRecordStore::new();

            let created = seed_records(&store, 25).await.unwrap();

            assert_eq!(created, 25);
            assert_eq!(store.len().await, 25);

            let page = store.list(0, 20).await.unwrap();
            assert_eq!(page.len(), 20);
            assert_eq!(page[0].name, synthetic_name(0));
        });
    }

    #[test]
    fn test_seed_records_zero_is_noop() {
        tokio_test::block_on(async {
            let store = MemoryRecordStore::new();

            let created = seed_records(&store, 0).await.unwrap();

            assert_eq!(created, 0);
            assert!(store.is_empty().await);
        });
    }
}
