//! Entry point used by move generation to obtain a `MagicTables` instance.
//!
//! Under the default build, tables are generated fresh via
//! `precompute::generate_magic_tables`, seeded deterministically when the
//! `deterministic_magic` feature is set (see `precompute::default_seed`).
//! The `load_magic` feature is reserved for loading a pre-baked table from a
//! bundled `bincode` blob instead of searching for magics at startup; no
//! blob ships with this crate, so it falls back to the same generation path.
//! `serialize_magic_tables`/`deserialize_magic_tables` below are the
//! encode/decode halves of that blob format.
use super::precompute::{MagicTableSeed, default_seed, generate_magic_tables};
use super::structs::MagicTables;

pub fn load_magic_tables() -> MagicTables {
    generate_magic_tables(default_seed()).expect("magic number search failed")
}

/// Builds magic tables from an explicit seed, bypassing the feature-gated default.
pub fn load_magic_tables_with_seed(seed: MagicTableSeed) -> MagicTables {
    generate_magic_tables(seed).expect("magic number search failed")
}

/// Encodes a `MagicTables` into the `bincode` blob format the `load_magic`
/// feature reads. Building magic numbers from scratch is a one-off
/// millisecond-scale search, not a hot path, but a host embedding this crate
/// into something short-lived (a WASM worker, a CLI invoked per-move) may
/// prefer to bake the search result once and ship the bytes.
pub fn serialize_magic_tables(tables: &MagicTables) -> bincode::Result<Vec<u8>> {
    bincode::serialize(tables)
}

/// Decodes a blob produced by `serialize_magic_tables`.
pub fn deserialize_magic_tables(bytes: &[u8]) -> bincode::Result<MagicTables> {
    bincode::deserialize(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::magic::precompute::MagicTableSeed;

    #[test]
    fn serialized_tables_round_trip_and_match_queries() {
        let tables = load_magic_tables_with_seed(MagicTableSeed::Fixed(7));
        let bytes = serialize_magic_tables(&tables).expect("serialize");
        let restored = deserialize_magic_tables(&bytes).expect("deserialize");

        for square in [0usize, 27, 35, 63] {
            let blockers = 0x0000_1008_0402_0000u64;
            assert_eq!(
                tables.rook.get_attacks(square, blockers),
                restored.rook.get_attacks(square, blockers)
            );
            assert_eq!(
                tables.bishop.get_attacks(square, blockers),
                restored.bishop.get_attacks(square, blockers)
            );
        }
    }
}
