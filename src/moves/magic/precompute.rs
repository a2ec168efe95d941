//! Builds the rook/bishop magic tables from scratch: relevant-blocker masks,
//! blocker-subset enumeration (Carry-Rippler trick), and a magic-number
//! search per square via `magic::search::find_magic_number_for_square`.
use super::attacks::{bishop_attacks_per_square, rook_attacks_per_square};
use super::search::find_magic_number_for_square;
use super::structs::{BishopMagicTables, MagicEntry, MagicTables, RookMagicTables};
use rand::{RngCore, SeedableRng, rngs::StdRng};

#[cfg(feature = "deterministic_magic")]
const MAGIC_SEED: u64 = 0xC0FF_EE00_D15E_A5E5;

/// Where the magic-number search gets its randomness from.
pub enum MagicTableSeed {
    /// A fixed seed, for reproducible tables across runs (tests, CI).
    Fixed(u64),
    /// OS-seeded randomness.
    FromOsRng,
}

impl MagicTableSeed {
    fn into_rng(self) -> StdRng {
        match self {
            MagicTableSeed::Fixed(seed) => StdRng::seed_from_u64(seed),
            MagicTableSeed::FromOsRng => {
                let mut seed = [0u8; 32];
                rand::rng().fill_bytes(&mut seed);
                StdRng::from_seed(seed)
            }
        }
    }
}

/// Default seed policy for the crate: fixed under `deterministic_magic`, else OS-seeded.
pub fn default_seed() -> MagicTableSeed {
    #[cfg(feature = "deterministic_magic")]
    {
        MagicTableSeed::Fixed(MAGIC_SEED)
    }
    #[cfg(not(feature = "deterministic_magic"))]
    {
        MagicTableSeed::FromOsRng
    }
}

const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (-1, -1), (1, -1), (-1, 1)];

/// Relevant-blocker mask for a sliding piece on `square`: the attack rays on
/// an empty board, with edge squares trimmed off (a blocker sitting on the
/// edge can never block further, so it need not vary the index).
fn relevant_mask(square: usize, dirs: [(i8, i8); 4]) -> u64 {
    let rank = (square / 8) as i8;
    let file = (square % 8) as i8;
    let mut mask = 0u64;
    for &(dr, df) in &dirs {
        let mut r = rank + dr;
        let mut f = file + df;
        while (1..7).contains(&r) && (1..7).contains(&f) {
            mask |= 1u64 << (r * 8 + f);
            r += dr;
            f += df;
        }
    }
    mask
}

/// Enumerates every subset of `mask`'s set bits via the Carry-Rippler trick.
fn blocker_subsets(mask: u64) -> Vec<u64> {
    let mut subsets = Vec::with_capacity(1 << mask.count_ones());
    let mut subset: u64 = 0;
    loop {
        subsets.push(subset);
        if subset == mask {
            break;
        }
        subset = subset.wrapping_sub(mask) & mask;
    }
    subsets
}

fn build_entries(
    dirs: [(i8, i8); 4],
    attacks_fn: fn(usize, u64) -> u64,
    rng: &mut StdRng,
) -> Result<Vec<MagicEntry>, String> {
    let mut entries = Vec::with_capacity(64);
    for square in 0..64 {
        let mask = relevant_mask(square, dirs);
        let bits = mask.count_ones();
        let shift = 64 - bits;

        let subsets = blocker_subsets(mask);
        let attacks: Vec<u64> = subsets
            .iter()
            .map(|&blockers| attacks_fn(square, blockers))
            .collect();

        let magic = find_magic_number_for_square(&subsets, &attacks, shift, rng)
            .map_err(|e| format!("square {square}: {e}"))?;

        let mut table = vec![0u64; 1 << bits];
        for (&blockers, &attack) in subsets.iter().zip(attacks.iter()) {
            let index = ((blockers.wrapping_mul(magic)) >> shift) as usize;
            table[index] = attack;
        }

        entries.push(MagicEntry {
            magic,
            shift,
            mask,
            table: table.into_boxed_slice(),
        });
    }
    Ok(entries)
}

/// Generates both rook and bishop magic tables from scratch.
pub fn generate_magic_tables(seed: MagicTableSeed) -> Result<MagicTables, String> {
    let mut rng = seed.into_rng();
    let rook = RookMagicTables {
        entries: build_entries(ROOK_DIRS, rook_attacks_per_square, &mut rng)?,
    };
    let bishop = BishopMagicTables {
        entries: build_entries(BISHOP_DIRS, bishop_attacks_per_square, &mut rng)?,
    };
    Ok(MagicTables { rook, bishop })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocker_subset_count_matches_popcount() {
        let mask = 0b1011u64;
        let subsets = blocker_subsets(mask);
        assert_eq!(subsets.len(), 1 << mask.count_ones());
    }

    #[test]
    fn generated_rook_table_matches_scan_for_d4() {
        let tables = generate_magic_tables(MagicTableSeed::Fixed(1)).unwrap();
        let d4 = 27;
        let blockers = (1u64 << 19) | (1u64 << 35);
        let expected = rook_attacks_per_square(d4, blockers);
        assert_eq!(tables.rook.get_attacks(d4, blockers), expected);
    }
}
