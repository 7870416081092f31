//! Synthetic record generation
//!
//! Produces the benchmark's data file: N records with sequential ids
//! `0..N-1`, each paired with a random 20-char lowercase-alphanumeric
//! string, a random non-negative integer, and a random double in `[0, 1)`.
//! Records are written comma-delimited, one per line, with no header row.
//!
//! # Error Handling
//!
//! Any write error aborts generation immediately; there is no retry and no
//! cleanup of a partially written file.

use crate::types::{BenchError, Record, RecordId};
use csv::WriterBuilder;
use rand::Rng;
use std::path::Path;

/// Length of the generated random string field
const STRING_LEN: usize = 20;

/// Alphabet for the random string field
///
/// No comma can appear in a field, so the data file never needs quoting.
const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Generate `count` records and write them to `path`
///
/// Ids are sequential starting at 0. The RNG is seeded from OS entropy at
/// the first call; there is no fixed seed and no reproducibility guarantee.
///
/// # Errors
///
/// Returns an error if the file cannot be created or any record fails to
/// serialize or flush.
pub fn generate(path: &Path, count: usize) -> Result<(), BenchError> {
    let mut rng = rand::rng();
    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;

    for id in 0..count {
        writer.serialize(random_record(&mut rng, id as RecordId))?;
    }

    writer.flush()?;
    Ok(())
}

/// Build one synthetic record with the given id
fn random_record<R: Rng>(rng: &mut R, id: RecordId) -> Record {
    Record {
        id,
        f1: random_string(rng, STRING_LEN),
        f2: rng.random_range(0..i64::MAX),
        f3: rng.random::<f64>(),
    }
}

/// Random lowercase-alphanumeric string of the given length
fn random_string<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}
