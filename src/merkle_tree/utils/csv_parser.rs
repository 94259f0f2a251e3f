use num_bigint::BigUint;
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

use crate::merkle_tree::utils::parse_big_uint;
use crate::merkle_tree::MerkleError;

#[derive(Debug, Deserialize)]
struct CsvEntry {
    value: String,
}

/// Reads the committed values, in order, from the `value` column of a CSV file.
/// Values are decimal or `0x`-prefixed hex.
pub fn parse_csv_to_values<P: AsRef<Path>>(path: P) -> Result<Vec<BigUint>, MerkleError> {
    let mut values = Vec::new();
    let file = File::open(path)?;
    let mut rdr = csv::Reader::from_reader(file);

    for result in rdr.deserialize() {
        let record: CsvEntry = result?;
        values.push(parse_big_uint(&record.value)?);
    }

    Ok(values)
}
