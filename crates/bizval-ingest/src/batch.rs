//! Loading many profiles from a CSV file, one profile per row.

use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use tracing::{debug, warn};

use bizval_model::{BusinessProfile, ProfileField};

use crate::error::{IngestError, Result};

/// A profile read from a batch, with its 1-based data row number.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileRecord {
    pub record: usize,
    pub profile: BusinessProfile,
}

fn normalize_header(raw: &str) -> &str {
    raw.trim().trim_matches('\u{feff}')
}

/// Read a CSV batch of profiles from disk.
pub fn read_profile_batch(path: &Path) -> Result<Vec<ProfileRecord>> {
    let file = std::fs::File::open(path).map_err(|e| IngestError::read(path, e))?;
    read_profile_batch_from_reader(file, path)
}

/// Read a CSV batch from any reader; `source` is only used in errors and logs.
///
/// Headers are matched to profile fields ignoring case and separators.
/// Unknown columns are skipped and empty cells leave the field unset.
pub fn read_profile_batch_from_reader<R: Read>(
    reader: R,
    source: &Path,
) -> Result<Vec<ProfileRecord>> {
    let csv_error = |e: csv::Error| IngestError::Csv {
        path: PathBuf::from(source),
        source: e,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let columns: Vec<Option<ProfileField>> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(|header| {
            let header = normalize_header(header);
            let field = ProfileField::from_header(header);
            if field.is_none() && !header.is_empty() {
                warn!(source = %source.display(), column = %header, "ignoring unknown column");
            }
            field
        })
        .collect();
    if columns.iter().all(Option::is_none) {
        return Err(IngestError::NoProfileColumns {
            path: PathBuf::from(source),
        });
    }

    let mut records = Vec::new();
    for (idx, row) in reader.records().enumerate() {
        let row = row.map_err(csv_error)?;
        let mut profile = BusinessProfile::default();
        for (field, cell) in columns.iter().zip(row.iter()) {
            let Some(field) = field else {
                continue;
            };
            if cell.is_empty() {
                continue;
            }
            profile.set_from_text(*field, cell);
        }
        records.push(ProfileRecord {
            record: idx + 1,
            profile,
        });
    }
    debug!(source = %source.display(), records = records.len(), "batch loaded");
    Ok(records)
}
