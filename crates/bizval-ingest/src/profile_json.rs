//! Loading a single profile from JSON.

use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use bizval_model::BusinessProfile;

use crate::error::{IngestError, Result};

/// Path that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Load a profile from a JSON file, or from stdin when `path` is `-`.
pub fn load_profile(path: &Path) -> Result<BusinessProfile> {
    if path.as_os_str() == STDIN_PATH {
        return load_profile_from_reader(std::io::stdin().lock(), path);
    }
    let file = std::fs::File::open(path).map_err(|e| IngestError::read(path, e))?;
    load_profile_from_reader(std::io::BufReader::new(file), path)
}

/// Load a profile from any reader; `source` is only used in errors.
pub fn load_profile_from_reader<R: Read>(mut reader: R, source: &Path) -> Result<BusinessProfile> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| IngestError::read(source, e))?;
    let profile: BusinessProfile =
        serde_json::from_str(&text).map_err(|e| IngestError::Json {
            path: PathBuf::from(source),
            source: e,
        })?;
    debug!(
        source = %source.display(),
        missing = profile.missing_fields().len(),
        "profile loaded"
    );
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use bizval_model::Industry;

    use super::*;

    #[test]
    fn reads_profile_from_reader() {
        let json = br#"{"businessName": "Acme", "industry": "tech"}"#;
        let profile = load_profile_from_reader(&json[..], Path::new("inline")).unwrap();
        assert_eq!(profile.business_name, "Acme");
        assert_eq!(profile.industry, Some(Industry::Technology));
    }

    #[test]
    fn rejects_non_object_json() {
        let err = load_profile_from_reader(&br#""just text""#[..], Path::new("inline")).unwrap_err();
        assert!(matches!(err, IngestError::Json { .. }));
        assert!(err.to_string().starts_with("failed to parse profile inline"));
    }
}
