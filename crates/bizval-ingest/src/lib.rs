//! Profile ingestion: single JSON profiles and CSV batches.

pub mod batch;
pub mod error;
pub mod profile_json;

pub use batch::{ProfileRecord, read_profile_batch, read_profile_batch_from_reader};
pub use error::{IngestError, Result};
pub use profile_json::{STDIN_PATH, load_profile, load_profile_from_reader};
