pub mod error;
pub mod export;
pub mod import;
pub mod records;

pub use error::{ImporterError, Result};
pub use import::{BulkImporter, ImportReport};
pub use records::{AthleteRecord, CompetitionRecord, ResultRecord};
