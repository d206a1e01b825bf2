//! Static reference catalogs consulted for display names and formatting
//! rules. Nothing here is ever mutated at runtime.

pub mod discipline;
pub mod region;

pub use discipline::{DISCIPLINES, Discipline, DisciplineEntry, FormatClass, Unit};
pub use region::{OTHER_REGION_ID, REGIONS, region_by_name, region_name};
