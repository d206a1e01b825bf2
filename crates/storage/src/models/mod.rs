pub mod athlete;
pub mod club;
pub mod competition;
pub mod result;

pub use athlete::Athlete;
pub use club::Club;
pub use competition::Competition;
pub use result::RaceResult;
