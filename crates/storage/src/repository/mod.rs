//! Entity repositories. Every create path is idempotent: a candidate whose
//! natural-key fields match an existing row returns that row, with its id,
//! instead of inserting a duplicate.

pub mod athlete;
pub mod club;
pub mod competition;
pub mod result;

pub use athlete::AthleteRepository;
pub use club::ClubRepository;
pub use competition::CompetitionRepository;
pub use result::ResultRepository;
