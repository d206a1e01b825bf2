pub mod views;

pub use views::{ViewBuilder, filter_club_roster, filter_competitions, top_club};
