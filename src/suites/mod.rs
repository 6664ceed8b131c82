pub mod images;
pub mod links;
pub mod roster;
pub mod schedule;
