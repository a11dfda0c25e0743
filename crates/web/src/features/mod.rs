pub mod athletes;
pub mod entries;
pub mod events;
pub mod reports;
pub mod review;
pub mod teams;
