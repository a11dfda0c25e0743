pub mod athlete;
pub mod audit;
pub mod entry;
pub mod event;
pub mod team;
