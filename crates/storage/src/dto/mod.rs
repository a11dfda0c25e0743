pub mod athlete;
pub mod entry;
pub mod event;
pub mod review;
pub mod team;
