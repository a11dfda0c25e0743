mod athlete;
mod audit;
mod club;
mod division;
mod enums;
mod event;
mod team;
mod user;
mod weight_class;
mod entry;

pub use athlete::Athlete;
pub use audit::AuditLog;
pub use club::Club;
pub use division::Division;
pub use enums::{EntryStatus, EntryType, Gender, TeamType, UserRole};
pub use event::Event;
pub use team::{Team, TeamMember};
pub use user::User;
pub use weight_class::WeightClass;
pub use entry::Entry;
