pub mod crew;
pub mod destination;

pub use crew::CrewDots;
pub use destination::DestinationTabs;
