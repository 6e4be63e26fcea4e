pub mod nav_key;

pub use nav_key::NavKey;
