// Career matching: skill vector + interests → ranked careers with attribution.

pub mod handlers;
pub mod matcher;

pub use matcher::CareerMatcher;
