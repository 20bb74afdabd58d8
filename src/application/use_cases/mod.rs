pub mod analytics;
pub mod waitlist;
