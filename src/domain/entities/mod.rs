pub mod analytics_event;
pub mod client_metadata;
pub mod creator_role;
pub mod survey_response;
pub mod waitlist_user;
