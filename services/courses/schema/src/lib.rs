pub mod courses;
pub mod merges;
pub mod notifications;
pub mod users;
pub mod votes;
