pub mod client;
pub mod dashboard;
pub mod hub;
pub mod notifications;
