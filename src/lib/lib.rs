pub mod chat;
pub mod coffee_chat;
pub mod notifications;
pub mod schedule;
