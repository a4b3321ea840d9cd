pub mod client;
pub mod entity;
pub mod mailing;
pub mod message;
pub mod statistics;
