pub mod client_service;
pub mod mailing_service;
pub(crate) mod mutation;
pub mod statistics_service;
