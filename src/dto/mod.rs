pub mod client_dto;
pub mod mailing_dto;
pub mod statistics_dto;
