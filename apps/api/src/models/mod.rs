pub mod account;
pub mod job;
