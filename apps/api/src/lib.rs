pub mod auth;
pub mod client;
pub mod config;
pub mod db;
pub mod errors;
pub mod extract;
pub mod jobs;
pub mod llm_client;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;

#[cfg(test)]
mod test_support;
