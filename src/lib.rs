pub mod api_connection;
pub mod catalog;
pub mod chat;
pub mod cli;
pub mod config;
pub mod recommendation;
