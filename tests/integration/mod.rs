//! Integration tests with mock HTTP server

pub mod mock_server;
pub mod events;
pub mod generate;
pub mod streaming;
