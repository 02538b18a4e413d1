pub mod config; // Links src/config.rs
pub mod error; // Links src/error.rs
pub mod listener; // Links src/listener.rs
