//! Core data types for the Chronicle narrative engine.
//!
//! This crate provides the foundation data types shared by the model clients
//! and the story engine.

mod message;
mod request;
mod role;

pub use message::Message;
pub use request::{GenerateRequest, GenerateResponse};
pub use role::Role;
