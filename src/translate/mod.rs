//! Translation between Voisia conversations and the backend's provider formats.
//!
//! Builds the invocation arguments for each backend command, and normalizes the
//! provider responses back into [`message::VoisiaMessage`] and
//! [`message::TokenUsage`]. All translation functions are pure (no I/O).

pub mod anthropic_types;
pub mod message;
pub mod openai_types;
pub mod request;
pub mod response;
