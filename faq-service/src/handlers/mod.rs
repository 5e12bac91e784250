//! HTTP handlers for the FAQ service.

pub mod ask;
pub mod health;

pub use ask::{answer_question, ask, AskResponse, QuestionRequest};
pub use health::{health_check, not_found, readiness_check};
