//! # Prompt Template Modules
//!
//! This module organizes the prompt templates used by `nl2sql`. Templates are
//! plain constants so that changes to them show up in review and can be unit
//! tested without any network code.

pub mod core;

pub use self::core::{build_prompt, PromptPayload};
