//! # Shared Constants
//!
//! This module provides a centralized location for constants that are shared
//! between the `nl2sql` library and the `nl2sql` binary. Using these constants
//! helps to avoid "magic strings" and ensures consistency.

/// The default path of the schema definition file, relative to the working directory.
pub const DEFAULT_SCHEMA_PATH: &str = "schema.sql";

/// The Gemini model used when none is configured.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// The base URL of the Gemini `v1beta` models API.
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Request timeout applied to the single outbound call, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// The `User-Agent` header sent with every provider request.
pub const USER_AGENT: &str = concat!("nl2sql/", env!("CARGO_PKG_VERSION"));

/// The word the model is instructed to answer with when the schema cannot answer the question.
pub const UNANSWERABLE_SENTINEL: &str = "ERROR";
