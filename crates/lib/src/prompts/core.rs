//! # SQL Generation Prompt
//!
//! The system directive, the model acknowledgement turn, and the pure function
//! that combines them with a schema and a user question.

/// The system directive for SQL generation.
///
/// The schema is appended at the end of the directive, between the
/// `SCHEMA START` / `SCHEMA END` markers.
///
/// Placeholders: `{schema}`
pub const SQL_GENERATION_SYSTEM_PROMPT: &str = r#"Your task is to act as an expert NL-to-SQL agent.
You will be given a user's question and a database schema.
You must convert the user's question into a valid, executable SQL SELECT statement for the MySQL standard.

You must adhere to the following rules:
1. ONLY output the SQL query.
2. Use only the tables and columns defined in the schema below.
3. Do not include any explanations, comments, or conversational text in your response.
4. Do not format the output with triple backticks (```). Return only the raw SQL text.
5. If the user's question cannot be answered using the provided schema, output the single word: ERROR.

This is the database schema you will be working with:
--- SCHEMA START ---
{schema}
--- SCHEMA END ---"#;

/// The fixed model turn placed between the directive and the question.
pub const MODEL_ACKNOWLEDGEMENT: &str = "Understood. Awaiting user question.";

/// Header separating the directive from the question in the single-string rendering.
const QUESTION_HEADER: &str = "# User question";

/// A fully composed prompt, ready to be sent to an AI provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPayload {
    system_prompt: String,
    question: String,
}

impl PromptPayload {
    /// The directive with the schema substituted in.
    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// The user's question, verbatim.
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Renders the payload as one string: directive, schema, then question.
    pub fn render(&self) -> String {
        format!(
            "{}\n\n{QUESTION_HEADER}\n{}",
            self.system_prompt, self.question
        )
    }
}

/// Builds the prompt for a schema and a question.
///
/// This is a pure function: identical inputs always produce an identical payload.
/// The schema and question are embedded verbatim; placeholder-like text inside
/// them is never expanded.
pub fn build_prompt(schema: &str, question: &str) -> PromptPayload {
    PromptPayload {
        system_prompt: SQL_GENERATION_SYSTEM_PROMPT.replace("{schema}", schema),
        question: question.to_string(),
    }
}
