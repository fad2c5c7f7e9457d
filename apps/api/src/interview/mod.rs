// Interview preparation: AI-generated quizzes, scored attempts, and skill trends.
// All model calls go through llm_client; all database access goes through store.

pub mod analysis;
pub mod handlers;
pub mod prompts;
pub mod quiz;
pub mod results;
pub mod scoring;
pub mod stats;
pub mod store;
