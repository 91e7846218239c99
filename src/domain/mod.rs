pub mod diagnostic;
pub mod llm;
pub mod session;
