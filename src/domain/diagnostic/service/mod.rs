pub mod diagnostic_aggregator;
pub mod prompt_composer;
