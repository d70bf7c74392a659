pub mod llm_output;
pub mod pipeline;

pub use pipeline::Pipeline;
