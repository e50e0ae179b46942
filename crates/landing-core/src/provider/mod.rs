mod generate;

pub use generate::{GenerateParameters, GenerationFuture, GenerationProvider};
