//! Content generation with a large language model.

mod openai;

pub use openai::OpenAIGenerator;

use crate::error::Result;
use async_trait::async_trait;

/// Trait for text generation backends.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Generate text for `body` following `instruction`.
    ///
    /// Every call is a separate request to the provider; nothing is cached.
    async fn generate(&self, body: &str, instruction: &str) -> Result<String>;

    /// Model used for generation.
    fn model(&self) -> &str;
}

/// Build the single prompt sent to the model: the instruction, then the body.
pub fn build_prompt(body: &str, instruction: &str) -> String {
    let mut prompt = String::with_capacity(instruction.len() + body.len());
    prompt.push_str(instruction);
    prompt.push_str(body);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_comes_first() {
        assert_eq!(
            build_prompt(" a b", "Summarize the text below: "),
            "Summarize the text below:  a b"
        );
    }

    struct Echo;

    #[async_trait]
    impl ContentGenerator for Echo {
        async fn generate(&self, body: &str, instruction: &str) -> Result<String> {
            Ok(build_prompt(body, instruction))
        }

        fn model(&self) -> &str {
            "echo"
        }
    }

    #[test]
    fn test_generator_as_trait_object() {
        let generator: Box<dyn ContentGenerator> = Box::new(Echo);
        let out = tokio_test::block_on(generator.generate("body", "do: ")).unwrap();
        assert_eq!(out, "do: body");
        assert_eq!(generator.model(), "echo");
    }

    #[test]
    fn test_question_as_instruction() {
        // Answers use the question itself as the instruction.
        assert_eq!(build_prompt(" the talk", "What is X?"), "What is X? the talk");
    }
}
