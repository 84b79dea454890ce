mod chat_completions_translator;
mod translation_instructions;

pub use chat_completions_translator::ChatCompletionsTranslator;
pub use translation_instructions::translation_instructions;
