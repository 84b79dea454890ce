use crate::domain::LanguageCode;

/// System message for the chat backend. Extra instructions are appended verbatim.
pub fn translation_instructions(target_language: &LanguageCode, extra: Option<&str>) -> String {
    let language = target_language.display_name();
    let mut instructions = format!(
        "You are a translation engine. Translate the user's message into {language}. \
         If the message is already in {language}, just return the message as it is. \
         Keep meaning and tone. Do not add commentary."
    );

    if let Some(extra) = extra.filter(|e| !e.is_empty()) {
        instructions.push_str(" Extra instructions: ");
        instructions.push_str(extra);
    }

    instructions
}
