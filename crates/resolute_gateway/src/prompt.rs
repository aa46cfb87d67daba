//! Combined-prompt assembly.

use resolute_core::GenerationOptions;

/// Builds the combined prompt for the strict gateway.
///
/// Without options the prompt carries the default JSON-only instruction;
/// with options the requested output format decides the instruction.
pub(crate) fn build_prompt(
    system_prompt: &str,
    user_prompt: &str,
    options: Option<&GenerationOptions>,
) -> String {
    match options {
        None => format!("{system_prompt}\n\nUser input: {user_prompt}\nOutput as JSON only."),
        Some(options) => {
            let instruction = match options.format() {
                Some(format) => format.instruction(),
                None => "",
            };
            format!("{system_prompt}\n\n{user_prompt}{instruction}")
        }
    }
}

/// Builds the combined prompt for the lenient gateway.
pub(crate) fn build_simple_prompt(
    system_prompt: &str,
    user_prompt: &str,
    options: &GenerationOptions,
) -> String {
    let instruction = match options.format() {
        Some(format) => format.instruction(),
        None => "",
    };
    format!("{system_prompt}\n\nUser: {user_prompt}{instruction}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use resolute_core::OutputFormat;

    #[test]
    fn default_prompt_demands_json() {
        let prompt = build_prompt("Return JSON only.", "2+2", None);
        assert_eq!(
            prompt,
            "Return JSON only.\n\nUser input: 2+2\nOutput as JSON only."
        );
    }

    #[test]
    fn options_override_instruction() {
        let options = GenerationOptions::builder()
            .format(Some(OutputFormat::Json))
            .build()
            .expect("Valid options");
        let prompt = build_prompt("system", "user", Some(&options));
        assert!(prompt.contains("Output ONLY valid JSON"));
        assert!(!prompt.contains("Output as JSON only."));
    }

    #[test]
    fn text_format_adds_no_instruction() {
        let options = GenerationOptions::builder()
            .format(Some(OutputFormat::Text))
            .build()
            .expect("Valid options");
        assert_eq!(build_prompt("system", "user", Some(&options)), "system\n\nuser");
    }

    #[test]
    fn simple_prompt_labels_user_turn() {
        let prompt = build_simple_prompt("system", "hello", &GenerationOptions::default());
        assert_eq!(prompt, "system\n\nUser: hello");
    }
}
