// Shared prompt fragments used across modules that call the LLM.
// Each module keeps its own prompts.rs next to the code that fills them in.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Appended to every system prompt: the response is inserted into the document as-is.
pub const VERBATIM_OUTPUT_INSTRUCTION: &str = "\
    Your response is inserted directly into the user's document. \
    Respond with the requested text only. \
    Do NOT add a preamble, a title, quotation marks, or any explanation.";

/// Honesty constraint shared by every writing prompt.
pub const NO_FABRICATION_INSTRUCTION: &str = "\
    Only use facts present in the provided content and profile. \
    Never invent employers, titles, dates, or numbers. \
    Where a metric would help but none is given, phrase the achievement without one.";

static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([a-z_]+)\}").expect("static placeholder regex"));

/// Fills `{name}` placeholders in one pass over the template. Substituted values are
/// never rescanned, so braces inside user text stay literal. Unknown placeholders are
/// left as they are.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures| {
            values
                .iter()
                .find(|(name, _)| *name == &caps[1])
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_template_substitutes_each_placeholder() {
        let filled = fill_template("{a} and {b}", &[("a", "one"), ("b", "two")]);
        assert_eq!(filled, "one and two");
    }

    #[test]
    fn test_fill_template_does_not_rescan_values() {
        let filled = fill_template(
            "{first} / {second}",
            &[("first", "{second}"), ("second", "B")],
        );
        assert_eq!(filled, "{second} / B");
    }

    #[test]
    fn test_fill_template_keeps_unknown_placeholders() {
        assert_eq!(fill_template("{missing}", &[]), "{missing}");
    }
}
