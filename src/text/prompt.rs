//! Prompt compiling: merges a template with the user's prompt.

/// Marker replaced by the user prompt inside a template.
pub const PROMPT_MARKER: &str = "%s";

/// Compiles `template` and `prompt` into the text sent to the model.
///
/// If the template contains [`PROMPT_MARKER`], its first occurrence is
/// replaced by `prompt`. Otherwise the template is used as a prefix, joined
/// to the prompt with a single space. An empty template has no marker, so it
/// compiles to `" " + prompt`.
///
/// The prompt is inserted verbatim; no escaping or filtering is applied, so
/// a prompt can override instructions given in the template.
#[must_use]
pub fn compile(template: &str, prompt: &str) -> String {
    if template.contains(PROMPT_MARKER) {
        template.replacen(PROMPT_MARKER, prompt, 1)
    } else {
        format!("{template} {prompt}")
    }
}
