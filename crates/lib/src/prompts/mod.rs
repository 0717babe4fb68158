//! # Prompt Templates
//!
//! Prompt constants live in sub-modules; this module renders them. Rendering only
//! knows a fixed set of named placeholders and substitutes them in a single pass, so
//! a substituted value is never interpreted as a template itself.

pub mod summary;

use crate::platform::Platform;
pub use summary::{SUMMARY_PROMPT, TAG_GENERATION_PROMPT};

/// Values for the placeholders understood by `render_template`.
#[derive(Debug, Clone, Copy)]
pub struct PromptVars<'a> {
    /// Replaces `{video_url}`.
    pub video_url: &'a str,
    /// Replaces `{current_date}`.
    pub current_date: &'a str,
    /// Replaces `{platform}`.
    pub platform: Platform,
}

impl PromptVars<'_> {
    fn lookup(&self, name: &str) -> Option<&str> {
        match name {
            "video_url" => Some(self.video_url),
            "current_date" => Some(self.current_date),
            "platform" => Some(self.platform.as_str()),
            _ => None,
        }
    }
}

/// Renders `template`, replacing every known `{name}` placeholder.
///
/// Unknown brace groups (for example `{Main Categories}` inside a mermaid chart)
/// are copied through unchanged.
pub fn render_template(template: &str, vars: &PromptVars) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        rendered.push_str(&rest[..start]);
        let tail = &rest[start..];
        let placeholder = tail
            .find('}')
            .and_then(|end| vars.lookup(&tail[1..end]).map(|value| (end, value)));

        match placeholder {
            Some((end, value)) => {
                rendered.push_str(value);
                rest = &tail[end + 1..];
            }
            None => {
                rendered.push('{');
                rest = &tail[1..];
            }
        }
    }

    rendered.push_str(rest);
    rendered
}

/// Builds the full prompt sent to the model: the tag instructions followed by the
/// rendered summary template.
pub fn build_prompt(vars: &PromptVars) -> String {
    let mut prompt = String::from(TAG_GENERATION_PROMPT);
    prompt.push_str(&render_template(SUMMARY_PROMPT, vars));
    prompt
}
