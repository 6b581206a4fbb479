use std::collections::HashMap;

use crate::configs::{DeviceType, OperatingSystem};
use crate::profiles::browsers::BrowserTemplate;

/// Render the final user-agent string.
///
/// Selects the desktop or mobile branch of the template by device class and
/// fills its `{name}` placeholders from the context. An OS with no template
/// defined yields an empty string, a degenerate but valid output. Unmatched
/// placeholders are left verbatim; supplying every placeholder the template
/// uses is the orchestrator's contract.
pub fn render(
    template: &BrowserTemplate,
    device: DeviceType,
    os: OperatingSystem,
    context: &HashMap<&'static str, String>,
) -> String {
    fill_placeholders(template.template_for(device, os), context)
}

/// Substitute `{name}` tokens from the context, leaving unknown tokens and
/// stray braces untouched.
pub fn fill_placeholders(template: &str, context: &HashMap<&'static str, String>) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        match after.find(['{', '}']) {
            Some(close) if after.as_bytes()[close] == b'}' && close > 0 => {
                let name = &after[..close];
                match context.get(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            _ => {
                // No well-formed token here; emit the brace as-is.
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Placeholder names appearing in a template string, in order of appearance.
/// Introspection and test helper; rendering does not use it.
pub fn extract_placeholders(template: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        match after.find(['{', '}']) {
            Some(close) if after.as_bytes()[close] == b'}' && close > 0 => {
                names.push(&after[..close]);
                rest = &after[close + 1..];
            }
            _ => rest = after,
        }
    }

    names
}
