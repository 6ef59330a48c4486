//! Hover provider
//! Short markdown documentation for identifiers known to the registry

use crate::context;
use crate::registry::SymbolRegistry;

/// Hover payload: a title block, optionally followed by a detail block
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverResult {
    pub contents: Vec<String>,
}

impl HoverResult {
    pub fn title(&self) -> &str {
        self.contents.first().map(String::as_str).unwrap_or_default()
    }
}

/// Look an identifier up: package functions first, then keywords, then
/// built-in types.
///
/// Constants and variables are not searched, so `Second` or `Args` have no
/// hover even though they are offered as completions.
pub fn hover(registry: &SymbolRegistry, identifier: &str) -> Option<HoverResult> {
    if let Some((package, function)) = registry.find_function(identifier) {
        return Some(HoverResult {
            contents: vec![
                format!("**{}.{}**", package.name(), function.label),
                function.signature.clone(),
            ],
        });
    }

    if registry.is_keyword(identifier) {
        return Some(HoverResult {
            contents: vec![format!("**{}** (keyword)", identifier)],
        });
    }

    if registry.is_builtin_type(identifier) {
        return Some(HoverResult {
            contents: vec![format!("**{}** (built-in type)", identifier)],
        });
    }

    None
}

/// Hover for the identifier touching `column` on `line`
pub fn hover_at(registry: &SymbolRegistry, line: &str, column: usize) -> Option<HoverResult> {
    let (word, _) = context::word_at(line, column)?;
    hover(registry, &word)
}
