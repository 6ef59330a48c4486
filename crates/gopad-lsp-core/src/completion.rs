//! Completion provider
//! Turns a classified cursor context into an ordered list of candidates

use std::ops::Range;

use crate::context::{self, CompletionContext, ContextMode};
use crate::registry::{SymbolKind, SymbolRegistry};

/// The kind of a completion candidate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompletionKind {
    Function,
    Constant,
    Variable,
    Snippet,
    Keyword,
    TypeParameter,
    Module,
}

impl CompletionKind {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            CompletionKind::Function => "function",
            CompletionKind::Constant => "constant",
            CompletionKind::Variable => "variable",
            CompletionKind::Snippet => "snippet",
            CompletionKind::Keyword => "keyword",
            CompletionKind::TypeParameter => "type",
            CompletionKind::Module => "module",
        }
    }
}

impl From<SymbolKind> for CompletionKind {
    fn from(kind: SymbolKind) -> Self {
        match kind {
            SymbolKind::Function => CompletionKind::Function,
            SymbolKind::Constant => CompletionKind::Constant,
            SymbolKind::Variable => CompletionKind::Variable,
        }
    }
}

/// One suggestion for the host editor
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionCandidate {
    pub label: String,
    pub kind: CompletionKind,
    pub insert_text: String,
    pub detail: Option<String>,
    pub range: Range<usize>,
}

impl CompletionCandidate {
    /// Whether `insert_text` holds tab-stop placeholders (`$1`, `${1}`, `${1:x}`)
    pub fn is_snippet(&self) -> bool {
        has_placeholders(&self.insert_text)
    }
}

pub fn has_placeholders(template: &str) -> bool {
    let bytes = template.as_bytes();
    bytes.windows(2).enumerate().any(|(i, pair)| {
        pair[0] == b'$'
            && (pair[1].is_ascii_digit()
                || (pair[1] == b'{' && bytes.get(i + 2).is_some_and(u8::is_ascii_digit)))
    })
}

/// Get completion candidates for a classified context.
///
/// Member access on an unknown package yields nothing; general position
/// yields snippets, keywords, types and package names, in that order.
pub fn complete(registry: &SymbolRegistry, ctx: &CompletionContext) -> Vec<CompletionCandidate> {
    match &ctx.mode {
        ContextMode::MemberAccess(package) => member_completions(registry, package, &ctx.range),
        ContextMode::General => general_completions(registry, &ctx.range),
    }
}

/// Analyze the line and complete in one step
pub fn complete_at(registry: &SymbolRegistry, line: &str, column: usize) -> Vec<CompletionCandidate> {
    complete(registry, &context::analyze(line, column))
}

fn member_completions(
    registry: &SymbolRegistry,
    package: &str,
    range: &Range<usize>,
) -> Vec<CompletionCandidate> {
    let Some(entry) = registry.lookup_package(package) else {
        return vec![];
    };

    entry
        .symbols()
        .iter()
        .map(|symbol| CompletionCandidate {
            label: symbol.label.clone(),
            kind: symbol.kind.into(),
            insert_text: symbol.insert_template.clone(),
            detail: Some(symbol.signature.clone()),
            range: range.clone(),
        })
        .collect()
}

fn general_completions(registry: &SymbolRegistry, range: &Range<usize>) -> Vec<CompletionCandidate> {
    let mut items = Vec::with_capacity(
        registry.snippets().len()
            + registry.keywords().len()
            + registry.builtin_types().len()
            + registry.packages().len(),
    );

    items.extend(registry.snippets().iter().map(|snippet| CompletionCandidate {
        label: snippet.label.clone(),
        kind: CompletionKind::Snippet,
        insert_text: snippet.insert_template.clone(),
        detail: Some(snippet.description.clone()),
        range: range.clone(),
    }));
    items.extend(
        registry
            .keywords()
            .iter()
            .map(|keyword| plain(keyword, CompletionKind::Keyword, None, range)),
    );
    items.extend(
        registry
            .builtin_types()
            .iter()
            .map(|ty| plain(ty, CompletionKind::TypeParameter, None, range)),
    );
    items.extend(registry.package_names().map(|name| {
        plain(
            name,
            CompletionKind::Module,
            Some(format!("Package {}", name)),
            range,
        )
    }));

    items
}

fn plain(
    label: &str,
    kind: CompletionKind,
    detail: Option<String>,
    range: &Range<usize>,
) -> CompletionCandidate {
    CompletionCandidate {
        label: label.to_string(),
        kind,
        insert_text: label.to_string(),
        detail,
        range: range.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::registry;

    #[test]
    fn test_member_access_lists_package_in_order() {
        let items = complete(registry(), &CompletionContext::member_access("time", 5..5));
        let labels: Vec<&str> = items.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Now", "Sleep", "Since", "Until", "Parse", "NewTicker", "NewTimer", "After",
                "Second", "Minute", "Hour",
            ]
        );
        assert_eq!(items[0].kind, CompletionKind::Function);
        assert_eq!(items[8].kind, CompletionKind::Constant);
        assert!(items.iter().all(|c| c.range == (5..5)));
    }

    #[test]
    fn test_member_access_carries_template_and_signature() {
        let items = complete_at(registry(), "fmt.", 4);
        let println = items.iter().find(|c| c.label == "Println").unwrap();
        assert_eq!(println.insert_text, "Println(${1:a})");
        assert_eq!(
            println.detail.as_deref(),
            Some("func Println(a ...interface{}) (n int, err error)")
        );
        assert!(println.is_snippet());
    }

    #[test]
    fn test_os_variables_are_last() {
        let items = complete_at(registry(), "os.", 3);
        let kinds: Vec<CompletionKind> = items.iter().map(|c| c.kind).collect();
        assert_eq!(kinds.iter().filter(|k| **k == CompletionKind::Variable).count(), 4);
        assert_eq!(kinds.last(), Some(&CompletionKind::Variable));
        let args = items.iter().find(|c| c.label == "Args").unwrap();
        assert!(!args.is_snippet());
    }

    #[test]
    fn test_unknown_package_is_empty() {
        assert!(complete_at(registry(), "doesNotExist.", 13).is_empty());
        // No fallback to general suggestions either
        assert!(complete_at(registry(), "x.", 2).is_empty());
    }

    #[test]
    fn test_general_group_order() {
        let items = complete_at(registry(), "", 0);
        let snippets = registry().snippets().len();
        let keywords = registry().keywords().len();
        let types = registry().builtin_types().len();

        assert_eq!(items.len(), snippets + keywords + types + 6);
        assert!(items[..snippets].iter().all(|c| c.kind == CompletionKind::Snippet));
        assert!(items[snippets..snippets + keywords]
            .iter()
            .all(|c| c.kind == CompletionKind::Keyword));
        assert!(items[snippets + keywords..snippets + keywords + types]
            .iter()
            .all(|c| c.kind == CompletionKind::TypeParameter));
        assert!(items[snippets + keywords + types..]
            .iter()
            .all(|c| c.kind == CompletionKind::Module));
        assert_eq!(items[0].label, "main");
        assert_eq!(items.last().map(|c| c.label.as_str()), Some("os"));
    }

    #[test]
    fn test_general_details() {
        let items = complete_at(registry(), "", 0);
        let fmt = items.iter().find(|c| c.kind == CompletionKind::Module).unwrap();
        assert_eq!(fmt.detail.as_deref(), Some("Package fmt"));
        let iferr = items.iter().find(|c| c.label == "iferr").unwrap();
        assert_eq!(iferr.detail.as_deref(), Some("Error check"));
        let keyword = items.iter().find(|c| c.kind == CompletionKind::Keyword).unwrap();
        assert_eq!(keyword.detail, None);
        assert_eq!(keyword.insert_text, keyword.label);
    }

    #[test]
    fn test_range_covers_typed_prefix() {
        let items = complete_at(registry(), "fm", 2);
        assert!(!items.is_empty());
        assert!(items.iter().all(|c| c.range == (0..2)));
    }

    #[test]
    fn test_has_placeholders() {
        assert!(has_placeholders("Print(${1:a})"));
        assert!(has_placeholders("func main() {\n\t${1}\n}"));
        assert!(has_placeholders("foo($1)"));
        assert!(!has_placeholders("Now()"));
        assert!(!has_placeholders("Second"));
        assert!(!has_placeholders("cost: $"));
        assert!(!has_placeholders("${name}"));
    }

    #[test]
    fn test_completion_kind_as_str() {
        assert_eq!(CompletionKind::Function.as_str(), "function");
        assert_eq!(CompletionKind::Snippet.as_str(), "snippet");
        assert_eq!(CompletionKind::TypeParameter.as_str(), "type");
        assert_eq!(CompletionKind::Module.as_str(), "module");
    }
}
