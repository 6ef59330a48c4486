//! End-to-end behaviour of the completion and hover engine

use std::collections::HashSet;

use gopad_lsp_core::{
    analyze, complete, complete_at, hover, registry, CompletionContext, CompletionKind,
    ContextMode, SymbolKind,
};
use proptest::prelude::*;

fn expected_kind(kind: SymbolKind) -> CompletionKind {
    match kind {
        SymbolKind::Function => CompletionKind::Function,
        SymbolKind::Constant => CompletionKind::Constant,
        SymbolKind::Variable => CompletionKind::Variable,
    }
}

#[test]
fn test_member_access_matches_registry_exactly() {
    for package in registry().packages() {
        let ctx = CompletionContext::member_access(package.name(), 0..0);
        let items = complete(registry(), &ctx);

        assert_eq!(
            items.len(),
            package.symbols().len(),
            "Candidate count mismatch for {}",
            package.name()
        );

        for symbol in package.symbols() {
            let item = items
                .iter()
                .find(|c| c.label == symbol.label)
                .unwrap_or_else(|| panic!("Missing {}.{}", package.name(), symbol.label));
            assert_eq!(item.detail.as_deref(), Some(symbol.signature.as_str()));
            assert_eq!(item.kind, expected_kind(symbol.kind));
            assert_eq!(item.insert_text, symbol.insert_template);
        }
    }
}

#[test]
fn test_unknown_package_yields_nothing() {
    let ctx = CompletionContext::member_access("doesNotExist", 0..0);
    assert!(complete(registry(), &ctx).is_empty());
}

#[test]
fn test_general_lists_every_name_once_per_group() {
    let items = complete(registry(), &CompletionContext::general(0..0));

    let mut seen = HashSet::new();
    for item in &items {
        assert!(
            seen.insert((item.label.clone(), item.kind)),
            "Duplicate candidate {} ({})",
            item.label,
            item.kind.as_str()
        );
    }

    let count = |label: &str, kind: CompletionKind| {
        items
            .iter()
            .filter(|c| c.label == label && c.kind == kind)
            .count()
    };

    for keyword in registry().keywords() {
        assert_eq!(count(keyword, CompletionKind::Keyword), 1, "keyword {}", keyword);
    }
    for ty in registry().builtin_types() {
        assert_eq!(count(ty, CompletionKind::TypeParameter), 1, "type {}", ty);
    }
    for name in registry().package_names() {
        assert_eq!(count(name, CompletionKind::Module), 1, "package {}", name);
    }
    for snippet in registry().snippets() {
        assert_eq!(count(&snippet.label, CompletionKind::Snippet), 1, "snippet {}", snippet.label);
    }
}

#[test]
fn test_hover_examples() {
    let println = hover(registry(), "Println").expect("Println has hover");
    assert!(println.contents.iter().any(|block| block.contains("fmt.Println")));
    assert!(hover(registry(), "fmt").is_none());
}

#[test]
fn test_context_examples() {
    assert_eq!(
        analyze("fmt.", 4).mode,
        ContextMode::MemberAccess("fmt".to_string())
    );
    assert_eq!(analyze("x := fmt", 8).mode, ContextMode::General);
    assert_eq!(analyze("1.", 2).mode, ContextMode::General);
}

#[test]
fn test_repeated_requests_are_identical() {
    let first = complete_at(registry(), "\ttime.", 6);
    let second = complete_at(registry(), "\ttime.", 6);
    assert_eq!(first, second);

    assert_eq!(hover(registry(), "Sprintf"), hover(registry(), "Sprintf"));
}

/// Apply a candidate the way an editor does: replace `range` with `insert_text`
fn apply(line: &str, range: std::ops::Range<usize>, insert: &str) -> String {
    let chars: Vec<char> = line.chars().collect();
    let mut out: String = chars[..range.start].iter().collect();
    out.push_str(insert);
    out.extend(chars[range.end..].iter());
    out
}

#[test]
fn test_replacement_does_not_duplicate_prefix() {
    let items = complete_at(registry(), "fm", 2);
    let fmt = items
        .iter()
        .find(|c| c.label == "fmt" && c.kind == CompletionKind::Module)
        .unwrap();
    assert_eq!(fmt.range, 0..2);
    assert_eq!(apply("fm", fmt.range.clone(), &fmt.insert_text), "fmt");
}

#[test]
fn test_member_completion_applies_after_dot() {
    let line = "\tfmt.";
    let items = complete_at(registry(), line, 5);
    let item = items.iter().find(|c| c.label == "Errorf").unwrap();
    assert_eq!(
        apply(line, item.range.clone(), &item.insert_text),
        "\tfmt.Errorf(\"${1:error}: %v\", ${2:err})"
    );
}

proptest! {
    #[test]
    fn prop_analyze_never_panics(line in "\\PC{0,40}", column in 0usize..60) {
        let ctx = analyze(&line, column);
        let len = line.chars().count();
        prop_assert!(ctx.range.start <= ctx.range.end);
        prop_assert!(ctx.range.end <= len);
    }

    #[test]
    fn prop_range_is_exactly_the_typed_identifier(prefix in "[a-z ().]{0,12}", word in "[A-Za-z_][A-Za-z0-9_]{0,8}") {
        let line = format!("{} {}", prefix, word);
        let column = line.chars().count();
        let ctx = analyze(&line, column);
        prop_assert_eq!(ctx.range.end - ctx.range.start, word.chars().count());
        prop_assert_eq!(ctx.mode, ContextMode::General);
    }

    #[test]
    fn prop_identifier_dot_is_member_access(lead in "[ \t(=]{0,4}", ident in "[A-Za-z_][A-Za-z0-9_]{0,10}") {
        let line = format!("{}{}.", lead, ident);
        let ctx = analyze(&line, line.chars().count());
        prop_assert_eq!(ctx.package(), Some(ident.as_str()));
    }

    #[test]
    fn prop_number_dot_is_general(n in 0u32..100000) {
        let line = format!("x := {}.", n);
        let ctx = analyze(&line, line.chars().count());
        prop_assert_eq!(ctx.mode, ContextMode::General);
    }

    #[test]
    fn prop_complete_is_deterministic(line in "[a-z.]{0,12}", column in 0usize..14) {
        prop_assert_eq!(
            complete_at(registry(), &line, column),
            complete_at(registry(), &line, column)
        );
    }
}
