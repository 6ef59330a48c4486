//! Symbol registry: the read-only catalog of known packages, keywords,
//! built-in types and snippets.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::stdlib;

/// The kind of a package member
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Function,
    Constant,
    Variable,
}

impl SymbolKind {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolKind::Function => "function",
            SymbolKind::Constant => "constant",
            SymbolKind::Variable => "variable",
        }
    }
}

/// One callable or named value exported by a package
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolEntry {
    pub label: String,
    pub insert_template: String,
    pub signature: String,
    pub kind: SymbolKind,
}

impl SymbolEntry {
    pub fn function(label: &str, insert_template: &str, signature: &str) -> Self {
        Self::new(label, insert_template, signature, SymbolKind::Function)
    }

    pub fn constant(label: &str, insert_template: &str, signature: &str) -> Self {
        Self::new(label, insert_template, signature, SymbolKind::Constant)
    }

    pub fn variable(label: &str, insert_template: &str, signature: &str) -> Self {
        Self::new(label, insert_template, signature, SymbolKind::Variable)
    }

    fn new(label: &str, insert_template: &str, signature: &str, kind: SymbolKind) -> Self {
        Self {
            label: label.to_string(),
            insert_template: insert_template.to_string(),
            signature: signature.to_string(),
            kind,
        }
    }
}

/// A named package and its members.
///
/// Members are kept functions first, then constants, then variables,
/// regardless of the order they were supplied in.
#[derive(Clone, Debug)]
pub struct PackageEntry {
    name: String,
    symbols: Vec<SymbolEntry>,
}

impl PackageEntry {
    pub fn new(name: &str, symbols: Vec<SymbolEntry>) -> Self {
        let mut symbols = symbols;
        // Stable, so insertion order survives inside each kind
        symbols.sort_by_key(|s| match s.kind {
            SymbolKind::Function => 0,
            SymbolKind::Constant => 1,
            SymbolKind::Variable => 2,
        });
        Self {
            name: name.to_string(),
            symbols,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// All members in registry order
    pub fn symbols(&self) -> &[SymbolEntry] {
        &self.symbols
    }

    pub fn functions(&self) -> impl Iterator<Item = &SymbolEntry> {
        self.of_kind(SymbolKind::Function)
    }

    pub fn constants(&self) -> impl Iterator<Item = &SymbolEntry> {
        self.of_kind(SymbolKind::Constant)
    }

    pub fn variables(&self) -> impl Iterator<Item = &SymbolEntry> {
        self.of_kind(SymbolKind::Variable)
    }

    pub fn get(&self, label: &str) -> Option<&SymbolEntry> {
        self.symbols.iter().find(|s| s.label == label)
    }

    fn of_kind(&self, kind: SymbolKind) -> impl Iterator<Item = &SymbolEntry> {
        self.symbols.iter().filter(move |s| s.kind == kind)
    }
}

/// A reusable code template offered in general position
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snippet {
    pub label: String,
    pub insert_template: String,
    pub description: String,
}

impl Snippet {
    pub fn new(label: &str, insert_template: &str, description: &str) -> Self {
        Self {
            label: label.to_string(),
            insert_template: insert_template.to_string(),
            description: description.to_string(),
        }
    }
}

/// Immutable knowledge base shared by the completion and hover providers.
///
/// Package names, keywords and types are answered in the order they were
/// registered. Lookups of unknown names return `None`/`false`, never an error.
#[derive(Debug)]
pub struct SymbolRegistry {
    packages: Vec<PackageEntry>,
    index: HashMap<String, usize>,
    keywords: Vec<String>,
    builtin_types: Vec<String>,
    snippets: Vec<Snippet>,
}

impl SymbolRegistry {
    /// Build a registry. A package whose name was already registered is
    /// dropped, so package names stay unique.
    pub fn new(
        packages: Vec<PackageEntry>,
        keywords: &[&str],
        builtin_types: &[&str],
        snippets: Vec<Snippet>,
    ) -> Self {
        let mut kept = Vec::with_capacity(packages.len());
        let mut index = HashMap::with_capacity(packages.len());

        for package in packages {
            if index.contains_key(package.name()) {
                continue;
            }
            index.insert(package.name().to_string(), kept.len());
            kept.push(package);
        }

        Self {
            packages: kept,
            index,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            builtin_types: builtin_types.iter().map(|t| t.to_string()).collect(),
            snippets,
        }
    }

    /// The Go standard library subset known to the editor
    pub fn go_stdlib() -> Self {
        Self::new(
            stdlib::build_packages(),
            stdlib::KEYWORDS,
            stdlib::BUILTIN_TYPES,
            stdlib::build_snippets(),
        )
    }

    pub fn lookup_package(&self, name: &str) -> Option<&PackageEntry> {
        self.index.get(name).map(|&i| &self.packages[i])
    }

    pub fn packages(&self) -> &[PackageEntry] {
        &self.packages
    }

    pub fn package_names(&self) -> impl Iterator<Item = &str> {
        self.packages.iter().map(|p| p.name())
    }

    pub fn is_keyword(&self, name: &str) -> bool {
        self.keywords.iter().any(|k| k == name)
    }

    pub fn is_builtin_type(&self, name: &str) -> bool {
        self.builtin_types.iter().any(|t| t == name)
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn builtin_types(&self) -> &[String] {
        &self.builtin_types
    }

    pub fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }

    /// First function with this label, scanning packages in registry order
    pub fn find_function(&self, label: &str) -> Option<(&PackageEntry, &SymbolEntry)> {
        self.packages
            .iter()
            .find_map(|p| p.functions().find(|f| f.label == label).map(|f| (p, f)))
    }
}

/// Go standard library registry, built on first use
pub static GO_REGISTRY: Lazy<SymbolRegistry> = Lazy::new(SymbolRegistry::go_stdlib);

/// Get the process-wide registry
pub fn registry() -> &'static SymbolRegistry {
    &GO_REGISTRY
}
