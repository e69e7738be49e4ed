//! Symbol tables plus their name indices.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use super::{
    functions, keywords, types, variables, BuiltinVariableDescriptor, FunctionDescriptor,
    KeywordDescriptor, Namespace, SnippetDescriptor, Symbol, TypeDescriptor, UniformDescriptor,
};

/// Immutable symbol database. Construct once, then share by reference.
///
/// Each namespace keeps its table in declaration order next to a
/// `name -> position` index. A duplicate name within one namespace
/// overwrites the earlier index entry; the table still holds both.
#[derive(Debug)]
pub struct SymbolRegistry {
    functions: Vec<FunctionDescriptor>,
    types: Vec<TypeDescriptor>,
    builtins: Vec<BuiltinVariableDescriptor>,
    uniforms: Vec<UniformDescriptor>,
    keywords: Vec<KeywordDescriptor>,
    snippets: Vec<SnippetDescriptor>,

    function_index: HashMap<String, usize>,
    type_index: HashMap<String, usize>,
    builtin_index: HashMap<String, usize>,
    uniform_index: HashMap<String, usize>,
    keyword_index: HashMap<String, usize>,
    snippet_index: HashMap<String, usize>,
}

fn build_index<T>(items: &[T], key: impl Fn(&T) -> &str) -> HashMap<String, usize> {
    let mut index = HashMap::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        index.insert(key(item).to_string(), i);
    }
    index
}

impl Default for SymbolRegistry {
    fn default() -> Self {
        Self::with_uniforms(Vec::new())
    }
}

impl SymbolRegistry {
    /// The process-wide registry of the built-in tables.
    pub fn builtin() -> Arc<SymbolRegistry> {
        static REGISTRY: OnceLock<Arc<SymbolRegistry>> = OnceLock::new();
        REGISTRY
            .get_or_init(|| Arc::new(SymbolRegistry::default()))
            .clone()
    }

    /// Built-in tables with project uniforms appended to the uniform
    /// namespace.
    pub fn with_uniforms(extra: impl IntoIterator<Item = UniformDescriptor>) -> Self {
        let mut uniforms = variables::uniforms();
        uniforms.extend(extra);
        Self::from_tables(
            functions::functions(),
            types::types(),
            variables::builtin_variables(),
            uniforms,
            keywords::keywords(),
            keywords::snippets(),
        )
    }

    fn from_tables(
        functions: Vec<FunctionDescriptor>,
        types: Vec<TypeDescriptor>,
        builtins: Vec<BuiltinVariableDescriptor>,
        uniforms: Vec<UniformDescriptor>,
        keywords: Vec<KeywordDescriptor>,
        snippets: Vec<SnippetDescriptor>,
    ) -> Self {
        let function_index = build_index(&functions, |f| f.name.as_str());
        let type_index = build_index(&types, |t| t.name.as_str());
        let builtin_index = build_index(&builtins, |v| v.name.as_str());
        let uniform_index = build_index(&uniforms, |u| u.name.as_str());
        let keyword_index = build_index(&keywords, |k| k.name.as_str());
        let snippet_index = build_index(&snippets, |s| s.label.as_str());
        log::debug!(
            "symbol registry: {} functions, {} types, {} builtins, {} uniforms, {} keywords, {} snippets",
            functions.len(),
            types.len(),
            builtins.len(),
            uniforms.len(),
            keywords.len(),
            snippets.len()
        );
        Self {
            functions,
            types,
            builtins,
            uniforms,
            keywords,
            snippets,
            function_index,
            type_index,
            builtin_index,
            uniform_index,
            keyword_index,
            snippet_index,
        }
    }

    pub fn functions(&self) -> &[FunctionDescriptor] {
        &self.functions
    }

    pub fn types(&self) -> &[TypeDescriptor] {
        &self.types
    }

    pub fn builtin_variables(&self) -> &[BuiltinVariableDescriptor] {
        &self.builtins
    }

    pub fn uniforms(&self) -> &[UniformDescriptor] {
        &self.uniforms
    }

    pub fn keywords(&self) -> &[KeywordDescriptor] {
        &self.keywords
    }

    pub fn snippets(&self) -> &[SnippetDescriptor] {
        &self.snippets
    }

    pub fn function(&self, name: &str) -> Option<&FunctionDescriptor> {
        self.function_index.get(name).map(|&i| &self.functions[i])
    }

    pub fn type_(&self, name: &str) -> Option<&TypeDescriptor> {
        self.type_index.get(name).map(|&i| &self.types[i])
    }

    pub fn builtin_variable(&self, name: &str) -> Option<&BuiltinVariableDescriptor> {
        self.builtin_index.get(name).map(|&i| &self.builtins[i])
    }

    pub fn uniform(&self, name: &str) -> Option<&UniformDescriptor> {
        self.uniform_index.get(name).map(|&i| &self.uniforms[i])
    }

    pub fn keyword(&self, name: &str) -> Option<&KeywordDescriptor> {
        self.keyword_index.get(name).map(|&i| &self.keywords[i])
    }

    pub fn snippet(&self, label: &str) -> Option<&SnippetDescriptor> {
        self.snippet_index.get(label).map(|&i| &self.snippets[i])
    }

    /// Point lookup in a single namespace.
    pub fn lookup(&self, namespace: Namespace, name: &str) -> Option<Symbol<'_>> {
        match namespace {
            Namespace::Function => self.function(name).map(Symbol::Function),
            Namespace::Type => self.type_(name).map(Symbol::Type),
            Namespace::BuiltinVariable => self.builtin_variable(name).map(Symbol::BuiltinVariable),
            Namespace::Uniform => self.uniform(name).map(Symbol::Uniform),
            Namespace::Keyword => self.keyword(name).map(Symbol::Keyword),
            Namespace::Snippet => self.snippet(name).map(Symbol::Snippet),
        }
    }

    /// Resolve an identifier the way hover does: function, built-in
    /// variable, uniform, type, keyword. The first namespace that has the
    /// name wins.
    pub fn resolve(&self, name: &str) -> Option<Symbol<'_>> {
        Namespace::HOVER_PRECEDENCE
            .iter()
            .find_map(|&ns| self.lookup(ns, name))
    }

    /// Every descriptor of one namespace, in table order.
    pub fn namespace(&self, namespace: Namespace) -> Vec<Symbol<'_>> {
        match namespace {
            Namespace::Function => self.functions.iter().map(Symbol::Function).collect(),
            Namespace::Type => self.types.iter().map(Symbol::Type).collect(),
            Namespace::BuiltinVariable => {
                self.builtins.iter().map(Symbol::BuiltinVariable).collect()
            }
            Namespace::Uniform => self.uniforms.iter().map(Symbol::Uniform).collect(),
            Namespace::Keyword => self.keywords.iter().map(Symbol::Keyword).collect(),
            Namespace::Snippet => self.snippets.iter().map(Symbol::Snippet).collect(),
        }
    }

    /// Every descriptor, namespace by namespace in [`Namespace::ALL`] order.
    pub fn symbols(&self) -> Vec<Symbol<'_>> {
        Namespace::ALL
            .iter()
            .flat_map(|&ns| self.namespace(ns))
            .collect()
    }
}
