//! GLSL ES 3.0 symbol database: descriptors for functions, types,
//! built-in variables, uniforms, keywords, and snippets.
//!
//! The tables are plain data. [`registry::SymbolRegistry`] owns them and
//! builds the name indices the providers query.

mod functions;
mod keywords;
pub mod registry;
mod types;
mod variables;

use std::fmt;

use serde::Serialize;

pub use registry::SymbolRegistry;

/// One parameter of a function overload, e.g. `vec3 x`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

impl Parameter {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            documentation: None,
        }
    }
}

/// One callable shape of a function.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Signature {
    /// Display form, e.g. `vec3 mix(vec3 x, vec3 y, float a)`.
    pub label: String,
    pub parameters: Vec<Parameter>,
}

impl Signature {
    /// Build a signature from a return type, a name, and `type name`
    /// parameter labels.
    pub fn new(ret: &str, name: &str, params: &[String]) -> Self {
        Self {
            label: format!("{} {}({})", ret, name, params.join(", ")),
            parameters: params.iter().map(Parameter::new).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FunctionDescriptor {
    pub name: String,
    /// Overloads in declaration order. Never empty.
    pub signatures: Vec<Signature>,
    pub description: String,
    pub category: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TypeDescriptor {
    pub name: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BuiltinVariableDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub description: String,
}

/// A value injected by the host application, such as `u_time`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, serde::Deserialize)]
pub struct UniformDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct KeywordDescriptor {
    pub name: String,
    pub description: String,
}

/// An insertable code template. `insert_text` uses LSP snippet syntax
/// (`$0`, `${1:default}`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SnippetDescriptor {
    pub label: String,
    pub insert_text: String,
    pub description: String,
}

/// The six independent name spaces of the symbol database.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Namespace {
    Function,
    Type,
    BuiltinVariable,
    Uniform,
    Keyword,
    Snippet,
}

impl Namespace {
    pub const ALL: [Namespace; 6] = [
        Namespace::Function,
        Namespace::Type,
        Namespace::BuiltinVariable,
        Namespace::Uniform,
        Namespace::Keyword,
        Namespace::Snippet,
    ];

    /// Hover resolution order. Snippets are never hovered.
    pub const HOVER_PRECEDENCE: [Namespace; 5] = [
        Namespace::Function,
        Namespace::BuiltinVariable,
        Namespace::Uniform,
        Namespace::Type,
        Namespace::Keyword,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Namespace::Function => "function",
            Namespace::Type => "type",
            Namespace::BuiltinVariable => "builtin",
            Namespace::Uniform => "uniform",
            Namespace::Keyword => "keyword",
            Namespace::Snippet => "snippet",
        }
    }

    pub fn parse(s: &str) -> Option<Namespace> {
        match s {
            "function" | "functions" => Some(Namespace::Function),
            "type" | "types" => Some(Namespace::Type),
            "builtin" | "builtins" | "variable" => Some(Namespace::BuiltinVariable),
            "uniform" | "uniforms" => Some(Namespace::Uniform),
            "keyword" | "keywords" => Some(Namespace::Keyword),
            "snippet" | "snippets" => Some(Namespace::Snippet),
            _ => None,
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A borrowed descriptor of any kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Symbol<'a> {
    Function(&'a FunctionDescriptor),
    Type(&'a TypeDescriptor),
    BuiltinVariable(&'a BuiltinVariableDescriptor),
    Uniform(&'a UniformDescriptor),
    Keyword(&'a KeywordDescriptor),
    Snippet(&'a SnippetDescriptor),
}

impl<'a> Symbol<'a> {
    /// Name or label: the key within the symbol's namespace.
    pub fn name(&self) -> &'a str {
        match self {
            Symbol::Function(f) => &f.name,
            Symbol::Type(t) => &t.name,
            Symbol::BuiltinVariable(v) => &v.name,
            Symbol::Uniform(u) => &u.name,
            Symbol::Keyword(k) => &k.name,
            Symbol::Snippet(s) => &s.label,
        }
    }

    pub fn namespace(&self) -> Namespace {
        match self {
            Symbol::Function(_) => Namespace::Function,
            Symbol::Type(_) => Namespace::Type,
            Symbol::BuiltinVariable(_) => Namespace::BuiltinVariable,
            Symbol::Uniform(_) => Namespace::Uniform,
            Symbol::Keyword(_) => Namespace::Keyword,
            Symbol::Snippet(_) => Namespace::Snippet,
        }
    }

    pub fn description(&self) -> &'a str {
        match self {
            Symbol::Function(f) => &f.description,
            Symbol::Type(t) => &t.description,
            Symbol::BuiltinVariable(v) => &v.description,
            Symbol::Uniform(u) => &u.description,
            Symbol::Keyword(k) => &k.description,
            Symbol::Snippet(s) => &s.description,
        }
    }
}
