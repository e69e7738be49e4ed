//! GLSL assistance for shader editors: symbol tables for the language's
//! built-ins plus completion, hover, and signature help over a buffer.

pub mod config;
pub mod glsl;
pub mod lsp;

pub use config::{Config, ConfigError};
pub use glsl::{Namespace, Symbol, SymbolRegistry};
pub use lsp::completion::{Candidate, CandidateKind, CompletionProvider, Completions};
pub use lsp::document::Document;
pub use lsp::hover::{HoverInfo, HoverProvider};
pub use lsp::scan::{find_call_site, CallSite};
pub use lsp::signature::{ActiveSignature, SignatureHelpProvider};
