//! Hover: resolve the identifier under the cursor and render its docs.

use std::sync::Arc;

use tower_lsp::lsp_types::{Hover, HoverContents, MarkupContent, MarkupKind, Position, Range};

use crate::glsl::{Symbol, SymbolRegistry};

use super::document::Document;

/// A resolved hover: the symbol, its rendered markdown, and the token
/// range the editor should highlight.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverInfo<'a> {
    pub symbol: Symbol<'a>,
    pub markdown: String,
    pub range: Range,
}

impl HoverInfo<'_> {
    pub fn to_lsp(&self) -> Hover {
        Hover {
            contents: HoverContents::Markup(MarkupContent {
                kind: MarkupKind::Markdown,
                value: self.markdown.clone(),
            }),
            range: Some(self.range),
        }
    }
}

pub struct HoverProvider {
    registry: Arc<SymbolRegistry>,
}

impl HoverProvider {
    pub fn new(registry: Arc<SymbolRegistry>) -> Self {
        Self { registry }
    }

    pub fn hover(&self, doc: &Document, pos: Position) -> Option<HoverInfo<'_>> {
        let word = doc.word_at(pos)?;
        let symbol = self.registry.resolve(&word.text)?;
        Some(HoverInfo {
            symbol,
            markdown: render_markdown(symbol),
            range: word.range,
        })
    }
}

fn code_block(code: &str) -> String {
    format!("```glsl\n{}\n```", code)
}

/// Markdown for one symbol. `resolve` never yields snippets; their arm
/// only keeps the match exhaustive.
fn render_markdown(symbol: Symbol<'_>) -> String {
    match symbol {
        Symbol::Function(f) => {
            let sigs: Vec<String> = f.signatures.iter().map(|s| code_block(&s.label)).collect();
            format!(
                "{}\n\n**{}** — {}",
                sigs.join("\n"),
                f.category,
                f.description
            )
        }
        Symbol::BuiltinVariable(v) => format!(
            "{}\n\n{}",
            code_block(&format!("{} {}", v.ty, v.name)),
            v.description
        ),
        Symbol::Uniform(u) => format!(
            "{}\n\n{}",
            code_block(&format!("uniform {} {}", u.ty, u.name)),
            u.description
        ),
        Symbol::Type(t) => t.description.clone(),
        Symbol::Keyword(k) => k.description.clone(),
        Symbol::Snippet(s) => format!("{}\n\n{}", s.description, code_block(&s.insert_text)),
    }
}
