//! Completion: the ranked candidate universe plus the replacement range.
//!
//! Prefix filtering is left to the editor, which does its own fuzzy
//! matching. The candidate list never depends on the buffer, so it is
//! built once per provider and reused.

use std::sync::{Arc, OnceLock};

use serde::Serialize;
use tower_lsp::lsp_types::{
    CompletionItem, CompletionItemKind, CompletionTextEdit, Documentation, InsertTextFormat,
    MarkupContent, MarkupKind, Position, Range, TextEdit,
};

use crate::glsl::{Namespace, SymbolRegistry};

use super::document::Document;

/// What a candidate inserts, in ranking order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateKind {
    /// Host-supplied uniform: ranked above everything else.
    Uniform,
    Snippet,
    Function,
    Type,
    Variable,
    Keyword,
}

impl CandidateKind {
    fn rank(self) -> u8 {
        self as u8
    }

    /// The namespace the candidate was built from.
    pub fn namespace(self) -> Namespace {
        match self {
            CandidateKind::Uniform => Namespace::Uniform,
            CandidateKind::Snippet => Namespace::Snippet,
            CandidateKind::Function => Namespace::Function,
            CandidateKind::Type => Namespace::Type,
            CandidateKind::Variable => Namespace::BuiltinVariable,
            CandidateKind::Keyword => Namespace::Keyword,
        }
    }

    fn lsp_kind(self) -> CompletionItemKind {
        match self {
            CandidateKind::Uniform => CompletionItemKind::CONSTANT,
            CandidateKind::Snippet => CompletionItemKind::SNIPPET,
            CandidateKind::Function => CompletionItemKind::FUNCTION,
            CandidateKind::Type => CompletionItemKind::CLASS,
            CandidateKind::Variable => CompletionItemKind::VARIABLE,
            CandidateKind::Keyword => CompletionItemKind::KEYWORD,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub label: String,
    pub kind: CandidateKind,
    pub detail: String,
    pub documentation: String,
    pub insert_text: String,
    /// `insert_text` carries `$n` tab stops.
    pub is_snippet: bool,
    /// `<rank>_<label>`; ascending order is display order.
    pub sort_text: String,
}

impl Candidate {
    fn new(
        kind: CandidateKind,
        label: &str,
        detail: String,
        documentation: String,
        insert_text: &str,
    ) -> Self {
        Self {
            label: label.to_string(),
            kind,
            detail,
            documentation,
            insert_text: insert_text.to_string(),
            is_snippet: kind == CandidateKind::Snippet,
            sort_text: format!("{}_{}", kind.rank(), label),
        }
    }

    /// LSP item that replaces `range` with the insertion text.
    pub fn to_completion_item(&self, range: Range) -> CompletionItem {
        CompletionItem {
            label: self.label.clone(),
            kind: Some(self.kind.lsp_kind()),
            detail: Some(self.detail.clone()),
            documentation: Some(Documentation::MarkupContent(MarkupContent {
                kind: MarkupKind::Markdown,
                value: self.documentation.clone(),
            })),
            sort_text: Some(self.sort_text.clone()),
            text_edit: Some(CompletionTextEdit::Edit(TextEdit {
                range,
                new_text: self.insert_text.clone(),
            })),
            insert_text_format: Some(if self.is_snippet {
                InsertTextFormat::SNIPPET
            } else {
                InsertTextFormat::PLAIN_TEXT
            }),
            ..Default::default()
        }
    }
}

/// Candidates for one request: the shared universe plus where to put the
/// accepted one.
#[derive(Debug)]
pub struct Completions<'a> {
    pub items: &'a [Candidate],
    /// Identifier text before the cursor.
    pub prefix: String,
    pub range: Range,
}

impl<'a> Completions<'a> {
    pub fn to_completion_items(&self) -> Vec<CompletionItem> {
        self.items
            .iter()
            .map(|c| c.to_completion_item(self.range))
            .collect()
    }

    /// Candidates whose label contains the prefix, ignoring case.
    pub fn matching_prefix(&self) -> impl Iterator<Item = &'a Candidate> {
        let needle = self.prefix.to_ascii_lowercase();
        self.items
            .iter()
            .filter(move |c| c.label.to_ascii_lowercase().contains(&needle))
    }
}

pub struct CompletionProvider {
    registry: Arc<SymbolRegistry>,
    cache: OnceLock<Vec<Candidate>>,
}

impl CompletionProvider {
    pub fn new(registry: Arc<SymbolRegistry>) -> Self {
        Self {
            registry,
            cache: OnceLock::new(),
        }
    }

    /// The full candidate list, sorted by `sort_text`. Built on first use.
    pub fn candidates(&self) -> &[Candidate] {
        self.cache.get_or_init(|| {
            let items = build_candidates(&self.registry);
            log::debug!("built {} completion candidates", items.len());
            items
        })
    }

    pub fn complete(&self, doc: &Document, pos: Position) -> Completions<'_> {
        Completions {
            items: self.candidates(),
            prefix: doc.word_until(pos).text,
            range: doc.completion_range(pos),
        }
    }
}

fn build_candidates(registry: &SymbolRegistry) -> Vec<Candidate> {
    let mut items = Vec::new();

    for f in registry.functions() {
        let detail = f
            .signatures
            .first()
            .map(|s| s.label.clone())
            .unwrap_or_default();
        items.push(Candidate::new(
            CandidateKind::Function,
            &f.name,
            detail,
            format!("**{}** — {}", f.category, f.description),
            &f.name,
        ));
    }

    for t in registry.types() {
        items.push(Candidate::new(
            CandidateKind::Type,
            &t.name,
            t.name.clone(),
            t.description.clone(),
            &t.name,
        ));
    }

    for v in registry.builtin_variables() {
        items.push(Candidate::new(
            CandidateKind::Variable,
            &v.name,
            v.ty.clone(),
            v.description.clone(),
            &v.name,
        ));
    }

    for u in registry.uniforms() {
        items.push(Candidate::new(
            CandidateKind::Uniform,
            &u.name,
            format!("uniform {}", u.ty),
            u.description.clone(),
            &u.name,
        ));
    }

    for k in registry.keywords() {
        items.push(Candidate::new(
            CandidateKind::Keyword,
            &k.name,
            "keyword".to_string(),
            k.description.clone(),
            &k.name,
        ));
    }

    for s in registry.snippets() {
        items.push(Candidate::new(
            CandidateKind::Snippet,
            &s.label,
            s.description.clone(),
            s.description.clone(),
            &s.insert_text,
        ));
    }

    items.sort_by(|a, b| a.sort_text.cmp(&b.sort_text));
    items
}
