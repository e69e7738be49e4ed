//! Signature help: overloads of the enclosing call and the active argument.

use std::sync::Arc;

use tower_lsp::lsp_types::{
    Documentation, MarkupContent, MarkupKind, ParameterInformation, ParameterLabel, Position,
    SignatureHelp, SignatureInformation,
};

use crate::glsl::{FunctionDescriptor, SymbolRegistry};

use super::document::Document;
use super::scan::{find_call_site, DEFAULT_LOOKBACK_LINES};

/// Signature help for one cursor position.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveSignature<'a> {
    pub function: &'a FunctionDescriptor,
    pub active_signature: usize,
    pub active_parameter: u32,
}

impl ActiveSignature<'_> {
    pub fn to_lsp(&self) -> SignatureHelp {
        let f = self.function;
        let signatures = f
            .signatures
            .iter()
            .map(|sig| SignatureInformation {
                label: sig.label.clone(),
                documentation: Some(Documentation::MarkupContent(MarkupContent {
                    kind: MarkupKind::Markdown,
                    value: f.description.clone(),
                })),
                parameters: Some(
                    sig.parameters
                        .iter()
                        .map(|p| ParameterInformation {
                            label: ParameterLabel::Simple(p.label.clone()),
                            documentation: p.documentation.clone().map(Documentation::String),
                        })
                        .collect(),
                ),
                active_parameter: None,
            })
            .collect();

        SignatureHelp {
            signatures,
            active_signature: Some(self.active_signature as u32),
            active_parameter: Some(self.active_parameter),
        }
    }
}

/// The first overload with more than `active_parameter` parameters, or
/// overload 0 when none is long enough. Argument types are not checked.
pub fn select_overload(function: &FunctionDescriptor, active_parameter: u32) -> usize {
    function
        .signatures
        .iter()
        .position(|s| s.parameters.len() > active_parameter as usize)
        .unwrap_or(0)
}

pub struct SignatureHelpProvider {
    registry: Arc<SymbolRegistry>,
    lookback_lines: u32,
}

impl SignatureHelpProvider {
    pub fn new(registry: Arc<SymbolRegistry>) -> Self {
        Self::with_lookback(registry, DEFAULT_LOOKBACK_LINES)
    }

    pub fn with_lookback(registry: Arc<SymbolRegistry>, lookback_lines: u32) -> Self {
        Self {
            registry,
            lookback_lines,
        }
    }

    pub fn signature_help(&self, doc: &Document, pos: Position) -> Option<ActiveSignature<'_>> {
        let call = find_call_site(doc, pos, self.lookback_lines)?;
        let function = self.registry.function(&call.function)?;
        Some(ActiveSignature {
            function,
            active_signature: select_overload(function, call.active_parameter),
            active_parameter: call.active_parameter,
        })
    }
}
