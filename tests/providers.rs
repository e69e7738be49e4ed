use std::sync::Arc;

use tower_lsp::lsp_types::{CompletionTextEdit, Position};

use shaderlab::lsp::Intelligence;
use shaderlab::{
    find_call_site, CandidateKind, CompletionProvider, Config, Document, HoverProvider, Namespace,
    SignatureHelpProvider, SymbolRegistry,
};

const PLASMA: &str = r#"#version 300 es
precision highp float;

uniform float u_time;
uniform vec2 u_resolution;
out vec4 fragColor;

void main() {
    vec2 uv = gl_FragCoord.xy / u_resolution;
    float v = sin(uv.x * 10.0 + u_time);
    vec3 col = mix(
        vec3(0.1, 0.2, 0.4),
        vec3(clamp(v, 0.0, 1.0)),
        smoothstep(0.0, 1.0,
    fragColor = vec4(col, 1.0);
}
"#;

/// Position of the first occurrence of `needle` on `line`, offset by `delta`.
fn at(doc: &Document, line: u32, needle: &str, delta: u32) -> Position {
    let text = doc.line(line).unwrap();
    let col = text.find(needle).unwrap() as u32;
    Position::new(line, col + delta)
}

#[test]
fn test_hover_across_a_shader() {
    let doc = Document::new(PLASMA);
    let hover = HoverProvider::new(SymbolRegistry::builtin());

    let cases = [
        (8, "gl_FragCoord", Namespace::BuiltinVariable),
        (8, "u_resolution", Namespace::Uniform),
        (9, "sin", Namespace::Function),
        (10, "vec3", Namespace::Type),
        (1, "precision", Namespace::Keyword),
    ];
    for (line, word, ns) in cases {
        let info = hover
            .hover(&doc, at(&doc, line, word, 1))
            .unwrap_or_else(|| panic!("no hover for {word}"));
        assert_eq!(info.symbol.name(), word);
        assert_eq!(info.symbol.namespace(), ns, "{word}");
    }

    // `uv` and `col` are user variables.
    assert!(hover.hover(&doc, at(&doc, 8, "uv", 1)).is_none());
    assert!(hover.hover(&doc, at(&doc, 10, "col", 1)).is_none());
}

#[test]
fn test_signature_help_through_multiline_call() {
    let doc = Document::new(PLASMA);
    let provider = SignatureHelpProvider::new(SymbolRegistry::builtin());

    // Inside the unfinished smoothstep call.
    let end = Position::new(13, doc.line(13).unwrap().len() as u32);
    let help = provider.signature_help(&doc, end).unwrap();
    assert_eq!(help.function.name, "smoothstep");
    assert_eq!(help.active_parameter, 2);

    // Start of the second mix argument.
    let help = provider.signature_help(&doc, Position::new(12, 0)).unwrap();
    assert_eq!(help.function.name, "mix");
    assert_eq!(help.active_parameter, 1);

    // Inside clamp, nested in vec3 inside mix.
    let help = provider
        .signature_help(&doc, at(&doc, 12, "0.0", 0))
        .unwrap();
    assert_eq!(help.function.name, "clamp");
    assert_eq!(help.active_parameter, 1);
}

#[test]
fn test_call_site_scan_rules() {
    let doc = Document::new("foo(a, bar(b, c), ");
    let call = find_call_site(&doc, Position::new(0, 18), 20).unwrap();
    assert_eq!((call.function.as_str(), call.active_parameter), ("foo", 2));

    let doc = Document::new("foo(a, bar(b, c)");
    let call = find_call_site(&doc, Position::new(0, 16), 20).unwrap();
    assert_eq!((call.function.as_str(), call.active_parameter), ("foo", 1));

    let doc = Document::new("foo(bar(1,2,");
    let call = find_call_site(&doc, Position::new(0, 12), 20).unwrap();
    assert_eq!((call.function.as_str(), call.active_parameter), ("bar", 2));

    let mut src = String::from("sin(\n");
    src.push_str(&"x\n".repeat(21));
    let doc = Document::new(src);
    assert!(find_call_site(&doc, Position::new(21, 1), 20).is_none());
    assert!(find_call_site(&doc, Position::new(20, 1), 20).is_some());
}

#[test]
fn test_completion_is_stable_and_round_trips() {
    let doc = Document::new(PLASMA);
    let registry = SymbolRegistry::builtin();
    let provider = CompletionProvider::new(Arc::clone(&registry));

    let pos = at(&doc, 9, "sin", 2);
    let first = provider.complete(&doc, pos);
    let second = provider.complete(&doc, Position::new(0, 0));
    assert_eq!(first.items, second.items);
    assert_eq!(first.prefix, "si");

    for c in first.items {
        let symbol = registry
            .lookup(c.kind.namespace(), &c.label)
            .unwrap_or_else(|| panic!("{} not in {}", c.label, c.kind.namespace()));
        assert_eq!(symbol.name(), c.label);
    }

    // Accepting a candidate replaces the whole `sin` token.
    let item = &first.to_completion_items()[0];
    let Some(CompletionTextEdit::Edit(edit)) = &item.text_edit else {
        panic!("expected a text edit");
    };
    assert_eq!(edit.range, at_range(&doc, 9, "sin"));
    assert_eq!(first.items[0].kind, CandidateKind::Uniform);
}

fn at_range(doc: &Document, line: u32, word: &str) -> tower_lsp::lsp_types::Range {
    let start = at(doc, line, word, 0);
    tower_lsp::lsp_types::Range::new(
        start,
        Position::new(line, start.character + word.len() as u32),
    )
}

#[test]
fn test_project_uniforms_from_discovered_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("shaderlab.toml"),
        r#"[[uniforms]]
name = "u_palette"
type = "sampler2D"
description = "Palette lookup texture."
"#,
    )
    .unwrap();
    let lesson = dir.path().join("lesson");
    std::fs::create_dir(&lesson).unwrap();

    let config = Config::discover(&lesson).unwrap();
    let intel = Intelligence::from_config(&config);

    let doc = Document::new("vec4 c = texture(u_palette, uv);");
    let info = intel.hover.hover(&doc, Position::new(0, 20)).unwrap();
    assert_eq!(info.symbol.namespace(), Namespace::Uniform);
    assert!(info.markdown.contains("Palette lookup texture."));

    let help = intel
        .signature
        .signature_help(&doc, Position::new(0, 27))
        .unwrap();
    assert_eq!(help.function.name, "texture");
    assert_eq!(help.active_parameter, 1);

    let uniforms: Vec<&str> = intel
        .completion
        .candidates()
        .iter()
        .filter(|c| c.kind == CandidateKind::Uniform)
        .map(|c| c.label.as_str())
        .collect();
    assert_eq!(uniforms.len(), 4);
    assert!(uniforms.contains(&"u_palette"));
}
