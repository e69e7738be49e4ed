//! Keywords, qualifiers, and insertable snippets.

use super::{KeywordDescriptor, SnippetDescriptor};

static KEYWORDS: &[(&str, &str)] = &[
    ("if", "Conditional branching."),
    ("else", "Alternative branch for `if`."),
    ("for", "Loop with counter."),
    ("while", "Loop with condition."),
    ("do", "Do-while loop."),
    ("switch", "Multi-way branching."),
    ("case", "Branch label in a `switch` statement."),
    ("default", "Default branch in a `switch` statement."),
    ("break", "Exit the current loop or switch."),
    ("continue", "Skip to the next loop iteration."),
    ("return", "Return a value from the current function."),
    (
        "discard",
        "Discard the current fragment (fragment shader only).",
    ),
    ("const", "Compile-time constant qualifier."),
    (
        "uniform",
        "Variable set by the application, constant across a draw call.",
    ),
    ("in", "Input variable qualifier."),
    ("out", "Output variable qualifier."),
    ("inout", "Input/output parameter qualifier."),
    ("attribute", "Vertex attribute (GLSL ES 1.0 compatibility)."),
    ("varying", "Interpolated variable (GLSL ES 1.0 compatibility)."),
    ("precision", "Set the default precision for a type."),
    ("highp", "High precision qualifier."),
    ("mediump", "Medium precision qualifier."),
    ("lowp", "Low precision qualifier."),
    ("struct", "Define a composite type."),
    ("layout", "Layout qualifier for in/out variables."),
    ("flat", "Disable interpolation."),
    (
        "smooth",
        "Enable smooth (perspective-correct) interpolation.",
    ),
    ("centroid", "Centroid-based interpolation qualifier."),
    ("true", "Boolean literal `true`."),
    ("false", "Boolean literal `false`."),
];

static SNIPPETS: &[(&str, &str, &str)] = &[
    ("main", "void main() {\n\t$0\n}", "Main function template."),
    (
        "forloop",
        "for (int ${1:i} = 0; ${1:i} < ${2:10}; ${1:i}++) {\n\t$0\n}",
        "For loop.",
    ),
    (
        "uv",
        "vec2 uv = gl_FragCoord.xy / u_resolution;",
        "Normalized UV coordinates (0 to 1).",
    ),
    (
        "uv_centered",
        "vec2 uv = (gl_FragCoord.xy * 2.0 - u_resolution) / min(u_resolution.x, u_resolution.y);",
        "Centered UV coordinates (-1 to 1, aspect corrected).",
    ),
    (
        "sdf_circle",
        "float d = length(${1:p}) - ${2:0.5};",
        "SDF circle.",
    ),
    (
        "sdf_box",
        "vec2 d = abs(${1:p}) - ${2:vec2(0.5)};\nfloat sdf = length(max(d, 0.0)) + min(max(d.x, d.y), 0.0);",
        "SDF box.",
    ),
    (
        "version",
        "#version 300 es\nprecision highp float;",
        "GLSL ES 3.0 version header.",
    ),
    (
        "fragcolor",
        "out vec4 fragColor;\n\nvoid main() {\n\t$0\n\tfragColor = vec4(1.0);\n}",
        "Fragment shader output boilerplate.",
    ),
];

pub(super) fn keywords() -> Vec<KeywordDescriptor> {
    KEYWORDS
        .iter()
        .map(|(name, description)| KeywordDescriptor {
            name: name.to_string(),
            description: description.to_string(),
        })
        .collect()
}

pub(super) fn snippets() -> Vec<SnippetDescriptor> {
    SNIPPETS
        .iter()
        .map(|(label, insert_text, description)| SnippetDescriptor {
            label: label.to_string(),
            insert_text: insert_text.to_string(),
            description: description.to_string(),
        })
        .collect()
}
