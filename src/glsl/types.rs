//! Scalar, vector, matrix, and sampler type table.

use super::TypeDescriptor;

const SCALARS: [&str; 5] = ["void", "bool", "int", "uint", "float"];

const VECTORS: [&str; 12] = [
    "vec2", "vec3", "vec4", "ivec2", "ivec3", "ivec4", "uvec2", "uvec3", "uvec4", "bvec2", "bvec3",
    "bvec4",
];

const MATRICES: [&str; 12] = [
    "mat2", "mat3", "mat4", "mat2x2", "mat2x3", "mat2x4", "mat3x2", "mat3x3", "mat3x4", "mat4x2",
    "mat4x3", "mat4x4",
];

const SAMPLERS: [&str; 15] = [
    "sampler2D",
    "sampler3D",
    "samplerCube",
    "sampler2DShadow",
    "samplerCubeShadow",
    "sampler2DArray",
    "sampler2DArrayShadow",
    "isampler2D",
    "isampler3D",
    "isamplerCube",
    "isampler2DArray",
    "usampler2D",
    "usampler3D",
    "usamplerCube",
    "usampler2DArray",
];

pub(super) fn types() -> Vec<TypeDescriptor> {
    SCALARS
        .iter()
        .chain(&VECTORS)
        .chain(&MATRICES)
        .chain(&SAMPLERS)
        .map(|name| TypeDescriptor {
            name: name.to_string(),
            description: describe_type(name),
        })
        .collect()
}

/// Generate the one-line description for a type name.
fn describe_type(name: &str) -> String {
    if SCALARS.contains(&name) {
        return format!("GLSL scalar type `{}`.", name);
    }
    let vector = [
        ("bvec", "boolean vector"),
        ("ivec", "integer vector"),
        ("uvec", "unsigned integer vector"),
        ("vec", "float vector"),
    ];
    for (prefix, what) in vector {
        if let Some(n) = name.strip_prefix(prefix) {
            return format!("GLSL {}-component {}.", n, what);
        }
    }
    if let Some(dims) = name.strip_prefix("mat") {
        return match dims.split_once('x') {
            Some((cols, rows)) => format!("GLSL {}x{} float matrix.", cols, rows),
            None => format!("GLSL {}x{} float matrix.", dims, dims),
        };
    }
    if name.to_ascii_lowercase().contains("sampler") {
        return "GLSL sampler type for texture access.".to_string();
    }
    format!("GLSL type `{}`.", name)
}
