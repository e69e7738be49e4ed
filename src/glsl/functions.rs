//! Built-in GLSL function table.

use super::{FunctionDescriptor, Parameter, Signature};

const GEN_TYPES: [&str; 4] = ["float", "vec2", "vec3", "vec4"];
const GEN_VEC_TYPES: [&str; 3] = ["vec2", "vec3", "vec4"];
const SQUARE_MATRICES: [&str; 3] = ["mat2", "mat3", "mat4"];

/// `T name(T x[, extra...])` for every `T` in genType.
fn unary(name: &str, extra: &[&str]) -> Vec<Signature> {
    GEN_TYPES
        .iter()
        .map(|t| {
            let mut params = vec![format!("{} x", t)];
            params.extend(extra.iter().map(|p| p.to_string()));
            Signature::new(t, name, &params)
        })
        .collect()
}

/// `T name(T x, T y)` for every `T` in genType.
fn binary(name: &str) -> Vec<Signature> {
    GEN_TYPES
        .iter()
        .map(|t| Signature::new(t, name, &[format!("{} x", t), format!("{} y", t)]))
        .collect()
}

/// `T name(T x, T y, T z)` for every `T` in genType.
fn ternary(name: &str) -> Vec<Signature> {
    GEN_TYPES
        .iter()
        .map(|t| {
            Signature::new(
                t,
                name,
                &[format!("{} x", t), format!("{} y", t), format!("{} z", t)],
            )
        })
        .collect()
}

/// `T name(T x, float y)` for vector `T`.
fn vec_scalar(name: &str) -> Vec<Signature> {
    GEN_VEC_TYPES
        .iter()
        .map(|t| Signature::new(t, name, &[format!("{} x", t), "float y".to_string()]))
        .collect()
}

/// Vector overloads whose parameters mix `T` and `float`; `%` in a
/// parameter template is replaced with the vector type.
fn vec_template(name: &str, params: &[&str]) -> Vec<Signature> {
    GEN_VEC_TYPES
        .iter()
        .map(|t| {
            let params: Vec<String> = params.iter().map(|p| p.replace('%', t)).collect();
            Signature::new(t, name, &params)
        })
        .collect()
}

/// Explicit signature from a return type and parameter labels.
fn sig(ret: &str, name: &str, params: &[&str]) -> Signature {
    let params: Vec<String> = params.iter().map(|p| p.to_string()).collect();
    Signature::new(ret, name, &params)
}

fn concat(mut a: Vec<Signature>, b: Vec<Signature>) -> Vec<Signature> {
    a.extend(b);
    a
}

struct Table {
    entries: Vec<FunctionDescriptor>,
    category: &'static str,
}

impl Table {
    fn category(&mut self, category: &'static str) {
        self.category = category;
    }

    fn add(&mut self, name: &str, signatures: Vec<Signature>, description: &str) {
        self.entries.push(FunctionDescriptor {
            name: name.to_string(),
            signatures,
            description: description.to_string(),
            category: self.category.to_string(),
        });
    }
}

pub(super) fn functions() -> Vec<FunctionDescriptor> {
    let mut t = Table {
        entries: Vec::with_capacity(64),
        category: "",
    };

    t.category("Trigonometric");
    t.add("radians", unary("radians", &[]), "Converts degrees to radians.");
    t.add("degrees", unary("degrees", &[]), "Converts radians to degrees.");
    t.add("sin", unary("sin", &[]), "Returns the sine of the parameter.");
    t.add("cos", unary("cos", &[]), "Returns the cosine of the parameter.");
    t.add("tan", unary("tan", &[]), "Returns the tangent of the parameter.");
    t.add("asin", unary("asin", &[]), "Returns the arcsine of the parameter.");
    t.add("acos", unary("acos", &[]), "Returns the arccosine of the parameter.");
    t.add(
        "atan",
        concat(unary("atan", &[]), binary("atan")),
        "Returns the arctangent. The two-argument form computes atan(y/x).",
    );

    t.category("Hyperbolic");
    t.add("sinh", unary("sinh", &[]), "Returns the hyperbolic sine.");
    t.add("cosh", unary("cosh", &[]), "Returns the hyperbolic cosine.");
    t.add("tanh", unary("tanh", &[]), "Returns the hyperbolic tangent.");
    t.add("asinh", unary("asinh", &[]), "Returns the inverse hyperbolic sine.");
    t.add("acosh", unary("acosh", &[]), "Returns the inverse hyperbolic cosine.");
    t.add("atanh", unary("atanh", &[]), "Returns the inverse hyperbolic tangent.");

    t.category("Exponential");
    t.add("pow", binary("pow"), "Returns x raised to the power y.");
    t.add("exp", unary("exp", &[]), "Returns e raised to the power of x.");
    t.add("log", unary("log", &[]), "Returns the natural logarithm of x.");
    t.add("exp2", unary("exp2", &[]), "Returns 2 raised to the power of x.");
    t.add("log2", unary("log2", &[]), "Returns the base-2 logarithm of x.");
    t.add("sqrt", unary("sqrt", &[]), "Returns the square root of x.");
    t.add("inversesqrt", unary("inversesqrt", &[]), "Returns 1 / sqrt(x).");

    t.category("Common");
    t.add("abs", unary("abs", &[]), "Returns the absolute value of x.");
    t.add(
        "sign",
        unary("sign", &[]),
        "Returns -1.0, 0.0, or 1.0 depending on the sign of x.",
    );
    t.add(
        "floor",
        unary("floor", &[]),
        "Returns the largest integer not greater than x.",
    );
    t.add(
        "trunc",
        unary("trunc", &[]),
        "Returns the integer part of x (truncation toward zero).",
    );
    t.add("round", unary("round", &[]), "Returns the nearest integer to x.");
    t.add(
        "roundEven",
        unary("roundEven", &[]),
        "Returns the nearest integer to x; 0.5 rounds to the nearest even integer.",
    );
    t.add(
        "ceil",
        unary("ceil", &[]),
        "Returns the smallest integer not less than x.",
    );
    t.add("fract", unary("fract", &[]), "Returns x - floor(x).");
    t.add(
        "mod",
        concat(binary("mod"), vec_scalar("mod")),
        "Returns x - y * floor(x/y).",
    );
    t.add(
        "min",
        concat(binary("min"), vec_scalar("min")),
        "Returns the minimum of x and y.",
    );
    t.add(
        "max",
        concat(binary("max"), vec_scalar("max")),
        "Returns the maximum of x and y.",
    );
    t.add(
        "clamp",
        concat(
            ternary("clamp"),
            vec_template("clamp", &["% x", "float minVal", "float maxVal"]),
        ),
        "Clamps x to the range [minVal, maxVal].",
    );
    t.add(
        "mix",
        concat(
            ternary("mix"),
            vec_template("mix", &["% x", "% y", "float a"]),
        ),
        "Linear interpolation between x and y using a.",
    );
    t.add(
        "step",
        concat(
            binary("step"),
            vec_template("step", &["float edge", "% x"]),
        ),
        "Returns 0.0 if x < edge, otherwise 1.0.",
    );
    let smoothstep_gen = GEN_TYPES
        .iter()
        .map(|ty| {
            Signature::new(
                ty,
                "smoothstep",
                &[
                    format!("{} edge0", ty),
                    format!("{} edge1", ty),
                    format!("{} x", ty),
                ],
            )
        })
        .collect();
    t.add(
        "smoothstep",
        concat(
            smoothstep_gen,
            vec_template("smoothstep", &["float edge0", "float edge1", "% x"]),
        ),
        "Performs Hermite interpolation between 0 and 1 when edge0 < x < edge1.",
    );
    t.add("isnan", unary("isnan", &[]), "Returns true if x is NaN.");
    t.add(
        "isinf",
        unary("isinf", &[]),
        "Returns true if x is positive or negative infinity.",
    );

    t.category("Geometric");
    t.add(
        "length",
        unary("length", &[]),
        "Returns the length (magnitude) of the vector.",
    );
    t.add(
        "distance",
        binary("distance"),
        "Returns the distance between two points.",
    );
    t.add("dot", binary("dot"), "Returns the dot product of two vectors.");
    t.add(
        "cross",
        vec![sig("vec3", "cross", &["vec3 x", "vec3 y"])],
        "Returns the cross product of two 3-component vectors.",
    );
    t.add(
        "normalize",
        unary("normalize", &[]),
        "Returns a unit vector in the same direction as x.",
    );
    t.add(
        "faceforward",
        ternary("faceforward"),
        "Returns N if dot(Nref, I) < 0, otherwise returns -N.",
    );
    t.add(
        "reflect",
        binary("reflect"),
        "Reflects the incident vector I using the normal N.",
    );
    let refract = GEN_TYPES
        .iter()
        .map(|ty| {
            Signature::new(
                ty,
                "refract",
                &[format!("{} I", ty), format!("{} N", ty), "float eta".to_string()],
            )
        })
        .collect();
    t.add(
        "refract",
        refract,
        "Computes the refraction vector using the ratio of indices eta.",
    );

    t.category("Matrix");
    t.add(
        "matrixCompMult",
        SQUARE_MATRICES
            .iter()
            .map(|m| Signature::new(m, "matrixCompMult", &[format!("{} x", m), format!("{} y", m)]))
            .collect(),
        "Component-wise multiplication of two matrices.",
    );
    t.add(
        "outerProduct",
        vec![
            sig("mat2", "outerProduct", &["vec2 c", "vec2 r"]),
            sig("mat3", "outerProduct", &["vec3 c", "vec3 r"]),
            sig("mat4", "outerProduct", &["vec4 c", "vec4 r"]),
        ],
        "Returns the outer product of two vectors.",
    );
    t.add(
        "transpose",
        SQUARE_MATRICES
            .iter()
            .map(|m| Signature::new(m, "transpose", &[format!("{} m", m)]))
            .collect(),
        "Returns the transpose of the matrix.",
    );
    t.add(
        "determinant",
        SQUARE_MATRICES
            .iter()
            .map(|m| Signature::new("float", "determinant", &[format!("{} m", m)]))
            .collect(),
        "Returns the determinant of the matrix.",
    );
    t.add(
        "inverse",
        SQUARE_MATRICES
            .iter()
            .map(|m| Signature::new(m, "inverse", &[format!("{} m", m)]))
            .collect(),
        "Returns the inverse of the matrix.",
    );

    t.category("Texture");
    t.add(
        "texture",
        vec![
            sig("vec4", "texture", &["sampler2D sampler", "vec2 coord"]),
            sig("vec4", "texture", &["sampler3D sampler", "vec3 coord"]),
            sig("vec4", "texture", &["samplerCube sampler", "vec3 coord"]),
            sig(
                "vec4",
                "texture",
                &["sampler2D sampler", "vec2 coord", "float bias"],
            ),
        ],
        "Samples a texel from a texture.",
    );
    t.add(
        "textureSize",
        vec![
            sig("ivec2", "textureSize", &["sampler2D sampler", "int lod"]),
            sig("ivec3", "textureSize", &["sampler3D sampler", "int lod"]),
        ],
        "Returns the dimensions of the texture at the given LOD.",
    );
    t.add(
        "texelFetch",
        vec![
            sig(
                "vec4",
                "texelFetch",
                &["sampler2D sampler", "ivec2 coord", "int lod"],
            ),
            sig(
                "vec4",
                "texelFetch",
                &["sampler3D sampler", "ivec3 coord", "int lod"],
            ),
        ],
        "Fetches a single texel from the texture without filtering.",
    );
    t.add(
        "textureLod",
        vec![
            sig(
                "vec4",
                "textureLod",
                &["sampler2D sampler", "vec2 coord", "float lod"],
            ),
            sig(
                "vec4",
                "textureLod",
                &["sampler3D sampler", "vec3 coord", "float lod"],
            ),
        ],
        "Samples a texture with an explicit LOD.",
    );
    t.add(
        "textureProj",
        vec![
            sig("vec4", "textureProj", &["sampler2D sampler", "vec3 coord"]),
            sig("vec4", "textureProj", &["sampler2D sampler", "vec4 coord"]),
        ],
        "Performs a projective texture lookup.",
    );
    t.add(
        "textureGrad",
        vec![
            sig(
                "vec4",
                "textureGrad",
                &["sampler2D sampler", "vec2 coord", "vec2 dPdx", "vec2 dPdy"],
            ),
            sig(
                "vec4",
                "textureGrad",
                &["sampler3D sampler", "vec3 coord", "vec3 dPdx", "vec3 dPdy"],
            ),
        ],
        "Samples a texture with explicit gradients.",
    );

    t.category("Derivative");
    t.add(
        "dFdx",
        unary("dFdx", &[]),
        "Returns the partial derivative of the argument with respect to the window x coordinate.",
    );
    t.add(
        "dFdy",
        unary("dFdy", &[]),
        "Returns the partial derivative of the argument with respect to the window y coordinate.",
    );
    t.add("fwidth", unary("fwidth", &[]), "Returns abs(dFdx(x)) + abs(dFdy(x)).");

    document_parameters(&mut t.entries);
    t.entries
}

/// Attach short documentation to well-known parameter names.
fn document_parameters(entries: &mut [FunctionDescriptor]) {
    for f in entries.iter_mut() {
        for s in &mut f.signatures {
            for p in &mut s.parameters {
                p.documentation = parameter_doc(&p.label).map(str::to_string);
            }
        }
    }
}

fn parameter_doc(label: &str) -> Option<&'static str> {
    let name = label.rsplit(' ').next()?;
    let doc = match name {
        "minVal" => "Lower bound of the range.",
        "maxVal" => "Upper bound of the range.",
        "a" => "Interpolation weight; 0.0 yields x, 1.0 yields y.",
        "edge" => "Threshold below which the result is 0.0.",
        "edge0" => "Lower edge of the Hermite interpolation.",
        "edge1" => "Upper edge of the Hermite interpolation.",
        "eta" => "Ratio of indices of refraction.",
        "I" => "Incident vector.",
        "N" => "Surface normal.",
        "sampler" => "Sampler bound to the texture to read.",
        "coord" => "Texture coordinates to sample at.",
        "lod" => "Level of detail.",
        "bias" => "Bias added to the computed level of detail.",
        "dPdx" | "dPdy" => "Explicit gradient of the coordinates.",
        _ => return None,
    };
    Some(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unary_covers_gentype() {
        let sigs = unary("sin", &[]);
        let labels: Vec<&str> = sigs.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "float sin(float x)",
                "vec2 sin(vec2 x)",
                "vec3 sin(vec3 x)",
                "vec4 sin(vec4 x)"
            ]
        );
    }

    #[test]
    fn clamp_has_scalar_bound_overloads() {
        let fns = functions();
        let clamp = fns.iter().find(|f| f.name == "clamp").unwrap();
        assert_eq!(clamp.signatures.len(), 7);
        assert_eq!(
            clamp.signatures[4].label,
            "vec2 clamp(vec2 x, float minVal, float maxVal)"
        );
        assert!(clamp.signatures.iter().all(|s| s.parameters.len() == 3));
    }

    #[test]
    fn step_vector_overload_takes_scalar_edge() {
        let fns = functions();
        let step = fns.iter().find(|f| f.name == "step").unwrap();
        assert_eq!(step.signatures[4].label, "vec2 step(float edge, vec2 x)");
    }

    #[test]
    fn every_function_has_an_overload_and_category() {
        for f in functions() {
            assert!(!f.signatures.is_empty(), "{} has no overloads", f.name);
            assert!(!f.category.is_empty(), "{} has no category", f.name);
            for s in &f.signatures {
                assert!(s.label.contains(&format!(" {}(", f.name)), "{}", s.label);
            }
        }
    }

    #[test]
    fn parameter_docs_attached() {
        let fns = functions();
        let mix = fns.iter().find(|f| f.name == "mix").unwrap();
        let a = &mix.signatures[4].parameters[2];
        assert_eq!(a.label, "float a");
        assert!(a.documentation.is_some());
        assert_eq!(mix.signatures[4].parameters[0].documentation, None);
    }
}
