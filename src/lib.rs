// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*! vertex_inputs generates shader code for packed vertex inputs, and binds them at draw time.

Volumetric and scientific renderers often carry several small integer channels per vertex: segment
labels, packed 64-bit ids, intensity samples.  Shading languages have no native 8, 16 or 64-bit
integers, and a hardware attribute holds at most four components.  This crate covers both sides of
that gap.

# Shader types

[`types`] names a shader type for every supported (data type, components) pair, e.g. `uint8x3_t`, and
[`snippets`] holds the source that defines them, along with `toRaw`, `toNormalized` and `toUint64`
conversions for each.  Snippets declare their prerequisites; a program pulls in a snippet and gets
everything it depends on, each emitted once.

| Data type | Shader types                       | Raw type | Normalized by    |
|-----------|------------------------------------|----------|------------------|
| float32   | `float`, `vec2`, `vec3`, `vec4`     | float    | identity         |
| uint8     | `uint8_t` .. `uint8x4_t`            | uint     | 255              |
| uint16    | `uint16_t`, `uint16x2_t`            | uint     | 65535            |
| uint32    | `uint32_t`                          | uint     | 4294967295       |
| uint64    | `uint64_t`                          | -        | -                |

[`conversions`] mirrors those conversions on the host, for checking data before it's uploaded.

# Vertex inputs

[`vertex_input`] defines a logical input of `array_size` vectors of rank `vector_rank` as a run of
hardware attributes, plus one accessor per array element that gathers the scalars back together:

```
use vertex_inputs::binder::VertexInputBinder;
use vertex_inputs::builder::ProgramBuilder;
use vertex_inputs::gl::{AttributeLocation, RecordingContext};
use vertex_inputs::storage::StorageType;
use vertex_inputs::types::ElementKind;
use vertex_inputs::vertex_input::define_vector_array_input;

let mut builder = ProgramBuilder::new();
define_vector_array_input(&mut builder, ElementKind::Float, StorageType::Float, false, "Pos", 3, 1).unwrap();

//pretend the driver put aPos<i> at location i
let program = builder.link(|name| {
    name.strip_prefix("aPos").and_then(|i| i.parse().ok()).map(AttributeLocation)
});
let binder: &VertexInputBinder = program.binder("Pos").unwrap();

let gl = RecordingContext::new();
binder.enable(&gl, 0);
assert_eq!(binder.bind(&gl, 12, 0), Ok(12));
binder.disable(&gl);
assert!(gl.enabled_locations().is_empty());
```

# Backends

Binders talk to the graphics API through [`gl::VertexAttributeContext`].  [`gl::RecordingContext`] is
a headless implementation that records calls.  With the `backend_webgl` feature, on wasm32,
`web_sys::WebGl2RenderingContext` implements it too.
*/

logwise::declare_logging_domain!();
pub mod binder;
pub mod builder;
pub mod conversions;
pub mod gl;
mod imp;
pub mod snippets;
pub mod source;
pub mod storage;
pub mod types;
pub mod vertex_input;

pub use types::{type_name, vector_type_name};
pub use storage::type_size_in_bytes;
pub use vertex_input::{DefineError, define_vector_array_input};
