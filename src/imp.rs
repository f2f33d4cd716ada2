// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//backends for crate::gl::VertexAttributeContext

pub(crate) mod recording;

#[cfg(all(feature = "backend_webgl", target_arch = "wasm32"))]
pub(crate) mod webgl;
