// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! The slice of the graphics API that vertex input binders drive.
//!
//! Binders only ever enable, disable and point vertex attributes, so that is all
//! [`VertexAttributeContext`] asks for.  Implementations:
//!
//! - [`RecordingContext`] records every call; it is the headless backend.
//! - `web_sys::WebGl2RenderingContext`, with the `backend_webgl` feature on `wasm32`.

use crate::storage::StorageType;
use std::fmt::{Display, Formatter};

pub use crate::imp::recording::{GlCall, RecordingContext};

#[cfg(all(feature = "backend_webgl", target_arch = "wasm32"))]
pub use crate::imp::webgl::attribute_locations;

/// A vertex attribute location resolved from a linked program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttributeLocation(pub u32);

impl Display for AttributeLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/**
Vertex attribute state of a graphics context.

Methods take `&self`; graphics contexts are handles to driver state and mutate through it.  Strides
and offsets are signed 32-bit, as GL declares them; callers keep them non-negative.
*/
pub trait VertexAttributeContext {
    fn enable_vertex_attrib_array(&self, location: AttributeLocation);

    fn disable_vertex_attrib_array(&self, location: AttributeLocation);

    /// `divisor == 0` advances per vertex; `n > 0` advances every `n` instances.
    fn vertex_attrib_divisor(&self, location: AttributeLocation, divisor: u32);

    /// Floating-point attribute pointer.  With `normalized`, integer data maps to [0,1] (unsigned)
    /// or [-1,1] (signed) in fixed-function hardware.
    fn vertex_attrib_pointer(
        &self,
        location: AttributeLocation,
        size: u8,
        storage: StorageType,
        normalized: bool,
        stride: i32,
        offset: i32,
    );

    /// Integer attribute pointer; values reach the shader unconverted.
    fn vertex_attrib_i_pointer(
        &self,
        location: AttributeLocation,
        size: u8,
        storage: StorageType,
        stride: i32,
        offset: i32,
    );
}
