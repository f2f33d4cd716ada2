// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
use crate::gl::{AttributeLocation, VertexAttributeContext};
use crate::storage::StorageType;
use web_sys::{WebGl2RenderingContext, WebGlProgram};

impl VertexAttributeContext for WebGl2RenderingContext {
    fn enable_vertex_attrib_array(&self, location: AttributeLocation) {
        WebGl2RenderingContext::enable_vertex_attrib_array(self, location.0);
    }

    fn disable_vertex_attrib_array(&self, location: AttributeLocation) {
        WebGl2RenderingContext::disable_vertex_attrib_array(self, location.0);
    }

    fn vertex_attrib_divisor(&self, location: AttributeLocation, divisor: u32) {
        WebGl2RenderingContext::vertex_attrib_divisor(self, location.0, divisor);
    }

    fn vertex_attrib_pointer(
        &self,
        location: AttributeLocation,
        size: u8,
        storage: StorageType,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        self.vertex_attrib_pointer_with_i32(
            location.0,
            i32::from(size),
            storage.gl_enum(),
            normalized,
            stride,
            offset,
        );
    }

    fn vertex_attrib_i_pointer(
        &self,
        location: AttributeLocation,
        size: u8,
        storage: StorageType,
        stride: i32,
        offset: i32,
    ) {
        self.vertex_attrib_i_pointer_with_i32(
            location.0,
            i32::from(size),
            storage.gl_enum(),
            stride,
            offset,
        );
    }
}

/**
Resolves attribute names against a linked program, for [`crate::builder::ProgramBuilder::link`].

Attributes the driver optimized out (location -1) resolve to `None`.
*/
pub fn attribute_locations<'a>(
    gl: &'a WebGl2RenderingContext,
    program: &'a WebGlProgram,
) -> impl Fn(&str) -> Option<AttributeLocation> + 'a {
    move |name: &str| {
        let location = gl.get_attrib_location(program, name);
        u32::try_from(location).ok().map(AttributeLocation)
    }
}
