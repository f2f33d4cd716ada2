// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
use crate::gl::{AttributeLocation, VertexAttributeContext};
use crate::storage::StorageType;
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

/// One call made against a [`RecordingContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlCall {
    EnableVertexAttribArray(AttributeLocation),
    DisableVertexAttribArray(AttributeLocation),
    VertexAttribDivisor(AttributeLocation, u32),
    VertexAttribPointer {
        location: AttributeLocation,
        size: u8,
        storage: StorageType,
        normalized: bool,
        stride: i32,
        offset: i32,
    },
    VertexAttribIPointer {
        location: AttributeLocation,
        size: u8,
        storage: StorageType,
        stride: i32,
        offset: i32,
    },
}

#[derive(Debug, Default)]
struct State {
    calls: Vec<GlCall>,
    enabled: BTreeSet<AttributeLocation>,
    divisors: BTreeMap<AttributeLocation, u32>,
}

/**
A headless graphics context that records calls and tracks the attribute state they leave behind.

Useful for tests, and for checking what a binder would do without a GPU.
*/
#[derive(Debug, Default)]
pub struct RecordingContext {
    state: RefCell<State>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call so far, in order.
    pub fn calls(&self) -> Vec<GlCall> {
        self.state.borrow().calls.clone()
    }

    /// Returns the calls so far and forgets them.  Attribute state is kept.
    pub fn take_calls(&self) -> Vec<GlCall> {
        std::mem::take(&mut self.state.borrow_mut().calls)
    }

    pub fn is_enabled(&self, location: AttributeLocation) -> bool {
        self.state.borrow().enabled.contains(&location)
    }

    /// Locations whose attribute array is currently enabled, ascending.
    pub fn enabled_locations(&self) -> Vec<AttributeLocation> {
        self.state.borrow().enabled.iter().copied().collect()
    }

    /// The current divisor at `location` (0 if never set).
    pub fn divisor(&self, location: AttributeLocation) -> u32 {
        self.state
            .borrow()
            .divisors
            .get(&location)
            .copied()
            .unwrap_or(0)
    }

    fn record(&self, call: GlCall) {
        let mut state = self.state.borrow_mut();
        match call {
            GlCall::EnableVertexAttribArray(location) => {
                state.enabled.insert(location);
            }
            GlCall::DisableVertexAttribArray(location) => {
                state.enabled.remove(&location);
            }
            GlCall::VertexAttribDivisor(location, divisor) => {
                state.divisors.insert(location, divisor);
            }
            GlCall::VertexAttribPointer { .. } | GlCall::VertexAttribIPointer { .. } => {}
        }
        state.calls.push(call);
    }
}

impl VertexAttributeContext for RecordingContext {
    fn enable_vertex_attrib_array(&self, location: AttributeLocation) {
        self.record(GlCall::EnableVertexAttribArray(location));
    }

    fn disable_vertex_attrib_array(&self, location: AttributeLocation) {
        self.record(GlCall::DisableVertexAttribArray(location));
    }

    fn vertex_attrib_divisor(&self, location: AttributeLocation, divisor: u32) {
        self.record(GlCall::VertexAttribDivisor(location, divisor));
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
        self.record(GlCall::VertexAttribPointer {
            location,
            size,
            storage,
            normalized,
            stride,
            offset,
        });
    }

    fn vertex_attrib_i_pointer(
        &self,
        location: AttributeLocation,
        size: u8,
        storage: StorageType,
        stride: i32,
        offset: i32,
    ) {
        self.record(GlCall::VertexAttribIPointer {
            location,
            size,
            storage,
            stride,
            offset,
        });
    }
}
