// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Runtime binders for packed vertex inputs.
//!
//! A [`VertexInputBinder`] is plain data: the resolved location of every slot of one logical input,
//! plus how those slots are stored.  The render loop calls [`enable`](VertexInputBinder::enable),
//! [`bind`](VertexInputBinder::bind) and [`disable`](VertexInputBinder::disable) on it once per
//! draw, passing the graphics context in.
//!
//! ```
//! use vertex_inputs::binder::VertexInputBinder;
//! use vertex_inputs::gl::{AttributeLocation, RecordingContext};
//! use vertex_inputs::storage::StorageType;
//! use vertex_inputs::vertex_input::SlotLayout;
//!
//! let layout = SlotLayout::new(3, 3).unwrap(); //9 scalars: slots of 4, 4, 1
//! let locations = [Some(AttributeLocation(0)), Some(AttributeLocation(1)), Some(AttributeLocation(2))];
//! let binder = VertexInputBinder::new("Position", &layout, StorageType::Float, false, &locations);
//!
//! let gl = RecordingContext::new();
//! assert_eq!(binder.slot_offsets(0), Some(vec![0, 16, 32]));
//! assert_eq!(binder.bind(&gl, 36, 0), Ok(36));
//! ```

use crate::gl::{AttributeLocation, VertexAttributeContext};
use crate::storage::StorageType;
use crate::vertex_input::{AttributeSlot, SlotLayout};
use std::collections::HashMap;

/// A stride or offset the graphics API can't express.  GL takes both as signed 32-bit values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum BindError {
    #[error("Stride {stride} is out of range")]
    Stride { stride: u32 },
    #[error("Vertex input of {byte_size} bytes at offset {offset} ends out of range")]
    Offset { offset: u32, byte_size: u32 },
}

/// One slot of a binder, with the location the linked program gave it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundSlot {
    pub slot: AttributeSlot,
    /// `None` when the program has no active attribute for this slot.
    pub location: Option<AttributeLocation>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexInputBinder {
    name: String,
    slots: Vec<BoundSlot>,
    storage: StorageType,
    normalized: bool,
}

impl VertexInputBinder {
    /**
    Builds a binder over `layout`'s slots.

    `locations[i]` is the resolved location of slot `i`.

    # Panics

    Panics if `locations` doesn't have one entry per slot.
    */
    pub fn new(
        name: impl Into<String>,
        layout: &SlotLayout,
        storage: StorageType,
        normalized: bool,
        locations: &[Option<AttributeLocation>],
    ) -> Self {
        assert_eq!(
            locations.len(),
            layout.slot_count(),
            "Expected one location per slot"
        );
        let name = name.into();
        let slots = layout
            .slots(storage)
            .zip(locations)
            .map(|(slot, location)| {
                if location.is_none() {
                    logwise::warn_sync!(
                        "vertex input {name} slot {slot} is inactive in the linked program",
                        name = name.clone(),
                        slot = slot.index
                    );
                }
                BoundSlot {
                    slot,
                    location: *location,
                }
            })
            .collect();
        logwise::trace_sync!(
            "built binder for {name}: {slots} slots of {storage}",
            name = name.clone(),
            slots = layout.slot_count(),
            storage = logwise::privacy::LogIt(storage)
        );
        VertexInputBinder {
            name,
            slots,
            storage,
            normalized,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slots(&self) -> &[BoundSlot] {
        &self.slots
    }

    pub fn storage(&self) -> StorageType {
        self.storage
    }

    pub fn normalized(&self) -> bool {
        self.normalized
    }

    fn active_locations(&self) -> impl Iterator<Item = AttributeLocation> {
        self.slots.iter().filter_map(|b| b.location)
    }

    /// Enables every slot's attribute array with the given instance divisor, in slot order.
    pub fn enable<C: VertexAttributeContext + ?Sized>(&self, gl: &C, divisor: u32) {
        for location in self.active_locations() {
            gl.enable_vertex_attrib_array(location);
            gl.vertex_attrib_divisor(location, divisor);
        }
    }

    /// Resets every slot's divisor to 0 and disables its attribute array.
    pub fn disable<C: VertexAttributeContext + ?Sized>(&self, gl: &C) {
        for location in self.active_locations() {
            gl.vertex_attrib_divisor(location, 0);
            gl.disable_vertex_attrib_array(location);
        }
    }

    /**
    Points every slot into the bound vertex buffer.

    Slots are packed back to back starting at `offset`, each vertex `stride` bytes apart.  Returns the
    offset just past the last slot, where an interleaved input that follows this one starts.

    Float storage binds through the float pointer path with this binder's `normalized` flag.  Integer
    storage always binds through the integer path: values arrive raw and the shader normalizes them
    with `toNormalized`.

    `stride` and the returned end offset must both fit in an `i32`; otherwise nothing is bound.
    */
    pub fn bind<C: VertexAttributeContext + ?Sized>(
        &self,
        gl: &C,
        stride: u32,
        offset: u32,
    ) -> Result<u32, BindError> {
        let gl_stride = i32::try_from(stride).map_err(|_| BindError::Stride { stride })?;
        let byte_size = self.byte_size();
        let out_of_range = BindError::Offset { offset, byte_size };
        let end = offset
            .checked_add(byte_size)
            .filter(|end| i32::try_from(*end).is_ok())
            .ok_or(out_of_range)?;
        let mut next = i32::try_from(offset).map_err(|_| out_of_range)?;
        for bound in &self.slots {
            let slot = &bound.slot;
            if let Some(location) = bound.location {
                if self.storage.is_float() {
                    gl.vertex_attrib_pointer(
                        location,
                        slot.components,
                        self.storage,
                        self.normalized,
                        gl_stride,
                        next,
                    );
                } else {
                    gl.vertex_attrib_i_pointer(location, slot.components, self.storage, gl_stride, next);
                }
            }
            //at most 16 bytes, and the whole input ends by `end`
            next += slot.byte_size() as i32;
        }
        Ok(end)
    }

    /// The byte offset of each slot when binding at `offset`, or `None` if the input would run past
    /// `u32::MAX`.
    pub fn slot_offsets(&self, offset: u32) -> Option<Vec<u32>> {
        offset.checked_add(self.byte_size())?;
        Some(
            self.slots
                .iter()
                .scan(offset, |next, bound| {
                    let current = *next;
                    *next += bound.slot.byte_size();
                    Some(current)
                })
                .collect(),
        )
    }

    /// Bytes one vertex's worth of this input occupies.  Layouts are bounded so this fits an `i32`.
    pub fn byte_size(&self) -> u32 {
        self.slots.iter().map(|b| b.slot.byte_size()).sum()
    }
}

/// Binders of one program, keyed by logical input name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexInputBinders {
    binders: HashMap<String, VertexInputBinder>,
}

impl VertexInputBinders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `binder` under its name, returning the binder it replaced.
    pub fn insert(&mut self, binder: VertexInputBinder) -> Option<VertexInputBinder> {
        let old = self.binders.insert(binder.name.clone(), binder);
        if let Some(old) = &old {
            logwise::warn_sync!(
                "replacing existing vertex input binder {name}",
                name = old.name.clone()
            );
        }
        old
    }

    pub fn get(&self, name: &str) -> Option<&VertexInputBinder> {
        self.binders.get(name)
    }

    pub fn len(&self) -> usize {
        self.binders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.binders.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &VertexInputBinder)> {
        self.binders.iter().map(|(k, v)| (k.as_str(), v))
    }
}
