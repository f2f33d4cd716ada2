// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*! Packed vector-array vertex inputs.

A logical input is `array_size` vectors of `vector_rank` scalars each, e.g. three label channels for
each of two voxels.  Hardware attributes hold at most four components, so the `vector_rank * array_size`
scalars are flattened in (array index, vector index) order and cut into slots of four, the last slot
taking the remainder.  Each slot becomes one attribute `a<name><slot>`; each array element gets an
accessor `get<name><index>()` that gathers its scalars back out of the slots.

```
use vertex_inputs::builder::ProgramBuilder;
use vertex_inputs::storage::StorageType;
use vertex_inputs::types::ElementKind;
use vertex_inputs::vertex_input::define_vector_array_input;

let mut builder = ProgramBuilder::new();
let input = define_vector_array_input(
    &mut builder, ElementKind::Uint, StorageType::UnsignedByte, true, "Label", 3, 2,
).unwrap();
assert_eq!(input.layout().widths().collect::<Vec<_>>(), [4, 2]);
let source = builder.vertex_source();
assert!(source.contains("in highp uvec4 aLabel0;"));
assert!(source.contains("in highp uvec2 aLabel1;"));
assert!(source.contains("highp uint[3] getLabel1() {"));
```
*/

use crate::binder::VertexInputBinder;
use crate::builder::{InputDeclaration, ShaderBuilder, ShaderProgram};
use crate::source::{Identifier, IdentifierError, SourceBuilder};
use crate::storage::{StorageType, UnknownStorageType};
use crate::types::{ElementKind, vector_type_name};
use std::convert::Infallible;

/// Components one hardware attribute can hold.
pub const MAX_SLOT_COMPONENTS: usize = 4;

/// The most scalars one input may have: at 4 bytes each, one vertex's worth still fits GL's signed
/// 32-bit offsets.
pub const MAX_SCALARS: usize = (i32::MAX / 4) as usize;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DefineError {
    #[error("Vertex input needs at least one scalar (rank {vector_rank}, array size {array_size})")]
    EmptyInput {
        vector_rank: usize,
        array_size: usize,
    },
    /// More than [`MAX_SCALARS`].
    #[error("Vertex input of rank {vector_rank} and array size {array_size} has too many scalars")]
    TooManyScalars {
        vector_rank: usize,
        array_size: usize,
    },
    #[error("{kind:?} vertex inputs can't read {storage:?} storage")]
    IncompatibleStorage {
        kind: ElementKind,
        storage: StorageType,
    },
    #[error("Invalid vertex input name: {0}")]
    Identifier(#[from] IdentifierError),
    #[error("Can't size vertex input storage: {0}")]
    UnknownStorage(#[from] UnknownStorageType),
}

impl From<Infallible> for DefineError {
    fn from(value: Infallible) -> Self {
        match value {}
    }
}

/// Where one flattened scalar lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScalarPosition {
    pub slot: usize,
    pub component: usize,
}

/// One hardware attribute of a packed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttributeSlot {
    /// Position within the input's slots, from 0.
    pub index: usize,
    /// 1 to 4.
    pub components: u8,
    /// Bytes per component.
    pub element_size: u32,
}

impl AttributeSlot {
    /// Bytes this slot occupies per vertex.
    pub fn byte_size(&self) -> u32 {
        self.element_size * self.components as u32
    }
}

/// How `vector_rank * array_size` scalars split into slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotLayout {
    vector_rank: usize,
    array_size: usize,
    total: usize,
}

impl SlotLayout {
    pub fn new(vector_rank: usize, array_size: usize) -> Result<Self, DefineError> {
        if vector_rank == 0 || array_size == 0 {
            return Err(DefineError::EmptyInput {
                vector_rank,
                array_size,
            });
        }
        let total = vector_rank
            .checked_mul(array_size)
            .filter(|total| *total <= MAX_SCALARS)
            .ok_or(DefineError::TooManyScalars {
                vector_rank,
                array_size,
            })?;
        Ok(SlotLayout {
            vector_rank,
            array_size,
            total,
        })
    }

    pub fn vector_rank(&self) -> usize {
        self.vector_rank
    }

    pub fn array_size(&self) -> usize {
        self.array_size
    }

    pub fn total_scalars(&self) -> usize {
        self.total
    }

    pub fn slot_count(&self) -> usize {
        self.total.div_ceil(MAX_SLOT_COMPONENTS)
    }

    /// Slot widths in slot order: full slots of 4, then whatever remains.
    pub fn widths(&self) -> impl Iterator<Item = u8> + use<> {
        let mut remaining = self.total;
        std::iter::from_fn(move || {
            (remaining > 0).then(|| {
                let width = remaining.min(MAX_SLOT_COMPONENTS);
                remaining -= width;
                width as u8
            })
        })
    }

    /// Width of `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is out of range.
    pub fn slot_width(&self, slot: usize) -> u8 {
        assert!(slot < self.slot_count(), "No slot {slot}");
        (self.total - MAX_SLOT_COMPONENTS * slot).min(MAX_SLOT_COMPONENTS) as u8
    }

    /// The slots, each sized for `storage`.
    pub fn slots(&self, storage: StorageType) -> impl Iterator<Item = AttributeSlot> + use<> {
        let element_size = storage.size_in_bytes();
        self.widths()
            .enumerate()
            .map(move |(index, components)| AttributeSlot {
                index,
                components,
                element_size,
            })
    }

    /// Where component `vector_index` of array element `array_index` lives.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn position(&self, array_index: usize, vector_index: usize) -> ScalarPosition {
        assert!(
            array_index < self.array_size && vector_index < self.vector_rank,
            "No scalar [{array_index}][{vector_index}]"
        );
        let i = array_index * self.vector_rank + vector_index;
        ScalarPosition {
            slot: i / MAX_SLOT_COMPONENTS,
            component: i % MAX_SLOT_COMPONENTS,
        }
    }
}

/// A validated packed vertex input, ready to be defined on a builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorArrayInput {
    kind: ElementKind,
    storage: StorageType,
    normalized: bool,
    name: Identifier,
    layout: SlotLayout,
}

impl VectorArrayInput {
    /// An input of one `vector_rank`-component vector per vertex, not normalized.
    pub fn new(
        kind: ElementKind,
        storage: StorageType,
        name: &str,
        vector_rank: usize,
    ) -> Result<Self, DefineError> {
        let name = Identifier::new(name)?;
        if !storage.compatible_with(kind) {
            return Err(DefineError::IncompatibleStorage { kind, storage });
        }
        Ok(VectorArrayInput {
            kind,
            storage,
            normalized: false,
            name,
            layout: SlotLayout::new(vector_rank, 1)?,
        })
    }

    pub fn with_array_size(mut self, array_size: usize) -> Result<Self, DefineError> {
        self.layout = SlotLayout::new(self.layout.vector_rank, array_size)?;
        Ok(self)
    }

    /// Whether integer storage is meant to be read through `toNormalized`.  For float storage the flag
    /// is handed to the float pointer binding.
    pub fn with_normalized(mut self, normalized: bool) -> Self {
        self.normalized = normalized;
        self
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn storage(&self) -> StorageType {
        self.storage
    }

    pub fn normalized(&self) -> bool {
        self.normalized
    }

    pub fn name(&self) -> &Identifier {
        &self.name
    }

    pub fn layout(&self) -> &SlotLayout {
        &self.layout
    }

    /// `a<name><slot>`
    pub fn attribute_name(&self, slot: usize) -> Identifier {
        self.name.derive("a", slot)
    }

    /// `get<name><array_index>`
    pub fn accessor_name(&self, array_index: usize) -> Identifier {
        self.name.derive("get", array_index)
    }

    fn attribute_names(&self) -> Vec<Identifier> {
        (0..self.layout.slot_count())
            .map(|slot| self.attribute_name(slot))
            .collect()
    }

    /**
    The accessor functions, one per array element.

    Each returns `highp <kind>[vector_rank]`.  A one-component slot is declared as a scalar, so reads
    from it carry no subscript.
    */
    pub fn accessor_source(&self) -> SourceBuilder {
        let element = self.kind.name();
        let rank = self.layout.vector_rank;
        let attributes = self.attribute_names();
        let mut source = SourceBuilder::new();
        for array_index in 0..self.layout.array_size {
            source
                .text("highp ")
                .type_name(element)
                .text("[")
                .integer(rank)
                .text("] ")
                .identifier(&self.accessor_name(array_index))
                .text("() {\n  highp ")
                .type_name(element)
                .text("[")
                .integer(rank)
                .text("] result;\n");
            for vector_index in 0..rank {
                let position = self.layout.position(array_index, vector_index);
                source
                    .text("  result[")
                    .integer(vector_index)
                    .text("] = ")
                    .identifier(&attributes[position.slot]);
                if self.layout.slot_width(position.slot) > 1 {
                    source.text("[").integer(position.component).text("]");
                }
                source.text(";\n");
            }
            source.text("  return result;\n}\n");
        }
        source
    }

    /**
    Declares this input on `builder`.

    Registers one attribute per slot, appends the accessors to the vertex stage, and queues an
    initializer that resolves the slots' locations and installs a [`VertexInputBinder`] under this
    input's name.  Defining a name again replaces the earlier definition's attributes, accessors and
    binder.
    */
    pub fn define<B: ShaderBuilder + ?Sized>(&self, builder: &mut B) {
        logwise::trace_sync!(
            "defining vertex input {name}: rank {rank}, array size {array_size}, {slots} slots",
            name = self.name.as_str().to_string(),
            rank = self.layout.vector_rank,
            array_size = self.layout.array_size,
            slots = self.layout.slot_count()
        );
        let attributes = self.attribute_names();
        let declared = self
            .layout
            .widths()
            .zip(&attributes)
            .map(|(width, attribute)| (vector_type_name(self.kind, width), attribute.clone()))
            .collect();

        let name = self.name.as_str().to_string();
        let layout = self.layout;
        let storage = self.storage;
        let normalized = self.normalized;
        let initializer = Box::new(move |program: &mut dyn ShaderProgram| {
            let locations: Vec<_> = attributes
                .iter()
                .map(|attribute| program.attribute_location(attribute.as_str()))
                .collect();
            let binder = VertexInputBinder::new(name, &layout, storage, normalized, &locations);
            program.vertex_input_binders_mut().insert(binder);
        });
        builder.add_input(InputDeclaration {
            name: self.name.clone(),
            attributes: declared,
            vertex_code: self.accessor_source().finish(),
            initializer,
        });
    }
}

/**
Validates and defines a packed vertex input in one step.

`storage` is a [`StorageType`] or a raw GL enum value; unknown enum values fail before anything is
registered, as do empty inputs, bad names, and storage the element kind can't read.
*/
pub fn define_vector_array_input<B: ShaderBuilder + ?Sized>(
    builder: &mut B,
    kind: ElementKind,
    storage: impl TryInto<StorageType, Error: Into<DefineError>>,
    normalized: bool,
    name: &str,
    vector_rank: usize,
    array_size: usize,
) -> Result<VectorArrayInput, DefineError> {
    let storage = storage.try_into().map_err(Into::into)?;
    let input = VectorArrayInput::new(kind, storage, name, vector_rank)?
        .with_array_size(array_size)?
        .with_normalized(normalized);
    input.define(builder);
    Ok(input)
}
