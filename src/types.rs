// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Logical data types and their shading-language spellings.
//!
//! A *logical type* is the pair a shader declares it needs: an element [`DataType`] and a component
//! count.  Not every pair exists in the snippet catalogue; [`type_name`] reports the ones that don't.
//!
//! # Examples
//!
//! ```
//! use vertex_inputs::types::{DataType, ElementKind, type_name, vector_type_name};
//!
//! assert_eq!(type_name(DataType::Uint8, 3).unwrap(), "uint8x3_t");
//! assert_eq!(type_name(DataType::Float32, 2).unwrap(), "vec2");
//! assert!(type_name(DataType::Uint32, 2).is_err());
//!
//! assert_eq!(vector_type_name(ElementKind::Uint, 4), "uvec4");
//! assert_eq!(vector_type_name(ElementKind::Float, 1), "float");
//! ```

use crate::snippets::Snippet;
use crate::snippets::catalogue;

/// Element kinds of stored data that have a shading-language representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DataType {
    Float32,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
}

impl DataType {
    /// Every data type, in declaration order.
    pub const ALL: [DataType; 5] = [
        DataType::Float32,
        DataType::Uint8,
        DataType::Uint16,
        DataType::Uint32,
        DataType::Uint64,
    ];

    /// Width of one component in bits.
    pub const fn bits(self) -> u32 {
        match self {
            DataType::Float32 => 32,
            DataType::Uint8 => 8,
            DataType::Uint16 => 16,
            DataType::Uint32 => 32,
            DataType::Uint64 => 64,
        }
    }

    /// The largest component count the catalogue has a type for.
    pub const fn max_components(self) -> u8 {
        match self {
            DataType::Float32 | DataType::Uint8 => 4,
            DataType::Uint16 => 2,
            DataType::Uint32 | DataType::Uint64 => 1,
        }
    }

    /// Whether this is one of the unsigned integer types.
    pub const fn is_integer(self) -> bool {
        !matches!(self, DataType::Float32)
    }

    /// The catalogue snippet defining this type's representation and conversions.
    pub fn snippet(self) -> &'static Snippet {
        match self {
            DataType::Float32 => &catalogue::FLOAT,
            DataType::Uint8 => &catalogue::UINT8,
            DataType::Uint16 => &catalogue::UINT16,
            DataType::Uint32 => &catalogue::UINT32,
            DataType::Uint64 => &catalogue::UINT64,
        }
    }
}

/// Scalar element kinds of the shading language itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Float,
    Int,
    Uint,
}

impl ElementKind {
    /// The bare scalar spelling (`float`, `int`, `uint`).
    pub const fn name(self) -> &'static str {
        match self {
            ElementKind::Float => "float",
            ElementKind::Int => "int",
            ElementKind::Uint => "uint",
        }
    }
}

/// No catalogue type exists for this (data type, component count) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("No shader type for {data_type:?}[{components}]")]
pub struct UnsupportedType {
    pub data_type: DataType,
    pub components: u8,
}

/// A (data type, component count) pair known to exist in the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LogicalType {
    data_type: DataType,
    components: u8,
}

impl LogicalType {
    pub fn new(data_type: DataType, components: u8) -> Result<Self, UnsupportedType> {
        if components == 0 || components > data_type.max_components() {
            return Err(UnsupportedType {
                data_type,
                components,
            });
        }
        Ok(LogicalType {
            data_type,
            components,
        })
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn components(&self) -> u8 {
        self.components
    }

    /// The shading-language type name.
    pub fn name(&self) -> &'static str {
        match (self.data_type, self.components) {
            (DataType::Float32, 1) => "float",
            (DataType::Float32, 2) => "vec2",
            (DataType::Float32, 3) => "vec3",
            (DataType::Float32, _) => "vec4",
            (DataType::Uint8, 1) => "uint8_t",
            (DataType::Uint8, 2) => "uint8x2_t",
            (DataType::Uint8, 3) => "uint8x3_t",
            (DataType::Uint8, _) => "uint8x4_t",
            (DataType::Uint16, 1) => "uint16_t",
            (DataType::Uint16, _) => "uint16x2_t",
            (DataType::Uint32, _) => "uint32_t",
            (DataType::Uint64, _) => "uint64_t",
        }
    }

    /// Every supported logical type.
    pub fn all() -> impl Iterator<Item = LogicalType> {
        DataType::ALL.into_iter().flat_map(|data_type| {
            (1..=data_type.max_components()).map(move |components| LogicalType {
                data_type,
                components,
            })
        })
    }
}

/// Resolves the shading-language type name for `components` values of `data_type`.
pub fn type_name(data_type: DataType, components: u8) -> Result<&'static str, UnsupportedType> {
    LogicalType::new(data_type, components).map(|t| t.name())
}

/// Spells the built-in vector type holding `n` elements of `kind`.
///
/// `n == 1` is the bare scalar.
///
/// # Panics
///
/// Panics unless `n` is in `1..=4`.
pub fn vector_type_name(kind: ElementKind, n: u8) -> &'static str {
    assert!((1..=4).contains(&n), "No vector type of width {n}");
    const FLOAT: [&str; 4] = ["float", "vec2", "vec3", "vec4"];
    const INT: [&str; 4] = ["int", "ivec2", "ivec3", "ivec4"];
    const UINT: [&str; 4] = ["uint", "uvec2", "uvec3", "uvec4"];
    let table = match kind {
        ElementKind::Float => &FLOAT,
        ElementKind::Int => &INT,
        ElementKind::Uint => &UINT,
    };
    table[n as usize - 1]
}
