// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Hardware element formats for vertex buffers.
//!
//! A [`StorageType`] names how one scalar of a vertex attribute is laid out in buffer memory.  The
//! values match the WebGL2 / GLES3 enums so they can be handed straight to the graphics API.
//!
//! Raw GL enum values come in from the outside as plain integers; converting them with
//! [`StorageType::try_from`] or [`type_size_in_bytes`] fails for anything without a byte-size entry.
//! Guessing a size would corrupt every offset computed after it.

use crate::types::ElementKind;

/// The element format of one scalar in a vertex buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageType {
    Byte,
    UnsignedByte,
    Short,
    UnsignedShort,
    Int,
    UnsignedInt,
    Float,
}

impl StorageType {
    pub const ALL: [StorageType; 7] = [
        StorageType::Byte,
        StorageType::UnsignedByte,
        StorageType::Short,
        StorageType::UnsignedShort,
        StorageType::Int,
        StorageType::UnsignedInt,
        StorageType::Float,
    ];

    /// The GL enum value for this format.
    pub const fn gl_enum(self) -> u32 {
        match self {
            StorageType::Byte => gl_enum::BYTE,
            StorageType::UnsignedByte => gl_enum::UNSIGNED_BYTE,
            StorageType::Short => gl_enum::SHORT,
            StorageType::UnsignedShort => gl_enum::UNSIGNED_SHORT,
            StorageType::Int => gl_enum::INT,
            StorageType::UnsignedInt => gl_enum::UNSIGNED_INT,
            StorageType::Float => gl_enum::FLOAT,
        }
    }

    /// Size of one element in bytes.
    pub const fn size_in_bytes(self) -> u32 {
        match self {
            StorageType::Byte | StorageType::UnsignedByte => 1,
            StorageType::Short | StorageType::UnsignedShort => 2,
            StorageType::Int | StorageType::UnsignedInt | StorageType::Float => 4,
        }
    }

    /// Floating-point formats bind through the float pointer path; everything else through the
    /// integer one.
    pub const fn is_float(self) -> bool {
        matches!(self, StorageType::Float)
    }

    /// Whether a shader input of `kind` can read this format.
    pub const fn compatible_with(self, kind: ElementKind) -> bool {
        match kind {
            ElementKind::Float => self.is_float(),
            ElementKind::Int | ElementKind::Uint => !self.is_float(),
        }
    }
}

/// Raw GL enum values for the supported formats.
pub mod gl_enum {
    pub const BYTE: u32 = 0x1400;
    pub const UNSIGNED_BYTE: u32 = 0x1401;
    pub const SHORT: u32 = 0x1402;
    pub const UNSIGNED_SHORT: u32 = 0x1403;
    pub const INT: u32 = 0x1404;
    pub const UNSIGNED_INT: u32 = 0x1405;
    pub const FLOAT: u32 = 0x1406;
}

/// A GL enum value that is not a known vertex element format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Unknown vertex storage type {0:#06x}")]
pub struct UnknownStorageType(pub u32);

impl TryFrom<u32> for StorageType {
    type Error = UnknownStorageType;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        StorageType::ALL
            .into_iter()
            .find(|s| s.gl_enum() == value)
            .ok_or(UnknownStorageType(value))
    }
}

/// Byte size of the element format named by a raw GL enum.
pub fn type_size_in_bytes(gl_enum: u32) -> Result<u32, UnknownStorageType> {
    StorageType::try_from(gl_enum).map(StorageType::size_in_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn size_table() {
        assert_eq!(type_size_in_bytes(gl_enum::UNSIGNED_BYTE), Ok(1));
        assert_eq!(type_size_in_bytes(gl_enum::BYTE), Ok(1));
        assert_eq!(type_size_in_bytes(gl_enum::UNSIGNED_SHORT), Ok(2));
        assert_eq!(type_size_in_bytes(gl_enum::SHORT), Ok(2));
        assert_eq!(type_size_in_bytes(gl_enum::FLOAT), Ok(4));
        assert_eq!(type_size_in_bytes(gl_enum::INT), Ok(4));
        assert_eq!(type_size_in_bytes(gl_enum::UNSIGNED_INT), Ok(4));
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn unknown_enum_fails() {
        //HALF_FLOAT has no entry
        assert_eq!(type_size_in_bytes(0x140B), Err(UnknownStorageType(0x140B)));
        assert_eq!(
            UnknownStorageType(0x140B).to_string(),
            "Unknown vertex storage type 0x140b"
        );
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn enum_values_round_trip() {
        for s in StorageType::ALL {
            assert_eq!(StorageType::try_from(s.gl_enum()), Ok(s));
        }
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn compatibility() {
        assert!(StorageType::Float.compatible_with(ElementKind::Float));
        assert!(!StorageType::Float.compatible_with(ElementKind::Uint));
        assert!(StorageType::UnsignedByte.compatible_with(ElementKind::Uint));
        assert!(StorageType::Short.compatible_with(ElementKind::Int));
        assert!(!StorageType::UnsignedShort.compatible_with(ElementKind::Float));
    }
}
