// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Host-side mirror of the catalogue's conversions.
//!
//! CPU code that works with the same values as a shader (picking, segment equality, building lookup
//! tables) needs the exact arithmetic the snippets perform.  [`ShaderScalar`] gives it for the
//! single-component types, [`ToUint64`] gives the promotion, and [`Uint64`] mirrors the two-word
//! `uint64_t` struct.
//!
//! ```
//! use vertex_inputs::conversions::{ShaderScalar, ToUint64, Uint64};
//!
//! assert_eq!(255u8.to_normalized(), 1.0);
//! assert_eq!(7u16.to_uint64(), Uint64::new(7, 0));
//! assert_eq!(Uint64::from(0x1_0000_0002u64), Uint64::new(2, 1));
//! ```

/// Two little-endian 32-bit words, like the shader's `uint64_t`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Uint64 {
    //declared high first so the derived ordering is numeric
    pub high: u32,
    pub low: u32,
}

impl Uint64 {
    pub const ZERO: Uint64 = Uint64 { high: 0, low: 0 };

    pub const fn new(low: u32, high: u32) -> Self {
        Uint64 { high, low }
    }

    /// Structural equality, as the shader's `equals` compares `value`.
    pub fn equals(&self, other: &Uint64) -> bool {
        self == other
    }

    /// The words in `uvec2` order (`value[0]` is the low word).
    pub fn words(&self) -> [u32; 2] {
        [self.low, self.high]
    }
}

impl From<u64> for Uint64 {
    fn from(value: u64) -> Self {
        Uint64::new(value as u32, (value >> 32) as u32)
    }
}

impl From<Uint64> for u64 {
    fn from(value: Uint64) -> Self {
        ((value.high as u64) << 32) | value.low as u64
    }
}

/// Conversions every single-component catalogue type provides.
pub trait ShaderScalar: Copy {
    /// The bit-identical native value (`toRaw`).
    type Raw;

    fn to_raw(self) -> Self::Raw;

    /// The value as the shader reads it normalized (`toNormalized`).
    fn to_normalized(self) -> f32;
}

/// Promotion to the canonical 64-bit value (`toUint64`).
pub trait ToUint64: Copy {
    fn to_uint64(self) -> Uint64;
}

macro_rules! unsigned_scalar {
    ($t:ty) => {
        impl ShaderScalar for $t {
            type Raw = u32;

            fn to_raw(self) -> u32 {
                self as u32
            }

            fn to_normalized(self) -> f32 {
                self.to_raw() as f32 / <$t>::MAX as f32
            }
        }

        impl ToUint64 for $t {
            fn to_uint64(self) -> Uint64 {
                Uint64::new(self.to_raw(), 0)
            }
        }
    };
}

unsigned_scalar!(u8);
unsigned_scalar!(u16);
unsigned_scalar!(u32);

impl ToUint64 for Uint64 {
    fn to_uint64(self) -> Uint64 {
        self
    }
}

impl ShaderScalar for f32 {
    type Raw = f32;

    fn to_raw(self) -> f32 {
        self
    }

    fn to_normalized(self) -> f32 {
        self
    }
}
