// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! The static snippet catalogue.
//!
//! Integer snippets declare one struct per supported component count, each wrapping the matching
//! unsigned vector, plus `toRaw`, `toNormalized` and `toUint64` overloads.  All of them depend on
//! [`UINT64`], which is what `toUint64` promotes to.

use crate::snippets::Snippet;

/// Every snippet in the catalogue, prerequisites before dependents.
pub static ALL: [&Snippet; 8] = [
    &UINT64,
    &FLOAT,
    &UINT8,
    &UINT16,
    &UINT32,
    &UNPACK_UINT64LE_FROM_UINT32,
    &HSV_TO_RGB,
    &FORTRAN_ORDER_INDEX,
];

pub static UINT64: Snippet = Snippet::new(
    "uint64",
    &[],
    r#"
struct uint64_t {
  highp uvec2 value;
};
struct uint64x2_t {
  highp uvec4 value;
};
uint64_t toUint64(uint64_t x) { return x; }
bool equals(uint64_t a, uint64_t b) {
  return a.value == b.value;
}
"#,
);

pub static FLOAT: Snippet = Snippet::new(
    "float",
    &[],
    r#"
float toRaw(float x) { return x; }
float toNormalized(float x) { return x; }
vec2 toRaw(vec2 x) { return x; }
vec2 toNormalized(vec2 x) { return x; }
vec3 toRaw(vec3 x) { return x; }
vec3 toNormalized(vec3 x) { return x; }
vec4 toRaw(vec4 x) { return x; }
vec4 toNormalized(vec4 x) { return x; }
"#,
);

pub static UINT8: Snippet = Snippet::new(
    "uint8",
    &[&UINT64],
    r#"
struct uint8_t {
  highp uint value;
};
struct uint8x2_t {
  highp uvec2 value;
};
struct uint8x3_t {
  highp uvec3 value;
};
struct uint8x4_t {
  highp uvec4 value;
};
highp uint toRaw(uint8_t x) { return x.value; }
highp float toNormalized(uint8_t x) { return float(x.value) / 255.0; }
highp uvec2 toRaw(uint8x2_t x) { return x.value; }
highp vec2 toNormalized(uint8x2_t x) { return vec2(x.value) / 255.0; }
highp uvec3 toRaw(uint8x3_t x) { return x.value; }
highp vec3 toNormalized(uint8x3_t x) { return vec3(x.value) / 255.0; }
highp uvec4 toRaw(uint8x4_t x) { return x.value; }
highp vec4 toNormalized(uint8x4_t x) { return vec4(x.value) / 255.0; }
uint64_t toUint64(uint8_t x) {
  uint64_t result;
  result.value[0] = x.value;
  result.value[1] = 0u;
  return result;
}
"#,
);

pub static UINT16: Snippet = Snippet::new(
    "uint16",
    &[&UINT64],
    r#"
struct uint16_t {
  highp uint value;
};
struct uint16x2_t {
  highp uvec2 value;
};
highp uint toRaw(uint16_t x) { return x.value; }
highp float toNormalized(uint16_t x) { return float(toRaw(x)) / 65535.0; }
highp uvec2 toRaw(uint16x2_t x) { return x.value; }
highp vec2 toNormalized(uint16x2_t x) { return vec2(toRaw(x)) / 65535.0; }
uint64_t toUint64(uint16_t x) {
  uint64_t result;
  result.value[0] = x.value;
  result.value[1] = 0u;
  return result;
}
"#,
);

pub static UINT32: Snippet = Snippet::new(
    "uint32",
    &[&UINT64],
    r#"
struct uint32_t {
  highp uint value;
};
highp uint toRaw(uint32_t x) { return x.value; }
highp float toNormalized(uint32_t x) { return float(x.value) / 4294967295.0; }
uint64_t toUint64(uint32_t x) {
  uint64_t result;
  result.value[0] = x.value;
  result.value[1] = 0u;
  return result;
}
"#,
);

/// Little-endian words to `uint64_t` / `uint64x2_t`.
pub static UNPACK_UINT64LE_FROM_UINT32: Snippet = Snippet::new(
    "unpack_uint64le_from_uint32",
    &[&UINT64],
    r#"
uint64_t unpackUint64leFromUint32(highp uvec2 x) {
  uint64_t result;
  result.value = x;
  return result;
}
uint64x2_t unpackUint64leFromUint32(highp uvec4 x) {
  uint64x2_t result;
  result.value = x;
  return result;
}
"#,
);

/// Hue, saturation and value are in [0, 1].
pub static HSV_TO_RGB: Snippet = Snippet::new(
    "hsv_to_rgb",
    &[],
    r#"
vec3 hueToRgb(float hue) {
  float hue6 = hue * 6.0;
  float r = abs(hue6 - 3.0) - 1.0;
  float g = 2.0 - abs(hue6 - 2.0);
  float b = 2.0 - abs(hue6 - 4.0);
  return clamp(vec3(r, g, b), 0.0, 1.0);
}
vec3 hsvToRgb(vec3 c) {
  vec3 hueRgb = hueToRgb(c.x);
  return c.z * ((hueRgb - 1.0) * c.y + 1.0);
}
"#,
);

pub static FORTRAN_ORDER_INDEX: Snippet = Snippet::new(
    "fortran_order_index",
    &[],
    r#"
highp int getFortranOrderIndex(ivec3 subscripts, ivec3 size) {
  return subscripts.x + size.x * (subscripts.y + size.y * subscripts.z);
}
"#,
);
