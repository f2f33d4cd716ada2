// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! The type-code library as a program sees it: type names, the snippets behind them, and the
//! storage byte sizes.

use std::collections::HashSet;
use vertex_inputs::builder::ProgramBuilder;
use vertex_inputs::conversions::ShaderScalar;
use vertex_inputs::snippets::{Snippet, catalogue};
use vertex_inputs::storage::{StorageType, gl_enum};
use vertex_inputs::types::{DataType, LogicalType, type_name};
use vertex_inputs::type_size_in_bytes;

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
fn type_names_are_distinct_and_defined() {
    let mut names = HashSet::new();
    for data_type in DataType::ALL {
        for components in 0..=5u8 {
            let supported = (1..=data_type.max_components()).contains(&components);
            match type_name(data_type, components) {
                Ok(name) => {
                    assert!(supported, "{data_type:?}[{components}] should be unsupported");
                    assert!(names.insert(name), "{name} named twice");
                    let logical = LogicalType::new(data_type, components).unwrap();
                    assert_eq!(logical.name(), name);
                    assert!(std::ptr::eq(Snippet::for_type(logical), data_type.snippet()));
                    //built-in float types need no struct
                    if data_type.is_integer() {
                        let source = Snippet::render_all([Snippet::for_type(logical)]);
                        assert!(
                            source.contains(&format!("struct {name} {{")),
                            "{name} is not defined by its snippet"
                        );
                    }
                }
                Err(e) => {
                    assert!(!supported, "{data_type:?}[{components}] should be supported");
                    assert_eq!(e.data_type, data_type);
                    assert_eq!(e.components, components);
                }
            }
        }
    }
    assert_eq!(names.len(), LogicalType::all().count());
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
fn integer_snippets_define_all_conversions() {
    for t in LogicalType::all().filter(|t| t.data_type().is_integer()) {
        let source = Snippet::for_type(t).source();
        let name = t.name();
        if t.data_type() == DataType::Uint64 {
            assert!(source.contains(&format!("toUint64({name} x)")));
            continue;
        }
        assert!(source.contains(&format!("toRaw({name} x)")), "{name} lacks toRaw");
        assert!(
            source.contains(&format!("toNormalized({name} x)")),
            "{name} lacks toNormalized"
        );
        if t.components() == 1 {
            assert!(
                source.contains(&format!("uint64_t toUint64({name} x)")),
                "{name} lacks toUint64"
            );
        }
    }
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
fn normalization_divides_by_full_range() {
    let cases = [
        (DataType::Uint8, &catalogue::UINT8),
        (DataType::Uint16, &catalogue::UINT16),
        (DataType::Uint32, &catalogue::UINT32),
    ];
    for (data_type, snippet) in cases {
        assert!(std::ptr::eq(data_type.snippet(), snippet));
        let divisor = format!("{}.0", (1u64 << data_type.bits()) - 1);
        let normalizing: Vec<&str> = snippet
            .source()
            .lines()
            .filter(|l| l.contains("toNormalized("))
            .collect();
        assert!(!normalizing.is_empty());
        for line in normalizing {
            assert!(line.contains(&format!("/ {divisor};")), "{line}");
        }
    }
    assert_eq!(DataType::Float32.bits(), 32);
    assert_eq!(DataType::Uint64.bits(), 64);
    //the host mirror agrees at the ends of the range
    assert_eq!(u8::MAX.to_normalized(), 1.0);
    assert_eq!(u16::MAX.to_normalized(), 1.0);
    assert_eq!(u32::MAX.to_normalized(), 1.0);
    assert_eq!(0u32.to_normalized(), 0.0);
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
fn programs_pull_in_prerequisites_once() {
    let mut builder = ProgramBuilder::new();
    builder.add_vertex_snippet(&catalogue::UINT8);
    builder.add_vertex_snippet(&catalogue::UNPACK_UINT64LE_FROM_UINT32);
    builder.add_vertex_snippet(&catalogue::UINT32);
    builder.add_vertex_snippet(&catalogue::UINT8);
    let source = builder.vertex_source();
    assert_eq!(source.matches("struct uint64_t {").count(), 1);
    assert_eq!(source.matches("struct uint8_t {").count(), 1);
    let uint64 = source.find("struct uint64_t {").unwrap();
    let unpack = source.find("unpackUint64leFromUint32").unwrap();
    let uint32 = source.find("struct uint32_t {").unwrap();
    assert!(uint64 < unpack && unpack < uint32);
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
fn helper_snippets_are_named() {
    for name in ["hsv_to_rgb", "fortran_order_index", "unpack_uint64le_from_uint32"] {
        let snippet = Snippet::by_name(name).unwrap();
        assert_eq!(snippet.name(), name);
    }
    assert!(
        catalogue::FORTRAN_ORDER_INDEX
            .source()
            .contains("getFortranOrderIndex(ivec3 subscripts, ivec3 size)")
    );
    assert!(catalogue::HSV_TO_RGB.source().contains("vec3 hsvToRgb(vec3 c)"));
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
fn storage_sizes() {
    let expected = [
        (gl_enum::BYTE, 1),
        (gl_enum::UNSIGNED_BYTE, 1),
        (gl_enum::SHORT, 2),
        (gl_enum::UNSIGNED_SHORT, 2),
        (gl_enum::INT, 4),
        (gl_enum::UNSIGNED_INT, 4),
        (gl_enum::FLOAT, 4),
    ];
    for (gl, size) in expected {
        assert_eq!(type_size_in_bytes(gl), Ok(size));
        assert_eq!(StorageType::try_from(gl).unwrap().size_in_bytes(), size);
    }
    //HALF_FLOAT has no entry
    assert!(type_size_in_bytes(0x140B).is_err());
}
