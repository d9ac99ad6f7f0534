use std::collections::{BTreeMap, HashMap};

use tare::{Tare, TareError};
use tare_testhelpers::test;

#[derive(Tare, Debug, Default, PartialEq, Clone)]
struct EmbeddedUnset {
    #[tare(default = "1")]
    int: i32,
    #[tare(default = "foo", unset = "-")]
    string: String,
}

#[derive(Tare, Debug, Default, PartialEq, Clone)]
struct StructUnset {
    #[tare(default = "{}", unset = "walk", rename = "EmbeddedUnset")]
    embedded: EmbeddedUnset,
    #[tare(default = "1")]
    foo: i32,
    #[tare(default = "1")]
    bar: i32,
    #[tare(default = "1")]
    bar_ptr: Option<i32>,
    #[tare(default = "1", unset = "walk")]
    bar_ptr_with_walk: Option<Box<i32>>,
    #[tare(default = "foo")]
    with_default: String,
    #[tare(unset = "walk")]
    nested: EmbeddedUnset,
}

#[derive(Tare, Debug, PartialEq)]
struct SampleUnset {
    #[tare(skip)]
    private: StructUnset,
    #[tare(default = "{}", unset = "walk")]
    structure: StructUnset,
    #[tare(default = "{}", unset = "walk")]
    struct_ptr: Option<Box<StructUnset>>,
    #[tare(default = "{}")]
    struct_ptr_no_walk: Option<Box<StructUnset>>,

    #[tare(default = "[1,2,3]", unset = "walk")]
    slice_of_int: Vec<i32>,
    #[tare(default = "[1,2,3]", unset = "walk")]
    slice_of_int_ptr: Vec<Option<i32>>,
    #[tare(default = "[1,2,3]", unset = "walk")]
    slice_of_int_ptr_ptr: Vec<Option<Option<Box<i32>>>>,
    #[tare(default = r#"[{"Foo":123}]"#, unset = "walk")]
    slice_of_struct: Vec<StructUnset>,
    #[tare(default = r#"[{"Foo":123}]"#, unset = "walk")]
    slice_of_struct_ptr: Vec<Option<Box<StructUnset>>>,
    #[tare(default = r#"[{"int1": 1}]"#, unset = "walk")]
    slice_of_map_of_int: Vec<HashMap<String, i32>>,
    #[tare(default = r#"[{"Struct3": {"Foo":123}}]"#, unset = "walk")]
    slice_of_map_of_struct: Vec<BTreeMap<String, StructUnset>>,
    #[tare(default = "[[1,2,3]]", unset = "walk")]
    slice_of_slice_int: Vec<Vec<i32>>,
    #[tare(default = r#"[[{"Foo":123}]]"#, unset = "walk")]
    slice_of_slice_struct: Vec<Vec<StructUnset>>,
    #[tare(default = r#"[{"Foo":123}]"#)]
    slice_set_nil: Vec<StructUnset>,

    #[tare(default = r#"{"int1": 1}"#, unset = "walk")]
    map_of_int: HashMap<String, i32>,
    #[tare(default = r#"{"int1": 1}"#, unset = "walk")]
    map_of_int_ptr: HashMap<String, Option<i32>>,
    #[tare(default = r#"{"Struct3": {"Foo":123}}"#, unset = "walk")]
    map_of_struct: HashMap<String, StructUnset>,
    #[tare(default = r#"{"Struct3": {"Foo":123}}"#, unset = "walk")]
    map_of_struct_ptr: HashMap<String, Option<Box<StructUnset>>>,
    #[tare(default = r#"{"slice1": [1,2,3]}"#, unset = "walk")]
    map_of_slice_int: HashMap<String, Vec<i32>>,
    #[tare(default = r#"{"slice1": [{"Foo":123}]}"#, unset = "walk")]
    map_of_slice_struct: HashMap<String, Vec<StructUnset>>,
    #[tare(default = r#"{"map1": {"int1": 1}}"#, unset = "walk")]
    map_of_map_of_int: HashMap<String, HashMap<String, i32>>,
    #[tare(default = r#"{"map1": {"Struct3": {"Foo":123}}}"#, unset = "walk")]
    map_of_map_of_struct: BTreeMap<String, BTreeMap<String, StructUnset>>,

    #[tare(default = r#"{"Struct3": {"Foo":123}}"#)]
    map_set_nil: HashMap<String, StructUnset>,
}

fn walked_and_removed() -> SampleUnset {
    let mut s = SampleUnset::zero();
    tare::must_apply_defaults(&mut s);
    s.slice_of_int_ptr_ptr[1] = Some(None);
    s.private = StructUnset {
        with_default: "test".to_string(),
        ..StructUnset::default()
    };
    tare::must_remove_defaults(&mut s);
    s
}

#[test]
fn structs() {
    let s = walked_and_removed();

    assert_eq!(s.private.with_default, "test");
    assert_eq!(s.structure.foo, 0);
    assert_eq!(s.structure.bar, 0);
    assert_eq!(s.structure.bar_ptr, None);
    assert_eq!(s.structure.bar_ptr_with_walk, Some(Box::new(0)));
    assert_eq!(s.struct_ptr_no_walk, None);

    let ptr = s.struct_ptr.as_deref().unwrap();
    assert_eq!(ptr.embedded.string, "foo");
    assert_eq!(ptr.embedded.int, 0);
    assert_eq!(ptr.nested.string, "foo");
    assert_eq!(ptr.nested.int, 0);
}

#[test]
fn sequences() {
    let s = walked_and_removed();

    assert_eq!(s.slice_of_int, [0, 0, 0]);
    assert_eq!(s.slice_of_int_ptr, [Some(0), Some(0), Some(0)]);
    assert_eq!(s.slice_of_int_ptr_ptr[0], Some(Some(Box::new(0))));
    assert_eq!(s.slice_of_int_ptr_ptr[1], Some(None));
    assert_eq!(s.slice_of_struct[0].foo, 0);
    assert_eq!(s.slice_of_struct_ptr[0].as_ref().map(|v| v.foo), Some(0));
    assert_eq!(s.slice_of_slice_int, [[0, 0, 0]]);
    assert_eq!(s.slice_of_slice_struct[0][0].foo, 0);
    assert_eq!(s.slice_of_map_of_int[0]["int1"], 0);
    assert_eq!(s.slice_of_map_of_struct[0]["Struct3"].foo, 0);
    assert!(s.slice_set_nil.is_empty());
}

#[test]
fn maps() {
    let s = walked_and_removed();

    assert_eq!(s.map_of_int["int1"], 0);
    assert_eq!(s.map_of_int_ptr["int1"], Some(0));
    assert_eq!(s.map_of_struct["Struct3"].foo, 0);
    assert_eq!(s.map_of_struct_ptr["Struct3"].as_ref().map(|v| v.foo), Some(0));
    assert_eq!(s.map_of_slice_int["slice1"], [0, 0, 0]);
    assert_eq!(s.map_of_slice_struct["slice1"][0].foo, 0);
    assert_eq!(s.map_of_map_of_int["map1"]["int1"], 0);
    assert_eq!(s.map_of_map_of_struct["map1"]["Struct3"].foo, 0);
    assert!(s.map_set_nil.is_empty());

    // opted-out fields survive inside walked map values
    assert_eq!(s.map_of_struct["Struct3"].embedded.string, "foo");
    assert_eq!(
        s.map_of_struct_ptr["Struct3"]
            .as_ref()
            .map(|v| v.embedded.string.as_str()),
        Some("foo")
    );
    assert_eq!(s.map_of_slice_struct["slice1"][0].embedded.string, "foo");
    assert_eq!(s.map_of_map_of_struct["map1"]["Struct3"].embedded.string, "foo");
}

#[derive(Tare, Debug, PartialEq)]
struct Flat {
    #[tare(default = "1")]
    int: i32,
    #[tare(default = "hello")]
    string: String,
    #[tare(default = r#"{"a": 1}"#)]
    map: HashMap<String, i32>,
    #[tare(default = "[1]")]
    slice: Vec<u8>,
    #[tare(default = "{}")]
    ptr: Option<Box<StructUnset>>,
}

#[test]
fn wholesale_removal_restores_zero() {
    let mut flat = Flat::zero();
    tare::apply_defaults(&mut flat).unwrap();
    assert!(!tare::is_zero(&flat));

    tare::remove_defaults(&mut flat).unwrap();
    assert_eq!(flat, Flat::zero());
}

#[derive(Tare, Debug, PartialEq)]
struct Tags {
    #[tare(default = r#"["a","b"]"#, unset = "walk")]
    walked: Vec<String>,
    #[tare(default = r#"["a","b"]"#)]
    wholesale: Vec<String>,
}

#[test]
fn walk_keeps_sequence_length() {
    let mut tags = Tags::zero();
    tare::apply_defaults(&mut tags).unwrap();
    assert_eq!(tags.walked, ["a", "b"]);
    assert_eq!(tags.wholesale, ["a", "b"]);

    tare::remove_defaults(&mut tags).unwrap();
    assert_eq!(tags.walked, ["", ""]);
    assert!(tags.wholesale.is_empty());
}

#[derive(Tare, Debug, PartialEq)]
struct Ignored {
    #[tare(default = "-", unset = "-")]
    ignore_me: String,
}

#[test]
fn opted_out_field_is_not_reset() {
    let mut ignored = Ignored {
        ignore_me: "test".to_string(),
    };
    tare::must_remove_defaults(&mut ignored);
    assert_eq!(ignored.ignore_me, "test");
}

#[test]
fn pointer_chains_are_followed_to_the_struct() {
    let mut tags = Some(Box::new(Some(Tags {
        walked: vec!["x".to_string()],
        wholesale: vec!["y".to_string()],
    })));
    tare::remove_defaults(&mut tags).unwrap();

    let tags = tags.unwrap().unwrap();
    assert_eq!(tags.walked, [""]);
    assert!(tags.wholesale.is_empty());
}

#[test]
fn non_struct_roots_are_rejected() {
    let mut number = 8;
    let err = tare::remove_defaults(&mut number).unwrap_err();
    assert!(matches!(err, TareError::InvalidTarget { type_name: "i32" }));

    let mut unbound: Option<Tags> = None;
    let err = tare::remove_defaults(&mut unbound).unwrap_err();
    assert!(matches!(err, TareError::InvalidTarget { .. }));
}

#[test]
#[should_panic(expected = "expected a struct, got i32")]
fn must_remove_panics_on_invalid_target() {
    let mut number = 8;
    tare::must_remove_defaults(&mut number);
}
