//! Wire compatibility with rmp-serde.
//!
//! rmp-serde also picks the narrowest encodings, so for the subset both sides
//! speak the bytes match exactly. It writes `str8` for strings of 32 to 255
//! bytes, which this codec does not accept; the cases below stay clear of it.

use std::collections::BTreeMap;

use eyre::Result;
use rawpack_msgpack::{DecodeError, from_slice, to_vec};
use rawpack_value::{Value, value};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Record {
    id: u32,
    name: String,
    active: bool,
    score: f64,
    tags: Vec<String>,
    parent: Option<i64>,
}

fn record() -> Record {
    Record {
        id: 70_000,
        name: "rawpack".to_owned(),
        active: true,
        score: -0.5,
        tags: vec!["a".to_owned(), "bc".to_owned()],
        parent: None,
    }
}

#[test]
fn integers_match_byte_for_byte() -> Result<()> {
    rawpack_testhelpers::setup();

    let ints: Vec<i64> = vec![
        0,
        1,
        127,
        128,
        255,
        256,
        65535,
        65536,
        4294967295,
        4294967296,
        i64::MAX,
        -1,
        -32,
        -33,
        -128,
        -129,
        -32768,
        -32769,
        i32::MIN as i64,
        i32::MIN as i64 - 1,
        i64::MIN,
    ];
    let ours: Value = ints.iter().copied().map(Value::from).collect();

    assert_eq!(to_vec(&ours)?, rmp_serde::to_vec(&ints)?);
    Ok(())
}

#[test]
fn strings_and_floats_match_byte_for_byte() -> Result<()> {
    rawpack_testhelpers::setup();

    let long = "y".repeat(300);
    let theirs = rmp_serde::to_vec(&("", "short", long.as_str(), 1.25f64, true, ()))?;
    let ours = to_vec(&value!(["", "short", (long.as_str()), 1.25, true, nil]))?;
    assert_eq!(ours, theirs);
    Ok(())
}

#[test]
fn rmp_reads_what_we_write() -> Result<()> {
    rawpack_testhelpers::setup();

    let ours = value!({
        "id" => 70000,
        "name" => "rawpack",
        "active" => true,
        "score" => (-0.5),
        "tags" => ["a", "bc"],
        "parent" => nil
    });
    let decoded: Record = rmp_serde::from_slice(&to_vec(&ours)?)?;
    assert_eq!(decoded, record());

    // Strings between 32 and 255 bytes go out as str16, which rmp accepts.
    let text = "z".repeat(100);
    let decoded: String = rmp_serde::from_slice(&to_vec(&Value::from(text.as_str()))?)?;
    assert_eq!(decoded, text);

    let map: BTreeMap<String, Vec<u8>> =
        rmp_serde::from_slice(&to_vec(&value!({ "k" => [1, 2, 255] }))?)?;
    assert_eq!(map["k"], [1, 2, 255]);
    Ok(())
}

#[test]
fn we_read_what_rmp_writes() -> Result<()> {
    rawpack_testhelpers::setup();

    let mut buf = Vec::new();
    record().serialize(&mut rmp_serde::Serializer::new(&mut buf).with_struct_map())?;
    let decoded = from_slice(&buf)?;

    let expected = value!({
        "id" => 70000,
        "name" => "rawpack",
        "active" => true,
        "score" => (-0.5),
        "tags" => ["a", "bc"],
        "parent" => nil
    });
    assert_eq!(decoded, expected);

    // Without struct maps, structs are plain arrays.
    let decoded = from_slice(&rmp_serde::to_vec(&record())?)?;
    assert_eq!(
        decoded,
        value!([70000, "rawpack", true, (-0.5), ["a", "bc"], nil])
    );
    Ok(())
}

#[test]
fn float32_from_rmp() -> Result<()> {
    rawpack_testhelpers::setup();

    let decoded = from_slice(&rmp_serde::to_vec(&1.5f32)?)?;
    assert_eq!(decoded, Value::Float(1.5));
    Ok(())
}

#[test]
fn bin_and_str8_are_rejected() -> Result<()> {
    rawpack_testhelpers::setup();

    let bin = rmp_serde::to_vec(&serde_bytes::Bytes::new(b"abc"))?;
    assert_eq!(
        from_slice(&bin),
        Err(DecodeError::UnsupportedTag { tag: 0xc4, pos: 0 })
    );

    let str8 = rmp_serde::to_vec(&"w".repeat(40))?;
    assert_eq!(
        from_slice(&str8),
        Err(DecodeError::UnsupportedTag { tag: 0xd9, pos: 0 })
    );
    Ok(())
}
