//! Exact bytes at every size-class and integer-width boundary.

use eyre::Result;
use rawpack_msgpack::{IntWidth, from_slice, to_vec};
use rawpack_testhelpers::IPanic;
use rawpack_value::{VMap, Value};

fn header(value: &Value, len: usize) -> Result<Vec<u8>> {
    let bytes = to_vec(value)?;
    assert_eq!(from_slice(&bytes)?, *value);
    Ok(bytes[..len].to_vec())
}

#[test]
fn integer_boundaries() -> Result<()> {
    rawpack_testhelpers::setup();

    let cases: &[(i64, &[u8])] = &[
        (127, &[0x7f]),
        (128, &[0xcc, 0x80]),
        (255, &[0xcc, 0xff]),
        (256, &[0xcd, 0x01, 0x00]),
        (65535, &[0xcd, 0xff, 0xff]),
        (65536, &[0xce, 0x00, 0x01, 0x00, 0x00]),
        (4294967295, &[0xce, 0xff, 0xff, 0xff, 0xff]),
        (4294967296, &[0xcf, 0, 0, 0, 1, 0, 0, 0, 0]),
        (-32, &[0xe0]),
        (-33, &[0xd0, 0xdf]),
        (-128, &[0xd0, 0x80]),
        (-129, &[0xd1, 0xff, 0x7f]),
        (-32768, &[0xd1, 0x80, 0x00]),
        (-32769, &[0xd2, 0xff, 0xff, 0x7f, 0xff]),
        (-2147483648, &[0xd2, 0x80, 0x00, 0x00, 0x00]),
        (-2147483649, &[0xd3, 0xff, 0xff, 0xff, 0xff, 0x7f, 0xff, 0xff, 0xff]),
    ];

    for &(n, expected) in cases {
        let bytes = to_vec(&Value::Integer(n))?;
        assert_eq!(bytes, expected, "encoding {n}");
        assert_eq!(bytes.len(), IntWidth::select(n as i128)?.encoded_len());
        assert_eq!(from_slice(&bytes)?, Value::Integer(n), "decoding {n}");
    }
    Ok(())
}

#[test]
fn string_boundaries() -> Result<()> {
    rawpack_testhelpers::setup();

    assert_eq!(header(&Value::from("x".repeat(31)), 1)?, [0xbf]);
    assert_eq!(header(&Value::from("x".repeat(32)), 3)?, [0xda, 0x00, 0x20]);
    assert_eq!(header(&Value::from("x".repeat(255)), 3)?, [0xda, 0x00, 0xff]);
    assert_eq!(header(&Value::from("x".repeat(65535)), 3)?, [0xda, 0xff, 0xff]);
    assert_eq!(
        header(&Value::from("x".repeat(65536)), 5)?,
        [0xdb, 0x00, 0x01, 0x00, 0x00]
    );
    Ok(())
}

#[test]
fn array_boundaries() -> Result<()> {
    rawpack_testhelpers::setup();

    let array = |n: usize| Value::Array(vec![Value::Nil; n]);
    assert_eq!(header(&array(0), 1)?, [0x90]);
    assert_eq!(header(&array(15), 1)?, [0x9f]);
    assert_eq!(header(&array(16), 3)?, [0xdc, 0x00, 0x10]);
    assert_eq!(header(&array(65535), 3)?, [0xdc, 0xff, 0xff]);
    assert_eq!(header(&array(65536), 5)?, [0xdd, 0x00, 0x01, 0x00, 0x00]);
    Ok(())
}

#[test]
fn map_boundaries() -> Result<()> {
    rawpack_testhelpers::setup();

    let map = |n: i64| Value::Map((0..n).map(|i| (i, Value::Nil)).collect::<VMap>());
    assert_eq!(header(&map(0), 1)?, [0x80]);
    assert_eq!(header(&map(15), 1)?, [0x8f]);
    assert_eq!(header(&map(16), 3)?, [0xde, 0x00, 0x10]);
    assert_eq!(header(&map(65535), 3)?, [0xde, 0xff, 0xff]);
    assert_eq!(header(&map(65536), 5)?, [0xdf, 0x00, 0x01, 0x00, 0x00]);
    Ok(())
}

#[test]
fn non_canonical_input_is_accepted() -> Result<()> {
    rawpack_testhelpers::setup();

    // Wider-than-needed encodings still decode to the same value.
    assert_eq!(from_slice(&[0xcf, 0, 0, 0, 0, 0, 0, 0, 1])?, Value::Integer(1));
    assert_eq!(from_slice(&[0xd3, 0, 0, 0, 0, 0, 0, 0, 5])?, Value::Integer(5));
    assert_eq!(from_slice(&[0xdc, 0x00, 0x01, 0xc0])?, Value::Array(vec![Value::Nil]));
    assert_eq!(from_slice(&[0xdb, 0, 0, 0, 1, b'a'])?, Value::from("a"));
    assert_eq!(from_slice(&[0xde, 0x00, 0x00])?, Value::Map(VMap::new()));
    Ok(())
}

#[test]
fn float32_widens_exactly() -> Result<(), IPanic> {
    rawpack_testhelpers::setup();

    let f = 0.1f32;
    let mut bytes = vec![0xca];
    bytes.extend_from_slice(&f.to_bits().to_be_bytes());
    assert_eq!(from_slice(&bytes)?, Value::Float(f as f64));

    // and goes back out as float64
    assert_eq!(to_vec(&from_slice(&bytes)?)?[0], 0xcb);
    Ok(())
}
