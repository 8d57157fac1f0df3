//! Generated inputs: round-trips hold and the decoder never panics.

use bolero::check;
use bytes::Bytes;
use rawpack_msgpack::{Decoder, from_slice, to_vec};
use rawpack_value::{VMap, Value};

/// Reads generator choices from fuzz input, yielding zeros once it runs dry.
struct Choices<'a> {
    bytes: &'a [u8],
}

impl Choices<'_> {
    fn byte(&mut self) -> u8 {
        match self.bytes.split_first() {
            Some((&b, rest)) => {
                self.bytes = rest;
                b
            }
            None => 0,
        }
    }

    fn u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        for b in &mut buf {
            *b = self.byte();
        }
        u64::from_be_bytes(buf)
    }
}

/// Builds a value without extensions. Lengths cross the fix/16-bit size
/// class boundaries and integers cover every width.
fn generate(choices: &mut Choices<'_>, depth: usize) -> Value {
    let kinds = if depth == 0 { 5 } else { 7 };
    match choices.byte() % kinds {
        0 => Value::Nil,
        1 => Value::Bool(choices.byte() & 1 == 1),
        2 => {
            // Shifting right keeps the sign, so narrow widths get both signs.
            let shift = [56, 48, 32, 0][(choices.byte() % 4) as usize];
            Value::Integer((choices.u64() as i64) >> shift)
        }
        3 => Value::Float(f64::from_bits(choices.u64())),
        4 => {
            let len = (choices.byte() % 40) as usize;
            let bytes: Vec<u8> = (0..len).map(|_| choices.byte()).collect();
            Value::Bytes(Bytes::from(bytes))
        }
        5 => {
            let len = (choices.byte() % 20) as usize;
            Value::Array((0..len).map(|_| generate(choices, depth - 1)).collect())
        }
        _ => {
            let len = (choices.byte() % 18) as usize;
            let mut map = VMap::new();
            for _ in 0..len {
                let key = generate(choices, depth - 1);
                let value = generate(choices, depth - 1);
                map.insert(key, value);
            }
            Value::Map(map)
        }
    }
}

#[test]
fn generated_values_roundtrip() {
    rawpack_testhelpers::setup();

    check!().with_type::<Vec<u8>>().for_each(|bytes: &Vec<u8>| {
        let value = generate(&mut Choices { bytes }, 3);
        let encoded = to_vec(&value).unwrap();
        assert_eq!(from_slice(&encoded).unwrap(), value, "encoded as {encoded:02x?}");
    });
}

#[test]
fn arbitrary_input_never_panics() {
    rawpack_testhelpers::setup();

    check!().with_type::<Vec<u8>>().for_each(|bytes: &Vec<u8>| {
        if bytes.len() > 1024 {
            // Comparing decoded trees recurses; keep nesting modest.
            return;
        }

        let mut decoder = Decoder::new(bytes);
        if let Ok(value) = decoder.decode_value() {
            assert!(decoder.position() <= bytes.len());
            let encoded = to_vec(&value).unwrap();
            assert_eq!(from_slice(&encoded).unwrap(), value, "decoded from {bytes:02x?}");
        }
    });
}
