//! Internet and identifier generators.

use super::data::{LOREM_WORDS, TLDS};
use super::pick_str;
use synth_core::{FieldType, RandomSource, Value};
use uuid::Uuid;

/// Generate an internet-category value. Other types yield null.
pub fn generate<R: RandomSource>(field_type: FieldType, rng: &mut R) -> Value {
    match field_type {
        FieldType::Uuid => Value::String(generate_uuid_v4(rng).to_string()),
        FieldType::Url => Value::String(url(rng)),
        FieldType::Domain => Value::String(domain(rng)),
        FieldType::IpAddress => Value::String(ip_address(rng)),
        FieldType::MacAddress => Value::String(mac_address(rng)),
        FieldType::HexColor => Value::String(format!("#{:06x}", rng.next_int(0, 0xFF_FFFF))),
        _ => Value::Null,
    }
}

/// Generate a random UUID v4 using the provided source.
pub fn generate_uuid_v4<R: RandomSource>(rng: &mut R) -> Uuid {
    let mut bytes = [0u8; 16];
    for byte in bytes.iter_mut() {
        *byte = rng.next_int(0, 255) as u8;
    }

    // Set version (4) and variant (RFC 4122) bits
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    Uuid::from_bytes(bytes)
}

/// `doloramet.io`.
pub fn domain<R: RandomSource>(rng: &mut R) -> String {
    let a = pick_str(rng, LOREM_WORDS);
    let b = pick_str(rng, LOREM_WORDS);
    let tld = pick_str(rng, TLDS);
    format!("{a}{b}.{tld}")
}

/// `https://www.doloramet.io/tempor`.
pub fn url<R: RandomSource>(rng: &mut R) -> String {
    let host = domain(rng);
    let path = pick_str(rng, LOREM_WORDS);
    format!("https://www.{host}/{path}")
}

/// Public-looking IPv4 address (first octet 1-223).
pub fn ip_address<R: RandomSource>(rng: &mut R) -> String {
    let a = rng.next_int(1, 223);
    let b = rng.next_int(0, 255);
    let c = rng.next_int(0, 255);
    let d = rng.next_int(1, 254);
    format!("{a}.{b}.{c}.{d}")
}

/// `3A:0F:...` six uppercase hex pairs.
pub fn mac_address<R: RandomSource>(rng: &mut R) -> String {
    (0..6)
        .map(|_| format!("{:02X}", rng.next_int(0, 255)))
        .collect::<Vec<_>>()
        .join(":")
}
