//! Fuzzing entry points for hms-core
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_parse

use hms_core::{format_hms, parse_hms, Hms};

pub fn fuzz_parse(data: &[u8]) {
    // Arbitrary bytes, lossily decoded - should never panic
    let text = String::from_utf8_lossy(data);
    let _ = parse_hms(&text);
}

pub fn fuzz_format(data: &[u8]) {
    // Every 8-byte chunk is an f64 bit pattern
    for chunk in data.chunks_exact(8) {
        let mut bits = [0u8; 8];
        bits.copy_from_slice(chunk);
        let value = Hms::from_seconds(f64::from_le_bytes(bits));

        let rendered = format_hms(value);
        let parsed = parse_hms(&rendered);

        // Finite values must survive a round trip
        if value.seconds().is_finite() {
            assert_eq!(parsed.seconds().to_bits(), value.seconds().to_bits());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzz_parse_empty() {
        fuzz_parse(&[]);
    }

    #[test]
    fn test_fuzz_parse_random() {
        fuzz_parse(&[0x12, 0x34, 0x56, 0x78]);
        fuzz_parse(b"-99:59:59.");
        fuzz_parse(&[0xFF; 64]);
    }

    #[test]
    fn test_fuzz_format_empty() {
        fuzz_format(&[]);
    }

    #[test]
    fn test_fuzz_format_random() {
        fuzz_format(&[0xFF; 1024]);
        fuzz_format(&1.5f64.to_le_bytes());
        fuzz_format(&(-0.0f64).to_le_bytes());
        fuzz_format(&2.0e19f64.to_le_bytes());
        fuzz_format(&f64::MAX.to_le_bytes());
    }
}
