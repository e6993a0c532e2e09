//! Additive firmware checksum: sum of the first 32 KiB of byte values, reported mod 65536.
//!
//! The accumulator is streaming so callers can feed a file in chunks; the sum is
//! kept in full precision and only reduced when the report is produced.

mod error;
mod file;

use std::fmt;

pub use error::ChecksumError;
pub use file::checksum_path;

/// Number of leading bytes that contribute to the checksum (128 × 256).
pub const CHECKSUM_BYTE_LIMIT: u64 = 128 * 256;

/// The reported checksum is the raw sum reduced modulo this value.
pub const CHECKSUM_MODULUS: u32 = 65536;

/// File checksummed when no path is given on the command line or in config.
pub const DEFAULT_FIRMWARE_FILE: &str = "firmware2.bin";

/// Running additive checksum over a byte stream.
///
/// `bytes_checksummed == min(bytes_seen, CHECKSUM_BYTE_LIMIT)` holds after every update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimpleChecksum {
    bytes_seen: u64,
    bytes_checksummed: u64,
    // At most 32768 * 255 = 8_355_840, well within u32.
    sum: u32,
}

impl SimpleChecksum {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next chunk of the stream. Bytes past the limit are counted but not summed.
    pub fn update(&mut self, bytes: &[u8]) {
        let remaining = CHECKSUM_BYTE_LIMIT - self.bytes_checksummed;
        let take = (bytes.len() as u64).min(remaining) as usize;
        self.sum += bytes[..take].iter().map(|&b| u32::from(b)).sum::<u32>();
        self.bytes_checksummed += take as u64;
        self.bytes_seen += bytes.len() as u64;
    }

    pub fn bytes_seen(&self) -> u64 {
        self.bytes_seen
    }

    pub fn bytes_checksummed(&self) -> u64 {
        self.bytes_checksummed
    }

    /// Unreduced sum of the checksummed bytes.
    pub fn raw_sum(&self) -> u32 {
        self.sum
    }

    /// True once the byte limit has been reached; further input cannot change the result.
    pub fn is_saturated(&self) -> bool {
        self.bytes_checksummed == CHECKSUM_BYTE_LIMIT
    }

    pub fn finish(&self) -> ChecksumReport {
        ChecksumReport {
            bytes_checksummed: self.bytes_checksummed,
            checksum: (self.sum % CHECKSUM_MODULUS) as u16,
        }
    }
}

/// Final result: how many bytes were summed and the sum mod 65536.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecksumReport {
    pub bytes_checksummed: u64,
    pub checksum: u16,
}

impl fmt::Display for ChecksumReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Checksummed {} bytes, got {}.",
            self.bytes_checksummed, self.checksum
        )
    }
}

/// Checksum an in-memory buffer in one pass.
pub fn checksum_bytes(bytes: &[u8]) -> ChecksumReport {
    let mut acc = SimpleChecksum::new();
    acc.update(bytes);
    acc.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_reports_zero() {
        let report = checksum_bytes(&[]);
        assert_eq!(report.bytes_checksummed, 0);
        assert_eq!(report.checksum, 0);
        assert_eq!(report.to_string(), "Checksummed 0 bytes, got 0.");
    }

    #[test]
    fn short_input_sums_every_byte() {
        let report = checksum_bytes(&[1, 2, 3, 250]);
        assert_eq!(report.bytes_checksummed, 4);
        assert_eq!(report.checksum, 256);
    }

    #[test]
    fn exactly_limit_of_ones() {
        let data = vec![0x01u8; CHECKSUM_BYTE_LIMIT as usize];
        assert_eq!(
            checksum_bytes(&data).to_string(),
            "Checksummed 32768 bytes, got 32768."
        );
    }

    #[test]
    fn one_past_limit_of_ff_reduces_once() {
        let data = vec![0xFFu8; CHECKSUM_BYTE_LIMIT as usize + 1];
        let mut acc = SimpleChecksum::new();
        acc.update(&data);
        assert_eq!(acc.raw_sum(), 8_355_840);
        assert_eq!(acc.bytes_seen(), 32769);
        assert_eq!(
            acc.finish().to_string(),
            "Checksummed 32768 bytes, got 42240."
        );
    }

    #[test]
    fn trailing_bytes_do_not_affect_result() {
        let head: Vec<u8> = (0..CHECKSUM_BYTE_LIMIT).map(|i| (i * 7 % 251) as u8).collect();
        let mut a = head.clone();
        a.extend(std::iter::repeat(0x00).take(40_000 - head.len()));
        let mut b = head.clone();
        b.extend((0..(40_000 - head.len())).map(|i| (i % 256) as u8));
        assert_eq!(checksum_bytes(&a), checksum_bytes(&b));
        assert_eq!(checksum_bytes(&a), checksum_bytes(&head));
    }

    #[test]
    fn chunked_updates_match_single_pass() {
        let data: Vec<u8> = (0..50_000u32).map(|i| (i * 31 % 256) as u8).collect();
        let expected = checksum_bytes(&data);
        for chunk in [1usize, 7, 4096, 32767, 32768, 32769] {
            let mut acc = SimpleChecksum::new();
            for part in data.chunks(chunk) {
                acc.update(part);
                assert_eq!(
                    acc.bytes_checksummed(),
                    acc.bytes_seen().min(CHECKSUM_BYTE_LIMIT)
                );
            }
            assert_eq!(acc.finish(), expected, "chunk size {chunk}");
            assert_eq!(acc.bytes_seen(), data.len() as u64);
        }
    }

    #[test]
    fn saturation_flag_flips_at_limit() {
        let mut acc = SimpleChecksum::new();
        acc.update(&vec![0u8; CHECKSUM_BYTE_LIMIT as usize - 1]);
        assert!(!acc.is_saturated());
        acc.update(&[9]);
        assert!(acc.is_saturated());
        acc.update(&[200, 200]);
        assert_eq!(acc.raw_sum(), 9);
    }
}
