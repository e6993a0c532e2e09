//! Checksum a file on disk, reading in bounded chunks.

use super::{ChecksumError, ChecksumReport, SimpleChecksum};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

const DEFAULT_BUF_SIZE: usize = 64 * 1024;
const MAX_BUF_SIZE: usize = 16 * DEFAULT_BUF_SIZE;

/// Checksum the file at `path`, reading `read_buffer_bytes` at a time (0 = 64 KiB,
/// capped at 1 MiB).
///
/// The whole file is scanned so `bytes_seen` reflects its true length; bytes past the
/// limit never change the report. The handle is closed before returning on every path.
pub fn checksum_path(
    path: &Path,
    read_buffer_bytes: usize,
) -> Result<ChecksumReport, ChecksumError> {
    let mut f = File::open(path).map_err(|e| ChecksumError::file_access(path, e))?;
    let buf_size = if read_buffer_bytes == 0 {
        DEFAULT_BUF_SIZE
    } else {
        read_buffer_bytes.min(MAX_BUF_SIZE)
    };
    let mut buf = vec![0u8; buf_size];
    let mut acc = SimpleChecksum::new();
    loop {
        let n = match f.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(ChecksumError::file_access(path, e)),
        };
        acc.update(&buf[..n]);
    }
    drop(f);

    tracing::debug!(
        path = %path.display(),
        bytes_seen = acc.bytes_seen(),
        bytes_checksummed = acc.bytes_checksummed(),
        raw_sum = acc.raw_sum(),
        saturated = acc.is_saturated(),
        "checksum complete"
    );
    Ok(acc.finish())
}
