//! File and stream digesting

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use crate::engine::digest::Digest;
use crate::error::SumError;

/// Reset `digest` and stream all of `reader` through it, `buf.len()` bytes at a time.
pub fn digest_reader<R: Read>(
    reader: &mut R,
    digest: &mut Digest,
    buf: &mut [u8],
) -> std::io::Result<u32> {
    digest.reset();
    loop {
        let n = match reader.read(buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        digest.update(&buf[..n]);
    }
    Ok(digest.finalize())
}

/// Open `path` and return its CRC32C. The file is closed before returning.
pub fn sum_file(path: &Path, digest: &mut Digest, buf: &mut [u8]) -> Result<u32, SumError> {
    let mut file =
        File::open(path).map_err(|e| SumError::open(path.display().to_string(), e))?;
    digest_reader(&mut file, digest, buf)
        .map_err(|e| SumError::read(path.display().to_string(), e))
}
