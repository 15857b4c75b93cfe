//! Sequential runner: one stream or one file, one line out.

use std::io::{Read, Write};
use std::path::Path;

use crate::engine::digest::Digest;
use crate::engine::hashing::{digest_reader, sum_file};
use crate::engine::tools::write_line;
use crate::error::{STDIN_LABEL, SumError};
use crate::utils::config::IoConsts;

/// Digest `input` to EOF and write `<hex>\n`.
pub fn sum_stream<R: Read, W: Write>(input: &mut R, out: &mut W) -> Result<u32, SumError> {
    let mut buf = vec![0u8; IoConsts::READ_CHUNK_SIZE];
    let sum = digest_reader(input, &mut Digest::new(), &mut buf)
        .map_err(|e| SumError::read(STDIN_LABEL, e))?;
    write_line(out, sum, None)?;
    out.flush().map_err(SumError::write)?;
    Ok(sum)
}

/// Digest the file at `path` and write `<hex>  <path>\n`.
pub fn sum_path<W: Write>(path: &Path, out: &mut W) -> Result<u32, SumError> {
    let mut buf = vec![0u8; IoConsts::READ_CHUNK_SIZE];
    let sum = sum_file(path, &mut Digest::new(), &mut buf)?;
    write_line(out, sum, Some(path))?;
    out.flush().map_err(SumError::write)?;
    Ok(sum)
}
