//! Output line formatting.

use std::io::Write;
use std::path::Path;

use crate::error::SumError;

/// 8 lowercase hex digits of `sum`, most significant byte first.
pub fn format_sum(sum: u32) -> String {
    format!("{sum:08x}")
}

/// `<hex>  <path>\n`, or `<hex>\n` when there is no path.
pub fn format_line(sum: u32, path: Option<&Path>) -> Vec<u8> {
    let mut line = format_sum(sum).into_bytes();
    if let Some(path) = path {
        line.extend_from_slice(b"  ");
        line.extend_from_slice(&path_bytes(path));
    }
    line.push(b'\n');
    line
}

#[cfg(unix)]
fn path_bytes(path: &Path) -> std::borrow::Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    std::borrow::Cow::Borrowed(path.as_os_str().as_bytes())
}

#[cfg(not(unix))]
fn path_bytes(path: &Path) -> std::borrow::Cow<'_, [u8]> {
    match path.to_string_lossy() {
        std::borrow::Cow::Borrowed(s) => std::borrow::Cow::Borrowed(s.as_bytes()),
        std::borrow::Cow::Owned(s) => std::borrow::Cow::Owned(s.into_bytes()),
    }
}

/// Format and write one whole line with a single `write_all`.
pub fn write_line<W: Write>(out: &mut W, sum: u32, path: Option<&Path>) -> Result<(), SumError> {
    out.write_all(&format_line(sum, path)).map_err(SumError::write)
}
