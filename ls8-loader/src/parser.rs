//! Image line parsing

use crate::error::{LoaderError, Result};

/// Parse one line of an image file.
///
/// A line carries an instruction byte only when it begins with '0' or '1';
/// anything else (blank lines, comments) yields `None`. The byte is the
/// line's leading 8 characters read as a binary literal, and whatever
/// follows them is commentary. A qualifying line whose leading characters
/// are not 8 binary digits is an error, reported with its line number.
pub fn parse_line(line: &str, line_num: usize) -> Result<Option<u8>> {
    if !line.starts_with('0') && !line.starts_with('1') {
        return Ok(None);
    }

    let invalid = || LoaderError::InvalidLine {
        line: line_num,
        content: line.trim_end().to_string(),
    };

    let bits = line.get(..8).ok_or_else(invalid)?;
    let byte = u8::from_str_radix(bits, 2).map_err(|_| invalid())?;
    Ok(Some(byte))
}
