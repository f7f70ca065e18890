//! Main loader logic

use crate::error::{LoaderError, Result};
use crate::parser::parse_line;
use ls8_spec::{IsaError, Program};
use std::path::Path;

/// Parse a full text image into a program
///
/// Bytes appear in the program in line order and are destined for memory
/// starting at address 0.
pub fn parse_image(source: &str) -> Result<Program> {
    let mut bytes = Vec::new();

    for (line_num, line) in source.lines().enumerate() {
        if let Some(byte) = parse_line(line, line_num + 1)? {
            bytes.push(byte);
        }
    }

    match Program::new(bytes) {
        Ok(program) => Ok(program),
        Err(IsaError::ProgramTooLarge { size }) => Err(LoaderError::ProgramTooLarge { size }),
    }
}

/// Read and parse an image file
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Program> {
    let source = std::fs::read_to_string(path)?;
    parse_image(&source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_image_simple() {
        let source = "\
# print8.ls8
10000010 # LDI R0,8
00000000
00001000
01000111 # PRN R0
00000000
00000001 # HLT
";
        let program = parse_image(source).unwrap();
        assert_eq!(
            program.bytes(),
            &[0b1000_0010, 0, 8, 0b0100_0111, 0, 0b0000_0001]
        );
    }

    #[test]
    fn test_parse_image_empty_source() {
        let program = parse_image("# nothing here\n\n; still nothing\n").unwrap();
        assert!(program.is_empty());
    }

    #[test]
    fn test_parse_image_reports_line_number() {
        // line 3 starts with a binary digit but is not 8 binary digits
        let source = "10000010\n00000000\n1x000000\n";
        let err = parse_image(source).unwrap_err();
        assert!(matches!(err, LoaderError::InvalidLine { line: 3, .. }));
    }

    #[test]
    fn test_parse_image_too_large() {
        let source = "00000000\n".repeat(257);
        let err = parse_image(&source).unwrap_err();
        assert!(matches!(err, LoaderError::ProgramTooLarge { size: 257 }));
    }

    #[test]
    fn test_load_file_missing() {
        let err = load_file("/nonexistent/image.ls8").unwrap_err();
        assert!(matches!(err, LoaderError::Io(_)));
    }
}
