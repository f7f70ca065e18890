//! # LS-8 Image Loader
//!
//! Parse LS-8 program images: text files carrying one instruction byte
//! per line as an 8-character binary literal, with everything after the
//! eighth character treated as commentary. Lines that do not begin with
//! '0' or '1' are skipped entirely.
//!
//! ## Example
//!
//! ```rust
//! use ls8_loader::parse_image;
//!
//! let source = "\
//! # print the number 8
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! 01000111 # PRN R0
//! 00000000
//! 00000001 # HLT
//! ";
//!
//! let program = parse_image(source).unwrap();
//! assert_eq!(program.len(), 6);
//! ```

pub mod error;
pub mod loader;
pub mod parser;

pub use error::{LoaderError, Result};
pub use loader::{load_file, parse_image};
pub use parser::parse_line;
