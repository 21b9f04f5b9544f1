//! Codec between printable ASCII and EBCDIC code page CCSID 37.
//!
//! ```
//! use ebcdic_ccsid37::ccsid37;
//!
//! let bytes = ccsid37::encode("HELLO WORLD").unwrap();
//! assert_eq!(bytes, [0xc8, 0xc5, 0xd3, 0xd3, 0xd6, 0x40, 0xe6, 0xd6, 0xd9, 0xd3, 0xc4]);
//! assert_eq!(ccsid37::decode(&bytes).unwrap(), "HELLO WORLD");
//! assert!(!ccsid37::valid("あ"));
//! ```

pub mod ccsid37;
pub mod code_page;

pub use ccsid37::Ccsid37String;
pub use code_page::CodePage;
