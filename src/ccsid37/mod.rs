//! EBCDIC code page CCSID 37 restricted to printable ASCII.
//!
//! ```text
//!  |00|10|20|30|40|50|60|70|80|90|A0|B0|C0|D0|E0|F0
//! -------------------------------------------------
//! 0|  |  |  |  |sp|& |- |  |  |  |  |  |  |  |  |0
//! 1|  |  |  |  |  |  |/ |  |  |  |  |  |A |J |  |1
//! 2|  |  |  |  |  |  |  |  |  |  |  |  |B |K |S |2
//! 3|  |  |  |  |  |  |  |  |  |  |  |  |C |L |T |3
//! 4|  |  |  |  |  |  |  |  |  |  |  |  |D |M |U |4
//! 5|  |  |  |  |  |  |  |  |  |  |  |  |E |N |V |5
//! 6|  |  |  |  |  |  |  |  |  |  |  |  |F |O |W |6
//! 7|  |  |  |  |  |  |  |  |  |  |  |  |G |P |X |7
//! 8|  |  |  |  |  |  |  |  |  |  |  |  |H |Q |Y |8
//! 9|  |  |  |  |  |  |  |  |  |  |  |  |I |R |Z |9
//! A|  |  |  |  |  |  |  |: |  |  |  |  |  |  |  |
//! B|  |  |  |  |. |  |, |# |  |  |  |  |  |  |  |
//! C|  |  |  |  |< |* |% |@ |  |  |  |  |  |  |  |
//! D|  |  |  |  |( |) |_ |' |  |  |  |  |  |  |  |
//! E|  |  |  |  |+ |; |> |= |  |  |  |  |  |  |  |
//! F|  |  |  |  |  |  |? |" |  |  |  |  |  |  |  |
//! ```
//!
//! Any character or byte outside this table is rejected; nothing is substituted.

pub mod string;

pub use crate::code_page::{decode, encode, CodePage};
pub use string::Ccsid37String;

pub type Encoder = crate::code_page::Encoder<'static, 58>;
pub type Decoder = crate::code_page::Decoder<'static, 58>;

pub const PAIRS: [(char, u8); 58] = [
    (' ', 0x40),
    ('.', 0x4b),
    ('<', 0x4c),
    ('(', 0x4d),
    ('+', 0x4e),
    ('&', 0x50),
    ('*', 0x5c),
    (')', 0x5d),
    (';', 0x5e),
    ('-', 0x60),
    ('/', 0x61),
    (',', 0x6b),
    ('%', 0x6c),
    ('_', 0x6d),
    ('>', 0x6e),
    ('?', 0x6f),
    (':', 0x7a),
    ('#', 0x7b),
    ('@', 0x7c),
    ('\'', 0x7d),
    ('=', 0x7e),
    ('"', 0x7f),
    ('A', 0xc1),
    ('B', 0xc2),
    ('C', 0xc3),
    ('D', 0xc4),
    ('E', 0xc5),
    ('F', 0xc6),
    ('G', 0xc7),
    ('H', 0xc8),
    ('I', 0xc9),
    ('J', 0xd1),
    ('K', 0xd2),
    ('L', 0xd3),
    ('M', 0xd4),
    ('N', 0xd5),
    ('O', 0xd6),
    ('P', 0xd7),
    ('Q', 0xd8),
    ('R', 0xd9),
    ('S', 0xe2),
    ('T', 0xe3),
    ('U', 0xe4),
    ('V', 0xe5),
    ('W', 0xe6),
    ('X', 0xe7),
    ('Y', 0xe8),
    ('Z', 0xe9),
    ('0', 0xf0),
    ('1', 0xf1),
    ('2', 0xf2),
    ('3', 0xf3),
    ('4', 0xf4),
    ('5', 0xf5),
    ('6', 0xf6),
    ('7', 0xf7),
    ('8', 0xf8),
    ('9', 0xf9),
];

pub static CODE_PAGE: CodePage<58> = match CodePage::new(&PAIRS) {
    Ok(code_page) => code_page,
    Err(_) => panic!("Could not build code page"),
};

static ENCODER: Encoder = Encoder::new(&CODE_PAGE);
static DECODER: Decoder = Decoder::new(&CODE_PAGE);

impl Encoder {
    pub fn default() -> &'static Self {
        &ENCODER
    }
}

impl Decoder {
    pub fn default() -> &'static Self {
        &DECODER
    }
}

/// Returns the code of a single character.
///
/// A single lookup has no position, so the `index` of an `UnsupportedCharacter` error is always 0.
pub fn char_code_at(character: char) -> Result<u8, encode::Error> {
    Encoder::default().encode_char(character, 0)
}

/// Returns the character of a single code.
///
/// A single lookup has no position, so the `index` of an `UnsupportedByte` error is always 0.
pub fn from_char_code(byte: u8) -> Result<char, decode::Error> {
    Decoder::default().decode_byte(byte, 0)
}

pub fn encode(input: impl AsRef<str>) -> Result<Vec<u8>, encode::Error> {
    Encoder::default().encode(input)
}

pub fn encode_into(input: impl AsRef<str>, output: &mut impl AsMut<[u8]>) -> Result<usize, encode::Error> {
    Encoder::default().encode_into(input, output)
}

pub fn decode(input: impl AsRef<[u8]>) -> Result<Ccsid37String, decode::Error> {
    Decoder::default().decode(input).map(Ccsid37String::new_unchecked)
}

pub fn decode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, decode::Error> {
    Decoder::default().decode_into(input, output)
}

pub fn valid(input: impl AsRef<str>) -> bool {
    Encoder::default().valid(input)
}
