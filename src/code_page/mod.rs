pub mod decode;
pub mod encode;

use std::{error, fmt};

pub use decode::Decoder;
pub use encode::Encoder;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    NonAsciiCharacter { character: char, index: usize },
    DuplicateCharacter { character: char, first: usize, second: usize },
    DuplicateCode { code: u8, first: usize, second: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:?} at index {}", character, index),
            Self::DuplicateCharacter { character, first, second } => {
                write!(f, "Duplicate character {:?} at indexes {} and {}", character, first, second)
            }
            Self::DuplicateCode { code, first, second } => write!(f, "Duplicate code {:#04x} at indexes {} and {}", code, first, second),
        }
    }
}

/// Single-byte code page restricted to ASCII characters.
///
/// Both lookup directions are derived from one list of `(character, code)` pairs, so they can
/// never disagree. Construction is a `const fn` and is meant to run at compile time.
pub struct CodePage<const N: usize> {
    pairs: [(char, u8); N],
    forward: [Option<u8>; 128],
    reverse: [Option<char>; 256],
}

impl<const N: usize> CodePage<N> {
    pub const fn new(pairs: &[(char, u8); N]) -> Result<Self, Error> {
        let mut forward: [Option<u8>; 128] = [None; 128];
        let mut reverse: [Option<char>; 256] = [None; 256];

        let mut index = 0;
        while index < N {
            let (character, code) = pairs[index];
            if !character.is_ascii() {
                return Err(Error::NonAsciiCharacter { character, index });
            }
            if forward[character as usize].is_some() {
                return Err(Error::DuplicateCharacter {
                    character,
                    first: first_character(pairs, character),
                    second: index,
                });
            }
            if reverse[code as usize].is_some() {
                return Err(Error::DuplicateCode {
                    code,
                    first: first_code(pairs, code),
                    second: index,
                });
            }
            forward[character as usize] = Some(code);
            reverse[code as usize] = Some(character);
            index += 1;
        }

        Ok(Self { pairs: *pairs, forward, reverse })
    }

    pub const fn code(&self, character: char) -> Option<u8> {
        if character.is_ascii() {
            self.forward[character as usize]
        } else {
            None
        }
    }

    pub const fn character(&self, code: u8) -> Option<char> {
        self.reverse[code as usize]
    }

    pub const fn contains(&self, character: char) -> bool {
        self.code(character).is_some()
    }

    pub fn pairs(&self) -> &[(char, u8)] {
        &self.pairs
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }
}

const fn first_character<const N: usize>(pairs: &[(char, u8); N], character: char) -> usize {
    let mut index = 0;
    while pairs[index].0 != character {
        index += 1;
    }
    index
}

const fn first_code<const N: usize>(pairs: &[(char, u8); N], code: u8) -> usize {
    let mut index = 0;
    while pairs[index].1 != code {
        index += 1;
    }
    index
}
