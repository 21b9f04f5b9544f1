use super::CodePage;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The output buffer was too small to contain the entire input.
    BufferTooSmall,
    UnsupportedCharacter { character: char, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
            Error::UnsupportedCharacter { character, index } => write!(f, "Unsupported character {:?} at index {}", character, index),
        }
    }
}

pub struct Encoder<'a, const N: usize> {
    code_page: &'a CodePage<N>,
}

impl<'a, const N: usize> Encoder<'a, N> {
    pub const fn new(code_page: &'a CodePage<N>) -> Self {
        Self { code_page }
    }

    /// Looks up a single character. `index` is only used to locate the character in the error.
    pub fn encode_char(&self, character: char, index: usize) -> Result<u8, Error> {
        self.code_page.code(character).ok_or(Error::UnsupportedCharacter { character, index })
    }

    /// Returns the position and value of the first character the code page cannot represent.
    pub fn first_unsupported(&self, input: impl AsRef<str>) -> Option<(usize, char)> {
        input.as_ref().chars().enumerate().find(|&(_, character)| !self.code_page.contains(character))
    }

    /// The whole input is checked before anything is written, so `output` is left untouched on error.
    pub fn encode_into(&self, input: impl AsRef<str>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let input = input.as_ref();
        let output = output.as_mut();
        if let Some((index, character)) = self.first_unsupported(input) {
            return Err(Error::UnsupportedCharacter { character, index });
        }
        let len = input.chars().count();
        if output.len() < len {
            return Err(Error::BufferTooSmall);
        }
        for (index, character) in input.chars().enumerate() {
            output[index] = self.encode_char(character, index)?;
        }
        Ok(len)
    }

    pub fn encode(&self, input: impl AsRef<str>) -> Result<Vec<u8>, Error> {
        input
            .as_ref()
            .chars()
            .enumerate()
            .map(|(index, character)| self.encode_char(character, index))
            .collect()
    }

    pub fn valid(&self, input: impl AsRef<str>) -> bool {
        self.first_unsupported(input).is_none()
    }
}
