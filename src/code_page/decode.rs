use super::CodePage;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The output buffer was too small to contain the entire input.
    BufferTooSmall,
    UnsupportedByte { byte: u8, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
            Error::UnsupportedByte { byte, index } => write!(f, "Unsupported byte {:#04x} at index {}", byte, index),
        }
    }
}

pub struct Decoder<'a, const N: usize> {
    code_page: &'a CodePage<N>,
}

impl<'a, const N: usize> Decoder<'a, N> {
    pub const fn new(code_page: &'a CodePage<N>) -> Self {
        Self { code_page }
    }

    pub fn decode_byte(&self, byte: u8, index: usize) -> Result<char, Error> {
        self.code_page.character(byte).ok_or(Error::UnsupportedByte { byte, index })
    }

    pub fn first_unsupported(&self, input: impl AsRef<[u8]>) -> Option<(usize, u8)> {
        input.as_ref().iter().copied().enumerate().find(|&(_, byte)| self.code_page.character(byte).is_none())
    }

    /// Decodes into a buffer of ASCII bytes, one per input byte. The whole input is checked before
    /// anything is written, so `output` is left untouched on error.
    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let input = input.as_ref();
        let output = output.as_mut();
        if let Some((index, byte)) = self.first_unsupported(input) {
            return Err(Error::UnsupportedByte { byte, index });
        }
        if output.len() < input.len() {
            return Err(Error::BufferTooSmall);
        }
        for (index, &byte) in input.iter().enumerate() {
            output[index] = self.decode_byte(byte, index)? as u8;
        }
        Ok(input.len())
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<String, Error> {
        input
            .as_ref()
            .iter()
            .enumerate()
            .map(|(index, &byte)| self.decode_byte(byte, index))
            .collect()
    }
}
