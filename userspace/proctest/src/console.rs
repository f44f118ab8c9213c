//! Prompted console I/O over the kernel's stdin/stdout descriptors

use std::collections::VecDeque;
use std::fmt;

use libsys::{Errno, Error};

use crate::error::{HarnessError, Result};
use crate::kernel::Kernel;

const READ_CHUNK: usize = 64;

/// Console owning the kernel handle it talks through.
///
/// Input is consumed scanf-style: whitespace-separated tokens, with any
/// bytes past the current token kept for the next read.
pub struct Console<K> {
    kernel: K,
    pending: VecDeque<u8>,
    at_eof: bool,
}

impl<K: Kernel> Console<K> {
    pub fn new(kernel: K) -> Self {
        Self {
            kernel,
            pending: VecDeque::new(),
            at_eof: false,
        }
    }

    pub fn kernel_mut(&mut self) -> &mut K {
        &mut self.kernel
    }

    pub fn into_kernel(self) -> K {
        self.kernel
    }

    /// Write all of `bytes`, retrying short writes.
    pub fn write_all(&mut self, mut bytes: &[u8]) -> Result<()> {
        while !bytes.is_empty() {
            let written = self.kernel.write(bytes).map_err(HarnessError::Console)?;
            if written == 0 {
                return Err(HarnessError::Console(Error::Os(Errno::EIO)));
            }
            bytes = &bytes[written.min(bytes.len())..];
        }
        Ok(())
    }

    pub fn print(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        self.write_all(fmt::format(args).as_bytes())
    }

    pub fn println(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        self.print(args)?;
        self.write_all(b"\n")
    }

    fn next_byte(&mut self) -> Result<Option<u8>> {
        if let Some(byte) = self.pending.pop_front() {
            return Ok(Some(byte));
        }
        if self.at_eof {
            return Ok(None);
        }
        let mut chunk = [0u8; READ_CHUNK];
        let read = self.kernel.read(&mut chunk).map_err(HarnessError::Console)?;
        if read == 0 {
            self.at_eof = true;
            return Ok(None);
        }
        self.pending.extend(&chunk[..read.min(READ_CHUNK)]);
        Ok(self.pending.pop_front())
    }

    /// Next whitespace-delimited token, keeping at most `limit` bytes.
    ///
    /// The rest of an overlong token is consumed and only counted, so the
    /// following read starts after it.
    pub fn read_token(&mut self, limit: usize) -> Result<Token> {
        let first = loop {
            match self.next_byte()? {
                Some(byte) if byte.is_ascii_whitespace() => continue,
                Some(byte) => break byte,
                None => return Err(HarnessError::InputClosed),
            }
        };
        let mut token = Token { bytes: Vec::new(), len: 0 };
        let mut next = Some(first);
        while let Some(byte) = next {
            if byte.is_ascii_whitespace() {
                break;
            }
            if token.bytes.len() < limit {
                token.bytes.push(byte);
            }
            token.len += 1;
            next = self.next_byte()?;
        }
        Ok(token)
    }

    /// Next token read as a C `%i` integer.
    pub fn read_int(&mut self) -> Result<i32> {
        let token = self.read_token(MAX_INT_TOKEN)?;
        token
            .complete()
            .and_then(|bytes| core::str::from_utf8(bytes).ok())
            .and_then(parse_c_int)
            .ok_or_else(|| HarnessError::InvalidNumber(token.lossy()))
    }

    /// Next token as a name for a buffer of `capacity` bytes, NUL included.
    /// The bytes are passed through as typed.
    pub fn read_name(&mut self, capacity: usize) -> Result<Vec<u8>> {
        let token = self.read_token(capacity)?;
        if token.len >= capacity {
            return Err(HarnessError::NameTooLong { len: token.len, capacity });
        }
        Ok(token.bytes)
    }
}

/// Longest integer token worth keeping; anything longer cannot fit an `i32`.
const MAX_INT_TOKEN: usize = 40;

/// A token read from the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Kept bytes, at most the read limit.
    pub bytes: Vec<u8>,
    /// Length of the token as typed.
    pub len: usize,
}

impl Token {
    /// The bytes, if none were dropped.
    pub fn complete(&self) -> Option<&[u8]> {
        (self.bytes.len() == self.len).then_some(self.bytes.as_slice())
    }

    fn lossy(&self) -> String {
        let mut text = String::from_utf8_lossy(&self.bytes).into_owned();
        if self.bytes.len() < self.len {
            text.push_str("...");
        }
        text
    }
}

/// Parse an integer the way C's `%i` conversion does: optional sign, then
/// `0x` hexadecimal, leading-`0` octal, or decimal.
pub fn parse_c_int(token: &str) -> Option<i32> {
    let (negative, unsigned) = match token.as_bytes().first()? {
        b'-' => (true, &token[1..]),
        b'+' => (false, &token[1..]),
        _ => (false, token),
    };
    let (radix, digits) = if let Some(hex) = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        (16, hex)
    } else if unsigned.len() > 1 && unsigned.starts_with('0') {
        (8, &unsigned[1..])
    } else {
        (10, unsigned)
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    let magnitude = i64::from_str_radix(digits, radix).ok()?;
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).ok()
}
