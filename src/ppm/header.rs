//! Header tokenizer: whitespace and `#` comment skipping, decimal fields.

/// Returned when no decimal digit is found where a number is expected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct NotANumber;

/// Space, tab, CR and LF. Nothing else counts (no VT/FF).
#[inline]
pub(crate) fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// Read position within a header buffer.
///
/// The position never exceeds `data.len()`; every lookup goes through
/// [`peek`](Self::peek), so scanning past the end is impossible.
#[derive(Clone, Debug)]
pub(crate) struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(data: &'a [u8], pos: usize) -> Self {
        Self {
            data,
            pos: pos.min(data.len()),
        }
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Consume one byte, whatever it is.
    pub(crate) fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    /// Advance past the rest of the current line, including its terminator
    /// (CR, LF, or CR LF). Any other byte, NUL included, is comment text.
    pub(crate) fn skip_to_eol(&mut self) {
        while let Some(b) = self.peek() {
            if b == b'\r' || b == b'\n' {
                break;
            }
            self.pos += 1;
        }
        if self.peek() == Some(b'\r') {
            self.pos += 1;
        }
        if self.peek() == Some(b'\n') {
            self.pos += 1;
        }
    }

    /// Skip whitespace runs and `#` line comments until a token byte or EOF.
    pub(crate) fn skip_whitespace(&mut self) {
        loop {
            while self.peek().is_some_and(is_whitespace) {
                self.pos += 1;
            }
            if self.peek() == Some(b'#') {
                self.skip_to_eol();
            } else {
                break;
            }
        }
    }

    /// Read the next unsigned decimal field.
    ///
    /// Saturates at `u32::MAX`; callers range-check the result.
    pub(crate) fn read_number(&mut self) -> Result<u32, NotANumber> {
        self.skip_whitespace();
        if !self.peek().is_some_and(|b| b.is_ascii_digit()) {
            return Err(NotANumber);
        }
        let mut value: u32 = 0;
        while let Some(b) = self.peek().filter(u8::is_ascii_digit) {
            value = value.saturating_mul(10).saturating_add(u32::from(b - b'0'));
            self.pos += 1;
        }
        log::trace!("ppm header: number {value} ending at offset {}", self.pos);
        Ok(value)
    }
}
