/// Byte cursor with one-byte lookahead.
///
/// `pos` indexes the current byte; `pos == len` is end of input. A rewind
/// marks the current byte to be processed again instead of advancing.
#[derive(Debug)]
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
    reconsume: bool,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            reconsume: false,
        }
    }

    /// Current byte, or `None` at end of input.
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Bytes after the current one.
    pub fn remaining(&self) -> &'a [u8] {
        self.input.get(self.pos + 1..).unwrap_or_default()
    }

    /// Bytes from the current one to the end.
    pub fn rest(&self) -> &'a [u8] {
        self.input.get(self.pos..).unwrap_or_default()
    }

    pub fn remaining_starts_with(&self, b: u8) -> bool {
        self.remaining().first() == Some(&b)
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Skip `n` extra bytes on top of the regular advance.
    pub fn skip(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.input.len());
    }

    /// Process the current byte again in the next state.
    pub fn step_back(&mut self) {
        self.reconsume = true;
    }

    /// Move to `pos` and process that byte next.
    pub fn rewind_to(&mut self, pos: usize) {
        self.pos = pos.min(self.input.len());
        self.reconsume = true;
    }

    /// Move to `pos` and let the regular advance step past it.
    pub fn jump_to(&mut self, pos: usize) {
        self.pos = pos.min(self.input.len());
    }

    /// Finish one step of the machine. Returns `false` once input is exhausted.
    pub fn advance(&mut self) -> bool {
        if core::mem::take(&mut self.reconsume) {
            return true;
        }
        if self.is_eof() {
            return false;
        }
        self.pos += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_and_advance() {
        let mut cur = Cursor::new(b"ab");
        assert_eq!(cur.peek(), Some(b'a'));
        assert!(cur.remaining_starts_with(b'b'));
        assert!(cur.advance());
        assert_eq!(cur.peek(), Some(b'b'));
        assert!(cur.advance());
        assert_eq!(cur.peek(), None);
        assert!(!cur.advance());
    }

    #[test]
    fn test_step_back_reprocesses() {
        let mut cur = Cursor::new(b"ab");
        cur.step_back();
        assert!(cur.advance());
        assert_eq!(cur.peek(), Some(b'a'));

        assert!(cur.advance());
        assert!(cur.advance());
        assert!(cur.is_eof());
        cur.step_back();
        assert!(cur.advance());
        assert!(cur.is_eof());
    }

    #[test]
    fn test_rewind_and_skip() {
        let mut cur = Cursor::new(b"abcd");
        cur.skip(2);
        assert_eq!(cur.peek(), Some(b'c'));
        assert_eq!(cur.rest(), b"cd");
        cur.rewind_to(0);
        assert!(cur.advance());
        assert_eq!(cur.peek(), Some(b'a'));
    }
}
