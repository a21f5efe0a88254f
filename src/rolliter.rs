use crate::roll::Roll;
use readfilter::CharWhitelist;
use std::io::{self, ErrorKind, Read};

/// Iterator over rolls recorded as text. Every '1' through '6' is a die, taken two at a time.
/// Anything else (whitespace, commas, other digits) is skipped. A lone trailing die is dropped.
///
/// A read error is handed out once, then iteration stops.
pub struct RollIter<R>
where
    R: Read,
{
    input: CharWhitelist<R>,
    done: bool,
}

impl<R> RollIter<R>
where
    R: Read,
{
    pub fn new(input: R) -> Self {
        Self {
            input: CharWhitelist::new(input, "123456"),
            done: false,
        }
    }
}

impl<R> Iterator for RollIter<R>
where
    R: Read,
{
    type Item = io::Result<Roll>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut buf = [0; 2];
        match self.input.read_exact(&mut buf) {
            Ok(()) => {
                let roll = Roll::new([buf[0] - b'0', buf[1] - b'0'])
                    .map_err(|e| io::Error::new(ErrorKind::InvalidData, e));
                if roll.is_err() {
                    self.done = true;
                }
                Some(roll)
            }
            Err(e) => {
                self.done = true;
                match e.kind() {
                    ErrorKind::UnexpectedEof => None,
                    _ => Some(Err(e)),
                }
            }
        }
    }
}

#[cfg(test)]
pub(crate) struct FailingReader {
    data: &'static [u8],
    pos: usize,
}

#[cfg(test)]
impl FailingReader {
    /// Hands out `data`, then every further read fails
    pub(crate) fn new(data: &'static [u8]) -> Self {
        Self { data, pos: 0 }
    }
}

#[cfg(test)]
impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pos >= self.data.len() {
            return Err(io::Error::new(ErrorKind::Other, "device went away"));
        }
        let n = std::cmp::min(buf.len(), self.data.len() - self.pos);
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}
