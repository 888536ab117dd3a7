//! Bounded capture of the tail of a byte stream.
//!
//! [`TailRing`] keeps only the last `limit` bytes written to it. It is used
//! to remember the end of a child process's output so that a failing step
//! can report it without buffering the whole log.
//!
//! # Examples
//!
//! ```
//! use actkit::tailring::TailRing;
//! use std::io::Write;
//!
//! let mut ring = TailRing::new(8);
//! ring.write_all(b"abcdefgh").unwrap();
//! ring.write_all(b"XYZ").unwrap();
//! assert_eq!(ring.to_string_lossy(), "defghXYZ");
//! ```

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A thread-safe buffer that keeps the last `limit` bytes written.
///
/// Writes always succeed and report the full length, even when most of the
/// chunk is immediately discarded. A limit of zero keeps nothing.
#[derive(Debug)]
pub struct TailRing {
    buf: Mutex<Vec<u8>>,
    limit: usize,
}

impl TailRing {
    /// Create a ring that keeps at most `limit` bytes.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            buf: Mutex::new(Vec::new()),
            limit,
        }
    }

    /// Create a ring that keeps at most `kib` KiB.
    #[must_use]
    pub fn with_kib(kib: usize) -> Self {
        Self::new(kib.saturating_mul(1024))
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        // The buffer is valid after any partial write, so a poisoned lock is usable.
        self.buf.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append `chunk`, discarding the oldest bytes beyond the limit.
    pub fn push(&self, chunk: &[u8]) {
        if self.limit == 0 {
            return;
        }

        let mut buf = self.lock();

        if chunk.len() >= self.limit {
            buf.clear();
            buf.extend_from_slice(&chunk[chunk.len() - self.limit..]);
            return;
        }

        let overflow = (buf.len() + chunk.len()).saturating_sub(self.limit);
        if overflow > 0 {
            buf.drain(..overflow);
        }
        buf.extend_from_slice(chunk);
    }

    /// A copy of the retained bytes.
    #[must_use]
    pub fn bytes(&self) -> Vec<u8> {
        self.lock().clone()
    }

    /// The retained bytes as text, replacing invalid UTF-8.
    ///
    /// The cut point is byte-based, so a multi-byte character split at the
    /// start of the tail shows up as a replacement character.
    #[must_use]
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    /// Discard all retained bytes.
    pub fn reset(&self) {
        self.lock().clear();
    }

    /// Number of bytes currently retained.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` if nothing is retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// The configured limit.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.limit
    }
}

impl Write for TailRing {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.push(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Write for &TailRing {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.push(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A writer that forwards everything to an optional destination and to a
/// shared [`TailRing`].
///
/// # Examples
///
/// ```
/// use actkit::tailring::{Tee, TailRing};
/// use std::io::Write;
/// use std::sync::Arc;
///
/// let ring = Arc::new(TailRing::new(4));
/// let mut tee = Tee::new(Some(Vec::new()), Arc::clone(&ring));
/// tee.write_all(b"hello").unwrap();
///
/// assert_eq!(tee.into_inner().unwrap(), b"hello");
/// assert_eq!(ring.to_string_lossy(), "ello");
/// ```
#[derive(Debug)]
pub struct Tee<W> {
    dst: Option<W>,
    ring: Arc<TailRing>,
}

impl<W: Write> Tee<W> {
    /// Create a tee. With `dst == None`, bytes only go to the ring.
    pub fn new(dst: Option<W>, ring: Arc<TailRing>) -> Self {
        Self { dst, ring }
    }

    /// Consume the tee, returning the destination writer.
    pub fn into_inner(self) -> Option<W> {
        self.dst
    }
}

impl<W: Write> Write for Tee<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Some(dst) = self.dst.as_mut() {
            dst.write_all(buf)?;
        }
        self.ring.push(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.dst.as_mut() {
            Some(dst) => dst.flush(),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn write_str(mut w: impl Write, s: &str) {
        w.write_all(s.as_bytes()).unwrap();
    }

    #[test]
    fn test_keeps_tail_basic() {
        let ring = TailRing::new(8);
        write_str(&ring, "abcd");
        assert_eq!(ring.to_string_lossy(), "abcd");
        write_str(&ring, "efgh");
        assert_eq!(ring.to_string_lossy(), "abcdefgh");
        write_str(&ring, "XYZ");
        assert_eq!(ring.to_string_lossy(), "defghXYZ");
    }

    #[test]
    fn test_single_chunk_bigger_than_limit() {
        let ring = TailRing::new(5);
        write_str(&ring, "0123456789");
        assert_eq!(ring.to_string_lossy(), "56789");
    }

    #[test]
    fn test_len_and_capacity() {
        let ring = TailRing::new(3);
        assert_eq!(ring.capacity(), 3);
        assert_eq!(ring.len(), 0);
        assert!(ring.is_empty());
        write_str(&ring, "ab");
        assert_eq!(ring.len(), 2);
        write_str(&ring, "cd");
        assert_eq!(ring.len(), 3);
        assert_eq!(ring.to_string_lossy(), "bcd");
    }

    #[test]
    fn test_with_kib() {
        assert_eq!(TailRing::with_kib(2).capacity(), 2048);
    }

    #[test]
    fn test_reset() {
        let ring = TailRing::new(4);
        write_str(&ring, "wxyz");
        assert_eq!(ring.len(), 4);
        ring.reset();
        assert_eq!(ring.len(), 0);
        assert_eq!(ring.to_string_lossy(), "");
    }

    #[test]
    fn test_zero_limit_keeps_nothing() {
        let mut ring = TailRing::new(0);
        assert_eq!(ring.write(b"whatever").unwrap(), 8);
        assert!(ring.is_empty());
        assert_eq!(ring.to_string_lossy(), "");
    }

    #[test]
    fn test_bytes_returns_copy() {
        let ring = TailRing::new(4);
        write_str(&ring, "abcd");
        let mut bytes = ring.bytes();
        assert_eq!(bytes, b"abcd");
        bytes[0] = b'Z';
        assert_eq!(ring.to_string_lossy(), "abcd");
    }

    #[test]
    fn test_tee_writes_both() {
        let ring = Arc::new(TailRing::new(4));
        let mut tee = Tee::new(Some(Vec::new()), Arc::clone(&ring));
        write_str(&mut tee, "hello");
        assert_eq!(tee.into_inner().unwrap(), b"hello");
        assert_eq!(ring.to_string_lossy(), "ello");
    }

    #[test]
    fn test_tee_without_destination() {
        let ring = Arc::new(TailRing::new(3));
        let mut tee: Tee<Vec<u8>> = Tee::new(None, Arc::clone(&ring));
        write_str(&mut tee, "abcd");
        assert_eq!(ring.to_string_lossy(), "bcd");
    }

    #[test]
    fn test_interleaved_writes() {
        let ring = TailRing::new(10);
        for chunk in ["12345", "678", "9", "0"] {
            write_str(&ring, chunk);
        }
        assert_eq!(ring.to_string_lossy(), "1234567890");
        write_str(&ring, "ABCDE");
        assert_eq!(ring.to_string_lossy(), "67890ABCDE");
    }

    #[test]
    fn test_huge_chunk_followed_by_small() {
        let ring = TailRing::new(6);
        write_str(&ring, "XXXXXXXXXXXX");
        assert_eq!(ring.to_string_lossy(), "XXXXXX");
        write_str(&ring, "12");
        assert_eq!(ring.to_string_lossy(), "XXXX12");
    }

    #[test]
    fn test_concurrent_writers_stay_bounded() {
        let limit = 1024;
        let ring = Arc::new(TailRing::new(limit));

        let handles: Vec<_> = (0u8..32)
            .map(|i| {
                let ring = Arc::clone(&ring);
                thread::spawn(move || {
                    let mut line = vec![b'A' + i % 26; 31];
                    line.push(b'\n');
                    for round in 0..200 {
                        for _ in 0..=(round % 3) {
                            ring.push(&line);
                        }
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let bytes = ring.bytes();
        assert!(bytes.len() <= limit);
        assert!(bytes.iter().all(|b| *b == b'\n' || b.is_ascii_uppercase()));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// The ring always holds exactly the tail of the concatenated input
            #[test]
            fn ring_matches_sequential_model(
                limit in 0usize..64,
                chunks in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..80), 0..20),
            ) {
                let ring = TailRing::new(limit);
                let mut all = Vec::new();
                for chunk in &chunks {
                    ring.push(chunk);
                    all.extend_from_slice(chunk);
                }
                let start = all.len().saturating_sub(limit);
                prop_assert_eq!(ring.bytes(), all[start..].to_vec());
            }
        }
    }
}
