//! LIFO scratch buffer with auto-growing capacity.

/// Initial backing allocation, in bytes. The buffer starts unallocated and
/// grows to this size on the first write.
const INIT_CAPACITY: usize = 256;

/// A growable byte buffer with a top-of-stack offset.
///
/// Bytes are staged at the top with [`reserve`](Scratch::reserve),
/// [`push`](Scratch::push) or [`extend`](Scratch::extend), and taken back off
/// with [`discard`](Scratch::discard). The discarded window stays readable
/// until the next write, which lets a caller stage data of unknown length and
/// copy it out once the length is known.
///
/// A `Scratch` is scoped to a single encode or decode call. Its depth must be
/// back at zero when the buffer is dropped; a residual depth means staged
/// bytes were leaked and the drop panics.
///
/// # Example
///
/// ```
/// use json_tree_buffers::Scratch;
///
/// let mut scratch = Scratch::new();
/// scratch.extend(b"hello");
/// assert_eq!(scratch.depth(), 5);
/// assert_eq!(scratch.discard(5), b"hello");
/// assert_eq!(scratch.depth(), 0);
/// ```
#[derive(Default)]
pub struct Scratch {
    buf: Vec<u8>,
    top: usize,
}

impl Scratch {
    /// Creates an empty scratch buffer with no backing allocation.
    pub fn new() -> Self {
        Self {
            buf: Vec::new(),
            top: 0,
        }
    }

    /// Current top-of-stack offset (number of staged bytes).
    pub fn depth(&self) -> usize {
        self.top
    }

    /// Ensures `extra` more bytes fit above the current top, growing the
    /// backing allocation by ~1.5x steps when needed.
    fn ensure_capacity(&mut self, extra: usize) {
        let needed = self.top + extra;
        if needed <= self.buf.len() {
            return;
        }
        let mut capacity = if self.buf.is_empty() {
            INIT_CAPACITY
        } else {
            self.buf.len()
        };
        while capacity < needed {
            capacity += capacity >> 1;
        }
        self.buf.resize(capacity, 0);
    }

    /// Reserves a writable window of `n` fresh bytes at the top and advances
    /// the top past it.
    pub fn reserve(&mut self, n: usize) -> &mut [u8] {
        self.ensure_capacity(n);
        let start = self.top;
        self.top += n;
        &mut self.buf[start..self.top]
    }

    /// Retreats the top by `n` bytes and returns the discarded window. The
    /// window contents remain valid until the next write.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds the current depth.
    pub fn discard(&mut self, n: usize) -> &[u8] {
        assert!(n <= self.top, "scratch underflow: discard {n} of {}", self.top);
        self.top -= n;
        &self.buf[self.top..self.top + n]
    }

    /// Appends a single byte at the top.
    pub fn push(&mut self, byte: u8) {
        self.ensure_capacity(1);
        self.buf[self.top] = byte;
        self.top += 1;
    }

    /// Appends a byte slice at the top.
    pub fn extend(&mut self, bytes: &[u8]) {
        let window = self.reserve(bytes.len());
        window.copy_from_slice(bytes);
    }

    /// Rolls the top back to a previously recorded depth, abandoning
    /// everything staged above it.
    ///
    /// # Panics
    ///
    /// Panics if `depth` is above the current top.
    pub fn truncate(&mut self, depth: usize) {
        assert!(
            depth <= self.top,
            "scratch truncate above top: {depth} > {}",
            self.top
        );
        self.top = depth;
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        // Residual depth means a caller staged bytes and never took them off.
        if !std::thread::panicking() {
            assert_eq!(self.top, 0, "scratch dropped with {} staged bytes", self.top);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_discard() {
        let mut scratch = Scratch::new();
        scratch.push(0x01);
        scratch.push(0x02);
        assert_eq!(scratch.depth(), 2);
        assert_eq!(scratch.discard(2), [0x01, 0x02]);
        assert_eq!(scratch.depth(), 0);
    }

    #[test]
    fn test_discard_is_lifo() {
        let mut scratch = Scratch::new();
        scratch.extend(b"abc");
        scratch.extend(b"de");
        assert_eq!(scratch.discard(2), b"de");
        assert_eq!(scratch.discard(3), b"abc");
    }

    #[test]
    fn test_reserve_window_is_writable() {
        let mut scratch = Scratch::new();
        let window = scratch.reserve(4);
        window.copy_from_slice(b"wxyz");
        assert_eq!(scratch.discard(4), b"wxyz");
    }

    #[test]
    fn test_partial_discard_after_reserve() {
        let mut scratch = Scratch::new();
        let window = scratch.reserve(8);
        window[..3].copy_from_slice(b"abc");
        scratch.discard(5);
        assert_eq!(scratch.depth(), 3);
        assert_eq!(scratch.discard(3), b"abc");
    }

    #[test]
    fn test_grows_past_initial_capacity() {
        let mut scratch = Scratch::new();
        let big = vec![0xAB; 10_000];
        scratch.extend(&big);
        assert_eq!(scratch.depth(), 10_000);
        assert_eq!(scratch.discard(10_000), &big[..]);
    }

    #[test]
    fn test_truncate_rolls_back() {
        let mut scratch = Scratch::new();
        scratch.extend(b"keep");
        let head = scratch.depth();
        scratch.extend(b"drop me");
        scratch.truncate(head);
        assert_eq!(scratch.discard(4), b"keep");
    }

    #[test]
    #[should_panic(expected = "scratch underflow")]
    fn test_discard_underflow_panics() {
        let mut scratch = Scratch::new();
        scratch.push(0x01);
        scratch.discard(2);
    }

    #[test]
    #[should_panic(expected = "staged bytes")]
    fn test_residual_depth_panics_on_drop() {
        let mut scratch = Scratch::new();
        scratch.push(0x01);
        drop(scratch);
    }
}
