//! A fixed-size block buffer shared by every streaming block-transform engine.
//!
//! `FixedBuffer<N>` accumulates bytes until a full `N`-byte block is
//! available, handing each full block to a caller-supplied closure. This is
//! the one piece of state every algorithm's streaming engine (MD5, the two
//! SHA-2 families) is built around; only the block size and the transform
//! differ between algorithms.

/// A fixed size buffer of `N` bytes, used to accumulate input until a full
/// block is available for the block transform.
#[derive(Clone)]
pub(crate) struct FixedBuffer<const N: usize> {
    buffer: [u8; N],
    buffer_idx: usize,
}

impl<const N: usize> FixedBuffer<N> {
    pub(crate) const fn new() -> Self {
        Self {
            buffer: [0u8; N],
            buffer_idx: 0,
        }
    }

    /// Input a slice of bytes. Every time the buffer fills up, `func` is
    /// called with the full block and the buffer is cleared.
    pub(crate) fn input<F: FnMut(&[u8])>(&mut self, input: &[u8], mut func: F) {
        let mut i = 0;

        if self.buffer_idx != 0 {
            let buffer_remaining = N - self.buffer_idx;
            if input.len() >= buffer_remaining {
                self.buffer[self.buffer_idx..N].copy_from_slice(&input[..buffer_remaining]);
                self.buffer_idx = 0;
                func(&self.buffer);
                i += buffer_remaining;
            } else {
                self.buffer[self.buffer_idx..self.buffer_idx + input.len()]
                    .copy_from_slice(input);
                self.buffer_idx += input.len();
                return;
            }
        }

        // Process whole blocks directly out of the input without copying
        // them into the buffer first.
        if input.len() - i >= N {
            let remaining = input.len() - i;
            let block_bytes = (remaining / N) * N;
            func(&input[i..i + block_bytes]);
            i += block_bytes;
        }

        let input_remaining = input.len() - i;
        self.buffer[0..input_remaining].copy_from_slice(&input[i..]);
        self.buffer_idx += input_remaining;
    }

    pub(crate) fn reset(&mut self) {
        self.buffer_idx = 0;
    }

    /// Zero the buffer from the current position up to `idx`, which must not
    /// be behind the current position.
    fn zero_until(&mut self, idx: usize) {
        assert!(idx >= self.buffer_idx);
        self.buffer[self.buffer_idx..idx].fill(0);
        self.buffer_idx = idx;
    }

    /// Reserve the next `M` bytes of the buffer and return them for writing.
    pub(crate) fn next<const M: usize>(&mut self) -> &mut [u8; M] {
        let start = self.buffer_idx;
        self.buffer_idx += M;
        (&mut self.buffer[start..self.buffer_idx])
            .try_into()
            .unwrap()
    }

    /// Take the current (full) buffer and reset the position. Panics if the
    /// buffer is not completely full.
    pub(crate) fn full_buffer(&mut self) -> &[u8] {
        assert_eq!(self.buffer_idx, N);
        self.buffer_idx = 0;
        &self.buffer[..N]
    }

    pub(crate) fn size(&self) -> usize {
        N
    }

    pub(crate) fn remaining(&self) -> usize {
        N - self.buffer_idx
    }

    /// Append the standard Merkle-Damgard padding (`0x80` then zeros) to the
    /// buffer, leaving exactly `rem` bytes free at the end for the length
    /// field. Transforms the buffer through `func` if the `0x80` separator
    /// does not leave enough room for the length field in the current block.
    pub(crate) fn standard_padding<F: FnMut(&[u8])>(&mut self, rem: usize, mut func: F) {
        let size = self.size();

        self.next::<1>()[0] = 0x80;

        if self.remaining() < rem {
            self.zero_until(size);
            func(self.full_buffer());
        }

        self.zero_until(size - rem);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_until_full() {
        let mut buf: FixedBuffer<4> = FixedBuffer::new();
        let mut blocks = 0;
        buf.input(&[1, 2], |_| blocks += 1);
        assert_eq!(blocks, 0);
        buf.input(&[3, 4, 5, 6, 7], |_| blocks += 1);
        assert_eq!(blocks, 1);
    }

    #[test]
    fn standard_padding_fits_in_block() {
        let mut buf: FixedBuffer<8> = FixedBuffer::new();
        let mut calls = 0;
        buf.input(&[1, 2, 3], |_| calls += 1);
        buf.standard_padding(2, |_| calls += 1);
        assert_eq!(calls, 0);
        assert_eq!(buf.remaining(), 2);
    }

    #[test]
    fn standard_padding_spills_into_new_block() {
        let mut buf: FixedBuffer<8> = FixedBuffer::new();
        let mut calls = 0;
        buf.input(&[0u8; 7], |_| calls += 1);
        buf.standard_padding(2, |_| calls += 1);
        assert_eq!(calls, 1);
        assert_eq!(buf.remaining(), 2);
    }
}
