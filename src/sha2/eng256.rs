//! Streaming state shared by every 32-bit SHA-2 family member (SHA-224/256).
//!
//! Only the initial hash value and the truncation length differ between
//! `Sha224` and `Sha256`; the buffering, padding and finalization logic
//! below is identical, and the block transform itself is supplied by the
//! `T: Transform256` type parameter so the same core serves both the
//! software and hardware variants.

use core::marker::PhantomData;

use super::impl256::Transform256;
use crate::buffer::FixedBuffer;
use crate::endian::write_u64_be;

#[derive(Clone)]
pub(crate) struct Core256<T, const N: usize> {
    h: [u32; 8],
    iv: [u32; 8],
    length_bits: u64,
    buffer: FixedBuffer<64>,
    _transform: PhantomData<T>,
}

impl<T: Transform256, const N: usize> Core256<T, N> {
    pub(crate) fn with_iv(iv: [u32; 8]) -> Self {
        Self {
            h: iv,
            iv,
            length_bits: 0,
            buffer: FixedBuffer::new(),
            _transform: PhantomData,
        }
    }

    pub(crate) fn update(&mut self, input: &[u8]) {
        self.length_bits = self.length_bits.wrapping_add((input.len() as u64) << 3);
        let h = &mut self.h;
        self.buffer.input(input, |block| T::digest_block(h, block));
    }

    pub(crate) fn finalize(mut self) -> [u8; N] {
        self.pad();
        self.output()
    }

    pub(crate) fn reset(&mut self) {
        self.h = self.iv;
        self.length_bits = 0;
        self.buffer.reset();
    }

    fn pad(&mut self) {
        let h = &mut self.h;
        self.buffer.standard_padding(8, |block| T::digest_block(h, block));
        write_u64_be(self.buffer.next::<8>(), self.length_bits);
        T::digest_block(h, self.buffer.full_buffer());
    }

    fn output(&self) -> [u8; N] {
        debug_assert!(N <= 32 && N % 4 == 0);
        let mut out = [0u8; N];
        crate::endian::write_u32v_be(&mut out, &self.h[..N / 4]);
        out
    }
}
