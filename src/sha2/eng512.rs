//! Streaming state shared by every 64-bit SHA-2 family member
//! (SHA-384/512/512-224/512-256). Mirrors [`super::eng256::Core256`].

use core::marker::PhantomData;

use super::impl512::Transform512;
use crate::buffer::FixedBuffer;
use crate::endian::write_u128_be;

#[derive(Clone)]
pub(crate) struct Core512<T, const N: usize> {
    h: [u64; 8],
    iv: [u64; 8],
    length_bits: u128,
    buffer: FixedBuffer<128>,
    _transform: PhantomData<T>,
}

impl<T: Transform512, const N: usize> Core512<T, N> {
    pub(crate) fn with_iv(iv: [u64; 8]) -> Self {
        Self {
            h: iv,
            iv,
            length_bits: 0,
            buffer: FixedBuffer::new(),
            _transform: PhantomData,
        }
    }

    pub(crate) fn update(&mut self, input: &[u8]) {
        self.length_bits = self.length_bits.wrapping_add((input.len() as u128) << 3);
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
        self.buffer
            .standard_padding(16, |block| T::digest_block(h, block));
        write_u128_be(self.buffer.next::<16>(), self.length_bits);
        T::digest_block(h, self.buffer.full_buffer());
    }

    fn output(&self) -> [u8; N] {
        debug_assert!(N <= 64 && N % 4 == 0);
        let mut out = [0u8; N];
        // N may stop mid-word (SHA-512/224's last 4 bytes come from the high
        // half of h[3]), so emit whole 8-byte words and patch up the tail.
        let whole_words = N / 8;
        for (i, chunk) in out[..whole_words * 8].chunks_exact_mut(8).enumerate() {
            chunk.copy_from_slice(&self.h[i].to_be_bytes());
        }
        if N % 8 != 0 {
            let tail = (self.h[whole_words] >> 32) as u32;
            out[whole_words * 8..].copy_from_slice(&tail.to_be_bytes());
        }
        out
    }
}
