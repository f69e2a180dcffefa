//! x86/x86_64 SHA Extensions (SHA-NI) SHA-256 compression function.
//!
//! Message-schedule generation and state update cycle four 128-bit message
//! registers and the two accumulator registers through the same loop the
//! ISA was designed around (see Intel's "Fast SHA-256 Implementations on
//! Intel Architecture Processors"); `K32` is reused from [`super::reference`]
//! rather than duplicated as a second literal table.

use super::reference::K32;

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

#[target_feature(enable = "sha,sse2,ssse3,sse4.1")]
unsafe fn digest_block_sha(state: &mut [u32; 8], block: &[u8]) {
    let mask = _mm_set_epi64x(0x0c0d_0e0f_0809_0a0bu64 as i64, 0x0405_0607_0001_0203u64 as i64);

    let mut tmp = _mm_loadu_si128(state.as_ptr() as *const __m128i);
    let mut state1 = _mm_loadu_si128(state.as_ptr().add(4) as *const __m128i);
    tmp = _mm_shuffle_epi32(tmp, 0xB1);
    state1 = _mm_shuffle_epi32(state1, 0x1B);
    let mut state0 = _mm_alignr_epi8(tmp, state1, 8);
    state1 = _mm_blend_epi16(state1, tmp, 0xF0);

    let mut length = block.len();
    let mut data = block.as_ptr();

    while length != 0 {
        let abef_save = state0;
        let cdgh_save = state1;

        let mut reg = [
            _mm_shuffle_epi8(_mm_loadu_si128(data as *const __m128i), mask),
            _mm_shuffle_epi8(_mm_loadu_si128(data.add(16) as *const __m128i), mask),
            _mm_shuffle_epi8(_mm_loadu_si128(data.add(32) as *const __m128i), mask),
            _mm_shuffle_epi8(_mm_loadu_si128(data.add(48) as *const __m128i), mask),
        ];

        for q in 0..16usize {
            let r = q % 4;
            let mut m = _mm_add_epi32(reg[r], _mm_loadu_si128(K32.as_ptr().add(4 * q) as *const __m128i));
            state1 = _mm_sha256rnds2_epu32(state1, state0, m);
            m = _mm_shuffle_epi32(m, 0x0E);
            state0 = _mm_sha256rnds2_epu32(state0, state1, m);

            if (3..=14).contains(&q) {
                let p = (q + 3) % 4;
                let n = (q + 1) % 4;
                let t = _mm_alignr_epi8(reg[r], reg[p], 4);
                reg[n] = _mm_add_epi32(reg[n], t);
                reg[n] = _mm_sha256msg2_epu32(reg[n], reg[r]);
            }

            if (1..=14).contains(&q) {
                let p = (q + 3) % 4;
                reg[p] = _mm_sha256msg1_epu32(reg[p], reg[r]);
            }
        }

        state0 = _mm_add_epi32(state0, abef_save);
        state1 = _mm_add_epi32(state1, cdgh_save);

        data = data.add(64);
        length -= 64;
    }

    tmp = _mm_shuffle_epi32(state0, 0x1B);
    state1 = _mm_shuffle_epi32(state1, 0xB1);
    state0 = _mm_blend_epi16(tmp, state1, 0xF0);
    state1 = _mm_alignr_epi8(state1, tmp, 8);

    _mm_storeu_si128(state.as_mut_ptr() as *mut __m128i, state0);
    _mm_storeu_si128(state.as_mut_ptr().add(4) as *mut __m128i, state1);
}

/// `block` must be a multiple of 64 bytes. Caller must have already checked
/// `crate::simd_check::sha_available()`.
pub(crate) fn digest_block(state: &mut [u32; 8], block: &[u8]) {
    assert!(block.len() % 64 == 0);
    unsafe { digest_block_sha(state, block) }
}
