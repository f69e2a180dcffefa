//! ARMv8.2 Cryptography Extensions (SHA3/SHA512) compression function.
//!
//! Four 128-bit state registers hold the AB/CD/EF/GH word pairs and eight
//! hold the message schedule; both sets rotate through the same four/eight
//! roles every round pair, so the 40 round pairs are driven by the index
//! arithmetic below rather than unrolled by hand.

use core::arch::aarch64::*;

use super::reference::K64;

#[target_feature(enable = "sha3")]
unsafe fn digest_block_sha(state: &mut [u64; 8], block: &[u8]) {
    let mut state0 = vld1q_u64(state.as_ptr()); // AB
        let mut state1 = vld1q_u64(state.as_ptr().add(2)); // CD
        let mut state2 = vld1q_u64(state.as_ptr().add(4)); // EF
        let mut state3 = vld1q_u64(state.as_ptr().add(6)); // GH

        let mut length = block.len();
        let mut data = block.as_ptr();

        while length != 0 {
            let ab_save = state0;
            let cd_save = state1;
            let ef_save = state2;
            let gh_save = state3;

            let mut msg = [
                vrev64q_u8(vld1q_u8(data)),
                vrev64q_u8(vld1q_u8(data.add(16))),
                vrev64q_u8(vld1q_u8(data.add(32))),
                vrev64q_u8(vld1q_u8(data.add(48))),
                vrev64q_u8(vld1q_u8(data.add(64))),
                vrev64q_u8(vld1q_u8(data.add(80))),
                vrev64q_u8(vld1q_u8(data.add(96))),
                vrev64q_u8(vld1q_u8(data.add(112))),
            ]
            .map(|m| vreinterpretq_u64_u8(m));

            let mut state = [state0, state1, state2, state3];

            for i in 0..40usize {
                let a = (4 - i % 4) % 4;
                let b = (a + 1) % 4;
                let c = (a + 2) % 4;
                let d = (a + 3) % 4;
                let m = i % 8;

                let k = vld1q_u64(K64.as_ptr().add(2 * i));
                let msg_k = vaddq_u64(msg[m], k);

                let tmp0 = vaddq_u64(vextq_u64(msg_k, msg_k, 1), state[d]);
                let tmp1 = vsha512hq_u64(
                    tmp0,
                    vextq_u64(state[c], state[d], 1),
                    vextq_u64(state[b], state[c], 1),
                );
                state[d] = vsha512h2q_u64(tmp1, state[b], state[a]);
                state[b] = vaddq_u64(state[b], tmp1);

                if i < 32 {
                    let next = (m + 1) % 8;
                    let prev7 = (m + 7) % 8;
                    let prev4 = (m + 4) % 8;
                    let prev5 = (m + 5) % 8;
                    msg[m] = vsha512su1q_u64(
                        vsha512su0q_u64(msg[m], msg[next]),
                        msg[prev7],
                        vextq_u64(msg[prev4], msg[prev5], 1),
                    );
                }
            }

            state0 = vaddq_u64(state[0], ab_save);
            state1 = vaddq_u64(state[1], cd_save);
            state2 = vaddq_u64(state[2], ef_save);
            state3 = vaddq_u64(state[3], gh_save);

            data = data.add(128);
            length -= 128;
        }

    vst1q_u64(state.as_mut_ptr(), state0);
    vst1q_u64(state.as_mut_ptr().add(2), state1);
    vst1q_u64(state.as_mut_ptr().add(4), state2);
    vst1q_u64(state.as_mut_ptr().add(6), state3);
}

/// `block` must be a multiple of 128 bytes. Caller must have already
/// checked `crate::simd_check::aarch64_sha3_available()`.
pub(crate) fn digest_block(state: &mut [u64; 8], block: &[u8]) {
    assert!(block.len() % 128 == 0);
    unsafe { digest_block_sha(state, block) }
}
