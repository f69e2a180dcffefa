//! CRC-32/ISO-HDLC on the ARMv8 CRC32 instruction extension.
//!
//! `__crc32b`/`__crc32d` implement exactly the reflected, complemented
//! ISO-HDLC polynomial this crate's software engine computes, so no table is
//! needed once the extension is confirmed present. When it isn't, the engine
//! falls back to the same table-driven `CrcCore` the `Software` variant
//! uses, chosen once at construction time. This is *not* true of x86's
//! SSE4.2 `crc32` instruction, which hardcodes the unrelated Castagnoli
//! (CRC-32C) polynomial — the original implementation this crate is modeled
//! on gated its hardware CRC-32 on "ARM or x86", which is a bug; there is no
//! x86 hardware variant here.

use core::arch::aarch64::{__crc32b, __crc32d};

use super::{CrcCore, Word, CRC32_INIT, CRC32_POLY, CRC32_XOROUT};
use crate::hasher::{CrcEngine, Engine};

#[target_feature(enable = "crc")]
unsafe fn digest(mut crc: u32, data: &[u8]) -> u32 {
    let mut data = data;
    crc = !crc;

    while !data.is_empty() && (data.as_ptr() as usize) & 7 != 0 {
        crc = __crc32b(crc, data[0]);
        data = &data[1..];
    }

    while data.len() >= 64 {
        for chunk in data[..64].chunks_exact(8) {
            let word = u64::from_ne_bytes(chunk.try_into().unwrap());
            crc = __crc32d(crc, word);
        }
        data = &data[64..];
    }

    while data.len() >= 8 {
        let word = u64::from_ne_bytes(data[..8].try_into().unwrap());
        crc = __crc32d(crc, word);
        data = &data[8..];
    }

    for &byte in data {
        crc = __crc32b(crc, byte);
    }

    !crc
}

/// Picks the CRC32-extension path at construction time, based on
/// `crate::simd_check::aarch64_crc_available()`, and sticks with it for the
/// engine's lifetime; falls back to the same table-driven engine the
/// `Software` variant uses when the running CPU lacks the extension.
#[derive(Clone)]
pub(crate) enum Crc32HwEngine {
    Hardware(u32),
    Fallback(CrcCore<u32>),
}

impl Engine for Crc32HwEngine {
    type Digest = [u8; 4];

    fn new() -> Self {
        if crate::simd_check::aarch64_crc_available() {
            Self::Hardware(0)
        } else {
            Self::Fallback(CrcCore::new(CRC32_POLY, CRC32_INIT, CRC32_XOROUT))
        }
    }

    fn update(&mut self, input: &[u8]) {
        match self {
            Self::Hardware(crc) => {
                if !input.is_empty() {
                    *crc = unsafe { digest(*crc, input) };
                }
            }
            Self::Fallback(core) => core.update(input),
        }
    }

    fn finalize(self) -> Self::Digest {
        match self {
            Self::Hardware(crc) => crc.to_be_bytes(),
            Self::Fallback(core) => {
                let mut out = [0u8; 4];
                core.current().write_be(&mut out);
                out
            }
        }
    }

    fn reset(&mut self) {
        match self {
            Self::Hardware(crc) => *crc = 0,
            Self::Fallback(core) => core.reset(),
        }
    }
}

impl CrcEngine for Crc32HwEngine {
    type Int = u32;

    fn finalize_as_integer(&self) -> Self::Int {
        match self {
            Self::Hardware(crc) => *crc,
            Self::Fallback(core) => core.current(),
        }
    }
}
