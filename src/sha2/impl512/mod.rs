//! The SHA-512/384 compression function, in a portable and a
//! hardware-accelerated flavor.

mod reference;

#[cfg(target_arch = "aarch64")]
mod hw_aarch64;

/// A block transform for the 64-bit SHA-2 compression function.
pub trait Transform512 {
    fn digest_block(state: &mut [u64; 8], block: &[u8]);
}

/// Portable scalar implementation, available everywhere.
#[derive(Clone)]
pub struct Scalar;

impl Transform512 for Scalar {
    fn digest_block(state: &mut [u64; 8], block: &[u8]) {
        reference::digest_block(state, block)
    }
}

/// CPU crypto-extension implementation. x86 has no SHA-512 instruction
/// extension, so unlike SHA-256 this only exists on aarch64.
#[cfg(target_arch = "aarch64")]
#[derive(Clone)]
pub struct CpuAccelerated;

#[cfg(target_arch = "aarch64")]
impl Transform512 for CpuAccelerated {
    fn digest_block(state: &mut [u64; 8], block: &[u8]) {
        if crate::simd_check::aarch64_sha3_available() {
            hw_aarch64::digest_block(state, block)
        } else {
            reference::digest_block(state, block)
        }
    }
}
