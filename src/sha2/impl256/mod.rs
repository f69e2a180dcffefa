//! The SHA-256/224 compression function, in a portable and a
//! hardware-accelerated flavor.

mod reference;

#[cfg(target_arch = "aarch64")]
mod hw_aarch64;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
mod hw_x86;

/// A block transform for the 32-bit SHA-2 compression function.
pub trait Transform256 {
    fn digest_block(state: &mut [u32; 8], block: &[u8]);
}

/// Portable scalar implementation, available everywhere.
#[derive(Clone)]
pub struct Scalar;

impl Transform256 for Scalar {
    fn digest_block(state: &mut [u32; 8], block: &[u8]) {
        reference::digest_block(state, block)
    }
}

/// CPU crypto-extension implementation. Only named on architectures that
/// have one; the [`crate::hasher::Hardware`] wiring in the parent module is
/// itself `cfg`-gated to match.
#[cfg(any(
    target_arch = "aarch64",
    target_arch = "x86",
    target_arch = "x86_64"
))]
#[derive(Clone)]
pub struct CpuAccelerated;

#[cfg(target_arch = "aarch64")]
impl Transform256 for CpuAccelerated {
    fn digest_block(state: &mut [u32; 8], block: &[u8]) {
        if crate::simd_check::aarch64_sha2_available() {
            hw_aarch64::digest_block(state, block)
        } else {
            reference::digest_block(state, block)
        }
    }
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
impl Transform256 for CpuAccelerated {
    fn digest_block(state: &mut [u32; 8], block: &[u8]) {
        if crate::simd_check::sha_available() {
            hw_x86::digest_block(state, block)
        } else {
            reference::digest_block(state, block)
        }
    }
}
