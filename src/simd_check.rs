//! Runtime detection for the CPU crypto-extension checks this crate's
//! hardware backends need before dispatching to them: x86 SHA-NI for
//! SHA-256, and ARMv8 SHA2/SHA3/CRC32 for SHA-256, SHA-512 and CRC-32
//! respectively. Every hardware transform is `#[target_feature(enable =
//! "...")]`-gated, so calling it on a CPU that lacks the extension is an
//! illegal instruction, not a compile error — these checks are what make
//! that call safe.

#![allow(unreachable_code)]

/// Whether the running x86/x86_64 CPU has the SHA extension (SHA-NI).
pub fn sha_available() -> bool {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        #[cfg(feature = "std")]
        {
            return std::is_x86_feature_detected!("sha");
        }
        #[cfg(all(not(feature = "std"), target_feature = "sha"))]
        {
            return true;
        }
    }
    false
}

/// Whether the running aarch64 CPU has the SHA2 crypto extension (used by
/// the SHA-256 hardware transform). Only callable on aarch64 — its sole
/// caller, `sha2::impl256`'s aarch64 `Transform256` impl, is itself
/// `cfg`-gated the same way.
#[cfg(target_arch = "aarch64")]
pub fn aarch64_sha2_available() -> bool {
    #[cfg(feature = "std")]
    {
        return std::arch::is_aarch64_feature_detected!("sha2");
    }
    #[cfg(all(
        not(feature = "std"),
        any(target_feature = "sha2", feature = "use-stdsimd")
    ))]
    {
        return true;
    }
    #[allow(unreachable_code)]
    false
}

/// Whether the running aarch64 CPU has the SHA3 crypto extension (ARM's
/// name for the extension that covers SHA-512, used by the SHA-512
/// hardware transform).
#[cfg(target_arch = "aarch64")]
pub fn aarch64_sha3_available() -> bool {
    #[cfg(feature = "std")]
    {
        return std::arch::is_aarch64_feature_detected!("sha3");
    }
    #[cfg(all(
        not(feature = "std"),
        any(target_feature = "sha3", feature = "use-stdsimd")
    ))]
    {
        return true;
    }
    #[allow(unreachable_code)]
    false
}

/// Whether the running aarch64 CPU has the CRC32 instruction extension.
#[cfg(target_arch = "aarch64")]
pub fn aarch64_crc_available() -> bool {
    #[cfg(feature = "std")]
    {
        return std::arch::is_aarch64_feature_detected!("crc");
    }
    #[cfg(all(
        not(feature = "std"),
        any(target_feature = "crc", feature = "use-stdsimd")
    ))]
    {
        return true;
    }
    #[allow(unreachable_code)]
    false
}
