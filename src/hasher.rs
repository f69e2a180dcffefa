//! The generic `Hasher<Algorithm, Variant>` façade.
//!
//! Every concrete digest in this crate (MD5, the SHA-2 family, the three
//! CRCs) is implemented twice: once as a portable scalar engine and, where
//! the target and its enabled features allow it, again on top of the CPU's
//! dedicated crypto/CRC instructions. [`Hasher`] ties an algorithm tag and a
//! variant tag together into one uniform type so that callers pick both at
//! compile time; there is no virtual dispatch on the hot path; a
//! `Hasher<Algorithm, Hardware>` for a combination nobody implemented simply
//! fails to name a type.

use core::marker::PhantomData;

use crate::error::Error;

/// Portable, scalar/SIMD-ALU implementation. Always available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Software;

/// Implementation built on the CPU's dedicated crypto or CRC instructions
/// (ARMv8 SHA2/CRC32, x86 SHA-NI). Only exists for the algorithms and
/// targets that actually have one; see the module docs for the supported
/// matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hardware;

/// The block-streaming engine behind a concrete `(Algorithm, Variant)` pair.
///
/// Implementors own the whole of the context described in the data model:
/// running state, block buffer, and byte/bit counters. [`Hasher`] is a thin,
/// zero-cost wrapper around this trait.
pub trait Engine: Clone {
    /// The fixed-size digest this engine produces.
    type Digest: Copy + AsRef<[u8]> + AsMut<[u8]>;

    /// Construct a fresh engine, equivalent to the algorithm's initial
    /// state.
    fn new() -> Self;

    /// Append bytes to the running digest. Accepts (and ignores) empty
    /// input, so that streaming equivalence holds for any partition of a
    /// message, including one with empty parts.
    fn update(&mut self, input: &[u8]);

    /// Finalize and consume the engine, producing the digest.
    fn finalize(self) -> Self::Digest;

    /// Finalize without consuming the engine, then reset it in place so it
    /// is immediately ready for more input.
    fn finalize_reset(&mut self) -> Self::Digest {
        let copy = self.clone();
        let digest = copy.finalize();
        self.reset();
        digest
    }

    /// Reset to the freshly-constructed state.
    fn reset(&mut self);
}

/// A CRC engine additionally exposes its running remainder as the native
/// unsigned integer, without the big-endian serialization `finalize` uses.
pub trait CrcEngine: Engine {
    /// The native unsigned integer type for this CRC's width.
    type Int: Copy;

    /// Return the finalized CRC (init/final-XOR applied) as an integer,
    /// without consuming the engine.
    fn finalize_as_integer(&self) -> Self::Int;
}

/// Associates an algorithm tag with the concrete [`Engine`] a variant tag
/// provides for it. Implemented once per supported `(Algorithm, Variant)`
/// cell of the matrix in the crate documentation; an absent impl is exactly
/// how an unsupported combination is rejected, at compile time.
pub trait Variant<Algorithm> {
    /// The concrete streaming engine.
    type Engine: Engine;
}

/// A streaming hasher for `Algorithm` using `Variant`'s implementation.
///
/// ```
/// use hashcore::hasher::{Hasher, Software};
/// use hashcore::sha2::Sha256;
///
/// let mut h: Hasher<Sha256, Software> = Hasher::new();
/// h.update(b"123");
/// assert_eq!(h.finalize()[..4], [0xa6, 0x65, 0xa4, 0x59]);
/// ```
pub struct Hasher<Algorithm, V: Variant<Algorithm>> {
    engine: V::Engine,
    _algorithm: PhantomData<Algorithm>,
}

impl<Algorithm, V: Variant<Algorithm>> Clone for Hasher<Algorithm, V> {
    fn clone(&self) -> Self {
        Self {
            engine: self.engine.clone(),
            _algorithm: PhantomData,
        }
    }
}

impl<Algorithm, V: Variant<Algorithm>> Hasher<Algorithm, V> {
    /// Construct a new hasher, initialized to the algorithm's starting
    /// state.
    pub fn new() -> Self {
        Self {
            engine: V::Engine::new(),
            _algorithm: PhantomData,
        }
    }

    /// Append bytes to the digest. Any number of calls, with any
    /// partitioning of the input, produces the same digest as a single call
    /// with the concatenation of all the inputs.
    pub fn update(&mut self, input: &[u8]) {
        self.engine.update(input);
    }

    /// Append bytes read through a raw pointer, as an FFI-style entry point
    /// would receive them. Fails with [`Error::InvalidArgument`] if the
    /// pointer is null and `len` is non-zero.
    ///
    /// # Safety
    ///
    /// `data` must be valid for reads of `len` bytes when non-null.
    pub unsafe fn update_raw(&mut self, data: *const u8, len: usize) -> Result<(), Error> {
        if data.is_null() && len != 0 {
            return Err(Error::InvalidArgument);
        }
        if len == 0 {
            return Ok(());
        }
        self.update(core::slice::from_raw_parts(data, len));
        Ok(())
    }

    /// Append a UTF-8 string's bytes to the digest.
    pub fn update_str(&mut self, input: &str) {
        self.update(input.as_bytes());
    }

    /// Consume the hasher and produce the final digest.
    pub fn finalize(self) -> <V::Engine as Engine>::Digest {
        self.engine.finalize()
    }

    /// Produce the final digest and reset the hasher in place, so it is
    /// immediately usable for a new message.
    pub fn finalize_reset(&mut self) -> <V::Engine as Engine>::Digest {
        self.engine.finalize_reset()
    }

    /// Reset to the freshly-constructed state. Equivalent to, but cheaper
    /// than, dropping the hasher and constructing a new one.
    pub fn reset(&mut self) {
        self.engine.reset();
    }

    /// Produce an independent copy of this hasher; subsequent updates to
    /// either do not affect the other's eventual digest.
    pub fn copy(&self) -> Self {
        self.clone()
    }
}

impl<Algorithm, V> Hasher<Algorithm, V>
where
    V: Variant<Algorithm>,
    V::Engine: CrcEngine,
{
    /// Return the running CRC as its native unsigned integer, with the
    /// algorithm's init value and final XOR applied, but without the
    /// digest's big-endian byte serialization.
    pub fn finalize_as_integer(&self) -> <V::Engine as CrcEngine>::Int {
        self.engine.finalize_as_integer()
    }
}

impl<Algorithm, V: Variant<Algorithm>> Default for Hasher<Algorithm, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sha2::Sha256;

    #[test]
    fn update_raw_rejects_null() {
        let mut h: Hasher<Sha256, Software> = Hasher::new();
        let res = unsafe { h.update_raw(core::ptr::null(), 4) };
        assert_eq!(res, Err(Error::InvalidArgument));
    }

    #[test]
    fn update_raw_accepts_zero_len_null() {
        let mut h: Hasher<Sha256, Software> = Hasher::new();
        let res = unsafe { h.update_raw(core::ptr::null(), 0) };
        assert_eq!(res, Ok(()));
    }

    #[test]
    fn copy_is_independent() {
        let mut h1: Hasher<Sha256, Software> = Hasher::new();
        h1.update(b"abc");
        let mut h2 = h1.copy();
        h1.update(b"1");
        h2.update(b"2");
        assert_ne!(h1.finalize(), h2.finalize());
    }
}
