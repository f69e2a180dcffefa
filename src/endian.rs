//! Endian-aware loads and stores of the machine words used at block boundaries.
//!
//! Every block transform in this crate reads and writes its message words
//! through these functions only; the transforms themselves work exclusively
//! on native-endian working variables, so adding a new algorithm never
//! requires reasoning about host byte order anywhere but here.

use core::mem::size_of;

macro_rules! write_type {
    ($name:ident, $t:ident, $f:ident) => {
        /// Write a `
        #[doc = stringify!($t)]
        /// ` into `dst`, which must be exactly the right size.
        #[inline]
        pub fn $name(dst: &mut [u8], input: $t) {
            const SZ: usize = size_of::<$t>();
            assert_eq!(dst.len(), SZ);
            dst.copy_from_slice(&input.$f());
        }
    };
}

write_type!(write_u64_be, u64, to_be_bytes);
write_type!(write_u64_le, u64, to_le_bytes);
write_type!(write_u128_be, u128, to_be_bytes);

macro_rules! write_array_type {
    ($name:ident, $t:ident, $f:ident) => {
        /// Write each element of `input` into consecutive `
        #[doc = stringify!($t)]
        /// ` slots of `dst`.
        pub fn $name(dst: &mut [u8], input: &[$t]) {
            const SZ: usize = size_of::<$t>();
            assert_eq!(dst.len(), SZ * input.len());
            for (chunk, v) in dst.chunks_exact_mut(SZ).zip(input.iter()) {
                chunk.copy_from_slice(&v.$f());
            }
        }
    };
}

write_array_type!(write_u32v_be, u32, to_be_bytes);

macro_rules! read_array_type {
    ($name:ident, $t:ident, $f:ident) => {
        /// Read `input` as consecutive big/little-endian `
        #[doc = stringify!($t)]
        /// ` words into `dst`.
        pub fn $name(dst: &mut [$t], input: &[u8]) {
            const SZ: usize = size_of::<$t>();
            assert_eq!(dst.len() * SZ, input.len());
            for (d, chunk) in dst.iter_mut().zip(input.chunks_exact(SZ)) {
                let mut tmp = [0u8; SZ];
                tmp.copy_from_slice(chunk);
                *d = $t::$f(tmp);
            }
        }
    };
}

read_array_type!(read_u32v_be, u32, from_be_bytes);
read_array_type!(read_u64v_be, u64, from_be_bytes);

/// Read `input` as consecutive little-endian `u32` words into `dst`.
pub fn read_u32v_le(dst: &mut [u32], input: &[u8]) {
    assert_eq!(dst.len() * 4, input.len());
    for (d, chunk) in dst.iter_mut().zip(input.chunks_exact(4)) {
        let mut tmp = [0u8; 4];
        tmp.copy_from_slice(chunk);
        *d = u32::from_le_bytes(tmp);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_u32v_be() {
        let words = [0x11223344u32, 0x55667788];
        let mut buf = [0u8; 8];
        write_u32v_be(&mut buf, &words);
        let mut back = [0u32; 2];
        read_u32v_be(&mut back, &buf);
        assert_eq!(words, back);
    }

    #[test]
    fn read_u32v_le_matches_native() {
        let mut back = [0u32; 1];
        read_u32v_le(&mut back, &[0x04, 0x03, 0x02, 0x01]);
        assert_eq!(back[0], 0x01020304);
    }
}
