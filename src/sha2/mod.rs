//! The SHA-2 family: `Sha224`, `Sha256`, `Sha384` and `Sha512`.
//!
//! Algorithmically there are only two compression functions here — the
//! 32-bit one behind `Sha224`/`Sha256`, and the 64-bit one behind the other
//! four — each seeded with a different initial hash value and truncated to
//! a different output length. See [`eng256`] and [`eng512`] for the shared
//! streaming state, and [`impl256`]/[`impl512`] for the block transforms
//! (a portable scalar one, and a CPU-crypto-extension one where the target
//! has one).
//!
//! ```
//! use hashcore::hasher::{Hasher, Software};
//! use hashcore::sha2::Sha256;
//!
//! let mut h: Hasher<Sha256, Software> = Hasher::new();
//! h.update(b"123");
//! assert_eq!(h.finalize()[0], 0xa6);
//! ```

mod eng256;
mod eng512;
mod impl256;
mod impl512;
mod ivs;

use crate::hasher::{Engine, Hardware, Software, Variant};

macro_rules! sha2_32 {
    ($algorithm:ident, $engine:ident, $iv:expr, $out:literal) => {
        /// Algorithm tag for [`Hasher`](crate::hasher::Hasher).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $algorithm;

        #[derive(Clone)]
        pub struct $engine<T: impl256::Transform256>(eng256::Core256<T, $out>);

        impl<T: impl256::Transform256 + Clone> Engine for $engine<T> {
            type Digest = [u8; $out];

            fn new() -> Self {
                Self(eng256::Core256::with_iv($iv))
            }

            fn update(&mut self, input: &[u8]) {
                self.0.update(input)
            }

            fn finalize(self) -> Self::Digest {
                self.0.finalize()
            }

            fn reset(&mut self) {
                self.0.reset()
            }
        }

        impl Variant<$algorithm> for Software {
            type Engine = $engine<impl256::Scalar>;
        }

        #[cfg(any(target_arch = "aarch64", target_arch = "x86", target_arch = "x86_64"))]
        impl Variant<$algorithm> for Hardware {
            type Engine = $engine<impl256::CpuAccelerated>;
        }
    };
}

macro_rules! sha2_64 {
    ($algorithm:ident, $engine:ident, $iv:expr, $out:literal) => {
        /// Algorithm tag for [`Hasher`](crate::hasher::Hasher).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $algorithm;

        #[derive(Clone)]
        pub struct $engine<T: impl512::Transform512>(eng512::Core512<T, $out>);

        impl<T: impl512::Transform512 + Clone> Engine for $engine<T> {
            type Digest = [u8; $out];

            fn new() -> Self {
                Self(eng512::Core512::with_iv($iv))
            }

            fn update(&mut self, input: &[u8]) {
                self.0.update(input)
            }

            fn finalize(self) -> Self::Digest {
                self.0.finalize()
            }

            fn reset(&mut self) {
                self.0.reset()
            }
        }

        impl Variant<$algorithm> for Software {
            type Engine = $engine<impl512::Scalar>;
        }

        #[cfg(target_arch = "aarch64")]
        impl Variant<$algorithm> for Hardware {
            type Engine = $engine<impl512::CpuAccelerated>;
        }
    };
}

sha2_32!(Sha224, Sha224Engine, ivs::H224, 28);
sha2_32!(Sha256, Sha256Engine, ivs::H256, 32);
sha2_64!(Sha384, Sha384Engine, ivs::H384, 48);
sha2_64!(Sha512, Sha512Engine, ivs::H512, 64);

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::String;
    use crate::hasher::Hasher;

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }

    fn roundtrip<A, V: Variant<A>>(chunks: &[&[u8]]) -> String
    where
        V::Engine: Clone,
    {
        let mut h: Hasher<A, V> = Hasher::new();
        for chunk in chunks {
            h.update(chunk);
        }
        hex(h.finalize().as_ref())
    }

    #[test]
    fn sha256_empty() {
        assert_eq!(
            roundtrip::<Sha256, Software>(&[]),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn sha256_abc() {
        assert_eq!(
            roundtrip::<Sha256, Software>(&[b"abc"]),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn sha256_123() {
        assert_eq!(
            roundtrip::<Sha256, Software>(&[b"123"]),
            "a665a45920422f9d417e4867efdc4fb8a04a1f3fff1fa07e998e86f7f7a27ae3"
        );
    }

    #[test]
    fn sha256_streaming_matches_single_call() {
        let whole = roundtrip::<Sha256, Software>(&[b"hello world, this is a longer message"]);
        let split = roundtrip::<Sha256, Software>(&[b"hello world, ", b"this is a longer ", b"message"]);
        assert_eq!(whole, split);
    }

    #[test]
    fn zero_length_update_is_a_no_op() {
        let with_empties = roundtrip::<Sha256, Software>(&[b"", b"1", b"", b"23", b""]);
        let without = roundtrip::<Sha256, Software>(&[b"123"]);
        assert_eq!(with_empties, without);
    }

    #[test]
    fn multi_block_slice_in_one_call_matches_one_call_per_block() {
        let data = [0x5au8; 64 * 3 + 10];
        let one_shot = roundtrip::<Sha256, Software>(&[&data]);
        let per_block: std::vec::Vec<&[u8]> = data.chunks(64).collect();
        let chunked = roundtrip::<Sha256, Software>(&per_block);
        assert_eq!(one_shot, chunked);
    }

    #[test]
    fn copy_independence() {
        let mut h1: Hasher<Sha256, Software> = Hasher::new();
        h1.update(b"shared prefix");
        let mut h2 = h1.copy();
        h1.update(b"-first");
        h2.update(b"-second");
        assert_ne!(h1.finalize(), h2.finalize());
    }

    #[test]
    fn sha224_abc() {
        assert_eq!(
            roundtrip::<Sha224, Software>(&[b"abc"]),
            "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"
        );
    }

    #[test]
    fn sha512_abc() {
        assert_eq!(
            roundtrip::<Sha512, Software>(&[b"abc"]),
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        );
    }

    #[test]
    fn sha384_abc() {
        assert_eq!(
            roundtrip::<Sha384, Software>(&[b"abc"]),
            "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7"
        );
    }

    #[cfg(any(target_arch = "aarch64", target_arch = "x86", target_arch = "x86_64"))]
    #[test]
    fn sha256_hardware_matches_software() {
        let mut data = [0u8; 1024 + 37];
        for (i, b) in data.iter_mut().enumerate() {
            *b = (i * 7 + 3) as u8;
        }

        let mut soft: Hasher<Sha256, Software> = Hasher::new();
        soft.update(&data);

        let mut hard: Hasher<Sha256, Hardware> = Hasher::new();
        hard.update(&data);

        assert_eq!(soft.finalize(), hard.finalize());
    }

    #[cfg(target_arch = "aarch64")]
    #[test]
    fn sha384_hardware_matches_software() {
        let mut data = [0u8; 2048 + 53];
        for (i, b) in data.iter_mut().enumerate() {
            *b = (i * 11 + 5) as u8;
        }

        let mut soft: Hasher<Sha384, Software> = Hasher::new();
        soft.update(&data);

        let mut hard: Hasher<Sha384, Hardware> = Hasher::new();
        hard.update(&data);

        assert_eq!(soft.finalize(), hard.finalize());
    }

    #[cfg(target_arch = "aarch64")]
    #[test]
    fn sha512_hardware_matches_software() {
        let mut data = [0u8; 2048 + 53];
        for (i, b) in data.iter_mut().enumerate() {
            *b = (i * 13 + 7) as u8;
        }

        let mut soft: Hasher<Sha512, Software> = Hasher::new();
        soft.update(&data);

        let mut hard: Hasher<Sha512, Hardware> = Hasher::new();
        hard.update(&data);

        assert_eq!(soft.finalize(), hard.finalize());
    }
}
