// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Streaming MD5, SHA-2 and CRC digests, each in a portable scalar variant
//! and, where the target CPU has the instructions for it, a hardware variant
//! built on ARMv8 SHA2/CRC32 or x86 SHA-NI.
//!
//! Every algorithm is reached through one generic façade,
//! [`hasher::Hasher<Algorithm, Variant>`](hasher::Hasher): the algorithm and
//! the variant are both compile-time type parameters, so there is no runtime
//! dispatch on the hot path, and a `Hasher<Algorithm, Hardware>` for a
//! combination nobody implemented is simply not a type that exists.
//!
//! ```
//! use hashcore::hasher::{Hasher, Software};
//! use hashcore::sha2::Sha256;
//!
//! let mut h: Hasher<Sha256, Software> = Hasher::new();
//! h.update(b"123");
//! assert_eq!(h.finalize()[0], 0xa6);
//! ```
//!
//! Supported matrix (`—` meaning the variant does not exist for that
//! algorithm, not that it is a runtime error):
//!
//! | | MD5 | SHA224 | SHA256 | SHA384 | SHA512 | CRC16 | CRC32 | CRC64 |
//! |---|---|---|---|---|---|---|---|---|
//! | [`Software`](hasher::Software) | ✓ | ✓ | ✓ | ✓ | ✓ | ✓ | ✓ | ✓ |
//! | [`Hardware`](hasher::Hardware) | — | ✓ | ✓ | ✓ | ✓ | — | ✓ | — |
//!

#![allow(unknown_lints)]
#![warn(clippy::all)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::new_without_default)]
#![allow(clippy::let_and_return)]
#![allow(clippy::redundant_field_names)]
#![allow(clippy::wrong_self_convention)]
#![allow(clippy::suspicious_arithmetic_impl)]
#![allow(clippy::identity_op)]
#![allow(clippy::many_single_char_names)]
#![no_std]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

mod buffer;
pub mod crc;
mod endian;
mod error;
pub mod hasher;
pub mod md5;
pub mod sha2;
mod simd_check;

pub use error::Error;
