// SPDX-FileCopyrightText: 2026 debscan contributors
// SPDX-License-Identifier: MIT

//! Digests recorded for every archive in a package index.
//!
//! A `Packages` entry carries three independent digests of the raw archive:
//! `MD5Sum`, `SHA1` and `SHA256`. [`Digests::compute`] produces all three
//! from one buffer, [`DigestsContext`] does the same incrementally and can be
//! used as an [`std::io::Write`] sink.

use std::fmt as sfmt;
use std::io;

use serde::{Serialize, Serializer};
use sha1::Digest as _;

mod algo;

pub use algo::Algorithm;

const LARGEST_ALGORITHM: Algorithm = Algorithm::LARGEST;

#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct Hash {
    algorithm: Algorithm,
    data: [u8; LARGEST_ALGORITHM.size()],
}

impl Hash {
    pub const fn new(algorithm: Algorithm, hash: &[u8]) -> Hash {
        let mut data = [0u8; LARGEST_ALGORITHM.size()];
        let (hash_data, _postfix) = data.split_at_mut(algorithm.size());
        hash_data.copy_from_slice(hash);
        Hash { algorithm, data }
    }

    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    #[inline]
    pub fn digest_bytes(&self) -> &[u8] {
        &self.data[0..(self.algorithm.size())]
    }

    /// Lowercase hex rendering, as written into index files.
    pub fn to_hex(&self) -> String {
        hex::encode(self.digest_bytes())
    }
}

impl std::ops::Deref for Hash {
    type Target = [u8];
    fn deref(&self) -> &[u8] {
        self.digest_bytes()
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        self.digest_bytes()
    }
}

impl sfmt::Display for Hash {
    fn fmt(&self, f: &mut sfmt::Formatter<'_>) -> sfmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl sfmt::Debug for Hash {
    fn fmt(&self, f: &mut sfmt::Formatter<'_>) -> sfmt::Result {
        write!(f, "{}:{}", self.algorithm, self.to_hex())
    }
}

impl Serialize for Hash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

#[derive(Clone)]
enum InnerContext {
    MD5(md5::Context),
    SHA1(sha1::Sha1),
    SHA256(sha2::Sha256),
}

/// A context for multi-step (Init-Update-Finish) digest calculation.
///
/// # Examples
///
/// ```
/// use debscan_utils_hash as hash;
///
/// let one_shot = hash::Algorithm::SHA256.digest("hello, world");
///
/// let mut ctx = hash::Context::new(hash::Algorithm::SHA256);
/// ctx.update("hello");
/// ctx.update(", ");
/// ctx.update("world");
/// let multi_path = ctx.finish();
///
/// assert_eq!(one_shot, multi_path);
/// ```
#[derive(Clone)]
pub struct Context(Algorithm, InnerContext);

impl Context {
    /// Constructs a new context with `algorithm`.
    pub fn new(algorithm: Algorithm) -> Self {
        let inner = match algorithm {
            Algorithm::MD5 => InnerContext::MD5(md5::Context::new()),
            Algorithm::SHA1 => InnerContext::SHA1(sha1::Sha1::new()),
            Algorithm::SHA256 => InnerContext::SHA256(sha2::Sha256::new()),
        };
        Context(algorithm, inner)
    }

    /// Update the digest with all the data in `data`.
    /// `update` may be called zero or more times before `finish` is called.
    pub fn update<D: AsRef<[u8]>>(&mut self, data: D) {
        let data = data.as_ref();
        match &mut self.1 {
            InnerContext::MD5(ctx) => ctx.consume(data),
            InnerContext::SHA1(ctx) => ctx.update(data),
            InnerContext::SHA256(ctx) => ctx.update(data),
        }
    }

    /// Finalizes the digest calculation and returns the [`Hash`] value.
    /// This consumes the context to prevent misuse.
    ///
    /// [`Hash`]: struct@Hash
    pub fn finish(self) -> Hash {
        match self.1 {
            InnerContext::MD5(ctx) => Hash::new(self.0, &ctx.finalize().0),
            InnerContext::SHA1(ctx) => Hash::new(self.0, ctx.finalize().as_slice()),
            InnerContext::SHA256(ctx) => Hash::new(self.0, ctx.finalize().as_slice()),
        }
    }

    /// The algorithm that this context is using.
    pub fn algorithm(&self) -> Algorithm {
        self.0
    }
}

impl sfmt::Debug for Context {
    fn fmt(&self, f: &mut sfmt::Formatter<'_>) -> sfmt::Result {
        f.debug_tuple("Context").field(&self.0).finish()
    }
}

/// The three digests of one archive.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Digests {
    pub md5: Hash,
    pub sha1: Hash,
    pub sha256: Hash,
}

impl Digests {
    /// Digests of `data` under every [`Algorithm`].
    ///
    /// ```
    /// # use debscan_utils_hash::Digests;
    /// let digests = Digests::compute(b"");
    ///
    /// assert_eq!("d41d8cd98f00b204e9800998ecf8427e", digests.md5.to_hex());
    /// ```
    pub fn compute<B: AsRef<[u8]>>(data: B) -> Digests {
        let mut ctx = DigestsContext::new();
        ctx.update(data);
        ctx.finish().1
    }

    pub fn get(&self, algorithm: Algorithm) -> &Hash {
        match algorithm {
            Algorithm::MD5 => &self.md5,
            Algorithm::SHA1 => &self.sha1,
            Algorithm::SHA256 => &self.sha256,
        }
    }

    /// Each digest paired with its algorithm, in record field order.
    pub fn iter(&self) -> impl Iterator<Item = (Algorithm, &Hash)> {
        Algorithm::ALL
            .into_iter()
            .map(|algorithm| (algorithm, self.get(algorithm)))
    }
}

/// Incremental computation of [`Digests`].
///
/// Feeds the same input into one [`Context`] per algorithm. Implements
/// [`io::Write`] so a reader can be streamed in with [`io::copy`].
///
/// ```
/// use std::io;
/// use debscan_utils_hash::{Digests, DigestsContext};
///
/// # fn main() -> io::Result<()> {
/// let mut reader: &[u8] = b"hello, world";
/// let mut sink = DigestsContext::new();
///
/// io::copy(&mut reader, &mut sink)?;
/// let (size, digests) = sink.finish();
///
/// assert_eq!(Digests::compute("hello, world"), digests);
/// assert_eq!(12, size);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DigestsContext {
    md5: Context,
    sha1: Context,
    sha256: Context,
    bytes_read: u64,
}

impl DigestsContext {
    pub fn new() -> Self {
        Self {
            md5: Context::new(Algorithm::MD5),
            sha1: Context::new(Algorithm::SHA1),
            sha256: Context::new(Algorithm::SHA256),
            bytes_read: 0,
        }
    }

    pub fn update<D: AsRef<[u8]>>(&mut self, data: D) {
        let data = data.as_ref();
        self.md5.update(data);
        self.sha1.update(data);
        self.sha256.update(data);
        self.bytes_read += data.len() as u64;
    }

    /// Finalizes all three digests and returns them with the number of bytes
    /// consumed.
    pub fn finish(self) -> (u64, Digests) {
        let digests = Digests {
            md5: self.md5.finish(),
            sha1: self.sha1.finish(),
            sha256: self.sha256.finish(),
        };
        (self.bytes_read, digests)
    }
}

impl Default for DigestsContext {
    fn default() -> Self {
        Self::new()
    }
}

impl io::Write for DigestsContext {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod unittests {
    use std::io::Write as _;

    use hex_literal::hex;
    use proptest::prelude::*;
    use rstest::rstest;

    use super::*;

    /// value taken from: https://tools.ietf.org/html/rfc1321
    const MD5_EMPTY: Hash = Hash::new(Algorithm::MD5, &hex!("d41d8cd98f00b204e9800998ecf8427e"));
    /// value taken from: https://tools.ietf.org/html/rfc1321
    const MD5_ABC: Hash = Hash::new(Algorithm::MD5, &hex!("900150983cd24fb0d6963f7d28e17f72"));

    const SHA1_EMPTY: Hash = Hash::new(
        Algorithm::SHA1,
        &hex!("da39a3ee5e6b4b0d3255bfef95601890afd80709"),
    );
    /// value taken from: https://tools.ietf.org/html/rfc3174
    const SHA1_ABC: Hash = Hash::new(
        Algorithm::SHA1,
        &hex!("a9993e364706816aba3e25717850c26c9cd0d89d"),
    );
    /// value taken from: https://tools.ietf.org/html/rfc3174
    const SHA1_LONG: Hash = Hash::new(
        Algorithm::SHA1,
        &hex!("84983e441c3bd26ebaae4aa1f95129e5e54670f1"),
    );

    const SHA256_EMPTY: Hash = Hash::new(
        Algorithm::SHA256,
        &hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"),
    );
    /// value taken from: https://tools.ietf.org/html/rfc4634
    const SHA256_ABC: Hash = Hash::new(
        Algorithm::SHA256,
        &hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"),
    );
    /// value taken from: https://tools.ietf.org/html/rfc4634
    const SHA256_LONG: Hash = Hash::new(
        Algorithm::SHA256,
        &hex!("248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"),
    );

    #[rstest]
    #[case::md5(Algorithm::MD5, 16, 32, "MD5Sum")]
    #[case::sha1(Algorithm::SHA1, 20, 40, "SHA1")]
    #[case::sha256(Algorithm::SHA256, 32, 64, "SHA256")]
    fn algorithm_size(
        #[case] algorithm: Algorithm,
        #[case] size: usize,
        #[case] hex_len: usize,
        #[case] field: &str,
    ) {
        assert_eq!(algorithm.size(), size, "mismatched size");
        assert_eq!(algorithm.hex_len(), hex_len, "mismatched hex_len");
        assert_eq!(algorithm.field_name(), field, "mismatched field name");
    }

    #[rstest]
    #[case::md5_empty(&MD5_EMPTY, "")]
    #[case::md5_abc(&MD5_ABC, "abc")]
    #[case::sha1_empty(&SHA1_EMPTY, "")]
    #[case::sha1_abc(&SHA1_ABC, "abc")]
    #[case::sha1_long(&SHA1_LONG, "abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq")]
    #[case::sha256_empty(&SHA256_EMPTY, "")]
    #[case::sha256_abc(&SHA256_ABC, "abc")]
    #[case::sha256_long(&SHA256_LONG, "abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq")]
    fn test_digest(#[case] expected: &Hash, #[case] input: &str) {
        let actual = expected.algorithm().digest(input);
        assert_eq!(actual, *expected);
    }

    #[test]
    fn test_digests_abc() {
        let digests = Digests::compute("abc");
        assert_eq!(digests.md5, MD5_ABC);
        assert_eq!(digests.sha1, SHA1_ABC);
        assert_eq!(digests.sha256, SHA256_ABC);
    }

    #[test]
    fn test_digests_iter_order() {
        let digests = Digests::compute("");
        let fields: Vec<_> = digests.iter().map(|(a, _)| a.field_name()).collect();
        assert_eq!(fields, ["MD5Sum", "SHA1", "SHA256"]);
        let values: Vec<_> = digests.iter().map(|(_, h)| *h).collect();
        assert_eq!(values, [MD5_EMPTY, SHA1_EMPTY, SHA256_EMPTY]);
    }

    #[rstest]
    #[case::md5(Algorithm::MD5)]
    #[case::sha1(Algorithm::SHA1)]
    #[case::sha256(Algorithm::SHA256)]
    fn test_digests_get_matches_algorithm(#[case] algorithm: Algorithm) {
        let digests = Digests::compute("abc");
        let hash = digests.get(algorithm);
        assert_eq!(hash.algorithm(), algorithm);
        assert_eq!(*hash, algorithm.digest("abc"));
    }

    #[test]
    fn test_display_is_lowercase_hex() {
        assert_eq!(
            SHA256_ABC.to_string(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(format!("{MD5_ABC:?}"), "md5:900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn test_serde_hash_hex() {
        let serialized = serde_json::to_value(SHA1_ABC).unwrap();
        assert_eq!(
            serialized.as_str().unwrap(),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
    }

    #[test]
    fn test_digests_context_write() {
        let mut ctx = DigestsContext::new();
        ctx.write_all(b"ab").unwrap();
        ctx.write_all(b"c").unwrap();
        ctx.flush().unwrap();
        let (size, digests) = ctx.finish();
        assert_eq!(size, 3);
        assert_eq!(digests, Digests::compute("abc"));
    }

    proptest! {
        #[test]
        fn proptest_digests_deterministic(data in any::<Vec<u8>>()) {
            let first = Digests::compute(&data);
            let second = Digests::compute(&data);
            prop_assert_eq!(first, second);
            for (algorithm, hash) in first.iter() {
                let hex = hash.to_hex();
                prop_assert_eq!(hex.len(), algorithm.hex_len());
                prop_assert!(hex.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
            }
        }

        #[test]
        fn proptest_incremental_matches_one_shot(
            data in any::<Vec<u8>>(),
            split in any::<prop::sample::Index>(),
        ) {
            let at = split.index(data.len() + 1);
            let (head, tail) = data.split_at(at);
            let mut ctx = DigestsContext::new();
            ctx.update(head);
            ctx.update(tail);
            let (size, digests) = ctx.finish();
            prop_assert_eq!(size, data.len() as u64);
            prop_assert_eq!(digests, Digests::compute(&data));
        }
    }
}
