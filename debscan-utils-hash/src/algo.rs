// SPDX-FileCopyrightText: 2026 debscan contributors
// SPDX-License-Identifier: MIT

use derive_more::Display;
use sha1::Digest as _;

use super::Hash;

const MD5_SIZE: usize = 128 / 8;
const SHA1_SIZE: usize = 160 / 8;
const SHA256_SIZE: usize = 256 / 8;

/// A digest algorithm recorded in a package index entry.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Display)]
pub enum Algorithm {
    #[display("md5")]
    MD5,
    #[display("sha1")]
    SHA1,
    #[display("sha256")]
    SHA256,
}

impl Algorithm {
    /// The largest supported algorithm size in bytes
    pub(crate) const LARGEST: Algorithm = Algorithm::SHA256;

    /// Every algorithm, in the order the fields appear in a record.
    pub const ALL: [Algorithm; 3] = [Algorithm::MD5, Algorithm::SHA1, Algorithm::SHA256];

    /// Returns the size in bytes of this hash.
    #[inline]
    pub const fn size(&self) -> usize {
        match &self {
            Algorithm::MD5 => MD5_SIZE,
            Algorithm::SHA1 => SHA1_SIZE,
            Algorithm::SHA256 => SHA256_SIZE,
        }
    }

    /// Length of the lowercase hex rendering of this hash.
    #[inline]
    pub const fn hex_len(&self) -> usize {
        self.size() * 2
    }

    /// Name of the index field carrying this digest.
    pub const fn field_name(&self) -> &'static str {
        match self {
            Algorithm::MD5 => "MD5Sum",
            Algorithm::SHA1 => "SHA1",
            Algorithm::SHA256 => "SHA256",
        }
    }

    /// Returns the digest of `data` using the given digest algorithm.
    ///
    /// ```
    /// # use debscan_utils_hash::Algorithm;
    /// let hash = Algorithm::SHA1.digest("abc");
    ///
    /// assert_eq!("a9993e364706816aba3e25717850c26c9cd0d89d", hash.to_string());
    /// ```
    pub fn digest<B: AsRef<[u8]>>(&self, data: B) -> Hash {
        let data = data.as_ref();
        match *self {
            Algorithm::MD5 => Hash::new(Algorithm::MD5, &md5::compute(data).0),
            Algorithm::SHA1 => Hash::new(Algorithm::SHA1, sha1::Sha1::digest(data).as_slice()),
            Algorithm::SHA256 => {
                Hash::new(Algorithm::SHA256, sha2::Sha256::digest(data).as_slice())
            }
        }
    }
}
