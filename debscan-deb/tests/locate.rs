// SPDX-FileCopyrightText: 2026 debscan contributors
// SPDX-License-Identifier: MIT

//! End-to-end lookups of `./control` in synthetic packages.

use std::io;

use debscan_deb::{
    ArContainer, CONTROL_ENTRY, CONTROL_MEMBER, Container, ControlLocator, Layer, LocateError,
    locate_control,
};
use debscan_utils_test::{DEBIAN_BINARY, ar_archive, deb, tar_gz};

const CONTROL: &str = "Package: demo\nVersion: 1.0\nArchitecture: all\n";

#[test]
fn locates_control_text() {
    let text = locate_control(&deb(CONTROL)).unwrap();
    assert_eq!(text, CONTROL);
}

#[test]
fn missing_outer_member() {
    let archive = ar_archive(&[
        ("debian-binary", DEBIAN_BINARY),
        ("control.tar.xz", b"not looked at"),
        ("data.tar.xz", b""),
    ]);
    let err = locate_control(&archive).unwrap_err();
    assert!(
        matches!(&err, LocateError::MissingOuterMember { member } if member == CONTROL_MEMBER),
        "{err:?}"
    );
    assert!(err.is_missing());
}

#[test]
fn missing_inner_entry() {
    let control_tar = tar_gz(&[("./", b""), ("./md5sums", b""), ("control", b"Package: x\n")]);
    let archive = ar_archive(&[
        ("debian-binary", DEBIAN_BINARY),
        ("control.tar.gz", &control_tar),
    ]);
    let err = locate_control(&archive).unwrap_err();
    assert!(
        matches!(&err, LocateError::MissingInnerEntry { entry, .. } if entry == CONTROL_ENTRY),
        "{err:?}"
    );
    assert_eq!(err.to_string(), "'control.tar.gz' has no './control' entry");
}

#[test]
fn corrupt_outer_layer() {
    let err = locate_control(b"PK\x03\x04 a zip file").unwrap_err();
    assert!(
        matches!(&err, LocateError::Decode { layer: Layer::Outer("ar"), .. }),
        "{err:?}"
    );
    assert!(!err.is_missing());
}

#[test]
fn corrupt_inner_layer() {
    let archive = ar_archive(&[
        ("debian-binary", DEBIAN_BINARY),
        ("control.tar.gz", b"plain text, not gzip"),
    ]);
    let err = locate_control(&archive).unwrap_err();
    assert!(
        matches!(&err, LocateError::Decode { layer: Layer::Inner("tar.gz"), .. }),
        "{err:?}"
    );
    assert!(err.to_string().starts_with("failed to decode inner tar.gz archive"));
}

#[test]
fn invalid_utf8_is_replaced() {
    let control_tar = tar_gz(&[("./control", b"Maintainer: J\xf6rg\n")]);
    let archive = ar_archive(&[("control.tar.gz", &control_tar)]);
    let text = locate_control(&archive).unwrap();
    assert_eq!(text, "Maintainer: J\u{fffd}rg\n");
}

/// A tar archive that was never compressed.
struct PlainTar;

impl Container for PlainTar {
    fn format(&self) -> &'static str {
        "tar"
    }

    fn extract(&self, data: &[u8], name: &[u8]) -> io::Result<Option<Vec<u8>>> {
        let mut archive = tar::Archive::new(data);
        for entry in archive.entries()? {
            let mut entry = entry?;
            if entry.path_bytes().as_ref() == name {
                let mut content = Vec::new();
                io::Read::read_to_end(&mut entry, &mut content)?;
                return Ok(Some(content));
            }
        }
        Ok(None)
    }
}

#[test]
fn inner_container_is_swappable() {
    let control_tar = tar_gz(&[("./control", CONTROL.as_bytes())]);
    let mut decoder = flate2::read::GzDecoder::new(&control_tar[..]);
    let mut plain = Vec::new();
    io::Read::read_to_end(&mut decoder, &mut plain).unwrap();
    let archive = ar_archive(&[("control.tar.gz", &plain)]);

    let locator = ControlLocator::with_containers(ArContainer, PlainTar);
    assert_eq!(locator.locate(&archive).unwrap(), CONTROL);

    // The default locator expects gzip and rejects the same archive.
    assert!(locate_control(&archive).is_err());
}
