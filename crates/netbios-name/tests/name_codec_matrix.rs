//! Pack/unpack scenarios over shared packet buffers.

use netbios_name::{
    decompose, pack, suffix, unpack, unpack_with, NameError, NameMap, NetbiosName, UnpackOptions,
};

// ---------------------------------------------------------------------------
// decompose
// ---------------------------------------------------------------------------

#[test]
fn decompose_matrix() {
    let cases = [
        ("foobar", "foobar         ", ""),
        ("foobar.example.com", "foobar         ", "example.com"),
        ("snafu.example.com", "snafu          ", "example.com"),
        ("FIFTEENCHARSXYZ", "FIFTEENCHARSXYZ", ""),
        ("x.a.b.c.d", "x              ", "a.b.c.d"),
        ("caf\u{e9}.lab", "caf\u{e9}           ", "lab"),
    ];
    for (full_name, netbios_name, scope_id) in cases {
        let parts = decompose(full_name).unwrap();
        assert_eq!(parts.netbios_name, netbios_name, "{full_name}");
        assert_eq!(parts.netbios_name.chars().count(), 15, "{full_name}");
        assert_eq!(parts.scope_id, scope_id, "{full_name}");
    }

    for full_name in ["ThisNameIsTooLong", "ThisNameIsTooLong.example.com"] {
        assert!(
            matches!(decompose(full_name), Err(NameError::NameTooLong { len: 17, .. })),
            "{full_name}"
        );
    }
}

// ---------------------------------------------------------------------------
// pack
// ---------------------------------------------------------------------------

#[test]
fn pack_simple_name_layout() {
    let mut buf = [0u8; 34];
    let written = pack(&mut buf, 0, Some(&mut NameMap::new()), "foobar", 0x20).unwrap();
    assert_eq!(written, 1 + 32 + 1);
    assert_eq!(buf[0], 32);
    assert!(buf[1..33].iter().all(|c| (b'A'..=b'P').contains(c)));
    assert_eq!(&buf[1..33], b"GGGPGPGCGBHCCACACACACACACACACACA");
    assert_eq!(buf[33], 0);
}

#[test]
fn pack_scope_layout() {
    let mut buf = [0u8; 64];
    let written = pack(&mut buf, 0, None, "foobar.example.com", 0x20).unwrap();
    assert_eq!(written, 46);
    assert_eq!(buf[33], 7);
    assert_eq!(&buf[34..41], b"example");
    assert_eq!(buf[41], 3);
    assert_eq!(&buf[42..45], b"com");
    assert_eq!(buf[45], 0);
}

#[test]
fn pack_shared_scope_becomes_pointer() {
    let mut buf = [0u8; 128];
    let mut map = NameMap::new();

    let first = pack(&mut buf, 0, Some(&mut map), "foobar.example.com", 0x20).unwrap();
    assert_eq!(first, 46);
    assert_eq!(map.get("example.com"), Some(33));
    assert_eq!(map.get("com"), Some(41));

    let second = pack(&mut buf, first, Some(&mut map), "snafu.example.com", 0x20).unwrap();
    assert_eq!(second, 1 + 32 + 2);
    assert_eq!(buf[first], 32);
    assert_eq!(&buf[first + 33..first + 35], &[0xc0, 33]);

    let read = unpack(&buf, first).unwrap();
    assert_eq!(read.name, "snafu.example.com");
    assert_eq!(read.suffix, 0x20);
    assert_eq!(read.bytes_read, second);
}

#[test]
fn pack_same_name_twice() {
    let mut shared = [0u8; 128];
    let mut map = NameMap::new();
    let first = pack(&mut shared, 0, Some(&mut map), "host.corp", 0x00).unwrap();
    let second = pack(&mut shared, first, Some(&mut map), "host.corp", 0x00).unwrap();
    assert_eq!(second, 2);
    assert_eq!(&shared[first..first + 2], &[0xc0, 0x00]);
    assert_eq!(unpack(&shared, first).unwrap().name, "host.corp");

    let mut plain = [0u8; 128];
    let first = pack(&mut plain, 0, None, "host.corp", 0x00).unwrap();
    let second = pack(&mut plain, first, None, "host.corp", 0x00).unwrap();
    assert_eq!(first, second);
    assert_eq!(plain[..first], plain[first..first * 2]);
}

#[test]
fn pack_different_suffix_shares_only_scope() {
    let mut buf = [0u8; 128];
    let mut map = NameMap::new();
    let first = pack(&mut buf, 0, Some(&mut map), "dc.corp", suffix::DOMAIN_CONTROLLERS).unwrap();
    let second = pack(&mut buf, first, Some(&mut map), "dc.corp", suffix::FILE_SERVER).unwrap();
    assert_eq!(second, 1 + 32 + 2);

    assert_eq!(unpack(&buf, 0).unwrap().suffix, suffix::DOMAIN_CONTROLLERS);
    assert_eq!(unpack(&buf, first).unwrap().suffix, suffix::FILE_SERVER);
}

#[test]
fn pack_errors() {
    let mut buf = [0u8; 128];
    assert!(matches!(
        pack(&mut buf, 0, None, "ThisNameIsTooLong", 0),
        Err(NameError::NameTooLong { .. })
    ));

    let long_label = format!("a.{}", "x".repeat(70));
    assert!(matches!(
        pack(&mut buf, 0, None, &long_label, 0),
        Err(NameError::LabelTooLong { len: 70, .. })
    ));

    assert!(matches!(
        pack(&mut buf, 0, None, "\u{20ac}", 0),
        Err(NameError::NotLatin1 { ch: '\u{20ac}', .. })
    ));

    let mut small = [0u8; 40];
    assert!(matches!(
        pack(&mut small, 0, None, "foobar.example.com", 0x20),
        Err(NameError::BufferTooSmall { offset: 33, .. })
    ));
}

// ---------------------------------------------------------------------------
// unpack
// ---------------------------------------------------------------------------

#[test]
fn unpack_short_buffer_is_label_too_large() {
    let mut buf = [0u8; 8];
    buf[0] = 32;
    buf[1..].copy_from_slice(b"GGGPGPG");
    assert_eq!(
        unpack(&buf, 0),
        Err(NameError::LabelTooLarge { offset: 0, len: 32 })
    );
}

#[test]
fn unpack_invalid_flag_patterns() {
    for (octet, flags) in [(0x40u8, 0x40u8), (0x7f, 0x40), (0x80, 0x80), (0xbf, 0x80)] {
        let buf = [octet, 0, 0, 0];
        assert_eq!(
            unpack(&buf, 0),
            Err(NameError::InvalidLabelFlags { offset: 0, flags }),
            "{octet:#04x}"
        );
    }
}

#[test]
fn unpack_pointer_cycle_is_rejected() {
    // Two names pointing at each other.
    let buf = [0xc0, 0x02, 0xc0, 0x00];
    assert!(matches!(
        unpack(&buf, 0),
        Err(NameError::PointerLoop { .. })
    ));
}

#[test]
fn unpack_with_pointer_limit() {
    let mut buf = [0u8; 128];
    let mut map = NameMap::new();
    let mut offset = 0;
    for name in ["a.x.y", "b.x.y", "c.x.y"] {
        offset += pack(&mut buf, offset, Some(&mut map), name, 0x20).unwrap();
    }
    let last = offset - 35;
    assert_eq!(unpack(&buf, last).unwrap().name, "c.x.y");

    let strict = UnpackOptions {
        max_pointer_hops: 0,
    };
    assert_eq!(
        unpack_with(&buf, last, &strict),
        Err(NameError::TooManyPointers {
            offset: last + 33,
            limit: 0
        })
    );
}

// ---------------------------------------------------------------------------
// NetbiosName
// ---------------------------------------------------------------------------

#[test]
fn names_in_one_packet() {
    let names = [
        NetbiosName::new("WORKGROUP", suffix::MASTER_BROWSER).unwrap(),
        NetbiosName::new("FILESRV.lab.example", suffix::FILE_SERVER).unwrap(),
        NetbiosName::new("PRINTSRV.lab.example", suffix::FILE_SERVER).unwrap(),
        NetbiosName::new("FILESRV.lab.example", suffix::FILE_SERVER).unwrap(),
    ];

    let mut packet = [0u8; 256];
    let mut map = NameMap::new();
    let mut offsets = Vec::new();
    let mut offset = 12;
    for name in &names {
        offsets.push(offset);
        offset += name.write(&mut packet, offset, Some(&mut map)).unwrap();
    }

    let mut cursor = 12;
    for (name, &at) in names.iter().zip(&offsets) {
        assert_eq!(cursor, at);
        let read = NetbiosName::from_buffer(&packet, cursor).unwrap();
        assert_eq!(read.full_name(), name.full_name());
        assert_eq!(read.suffix(), name.suffix());
        assert_eq!(read.netbios_name(), name.netbios_name());
        assert_eq!(read.scope_id(), name.scope_id());
        cursor += read.bytes_read().unwrap();
    }
    assert_eq!(cursor, offset);

    assert_eq!(names[1].to_string(), "FILESRV<20>.lab.example");
    assert_eq!(offsets[3] + 2, offset);
}

#[test]
fn high_byte_names_roundtrip() {
    let mut buf = [0u8; 64];
    let written = pack(&mut buf, 0, None, "caf\u{e9}.r\u{e9}seau", 0x20).unwrap();
    assert_eq!(written, 1 + 32 + 1 + 6 + 1);
    assert_eq!(&buf[7..9], b"OJ");
    assert_eq!(&buf[33..40], b"\x06r\xe9seau");

    let read = unpack(&buf, 0).unwrap();
    assert_eq!(read.name, "caf\u{e9}.r\u{e9}seau");
    assert_eq!(read.bytes_read, written);
}

#[test]
fn from_buffer_accepts_fifteen_high_bytes() {
    // Fifteen 0xe9 bytes with suffix 0x20.
    let mut packet = vec![32];
    packet.extend(b"OJ".repeat(15));
    packet.extend(b"CA");
    packet.push(0);

    let name = NetbiosName::from_buffer(&packet, 0).unwrap();
    let expected = "\u{e9}".repeat(15);
    assert_eq!(name.full_name(), expected);
    assert_eq!(name.netbios_name(), expected);
    assert_eq!(name.suffix(), 0x20);
    assert_eq!(name.bytes_read(), Some(34));

    let mut out = [0u8; 34];
    assert_eq!(name.write(&mut out, 0, None), Ok(34));
    assert_eq!(out[..], packet[..]);
}
