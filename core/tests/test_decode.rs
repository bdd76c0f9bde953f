// Byte-level decode paths: one test per failure kind and per strategy arm.

#[cfg(test)]
mod tests {
    use tracker_core::headers::{decode_header_bytes, decode_header_token, AddressValue, HeaderFormatError, HeaderVersion};
    use tracker_core::types::DecodeOptions;

    fn opts() -> DecodeOptions {
        DecodeOptions::default()
    }

    /// v3 fixed prefix with the given flags byte (spam 0, vof 0, rules_ver 0, sbrs 0x64).
    fn v3_prefix(flags: u8) -> Vec<u8> {
        vec![0x03, flags, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x64]
    }

// ## 1️⃣ Version dispatch

    #[test]
    fn empty_buffer_is_truncated() {
        let err = decode_header_bytes(&[], &opts()).unwrap_err();
        assert_eq!(err, HeaderFormatError::Truncated { need: 1, have: 0 });
    }

    #[test]
    fn empty_token_is_truncated() {
        let err = decode_header_token("", &opts()).unwrap_err();
        assert_eq!(err, HeaderFormatError::Truncated { need: 1, have: 0 });
    }

    #[test]
    fn unknown_version_byte() {
        let err = decode_header_bytes(&[0x04, 0, 0, 0, 0, 0, 0, 0], &opts()).unwrap_err();
        assert_eq!(err, HeaderFormatError::UnknownVersion { raw: 4 });
    }

    #[test]
    fn short_fixed_prefix_is_truncated() {
        // "AA" → a single zero byte: version 0 with nothing after it.
        let err = decode_header_token("AA", &opts()).unwrap_err();
        assert_eq!(err, HeaderFormatError::Truncated { need: 8, have: 1 });
    }

    #[test]
    fn v0_and_v1_share_a_layout() {
        let tail = [0x01, 0x02];
        let mut v0 = vec![0x00, 0x10, 0x00, 0x33, 0x01, 0x00, 0x00, 0x00];
        v0.extend_from_slice(&tail);
        let mut v1 = v0.clone();
        v1[0] = 0x01;

        let a = decode_header_bytes(&v0, &opts()).unwrap();
        let b = decode_header_bytes(&v1, &opts()).unwrap();
        assert_eq!(a.version, HeaderVersion::V0OrV1);
        assert_eq!(b.version, HeaderVersion::V0OrV1);
        assert_eq!(a.fixed.version, 0);
        assert_eq!(b.fixed.version, 1);
        assert_eq!(a.fixed.spam_score, 0x0010);
        assert_eq!(a.fixed.vof_score, 0x33);
        assert_eq!(a.fixed.rules_ver, 1);
        assert_eq!(a.rule_indices, vec![1, 3]);
        assert_eq!(a.rule_indices, b.rule_indices);
        assert_eq!(a.region, "global");
        assert_eq!(a.sbrs, None);
        assert_eq!(a.flags, None);
        assert_eq!(a.address, AddressValue::None);
    }

    #[test]
    fn v1_without_rules_has_empty_indices() {
        let d = decode_header_bytes(&[0x01, 0, 0, 0, 0, 0, 0, 0], &opts()).unwrap();
        assert!(d.rule_indices.is_empty());
    }

// ## 2️⃣ v2 region string

    #[test]
    fn v2_missing_region_terminator() {
        let mut buf = vec![0x02, 0, 0, 0, 0, 0, 0, 0, 1, 2, 3, 4, 0xff];
        buf.extend_from_slice(b"abc");
        let err = decode_header_bytes(&buf, &opts()).unwrap_err();
        assert_eq!(err, HeaderFormatError::MissingRegionTerminator);
    }

    #[test]
    fn v2_empty_region() {
        let buf = vec![0x02, 0, 0, 0, 0, 0, 0, 0, 1, 2, 3, 4, 0x7a, 0x00];
        let d = decode_header_bytes(&buf, &opts()).unwrap();
        assert_eq!(d.region, "");
        assert_eq!(d.address, AddressValue::Ipv4([1, 2, 3, 4]));
        assert_eq!(d.sbrs, Some(0x7a));
        assert!(d.rule_indices.is_empty());
    }

// ## 3️⃣ v3 flags and address block

    #[test]
    fn v3_unknown_address_class() {
        let mut buf = v3_prefix(0x08);
        buf.extend_from_slice(&[1, 2, 3, 4, 5]);
        let err = decode_header_bytes(&buf, &opts()).unwrap_err();
        assert_eq!(err, HeaderFormatError::UnknownAddressClass { raw: 0 });
    }

    #[test]
    fn v3_ipv4_block_too_short() {
        let mut buf = v3_prefix(0x40);
        buf.extend_from_slice(&[1, 2]);
        let err = decode_header_bytes(&buf, &opts()).unwrap_err();
        assert_eq!(err, HeaderFormatError::Truncated { need: 4, have: 2 });
    }

    #[test]
    fn v3_top64_missing_low_chunk() {
        let mut buf = v3_prefix(0x80);
        buf.extend_from_slice(&[0xb8, 0x0d, 0x01, 0x20]);
        let err = decode_header_bytes(&buf, &opts()).unwrap_err();
        assert!(matches!(err, HeaderFormatError::Truncated { .. }));
    }

    #[test]
    fn v3_full_missing_chunks() {
        let mut buf = v3_prefix(0xC0);
        buf.extend_from_slice(&[0xb8, 0x0d, 0x01, 0x20, 0x01, 0x02]);
        let err = decode_header_bytes(&buf, &opts()).unwrap_err();
        assert!(matches!(err, HeaderFormatError::Truncated { .. }));
    }

    #[test]
    fn v3_full_chunk_overflow() {
        let mut buf = v3_prefix(0xC0);
        buf.extend_from_slice(&[0, 0, 0, 0, 0x90, 0x80, 0x80, 0x80, 0x00, 0x00, 0x00]);
        let err = decode_header_bytes(&buf, &opts()).unwrap_err();
        assert_eq!(err, HeaderFormatError::Overflow { bits: 32 });
    }

    #[test]
    fn v3_top_chunk_is_little_endian() {
        let mut buf = v3_prefix(0xC0);
        buf.extend_from_slice(&[0xb8, 0x0d, 0x01, 0x20, 0x00, 0x00, 0x01]);
        let d = decode_header_bytes(&buf, &opts()).unwrap();
        assert_eq!(d.address, AddressValue::Ipv6Full128((0x2001_0db8u128 << 96) | 1));
        assert!(d.rule_indices.is_empty());
    }

    #[test]
    fn v3_address_bytes_are_not_rule_indices() {
        let mut buf = v3_prefix(0x4C);
        buf.extend_from_slice(&[10, 0, 0, 1, 0x05, 0x00]);
        let d = decode_header_bytes(&buf, &opts()).unwrap();
        assert_eq!(d.address, AddressValue::Ipv4([10, 0, 0, 1]));
        assert_eq!(d.region, "unknown");
        assert_eq!(d.sbrs, Some(0x64));
        assert_eq!(d.rule_indices, vec![5, 5]);
    }
}
