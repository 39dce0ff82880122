use serde::{Deserialize, Serialize};

// ============ Record Types ============

/// Default TTL applied to every written record set, in seconds.
pub const DEFAULT_TTL: u32 = 3600;

/// DNS record type identifier.
///
/// Covers exactly the record types accepted by the deSEC rrsets API.
/// Serialized as uppercase strings (`"A"`, `"AAAA"`, `"CNAME"`, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    /// IPv4 address record.
    A,
    /// IPv6 address record.
    Aaaa,
    /// AFS database location record.
    Afsdb,
    /// Certificate Authority Authorization record.
    Caa,
    /// Canonical name (alias) record.
    Cname,
    /// Delegation name record.
    Dname,
    /// Delegation signer record.
    Ds,
    /// Host information record.
    Hinfo,
    /// HTTPS service binding record.
    Https,
    /// Geographic location record.
    Loc,
    /// Mail exchange record.
    Mx,
    /// Naming authority pointer record.
    Naptr,
    /// Name server record.
    Ns,
    /// Pointer record.
    Ptr,
    /// Responsible person record.
    Rp,
    /// Sender Policy Framework record (deprecated in favor of TXT, still writable).
    Spf,
    /// Service locator record.
    Srv,
    /// SSH fingerprint record.
    Sshfp,
    /// Service binding record.
    Svcb,
    /// TLSA certificate association record.
    Tlsa,
    /// Text record.
    Txt,
}

impl RecordType {
    /// Parse a record type string, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`WriterError::UnsupportedRecordType`](crate::WriterError::UnsupportedRecordType)
    /// naming the (uppercased) offending type when the input is not one of the
    /// supported types.
    pub fn parse(record_type: &str) -> crate::error::Result<Self> {
        let upper = record_type.to_uppercase();
        match upper.as_str() {
            "A" => Ok(Self::A),
            "AAAA" => Ok(Self::Aaaa),
            "AFSDB" => Ok(Self::Afsdb),
            "CAA" => Ok(Self::Caa),
            "CNAME" => Ok(Self::Cname),
            "DNAME" => Ok(Self::Dname),
            "DS" => Ok(Self::Ds),
            "HINFO" => Ok(Self::Hinfo),
            "HTTPS" => Ok(Self::Https),
            "LOC" => Ok(Self::Loc),
            "MX" => Ok(Self::Mx),
            "NAPTR" => Ok(Self::Naptr),
            "NS" => Ok(Self::Ns),
            "PTR" => Ok(Self::Ptr),
            "RP" => Ok(Self::Rp),
            "SPF" => Ok(Self::Spf),
            "SRV" => Ok(Self::Srv),
            "SSHFP" => Ok(Self::Sshfp),
            "SVCB" => Ok(Self::Svcb),
            "TLSA" => Ok(Self::Tlsa),
            "TXT" => Ok(Self::Txt),
            _ => Err(crate::error::WriterError::UnsupportedRecordType { record_type: upper }),
        }
    }

    /// Canonical uppercase form, as sent on the wire and used in URLs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Afsdb => "AFSDB",
            Self::Caa => "CAA",
            Self::Cname => "CNAME",
            Self::Dname => "DNAME",
            Self::Ds => "DS",
            Self::Hinfo => "HINFO",
            Self::Https => "HTTPS",
            Self::Loc => "LOC",
            Self::Mx => "MX",
            Self::Naptr => "NAPTR",
            Self::Ns => "NS",
            Self::Ptr => "PTR",
            Self::Rp => "RP",
            Self::Spf => "SPF",
            Self::Srv => "SRV",
            Self::Sshfp => "SSHFP",
            Self::Svcb => "SVCB",
            Self::Tlsa => "TLSA",
            Self::Txt => "TXT",
        }
    }

    /// Whether the record value is itself a domain name that must be written
    /// in fully-qualified form (trailing dot).
    #[must_use]
    pub fn is_name_valued(self) -> bool {
        matches!(self, Self::Cname | Self::Ns | Self::Ptr | Self::Dname)
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============ Value Normalization ============

/// Normalize a record value for the given record type.
///
/// Name-valued types (CNAME, NS, PTR, DNAME) get a trailing dot appended when
/// absent; values already ending in a dot, and all other types, pass through
/// unchanged. Idempotent.
#[must_use]
pub fn normalize_record_value(record_type: RecordType, value: &str) -> String {
    if record_type.is_name_valued() && !value.ends_with('.') {
        format!("{value}.")
    } else {
        value.to_string()
    }
}

// ============ RRset Payload ============

/// A resource record set as written to the rrsets API.
///
/// Addressed remotely by `(domain, subname, type)`; the domain is part of the
/// endpoint URL, not the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rrset {
    /// Subdomain label prepended to the zone (here, the owner's username).
    pub subname: String,
    /// Record type, uppercase on the wire.
    #[serde(rename = "type")]
    pub record_type: RecordType,
    /// Record values. This system always writes exactly one.
    pub records: Vec<String>,
    /// Time to live in seconds.
    pub ttl: u32,
}

impl Rrset {
    /// Build a single-value record set with the normalized value and the
    /// fixed default TTL.
    #[must_use]
    pub fn new(subname: impl Into<String>, record_type: RecordType, value: &str) -> Self {
        Self {
            subname: subname.into(),
            record_type,
            records: vec![normalize_record_value(record_type, value)],
            ttl: DEFAULT_TTL,
        }
    }

    /// The fully-qualified name this record set addresses under `domain`,
    /// for progress and error messages.
    #[must_use]
    pub fn fully_qualified_name(&self, domain: &str) -> String {
        format!("{}.{}", self.subname, domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WriterError;

    // ============ RecordType::parse ============

    #[test]
    fn parse_is_case_insensitive() {
        for input in ["a", "A", "cname", "CNAME", "CnAmE"] {
            let res = RecordType::parse(input);
            assert!(res.is_ok(), "expected Ok(..) for {input:?}, got {res:?}");
        }
    }

    #[test]
    fn parse_all_supported_types() {
        let all = [
            "A", "AAAA", "AFSDB", "CAA", "CNAME", "DNAME", "DS", "HINFO", "HTTPS", "LOC", "MX",
            "NAPTR", "NS", "PTR", "RP", "SPF", "SRV", "SSHFP", "SVCB", "TLSA", "TXT",
        ];
        for name in all {
            let res = RecordType::parse(name);
            assert!(res.is_ok(), "expected Ok(..) for {name}, got {res:?}");
            let Ok(rt) = res else {
                return;
            };
            assert_eq!(rt.as_str(), name);
        }
    }

    #[test]
    fn parse_unsupported_type_names_offender() {
        let res = RecordType::parse("foo");
        assert!(
            matches!(&res, Err(WriterError::UnsupportedRecordType { record_type }) if record_type == "FOO"),
            "unexpected result: {res:?}"
        );
    }

    #[test]
    fn parse_empty_string_rejected() {
        let res = RecordType::parse("");
        assert!(
            matches!(&res, Err(WriterError::UnsupportedRecordType { .. })),
            "unexpected result: {res:?}"
        );
    }

    // ============ normalize_record_value ============

    #[test]
    fn name_valued_types_get_trailing_dot() {
        for rt in [
            RecordType::Cname,
            RecordType::Ns,
            RecordType::Ptr,
            RecordType::Dname,
        ] {
            assert_eq!(normalize_record_value(rt, "example.com"), "example.com.");
        }
    }

    #[test]
    fn already_terminated_value_unchanged() {
        assert_eq!(
            normalize_record_value(RecordType::Cname, "example.com."),
            "example.com."
        );
    }

    #[test]
    fn other_types_pass_through_byte_identical() {
        assert_eq!(normalize_record_value(RecordType::A, "1.2.3.4"), "1.2.3.4");
        assert_eq!(
            normalize_record_value(RecordType::Txt, "\"v=spf1 -all\""),
            "\"v=spf1 -all\""
        );
        assert_eq!(
            normalize_record_value(RecordType::Mx, "10 mail.example.com"),
            "10 mail.example.com"
        );
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = normalize_record_value(RecordType::Ns, "ns1.example.org");
        let twice = normalize_record_value(RecordType::Ns, &once);
        assert_eq!(once, twice);
    }

    // ============ Rrset ============

    #[test]
    fn rrset_new_normalizes_and_fixes_ttl() {
        let rrset = Rrset::new("alice", RecordType::Cname, "example.com");
        assert_eq!(rrset.subname, "alice");
        assert_eq!(rrset.record_type, RecordType::Cname);
        assert_eq!(rrset.records, vec!["example.com.".to_string()]);
        assert_eq!(rrset.ttl, DEFAULT_TTL);
    }

    #[test]
    fn rrset_serializes_with_wire_field_names() {
        let rrset = Rrset::new("alice", RecordType::Cname, "example.com");
        let json_res = serde_json::to_value(&rrset);
        assert!(json_res.is_ok(), "serialization failed: {json_res:?}");
        let Ok(json) = json_res else {
            return;
        };
        assert_eq!(
            json,
            serde_json::json!({
                "subname": "alice",
                "type": "CNAME",
                "records": ["example.com."],
                "ttl": 3600,
            })
        );
    }

    #[test]
    fn rrset_fully_qualified_name() {
        let rrset = Rrset::new("alice", RecordType::A, "1.2.3.4");
        assert_eq!(rrset.fully_qualified_name("is-dev.me"), "alice.is-dev.me");
    }

    #[test]
    fn record_type_serde_roundtrip_all() {
        let all = [
            RecordType::A,
            RecordType::Aaaa,
            RecordType::Afsdb,
            RecordType::Caa,
            RecordType::Cname,
            RecordType::Dname,
            RecordType::Ds,
            RecordType::Hinfo,
            RecordType::Https,
            RecordType::Loc,
            RecordType::Mx,
            RecordType::Naptr,
            RecordType::Ns,
            RecordType::Ptr,
            RecordType::Rp,
            RecordType::Spf,
            RecordType::Srv,
            RecordType::Sshfp,
            RecordType::Svcb,
            RecordType::Tlsa,
            RecordType::Txt,
        ];
        for rt in all {
            let json_res = serde_json::to_string(&rt);
            assert!(json_res.is_ok(), "serialization failed: {json_res:?}");
            let Ok(json) = json_res else {
                return;
            };
            assert_eq!(json, format!("\"{}\"", rt.as_str()));

            let back_res: serde_json::Result<RecordType> = serde_json::from_str(&json);
            assert!(back_res.is_ok(), "deserialization failed: {back_res:?}");
            let Ok(back) = back_res else {
                return;
            };
            assert_eq!(back, rt);
        }
    }
}
