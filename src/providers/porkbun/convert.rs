//! Conversions between host endpoints and Porkbun records.

use std::borrow::Cow;

use crate::core::endpoint::{Endpoint, RecordType};
use crate::providers::porkbun::types::PorkbunRecord;

/// Finds the ID of the remote record matching name, content and type exactly.
///
/// For MX and SRV the content is compared in the host's `"<prio> <rest>"` form.
pub fn get_id_for_record<'a>(
    name: &str,
    content: &str,
    record_type: &str,
    records: &'a [PorkbunRecord],
) -> Option<&'a str> {
    records
        .iter()
        .find(|r| r.name == name && r.record_type == record_type && record_target(r) == content)
        .map(|r| r.id.as_str())
}

/// Porkbun keeps the priority of these types in `prio`, apart from `content`.
fn carries_priority(record_type: &str) -> bool {
    matches!(record_type, "MX" | "SRV")
}

/// `"10 mail.example.com"` splits into `("10", "mail.example.com")`.
pub fn split_priority(target: &str) -> Option<(&str, &str)> {
    let (prio, rest) = target.trim().split_once(char::is_whitespace)?;
    prio.parse::<u16>().ok()?;
    Some((prio, rest.trim_start()))
}

/// The record's value as the host writes it.
pub fn record_target(record: &PorkbunRecord) -> Cow<'_, str> {
    match record.prio.as_deref() {
        Some(prio) if carries_priority(&record.record_type) && !prio.is_empty() => {
            Cow::Owned(format!("{prio} {}", record.content))
        }
        _ => Cow::Borrowed(record.content.as_str()),
    }
}

/// `www.example.com` in zone `example.com` is `www`; the apex is "".
pub fn relative_name(dns_name: &str, zone: &str) -> String {
    let name = dns_name.trim_end_matches('.');
    if name == zone {
        return String::new();
    }
    name.strip_suffix(zone)
        .and_then(|prefix| prefix.strip_suffix('.'))
        .unwrap_or(name)
        .to_string()
}

/// Inverse of [`relative_name`]; names already inside the zone pass through.
pub fn qualify_name(name: &str, zone: &str) -> String {
    let name = name.trim_end_matches('.');
    if name.is_empty() || name == "@" {
        zone.to_string()
    } else if name == zone || name.ends_with(&format!(".{zone}")) {
        name.to_string()
    } else {
        format!("{name}.{zone}")
    }
}

/// TXT targets arrive quoted from the host; Porkbun stores them bare.
pub fn strip_quotes(target: &str) -> &str {
    target.trim_matches('"')
}

pub fn endpoint_content(ep: &Endpoint) -> &str {
    ep.targets.first().map(|t| strip_quotes(t)).unwrap_or_default()
}

pub fn convert_endpoint(
    existing: &[PorkbunRecord],
    ep: &Endpoint,
    zone: &str,
    keep_zone: bool,
) -> PorkbunRecord {
    let target = endpoint_content(ep);
    let record_type = ep.record_type.as_str();
    let (prio, content) = match split_priority(target) {
        Some((prio, rest)) if carries_priority(record_type) => (Some(prio.to_string()), rest),
        _ => (None, target),
    };
    let dns_name = ep.dns_name.trim_end_matches('.');
    let name = if keep_zone {
        dns_name.to_string()
    } else {
        relative_name(dns_name, zone)
    };

    PorkbunRecord {
        id: get_id_for_record(dns_name, target, record_type, existing)
            .unwrap_or_default()
            .to_string(),
        name,
        record_type: record_type.to_string(),
        content: content.to_string(),
        ttl: ep
            .record_ttl
            .filter(|ttl| *ttl > 0)
            .map(|ttl| ttl.to_string()),
        prio,
        ..Default::default()
    }
}

/// Builds one Porkbun record per endpoint, in order, with IDs taken from
/// `existing` where a remote record matches.
pub fn convert_to_porkbun_record(
    existing: &[PorkbunRecord],
    endpoints: &[Endpoint],
    zone: &str,
    keep_zone: bool,
) -> Vec<PorkbunRecord> {
    endpoints
        .iter()
        .map(|ep| convert_endpoint(existing, ep, zone, keep_zone))
        .collect()
}

/// `None` when the remote type is one we don't model.
pub fn to_endpoint(record: &PorkbunRecord, zone: &str) -> Option<Endpoint> {
    let record_type = record.record_type.parse::<RecordType>().ok()?;
    Some(Endpoint {
        dns_name: qualify_name(&record.name, zone),
        record_type,
        targets: vec![record_target(record).into_owned()],
        record_ttl: record.ttl.as_deref().and_then(|t| t.parse().ok()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const OWNER_TXT: &str =
        "heritage=external-dns,external-dns/owner=default,external-dns/resource=service/default/nginx";

    fn pb(id: &str, name: &str, record_type: &str, content: &str) -> PorkbunRecord {
        PorkbunRecord {
            id: id.to_string(),
            name: name.to_string(),
            record_type: record_type.to_string(),
            content: content.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_get_id_for_record() {
        let records = vec![
            pb("10", "foo.example.com", "TXT", OWNER_TXT),
            pb("10", "foo.foo.org", "A", "5.5.5.5"),
            pb("", "baz.org", "A", "5.5.5.5"),
        ];

        assert_eq!(
            get_id_for_record("foo.example.com", OWNER_TXT, "TXT", &records),
            Some("10")
        );
        assert_eq!(
            get_id_for_record("foo.example.com", "5.5.5.5", "TXT", &records),
            None
        );
    }

    #[test]
    fn test_get_id_for_record_is_exact() {
        let records = vec![pb("7", "www.example.com", "A", "1.1.1.1")];
        assert_eq!(get_id_for_record("WWW.example.com", "1.1.1.1", "A", &records), None);
        assert_eq!(get_id_for_record("www.example.com", "1.1.1.1", "AAAA", &records), None);
        assert_eq!(get_id_for_record("www.example.com", "1.1.1.2", "A", &records), None);
    }

    #[test]
    fn test_get_id_for_record_first_duplicate_wins() {
        let records = vec![
            pb("1", "www.example.com", "A", "1.1.1.1"),
            pb("2", "www.example.com", "A", "1.1.1.1"),
        ];
        assert_eq!(
            get_id_for_record("www.example.com", "1.1.1.1", "A", &records),
            Some("1")
        );
    }

    #[test]
    fn test_convert_to_porkbun_record() {
        let quoted = format!("\"{OWNER_TXT}\"");
        let endpoints = vec![
            // in zone
            Endpoint::new("foo.bar.org", RecordType::A, &["5.5.5.5"]),
            // not in zone
            Endpoint::new("foo.foo.org", RecordType::A, &["5.5.5.5"]),
            // zone apex
            Endpoint::new("bar.org", RecordType::A, &["5.5.5.5"]),
            Endpoint::new("foo.baz.org", RecordType::TXT, &[quoted.as_str()]),
        ];

        let retrieved = vec![
            pb("10", "foo.bar.org", "A", "5.5.5.5"),
            pb("15", "foo.foo.org", "A", "5.5.5.5"),
            pb("1", "bar.org", "A", "5.5.5.5"),
            pb("", "foo.baz.org", "TXT", OWNER_TXT),
        ];

        let expected = vec![
            pb("10", "foo", "A", "5.5.5.5"),
            pb("15", "foo.foo.org", "A", "5.5.5.5"),
            pb("1", "", "A", "5.5.5.5"),
            pb("", "foo.baz.org", "TXT", OWNER_TXT),
        ];

        assert_eq!(
            convert_to_porkbun_record(&retrieved, &endpoints, "bar.org", false),
            expected
        );
    }

    #[test]
    fn test_convert_keep_zone() {
        let endpoints = vec![Endpoint::new("www.example.com", RecordType::A, &["1.1.1.1"])];
        let records = convert_to_porkbun_record(&[], &endpoints, "example.com", true);
        assert_eq!(records[0].name, "www.example.com");
        assert_eq!(records[0].id, "");
    }

    #[test]
    fn test_convert_without_targets() {
        let ep = Endpoint::new("api.example.com", RecordType::A, &[]);
        let record = convert_endpoint(&[], &ep, "example.com", false);
        assert_eq!(record.name, "api");
        assert_eq!(record.content, "");
    }

    #[test]
    fn test_convert_uses_first_target_and_ttl() {
        let ep = Endpoint::new("api.example.com", RecordType::A, &["1.1.1.1", "2.2.2.2"]).with_ttl(900);
        let record = convert_endpoint(&[], &ep, "example.com", false);
        assert_eq!(record.content, "1.1.1.1");
        assert_eq!(record.ttl.as_deref(), Some("900"));

        let ep = Endpoint::new("api.example.com", RecordType::A, &["1.1.1.1"]).with_ttl(0);
        assert_eq!(convert_endpoint(&[], &ep, "example.com", false).ttl, None);
    }

    #[test]
    fn test_relative_and_qualified_names() {
        assert_eq!(relative_name("www.example.com", "example.com"), "www");
        assert_eq!(relative_name("a.b.example.com.", "example.com"), "a.b");
        assert_eq!(relative_name("example.com", "example.com"), "");
        assert_eq!(relative_name("notexample.com", "example.com"), "notexample.com");

        assert_eq!(qualify_name("www", "example.com"), "www.example.com");
        assert_eq!(qualify_name("", "example.com"), "example.com");
        assert_eq!(qualify_name("@", "example.com"), "example.com");
        assert_eq!(qualify_name("www.example.com", "example.com"), "www.example.com");
        assert_eq!(qualify_name("example.com", "example.com"), "example.com");
    }

    #[test]
    fn test_endpoint_round_trip() {
        let zone = "example.com";
        let endpoints = vec![
            Endpoint::new("www.example.com", RecordType::A, &["1.2.3.4"]),
            Endpoint::new("example.com", RecordType::MX, &["10 mail.example.com"]),
            Endpoint::new("_sip._tcp.example.com", RecordType::SRV, &["5 0 5060 sip.example.com"]),
            Endpoint::new("owner.example.com", RecordType::TXT, &["\"owner=default\""]),
        ];

        for ep in endpoints {
            let record = convert_endpoint(&[], &ep, zone, false);
            let back = to_endpoint(&record, zone).unwrap();
            assert_eq!(back.dns_name, ep.dns_name);
            assert_eq!(back.record_type, ep.record_type);
            assert_eq!(back.targets[0], strip_quotes(&ep.targets[0]));
        }
    }

    #[test]
    fn test_priority_moves_to_prio() {
        let ep = Endpoint::new("example.com", RecordType::MX, &["10 mail.example.com"]);
        let record = convert_endpoint(&[], &ep, "example.com", false);
        assert_eq!(record.content, "mail.example.com");
        assert_eq!(record.prio.as_deref(), Some("10"));

        let ep = Endpoint::new("_sip._tcp.example.com", RecordType::SRV, &["5 0 5060 sip.example.com"]);
        let record = convert_endpoint(&[], &ep, "example.com", false);
        assert_eq!(record.content, "0 5060 sip.example.com");
        assert_eq!(record.prio.as_deref(), Some("5"));

        // only MX and SRV carry a priority
        let ep = Endpoint::new("example.com", RecordType::TXT, &["10 words"]);
        let record = convert_endpoint(&[], &ep, "example.com", false);
        assert_eq!(record.content, "10 words");
        assert_eq!(record.prio, None);
    }

    #[test]
    fn test_mx_listed_with_prio() {
        let mut listed = pb("77", "example.com", "MX", "mail.example.com");
        listed.prio = Some("10".to_string());

        let ep = to_endpoint(&listed, "example.com").unwrap();
        assert_eq!(ep.targets, vec!["10 mail.example.com".to_string()]);

        let existing = vec![listed];
        assert_eq!(
            get_id_for_record("example.com", "10 mail.example.com", "MX", &existing),
            Some("77")
        );
        let record = convert_endpoint(&existing, &ep, "example.com", true);
        assert_eq!(record.id, "77");

        // A records come back with prio "0"; it stays out of the target
        let mut a = pb("1", "www.example.com", "A", "1.1.1.1");
        a.prio = Some("0".to_string());
        assert_eq!(to_endpoint(&a, "example.com").unwrap().targets[0], "1.1.1.1");
    }

    #[test]
    fn test_to_endpoint() {
        let mut record = pb("3", "www.example.com", "AAAA", "2001:db8::1");
        record.ttl = Some("600".to_string());
        let ep = to_endpoint(&record, "example.com").unwrap();
        assert_eq!(ep.dns_name, "www.example.com");
        assert_eq!(ep.record_type, RecordType::AAAA);
        assert_eq!(ep.targets, vec!["2001:db8::1".to_string()]);
        assert_eq!(ep.record_ttl, Some(600));

        assert!(to_endpoint(&pb("4", "example.com", "PTR", "x"), "example.com").is_none());
    }
}
