/// Returns the first zone in `zones` that `dns_name` equals or sits under.
///
/// Filter order decides ties, not suffix length: with `["example.com",
/// "sub.example.com"]`, `a.sub.example.com` belongs to `example.com`.
pub fn endpoint_zone_name<'a, S: AsRef<str>>(dns_name: &str, zones: &'a [S]) -> Option<&'a str> {
    let name = dns_name.trim_end_matches('.');
    zones.iter().map(<S as AsRef<str>>::as_ref).find(|zone| {
        name == *zone
            || name
                .strip_suffix(*zone)
                .is_some_and(|prefix| prefix.ends_with('.'))
    })
}

/// The zones this provider is allowed to manage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainFilter {
    zones: Vec<String>,
}

impl DomainFilter {
    pub fn new<I, S>(zones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let zones = zones
            .into_iter()
            .map(|z| z.as_ref().trim().trim_end_matches('.').to_string())
            .filter(|z| !z.is_empty())
            .collect();
        DomainFilter { zones }
    }

    pub fn zones(&self) -> &[String] {
        &self.zones
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn zone_for(&self, dns_name: &str) -> Option<&str> {
        endpoint_zone_name(dns_name, self.zones.as_slice())
    }

    pub fn matches(&self, dns_name: &str) -> bool {
        self.zone_for(dns_name).is_some()
    }
}
