use semver::Version;

/// Parse a registry version key into a semver::Version.
///
/// A single leading `v` is accepted (`v1.2.3`), anything else must be a
/// complete semver string. Partial versions like "1.2" are rejected.
pub fn parse_version(version: &str) -> Option<Version> {
    let stripped = version.strip_prefix('v').unwrap_or(version);
    Version::parse(stripped).ok()
}

/// Sort version keys by semver precedence, lowest first.
///
/// Build metadata does not take part in the ordering, so keys that differ
/// only in build metadata keep their input order. Keys that do not parse
/// are dropped.
pub fn sort_versions<'a, I>(versions: I) -> Vec<(&'a str, Version)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut parsed: Vec<(&str, Version)> = versions
        .into_iter()
        .filter_map(|v| parse_version(v).map(|parsed| (v, parsed)))
        .collect();

    parsed.sort_by(|(_, a), (_, b)| a.cmp_precedence(b));

    parsed
}
