//! Package metadata as returned by an npm-compatible registry

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::DEFAULT_REGISTRY;
use crate::error::{LookupError, RegistryError};
use crate::package::fields::Field;
use crate::package::semver::sort_versions;
use crate::registry::NpmRegistry;

/// Dist-tag resolved into [`PackageInfo::latest`] at construction
pub const LATEST_DIST_TAG: &str = "latest";

/// Metadata of a single package.
///
/// Every field except `registry` mirrors a key of the registry document and
/// is `None` when the document does not carry it. Values are kept as sent;
/// the map fields need a JSON object but keep entries of any type.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageInfo {
    /// Registry origin this package was fetched from
    pub registry: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
    /// Tag name to version, e.g. `latest` -> `4.17.21`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dist_tags: Option<IndexMap<String, Value>>,
    /// Version to version manifest
    #[serde(skip_serializing_if = "Option::is_none")]
    pub versions: Option<IndexMap<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readme: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintainers: Option<Value>,
    /// Version or lifecycle key (`created`, `modified`) to ISO-8601 timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<IndexMap<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Value>,
    /// Manifest the `latest` dist-tag points at
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest: Option<Value>,
}

impl PackageInfo {
    /// Builds a PackageInfo from a registry document.
    ///
    /// Only the keys listed in [`Field::ALL`] are kept. A missing or
    /// dangling `latest` dist-tag leaves [`PackageInfo::latest`] unset.
    pub fn new(info: Value, registry: impl Into<String>) -> Self {
        let mut document = match info {
            Value::Object(map) => map,
            _ => serde_json::Map::new(),
        };

        let mut package = Self {
            registry: registry.into(),
            ..Self::default()
        };

        for field in Field::ALL {
            if let Some(value) = document.remove(field.source_key()) {
                package.pick(field, value);
            }
        }

        package.latest = package.resolve_latest();
        package
    }

    /// Fetches `package_name` from `registry`
    pub async fn from_remote(package_name: &str, registry: &str) -> Result<Self, RegistryError> {
        NpmRegistry::new(registry)?.package_info(package_name).await
    }

    /// Fetches `package_name` from the public npm registry
    pub async fn from_default_registry(package_name: &str) -> Result<Self, RegistryError> {
        Self::from_remote(package_name, DEFAULT_REGISTRY).await
    }

    /// Returns the manifest of the version `dist_tag` points at
    pub fn info_by_dist_tag(&self, dist_tag: &str) -> Result<&Value, LookupError> {
        let version = self
            .dist_tags
            .as_ref()
            .and_then(|tags| tags.get(dist_tag))
            .and_then(Value::as_str)
            .filter(|version| !version.is_empty())
            .ok_or_else(|| LookupError::DistTagNotFound {
                package: self.display_name().to_string(),
                dist_tag: dist_tag.to_string(),
            })?;

        self.info_by_version(version)
    }

    /// Returns the manifest of `version`
    pub fn info_by_version(&self, version: &str) -> Result<&Value, LookupError> {
        self.versions
            .as_ref()
            .and_then(|versions| versions.get(version))
            .filter(|manifest| !manifest.is_null())
            .ok_or_else(|| LookupError::VersionNotFound {
                package: self.display_name().to_string(),
                version: version.to_string(),
            })
    }

    /// Returns the highest version whose major component is `major`.
    ///
    /// `None` means the package has no release in that major line.
    pub fn latest_version_by_major(&self, major: u64) -> Option<&str> {
        sort_versions(self.version_keys())
            .into_iter()
            .filter(|(_, parsed)| parsed.major == major)
            .next_back()
            .map(|(version, _)| version)
    }

    /// Returns the highest version of every major line, keyed by major
    pub fn latest_versions_by_major(&self) -> BTreeMap<u64, String> {
        sort_versions(self.version_keys()).into_iter().fold(
            BTreeMap::new(),
            |mut latest, (version, parsed)| {
                latest.insert(parsed.major, version.to_string());
                latest
            },
        )
    }

    /// Returns every valid version key, lowest first
    pub fn sorted_versions(&self) -> Vec<&str> {
        sort_versions(self.version_keys())
            .into_iter()
            .map(|(version, _)| version)
            .collect()
    }

    /// Returns the timestamp recorded under `key` in `time`
    pub fn published_at(&self, key: &str) -> Option<DateTime<Utc>> {
        let timestamp = self.time.as_ref()?.get(key)?.as_str()?;
        DateTime::parse_from_rfc3339(timestamp)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    pub fn created(&self) -> Option<DateTime<Utc>> {
        self.published_at("created")
    }

    pub fn modified(&self) -> Option<DateTime<Utc>> {
        self.published_at("modified")
    }

    fn pick(&mut self, field: Field, value: Value) {
        match field {
            Field::Name => self.name = opaque(value),
            Field::Description => self.description = opaque(value),
            Field::DistTags => self.dist_tags = typed(value),
            Field::Versions => self.versions = typed(value),
            Field::Readme => self.readme = opaque(value),
            Field::Homepage => self.homepage = opaque(value),
            Field::Maintainers => self.maintainers = opaque(value),
            Field::Time => self.time = typed(value),
            Field::Author => self.author = opaque(value),
            Field::Repository => self.repository = opaque(value),
            Field::License => self.license = opaque(value),
            Field::Keywords => self.keywords = opaque(value),
        }
    }

    /// Looks up the `latest` dist-tag, leaving `latest` unset when it is missing or dangling
    fn resolve_latest(&self) -> Option<Value> {
        let version = self.dist_tags.as_ref()?.get(LATEST_DIST_TAG)?.as_str()?;
        self.versions
            .as_ref()?
            .get(version)
            .filter(|manifest| !manifest.is_null())
            .cloned()
    }

    fn version_keys(&self) -> impl Iterator<Item = &str> {
        self.versions
            .iter()
            .flat_map(|versions| versions.keys())
            .map(String::as_str)
    }

    fn display_name(&self) -> &str {
        self.name.as_ref().and_then(Value::as_str).unwrap_or_default()
    }
}

/// Converts an object field into its map, `None` for any other JSON type
fn typed<T: DeserializeOwned>(value: Value) -> Option<T> {
    serde_json::from_value(value).ok()
}

fn opaque(value: Value) -> Option<Value> {
    (!value.is_null()).then_some(value)
}
