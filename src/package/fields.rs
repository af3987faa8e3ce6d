//! Allow-list of top-level registry document keys copied into PackageInfo

/// A top-level key of the registry document that PackageInfo keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Description,
    DistTags,
    Versions,
    Readme,
    Homepage,
    Maintainers,
    Time,
    Author,
    Repository,
    License,
    Keywords,
}

impl Field {
    /// Every picked field, in registry document order
    pub const ALL: [Field; 12] = [
        Field::Name,
        Field::Description,
        Field::DistTags,
        Field::Versions,
        Field::Readme,
        Field::Homepage,
        Field::Maintainers,
        Field::Time,
        Field::Author,
        Field::Repository,
        Field::License,
        Field::Keywords,
    ];

    /// Key as it appears in the registry response
    pub fn source_key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
            Field::DistTags => "dist-tags",
            Field::Versions => "versions",
            Field::Readme => "readme",
            Field::Homepage => "homepage",
            Field::Maintainers => "maintainers",
            Field::Time => "time",
            Field::Author => "author",
            Field::Repository => "repository",
            Field::License => "license",
            Field::Keywords => "keywords",
        }
    }
}
