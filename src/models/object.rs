use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One row of an object listing. `name` is relative to the prefix it was
/// listed under; names ending in `/` are folders (common prefixes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectEntry {
    pub name: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub content_type: String,
    #[serde(default)]
    pub last_modified: Option<DateTime<Utc>>,
}

impl ObjectEntry {
    pub fn is_folder(&self) -> bool {
        self.name.ends_with('/')
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    None,
    Name,
    Size,
    LastModified,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::None => "",
            SortBy::Name => "name",
            SortBy::Size => "size",
            SortBy::LastModified => "last-modified",
        }
    }

    /// Unknown field names map to `None`, which leaves a listing in server order.
    pub fn parse(field: &str) -> Self {
        match field {
            "name" => SortBy::Name,
            "size" => SortBy::Size,
            "last-modified" => SortBy::LastModified,
            _ => SortBy::None,
        }
    }
}

/// Returns `list` reordered by `sort_by`. Folders are kept ahead of files in
/// both directions; `SortBy::None` returns the list untouched.
pub fn sorted(list: &[ObjectEntry], sort_by: SortBy, ascending: bool) -> Vec<ObjectEntry> {
    if sort_by == SortBy::None {
        return list.to_vec();
    }

    let (mut folders, mut files): (Vec<_>, Vec<_>) =
        list.iter().cloned().partition(ObjectEntry::is_folder);

    let compare = |a: &ObjectEntry, b: &ObjectEntry| {
        let ordering = compare_by(a, b, sort_by);
        if ascending {
            ordering
        } else {
            ordering.reverse()
        }
    };
    folders.sort_by(compare);
    files.sort_by(compare);

    folders.extend(files);
    folders
}

fn compare_by(a: &ObjectEntry, b: &ObjectEntry, sort_by: SortBy) -> Ordering {
    match sort_by {
        SortBy::Name => a
            .name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name)),
        SortBy::Size => a.size.cmp(&b.size),
        SortBy::LastModified => a.last_modified.cmp(&b.last_modified),
        SortBy::None => Ordering::Equal,
    }
}

/// Parent of a folder-style prefix: `a/b/` -> `a/`, `a/` -> ``.
pub fn parent_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim_end_matches('/');
    match trimmed.rsplit_once('/') {
        Some((parent, _)) => format!("{parent}/"),
        None => String::new(),
    }
}
