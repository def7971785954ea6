use std::path::PathBuf;

/// Per-upload tracking identifier.
pub type Slug = String;

pub fn new_slug() -> Slug {
    uuid::Uuid::new_v4().to_string()
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadEntry {
    pub slug: Slug,
    pub name: String,
    pub source: PathBuf,
    pub size: u64,
    pub loaded: u64,
}

impl UploadEntry {
    pub fn progress_percentage(&self) -> u16 {
        if self.size == 0 {
            0
        } else {
            ((self.loaded as f64 / self.size as f64) * 100.0).min(100.0) as u16
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_is_capped() {
        let mut entry = UploadEntry {
            slug: new_slug(),
            name: "a.bin".into(),
            source: PathBuf::from("/tmp/a.bin"),
            size: 200,
            loaded: 50,
        };
        assert_eq!(entry.progress_percentage(), 25);
        entry.loaded = 400;
        assert_eq!(entry.progress_percentage(), 100);
        entry.size = 0;
        assert_eq!(entry.progress_percentage(), 0);
    }

    #[test]
    fn slugs_are_unique() {
        assert_ne!(new_slug(), new_slug());
    }
}
