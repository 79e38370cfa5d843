//! Display helpers for repository listings.

use chrono::{DateTime, Utc};

use crate::catalog::extension;

/// Human-readable file size, `None` for zero-byte entries.
pub fn format_size(bytes: u64) -> Option<String> {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;

    match bytes {
        0 => None,
        b if b < KB => Some(format!("{} B", b)),
        b if b < MB => Some(format!("{:.1} KB", b as f64 / KB as f64)),
        b => Some(format!("{:.1} MB", b as f64 / MB as f64)),
    }
}

/// Last-push timestamp as shown in the repository header.
pub fn format_pushed_at(at: &DateTime<Utc>) -> String {
    at.format("%-d %B %Y, %H:%M UTC").to_string()
}

/// Icon category of a listing row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FileKind {
    Folder,
    Script,
    Markup,
    Style,
    Data,
    Document,
    Php,
    Database,
    Archive,
    Pdf,
    Text,
}

impl FileKind {
    pub fn for_file(name: &str) -> Self {
        match extension(name).as_deref() {
            Some("js" | "mjs" | "ts") => Self::Script,
            Some("html" | "htm") => Self::Markup,
            Some("css") => Self::Style,
            Some("json") => Self::Data,
            Some("md") => Self::Document,
            Some("php") => Self::Php,
            Some("sql") => Self::Database,
            Some("zip") => Self::Archive,
            Some("pdf") => Self::Pdf,
            _ => Self::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), None);
        assert_eq!(format_size(512).as_deref(), Some("512 B"));
        assert_eq!(format_size(1023).as_deref(), Some("1023 B"));
        assert_eq!(format_size(1024).as_deref(), Some("1.0 KB"));
        assert_eq!(format_size(1536).as_deref(), Some("1.5 KB"));
        assert_eq!(format_size(1024 * 1024).as_deref(), Some("1.0 MB"));
        assert_eq!(format_size(5 * 1024 * 1024 + 512 * 1024).as_deref(), Some("5.5 MB"));
    }

    #[test]
    fn test_format_pushed_at() {
        let at = Utc.with_ymd_and_hms(2025, 1, 4, 18, 22, 5).unwrap();
        assert_eq!(format_pushed_at(&at), "4 January 2025, 18:22 UTC");
    }

    #[test]
    fn test_file_kind() {
        assert_eq!(FileKind::for_file("app.JS"), FileKind::Script);
        assert_eq!(FileKind::for_file("index.php"), FileKind::Php);
        assert_eq!(FileKind::for_file("schema.sql"), FileKind::Database);
        assert_eq!(FileKind::for_file("README"), FileKind::Text);
        assert_eq!(FileKind::for_file("notes.txt"), FileKind::Text);
    }
}
