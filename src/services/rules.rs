//! The size-budget rule table, fixed at startup.
//!
//! Rows follow the Android best-practice chart in its published order.
//! `classify` scans them top to bottom and the first extension match wins,
//! so rows that share an extension with an earlier row (fullscreen webp,
//! music ogg, data json, resource xml) currently serve as documentation in
//! the Validation Rules sheet until an earlier row is narrowed.

use crate::domain::models::{FileCategory, ValidationRule};

const KB: u64 = 1024;
const MB: u64 = 1024 * 1024;

static RULES: &[ValidationRule] = &[
    ValidationRule {
        category: FileCategory::VectorIcon,
        extensions: &["xml"],
        max_bytes: 20 * KB,
        note: "vector drawable, < 20 KB",
    },
    ValidationRule {
        category: FileCategory::RasterIcon,
        extensions: &["png", "jpg", "jpeg"],
        max_bytes: 50 * KB,
        note: "<= 50 KB",
    },
    ValidationRule {
        category: FileCategory::ContentImage,
        extensions: &["webp"],
        max_bytes: 200 * KB,
        note: "<= 200 KB",
    },
    ValidationRule {
        category: FileCategory::FullscreenImage,
        extensions: &["webp", "jpg"],
        max_bytes: 500 * KB,
        note: "<= 500 KB (1080x1920)",
    },
    ValidationRule {
        category: FileCategory::AudioEffect,
        extensions: &["ogg", "aac"],
        max_bytes: 100 * KB,
        note: "< 100 KB (< 5 s)",
    },
    ValidationRule {
        category: FileCategory::AudioMusic,
        extensions: &["ogg", "aac"],
        max_bytes: 300 * KB,
        note: "<= 300 KB",
    },
    ValidationRule {
        category: FileCategory::Video,
        extensions: &["mp4", "mov", "m4v"],
        max_bytes: MB,
        note: "< 1 MB (480p)",
    },
    ValidationRule {
        category: FileCategory::LottieAnimation,
        extensions: &["json"],
        max_bytes: 200 * KB,
        note: "50-200 KB",
    },
    ValidationRule {
        category: FileCategory::NativeLibrary,
        extensions: &["so"],
        max_bytes: 5 * MB,
        note: "<= 5 MB per ABI",
    },
    ValidationRule {
        category: FileCategory::DexCode,
        extensions: &["dex"],
        max_bytes: 10 * MB,
        note: "<= 10 MB per file",
    },
    ValidationRule {
        category: FileCategory::JsonData,
        extensions: &["json"],
        max_bytes: 100 * KB,
        note: "<= 100 KB",
    },
    ValidationRule {
        category: FileCategory::Font,
        extensions: &["ttf", "otf"],
        max_bytes: 500 * KB,
        note: "<= 500 KB",
    },
    ValidationRule {
        category: FileCategory::ResourceXml,
        extensions: &["xml"],
        max_bytes: 20 * KB,
        note: "<= 20 KB",
    },
];

pub fn rules() -> &'static [ValidationRule] {
    RULES
}

/// Extensions the snapshot walk considers packageable: everything the rule
/// table budgets, plus container/code formats that ship inside a package.
static PACKAGEABLE_EXTS: &[&str] = &[
    "xml", "png", "jpg", "jpeg", "webp", "ogg", "aac", "mp4", "mov", "m4v", "json", "so", "dex",
    "ttf", "otf", "apk", "aab", "jar", "aar", "class",
];

pub fn is_packageable(ext: &str) -> bool {
    PACKAGEABLE_EXTS.contains(&ext)
}

/// Artifacts that should normally be produced by the build, not committed.
static NON_STANDARD_EXTS: &[&str] = &["apk", "aab", "so", "jar", "dex", "class", "aar"];

pub fn is_non_standard(path: &str) -> bool {
    match extension_of(path) {
        Some(ext) => NON_STANDARD_EXTS.contains(&ext.as_str()),
        None => false,
    }
}

/// Lowercased extension of `path`, without the dot.
pub fn extension_of(path: &str) -> Option<String> {
    let name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_never_empty_and_keeps_chart_order() {
        let r = rules();
        assert_eq!(r.len(), 13);
        assert_eq!(r[0].category, FileCategory::VectorIcon);
        assert_eq!(r[12].category, FileCategory::ResourceXml);
    }

    #[test]
    fn every_budgeted_extension_is_packageable() {
        for rule in rules() {
            for ext in rule.extensions {
                assert!(is_packageable(ext), "{ext} missing from allow-list");
            }
        }
    }

    #[test]
    fn extension_is_case_insensitive_and_dot_aware() {
        assert_eq!(extension_of("res/drawable/Icon.PNG"), Some("png".into()));
        assert_eq!(extension_of("lib/arm64-v8a/libfoo.so"), Some("so".into()));
        assert_eq!(extension_of("Makefile"), None);
        assert_eq!(extension_of(".gitignore"), None);
    }

    #[test]
    fn non_standard_flags_build_artifacts_only() {
        assert!(is_non_standard("app/release/app.apk"));
        assert!(is_non_standard("libs/native.SO"));
        assert!(!is_non_standard("res/drawable/icon.png"));
    }
}
