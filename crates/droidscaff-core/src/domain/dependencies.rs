//! Dependency declarations offered to the build script and the version
//! catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// One block of text inserted after `dependencies {`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DependencySnippet {
    /// Short name for prompts and logs.
    pub label: &'static str,
    /// Literal text, every line newline-terminated.
    pub text: &'static str,
}

pub static INLINE_DEPENDENCIES: [DependencySnippet; 10] = [
    DependencySnippet {
        label: "glide",
        text: "\t// Glide\n    implementation(\"com.github.bumptech.glide:glide:4.16.0\")\n",
    },
    DependencySnippet {
        label: "lifecycle-runtime-ktx",
        text: "\t// Lifecycle\n    implementation(\"androidx.lifecycle:lifecycle-runtime-ktx:2.6.1\")\n",
    },
    DependencySnippet {
        label: "lifecycle-viewmodel-ktx",
        text: "    implementation(\"androidx.lifecycle:lifecycle-viewmodel-ktx:2.6.1\")\n",
    },
    DependencySnippet {
        label: "hilt-android",
        text: "\t// Hilt\n    implementation(\"com.google.dagger:hilt-android:2.51.1\")\n",
    },
    DependencySnippet {
        label: "hilt-compiler",
        text: "    kapt(\"com.google.dagger:hilt-compiler:2.51.1\")\n",
    },
    DependencySnippet {
        label: "retrofit",
        text: "\t// Retrofit & OkHttp\n    implementation(\"com.squareup.retrofit2:retrofit:2.9.0\")\n",
    },
    DependencySnippet {
        label: "okhttp",
        text: "    implementation(\"com.squareup.okhttp3:okhttp:4.11.0\")\n",
    },
    DependencySnippet {
        label: "room-runtime",
        text: "\t// Room\n    implementation(\"androidx.room:room-runtime:2.6.0\")\n",
    },
    DependencySnippet {
        label: "room-compiler",
        text: "    kapt(\"androidx.room:room-compiler:2.6.0\")\n",
    },
    DependencySnippet {
        label: "kotlinx-coroutines-android",
        text: "\t// Coroutine support\n    implementation(\"org.jetbrains.kotlinx:kotlinx-coroutines-android:1.7.3\")\n",
    },
];

/// Entries appended to `gradle/libs.versions.toml`.
pub const VERSION_CATALOG_ENTRIES: &str = r#"[versions]
glide = "4.16.0"
hiltAndroid = "2.51.1"

[libraries]
hilt-android = { module = "com.google.dagger:hilt-android", version.ref = "hiltAndroid" }
hilt-android-compiler = { module = "com.google.dagger:hilt-android-compiler", version.ref = "hiltAndroid" }

[plugins]
dagger-hilt-android = { id = "com.google.dagger.hilt.android", version.ref = "hiltAndroid" }"#;

/// Text appended to the catalog: a separating newline, the entries, and a
/// trailing newline. Existing keys are not checked.
pub fn version_catalog_appendix() -> String {
    format!("\n{VERSION_CATALOG_ENTRIES}\n")
}

/// How dependencies get added to the project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyStrategy {
    /// Inline unless a version catalog exists, then let the operator pick.
    #[default]
    Ask,
    /// Insert snippets into the build script's `dependencies {` block.
    Inline,
    /// Append entries to `gradle/libs.versions.toml`.
    Catalog,
    /// Leave dependencies alone.
    Skip,
}

impl DependencyStrategy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ask => "ask",
            Self::Inline => "inline",
            Self::Catalog => "catalog",
            Self::Skip => "skip",
        }
    }
}

impl fmt::Display for DependencyStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DependencyStrategy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ask" => Ok(Self::Ask),
            "inline" | "method1" => Ok(Self::Inline),
            "catalog" | "toml" | "method2" => Ok(Self::Catalog),
            "skip" | "none" => Ok(Self::Skip),
            _ => Err(DomainError::UnknownDependencyStrategy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_snippet_line_is_terminated() {
        for snippet in &INLINE_DEPENDENCIES {
            assert!(snippet.text.ends_with('\n'), "{}", snippet.label);
            assert!(!snippet.text.ends_with("\n\n"), "{}", snippet.label);
        }
    }

    #[test]
    fn labels_are_unique() {
        let labels: std::collections::HashSet<_> =
            INLINE_DEPENDENCIES.iter().map(|s| s.label).collect();
        assert_eq!(labels.len(), INLINE_DEPENDENCIES.len());
    }

    #[test]
    fn catalog_appendix_has_all_sections() {
        let appendix = version_catalog_appendix();
        assert!(appendix.starts_with("\n[versions]"));
        assert!(appendix.ends_with("version.ref = \"hiltAndroid\" }\n"));
        for section in ["[versions]", "[libraries]", "[plugins]"] {
            assert_eq!(appendix.matches(section).count(), 1);
        }
    }

    #[test]
    fn strategy_parsing() {
        assert_eq!("Catalog".parse::<DependencyStrategy>().unwrap(), DependencyStrategy::Catalog);
        assert_eq!("method1".parse::<DependencyStrategy>().unwrap(), DependencyStrategy::Inline);
        assert!("gradle".parse::<DependencyStrategy>().is_err());
        assert_eq!(DependencyStrategy::default(), DependencyStrategy::Ask);
    }
}
