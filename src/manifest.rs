use serde::{Deserialize, Serialize};
use serde_json::Value;
use indexmap::IndexMap;
use chrono::{DateTime, Utc};

use crate::expression::ConditionalClassFragment;
use crate::extractor::{ClassExtraction, ExtractionKind, TextRange};

/// Metadata for the generated report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestMetadata {
    /// Version of the report format
    pub version: String,

    /// Timestamp when the report was generated
    pub generated_at: DateTime<Utc>,

    /// Number of files processed
    pub files_processed: usize,

    /// Number of class-bearing occurrences found
    pub occurrences: usize,

    /// Number of distinct class tokens across all occurrences
    pub unique_classes: usize,

    /// Whether translations were grouped by category
    pub grouped_by_category: bool,

    /// Translator version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translator_version: Option<String>,
}

/// One extracted occurrence with its translation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestOccurrence {
    pub range: TextRange,

    /// 1-based line of `range.start`
    pub line: usize,

    /// 1-based column of `range.start`, counted in characters
    pub column: usize,

    #[serde(rename = "type")]
    pub kind: ExtractionKind,

    pub class_strings: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditional_classes: Vec<ConditionalClassFragment>,

    pub translation: String,
}

impl ManifestOccurrence {
    pub fn new(source: &str, extraction: ClassExtraction, translation: String) -> Self {
        let (line, column) = line_column(source, extraction.range.start);
        Self {
            range: extraction.range,
            line,
            column,
            kind: extraction.kind,
            class_strings: extraction.class_strings,
            conditional_classes: extraction.conditional_classes,
            translation,
        }
    }

    /// Every class token, guarded or not.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.class_strings
            .iter()
            .map(String::as_str)
            .chain(self.conditional_classes.iter().map(|f| f.classes.as_str()))
            .flat_map(str::split_whitespace)
    }
}

/// 1-based line and column of a byte offset.
pub fn line_column(source: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(source.len());
    let before = source.get(..offset).unwrap_or(source);
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

/// Complete report structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Metadata about the scan
    pub metadata: ManifestMetadata,

    /// Occurrences per file, in scan order
    pub files: IndexMap<String, Vec<ManifestOccurrence>>,

    /// Statistics about the scan
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<ManifestStatistics>,
}

/// Statistics about the scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestStatistics {
    /// Number of files that matched patterns
    pub files_matched: usize,

    /// Number of files actually containing classes
    pub files_with_classes: usize,

    /// Processing time in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_time_ms: Option<u64>,

    /// Occurrence count per syntax kind, in first-seen order
    #[serde(default)]
    pub occurrences_by_kind: IndexMap<String, usize>,

    /// Top used classes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_classes: Option<Vec<TopClass>>,
}

/// Information about frequently used classes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopClass {
    pub name: String,
    pub count: usize,
    pub file_count: usize,
}

impl Manifest {
    /// Create a new report with default metadata
    pub fn new() -> Self {
        Self {
            metadata: ManifestMetadata {
                version: "1.0.0".to_string(),
                generated_at: Utc::now(),
                files_processed: 0,
                occurrences: 0,
                unique_classes: 0,
                grouped_by_category: false,
                translator_version: Some(env!("CARGO_PKG_VERSION").to_string()),
            },
            files: IndexMap::new(),
            statistics: None,
        }
    }

    /// Record the occurrences of one file and refresh the counters
    pub fn add_file(&mut self, path: String, occurrences: Vec<ManifestOccurrence>) {
        self.files.entry(path).or_default().extend(occurrences);
        self.refresh_counts();
    }

    fn refresh_counts(&mut self) {
        let unique_classes = self.class_usage().len();
        self.metadata.occurrences = self.files.values().map(Vec::len).sum();
        self.metadata.unique_classes = unique_classes;
    }

    /// Class token -> (occurrence count, files it appears in)
    fn class_usage(&self) -> IndexMap<&str, (usize, Vec<&str>)> {
        let mut usage: IndexMap<&str, (usize, Vec<&str>)> = IndexMap::new();
        for (path, occurrences) in &self.files {
            for class in occurrences.iter().flat_map(ManifestOccurrence::classes) {
                let entry = usage.entry(class).or_default();
                entry.0 += 1;
                if !entry.1.contains(&path.as_str()) {
                    entry.1.push(path.as_str());
                }
            }
        }
        usage
    }

    /// Calculate and set statistics
    pub fn calculate_statistics(&mut self, processing_time_ms: Option<u64>) {
        let files_with_classes = self.files.values().filter(|o| !o.is_empty()).count();

        let mut occurrences_by_kind: IndexMap<String, usize> = IndexMap::new();
        for occurrence in self.files.values().flatten() {
            *occurrences_by_kind.entry(occurrence.kind.as_str().to_string()).or_default() += 1;
        }

        let mut class_list: Vec<_> = self
            .class_usage()
            .into_iter()
            .map(|(name, (count, files))| TopClass {
                name: name.to_string(),
                count,
                file_count: files.len(),
            })
            .collect();

        // stable sort keeps first-seen order among equal counts
        class_list.sort_by(|a, b| b.count.cmp(&a.count));
        let top_classes = class_list.into_iter().take(10).collect();

        self.statistics = Some(ManifestStatistics {
            files_matched: self.metadata.files_processed,
            files_with_classes,
            processing_time_ms,
            occurrences_by_kind,
            top_classes: Some(top_classes),
        });
    }

    /// Convert report to JSON value
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({}))
    }

    /// Convert report to pretty JSON string
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Convert report to compact JSON string
    pub fn to_compact_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder pattern for creating reports
pub struct ManifestBuilder {
    manifest: Manifest,
    start_time: Option<std::time::Instant>,
}

impl ManifestBuilder {
    /// Create a new report builder
    pub fn new() -> Self {
        Self {
            manifest: Manifest::new(),
            start_time: Some(std::time::Instant::now()),
        }
    }

    /// Set the number of files processed
    pub fn with_files_processed(mut self, count: usize) -> Self {
        self.manifest.metadata.files_processed = count;
        self
    }

    pub fn with_grouping(mut self, grouped: bool) -> Self {
        self.manifest.metadata.grouped_by_category = grouped;
        self
    }

    /// Add the occurrences of one file
    pub fn with_file(mut self, path: String, occurrences: Vec<ManifestOccurrence>) -> Self {
        self.manifest.add_file(path, occurrences);
        self
    }

    /// Build the final report with statistics
    pub fn build(mut self) -> Manifest {
        let processing_time = self.start_time.map(|t| t.elapsed().as_millis() as u64);
        self.manifest.calculate_statistics(processing_time);
        self.manifest
    }
}

impl Default for ManifestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
