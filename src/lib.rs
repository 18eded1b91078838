pub mod args;
pub mod categories;
pub mod config;
pub mod errors;
pub mod expression;
pub mod extractor;
pub mod manifest;
pub mod mappings;
mod matcher;
pub mod modifiers;
pub mod patterns;
pub mod resolver;
pub mod scale;
pub mod scan;
pub mod translator;
pub mod variants;

pub use args::{Cli, Commands, DisplayArgs, ExtractArgs, PipeArgs, TranslateArgs};
pub use categories::{categorize_class, get_category_order, group_by_category, group_translations_by_category, Category};
pub use config::{DisplaySettings, ScanSettings, SharedSettings, TranslatorConfig};
pub use errors::{TranslatorError, Result};
pub use expression::{parse_expression, ConditionalClassFragment};
pub use extractor::{extract_all_class_names, find_extraction_at_position, ClassExtraction, ExtractionKind, TextRange};
pub use manifest::{Manifest, ManifestBuilder, ManifestOccurrence};
pub use modifiers::{apply_opacity, compose, parse_modifiers, ParsedModifiers};
pub use resolver::resolve_base_class;
pub use translator::{
    combine_class_strings, translate_classes, translate_conditional_classes, translate_token,
    TranslationSettings, Translator,
};
pub use variants::describe_variant;

#[cfg(feature = "cli")]
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// Security configuration
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Maximum file size in bytes (default: 10MB)
    pub max_file_size: u64,
    /// Allow symbolic links
    pub allow_symlinks: bool,
    /// Working directory for path traversal checks
    pub working_directory: PathBuf,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_file_size: ScanSettings::default().max_file_size,
            allow_symlinks: false,
            working_directory: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }
}

/// Performance statistics
#[derive(Debug, Clone)]
pub struct PerformanceStats {
    pub total_duration: Duration,
    pub extraction_duration: Duration,
    pub files_per_second: f64,
    pub bytes_processed: u64,
}

/// Result of a scan
#[derive(Debug)]
pub struct ExtractionResult {
    pub manifest: Manifest,
    pub total_occurrences: usize,
    pub total_files_processed: usize,
    pub performance_stats: Option<PerformanceStats>,
}

/// Extract and translate the occurrences of one source buffer.
pub fn process_source<S: TranslationSettings>(
    source: &str,
    translator: &Translator<S>,
) -> Vec<ManifestOccurrence> {
    extract_all_class_names(source)
        .into_iter()
        .map(|extraction| {
            let translation = translator.translate_extraction(&extraction);
            ManifestOccurrence::new(source, extraction, translation)
        })
        .collect()
}

/// Load the configuration file named on the command line (if any) and apply
/// the display flags given there.
pub fn load_config(display: &DisplayArgs) -> Result<TranslatorConfig> {
    let mut config = match &display.config {
        Some(path) => TranslatorConfig::from_file(path)?,
        None => TranslatorConfig::default(),
    };
    if display.group_by_category {
        config.display.group_by_category = true;
    }
    if let Some(emojis) = display.emojis_override() {
        config.display.show_category_emojis = emojis;
    }
    Ok(config)
}

/// Scan files and build the occurrence report
pub async fn extract(args: ExtractArgs) -> Result<ExtractionResult> {
    let start_time = Instant::now();

    args.validate().map_err(TranslatorError::InvalidInput)?;

    let config = load_config(&args.display)?;
    let security = SecurityConfig {
        max_file_size: config.scan.max_file_size,
        ..SecurityConfig::default()
    };

    if let Some(output) = &args.output {
        validate_output_path(output, &security)?;
    }

    let patterns = if args.input.is_empty() {
        config.scan.content.clone()
    } else {
        args.input.clone()
    };
    let mut exclude = config.scan.exclude.clone();
    exclude.extend(args.exclude.iter().cloned());

    tracing::debug!(?patterns, ?exclude, max_file_size = security.max_file_size, "starting scan");

    let files = collect_files_with_security(&patterns, &exclude, &security)?;
    if files.is_empty() {
        return Err(TranslatorError::NoFilesFound);
    }

    let bytes_processed: u64 = files.iter().map(|f| f.1).sum();
    tracing::debug!(files = files.len(), bytes = bytes_processed, "files collected");

    #[cfg(feature = "cli")]
    let progress_bar = progress_bar(files.len() as u64, args.verbose);

    let translator = Translator::new(config.display);
    let file_paths: Vec<PathBuf> = files.iter().map(|(path, _)| path.clone()).collect();

    let extraction_start = Instant::now();
    let scanned = scan_files(&file_paths, args.jobs, &translator, |path, done| {
        #[cfg(feature = "cli")]
        if let Some(pb) = &progress_bar {
            pb.set_position(done as u64);
            pb.set_message(format!(
                "Processing: {}",
                path.file_name().unwrap_or_default().to_string_lossy()
            ));
        }
        tracing::trace!(path = %path.display(), done, "file done");
    })?;
    let extraction_duration = extraction_start.elapsed();

    let mut builder = ManifestBuilder::new()
        .with_files_processed(files.len())
        .with_grouping(config.display.group_by_category);
    for (path, occurrences) in scanned {
        builder = builder.with_file(path, occurrences);
    }
    let manifest = builder.build();

    let total_duration = start_time.elapsed();
    let stats = PerformanceStats {
        total_duration,
        extraction_duration,
        files_per_second: files.len() as f64 / total_duration.as_secs_f64().max(f64::EPSILON),
        bytes_processed,
    };

    #[cfg(feature = "cli")]
    if let Some(pb) = progress_bar {
        pb.finish_with_message(format!("✓ Complete ({:.1} files/sec)", stats.files_per_second));
    }

    let result = ExtractionResult {
        total_occurrences: manifest.metadata.occurrences,
        total_files_processed: files.len(),
        manifest,
        performance_stats: Some(stats),
    };

    if !args.dry_run {
        if let Some(output) = &args.output {
            write_report(output, &result.manifest, args.compact)?;
        }
    }

    tracing::info!(
        files = result.total_files_processed,
        occurrences = result.total_occurrences,
        unique_classes = result.manifest.metadata.unique_classes,
        elapsed_ms = total_duration.as_millis() as u64,
        "scan complete"
    );

    Ok(result)
}

#[cfg(feature = "cli")]
fn progress_bar(len: u64, verbose: bool) -> Option<ProgressBar> {
    if verbose {
        return None;
    }
    let pb = ProgressBar::with_draw_target(Some(len), ProgressDrawTarget::stderr());
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({msg})")
    {
        pb.set_style(style.progress_chars("█▉▊▋▌▍▎▏  "));
    }
    pb.set_message("Scanning...");
    Some(pb)
}

/// Validate that a path is safe (no path traversal)
fn validate_output_path(path: &Path, security: &SecurityConfig) -> Result<()> {
    let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    let working_dir = security.working_directory.canonicalize()
        .unwrap_or_else(|_| security.working_directory.clone());

    let climbs = path.components().any(|c| c == std::path::Component::ParentDir);
    if path.is_relative() && climbs && !canonical.starts_with(&working_dir) {
        return Err(TranslatorError::SecurityError(
            format!("Output path '{}' appears to use path traversal", path.display())
        ));
    }

    Ok(())
}

/// Check if a file is safe to read
pub fn validate_input_file(path: &Path, security: &SecurityConfig) -> Result<()> {
    if path.is_symlink() {
        if !security.allow_symlinks {
            return Err(TranslatorError::SecurityError(
                format!("Symbolic link not allowed: {}", path.display())
            ));
        }

        let target = fs::canonicalize(path).map_err(|e| TranslatorError::SecurityError(
            format!("Cannot resolve symlink target for '{}': {}", path.display(), e)
        ))?;
        let working_dir = security.working_directory.canonicalize()
            .unwrap_or_else(|_| security.working_directory.clone());

        if !target.starts_with(&working_dir) {
            return Err(TranslatorError::SecurityError(
                format!("Symlink target '{}' is outside working directory", target.display())
            ));
        }
    }

    let metadata = fs::metadata(path).map_err(|e| TranslatorError::SecurityError(
        format!("Cannot read file metadata for '{}': {}", path.display(), e)
    ))?;

    if metadata.len() > security.max_file_size {
        return Err(TranslatorError::SecurityError(
            format!("File '{}' exceeds maximum size limit ({} bytes > {} bytes)",
                    path.display(),
                    metadata.len(),
                    security.max_file_size)
        ));
    }

    Ok(())
}

/// Collect files matching the given patterns with security checks
pub fn collect_files_with_security(
    patterns: &[String],
    exclude_patterns: &[String],
    security: &SecurityConfig,
) -> Result<Vec<(PathBuf, u64)>> {
    let mut files = Vec::new();
    let mut seen = std::collections::HashSet::new();
    let mut skipped_count = 0;

    let exclude: Vec<glob::Pattern> = exclude_patterns
        .iter()
        .map(|p| glob::Pattern::new(p))
        .collect::<std::result::Result<_, _>>()?;

    for pattern in patterns {
        for entry in glob::glob(pattern)? {
            let path = entry?;

            if exclude.iter().any(|p| p.matches_path(&path)) {
                continue;
            }

            if path.is_dir() {
                continue;
            }

            if let Err(e) = validate_input_file(&path, security) {
                tracing::warn!("Skipping file - {}", e);
                skipped_count += 1;
                continue;
            }

            let size = fs::metadata(&path)
                .map(|m| m.len())
                .unwrap_or(0);

            if seen.insert(path.clone()) {
                files.push((path, size));
            }
        }
    }

    if skipped_count > 0 {
        tracing::warn!(skipped = skipped_count, "files skipped due to security constraints");
    }

    Ok(files)
}

/// Read, extract and translate files in parallel. Results keep the order of
/// `files`. `on_file` is called after each file with the number done so far.
pub fn scan_files<S, F>(
    files: &[PathBuf],
    jobs: Option<usize>,
    translator: &Translator<S>,
    on_file: F,
) -> Result<Vec<(String, Vec<ManifestOccurrence>)>>
where
    S: TranslationSettings + Sync,
    F: Fn(&Path, usize) + Sync,
{
    let processed = AtomicUsize::new(0);

    let scan_one = |file_path: &PathBuf| -> Result<(String, Vec<ManifestOccurrence>)> {
        let display_path = file_path.display().to_string();
        let bytes = fs::read(file_path).map_err(|e| TranslatorError::ReadError {
            path: display_path.clone(),
            message: e.to_string(),
        })?;
        let source = String::from_utf8_lossy(&bytes);
        let occurrences = process_source(&source, translator);
        tracing::debug!(path = %display_path, occurrences = occurrences.len(), "scanned file");

        on_file(file_path, processed.fetch_add(1, Ordering::Relaxed) + 1);

        Ok((display_path, occurrences))
    };

    match jobs {
        Some(num_jobs) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(num_jobs)
                .build()
                .map_err(|e| TranslatorError::InvalidInput(format!("Cannot start {} worker threads: {}", num_jobs, e)))?;
            pool.install(|| files.par_iter().map(scan_one).collect())
        }
        None => files.par_iter().map(scan_one).collect(),
    }
}

fn write_report(path: &Path, manifest: &Manifest, compact: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let content = if compact {
        manifest.to_compact_json()?
    } else {
        manifest.to_pretty_json()?
    };

    write_atomic(path, &content)
        .map_err(|e| TranslatorError::OutputError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
}

/// Write file atomically by writing to temp file then renaming
fn write_atomic<P: AsRef<Path>>(path: P, content: &str) -> std::io::Result<()> {
    use std::io::Write;

    let path = path.as_ref();
    let temp_path = path.with_extension("tmp");

    let mut file = fs::File::create(&temp_path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()?;

    fs::rename(&temp_path, path)
}

/// Translate each class string given on the command line, or each stdin line
/// when there are none. One output line per input.
#[cfg(feature = "cli")]
pub async fn handle_translate_command(args: TranslateArgs) -> Result<()> {
    use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};

    let config = load_config(&args.display)?;
    let translator = Translator::new(config.display);

    let inputs = if args.classes.is_empty() {
        let mut lines = BufReader::new(io::stdin()).lines();
        let mut collected = Vec::new();
        while let Some(line) = lines.next_line().await
            .map_err(|e| TranslatorError::InputError(format!("Failed to read from stdin: {}", e)))?
        {
            collected.push(line);
        }
        collected
    } else {
        args.classes
    };

    let mut output = String::new();
    for input in &inputs {
        output.push_str(&translator.translate_classes(input));
        output.push('\n');
    }

    let mut stdout = io::stdout();
    stdout.write_all(output.as_bytes()).await
        .map_err(|e| TranslatorError::OutputError {
            path: "stdout".to_string(),
            message: e.to_string(),
        })?;
    stdout.flush().await
        .map_err(|e| TranslatorError::OutputError {
            path: "stdout".to_string(),
            message: e.to_string(),
        })?;

    Ok(())
}

/// Handle pipe command - read a source buffer from stdin, print its
/// translated occurrences as a JSON array
#[cfg(feature = "cli")]
pub async fn handle_pipe_command(args: PipeArgs) -> Result<()> {
    use tokio::io::{self, AsyncReadExt, AsyncWriteExt};

    let mut input = String::new();
    let mut stdin = io::stdin();
    stdin.read_to_string(&mut input).await
        .map_err(|e| TranslatorError::InputError(format!("Failed to read from stdin: {}", e)))?;

    let config = load_config(&args.display)?;
    let translator = Translator::new(config.display);
    let occurrences = process_source(&input, &translator);
    tracing::debug!(bytes = input.len(), occurrences = occurrences.len(), "pipe input processed");

    let mut json = if args.pretty {
        serde_json::to_string_pretty(&occurrences)?
    } else {
        serde_json::to_string(&occurrences)?
    };
    json.push('\n');

    let mut stdout = io::stdout();
    stdout.write_all(json.as_bytes()).await
        .map_err(|e| TranslatorError::OutputError {
            path: "stdout".to_string(),
            message: e.to_string(),
        })?;
    stdout.flush().await
        .map_err(|e| TranslatorError::OutputError {
            path: "stdout".to_string(),
            message: e.to_string(),
        })?;

    Ok(())
}
