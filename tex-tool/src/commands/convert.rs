//! Batch conversion of files and directories

use anyhow::{Context, Result};
use cm3d2_tex::uv::SIDECAR_SUFFIX;
use cm3d2_tex::{Conversion, Converter, ErrorKind, TexError, is_tex_path};
use glob::{Pattern, glob};
use indicatif::ProgressBar;
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::cli::ConvertArgs;
use crate::utils::create_progress_bar;

/// What happened to one input
#[derive(Debug)]
pub enum Outcome {
    /// Output written
    Converted(Conversion),
    /// Input is neither a container nor a readable image
    Skipped,
    /// Conversion failed
    Failed(TexError),
}

/// Classify the result of converting `path`
pub fn classify(path: &Path, result: cm3d2_tex::Result<Conversion>) -> Outcome {
    match result {
        Ok(conversion) => Outcome::Converted(conversion),
        Err(e) if !is_tex_path(path) && e.kind() == ErrorKind::UnreadableImage => Outcome::Skipped,
        Err(e) => Outcome::Failed(e),
    }
}

#[derive(Default)]
struct Tally {
    converted: AtomicUsize,
    skipped: AtomicUsize,
    failed: AtomicUsize,
}

struct Batch<'a> {
    converter: Converter,
    tally: Tally,
    progress: Option<&'a ProgressBar>,
    quiet: bool,
}

impl Batch<'_> {
    fn run(&self, path: &Path) {
        let outcome = classify(path, self.converter.convert(path));
        let line = match &outcome {
            Outcome::Converted(conversion) => {
                self.tally.converted.fetch_add(1, Ordering::Relaxed);
                (!self.quiet).then(|| describe(conversion))
            }
            Outcome::Skipped => {
                self.tally.skipped.fetch_add(1, Ordering::Relaxed);
                Some(format!(
                    "Skipping {}: not an image (or format not supported)",
                    path.display()
                ))
            }
            Outcome::Failed(_) => {
                self.tally.failed.fetch_add(1, Ordering::Relaxed);
                None
            }
        };

        self.print(|| {
            if let Some(line) = &line {
                println!("{line}");
            }
            if let Outcome::Failed(e) = &outcome {
                eprintln!("✗ {}: {}", path.display(), e);
            }
        });
        if let Some(pb) = self.progress {
            pb.inc(1);
        }
    }

    fn print(&self, f: impl FnOnce()) {
        match self.progress {
            Some(pb) => pb.suspend(f),
            None => f(),
        }
    }
}

fn describe(conversion: &Conversion) -> String {
    let mut line = format!(
        "✓ {} -> {}",
        conversion.input.display(),
        conversion.output.display()
    );
    if let Some(sidecar) = &conversion.sidecar {
        line.push_str(&format!(" (+ {})", sidecar.display()));
    }
    line
}

/// Convert every input. Per-file failures are reported and counted but
/// never turn into an error.
pub fn execute(args: &ConvertArgs, quiet: bool) -> Result<()> {
    let files = collect_inputs(&args.paths)?;
    if files.is_empty() {
        println!("No files to convert");
        return Ok(());
    }
    info!("Converting {} files", files.len());

    let mut converter = Converter::new();
    if let Some(dir) = &args.output_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
        converter = converter.with_output_dir(dir);
    }

    let pb = (!quiet && files.len() > 1)
        .then(|| create_progress_bar(files.len() as u64, "Converting"));
    let batch = Batch {
        converter,
        tally: Tally::default(),
        progress: pb.as_ref(),
        quiet,
    };

    run_all(&batch, &files, args.threads)?;

    if let Some(pb) = &pb {
        pb.finish_and_clear();
    }

    let tally = &batch.tally;
    println!("\nResults:");
    println!("  Converted: {}", tally.converted.load(Ordering::Relaxed));
    println!("  Skipped: {}", tally.skipped.load(Ordering::Relaxed));
    println!("  Failed: {}", tally.failed.load(Ordering::Relaxed));
    Ok(())
}

#[cfg(feature = "parallel")]
fn run_all(batch: &Batch<'_>, files: &[PathBuf], threads: Option<usize>) -> Result<()> {
    use rayon::prelude::*;

    if threads == Some(1) {
        files.iter().for_each(|file| batch.run(file));
        return Ok(());
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(num_threads) = threads {
        builder = builder.num_threads(num_threads);
    }
    let pool = builder.build().context("Failed to set thread count")?;
    pool.install(|| files.par_iter().for_each(|file| batch.run(file)));
    Ok(())
}

#[cfg(not(feature = "parallel"))]
fn run_all(batch: &Batch<'_>, files: &[PathBuf], threads: Option<usize>) -> Result<()> {
    if threads.is_some_and(|n| n > 1) {
        log::warn!("Built without the 'parallel' feature, converting sequentially");
    }
    files.iter().for_each(|file| batch.run(file));
    Ok(())
}

/// Expand the command line into the list of files to convert.
///
/// Directories are searched recursively. UV sidecars found that way are
/// left out, they are read alongside their image. Paths that are neither
/// a file nor a directory are reported and skipped.
pub fn collect_inputs(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            let pattern = format!("{}/**/*", Pattern::escape(&path.to_string_lossy()));
            let mut found: Vec<_> = glob(&pattern)
                .context("Invalid glob pattern")?
                .filter_map(|p| p.ok())
                .filter(|p| p.is_file() && !is_sidecar(p))
                .collect();
            found.sort();
            debug!("Found {} files under {}", found.len(), path.display());
            files.extend(found);
        } else {
            println!("[WARN] {} is not a valid file nor directory", path.display());
        }
    }
    Ok(files)
}

fn is_sidecar(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.to_ascii_lowercase().ends_with(SIDECAR_SUFFIX))
}
