//! Driver loops: load datasets, run the selection, report and persist
//! results.

use crate::fvecs;
use anyhow::{Context, Result};
use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use flatknn_core::{
    knn_search, knn_search_batch, recall_at_k, LatencyStats, Neighbor, PointSet, SelectorStrategy,
};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Effective settings for one `search` invocation, after merging config
/// and CLI flags.
pub struct SearchRun {
    /// Candidate vectors file.
    pub points: PathBuf,
    /// Query vectors file.
    pub queries: PathBuf,
    /// Neighbors per query.
    pub k: usize,
    /// Selection structure strategy.
    pub strategy: SelectorStrategy,
    /// Maximum queries taken from the query file.
    pub limit: usize,
    /// Directory for the result file.
    pub output_dir: PathBuf,
    /// Write JSON instead of the text format.
    pub json: bool,
    /// Fan queries out over rayon workers.
    pub parallel: bool,
    /// Show a progress bar on the sequential path.
    pub show_progress: bool,
}

/// One query's neighbors, as serialized in JSON output.
#[derive(Serialize)]
struct QueryResult<'a> {
    query: usize,
    neighbors: &'a [Neighbor],
}

/// Runs the batch search and writes one result file.
pub fn run_search(settings: &SearchRun) -> Result<()> {
    let (points, queries) = load_datasets(&settings.points, &settings.queries, settings.limit)?;

    let start = Instant::now();
    let results = if settings.parallel {
        knn_search_batch(&points, &queries, settings.k, settings.strategy)?
    } else {
        let progress = create_progress_bar(queries.len(), settings.show_progress);
        let mut results = Vec::with_capacity(queries.len());
        for query in &queries {
            results.push(knn_search(
                &points,
                &query.vector,
                settings.k,
                settings.strategy,
            )?);
            progress.inc(1);
        }
        progress.finish_and_clear();
        results
    };
    let elapsed = start.elapsed();

    let output_path = write_results(settings, &results)?;

    println!("{}", "Search Summary".green().bold());
    println!("  Strategy:      {}", settings.strategy);
    println!("  k:             {}", settings.k);
    println!("  Candidates:    {}", points.len());
    println!("  Queries:       {}", queries.len());
    println!("  Total time:    {:.3} ms", elapsed.as_secs_f64() * 1e3);
    println!("  Results:       {}", output_path.display());

    Ok(())
}

/// Runs every strategy over identical inputs, checks they retrieved the
/// same neighbors, and prints a latency comparison table.
pub fn run_compare(points: &Path, queries: &Path, k: usize, limit: usize) -> Result<()> {
    let (points, queries) = load_datasets(points, queries, limit)?;

    let mut reports = Vec::new();
    for strategy in SelectorStrategy::ALL {
        let mut stats = LatencyStats::new();
        let mut results: Vec<Vec<u64>> = Vec::with_capacity(queries.len());

        for query in &queries {
            let start = Instant::now();
            let neighbors = knn_search(&points, &query.vector, k, strategy)?;
            stats.record(start.elapsed());
            results.push(neighbors.iter().map(|n| n.label).collect());
        }

        reports.push((strategy, stats, results));
    }

    // Every strategy must retrieve exactly the baseline's labels.
    let baseline = &reports[0].2;
    let mut agreement = true;
    for (strategy, _, results) in &reports[1..] {
        for (truth, found) in baseline.iter().zip(results) {
            if recall_at_k(truth, found) < 1.0 {
                tracing::warn!(strategy = %strategy, "strategy disagrees with baseline");
                agreement = false;
            }
        }
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Strategy",
            "Total (ms)",
            "Mean (µs)",
            "p50 (µs)",
            "p95 (µs)",
            "p99 (µs)",
        ]);

    for (strategy, stats, _) in &reports {
        table.add_row(vec![
            strategy.name().to_string(),
            format!("{:.3}", stats.total().as_secs_f64() * 1e3),
            format!("{:.1}", stats.mean().as_secs_f64() * 1e6),
            format!("{:.1}", stats.p50().as_secs_f64() * 1e6),
            format!("{:.1}", stats.p95().as_secs_f64() * 1e6),
            format!("{:.1}", stats.p99().as_secs_f64() * 1e6),
        ]);
    }

    println!(
        "{} (k = {}, {} candidates, {} queries)",
        "Strategy Comparison".green().bold(),
        k,
        points.len(),
        queries.len()
    );
    println!("{table}");

    if agreement {
        println!("{}", "All strategies retrieved identical neighbors".green());
    } else {
        println!("{}", "Strategies disagree; see warnings above".red());
    }

    Ok(())
}

/// Prints vector count, dimension and size of an fvecs file.
pub fn run_info(file: &Path) -> Result<()> {
    let info = fvecs::probe(file)?;

    println!("fvecs file: {}", file.display());
    println!("  Vectors:   {}", info.count);
    println!("  Dimension: {}", info.dimension);
    println!(
        "  Size:      {:.1} MB",
        info.file_size as f64 / (1024.0 * 1024.0)
    );

    Ok(())
}

fn load_datasets(points: &Path, queries: &Path, limit: usize) -> Result<(PointSet, PointSet)> {
    let points_set = fvecs::read_fvecs(points, None)?;
    tracing::info!(
        count = points_set.len(),
        dimension = points_set.dimension(),
        "loaded candidate set"
    );

    let queries_set = fvecs::read_fvecs(queries, Some(limit))?;
    tracing::info!(count = queries_set.len(), "loaded query set");

    Ok((points_set, queries_set))
}

/// Writes one result file named after the run parameters and returns its
/// path. Text format: one `i: l1, l2, ...` line per query, closest first.
fn write_results(settings: &SearchRun, results: &[Vec<Neighbor>]) -> Result<PathBuf> {
    std::fs::create_dir_all(&settings.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            settings.output_dir.display()
        )
    })?;

    let extension = if settings.json { "json" } else { "txt" };
    let file_name = format!(
        "knn_{}_{}_{}.{}",
        settings.strategy.name(),
        settings.k,
        results.len(),
        extension
    );
    let path = settings.output_dir.join(file_name);

    let file = File::create(&path)
        .with_context(|| format!("Failed to create result file {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    if settings.json {
        let rows: Vec<QueryResult<'_>> = results
            .iter()
            .enumerate()
            .map(|(query, neighbors)| QueryResult {
                query,
                neighbors,
            })
            .collect();
        serde_json::to_writer_pretty(&mut writer, &rows)?;
        writer.write_all(b"\n")?;
    } else {
        for (query, neighbors) in results.iter().enumerate() {
            let labels: Vec<String> = neighbors.iter().map(|n| n.label.to_string()).collect();
            writeln!(writer, "{}: {}", query, labels.join(", "))?;
        }
    }

    writer.flush()?;
    Ok(path)
}

fn create_progress_bar(total: usize, show: bool) -> ProgressBar {
    if show {
        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        pb
    } else {
        ProgressBar::hidden()
    }
}
