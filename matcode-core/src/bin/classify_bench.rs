//! Classification throughput benchmark.
//!
//! Reads a UTF-8 file with one material description per line and measures:
//!
//! 1. **Normalize**: classification normalizer over every line
//! 2. **Analyze**: full per-row pipeline, sequential
//! 3. **Parallel**: full pipeline on the rayon pool (feature `parallel`)
//!
//! ## Usage
//!
//! ```bash
//! ./target/release/classify_bench /path/to/descriptions.txt
//! ./target/release/classify_bench /path/to/descriptions.txt analyze
//! ```
//!
//! ## Example Output
//!
//! ```text
//! === Analyze ===
//! --------------------------------
//! Mode        : Analyze
//! Elapsed     : 0.412 s
//! Throughput  : 24.31 MiB/s
//! Rows        : 1_000_000
//! Rows/sec    : 2_427_184
//! --------------------------------
//! ```
//!
//! Build with `--release`; use a few hundred thousand lines for stable numbers.

use std::env;
use std::fs;
use std::time::{Duration, Instant};

use matcode_core::analyzer::normalizer::TextNormalizer;
use matcode_core::Analyzer;

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

fn main() -> std::io::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: classify_bench <path> [normalize|analyze|parallel|all]");
        std::process::exit(1);
    }

    let text = fs::read_to_string(&args[1])?;
    let lines: Vec<&str> = text.lines().collect();
    let mode = args.get(2).map_or("all", String::as_str);

    println!("File size: {}", fmt_bytes(text.len() as u64));
    println!("Rows:      {}\n", fmt_count(lines.len() as u64));

    let analyzer = Analyzer::new();

    if matches!(mode, "normalize" | "all") {
        bench_normalize(&lines, text.len());
    }
    if matches!(mode, "analyze" | "all") {
        bench_analyze(&analyzer, &lines, text.len());
    }
    if matches!(mode, "parallel" | "all") {
        bench_parallel(&analyzer, &lines, text.len());
    }

    Ok(())
}

fn bench_normalize(lines: &[&str], bytes: usize) {
    let normalizer = TextNormalizer::default();
    let mut out = String::with_capacity(256);

    println!("=== Normalize ===");

    let run = |out: &mut String| {
        for line in lines {
            normalizer.normalize_into(line, out);
            std::hint::black_box(&*out);
        }
    };

    warmup(|| run(&mut out));
    let elapsed = measure(|| run(&mut out));

    print_perf("Normalize", bytes, elapsed, lines.len() as u64);
}

fn bench_analyze(analyzer: &Analyzer, lines: &[&str], bytes: usize) {
    println!("=== Analyze ===");

    let run = || {
        for (row, line) in lines.iter().enumerate() {
            std::hint::black_box(analyzer.analyze(line, row));
        }
    };

    warmup(run);
    let elapsed = measure(run);

    print_perf("Analyze", bytes, elapsed, lines.len() as u64);
}

#[cfg(feature = "parallel")]
fn bench_parallel(analyzer: &Analyzer, lines: &[&str], bytes: usize) {
    let rows: Vec<Option<&str>> = lines.iter().copied().map(Some).collect();

    println!("=== Parallel ({} threads) ===", rayon::current_num_threads());

    let run = || {
        std::hint::black_box(analyzer.analyze_par(&rows));
    };

    warmup(run);
    let elapsed = measure(run);

    print_perf("Parallel", bytes, elapsed, lines.len() as u64);
}

#[cfg(not(feature = "parallel"))]
fn bench_parallel(_analyzer: &Analyzer, _lines: &[&str], _bytes: usize) {
    println!("=== Parallel ===\nskipped: built without the `parallel` feature\n");
}

fn warmup<F: FnMut()>(mut f: F) {
    for _ in 0..WARMUP_RUNS {
        f();
    }
}

fn measure<F: FnMut()>(mut f: F) -> Duration {
    let mut total = Duration::ZERO;

    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        f();
        total += start.elapsed();
    }

    total / MEASURE_RUNS as u32
}

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, rows: u64) {
    let secs = elapsed.as_secs_f64().max(f64::EPSILON);
    let mib = input_bytes as f64 / (1024.0 * 1024.0);

    println!("--------------------------------");
    println!("Mode        : {label}");
    println!("Elapsed     : {secs:.3} s");
    println!("Throughput  : {:.2} MiB/s", mib / secs);
    println!("Rows        : {}", fmt_count(rows));
    println!("Rows/sec    : {}", fmt_count((rows as f64 / secs) as u64));
    println!("--------------------------------\n");
}

fn fmt_bytes(b: u64) -> String {
    match b {
        b if b >= 1 << 30 => format!("{:.2} GiB", b as f64 / (1u64 << 30) as f64),
        b if b >= 1 << 20 => format!("{:.2} MiB", b as f64 / (1u64 << 20) as f64),
        b if b >= 1 << 10 => format!("{:.2} KiB", b as f64 / 1024.0),
        b => format!("{b} B"),
    }
}

fn fmt_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out
}
