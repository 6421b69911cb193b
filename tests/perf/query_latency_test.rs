use std::time::Instant;

use crate::fd_command::{build_args, SearchPattern, SearchRequest};
use crate::icons::BundledIconResolver;
use crate::model::SearchMode;
use crate::preferences::Preferences;
use crate::presenter::present;

fn p95_ms(samples: &mut [f64]) -> f64 {
    samples.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let last = samples.len().saturating_sub(1);
    let idx = ((last as f64) * 0.95).round() as usize;
    samples[idx.min(last)]
}

#[test]
fn warm_query_shaping_p95_under_15ms() {
    let request = SearchRequest {
        pattern: SearchPattern::from_query("report.pdf", true),
        mode: SearchMode::File,
        base_dir: std::env::temp_dir(),
        ignored_folders: (0..50).map(|i| format!("vendor_{i}")).collect(),
        ignored_files: (0..50).map(|i| format!("*.cache{i}")).collect(),
    };
    let paths: Vec<String> = (0..10_000)
        .map(|i| format!("/home/user/docs/Document_{i:05}.txt"))
        .collect();
    let preferences = Preferences::from_map(&std::collections::HashMap::new());
    let resolver = BundledIconResolver;

    for _ in 0..30 {
        let _ = build_args(&request);
        let _ = present("report", &paths, &preferences, &resolver, 15);
    }

    let mut batch_p95 = Vec::with_capacity(5);
    for _ in 0..5 {
        let mut samples = Vec::with_capacity(80);
        for _ in 0..80 {
            let start = Instant::now();
            let _ = build_args(&request);
            let _ = present("report", &paths, &preferences, &resolver, 15);
            samples.push(start.elapsed().as_secs_f64() * 1000.0);
        }
        batch_p95.push(p95_ms(&mut samples));
    }

    batch_p95.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let median_p95 = batch_p95[batch_p95.len() / 2];

    assert!(
        median_p95 <= 15.0,
        "median batch p95 too high: {median_p95:.3}ms (budget 15.0ms); batches={batch_p95:?}",
    );
}
