//! End-to-end: text stream → reader → aggregator → summary.

use std::io::Cursor;

use ps_core::AnalysisConfig;
use ps_events::EventReader;
use ps_stats::aggregator::aggregate;
use ps_stats::FileSummary;

fn run(text: &str, batch_size: usize) -> (ps_stats::Aggregate, FileSummary) {
    let reader = EventReader::new(Cursor::new(text.to_owned()));
    let agg = aggregate(reader, batch_size);
    let cfg = AnalysisConfig { batch_size, ..Default::default() };
    let summary = FileSummary::from_aggregate(&agg, &cfg);
    (agg, summary)
}

#[test]
fn spec_scenario_batch_size_one() {
    // Events [{211, 211}, {-211}] at batch size 1.
    let text = "\
1 2
0.1 0.2 0.3 211
0.4 0.5 0.6 211
2 1
0.7 0.8 0.9 -211
";
    let (agg, summary) = run(text, 1);
    assert_eq!(agg.series.positive, vec![2, 0]);
    assert_eq!(agg.series.negative, vec![0, 1]);
    assert_eq!(summary.positive_total, 2);
    assert_eq!(summary.negative_total, 1);
    assert_eq!(summary.difference, 1);
}

#[test]
fn totals_match_series_across_the_pipeline() {
    let mut text = String::new();
    for i in 0..37 {
        text.push_str(&format!("{i} 2\n1 2 3 211\n1 2 3 {}\n", if i % 2 == 0 { -211 } else { 22 }));
    }
    let (agg, summary) = run(&text, 10);
    assert_eq!(agg.series.positive.iter().sum::<u64>(), summary.positive_total);
    assert_eq!(agg.series.negative.iter().sum::<u64>(), summary.negative_total);
    assert_eq!(summary.events, 37);
    assert_eq!(summary.positive_total, 37);
    assert_eq!(summary.negative_total, 19);
}

#[test]
fn empty_file_is_not_an_error() {
    let (agg, summary) = run("", 1000);
    assert!(agg.series.is_empty());
    assert_eq!(summary.events, 0);
    assert_eq!(summary.average_positive, 0.0);
    assert!(summary.significance.is_infinite());
}

#[test]
fn malformed_lines_only_undercount() {
    let text = "\
1 2 3
1 3
0.1 0.2 0.3 211
bad line
0.1 0.2
2 1
0.1 0.2 0.3 -211
";
    let (_, summary) = run(text, 1000);
    assert_eq!(summary.events, 2);
    assert_eq!(summary.positive_total, 1);
    assert_eq!(summary.negative_total, 1);
}
