use super::*;

fn summary() -> BadgeSummary {
    BadgeSummary {
        input: PathBuf::from("coverage/lcov.info"),
        format: CoverageFormat::Lcov,
        output: PathBuf::from("coverage_badge.svg"),
        display: "85.5".to_string(),
        tier: ColorTier::Green,
        totals: Some(LcovTotals {
            lines_hit: 171,
            lines_found: 200,
        }),
        degraded: false,
    }
}

#[test]
fn plain_summary_line() {
    let text = SummaryFormatter::new(false, 0).format(&summary());
    assert_eq!(text, "Coverage badge written: coverage_badge.svg (85.5%)\n");
}

#[test]
fn verbose_includes_input_and_tier() {
    let text = SummaryFormatter::new(false, 1).format(&summary());
    assert!(text.contains("Input: coverage/lcov.info (lcov)"));
    assert!(text.contains("Tier: green"));
}

#[test]
fn verbose_includes_line_counters() {
    let text = SummaryFormatter::new(false, 1).format(&summary());
    assert!(text.contains("Lines: 171/200\n"));
}

#[test]
fn line_counters_hidden_without_verbose() {
    let text = SummaryFormatter::new(false, 0).format(&summary());
    assert!(!text.contains("Lines:"));
}

#[test]
fn verbose_without_counters_omits_lines() {
    let mut s = summary();
    s.format = CoverageFormat::Json;
    s.totals = None;
    let text = SummaryFormatter::new(false, 1).format(&s);
    assert!(!text.contains("Lines:"));
    assert!(text.contains("Tier: green"));
}

#[test]
fn degraded_run_is_marked() {
    let mut s = summary();
    s.degraded = true;
    let text = SummaryFormatter::new(false, 0).format(&s);
    assert!(text.contains("[coverage unreadable]"));
}

#[test]
fn colored_percentage() {
    let text = SummaryFormatter::new(true, 0).format(&summary());
    assert!(text.contains("\x1b[32m85.5%\x1b[0m"));
}
