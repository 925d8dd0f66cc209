//! ReDoS (Regular Expression Denial of Service) tests.
//!
//! The built-in rules run against attacker-controlled file content, so
//! pathological inputs must still scan in bounded time.

use drop_audit::{Config, ContentScanner};
use std::time::{Duration, Instant};

/// Generous for CI; a backtracking engine would take orders of magnitude longer.
const MAX_ACCEPTABLE_TIME: Duration = Duration::from_millis(500);

fn builtin_scanner() -> ContentScanner {
    ContentScanner::new(Config::default().validate().unwrap().pattern_rules)
}

fn assert_fast(input: &str) {
    let scanner = builtin_scanner();
    let start = Instant::now();
    let _findings = scanner.scan(input);
    let elapsed = start.elapsed();

    assert!(
        elapsed < MAX_ACCEPTABLE_TIME,
        "ReDoS detected: took {:?}, expected < {:?}",
        elapsed,
        MAX_ACCEPTABLE_TIME
    );
}

#[test]
fn test_redos_unterminated_block_comment() {
    // Lazy `[\s\S]*?` with no closing `*/`
    let input = format!("/*{}", " *".repeat(50_000));
    assert_fast(&input);
}

#[test]
fn test_redos_email_local_part_without_domain() {
    let input = format!("{}@", "a.".repeat(50_000));
    assert_fast(&input);
}

#[test]
fn test_redos_email_domain_without_tld() {
    let input = format!("user@{}", "a-".repeat(50_000));
    assert_fast(&input);
}

#[test]
fn test_redos_many_sql_keywords_without_whitespace() {
    let input = "SELECTFROMWHERE".repeat(20_000);
    assert_fast(&input);
}

#[test]
fn test_redos_long_single_line() {
    let input = "x".repeat(1_000_000);
    assert_fast(&input);
}
