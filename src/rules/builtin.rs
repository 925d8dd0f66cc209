//! Default extension set and pattern rules.

use crate::config::PatternRuleConfig;

pub const WATCHED_EXTENSIONS: &[&str] = &[".py", ".js", ".class"];

/// Python (`#`) and C/Java style (`//`, `/* */`) comments.
pub const COMMENTS_PATTERN: &str = r"(#.*)|(//.*)|(/\*[\s\S]*?\*/)";

pub const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";

/// SQL keywords followed by whitespace; a rough signal for embedded queries.
pub const SQL_PATTERN: &str =
    r"\b(SELECT|INSERT|UPDATE|DELETE|DROP|ALTER|CREATE|UNION|JOIN|WHERE|FROM)\s+";

pub fn rule_configs() -> Vec<PatternRuleConfig> {
    vec![
        PatternRuleConfig::new("Comments", COMMENTS_PATTERN),
        PatternRuleConfig::new("Email", EMAIL_PATTERN),
        PatternRuleConfig::new("SQL", SQL_PATTERN),
    ]
}
