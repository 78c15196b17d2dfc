//! Action logging configuration with glob pattern filtering

use serde::Deserialize;

/// Environment variable holding comma-separated include patterns
pub const LOG_INCLUDE_ENV: &str = "VIEW_DISPATCH_LOG_INCLUDE";
/// Environment variable holding comma-separated exclude patterns
pub const LOG_EXCLUDE_ENV: &str = "VIEW_DISPATCH_LOG_EXCLUDE";

/// Configuration for action logging with glob pattern filtering.
///
/// Patterns support:
/// - `*` matches any sequence of characters
/// - `?` matches any single character
/// - Literal text matches exactly
///
/// # Examples
///
/// - `FETCH_*` matches FETCH_NEXT_PAGE, FETCH_PREV_PAGE
/// - `*_PAGE` matches every page action
/// - `UNLOAD_PAGE_ID` matches only that action
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ActionLoggerConfig {
    /// If non-empty, only log actions matching these patterns
    pub include_patterns: Vec<String>,
    /// Exclude actions matching these patterns (applied after include)
    pub exclude_patterns: Vec<String>,
}

impl ActionLoggerConfig {
    /// Create a new config from comma-separated pattern strings
    ///
    /// # Example
    /// ```
    /// use view_dispatch_core::ActionLoggerConfig;
    ///
    /// let config = ActionLoggerConfig::new(Some("FETCH_*"), Some("FETCH_PREV_PAGE"));
    /// assert!(config.should_log("FETCH_NEXT_PAGE"));
    /// assert!(!config.should_log("FETCH_PREV_PAGE"));
    /// assert!(!config.should_log("UNLOAD_PAGE_ID"));
    /// ```
    pub fn new(include: Option<&str>, exclude: Option<&str>) -> Self {
        Self {
            include_patterns: include.map(split_patterns).unwrap_or_default(),
            exclude_patterns: exclude.map(split_patterns).unwrap_or_default(),
        }
    }

    /// Create a config with specific pattern vectors
    pub fn with_patterns(include: Vec<String>, exclude: Vec<String>) -> Self {
        Self {
            include_patterns: include,
            exclude_patterns: exclude,
        }
    }

    /// Read patterns from `VIEW_DISPATCH_LOG_INCLUDE` / `VIEW_DISPATCH_LOG_EXCLUDE`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup using the same variable names as [`from_env`](Self::from_env)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let include = lookup(LOG_INCLUDE_ENV);
        let exclude = lookup(LOG_EXCLUDE_ENV);
        Self::new(include.as_deref(), exclude.as_deref())
    }

    /// Check if an action name should be logged based on include/exclude patterns
    pub fn should_log(&self, action_name: &str) -> bool {
        if !self.include_patterns.is_empty()
            && !self
                .include_patterns
                .iter()
                .any(|p| glob_match(p, action_name))
        {
            return false;
        }

        !self
            .exclude_patterns
            .iter()
            .any(|p| glob_match(p, action_name))
    }
}

fn split_patterns(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}

/// Glob match over whole action names
///
/// Supports `*` (any sequence, including empty) and `?` (exactly one character).
pub fn glob_match(pattern: &str, text: &str) -> bool {
    let text: Vec<char> = text.chars().collect();

    // matched[i]: the pattern prefix seen so far matches text[..i]
    let mut matched = vec![false; text.len() + 1];
    matched[0] = true;

    for p in pattern.chars() {
        let mut next = vec![false; text.len() + 1];
        match p {
            '*' => {
                let mut reachable = false;
                for i in 0..=text.len() {
                    reachable |= matched[i];
                    next[i] = reachable;
                }
            }
            _ => {
                for i in 0..text.len() {
                    next[i + 1] = matched[i] && (p == '?' || p == text[i]);
                }
            }
        }
        if !next.iter().any(|m| *m) {
            return false;
        }
        matched = next;
    }

    matched[text.len()]
}
