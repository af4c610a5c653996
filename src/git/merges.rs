//! Merge-commit subject parsing.

use regex_lite::Regex;

/// Extract merged branch names from merge-commit subject lines.
///
/// A subject that merges a branch carries a `branch '<name>'` fragment, e.g.
/// `Merge pull request #4 from origin, branch 'feature/login'` or the plain
/// `Merge branch 'feature/login'`. One name per matching line, input order
/// preserved, duplicates kept; lines without the fragment contribute nothing.
pub fn extract_merged_branches(log: &str) -> Vec<String> {
    // First single-quoted name after the `branch '` token.
    let re = Regex::new(r"branch '([^']*)'").unwrap();

    log.lines()
        .filter_map(|line| re.captures(line).map(|caps| caps[1].to_string()))
        .collect()
}
