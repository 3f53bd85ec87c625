//! User-supplied paths (`--db`, `--file`, `--photo`) may start with `~/`.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

/// Same as [`expand_tilde`], as an owned string for config fields and SQLite.
pub fn expand_tilde_str(path: &str) -> String {
    expand_tilde(path).to_string_lossy().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_a_leading_tilde_slash_is_expanded() {
        assert_eq!(expand_tilde_str("/tmp/a.csv"), "/tmp/a.csv");
        assert_eq!(expand_tilde_str("~user/a.csv"), "~user/a.csv");
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/a.csv"), home.join("a.csv"));
        }
    }
}
