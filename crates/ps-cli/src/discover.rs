use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Find event files in `dir` whose names match `pattern` (at most one `*`
/// wildcard, e.g. `output-Set*.txt`). Results are sorted by name so report
/// ordering is stable across platforms.
pub(crate) fn find_event_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    if pattern.matches('*').count() > 1 {
        bail!("pattern may contain at most one `*`: {pattern}");
    }
    let (prefix, suffix) = match pattern.split_once('*') {
        Some((p, s)) => (p, s),
        None => (pattern, ""),
    };

    let rd = fs::read_dir(dir).with_context(|| format!("read_dir {}", dir.display()))?;
    let mut out = Vec::new();
    for entry in rd {
        let entry = entry.with_context(|| format!("iter dir {}", dir.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        let matches = if pattern.contains('*') {
            name.len() >= prefix.len() + suffix.len()
                && name.starts_with(prefix)
                && name.ends_with(suffix)
        } else {
            name == pattern
        };
        if matches {
            out.push(path);
        }
    }
    out.sort();
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn tmp_dir() -> PathBuf {
        let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
        let dir = std::env::temp_dir()
            .join(format!("pionstat_discover_{}_{}", std::process::id(), nanos));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn matches_prefix_star_suffix() {
        let dir = tmp_dir();
        for name in ["output-Set0.txt", "output-Set12.txt", "output-Set1.csv", "notes.txt"] {
            fs::write(dir.join(name), "").unwrap();
        }
        let found = find_event_files(&dir, "output-Set*.txt").unwrap();
        let names: Vec<_> =
            found.iter().map(|p| p.file_name().unwrap().to_str().unwrap().to_owned()).collect();
        assert_eq!(names, vec!["output-Set0.txt", "output-Set12.txt"]);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn exact_name_without_wildcard() {
        let dir = tmp_dir();
        fs::write(dir.join("run.txt"), "").unwrap();
        fs::write(dir.join("run.txt.bak"), "").unwrap();
        let found = find_event_files(&dir, "run.txt").unwrap();
        assert_eq!(found.len(), 1);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_dir_is_an_error() {
        assert!(find_event_files(Path::new("/nonexistent/pionstat"), "*.txt").is_err());
    }

    #[test]
    fn rejects_multiple_wildcards() {
        let dir = tmp_dir();
        assert!(find_event_files(&dir, "a*b*.txt").is_err());
        let _ = fs::remove_dir_all(&dir);
    }
}
