//! Flat `KEY=VALUE` env-file loader.
//!
//! The format is deliberately naive: one pair per line, `#` comments,
//! split on the first `=`. No quoting, no escapes, no multi-line values.
//! The loader never touches the process environment; callers pass the
//! returned pairs explicitly to the subprocess launch.

use std::path::Path;

/// Parse an env file into `(key, value)` pairs in file order.
///
/// Empty and whitespace-only lines are skipped, as are lines whose first
/// non-whitespace character is `#`. Values are kept verbatim apart from
/// trailing-newline stripping. A remaining line with no `=` is an error.
pub fn load(path: &Path) -> crate::Result<Vec<(String, String)>> {
    let content = std::fs::read_to_string(path).map_err(|e| crate::Error::EnvFileOpen {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

fn parse(content: &str, path: &Path) -> crate::Result<Vec<(String, String)>> {
    let mut pairs = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        // lines() strips \n; CRLF files still carry the \r
        let line = line.strip_suffix('\r').unwrap_or(line);

        let stripped = line.trim_start();
        if stripped.is_empty() || stripped.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(crate::Error::EnvFileMalformed {
                path: path.to_path_buf(),
                line: idx + 1,
                content: line.to_owned(),
            });
        };

        pairs.push((key.to_owned(), value.to_owned()));
    }

    Ok(pairs)
}
