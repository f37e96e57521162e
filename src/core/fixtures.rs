//! Test/recording helpers for persisting HTTP fixtures.
//! Compiled only when the `test-mode` feature is enabled.

use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub(crate) fn get_fixture_dir() -> PathBuf {
    env::var("FIN_FIXDIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

/// Symbols like `^GSPC` or `BRK-B` are kept, anything path-hostile is replaced.
fn sanitize(key: &str) -> String {
    key.chars()
        .map(|c| if c.is_ascii_alphanumeric() || "-_^.".contains(c) { c } else { '_' })
        .collect()
}

pub(crate) fn record_fixture(
    endpoint: &str,
    key: &str,
    ext: &str,
    body: &str,
) -> Result<PathBuf, std::io::Error> {
    record_fixture_in(&get_fixture_dir(), endpoint, key, ext, body)
}

/// Writes `body` to `<dir>/<endpoint>_<key>.<ext>`, creating `dir` if needed.
pub(crate) fn record_fixture_in(
    dir: &Path,
    endpoint: &str,
    key: &str,
    ext: &str,
    body: &str,
) -> Result<PathBuf, std::io::Error> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    let filename = format!("{}_{}.{}", endpoint, sanitize(key), ext);
    let path = dir.join(filename);

    let mut file = fs::File::create(&path)?;
    file.write_all(body.as_bytes())?;

    tracing::debug!(path = %path.display(), "FIN_RECORD: wrote fixture");
    Ok(path)
}
