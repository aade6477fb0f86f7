use std::env;
use std::fs;
use std::path::{Path, PathBuf};

fn fixture_dir() -> PathBuf {
    env::var("YF_FIXDIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

/// Writes `{endpoint}_{symbol}.{ext}` under the fixture directory.
///
/// Characters that are awkward in file names (`^`, `=`, `/`) are replaced with `_`.
pub(crate) fn record_fixture(
    endpoint: &str,
    symbol: &str,
    ext: &str,
    body: &[u8],
) -> Result<(), std::io::Error> {
    let dir = fixture_dir();
    fs::create_dir_all(&dir)?;

    let safe: String = symbol
        .chars()
        .map(|c| if matches!(c, '^' | '=' | '/') { '_' } else { c })
        .collect();
    let path = dir.join(format!("{endpoint}_{safe}.{ext}"));
    fs::write(&path, body)?;

    if env::var("YF_DEBUG").ok().as_deref() == Some("1") {
        eprintln!("YF_RECORD: wrote fixture to {}", path.display());
    }
    Ok(())
}
