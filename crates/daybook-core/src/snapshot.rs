use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use daybook_shared::Snapshot;
use tracing::info;

/// Reads a JSON snapshot from `path`, or
/// from stdin when the path is `-`.
#[tracing::instrument]
pub fn load_snapshot(
  path: &Path
) -> anyhow::Result<Snapshot> {
  let raw = if path == Path::new("-") {
    let mut buf = String::new();
    std::io::stdin()
      .read_to_string(&mut buf)
      .context(
        "failed to read snapshot from \
         stdin"
      )?;
    buf
  } else {
    fs::read_to_string(path)
      .with_context(|| {
        format!(
          "failed to read {}",
          path.display()
        )
      })?
  };

  let snapshot: Snapshot =
    serde_json::from_str(&raw)
      .with_context(|| {
        format!(
          "invalid snapshot JSON in {}",
          path.display()
        )
      })?;

  info!(
    days = snapshot.days.len(),
    holidays = snapshot.holidays.len(),
    "loaded snapshot"
  );
  Ok(snapshot)
}
