use std::{fs, path::Path};

use ics_performance::frame::FrameMeta;
use tracing::info;

use crate::{eligible_set::create_parent_dir, errors::StoreError};

/// Writes the frames an evaluation used, in evaluation order, as pretty-printed JSON.
pub fn write_frames_meta(path: impl AsRef<Path>, frames: &[FrameMeta]) -> Result<(), StoreError> {
    let path = path.as_ref();
    create_parent_dir(path)?;

    let contents = serde_json::to_string_pretty(frames).map_err(StoreError::json(path))?;
    fs::write(path, contents).map_err(StoreError::io(path))?;
    info!("Wrote {} frame summaries to {}", frames.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use ics_performance::version::ReportVersion;

    use super::*;

    #[test]
    fn test_write_frames_meta() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("frames.json");
        let frames = vec![FrameMeta {
            source: "QmCid".to_string(),
            version: ReportVersion::V2,
            start_epoch: 1,
            end_epoch: 2,
        }];

        write_frames_meta(&path, &frames).expect("write frames");

        let written: Vec<FrameMeta> =
            serde_json::from_str(&fs::read_to_string(&path).expect("read output"))
                .expect("valid json");
        assert_eq!(written, frames);
    }
}
