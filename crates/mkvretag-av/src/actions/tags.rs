//! Embed studio and part tags through a temporary sidecar file.

use std::path::Path;

use mkvretag_core::Result;

use crate::editor::TagEditor;
use crate::sidecar::SidecarFile;
use crate::tags::TagDocument;

/// Write `tags` to a sidecar in `directory`, apply it to `file` as global
/// tags, then delete the sidecar.
///
/// `index` names the sidecar (`tags<index>-*.xml`). A failed deletion is
/// logged but does not fail the step; the sidecar never outlives this call.
pub async fn embed_tags(
    editor: &dyn TagEditor,
    directory: &Path,
    file: &Path,
    tags: &TagDocument,
    index: i64,
    display_name: &str,
) -> Result<()> {
    let sidecar = match SidecarFile::create(directory, index, tags.render()).await {
        Ok(sidecar) => sidecar,
        Err(e) => {
            tracing::error!("Error writing tag file for {display_name}: {e}");
            return Err(e);
        }
    };

    let applied = editor.apply_global_tags(file, sidecar.path()).await;

    if let Err(e) = sidecar.remove().await {
        tracing::error!("Error deleting tag file for {display_name}: {e}");
    }

    match applied {
        Ok(()) => {
            tracing::info!("Updated artist for: {display_name}");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Error editing tags of {display_name}: {e}");
            Err(e)
        }
    }
}
