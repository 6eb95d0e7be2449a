//! Set the segment title of a container.

use std::path::Path;

use mkvretag_core::Result;

use crate::editor::TagEditor;

/// Set `title` on `file`, logging the result against `display_name`.
pub async fn set_title(
    editor: &dyn TagEditor,
    file: &Path,
    title: &str,
    display_name: &str,
) -> Result<()> {
    match editor.set_title(file, title).await {
        Ok(()) => {
            tracing::info!("Updated title for: {display_name}");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Error editing title of {display_name}: {e}");
            Err(e)
        }
    }
}
