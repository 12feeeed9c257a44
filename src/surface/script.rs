//! JavaScript used by web view backends to dispatch synthetic clicks.

use crate::error::SurfaceError;

/// Build the script that clicks whatever element sits at a content-space point.
///
/// `elementFromPoint` returns null outside the document, so the click is
/// only dispatched when an element was found.
pub fn click_script(content_x: f32, content_y: f32) -> Result<String, SurfaceError> {
    if !content_x.is_finite() || !content_y.is_finite() {
        return Err(SurfaceError::Script(format!(
            "non-finite click coordinate ({}, {})",
            content_x, content_y
        )));
    }

    Ok(format!(
        "(function() {{ var el = document.elementFromPoint({}, {}); if (el) {{ el.click(); }} }})();",
        content_x, content_y
    ))
}
