use std::io::Cursor;
use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{RetrospectError, RetrospectResult};
use crate::render::poster::PosterImage;

impl PosterImage {
    /// Encode as PNG in memory, ready to hand to a download.
    pub fn encode_png(&self) -> RetrospectResult<Vec<u8>> {
        let mut buf = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .map_err(|e| RetrospectError::render(format!("encode png: {e}")))?;
        Ok(buf)
    }

    /// Write a PNG to `path`, creating parent directories as needed.
    pub fn save_png(&self, path: impl AsRef<Path>) -> RetrospectResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        self.image
            .save_with_format(path, image::ImageFormat::Png)
            .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}
