//! A gap buffer bound to the file it was loaded from.
//!
//! File handles never outlive a single load or save.

use super::error::{ModelError, Result};
use super::gap_buffer::GapBuffer;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub struct Document {
    path: PathBuf,
    text: GapBuffer,
    initial_capacity: usize,
}

impl Document {
    /// Load `path` into a new buffer. A file that does not exist yet yields an
    /// empty document; it is created by the first save.
    pub fn load<P: AsRef<Path>>(path: P, initial_capacity: usize) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let text = read_into_buffer(&path, initial_capacity)?;
        Ok(Self {
            path,
            text,
            initial_capacity,
        })
    }

    /// Discard every in-memory edit and read the file again.
    pub fn reload(&mut self) -> Result<()> {
        self.text = read_into_buffer(&self.path, self.initial_capacity)?;
        tracing::info!("Reloaded {} ({} bytes)", self.path.display(), self.text.len());
        Ok(())
    }

    /// Write the logical bytes verbatim to the document's path.
    pub fn save(&self) -> Result<()> {
        let write_err = |source: io::Error| ModelError::Write {
            path: self.path.clone(),
            source,
        };
        let mut file = std::fs::File::create(&self.path).map_err(write_err)?;
        let content = self.text.to_vec();
        file.write_all(&content).map_err(write_err)?;
        tracing::info!("Saved {} ({} bytes)", self.path.display(), content.len());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &GapBuffer {
        &self.text
    }

    pub fn text_mut(&mut self) -> &mut GapBuffer {
        &mut self.text
    }
}

fn read_into_buffer(path: &Path, initial_capacity: usize) -> Result<GapBuffer> {
    match std::fs::read(path) {
        Ok(content) => {
            tracing::info!("Loaded {} ({} bytes)", path.display(), content.len());
            GapBuffer::from_bytes(&content, initial_capacity)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::info!("{} does not exist, starting empty", path.display());
            GapBuffer::with_capacity(initial_capacity)
        }
        Err(source) => Err(ModelError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}
