// Test fixtures: image files on disk

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory holding fixture files, removed on drop
pub struct ImageFixtures {
    dir: TempDir,
}

impl ImageFixtures {
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a solid-colour PNG
    pub fn png(&self, name: &str, width: u32, height: u32, color: [u8; 4]) -> PathBuf {
        let path = self.dir.path().join(name);
        image::RgbaImage::from_pixel(width, height, image::Rgba(color))
            .save(&path)
            .expect("Failed to write PNG fixture");
        path
    }

    /// Write arbitrary bytes
    pub fn raw(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("Failed to write fixture");
        path
    }
}
