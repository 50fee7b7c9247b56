use super::{render_lines, LineStore};
use crate::error::{Result, TodoError};
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ends_with_newline(file: &mut File) -> Result<bool> {
        let len = file.metadata().map_err(TodoError::Io)?.len();
        if len == 0 {
            return Ok(true);
        }
        file.seek(SeekFrom::End(-1)).map_err(TodoError::Io)?;
        let mut last = [0u8; 1];
        file.read_exact(&mut last).map_err(TodoError::Io)?;
        Ok(last[0] == b'\n')
    }

    /// Sibling temp file, so the final rename never crosses filesystems
    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "database".to_string());
        self.path
            .with_file_name(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }
}

impl LineStore for FileStore {
    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn create(&mut self) -> Result<()> {
        File::create(&self.path).map_err(TodoError::Io)?;
        Ok(())
    }

    fn reader(&self) -> Result<Box<dyn BufRead + '_>> {
        let file = File::open(&self.path).map_err(TodoError::Io)?;
        Ok(Box::new(BufReader::new(file)))
    }

    fn append_line(&mut self, text: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(TodoError::Io)?;

        let mut chunk = String::with_capacity(text.len() + 2);
        if !Self::ends_with_newline(&mut file)? {
            chunk.push('\n');
        }
        chunk.push_str(text);
        chunk.push('\n');

        file.write_all(chunk.as_bytes()).map_err(TodoError::Io)?;
        Ok(())
    }

    fn replace(&mut self, lines: &[Vec<u8>]) -> Result<()> {
        let tmp_file = self.temp_path();
        if let Err(e) = fs::write(&tmp_file, render_lines(lines)) {
            let _ = fs::remove_file(&tmp_file);
            return Err(TodoError::Io(e));
        }
        // rename replaces the target in one step, there is no moment without a database
        if let Err(e) = fs::rename(&tmp_file, &self.path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(TodoError::Io(e));
        }
        Ok(())
    }

    fn remove(&mut self) -> Result<()> {
        fs::remove_file(&self.path).map_err(TodoError::Io)?;
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
