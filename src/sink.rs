//! # Output Sinks
//!
//! Generators never touch the filesystem directly; they hand each finished
//! block of text to a [`RouteSink`] under a resource name such as
//! `routes/web.php`.
//!
//! - [`FileSink`] appends to files below a project root
//! - [`WriterSink`] prints to any writer (used for `--dry-run`)
//! - [`MemorySink`] keeps everything in memory

use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Destination for generated text.
pub trait RouteSink {
    /// Append `text` to the named resource, creating it if needed.
    fn append(&mut self, resource: &str, text: &str) -> io::Result<()>;
}

/// Appends to files relative to a project root.
#[derive(Debug, Clone)]
pub struct FileSink {
    root: PathBuf,
}

impl FileSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Filesystem path a resource name maps to.
    pub fn path_for(&self, resource: &str) -> PathBuf {
        self.root.join(resource)
    }
}

impl RouteSink for FileSink {
    fn append(&mut self, resource: &str, text: &str) -> io::Result<()> {
        let path = self.path_for(resource);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        file.write_all(text.as_bytes())?;
        file.flush()
    }
}

/// Writes each resource as a `// <resource>` header followed by its text.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RouteSink for WriterSink<W> {
    fn append(&mut self, resource: &str, text: &str) -> io::Result<()> {
        writeln!(self.writer, "// {resource}")?;
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()
    }
}

/// Collects appended text per resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySink {
    resources: BTreeMap<String, String>,
    appends: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, resource: &str) -> Option<&str> {
        self.resources.get(resource).map(String::as_str)
    }

    pub fn resources(&self) -> &BTreeMap<String, String> {
        &self.resources
    }

    /// Number of `append` calls received.
    pub fn appends(&self) -> usize {
        self.appends
    }
}

impl RouteSink for MemorySink {
    fn append(&mut self, resource: &str, text: &str) -> io::Result<()> {
        self.resources
            .entry(resource.to_string())
            .or_default()
            .push_str(text);
        self.appends += 1;
        Ok(())
    }
}
