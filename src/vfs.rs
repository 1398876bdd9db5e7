/// A filesystem operation staged in memory before anything touches disk.
///
/// Destinations are relative to the output directory; resolution against a
/// real root happens only at apply time.
#[derive(Debug, Clone)]
pub enum VirtualEntry {
    /// A directory to create. Creation is non-recursive and fails if the
    /// directory already exists (clean-build assumption).
    Dir { destination: std::path::PathBuf },
    /// A byte-for-byte copy from an absolute source path.
    CopyFile {
        source: std::path::PathBuf,
        destination: std::path::PathBuf,
    },
    /// A file written with inline content, created or overwritten.
    WriteFile {
        destination: std::path::PathBuf,
        content: String,
    },
}

/// An ordered collection of [`VirtualEntry`] values describing everything a
/// build will create, queued up before being committed to disk.
#[derive(Debug, Clone, Default)]
pub struct VirtualFS {
    pub entries: Vec<VirtualEntry>,
}
impl VirtualFS {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}
