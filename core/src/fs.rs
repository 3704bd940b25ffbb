use embedded_io::ErrorType;

/// Host storage the converter writes its output through.
pub trait Filesystem: ErrorType {
    type File: embedded_io::Write;

    /// Creates `path`, truncating any existing file.
    fn create_file(&self, path: &str) -> Result<Self::File, Self::Error>;
    fn exists(&self, path: &str) -> Result<bool, Self::Error>;
}
