use std::{fs, io::BufWriter, path::PathBuf};

use embedded_io::ErrorType;
use log::{debug, info};

pub struct StdFilesystem {
    base_path: PathBuf,
}

impl StdFilesystem {
    pub fn new_with_base_path(base_path: PathBuf) -> Self {
        debug!("Using StdFilesystem with base path: {:?}", base_path);
        StdFilesystem { base_path }
    }
}

impl ErrorType for StdFilesystem {
    type Error = embedded_io::ErrorKind;
}

type Result<T> = core::result::Result<T, embedded_io::ErrorKind>;

fn kind_of(err: std::io::Error) -> embedded_io::ErrorKind {
    embedded_io::Error::kind(&err)
}

impl rgb565_core::fs::Filesystem for StdFilesystem {
    type File = StdFileWriter;

    fn create_file(&self, path: &str) -> Result<StdFileWriter> {
        let path = self.base_path.join(path);
        info!("Writing {:?}", path);
        let file = fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(kind_of)?;
        Ok(StdFileWriter::new(file))
    }

    fn exists(&self, path: &str) -> Result<bool> {
        self.base_path.join(path).try_exists().map_err(kind_of)
    }
}

/// Buffered file handle. The handle is closed when dropped; callers flush
/// explicitly to observe write errors.
pub struct StdFileWriter {
    file: BufWriter<fs::File>,
}

impl StdFileWriter {
    pub fn new(file: fs::File) -> Self {
        StdFileWriter {
            file: BufWriter::new(file),
        }
    }
}

impl ErrorType for StdFileWriter {
    type Error = std::io::Error;
}

impl embedded_io::Write for StdFileWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        use std::io::Write;
        self.file.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        use std::io::Write;
        self.file.flush()
    }
}
