use std::fmt;

use embedded_io::Error as _;
use image::{ImageFormat, ImageReader};
use log::{debug, info, warn};
use rgb565_core::{
    HeaderError, Sprite, SpriteError,
    fs::Filesystem,
    header::{self, is_c_identifier},
};

use crate::std_fs::StdFilesystem;

#[derive(Debug)]
pub enum DecodeError {
    Image(image::ImageError),
    NoDecoder(Option<ImageFormat>),
    Sprite(SpriteError),
}

impl From<image::ImageError> for DecodeError {
    fn from(err: image::ImageError) -> Self {
        DecodeError::Image(err)
    }
}

impl From<SpriteError> for DecodeError {
    fn from(err: SpriteError) -> Self {
        DecodeError::Sprite(err)
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Image(err) => write!(f, "{err}"),
            DecodeError::NoDecoder(Some(format)) => {
                write!(f, "no decoder for {format:?} images in this build")
            }
            DecodeError::NoDecoder(None) => write!(f, "unrecognized image format"),
            DecodeError::Sprite(err) => write!(f, "{err}"),
        }
    }
}

#[derive(Debug)]
pub enum ConvertError {
    Decode { path: String, error: DecodeError },
    Write { path: String, kind: embedded_io::ErrorKind },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Decode { path, error } => write!(f, "failed to decode {path}: {error}"),
            ConvertError::Write { path, kind } => write!(f, "failed to write {path}: {kind:?}"),
        }
    }
}

/// Outcome reported to the operator after a successful conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub width: u32,
    pub height: u32,
    pub data_size: usize,
}

impl Summary {
    /// Line printed to stdout once `input` has been written to `output`.
    pub fn status_line(&self, input: &str, output: &str) -> String {
        format!("Converted {input} -> {output} {self}")
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}x{}, {} bytes)", self.width, self.height, self.data_size)
    }
}

/// Loads `path` and quantizes it to RGB565.
pub fn decode(path: &str) -> Result<Sprite, DecodeError> {
    let reader = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(image::ImageError::IoError)?;
    match reader.format() {
        Some(format) if format.reading_enabled() => debug!("Decoding {path} as {format:?}"),
        format => return Err(DecodeError::NoDecoder(format)),
    }

    let image = reader.decode()?;
    debug!(
        "Decoded {path}: {}x{} {:?}",
        image.width(),
        image.height(),
        image.color()
    );
    let rgba = image.into_rgba8();
    Ok(Sprite::from_rgba8(rgba.width(), rgba.height(), rgba.as_raw())?)
}

pub fn convert(input: &str, name: &str, output: &str) -> Result<Summary, ConvertError> {
    let fs = StdFilesystem::new_with_base_path(".".into());
    convert_with(&fs, input, name, output)
}

/// Decodes `input` and writes the header through `fs`. The output is only
/// opened once decoding succeeded.
pub fn convert_with(
    fs: &impl Filesystem,
    input: &str,
    name: &str,
    output: &str,
) -> Result<Summary, ConvertError> {
    if !is_c_identifier(name) {
        warn!("{name:?} is not a valid C identifier, the generated header will not compile");
    }

    let sprite = decode(input).map_err(|error| ConvertError::Decode {
        path: input.to_string(),
        error,
    })?;

    let write_error = |kind| ConvertError::Write {
        path: output.to_string(),
        kind,
    };
    if let Ok(true) = fs.exists(output) {
        info!("Overwriting {output}");
    }
    let mut file = fs.create_file(output).map_err(|e| write_error(e.kind()))?;
    header::write_header(&mut file, input, name, &sprite).map_err(|e| match e {
        HeaderError::IoError(kind) => write_error(kind),
        HeaderError::FmtError => write_error(embedded_io::ErrorKind::Other),
    })?;

    Ok(Summary {
        width: sprite.width(),
        height: sprite.height(),
        data_size: sprite.data_size(),
    })
}
