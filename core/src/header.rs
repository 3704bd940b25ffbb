//! C header serialization for quantized sprites.
//!
//! Layout of the emitted file:
//! ```text
//! // Auto-generated from <source>
//! // <W>x<H> RGB565
//! #pragma once
//! #include <stdint.h>
//!
//! #ifndef PROGMEM
//! #define PROGMEM
//! #endif
//!
//! const uint16_t <name>[<W*H>] PROGMEM = {
//!     0xF800, 0x0000, ... (12 values per line)
//! };
//!
//! const int <name>_W = <W>;
//! const int <name>_H = <H>;
//! ```
//! Downstream firmware builds include these files directly, so the output
//! is kept byte-for-byte stable.

use embedded_io::{Write, WriteFmtError};
use log::{debug, trace};

use crate::sprite::Sprite;

pub const VALUES_PER_LINE: usize = 12;
pub const ENCODING: &str = "RGB565";
pub const STORAGE_QUALIFIER: &str = "PROGMEM";

const INDENT: &str = "    ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderError {
    IoError(embedded_io::ErrorKind),
    FmtError,
}

impl HeaderError {
    pub fn from_io_error(error: impl embedded_io::Error) -> Self {
        HeaderError::IoError(error.kind())
    }
}

impl<E: embedded_io::Error> From<WriteFmtError<E>> for HeaderError {
    fn from(err: WriteFmtError<E>) -> Self {
        match err {
            WriteFmtError::Other(e) => HeaderError::from_io_error(e),
            WriteFmtError::FmtError => HeaderError::FmtError,
        }
    }
}

impl core::fmt::Display for HeaderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HeaderError::IoError(kind) => write!(f, "write failed: {kind:?}"),
            HeaderError::FmtError => write!(f, "formatting failed"),
        }
    }
}

type Result<T> = core::result::Result<T, HeaderError>;

/// Writes `sprite` as a C header declaring `name`, `name_W` and `name_H`.
///
/// `name` is emitted verbatim. See [`is_c_identifier`] for a check callers
/// can use to warn about names that will not compile.
pub fn write_header(
    out: &mut impl Write,
    source: &str,
    name: &str,
    sprite: &Sprite,
) -> Result<()> {
    let (width, height) = (sprite.width(), sprite.height());
    debug!("Writing header for {name} ({width}x{height}, {} values)", sprite.len());

    writeln!(out, "// Auto-generated from {source}")?;
    writeln!(out, "// {width}x{height} {ENCODING}")?;
    writeln!(out, "#pragma once")?;
    writeln!(out, "#include <stdint.h>\n")?;
    writeln!(
        out,
        "#ifndef {q}\n#define {q}\n#endif\n",
        q = STORAGE_QUALIFIER
    )?;
    writeln!(
        out,
        "const uint16_t {name}[{}] {STORAGE_QUALIFIER} = {{",
        sprite.len()
    )?;
    write_values(out, sprite.pixels())?;
    write!(out, "\n}};\n\n")?;
    writeln!(out, "const int {name}_W = {width};")?;
    writeln!(out, "const int {name}_H = {height};")?;

    out.flush().map_err(HeaderError::from_io_error)
}

fn write_values(out: &mut impl Write, values: &[u16]) -> Result<()> {
    let last = values.len().saturating_sub(1);
    for (i, value) in values.iter().enumerate() {
        if i % VALUES_PER_LINE == 0 {
            write!(out, "{INDENT}")?;
        }
        write!(out, "0x{value:04X}")?;
        if i < last {
            write!(out, ", ")?;
        }
        if (i + 1) % VALUES_PER_LINE == 0 {
            trace!("Wrote line ending at value {i}");
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Whether `name` is usable as a C identifier. Keywords are not checked.
pub fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use alloc::string::String;
    use alloc::vec::Vec;
    use std::format;

    fn render(name: &str, sprite: &Sprite) -> String {
        let mut out = Vec::new();
        write_header(&mut out, "sprites/test.png", name, sprite).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn opaque(width: u32, height: u32, rgba: [u8; 4]) -> Sprite {
        let raw = rgba.repeat(width as usize * height as usize);
        Sprite::from_rgba8(width, height, &raw).unwrap()
    }

    fn body(text: &str) -> Vec<&str> {
        let start = text.find("= {\n").unwrap() + 4;
        let end = text.find("\n};").unwrap();
        text[start..end].split('\n').filter(|l| !l.is_empty()).collect()
    }

    #[test]
    fn two_by_one_exact() {
        let sprite = Sprite::from_rgba8(2, 1, &[255, 0, 0, 255, 0, 0, 0, 0]).unwrap();
        let expected = "// Auto-generated from sprites/test.png\n\
                        // 2x1 RGB565\n\
                        #pragma once\n\
                        #include <stdint.h>\n\
                        \n\
                        #ifndef PROGMEM\n\
                        #define PROGMEM\n\
                        #endif\n\
                        \n\
                        const uint16_t pet[2] PROGMEM = {\n    0xF800, 0x0000\n};\n\
                        \n\
                        const int pet_W = 2;\n\
                        const int pet_H = 1;\n";
        assert_eq!(render("pet", &sprite), expected);
    }

    #[test]
    fn single_pixel() {
        let text = render("dot", &opaque(1, 1, [0x12, 0x34, 0x56, 0xFF]));
        assert!(text.contains("const uint16_t dot[1] PROGMEM = {\n    0x11AA\n};\n"));
        assert!(text.ends_with("const int dot_W = 1;\nconst int dot_H = 1;\n"));
    }

    #[test]
    fn twelve_values_per_line() {
        let text = render("strip", &opaque(5, 5, [255, 255, 255, 255]));
        let lines = body(&text);
        assert_eq!(lines.len(), 3);
        for line in &lines[..2] {
            assert!(line.starts_with(INDENT));
            assert_eq!(line.matches("0x").count(), VALUES_PER_LINE);
            assert!(line.ends_with(", "));
        }
        assert_eq!(lines[2], "    0xFFFF");
        assert_eq!(text.matches("0xFFFF").count(), 25);
    }

    #[test]
    fn full_last_line_has_no_trailing_comma() {
        let text = render("row", &opaque(12, 2, [0, 0, 0, 255]));
        let lines = body(&text);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("0x0000, "));
        assert!(lines[1].ends_with("0x0000"));
        assert!(text.contains("0x0000\n\n};\n"));
    }

    #[test]
    fn constants_follow_dimensions() {
        let text = render("bg", &opaque(7, 3, [1, 2, 3, 255]));
        assert!(text.contains("// 7x3 RGB565\n"));
        assert!(text.contains("const uint16_t bg[21] PROGMEM = {"));
        assert!(text.contains("const int bg_W = 7;\n"));
        assert!(text.contains("const int bg_H = 3;\n"));
    }

    #[test]
    fn transparent_image_is_all_zero() {
        let text = render("ghost", &opaque(4, 4, [200, 10, 90, 0]));
        let values: Vec<&str> = body(&text)
            .iter()
            .flat_map(|l| l.split(','))
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .collect();
        assert_eq!(values.len(), 16);
        assert!(values.iter().all(|v| *v == "0x0000"));
    }

    #[test]
    fn output_is_deterministic() {
        let sprite = opaque(13, 2, [90, 180, 20, 255]);
        assert_eq!(render("a", &sprite), render("a", &sprite));
    }

    #[test]
    fn name_passed_through() {
        let text = render("9 not valid", &opaque(1, 1, [0, 0, 0, 0]));
        assert!(text.contains(&format!("const int {}_W = 1;", "9 not valid")));
    }

    struct FailingWriter {
        budget: usize,
    }

    impl embedded_io::ErrorType for FailingWriter {
        type Error = embedded_io::ErrorKind;
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> core::result::Result<usize, Self::Error> {
            if self.budget == 0 {
                return Err(embedded_io::ErrorKind::Other);
            }
            let n = buf.len().min(self.budget);
            self.budget -= n;
            Ok(n)
        }

        fn flush(&mut self) -> core::result::Result<(), Self::Error> {
            Ok(())
        }
    }

    #[test]
    fn propagates_write_errors() {
        let mut out = FailingWriter { budget: 64 };
        let sprite = opaque(8, 8, [1, 1, 1, 255]);
        assert_eq!(
            write_header(&mut out, "x.png", "x", &sprite),
            Err(HeaderError::IoError(embedded_io::ErrorKind::Other))
        );
    }

    #[test]
    fn identifiers() {
        assert!(is_c_identifier("egg_hatch_1"));
        assert!(is_c_identifier("_bg"));
        assert!(!is_c_identifier(""));
        assert!(!is_c_identifier("1sprite"));
        assert!(!is_c_identifier("my-sprite"));
        assert!(!is_c_identifier("sprite name"));
    }
}
