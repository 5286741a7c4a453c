use crate::error::RenderError;
use color_model::Color;
use std::io::Cursor;
use tiny_skia::Pixmap;

/// Default swatch edge length in pixels
pub const DEFAULT_SWATCH_SIZE: u32 = 32;

/// Largest swatch edge length accepted
pub const MAX_SWATCH_SIZE: u32 = 1024;

/// Render a square, solid-filled swatch of `color` and encode it as PNG.
///
/// The image is 8-bit RGB without alpha: swatches are always fully opaque.
pub fn render_swatch_png(color: Color, size: u32) -> Result<Vec<u8>, RenderError> {
    if size == 0 || size > MAX_SWATCH_SIZE {
        return Err(RenderError::UnsupportedSize(size));
    }

    let mut pixmap = Pixmap::new(size, size).ok_or(RenderError::PixmapAllocation)?;
    let [r, g, b] = color.to_bytes();
    pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, 255));

    // Opaque pixels are unaffected by premultiplication, so dropping alpha is lossless
    let rgb: Vec<u8> = pixmap
        .data()
        .chunks_exact(4)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect();

    encode_png(size, &rgb)
}

/// Encode packed RGB pixel data as a PNG.
fn encode_png(size: u32, rgb: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, size, size);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Best);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(rgb)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(bytes: &[u8]) -> (png::OutputInfo, Vec<u8>) {
        let decoder = png::Decoder::new(Cursor::new(bytes));
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();
        buf.truncate(info.buffer_size());
        (info, buf)
    }

    #[test]
    fn test_swatch_is_square_rgb_png() {
        let png_bytes = render_swatch_png(Color::from_rgb(99, 197, 34), 32).unwrap();
        assert_eq!(&png_bytes[..8], b"\x89PNG\r\n\x1a\n");

        let (info, _) = decode(&png_bytes);
        assert_eq!(info.width, 32);
        assert_eq!(info.height, 32);
        assert_eq!(info.color_type, png::ColorType::Rgb);
        assert_eq!(info.bit_depth, png::BitDepth::Eight);
    }

    #[test]
    fn test_swatch_is_solid_fill() {
        let png_bytes = render_swatch_png(Color::from_rgb(39, 0, 152), 8).unwrap();
        let (_, pixels) = decode(&png_bytes);

        assert_eq!(pixels.len(), 8 * 8 * 3);
        for px in pixels.chunks_exact(3) {
            assert_eq!(px, [39, 0, 152]);
        }
    }

    #[test]
    fn test_swatch_size_limits() {
        assert!(matches!(
            render_swatch_png(Color::from_rgb(0, 0, 0), 0),
            Err(RenderError::UnsupportedSize(0))
        ));
        assert!(matches!(
            render_swatch_png(Color::from_rgb(0, 0, 0), MAX_SWATCH_SIZE + 1),
            Err(RenderError::UnsupportedSize(_))
        ));
        assert!(render_swatch_png(Color::from_rgb(0, 0, 0), 1).is_ok());
    }

    #[test]
    fn test_same_color_same_bytes() {
        let a = render_swatch_png(Color::from_rgb(1, 2, 3), DEFAULT_SWATCH_SIZE).unwrap();
        let b = render_swatch_png(Color::from_rgb(1, 2, 3), DEFAULT_SWATCH_SIZE).unwrap();
        assert_eq!(a, b);
    }
}
