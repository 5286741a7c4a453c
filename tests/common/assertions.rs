//! Assertion helpers for tests.

use colorq::models::ResultRecord;
use pretty_assertions::assert_eq;

/// (title, subtitle) pairs of a result list, in order
pub fn title_pairs(records: &[ResultRecord]) -> Vec<(String, String)> {
    records
        .iter()
        .map(|r| (r.title.clone(), r.subtitle.clone()))
        .collect()
}

/// Assert the result list matches the expected (title, subtitle) pairs
pub fn assert_records(records: &[ResultRecord], expected: &[(&str, &str)]) {
    let expected: Vec<(String, String)> = expected
        .iter()
        .map(|(t, s)| (t.to_string(), s.to_string()))
        .collect();
    assert_eq!(title_pairs(records), expected);
}

/// Assert every record copies its own title when activated
pub fn assert_copies_own_title(records: &[ResultRecord]) {
    for record in records {
        assert_eq!(
            record.clipboard_text(),
            Some(record.title.as_str()),
            "record {:?} should copy its title",
            record.title
        );
    }
}

/// Assert the bytes are a PNG of the given size filled with one RGB color
pub fn assert_solid_png(bytes: &[u8], size: u32, rgb: [u8; 3]) {
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n", "not a PNG");

    let decoder = png::Decoder::new(std::io::Cursor::new(bytes));
    let mut reader = decoder.read_info().expect("PNG header");
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).expect("PNG frame");

    assert_eq!((info.width, info.height), (size, size));
    assert_eq!(info.color_type, png::ColorType::Rgb);
    for px in buf[..info.buffer_size()].chunks_exact(3) {
        assert_eq!(px, rgb);
    }
}
