use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use std::io;

/// Asynchronously load a trace file and decode it to UTF-8.
///
/// Bytes that are not valid in the detected encoding are replaced, so a
/// binary file decodes to text with no trace matches instead of failing.
pub async fn read_trace_file_async(filepath: &str) -> io::Result<String> {
    let bytes = tokio::fs::read(filepath).await?;
    Ok(decode_bytes_auto(&bytes))
}

/// Detect text encoding from a byte slice.
pub fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}

/// Decode a byte slice to a UTF-8 `String` using automatic encoding detection.
pub fn decode_bytes_auto(bytes: &[u8]) -> String {
    // BOM 이 있으면 감지 결과보다 우선
    if let Some((enc, bom_len)) = Encoding::for_bom(bytes) {
        let (cow, _) = enc.decode_without_bom_handling(&bytes[bom_len..]);
        return cow.into_owned();
    }
    let enc = detect_encoding(bytes);
    let (cow, _, _) = enc.decode(bytes);
    cow.into_owned()
}
