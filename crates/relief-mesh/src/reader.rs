use relief_types::{Triangle, Vertex};

use crate::binary::{HEADER_LEN, TRIANGLE_RECORD_LEN};
use crate::errors::EncodeError;

/// A parsed binary STL file.
#[derive(Debug, Clone, PartialEq)]
pub struct StlDocument {
    pub header: [u8; HEADER_LEN],
    pub triangles: Vec<Triangle>,
}

impl StlDocument {
    /// Header text up to the first NUL, with trailing spaces removed.
    pub fn header_text(&self) -> String {
        let end = self.header.iter().position(|&b| b == 0).unwrap_or(HEADER_LEN);
        String::from_utf8_lossy(&self.header[..end]).trim_end().to_string()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }
}

/// Parse binary STL bytes.
///
/// The buffer length must be exactly `84 + 50 * count` for the declared count.
pub fn read_binary_stl(bytes: &[u8]) -> Result<StlDocument, EncodeError> {
    if bytes.len() < HEADER_LEN + 4 {
        return Err(EncodeError::Malformed {
            reason: format!("{} bytes is shorter than the 84-byte preamble", bytes.len()),
        });
    }

    let mut header = [0u8; HEADER_LEN];
    header.copy_from_slice(&bytes[..HEADER_LEN]);
    let count = u32::from_le_bytes([bytes[80], bytes[81], bytes[82], bytes[83]]) as usize;

    let expected = count
        .checked_mul(TRIANGLE_RECORD_LEN)
        .and_then(|n| n.checked_add(HEADER_LEN + 4));
    if expected != Some(bytes.len()) {
        return Err(EncodeError::Malformed {
            reason: format!(
                "declared {} triangles but buffer holds {} bytes",
                count,
                bytes.len()
            ),
        });
    }

    let triangles = bytes[HEADER_LEN + 4..]
        .chunks_exact(TRIANGLE_RECORD_LEN)
        .map(|record| {
            let f = |i: usize| {
                let at = i * 4;
                f32::from_le_bytes([record[at], record[at + 1], record[at + 2], record[at + 3]])
            };
            let v = |i: usize| Vertex::new(f(i * 3), f(i * 3 + 1), f(i * 3 + 2));
            Triangle {
                normal: v(0),
                vertices: [v(1), v(2), v(3)],
            }
        })
        .collect();

    Ok(StlDocument { header, triangles })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_buffer() {
        assert!(matches!(
            read_binary_stl(&[0u8; 40]),
            Err(EncodeError::Malformed { .. })
        ));
    }

    #[test]
    fn rejects_count_mismatch() {
        let mut buf = vec![0u8; 84 + 50];
        buf[80] = 2;
        assert!(matches!(read_binary_stl(&buf), Err(EncodeError::Malformed { .. })));
    }

    #[test]
    fn reads_header_and_records() {
        let mut buf = vec![0u8; 84 + 50];
        buf[..5].copy_from_slice(b"hello");
        buf[80] = 1;
        // first vertex x = 2.5
        buf[96..100].copy_from_slice(&2.5f32.to_le_bytes());
        let doc = read_binary_stl(&buf).unwrap();
        assert_eq!(doc.header_text(), "hello");
        assert_eq!(doc.triangle_count(), 1);
        assert_eq!(doc.triangles[0].vertices[0].x, 2.5);
        assert_eq!(doc.triangles[0].normal, Vertex::ZERO);
    }
}
