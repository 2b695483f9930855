//! Byte-level tests for the relief STL encoder.

use proptest::prelude::*;
use relief_mesh::{
    encode_relief, encode_relief_ascii, expected_stl_len, read_binary_stl, relief_triangles,
    EncodeError, EncodeOptions, Heightmap, Vertex,
};

fn triangle_count(stl: &[u8]) -> u32 {
    u32::from_le_bytes([stl[80], stl[81], stl[82], stl[83]])
}

/// Deterministic, non-flat heightmap.
fn ramp(width: usize, height: usize) -> Heightmap {
    let n = width * height;
    let samples = (0..n).map(|i| i as f32 / n as f32).collect();
    Heightmap::from_samples(width, height, samples).unwrap()
}

#[test]
fn four_by_four_zero_relief() {
    let hm = Heightmap::flat(4, 4, 0.0).unwrap();
    let stl = encode_relief(&hm, &EncodeOptions::new(20.0, 3.0)).unwrap();
    assert_eq!(stl.len(), 984);
    assert_eq!(triangle_count(&stl), 18);

    let doc = read_binary_stl(&stl).unwrap();
    for tri in &doc.triangles {
        assert_eq!(tri.normal, Vertex::ZERO);
        for v in &tri.vertices {
            assert_eq!(v.z, 0.0);
            for c in [v.x, v.y] {
                assert!((0.0..=9.0).contains(&c), "coordinate {c} out of range");
                assert_eq!(c % 3.0, 0.0, "coordinate {c} not on the grid");
            }
        }
    }
}

#[test]
fn flat_relief_has_constant_depth() {
    let c = 0.37f32;
    let depth = 12.5f32;
    let hm = Heightmap::flat(5, 3, c).unwrap();
    let stl = encode_relief(&hm, &EncodeOptions::new(depth, 1.0)).unwrap();
    let doc = read_binary_stl(&stl).unwrap();
    assert_eq!(doc.triangle_count(), 16);
    assert!(doc
        .triangles
        .iter()
        .flat_map(|t| t.vertices.iter())
        .all(|v| v.z == c * depth));
}

#[test]
fn output_is_byte_identical_across_runs() {
    let hm = ramp(17, 9);
    let opts = EncodeOptions::new(6.0, 0.5).with_header("determinism");
    let first = encode_relief(&hm, &opts).unwrap();
    let second = encode_relief(&hm.clone(), &opts.clone()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn binary_records_follow_the_triangle_stream() {
    let hm = ramp(6, 4);
    let opts = EncodeOptions::new(3.0, 2.0);
    let doc = read_binary_stl(&encode_relief(&hm, &opts).unwrap()).unwrap();
    let streamed: Vec<_> = relief_triangles(&hm, 3.0, 2.0).collect();
    assert_eq!(doc.triangles, streamed);
}

#[test]
fn header_is_nul_padded_and_readable() {
    let hm = Heightmap::flat(2, 3, 0.5).unwrap();
    let stl = encode_relief(&hm, &EncodeOptions::default().with_header("CNC relief panel")).unwrap();
    let doc = read_binary_stl(&stl).unwrap();
    assert_eq!(doc.header_text(), "CNC relief panel");
    assert!(stl[16..80].iter().all(|&b| b == 0));
}

#[test]
fn ascii_and_binary_agree_on_triangle_count() {
    let hm = ramp(5, 5);
    let opts = EncodeOptions::default();
    let text = encode_relief_ascii(&hm, &opts).unwrap();
    let bin = encode_relief(&hm, &opts).unwrap();
    assert_eq!(text.matches("endfacet").count() as u32, triangle_count(&bin));
}

#[test]
fn hand_built_degenerate_heightmap_is_zero_grid() {
    let hm = Heightmap::from_samples(3, 1, vec![0.1, 0.2, 0.3]).unwrap();
    assert_eq!(
        encode_relief(&hm, &EncodeOptions::default()).unwrap_err(),
        EncodeError::ZeroGrid {
            width: 3,
            height: 1
        }
    );
}

#[test]
fn heightmap_from_json_is_validated_before_encoding() {
    let bad = serde_json::from_str::<Heightmap>(
        r#"{"width":3,"height":3,"samples":[0.0,0.5,7.0,1.0]}"#,
    );
    assert!(bad.is_err());

    let good: Heightmap =
        serde_json::from_str(r#"{"width":2,"height":2,"samples":[0.0,0.5,0.25,1.0]}"#).unwrap();
    let stl = encode_relief(&good, &EncodeOptions::default()).unwrap();
    assert_eq!(stl.len(), 184);
}

proptest! {
    #[test]
    fn buffer_length_matches_grid(w in 2usize..24, h in 2usize..24) {
        let stl = encode_relief(&Heightmap::flat(w, h, 0.5).unwrap(), &EncodeOptions::default()).unwrap();
        prop_assert_eq!(stl.len(), 84 + 50 * (w - 1) * (h - 1) * 2);
        prop_assert_eq!(Some(stl.len()), expected_stl_len(w, h));
        prop_assert_eq!(triangle_count(&stl) as usize, (w - 1) * (h - 1) * 2);
    }

    #[test]
    fn header_never_spills_past_80_bytes(comment in "[ -~]{0,300}") {
        let hm = Heightmap::flat(3, 2, 0.0).unwrap();
        let stl = encode_relief(&hm, &EncodeOptions::default().with_header(comment.clone())).unwrap();
        prop_assert_eq!(stl.len(), 84 + 4 * 50);
        prop_assert_eq!(triangle_count(&stl), 4);
        let kept = comment.len().min(80);
        prop_assert_eq!(&stl[..kept], &comment.as_bytes()[..kept]);
        prop_assert!(stl[kept..80].iter().all(|&b| b == 0));
    }

    #[test]
    fn encoding_is_deterministic(
        w in 2usize..10,
        h in 2usize..10,
        depth in 0.1f32..100.0,
        grid in 0.1f32..10.0,
    ) {
        let hm = ramp(w, h);
        let opts = EncodeOptions::new(depth, grid);
        prop_assert_eq!(encode_relief(&hm, &opts).unwrap(), encode_relief(&hm, &opts).unwrap());
    }
}
