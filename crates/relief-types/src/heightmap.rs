use serde::{Deserialize, Serialize};

/// Errors constructing a [`Heightmap`] from raw samples.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HeightmapError {
    #[error("expected {expected} samples for the grid, got {actual}")]
    SampleCountMismatch { expected: usize, actual: usize },

    #[error("sample {index} is {value}, outside [0, 1]")]
    SampleOutOfRange { index: usize, value: f32 },

    #[error("grid {width}x{height} is too large to allocate")]
    TooLarge { width: usize, height: usize },
}

/// Normalized relief depth grid, row-major with the origin at the top-left.
///
/// Samples are guaranteed to lie in `[0, 1]`. The grid dimensions are not
/// checked here: a 1-wide or 1-tall heightmap is representable so that the
/// mesh encoder can reject it on its own terms. Deserialization goes
/// through [`Heightmap::from_samples`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawHeightmap")]
pub struct Heightmap {
    width: usize,
    height: usize,
    samples: Vec<f32>,
}

impl Heightmap {
    /// Build a heightmap from row-major samples.
    pub fn from_samples(
        width: usize,
        height: usize,
        samples: Vec<f32>,
    ) -> Result<Self, HeightmapError> {
        let heightmap = Self {
            width,
            height,
            samples,
        };
        heightmap.check()?;
        Ok(heightmap)
    }

    /// A heightmap where every sample equals `value` (clamped to `[0, 1]`).
    pub fn flat(width: usize, height: usize, value: f32) -> Result<Self, HeightmapError> {
        let too_large = HeightmapError::TooLarge { width, height };
        let count = width.checked_mul(height).ok_or(too_large.clone())?;
        let value = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0)
        };

        let mut samples = Vec::new();
        samples.try_reserve_exact(count).map_err(|_| too_large)?;
        samples.resize(count, value);
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Re-check the sample count and range invariants.
    pub fn check(&self) -> Result<(), HeightmapError> {
        let expected = self.width.checked_mul(self.height).unwrap_or(usize::MAX);
        if self.samples.len() != expected {
            return Err(HeightmapError::SampleCountMismatch {
                expected,
                actual: self.samples.len(),
            });
        }
        if let Some((index, &value)) = self
            .samples
            .iter()
            .enumerate()
            .find(|(_, v)| !(0.0..=1.0).contains(*v))
        {
            return Err(HeightmapError::SampleOutOfRange { index, value });
        }
        Ok(())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Sample at column `x`, row `y`. Panics when out of bounds.
    pub fn get(&self, x: usize, y: usize) -> f32 {
        assert!(x < self.width && y < self.height, "sample ({x}, {y}) out of bounds");
        self.samples[y * self.width + x]
    }

    /// Number of grid cells, `(width-1) * (height-1)`; zero for degenerate grids.
    pub fn cell_count(&self) -> usize {
        self.width.saturating_sub(1) * self.height.saturating_sub(1)
    }

    /// Iterate the samples row by row.
    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        // chunks() panics on zero; an empty-width grid has no rows to yield.
        self.samples.chunks(self.width.max(1))
    }
}

/// Unchecked wire form of [`Heightmap`].
#[derive(Deserialize)]
struct RawHeightmap {
    width: usize,
    height: usize,
    samples: Vec<f32>,
}

impl TryFrom<RawHeightmap> for Heightmap {
    type Error = HeightmapError;

    fn try_from(raw: RawHeightmap) -> Result<Self, Self::Error> {
        Heightmap::from_samples(raw.width, raw.height, raw.samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_samples_checks_length() {
        let err = Heightmap::from_samples(3, 2, vec![0.0; 5]).unwrap_err();
        assert_eq!(
            err,
            HeightmapError::SampleCountMismatch {
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn from_samples_rejects_out_of_range() {
        let err = Heightmap::from_samples(2, 2, vec![0.0, 0.5, 1.5, 1.0]).unwrap_err();
        assert_eq!(
            err,
            HeightmapError::SampleOutOfRange {
                index: 2,
                value: 1.5
            }
        );
        assert!(Heightmap::from_samples(1, 1, vec![f32::NAN]).is_err());
    }

    #[test]
    fn get_is_row_major() {
        let hm = Heightmap::from_samples(3, 2, vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5]).unwrap();
        assert_eq!(hm.get(2, 0), 0.2);
        assert_eq!(hm.get(0, 1), 0.3);
        assert_eq!(hm.rows().count(), 2);
    }

    #[test]
    fn cell_count_handles_degenerate_grids() {
        assert_eq!(Heightmap::flat(4, 4, 0.0).unwrap().cell_count(), 9);
        assert_eq!(Heightmap::flat(1, 4, 0.0).unwrap().cell_count(), 0);
        assert_eq!(Heightmap::flat(0, 0, 0.0).unwrap().cell_count(), 0);
    }

    #[test]
    fn flat_clamps_value() {
        let hm = Heightmap::flat(2, 2, 3.0).unwrap();
        assert!(hm.samples().iter().all(|&v| v == 1.0));
    }

    #[test]
    fn heightmap_json_roundtrip() {
        let hm = Heightmap::flat(2, 3, 0.25).unwrap();
        let json = serde_json::to_string(&hm).unwrap();
        let back: Heightmap = serde_json::from_str(&json).unwrap();
        assert_eq!(hm, back);
    }

    #[test]
    fn deserialize_rejects_inconsistent_samples() {
        let short = serde_json::from_str::<Heightmap>(
            r#"{"width":3,"height":3,"samples":[0.0,0.5,0.25,1.0]}"#,
        );
        assert!(short.unwrap_err().to_string().contains("expected 9 samples"));

        let out_of_range =
            serde_json::from_str::<Heightmap>(r#"{"width":2,"height":1,"samples":[0.0,7.0]}"#);
        assert!(out_of_range.unwrap_err().to_string().contains("outside [0, 1]"));
    }

    #[test]
    fn flat_rejects_overflowing_grid() {
        assert_eq!(
            Heightmap::flat(usize::MAX, 2, 0.0).unwrap_err(),
            HeightmapError::TooLarge {
                width: usize::MAX,
                height: 2
            }
        );
        assert!(matches!(
            Heightmap::flat(1 << 31, 1 << 31, 0.0),
            Err(HeightmapError::TooLarge { .. })
        ));
    }
}
