//! Current layer derivation from the toolhead Z position.

use moontray_types::FileMetadata;

/// Layer reported when there is not enough data to compute one.
const FALLBACK_LAYER: u32 = 1;

/// Current layer paired with the file's total layer count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerProgress {
    /// Layer currently being printed, starting at 1.
    pub current: u32,
    /// Total layers in the file, when the slicer recorded it.
    pub total: Option<u32>,
}

impl LayerProgress {
    /// Builds the layer progress for a print.
    #[must_use]
    pub fn new(print_duration: f64, gcode_z: Option<f64>, metadata: &FileMetadata) -> Self {
        Self {
            current: current_layer(print_duration, gcode_z, metadata),
            total: metadata.layer_count,
        }
    }
}

impl std::fmt::Display for LayerProgress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.total {
            Some(total) => write!(f, "{}/{}", self.current, total),
            None => write!(f, "{}", self.current),
        }
    }
}

/// Computes the layer being printed from the last gcode Z coordinate.
///
/// `layer = ceil((z - first_layer_height) / layer_height + 1)`
///
/// Returns 1 when the print has not started, the file lacks layer heights,
/// the Z position is unknown, or the formula yields a non-positive layer.
#[must_use]
pub fn current_layer(print_duration: f64, gcode_z: Option<f64>, metadata: &FileMetadata) -> u32 {
    if print_duration.is_nan() || print_duration <= 0.0 {
        return FALLBACK_LAYER;
    }
    let (Some(z), Some(first), Some(height)) = (
        gcode_z,
        metadata.first_layer_height,
        metadata.layer_height,
    ) else {
        return FALLBACK_LAYER;
    };
    if height.is_nan() || height <= 0.0 {
        return FALLBACK_LAYER;
    }

    let layer = ((z - first) / height + 1.0).ceil();
    if layer.is_finite() && layer > 0.0 {
        layer.min(f64::from(u32::MAX)) as u32
    } else {
        FALLBACK_LAYER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> FileMetadata {
        FileMetadata {
            first_layer_height: Some(0.25),
            layer_height: Some(0.25),
            layer_count: Some(120),
            ..FileMetadata::default()
        }
    }

    #[test]
    fn test_layer_from_z_position() {
        // (2.5 - 0.25) / 0.25 + 1 = 10
        assert_eq!(current_layer(60.0, Some(2.5), &metadata()), 10);
        // Partway through a layer rounds up.
        assert_eq!(current_layer(60.0, Some(2.625), &metadata()), 11);
    }

    #[test]
    fn test_first_layer() {
        assert_eq!(current_layer(5.0, Some(0.25), &metadata()), 1);
    }

    #[test]
    fn test_not_started_falls_back() {
        assert_eq!(current_layer(0.0, Some(5.0), &metadata()), 1);
    }

    #[test]
    fn test_missing_inputs_fall_back() {
        assert_eq!(current_layer(60.0, None, &metadata()), 1);
        assert_eq!(current_layer(60.0, Some(5.0), &FileMetadata::default()), 1);

        let flat = FileMetadata {
            layer_height: Some(0.0),
            ..metadata()
        };
        assert_eq!(current_layer(60.0, Some(5.0), &flat), 1);
    }

    #[test]
    fn test_z_below_first_layer_falls_back() {
        assert_eq!(current_layer(60.0, Some(-1.0), &metadata()), 1);
    }

    #[test]
    fn test_layer_progress_display() {
        let progress = LayerProgress::new(60.0, Some(2.5), &metadata());
        assert_eq!(progress.to_string(), "10/120");

        let unknown_total = LayerProgress {
            current: 4,
            total: None,
        };
        assert_eq!(unknown_total.to_string(), "4");
    }
}
