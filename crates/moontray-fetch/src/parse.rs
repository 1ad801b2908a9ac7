//! Mapping of Moonraker JSON responses into validated types.

use moontray_types::{FileMetadata, PrinterState, PrinterStatus};
use serde::Deserialize;

use crate::FetchError;

/// State reported when `print_stats.state` is absent.
const MISSING_STATE: &str = "unknown";

/// Index of the Z axis in `gcode_move.gcode_position` (`[x, y, z, e]`).
const Z_AXIS: usize = 2;

/// Telemetry from one `printer/objects/query` response.
///
/// Timing fields stay optional here; [`PrinterPoll::snapshot`] applies the
/// defaults when building the estimator input.
///
/// [`PrinterPoll::snapshot`]: crate::PrinterPoll::snapshot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrinterTelemetry {
    /// Non-timing printer status.
    pub status: PrinterStatus,
    /// `virtual_sdcard.progress`.
    pub progress: Option<f64>,
    /// `print_stats.print_duration`.
    pub print_duration: Option<f64>,
    /// `gcode_move.speed_factor`.
    pub speed_factor: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    result: T,
}

#[derive(Debug, Deserialize)]
struct ObjectsResult {
    status: RawStatus,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawStatus {
    heater_bed: Option<Heater>,
    extruder: Option<Heater>,
    virtual_sdcard: Option<VirtualSdcard>,
    print_stats: Option<PrintStats>,
    gcode_move: Option<GcodeMove>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Heater {
    temperature: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct VirtualSdcard {
    progress: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PrintStats {
    state: Option<String>,
    filename: Option<String>,
    print_duration: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GcodeMove {
    speed_factor: Option<f64>,
    gcode_position: Option<Vec<f64>>,
}

impl From<RawStatus> for PrinterTelemetry {
    fn from(raw: RawStatus) -> Self {
        let print_stats = raw.print_stats.unwrap_or_default();
        let gcode_move = raw.gcode_move.unwrap_or_default();

        let status = PrinterStatus {
            state: PrinterState::from_raw(print_stats.state.as_deref().unwrap_or(MISSING_STATE)),
            filename: print_stats.filename,
            extruder_temperature: raw.extruder.and_then(|h| h.temperature),
            bed_temperature: raw.heater_bed.and_then(|h| h.temperature),
            gcode_z: gcode_move
                .gcode_position
                .and_then(|pos| pos.get(Z_AXIS).copied()),
        };

        Self {
            status,
            progress: raw.virtual_sdcard.and_then(|sd| sd.progress),
            print_duration: print_stats.print_duration,
            speed_factor: gcode_move.speed_factor,
        }
    }
}

/// Parses a `printer/objects/query` response body.
///
/// Missing objects and fields are tolerated and left unset.
///
/// # Errors
///
/// Returns [`FetchError::Decode`] if the body is not JSON or lacks
/// `result.status`.
pub fn parse_objects_response(body: &[u8]) -> Result<PrinterTelemetry, FetchError> {
    let envelope: Envelope<ObjectsResult> = serde_json::from_slice(body)?;
    Ok(envelope.result.status.into())
}

/// Parses a `server/files/metadata` response body.
///
/// # Errors
///
/// Returns [`FetchError::Decode`] if the body is not JSON or lacks `result`.
pub fn parse_metadata_response(body: &[u8]) -> Result<FileMetadata, FetchError> {
    let envelope: Envelope<FileMetadata> = serde_json::from_slice(body)?;
    Ok(envelope.result)
}
