//! Cayenne LPP telemetry encoding.
//!
//! Each entry is `[channel][type][components...]` with every component a
//! big-endian fixed-point integer, two's complement when signed. Entries are
//! concatenated with no separator; the type byte tells a reader how wide the
//! value is.
//!
//! Byte order here is independent of the command encoder, which is
//! little-endian throughout.

use serde::{Deserialize, Serialize};

use crate::error::{CodecError, Result};
use crate::registry::{sensor_layout, ComponentSpec, Rounding, SensorKind, SensorLayout};

/// One sensor reading on one channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LppEntry {
    /// Caller-assigned channel; several entries may share one.
    pub channel: u8,
    /// Sensor type.
    pub sensor: SensorKind,
    /// Component values in natural units (e.g. °C, hPa, degrees, metres).
    pub values: Vec<f64>,
}

impl LppEntry {
    /// Create an entry from raw component values.
    pub fn new(channel: u8, sensor: SensorKind, values: impl Into<Vec<f64>>) -> Self {
        LppEntry {
            channel,
            sensor,
            values: values.into(),
        }
    }

    /// Temperature in °C.
    pub fn temperature(channel: u8, celsius: f64) -> Self {
        Self::new(channel, SensorKind::Temperature, [celsius])
    }

    /// Relative humidity in percent.
    pub fn humidity(channel: u8, percent: f64) -> Self {
        Self::new(channel, SensorKind::Humidity, [percent])
    }

    /// Analog input value (e.g. a voltage).
    pub fn analog_input(channel: u8, value: f64) -> Self {
        Self::new(channel, SensorKind::AnalogInput, [value])
    }

    /// GPS position: degrees, degrees, metres.
    pub fn gps(channel: u8, latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self::new(channel, SensorKind::Gps, [latitude, longitude, altitude])
    }

    /// Barometric pressure in hPa.
    pub fn barometric_pressure(channel: u8, hpa: f64) -> Self {
        Self::new(channel, SensorKind::Barometer, [hpa])
    }

    /// Acceleration in G per axis.
    pub fn accelerometer(channel: u8, x: f64, y: f64, z: f64) -> Self {
        Self::new(channel, SensorKind::Accelerometer, [x, y, z])
    }

    /// Encode this entry alone.
    pub fn encode(&self) -> Result<Vec<u8>> {
        encode_lpp_entry(self.channel, self.sensor, &self.values)
    }
}

/// Encode a single `[channel][type][value...]` entry.
pub fn encode_lpp_entry(channel: u8, sensor: SensorKind, values: &[f64]) -> Result<Vec<u8>> {
    let layout = sensor_layout(sensor)?;
    let mut out = Vec::with_capacity(layout.entry_len());
    write_entry(&mut out, channel, layout, values)?;
    Ok(out)
}

/// Encode entries back to back, in the order given.
///
/// Fails on the first bad entry; nothing is returned for the others.
pub fn encode_lpp_frame(entries: &[LppEntry]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    for entry in entries {
        let layout = sensor_layout(entry.sensor)?;
        write_entry(&mut out, entry.channel, layout, &entry.values)?;
    }
    log::trace!("encoded LPP frame: {} entries, {} bytes", entries.len(), out.len());
    Ok(out)
}

fn write_entry(
    out: &mut Vec<u8>,
    channel: u8,
    layout: &SensorLayout,
    values: &[f64],
) -> Result<()> {
    if values.len() != layout.components.len() {
        return Err(CodecError::invalid_argument(
            "values",
            format!(
                "{} takes {} component(s), got {}",
                layout.kind,
                layout.components.len(),
                values.len()
            ),
        ));
    }

    // Validate every component before writing anything to `out`.
    let scaled = layout
        .components
        .iter()
        .zip(values)
        .map(|(component, &value)| scale_component(layout.kind, component, value))
        .collect::<Result<Vec<i64>>>()?;

    out.push(channel);
    out.push(layout.type_code);
    for (component, value) in layout.components.iter().zip(scaled) {
        out.extend_from_slice(&value.to_be_bytes()[8 - component.width..]);
    }
    Ok(())
}

fn scale_component(sensor: SensorKind, component: &ComponentSpec, value: f64) -> Result<i64> {
    if !value.is_finite() {
        return Err(CodecError::invalid_argument(
            component.name,
            format!("{} {} is not a finite number", sensor, value),
        ));
    }

    let product = value * component.scale;
    let scaled = match component.rounding {
        Rounding::Truncate => product.trunc(),
        Rounding::Nearest => product.round(),
    };

    let (min, max) = component.range();
    if scaled < min as f64 || scaled > max as f64 {
        return Err(CodecError::ValueOutOfRange {
            sensor: sensor.name(),
            component: component.name,
            value: scaled,
            min,
            max,
        });
    }
    Ok(scaled as i64)
}

/// Builder that accumulates entries and encodes them as one payload.
///
/// ```
/// use meshcore_codec::LppFrame;
///
/// let mut frame = LppFrame::new();
/// frame.add_temperature(1, 25.5).add_humidity(2, 65.0);
/// assert_eq!(frame.to_bytes().unwrap(), vec![0x01, 0x67, 0x00, 0xFF, 0x02, 0x68, 0x82]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LppFrame {
    entries: Vec<LppEntry>,
}

impl LppFrame {
    /// Create an empty frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an arbitrary entry.
    pub fn add(&mut self, entry: LppEntry) -> &mut Self {
        self.entries.push(entry);
        self
    }

    /// Append a temperature reading in °C.
    pub fn add_temperature(&mut self, channel: u8, celsius: f64) -> &mut Self {
        self.add(LppEntry::temperature(channel, celsius))
    }

    /// Append a relative humidity reading in percent.
    pub fn add_humidity(&mut self, channel: u8, percent: f64) -> &mut Self {
        self.add(LppEntry::humidity(channel, percent))
    }

    /// Append an analog input reading.
    pub fn add_analog_input(&mut self, channel: u8, value: f64) -> &mut Self {
        self.add(LppEntry::analog_input(channel, value))
    }

    /// Append a GPS position.
    pub fn add_gps(&mut self, channel: u8, latitude: f64, longitude: f64, altitude: f64) -> &mut Self {
        self.add(LppEntry::gps(channel, latitude, longitude, altitude))
    }

    /// Append a barometric pressure reading in hPa.
    pub fn add_barometric_pressure(&mut self, channel: u8, hpa: f64) -> &mut Self {
        self.add(LppEntry::barometric_pressure(channel, hpa))
    }

    /// Append an accelerometer reading in G.
    pub fn add_accelerometer(&mut self, channel: u8, x: f64, y: f64, z: f64) -> &mut Self {
        self.add(LppEntry::accelerometer(channel, x, y, z))
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[LppEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries were added.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Encode all entries.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        encode_lpp_frame(&self.entries)
    }
}
