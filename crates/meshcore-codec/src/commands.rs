//! Commands that can be sent to the companion firmware.
//!
//! Two entry points share one interpreter:
//!
//! - [`encode_command`] takes a [`CommandKind`] and a positional list of
//!   [`FieldValue`]s, one per argument-taking field of the kind's layout.
//! - [`Command`] is the strongly-typed form; [`Command::encode`] lowers it to
//!   field values and calls [`encode_command`].
//!
//! Neither knows any opcode or byte offset. Everything about the wire format
//! comes from [`crate::registry`].

use bytes::{BufMut, BytesMut};
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{CodecError, Result};
use crate::frame::EncodedFrame;
use crate::registry::{command_layout, CommandKind, CommandLayout, FieldEncoding, Overflow};
use crate::types::*;

// ============================================================================
// Field Values
// ============================================================================

/// A caller-supplied argument for one field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Integer (bytes, counters, timestamps).
    Int(i64),
    /// Real number (scaled fixed-point fields).
    Float(f64),
    /// Boolean flag.
    Bool(bool),
    /// UTF-8 text.
    Text(String),
    /// Raw bytes (keys, prefixes, secrets, payloads).
    Bytes(Vec<u8>),
}

impl FieldValue {
    fn kind_name(&self) -> &'static str {
        match self {
            FieldValue::Int(_) => "integer",
            FieldValue::Float(_) => "float",
            FieldValue::Bool(_) => "bool",
            FieldValue::Text(_) => "text",
            FieldValue::Bytes(_) => "bytes",
        }
    }
}

macro_rules! field_value_from {
    ($variant:ident: $($ty:ty),+ => $conv:expr) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(v: $ty) -> Self {
                    FieldValue::$variant($conv(v))
                }
            }
        )+
    };
}

field_value_from!(Int: u8, u16, u32, i32, i64 => i64::from);
field_value_from!(Float: f32, f64 => f64::from);
field_value_from!(Bool: bool => std::convert::identity);
field_value_from!(Text: String, &str => String::from);
field_value_from!(Bytes: Vec<u8>, &[u8] => Vec::from);

impl From<PublicKeyPrefix> for FieldValue {
    fn from(prefix: PublicKeyPrefix) -> Self {
        FieldValue::Bytes(prefix.0.to_vec())
    }
}

impl From<Destination> for FieldValue {
    fn from(dest: Destination) -> Self {
        FieldValue::Bytes(dest.as_bytes().to_vec())
    }
}

impl From<StatsKind> for FieldValue {
    fn from(kind: StatsKind) -> Self {
        FieldValue::Int(u8::from(kind).into())
    }
}

impl<const N: usize> From<[u8; N]> for FieldValue {
    fn from(bytes: [u8; N]) -> Self {
        FieldValue::Bytes(bytes.to_vec())
    }
}

// ============================================================================
// Interpreter
// ============================================================================

/// Encode a command from its kind and positional arguments.
///
/// `args` holds one value per argument-taking field, in layout order.
/// Constant fields (reserved bytes, literal confirmations) are filled in
/// from the registry and take no argument.
pub fn encode_command(kind: CommandKind, args: &[FieldValue]) -> Result<EncodedFrame> {
    encode_layout(command_layout(kind)?, args)
}

/// Encode arguments against an explicit layout.
pub fn encode_layout(layout: &CommandLayout, args: &[FieldValue]) -> Result<EncodedFrame> {
    let arity = layout.arity();
    if args.len() != arity {
        return Err(CodecError::invalid_argument(
            "arguments",
            format!(
                "{} takes {} argument(s), got {}",
                layout.kind,
                arity,
                args.len()
            ),
        ));
    }

    let mut buf = BytesMut::with_capacity(layout.fixed_len().unwrap_or(MAX_FRAME_SIZE));
    buf.put_u8(layout.opcode);
    if let Some(variant) = layout.variant {
        buf.put_u8(variant);
    }

    let mut args = args.iter();
    for field in layout.fields {
        match field.encoding {
            FieldEncoding::Constant(bytes) => buf.put_slice(bytes),
            encoding => {
                // Arity was checked above, so there is always a value here.
                if let Some(value) = args.next() {
                    encode_field(&mut buf, field.name, encoding, value)?;
                }
            }
        }
    }

    log::trace!("encoded {} frame ({} bytes)", layout.kind, buf.len());
    Ok(EncodedFrame::new(buf.freeze()))
}

fn encode_field(
    buf: &mut BytesMut,
    name: &'static str,
    encoding: FieldEncoding,
    value: &FieldValue,
) -> Result<()> {
    match encoding {
        FieldEncoding::Constant(bytes) => buf.put_slice(bytes),

        FieldEncoding::U8 => {
            let v = expect_int(name, value)?;
            let byte = u8::try_from(v).map_err(|_| out_of_width(name, v, "0..=255"))?;
            buf.put_u8(byte);
        }

        FieldEncoding::Flag => match value {
            FieldValue::Bool(true) => buf.put_u8(0x01),
            FieldValue::Bool(false) => {}
            other => return Err(wrong_type(name, "bool", other)),
        },

        FieldEncoding::U32Le => {
            let v = expect_int(name, value)?;
            let word = u32::try_from(v).map_err(|_| out_of_width(name, v, "0..=4294967295"))?;
            buf.put_u32_le(word);
        }

        FieldEncoding::ScaledI32Le { scale } => {
            let scaled = scale_toward_zero(name, value, scale)?;
            if scaled < f64::from(i32::MIN) || scaled > f64::from(i32::MAX) {
                return Err(CodecError::invalid_argument(
                    name,
                    format!("scaled value {} does not fit a signed 32-bit field", scaled),
                ));
            }
            buf.put_i32_le(scaled as i32);
        }

        FieldEncoding::ScaledU32Le { scale } => {
            let scaled = scale_toward_zero(name, value, scale)?;
            if scaled < 0.0 || scaled > f64::from(u32::MAX) {
                return Err(CodecError::invalid_argument(
                    name,
                    format!(
                        "scaled value {} does not fit an unsigned 32-bit field",
                        scaled
                    ),
                ));
            }
            buf.put_u32_le(scaled as u32);
        }

        FieldEncoding::Text => buf.put_slice(expect_text(name, value)?.as_bytes()),

        FieldEncoding::PaddedText {
            width,
            max_len,
            overflow,
        } => {
            let text = expect_text(name, value)?;
            let bytes = if text.len() > max_len {
                match overflow {
                    Overflow::Truncate => {
                        let cut = floor_char_boundary(text, max_len);
                        log::debug!("truncating {} from {} to {} bytes", name, text.len(), cut);
                        &text.as_bytes()[..cut]
                    }
                    Overflow::Reject => {
                        return Err(CodecError::invalid_argument(
                            name,
                            format!("{} bytes exceeds the {}-byte field", text.len(), max_len),
                        ))
                    }
                }
            } else {
                text.as_bytes()
            };
            put_zero_padded(buf, name, bytes, width)?;
        }

        FieldEncoding::KeyPrefix => {
            let bytes = expect_bytes(name, value)?;
            let prefix = PublicKeyPrefix::from_slice(bytes).ok_or_else(|| {
                CodecError::invalid_argument(
                    name,
                    format!(
                        "key prefix needs {} bytes, got {}",
                        PUB_KEY_PREFIX_SIZE,
                        bytes.len()
                    ),
                )
            })?;
            buf.put_slice(prefix.as_bytes());
        }

        FieldEncoding::Identity => {
            let dest = Destination::new(expect_bytes(name, value)?).map_err(|err| match err {
                CodecError::InvalidArgument { reason, .. } => {
                    CodecError::invalid_argument(name, reason)
                }
                other => other,
            })?;
            buf.put_slice(&dest.padded());
        }

        FieldEncoding::Raw { width } => {
            let bytes = expect_bytes(name, value)?;
            if bytes.len() != width {
                return Err(CodecError::invalid_argument(
                    name,
                    format!("expected exactly {} bytes, got {}", width, bytes.len()),
                ));
            }
            buf.put_slice(bytes);
        }

        FieldEncoding::Bytes => buf.put_slice(expect_bytes(name, value)?),
    }

    Ok(())
}

fn put_zero_padded(
    buf: &mut BytesMut,
    name: &'static str,
    bytes: &[u8],
    width: usize,
) -> Result<()> {
    if bytes.len() > width {
        return Err(CodecError::invalid_argument(
            name,
            format!("{} bytes do not fit the {}-byte field", bytes.len(), width),
        ));
    }
    buf.put_slice(bytes);
    buf.put_bytes(0, width - bytes.len());
    Ok(())
}

/// Largest char boundary in `text` that is `<= index`.
fn floor_char_boundary(text: &str, index: usize) -> usize {
    (0..=index.min(text.len()))
        .rev()
        .find(|&i| text.is_char_boundary(i))
        .unwrap_or(0)
}

fn scale_toward_zero(name: &'static str, value: &FieldValue, scale: f64) -> Result<f64> {
    let real = match value {
        FieldValue::Float(v) => *v,
        FieldValue::Int(v) => *v as f64,
        other => return Err(wrong_type(name, "number", other)),
    };
    if !real.is_finite() {
        return Err(CodecError::invalid_argument(
            name,
            format!("{} is not a finite number", real),
        ));
    }
    Ok((real * scale).trunc())
}

fn expect_int(name: &'static str, value: &FieldValue) -> Result<i64> {
    match value {
        FieldValue::Int(v) => Ok(*v),
        other => Err(wrong_type(name, "integer", other)),
    }
}

fn expect_text<'a>(name: &'static str, value: &'a FieldValue) -> Result<&'a str> {
    match value {
        FieldValue::Text(v) => Ok(v),
        other => Err(wrong_type(name, "text", other)),
    }
}

fn expect_bytes<'a>(name: &'static str, value: &'a FieldValue) -> Result<&'a [u8]> {
    match value {
        FieldValue::Bytes(v) => Ok(v),
        other => Err(wrong_type(name, "bytes", other)),
    }
}

fn wrong_type(name: &'static str, expected: &str, got: &FieldValue) -> CodecError {
    CodecError::invalid_argument(
        name,
        format!("expected {}, got {}", expected, got.kind_name()),
    )
}

fn out_of_width(name: &'static str, value: i64, range: &str) -> CodecError {
    CodecError::invalid_argument(name, format!("{} is outside {}", value, range))
}

// ============================================================================
// Typed Commands
// ============================================================================

/// Commands that can be sent to the companion firmware.
///
/// Deserializes from the externally tagged snake_case form used in job files,
/// e.g. `set_time: { timestamp: 1704067200 }` or plain `get_battery`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Start the app connection and get self info.
    AppStart {
        /// Client identifier, at most 5 bytes on the wire.
        client_id: String,
    },

    /// Query device information. First command to send.
    DeviceQuery,

    /// Get battery and storage info.
    GetBattery,

    /// Get the current device time.
    GetTime,

    /// Set the device time.
    SetTime {
        /// Unix timestamp in seconds.
        timestamp: u32,
    },

    /// Set the advertisement name.
    SetName {
        /// New name.
        name: String,
    },

    /// Set advertisement latitude/longitude.
    SetCoords {
        /// Latitude in degrees.
        latitude: f64,
        /// Longitude in degrees.
        longitude: f64,
    },

    /// Set radio TX power.
    SetTxPower {
        /// TX power in dBm.
        power: u32,
    },

    /// Set radio parameters.
    SetRadio {
        /// Centre frequency in MHz.
        frequency_mhz: f64,
        /// Bandwidth in kHz.
        bandwidth_khz: f64,
        /// LoRa spreading factor.
        spreading_factor: u8,
        /// LoRa coding rate denominator.
        coding_rate: u8,
    },

    /// Send a self-advertisement.
    SendAdvertisement {
        /// Flood (true) or zero-hop (false).
        #[serde(default)]
        flood: bool,
    },

    /// Reboot the device.
    Reboot,

    /// Get the list of contacts.
    GetContacts,

    /// Sync the next message from the offline queue.
    GetMessage,

    /// Send a text message to a contact.
    SendMessage {
        /// Retry attempt number.
        #[serde(default)]
        attempt: u8,
        /// Message timestamp.
        timestamp: u32,
        /// Recipient's public key prefix.
        destination: PublicKeyPrefix,
        /// Message text.
        text: String,
    },

    /// Send a CLI command to a repeater or room server.
    SendCommand {
        /// Command timestamp.
        timestamp: u32,
        /// Target's public key prefix.
        destination: PublicKeyPrefix,
        /// Command line text.
        command: String,
    },

    /// Send a text message to a channel.
    SendChannelMessage {
        /// Channel index.
        channel: u8,
        /// Message timestamp.
        timestamp: u32,
        /// Message text.
        text: String,
    },

    /// Send login request.
    SendLogin {
        /// Server identity.
        destination: Destination,
        /// Password.
        password: String,
    },

    /// Logout from a server.
    SendLogout {
        /// Server identity.
        destination: Destination,
    },

    /// Send status request.
    SendStatusRequest {
        /// Server identity.
        destination: Destination,
    },

    /// Get channel information.
    GetChannel {
        /// Channel index.
        index: u8,
    },

    /// Set channel information.
    SetChannel {
        /// Channel index (0-based).
        index: u8,
        /// Channel name (up to 31 bytes, longer names are truncated).
        name: String,
        /// Channel secret key.
        #[serde(with = "hex_serde")]
        secret: [u8; CHANNEL_SECRET_SIZE],
    },

    /// Get statistics (v8+).
    GetStats {
        /// Statistics group.
        stats: StatsKind,
    },

    /// Request telemetry from this node.
    GetSelfTelemetry,

    /// Export private key.
    ExportPrivateKey,

    /// Start signing operation.
    SignStart,

    /// Finish signing and get signature.
    SignFinish,

    /// Send path discovery request.
    PathDiscovery {
        /// Target identity.
        destination: Destination,
    },

    /// Send trace path.
    SendTrace {
        /// Trace tag.
        tag: u32,
        /// Auth code.
        auth: u32,
        /// Flags.
        #[serde(default)]
        flags: u8,
        /// Path hashes (empty for none).
        #[serde(default, with = "hex_serde")]
        path: Vec<u8>,
    },

    /// Provide data for signing.
    SignData {
        /// Data to sign.
        #[serde(with = "hex_serde")]
        data: Vec<u8>,
    },

    /// Import private key.
    ImportPrivateKey {
        /// Identity data (private + public key).
        #[serde(with = "hex_serde")]
        identity: [u8; IDENTITY_SIZE],
    },

    /// Remove a contact.
    RemoveContact {
        /// Contact's public key.
        destination: Destination,
    },

    /// Reset the path to a contact.
    ResetPath {
        /// Contact's public key.
        destination: Destination,
    },

    /// Check if there's an active connection.
    HasConnection {
        /// Server identity.
        destination: Destination,
    },

    /// Get tuning parameters.
    GetTuningParams,

    /// Set device PIN.
    SetDevicePin {
        /// PIN code (0 = disabled, otherwise 6 digits).
        pin: u32,
    },

    /// Get custom variables.
    GetCustomVars,

    /// Request telemetry from a remote node.
    SendTelemetryRequest {
        /// Target identity.
        destination: Destination,
    },

    /// Send binary request.
    SendBinaryRequest {
        /// Target identity.
        destination: Destination,
        /// Request data.
        #[serde(with = "hex_serde")]
        data: Vec<u8>,
    },

    /// Factory reset.
    FactoryReset,
}

impl Command {
    /// The registry kind for this command.
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::AppStart { .. } => CommandKind::AppStart,
            Command::DeviceQuery => CommandKind::DeviceQuery,
            Command::GetBattery => CommandKind::GetBattery,
            Command::GetTime => CommandKind::GetTime,
            Command::SetTime { .. } => CommandKind::SetTime,
            Command::SetName { .. } => CommandKind::SetName,
            Command::SetCoords { .. } => CommandKind::SetCoords,
            Command::SetTxPower { .. } => CommandKind::SetTxPower,
            Command::SetRadio { .. } => CommandKind::SetRadio,
            Command::SendAdvertisement { .. } => CommandKind::SendAdvertisement,
            Command::Reboot => CommandKind::Reboot,
            Command::GetContacts => CommandKind::GetContacts,
            Command::GetMessage => CommandKind::GetMessage,
            Command::SendMessage { .. } => CommandKind::SendMessage,
            Command::SendCommand { .. } => CommandKind::SendCommand,
            Command::SendChannelMessage { .. } => CommandKind::SendChannelMessage,
            Command::SendLogin { .. } => CommandKind::SendLogin,
            Command::SendLogout { .. } => CommandKind::SendLogout,
            Command::SendStatusRequest { .. } => CommandKind::SendStatusRequest,
            Command::GetChannel { .. } => CommandKind::GetChannel,
            Command::SetChannel { .. } => CommandKind::SetChannel,
            Command::GetStats { .. } => CommandKind::GetStats,
            Command::GetSelfTelemetry => CommandKind::GetSelfTelemetry,
            Command::ExportPrivateKey => CommandKind::ExportPrivateKey,
            Command::SignStart => CommandKind::SignStart,
            Command::SignFinish => CommandKind::SignFinish,
            Command::PathDiscovery { .. } => CommandKind::PathDiscovery,
            Command::SendTrace { .. } => CommandKind::SendTrace,
            Command::SignData { .. } => CommandKind::SignData,
            Command::ImportPrivateKey { .. } => CommandKind::ImportPrivateKey,
            Command::RemoveContact { .. } => CommandKind::RemoveContact,
            Command::ResetPath { .. } => CommandKind::ResetPath,
            Command::HasConnection { .. } => CommandKind::HasConnection,
            Command::GetTuningParams => CommandKind::GetTuningParams,
            Command::SetDevicePin { .. } => CommandKind::SetDevicePin,
            Command::GetCustomVars => CommandKind::GetCustomVars,
            Command::SendTelemetryRequest { .. } => CommandKind::SendTelemetryRequest,
            Command::SendBinaryRequest { .. } => CommandKind::SendBinaryRequest,
            Command::FactoryReset => CommandKind::FactoryReset,
        }
    }

    /// Positional arguments for [`encode_command`], in layout order.
    pub fn args(&self) -> Vec<FieldValue> {
        match self {
            Command::AppStart { client_id } => vec![client_id.as_str().into()],

            Command::DeviceQuery
            | Command::GetBattery
            | Command::GetTime
            | Command::Reboot
            | Command::GetContacts
            | Command::GetMessage
            | Command::GetSelfTelemetry
            | Command::ExportPrivateKey
            | Command::SignStart
            | Command::SignFinish
            | Command::GetTuningParams
            | Command::GetCustomVars
            | Command::FactoryReset => Vec::new(),

            Command::SetTime { timestamp } => vec![(*timestamp).into()],

            Command::SetName { name } => vec![name.as_str().into()],

            Command::SetCoords {
                latitude,
                longitude,
            } => vec![(*latitude).into(), (*longitude).into()],

            Command::SetTxPower { power } => vec![(*power).into()],

            Command::SetRadio {
                frequency_mhz,
                bandwidth_khz,
                spreading_factor,
                coding_rate,
            } => vec![
                (*frequency_mhz).into(),
                (*bandwidth_khz).into(),
                (*spreading_factor).into(),
                (*coding_rate).into(),
            ],

            Command::SendAdvertisement { flood } => vec![(*flood).into()],

            Command::SendMessage {
                attempt,
                timestamp,
                destination,
                text,
            } => vec![
                (*attempt).into(),
                (*timestamp).into(),
                (*destination).into(),
                text.as_str().into(),
            ],

            Command::SendCommand {
                timestamp,
                destination,
                command,
            } => vec![
                (*timestamp).into(),
                (*destination).into(),
                command.as_str().into(),
            ],

            Command::SendChannelMessage {
                channel,
                timestamp,
                text,
            } => vec![
                (*channel).into(),
                (*timestamp).into(),
                text.as_str().into(),
            ],

            Command::SendLogin {
                destination,
                password,
            } => vec![destination.clone().into(), password.as_str().into()],

            Command::SendLogout { destination }
            | Command::SendStatusRequest { destination }
            | Command::PathDiscovery { destination }
            | Command::RemoveContact { destination }
            | Command::ResetPath { destination }
            | Command::HasConnection { destination }
            | Command::SendTelemetryRequest { destination } => vec![destination.clone().into()],

            Command::GetChannel { index } => vec![(*index).into()],

            Command::SetChannel {
                index,
                name,
                secret,
            } => vec![(*index).into(), name.as_str().into(), (*secret).into()],

            Command::GetStats { stats } => vec![(*stats).into()],

            Command::SendTrace {
                tag,
                auth,
                flags,
                path,
            } => vec![
                (*tag).into(),
                (*auth).into(),
                (*flags).into(),
                path.as_slice().into(),
            ],

            Command::SignData { data } => vec![data.as_slice().into()],

            Command::ImportPrivateKey { identity } => vec![(*identity).into()],

            Command::SetDevicePin { pin } => vec![(*pin).into()],

            Command::SendBinaryRequest { destination, data } => {
                vec![destination.clone().into(), data.as_slice().into()]
            }
        }
    }

    /// Encode the command to a frame.
    pub fn encode(&self) -> Result<EncodedFrame> {
        encode_command(self.kind(), &self.args())
    }
}
