//! Layout registry.
//!
//! One static row per command kind and per sensor kind. Each row is the only
//! place its opcode / type byte, field order, widths and scale factors are
//! written down; the command and LPP encoders are interpreters over these
//! tables and carry no per-kind encoding logic of their own.
//!
//! ## Command layout
//!
//! ```text
//! +--------+-----------+---------+---------+-----+
//! | opcode | [variant] | field 0 | field 1 | ... |
//! +--------+-----------+---------+---------+-----+
//! ```
//!
//! ## LPP entry layout
//!
//! ```text
//! +---------+------+-------------+-------------+-----+
//! | channel | type | component 0 | component 1 | ... |   (components big-endian)
//! +---------+------+-------------+-------------+-----+
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{CodecError, Result};

// ============================================================================
// Command Kinds
// ============================================================================

/// Identifies one command frame layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
    AppStart,
    DeviceQuery,
    GetBattery,
    GetTime,
    SetTime,
    SetName,
    SetCoords,
    SetTxPower,
    SetRadio,
    SendAdvertisement,
    Reboot,
    GetContacts,
    GetMessage,
    SendMessage,
    SendCommand,
    SendChannelMessage,
    SendLogin,
    SendLogout,
    SendStatusRequest,
    GetChannel,
    SetChannel,
    GetStats,
    GetSelfTelemetry,
    ExportPrivateKey,
    SignStart,
    SignFinish,
    PathDiscovery,
    SendTrace,
    SignData,
    ImportPrivateKey,
    RemoveContact,
    ResetPath,
    HasConnection,
    GetTuningParams,
    SetDevicePin,
    GetCustomVars,
    SendTelemetryRequest,
    SendBinaryRequest,
    FactoryReset,
}

impl CommandKind {
    /// Every command kind, in registry order.
    pub const ALL: [CommandKind; 39] = [
        CommandKind::AppStart,
        CommandKind::DeviceQuery,
        CommandKind::GetBattery,
        CommandKind::GetTime,
        CommandKind::SetTime,
        CommandKind::SetName,
        CommandKind::SetCoords,
        CommandKind::SetTxPower,
        CommandKind::SetRadio,
        CommandKind::SendAdvertisement,
        CommandKind::Reboot,
        CommandKind::GetContacts,
        CommandKind::GetMessage,
        CommandKind::SendMessage,
        CommandKind::SendCommand,
        CommandKind::SendChannelMessage,
        CommandKind::SendLogin,
        CommandKind::SendLogout,
        CommandKind::SendStatusRequest,
        CommandKind::GetChannel,
        CommandKind::SetChannel,
        CommandKind::GetStats,
        CommandKind::GetSelfTelemetry,
        CommandKind::ExportPrivateKey,
        CommandKind::SignStart,
        CommandKind::SignFinish,
        CommandKind::PathDiscovery,
        CommandKind::SendTrace,
        CommandKind::SignData,
        CommandKind::ImportPrivateKey,
        CommandKind::RemoveContact,
        CommandKind::ResetPath,
        CommandKind::HasConnection,
        CommandKind::GetTuningParams,
        CommandKind::SetDevicePin,
        CommandKind::GetCustomVars,
        CommandKind::SendTelemetryRequest,
        CommandKind::SendBinaryRequest,
        CommandKind::FactoryReset,
    ];

    /// Snake-case name, as accepted by [`FromStr`] and used in job files.
    pub fn name(&self) -> &'static str {
        match self {
            CommandKind::AppStart => "app_start",
            CommandKind::DeviceQuery => "device_query",
            CommandKind::GetBattery => "get_battery",
            CommandKind::GetTime => "get_time",
            CommandKind::SetTime => "set_time",
            CommandKind::SetName => "set_name",
            CommandKind::SetCoords => "set_coords",
            CommandKind::SetTxPower => "set_tx_power",
            CommandKind::SetRadio => "set_radio",
            CommandKind::SendAdvertisement => "send_advertisement",
            CommandKind::Reboot => "reboot",
            CommandKind::GetContacts => "get_contacts",
            CommandKind::GetMessage => "get_message",
            CommandKind::SendMessage => "send_message",
            CommandKind::SendCommand => "send_command",
            CommandKind::SendChannelMessage => "send_channel_message",
            CommandKind::SendLogin => "send_login",
            CommandKind::SendLogout => "send_logout",
            CommandKind::SendStatusRequest => "send_status_request",
            CommandKind::GetChannel => "get_channel",
            CommandKind::SetChannel => "set_channel",
            CommandKind::GetStats => "get_stats",
            CommandKind::GetSelfTelemetry => "get_self_telemetry",
            CommandKind::ExportPrivateKey => "export_private_key",
            CommandKind::SignStart => "sign_start",
            CommandKind::SignFinish => "sign_finish",
            CommandKind::PathDiscovery => "path_discovery",
            CommandKind::SendTrace => "send_trace",
            CommandKind::SignData => "sign_data",
            CommandKind::ImportPrivateKey => "import_private_key",
            CommandKind::RemoveContact => "remove_contact",
            CommandKind::ResetPath => "reset_path",
            CommandKind::HasConnection => "has_connection",
            CommandKind::GetTuningParams => "get_tuning_params",
            CommandKind::SetDevicePin => "set_device_pin",
            CommandKind::GetCustomVars => "get_custom_vars",
            CommandKind::SendTelemetryRequest => "send_telemetry_request",
            CommandKind::SendBinaryRequest => "send_binary_request",
            CommandKind::FactoryReset => "factory_reset",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CommandKind {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        CommandKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| CodecError::UnknownKind(s.to_string()))
    }
}

// ============================================================================
// Field Specs
// ============================================================================

/// What to do with text longer than a fixed-size text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    /// Cut at the last character boundary that fits.
    Truncate,
    /// Fail with `InvalidArgument`.
    Reject,
}

/// How a single field is laid out on the wire.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldEncoding {
    /// Literal bytes; consumes no argument.
    Constant(&'static [u8]),
    /// One unsigned byte.
    U8,
    /// `0x01` when set, nothing at all when clear.
    Flag,
    /// 4-byte little-endian unsigned integer.
    U32Le,
    /// Real value times `scale`, truncated toward zero, 4-byte LE signed.
    ScaledI32Le { scale: f64 },
    /// Real value times `scale`, truncated toward zero, 4-byte LE unsigned.
    ScaledU32Le { scale: f64 },
    /// UTF-8 text appended verbatim with no terminator.
    Text,
    /// UTF-8 text of at most `max_len` bytes, zero-padded to `width`.
    PaddedText {
        width: usize,
        max_len: usize,
        overflow: Overflow,
    },
    /// First 6 bytes of a public key.
    KeyPrefix,
    /// Public key (or prefix of one) zero-padded to 32 bytes.
    Identity,
    /// Exactly `width` raw bytes.
    Raw { width: usize },
    /// Raw bytes appended verbatim.
    Bytes,
}

impl FieldEncoding {
    /// Encoded width in bytes, or `None` for variable-length fields.
    pub fn width(&self) -> Option<usize> {
        match self {
            FieldEncoding::Constant(bytes) => Some(bytes.len()),
            FieldEncoding::U8 => Some(1),
            FieldEncoding::Flag => None,
            FieldEncoding::U32Le
            | FieldEncoding::ScaledI32Le { .. }
            | FieldEncoding::ScaledU32Le { .. } => Some(4),
            FieldEncoding::Text | FieldEncoding::Bytes => None,
            FieldEncoding::PaddedText { width, .. } => Some(*width),
            FieldEncoding::KeyPrefix => Some(PUB_KEY_PREFIX_SIZE),
            FieldEncoding::Identity => Some(PUB_KEY_SIZE),
            FieldEncoding::Raw { width } => Some(*width),
        }
    }

    /// Whether the field consumes a caller-supplied argument.
    pub fn takes_argument(&self) -> bool {
        !matches!(self, FieldEncoding::Constant(_))
    }
}

/// One named field in a command layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Semantic name, used in error messages.
    pub name: &'static str,
    /// Wire encoding.
    pub encoding: FieldEncoding,
}

/// Layout of one command kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommandLayout {
    /// Command this row describes.
    pub kind: CommandKind,
    /// Leading command code.
    pub opcode: u8,
    /// Sub-opcode written right after the opcode, if any.
    pub variant: Option<u8>,
    /// Fields in wire order.
    pub fields: &'static [FieldSpec],
}

impl CommandLayout {
    /// Number of caller-supplied arguments this layout consumes.
    pub fn arity(&self) -> usize {
        self.fields
            .iter()
            .filter(|f| f.encoding.takes_argument())
            .count()
    }

    /// Frame length when every field is fixed-width, `None` otherwise.
    pub fn fixed_len(&self) -> Option<usize> {
        let header = 1 + usize::from(self.variant.is_some());
        self.fields
            .iter()
            .try_fold(header, |acc, f| f.encoding.width().map(|w| acc + w))
    }

    /// The opcode bytes (opcode plus variant) as written on the wire.
    pub fn header(&self) -> Vec<u8> {
        let mut header = vec![self.opcode];
        header.extend(self.variant);
        header
    }
}

macro_rules! field {
    ($name:expr, $encoding:expr $(,)?) => {
        FieldSpec {
            name: $name,
            encoding: $encoding,
        }
    };
}

const fn command(
    kind: CommandKind,
    opcode: u8,
    variant: Option<u8>,
    fields: &'static [FieldSpec],
) -> CommandLayout {
    CommandLayout {
        kind,
        opcode,
        variant,
        fields,
    }
}

const TIMESTAMP: FieldSpec = field!("timestamp", FieldEncoding::U32Le);
const DESTINATION_PREFIX: FieldSpec = field!("destination", FieldEncoding::KeyPrefix);
const DESTINATION: FieldSpec = field!("destination", FieldEncoding::Identity);

/// Micro-degrees per degree.
const COORD_SCALE: f64 = 1_000_000.0;
/// kHz per MHz.
const RADIO_SCALE: f64 = 1000.0;

static COMMAND_LAYOUTS: &[CommandLayout] = &[
    command(
        CommandKind::AppStart,
        CMD_APP_START,
        Some(APP_PROTOCOL_VERSION),
        &[
            field!("reserved", FieldEncoding::Constant(b"      ")),
            field!(
                "client_id",
                FieldEncoding::PaddedText {
                    width: CLIENT_ID_SIZE,
                    max_len: CLIENT_ID_SIZE,
                    overflow: Overflow::Truncate,
                },
            ),
        ],
    ),
    command(
        CommandKind::DeviceQuery,
        CMD_DEVICE_QUERY,
        Some(APP_PROTOCOL_VERSION),
        &[],
    ),
    command(CommandKind::GetBattery, CMD_GET_BATT_AND_STORAGE, None, &[]),
    command(CommandKind::GetTime, CMD_GET_DEVICE_TIME, None, &[]),
    command(CommandKind::SetTime, CMD_SET_DEVICE_TIME, None, &[TIMESTAMP]),
    command(
        CommandKind::SetName,
        CMD_SET_ADVERT_NAME,
        None,
        &[field!("name", FieldEncoding::Text)],
    ),
    command(
        CommandKind::SetCoords,
        CMD_SET_ADVERT_LATLON,
        None,
        &[
            field!("latitude", FieldEncoding::ScaledI32Le { scale: COORD_SCALE }),
            field!("longitude", FieldEncoding::ScaledI32Le { scale: COORD_SCALE }),
            field!("altitude", FieldEncoding::Constant(&[0; 4])),
        ],
    ),
    command(
        CommandKind::SetTxPower,
        CMD_SET_RADIO_TX_POWER,
        None,
        &[field!("power", FieldEncoding::U32Le)],
    ),
    command(
        CommandKind::SetRadio,
        CMD_SET_RADIO_PARAMS,
        None,
        &[
            field!("frequency", FieldEncoding::ScaledU32Le { scale: RADIO_SCALE }),
            field!("bandwidth", FieldEncoding::ScaledU32Le { scale: RADIO_SCALE }),
            field!("spreading_factor", FieldEncoding::U8),
            field!("coding_rate", FieldEncoding::U8),
        ],
    ),
    command(
        CommandKind::SendAdvertisement,
        CMD_SEND_SELF_ADVERT,
        None,
        &[field!("flood", FieldEncoding::Flag)],
    ),
    command(
        CommandKind::Reboot,
        CMD_REBOOT,
        None,
        &[field!("confirm", FieldEncoding::Constant(b"reboot"))],
    ),
    command(CommandKind::GetContacts, CMD_GET_CONTACTS, None, &[]),
    command(CommandKind::GetMessage, CMD_SYNC_NEXT_MESSAGE, None, &[]),
    command(
        CommandKind::SendMessage,
        CMD_SEND_TXT_MSG,
        Some(TXT_TYPE_PLAIN),
        &[
            field!("attempt", FieldEncoding::U8),
            TIMESTAMP,
            DESTINATION_PREFIX,
            field!("text", FieldEncoding::Text),
        ],
    ),
    command(
        CommandKind::SendCommand,
        CMD_SEND_TXT_MSG,
        Some(TXT_TYPE_CLI_DATA),
        &[
            field!("attempt", FieldEncoding::Constant(&[0])),
            TIMESTAMP,
            DESTINATION_PREFIX,
            field!("command", FieldEncoding::Text),
        ],
    ),
    command(
        CommandKind::SendChannelMessage,
        CMD_SEND_CHANNEL_TXT_MSG,
        Some(TXT_TYPE_PLAIN),
        &[
            field!("channel", FieldEncoding::U8),
            TIMESTAMP,
            field!("text", FieldEncoding::Text),
        ],
    ),
    command(
        CommandKind::SendLogin,
        CMD_SEND_LOGIN,
        None,
        &[DESTINATION, field!("password", FieldEncoding::Text)],
    ),
    command(CommandKind::SendLogout, CMD_LOGOUT, None, &[DESTINATION]),
    command(
        CommandKind::SendStatusRequest,
        CMD_SEND_STATUS_REQ,
        None,
        &[DESTINATION],
    ),
    command(
        CommandKind::GetChannel,
        CMD_GET_CHANNEL,
        None,
        &[field!("index", FieldEncoding::U8)],
    ),
    command(
        CommandKind::SetChannel,
        CMD_SET_CHANNEL,
        None,
        &[
            field!("index", FieldEncoding::U8),
            // Last byte stays zero so firmware always sees a terminated name.
            field!(
                "name",
                FieldEncoding::PaddedText {
                    width: CHANNEL_NAME_SIZE,
                    max_len: CHANNEL_NAME_SIZE - 1,
                    overflow: Overflow::Truncate,
                },
            ),
            field!(
                "secret",
                FieldEncoding::Raw {
                    width: CHANNEL_SECRET_SIZE,
                },
            ),
        ],
    ),
    command(
        CommandKind::GetStats,
        CMD_GET_STATS,
        None,
        &[field!("stats_type", FieldEncoding::U8)],
    ),
    command(
        CommandKind::GetSelfTelemetry,
        CMD_SEND_TELEMETRY_REQ,
        None,
        &[field!("reserved", FieldEncoding::Constant(&[0; 3]))],
    ),
    command(
        CommandKind::ExportPrivateKey,
        CMD_EXPORT_PRIVATE_KEY,
        None,
        &[],
    ),
    command(CommandKind::SignStart, CMD_SIGN_START, None, &[]),
    command(CommandKind::SignFinish, CMD_SIGN_FINISH, None, &[]),
    command(
        CommandKind::PathDiscovery,
        CMD_SEND_PATH_DISCOVERY_REQ,
        Some(PATH_DISCOVERY_RESERVED),
        &[DESTINATION],
    ),
    command(
        CommandKind::SendTrace,
        CMD_SEND_TRACE_PATH,
        None,
        &[
            field!("tag", FieldEncoding::U32Le),
            field!("auth", FieldEncoding::U32Le),
            field!("flags", FieldEncoding::U8),
            field!("path", FieldEncoding::Bytes),
        ],
    ),
    command(
        CommandKind::SignData,
        CMD_SIGN_DATA,
        None,
        &[field!("data", FieldEncoding::Bytes)],
    ),
    command(
        CommandKind::ImportPrivateKey,
        CMD_IMPORT_PRIVATE_KEY,
        None,
        &[field!(
            "identity",
            FieldEncoding::Raw {
                width: IDENTITY_SIZE,
            },
        )],
    ),
    command(
        CommandKind::RemoveContact,
        CMD_REMOVE_CONTACT,
        None,
        &[DESTINATION],
    ),
    command(CommandKind::ResetPath, CMD_RESET_PATH, None, &[DESTINATION]),
    command(
        CommandKind::HasConnection,
        CMD_HAS_CONNECTION,
        None,
        &[DESTINATION],
    ),
    command(
        CommandKind::GetTuningParams,
        CMD_GET_TUNING_PARAMS,
        None,
        &[],
    ),
    command(
        CommandKind::SetDevicePin,
        CMD_SET_DEVICE_PIN,
        None,
        &[field!("pin", FieldEncoding::U32Le)],
    ),
    command(CommandKind::GetCustomVars, CMD_GET_CUSTOM_VARS, None, &[]),
    command(
        CommandKind::SendTelemetryRequest,
        CMD_SEND_TELEMETRY_REQ,
        None,
        // 3 reserved bytes plus one pad byte, key at offset 5.
        &[field!("reserved", FieldEncoding::Constant(&[0; 4])), DESTINATION],
    ),
    command(
        CommandKind::SendBinaryRequest,
        CMD_SEND_BINARY_REQ,
        None,
        &[DESTINATION, field!("data", FieldEncoding::Bytes)],
    ),
    command(
        CommandKind::FactoryReset,
        CMD_FACTORY_RESET,
        None,
        &[field!("confirm", FieldEncoding::Constant(b"reset"))],
    ),
];

/// Look up the layout for a command kind.
pub fn command_layout(kind: CommandKind) -> Result<&'static CommandLayout> {
    COMMAND_LAYOUTS
        .iter()
        .find(|layout| layout.kind == kind)
        .ok_or_else(|| CodecError::UnknownKind(kind.name().to_string()))
}

/// All command layouts, in registry order.
pub fn command_layouts() -> &'static [CommandLayout] {
    COMMAND_LAYOUTS
}

// ============================================================================
// Sensor Kinds
// ============================================================================

/// Cayenne LPP sensor types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorKind {
    DigitalInput,
    DigitalOutput,
    AnalogInput,
    AnalogOutput,
    Illuminance,
    Presence,
    Temperature,
    Humidity,
    Accelerometer,
    Barometer,
    Gyrometer,
    Gps,
}

impl SensorKind {
    /// Every sensor kind, in registry order.
    pub const ALL: [SensorKind; 12] = [
        SensorKind::DigitalInput,
        SensorKind::DigitalOutput,
        SensorKind::AnalogInput,
        SensorKind::AnalogOutput,
        SensorKind::Illuminance,
        SensorKind::Presence,
        SensorKind::Temperature,
        SensorKind::Humidity,
        SensorKind::Accelerometer,
        SensorKind::Barometer,
        SensorKind::Gyrometer,
        SensorKind::Gps,
    ];

    /// Snake-case name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            SensorKind::DigitalInput => "digital_input",
            SensorKind::DigitalOutput => "digital_output",
            SensorKind::AnalogInput => "analog_input",
            SensorKind::AnalogOutput => "analog_output",
            SensorKind::Illuminance => "illuminance",
            SensorKind::Presence => "presence",
            SensorKind::Temperature => "temperature",
            SensorKind::Humidity => "humidity",
            SensorKind::Accelerometer => "accelerometer",
            SensorKind::Barometer => "barometer",
            SensorKind::Gyrometer => "gyrometer",
            SensorKind::Gps => "gps",
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SensorKind {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        SensorKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| CodecError::UnsupportedSensorKind(s.to_string()))
    }
}

impl TryFrom<u8> for SensorKind {
    type Error = CodecError;

    /// Resolve a Cayenne type code.
    fn try_from(code: u8) -> Result<Self> {
        SENSOR_LAYOUTS
            .iter()
            .find(|layout| layout.type_code == code)
            .map(|layout| layout.kind)
            .ok_or_else(|| CodecError::UnsupportedSensorKind(format!("type 0x{:02X}", code)))
    }
}

// ============================================================================
// Sensor Layouts
// ============================================================================

/// How a scaled value is brought to an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    /// Toward zero.
    Truncate,
    /// To nearest, halves away from zero.
    Nearest,
}

/// One numeric component of an LPP value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentSpec {
    /// Component name, used in error messages.
    pub name: &'static str,
    /// Big-endian width in bytes (1..=4).
    pub width: usize,
    /// Two's complement when true.
    pub signed: bool,
    /// Multiplier applied before rounding.
    pub scale: f64,
    /// Scaled value to integer rule.
    pub rounding: Rounding,
}

impl ComponentSpec {
    /// Inclusive range of encodable scaled integers.
    pub fn range(&self) -> (i64, i64) {
        let bits = (self.width * 8) as u32;
        if self.signed {
            (-(1i64 << (bits - 1)), (1i64 << (bits - 1)) - 1)
        } else {
            (0, (1i64 << bits) - 1)
        }
    }
}

/// Layout of one sensor type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorLayout {
    /// Sensor this row describes.
    pub kind: SensorKind,
    /// Cayenne type byte.
    pub type_code: u8,
    /// Components in wire order.
    pub components: &'static [ComponentSpec],
}

impl SensorLayout {
    /// Entry length including channel and type bytes.
    pub fn entry_len(&self) -> usize {
        2 + self.components.iter().map(|c| c.width).sum::<usize>()
    }
}

macro_rules! component {
    ($name:expr, $width:expr, $signed:expr, $scale:expr $(,)?) => {
        component!($name, $width, $signed, $scale, Rounding::Truncate)
    };
    ($name:expr, $width:expr, $signed:expr, $scale:expr, $rounding:expr $(,)?) => {
        ComponentSpec {
            name: $name,
            width: $width,
            signed: $signed,
            scale: $scale,
            rounding: $rounding,
        }
    };
}

const fn sensor(
    kind: SensorKind,
    type_code: u8,
    components: &'static [ComponentSpec],
) -> SensorLayout {
    SensorLayout {
        kind,
        type_code,
        components,
    }
}

static SENSOR_LAYOUTS: &[SensorLayout] = &[
    sensor(
        SensorKind::DigitalInput,
        LPP_DIGITAL_INPUT,
        &[component!("value", 1, false, 1.0)],
    ),
    sensor(
        SensorKind::DigitalOutput,
        LPP_DIGITAL_OUTPUT,
        &[component!("value", 1, false, 1.0)],
    ),
    sensor(
        SensorKind::AnalogInput,
        LPP_ANALOG_INPUT,
        &[component!("value", 2, true, 100.0)],
    ),
    sensor(
        SensorKind::AnalogOutput,
        LPP_ANALOG_OUTPUT,
        &[component!("value", 2, true, 100.0)],
    ),
    sensor(
        SensorKind::Illuminance,
        LPP_ILLUMINANCE,
        &[component!("value", 2, false, 1.0)],
    ),
    sensor(
        SensorKind::Presence,
        LPP_PRESENCE,
        &[component!("value", 1, false, 1.0)],
    ),
    sensor(
        SensorKind::Temperature,
        LPP_TEMPERATURE,
        &[component!("value", 2, true, 10.0)],
    ),
    sensor(
        SensorKind::Humidity,
        LPP_HUMIDITY,
        &[component!("value", 1, false, 2.0)],
    ),
    sensor(
        SensorKind::Accelerometer,
        LPP_ACCELEROMETER,
        &[
            component!("x", 2, true, 1000.0),
            component!("y", 2, true, 1000.0),
            component!("z", 2, true, 1000.0),
        ],
    ),
    sensor(
        SensorKind::Barometer,
        LPP_BAROMETER,
        &[component!("value", 2, false, 10.0, Rounding::Nearest)],
    ),
    sensor(
        SensorKind::Gyrometer,
        LPP_GYROMETER,
        &[
            component!("x", 2, true, 100.0),
            component!("y", 2, true, 100.0),
            component!("z", 2, true, 100.0),
        ],
    ),
    sensor(
        SensorKind::Gps,
        LPP_GPS,
        &[
            component!("latitude", 3, true, 10_000.0),
            component!("longitude", 3, true, 10_000.0),
            component!("altitude", 3, true, 100.0),
        ],
    ),
];

/// Look up the layout for a sensor kind.
pub fn sensor_layout(kind: SensorKind) -> Result<&'static SensorLayout> {
    SENSOR_LAYOUTS
        .iter()
        .find(|layout| layout.kind == kind)
        .ok_or_else(|| CodecError::UnsupportedSensorKind(kind.name().to_string()))
}

/// All sensor layouts, in registry order.
pub fn sensor_layouts() -> &'static [SensorLayout] {
    SENSOR_LAYOUTS
}
