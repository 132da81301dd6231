//! Protocol constants
//!
//! Command codes, sub-opcodes and Cayenne LPP type codes. These are only
//! names; the layout registry is what binds them to a frame layout.

// ============================================================================
// Command Codes (host → firmware)
// ============================================================================

/// Initial handshake command - starts the app connection.
pub const CMD_APP_START: u8 = 0x01;
/// Send a text message to a contact.
pub const CMD_SEND_TXT_MSG: u8 = 0x02;
/// Send a text message to a channel.
pub const CMD_SEND_CHANNEL_TXT_MSG: u8 = 0x03;
/// Get the list of contacts.
pub const CMD_GET_CONTACTS: u8 = 0x04;
/// Get the current device time.
pub const CMD_GET_DEVICE_TIME: u8 = 0x05;
/// Set the device time.
pub const CMD_SET_DEVICE_TIME: u8 = 0x06;
/// Send a self-advertisement packet.
pub const CMD_SEND_SELF_ADVERT: u8 = 0x07;
/// Set the advertisement name.
pub const CMD_SET_ADVERT_NAME: u8 = 0x08;
/// Sync the next message from the offline queue.
pub const CMD_SYNC_NEXT_MESSAGE: u8 = 0x0A;
/// Set radio parameters (frequency, bandwidth, SF, CR).
pub const CMD_SET_RADIO_PARAMS: u8 = 0x0B;
/// Set radio TX power.
pub const CMD_SET_RADIO_TX_POWER: u8 = 0x0C;
/// Reset the path to a contact (force re-discovery).
pub const CMD_RESET_PATH: u8 = 0x0D;
/// Set advertisement latitude/longitude.
pub const CMD_SET_ADVERT_LATLON: u8 = 0x0E;
/// Remove a contact.
pub const CMD_REMOVE_CONTACT: u8 = 0x0F;
/// Reboot the device.
pub const CMD_REBOOT: u8 = 0x13;
/// Get battery voltage and storage info.
pub const CMD_GET_BATT_AND_STORAGE: u8 = 0x14;
/// Query device information.
pub const CMD_DEVICE_QUERY: u8 = 0x16;
/// Export the private key.
pub const CMD_EXPORT_PRIVATE_KEY: u8 = 0x17;
/// Import a private key.
pub const CMD_IMPORT_PRIVATE_KEY: u8 = 0x18;
/// Send login request to a server.
pub const CMD_SEND_LOGIN: u8 = 0x1A;
/// Send status request to a server.
pub const CMD_SEND_STATUS_REQ: u8 = 0x1B;
/// Check if there's an active connection to a contact.
pub const CMD_HAS_CONNECTION: u8 = 0x1C;
/// Logout/disconnect from a server.
pub const CMD_LOGOUT: u8 = 0x1D;
/// Get channel information.
pub const CMD_GET_CHANNEL: u8 = 0x1F;
/// Set channel information.
pub const CMD_SET_CHANNEL: u8 = 0x20;
/// Start signing operation.
pub const CMD_SIGN_START: u8 = 0x21;
/// Provide data for signing.
pub const CMD_SIGN_DATA: u8 = 0x22;
/// Finish signing and get signature.
pub const CMD_SIGN_FINISH: u8 = 0x23;
/// Send trace path packet.
pub const CMD_SEND_TRACE_PATH: u8 = 0x24;
/// Set device PIN code.
pub const CMD_SET_DEVICE_PIN: u8 = 0x25;
/// Send telemetry request (self when no key follows).
pub const CMD_SEND_TELEMETRY_REQ: u8 = 0x27;
/// Get custom variables.
pub const CMD_GET_CUSTOM_VARS: u8 = 0x28;
/// Get tuning parameters.
pub const CMD_GET_TUNING_PARAMS: u8 = 0x2B;
// NOTE: CMD range 44..49 reserved for WiFi operations
/// Send binary request.
pub const CMD_SEND_BINARY_REQ: u8 = 0x32;
/// Factory reset the device.
pub const CMD_FACTORY_RESET: u8 = 0x33;
/// Send path discovery request.
pub const CMD_SEND_PATH_DISCOVERY_REQ: u8 = 0x34;
/// Get statistics (v8+).
pub const CMD_GET_STATS: u8 = 0x38;

// ============================================================================
// Sub-opcodes
// ============================================================================

/// App protocol version sent with CMD_APP_START and CMD_DEVICE_QUERY.
pub const APP_PROTOCOL_VERSION: u8 = 0x03;

/// Plain text message.
pub const TXT_TYPE_PLAIN: u8 = 0;
/// CLI/command data.
pub const TXT_TYPE_CLI_DATA: u8 = 1;

/// Reserved byte preceding the key in CMD_SEND_PATH_DISCOVERY_REQ.
pub const PATH_DISCOVERY_RESERVED: u8 = 0;

// ============================================================================
// Stats Sub-types (for CMD_GET_STATS)
// ============================================================================

/// Core statistics (battery, uptime, queue length).
pub const STATS_TYPE_CORE: u8 = 0;
/// Radio statistics (noise floor, RSSI, air time).
pub const STATS_TYPE_RADIO: u8 = 1;
/// Packet statistics (counts of sent/received).
pub const STATS_TYPE_PACKETS: u8 = 2;

// ============================================================================
// Cayenne LPP Type Codes
// ============================================================================

/// Digital input (1 byte).
pub const LPP_DIGITAL_INPUT: u8 = 0x00;
/// Digital output (1 byte).
pub const LPP_DIGITAL_OUTPUT: u8 = 0x01;
/// Analog input (0.01 signed, 2 bytes).
pub const LPP_ANALOG_INPUT: u8 = 0x02;
/// Analog output (0.01 signed, 2 bytes).
pub const LPP_ANALOG_OUTPUT: u8 = 0x03;
/// Illuminance (1 lux unsigned, 2 bytes).
pub const LPP_ILLUMINANCE: u8 = 0x65;
/// Presence (1 byte).
pub const LPP_PRESENCE: u8 = 0x66;
/// Temperature (0.1 °C signed, 2 bytes).
pub const LPP_TEMPERATURE: u8 = 0x67;
/// Relative humidity (0.5 % unsigned, 1 byte).
pub const LPP_HUMIDITY: u8 = 0x68;
/// Accelerometer (0.001 G signed per axis, 6 bytes).
pub const LPP_ACCELEROMETER: u8 = 0x71;
/// Barometric pressure (0.1 hPa unsigned, 2 bytes).
pub const LPP_BAROMETER: u8 = 0x73;
/// Gyrometer (0.01 °/s signed per axis, 6 bytes).
pub const LPP_GYROMETER: u8 = 0x86;
/// GPS location (lat/lon 0.0001 °, alt 0.01 m, signed 3 bytes each).
pub const LPP_GPS: u8 = 0x88;

// ============================================================================
// Sizes
// ============================================================================

/// Size of a public key (and of the padded identity field) in bytes.
pub const PUB_KEY_SIZE: usize = 32;
/// Size of public key prefix used in direct messages.
pub const PUB_KEY_PREFIX_SIZE: usize = 6;
/// Size of a channel secret.
pub const CHANNEL_SECRET_SIZE: usize = 16;
/// Size of the channel name buffer.
pub const CHANNEL_NAME_SIZE: usize = 32;
/// Size of the client id field in CMD_APP_START.
pub const CLIENT_ID_SIZE: usize = 5;
/// Size of an exported/imported identity (private + public key).
pub const IDENTITY_SIZE: usize = 64;
/// Typical maximum command frame size, used for buffer pre-allocation.
pub const MAX_FRAME_SIZE: usize = 256;
