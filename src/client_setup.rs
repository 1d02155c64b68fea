//local shortcuts

//third-party shortcuts
use serde::{Serialize, Deserialize};
use serde_with::{serde_as, DurationMilliSeconds, DurationSeconds};

//standard shortcuts
use std::collections::HashMap;
use std::time::Duration;

//-------------------------------------------------------------------------------------------------------------------

/// Options bundle for making a [`ClientConfig`](crate::ClientConfig).
///
/// Every knob is optional; omitted knobs fall back to the documented defaults when the config is constructed.
/// Optional knobs are `Option`s rather than baked-in defaults so the config constructor can tell "omitted" apart
/// from an explicit value (see [`ClientConfig::new`](crate::ClientConfig::new) for where that matters).
///
/// Serializes with camelCase keys, so a setup can be read straight from a JSON settings bundle. Timeouts ride
/// as bare integers: milliseconds for the request timeouts, seconds for the presence fields.
#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientSetup
{
    /// Key identifying the data-stream tenant for subscribe/publish calls.
    ///
    /// Required by the wider SDK to do anything useful, but never validated here. Defaults to empty.
    pub subscribe_key: String,
    /// Key for publish calls. Only needed by clients that publish.
    pub publish_key: Option<String>,
    /// Secret key for server-side access-management calls.
    ///
    /// Only use on trusted hosts; never expose it to end-user devices.
    pub secret_key: Option<String>,
    /// Auth key passed on access-controlled requests.
    pub auth_key: Option<String>,
    /// Symmetric key for payload encryption/decryption, consumed by the cipher layer.
    pub cipher_key: Option<String>,
    /// Identifies the device/user for presence and billing.
    pub uuid: Option<String>,
    /// Extra query parameters merged into every request.
    pub params: Option<HashMap<String, String>>,
    /// Attach this client's instance id to outgoing requests. Defaults to `false`.
    pub use_instance_id: Option<bool>,
    /// Attach a fresh unique id to each individual request. Defaults to `false`.
    pub use_request_id: Option<bool>,
    /// Disable emission of presence leave events. Defaults to `false`.
    pub suppress_leave_events: Option<bool>,
    /// Use the secure transport scheme. Defaults to `false`.
    pub ssl: Option<bool>,
    /// Network endpoint host. Defaults to [`DEFAULT_ORIGIN`](crate::DEFAULT_ORIGIN).
    pub origin: Option<String>,
    /// Max wait for non-subscribe (publish/history/etc.) calls, in milliseconds on the wire.
    /// Defaults to 15 seconds.
    #[serde_as(as = "Option<DurationMilliSeconds<u64>>")]
    pub transactional_request_timeout: Option<Duration>,
    /// Max wait for the long-poll subscribe call, in milliseconds on the wire. Defaults to 310 seconds.
    #[serde_as(as = "Option<DurationMilliSeconds<u64>>")]
    pub subscribe_request_timeout: Option<Duration>,
    /// Use a fire-and-forget unload-safe transport for the final leave signal. Defaults to `true`.
    pub use_send_beacon: Option<bool>,
    /// Server-side window before a silent client is declared gone, in seconds on the wire.
    /// Defaults to 300 seconds.
    #[serde_as(as = "Option<DurationSeconds<u64>>")]
    pub presence_timeout: Option<Duration>,
    /// How often the client proactively announces its presence, in seconds on the wire.
    ///
    /// When omitted this is derived from the presence timeout; supplying it explicitly overrides the
    /// derived value.
    #[serde_as(as = "Option<DurationSeconds<u64>>")]
    pub presence_announce_interval: Option<Duration>,
}

//-------------------------------------------------------------------------------------------------------------------
