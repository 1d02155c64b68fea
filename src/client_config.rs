//local shortcuts
use crate::*;

//third-party shortcuts
use uuid::Uuid;

//standard shortcuts
use std::collections::HashMap;
use std::time::Duration;

//-------------------------------------------------------------------------------------------------------------------

/// Configuration for one pub/sub client.
///
/// Owns every tunable that parameterizes the client's connection behavior. Consumers (the transport layer, the
/// subscribe loop, the presence heartbeat scheduler) read values through the getters; the owning client may adjust
/// values through the chainable setters at any time.
///
/// A config holds plain mutable state with no internal synchronization. Mutation requires `&mut`, so to share one
/// across threads either guard it with a lock or hand out [`Clone`]d snapshots.
///
/// Setters never validate: garbage in, garbage stored. Enforcing required keys and sane values is the calling
/// layer's job.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "bevy", derive(bevy_ecs::system::Resource))]
pub struct ClientConfig
{
    /// key identifying the data-stream tenant for subscribe/publish calls
    subscribe_key: String,
    /// key for publish calls
    publish_key: Option<String>,
    /// secret key for server-side access-management calls; never send to untrusted parties
    secret_key: String,
    /// auth key passed on access-controlled requests
    auth_key: String,
    /// symmetric key consumed by the cipher layer
    cipher_key: Option<String>,
    /// unique id for this config's lifetime, generated at construction
    instance_id: Uuid,
    /// identifies the device/user for presence and billing
    client_uuid: Option<String>,
    /// extra query parameters merged into every request
    base_params: HashMap<String, String>,
    /// attach the instance id to outgoing requests
    use_instance_id: bool,
    /// attach a fresh unique id to each individual request
    use_request_id: bool,
    /// disable emission of presence leave events
    suppress_leave_events: bool,
    /// use the secure transport scheme
    ssl_enabled: bool,
    /// network endpoint host
    custom_origin: String,
    /// max wait for the long-poll subscribe call
    subscribe_request_timeout: Duration,
    /// max wait for non-subscribe (publish/history/etc.) calls
    transactional_request_timeout: Duration,
    /// use a fire-and-forget unload-safe transport for the final leave signal
    use_send_beacon: bool,
    /// server-side window before a silent client is declared gone
    presence_timeout: Duration,
    /// how often the client proactively announces its presence
    presence_announce_interval: Duration,
}

impl ClientConfig
{
    /// Makes a new config from a setup bundle.
    ///
    /// Omitted knobs fall back to their defaults and a fresh instance id is generated. Construction never fails
    /// and never validates.
    ///
    /// The announce interval is derived from the presence timeout unless the setup supplies one explicitly, in
    /// which case the explicit value wins. This only holds for construction: a later
    /// [`set_presence_timeout`](Self::set_presence_timeout) call rederives the interval.
    pub fn new(setup: ClientSetup) -> ClientConfig
    {
        let instance_id = Uuid::new_v4();
        let presence_timeout = setup.presence_timeout.unwrap_or(DEFAULT_PRESENCE_TIMEOUT);
        let presence_announce_interval = setup.presence_announce_interval
            .unwrap_or_else(|| derive_announce_interval(presence_timeout));

        tracing::debug!(%instance_id, "created new client config");

        ClientConfig{
                subscribe_key                 : setup.subscribe_key,
                publish_key                   : setup.publish_key,
                secret_key                    : setup.secret_key.unwrap_or_default(),
                auth_key                      : setup.auth_key.unwrap_or_default(),
                cipher_key                    : setup.cipher_key,
                instance_id,
                client_uuid                   : setup.uuid,
                base_params                   : setup.params.unwrap_or_default(),
                use_instance_id               : setup.use_instance_id.unwrap_or(false),
                use_request_id                : setup.use_request_id.unwrap_or(false),
                suppress_leave_events         : setup.suppress_leave_events.unwrap_or(false),
                ssl_enabled                   : setup.ssl.unwrap_or(false),
                custom_origin                 : setup.origin.unwrap_or_else(|| String::from(DEFAULT_ORIGIN)),
                subscribe_request_timeout     : setup.subscribe_request_timeout.unwrap_or(DEFAULT_SUBSCRIBE_TIMEOUT),
                transactional_request_timeout : setup.transactional_request_timeout
                    .unwrap_or(DEFAULT_TRANSACTION_TIMEOUT),
                use_send_beacon               : setup.use_send_beacon.unwrap_or(true),
                presence_timeout,
                presence_announce_interval,
            }
    }

    /// Access the subscribe key.
    pub fn subscribe_key(&self) -> &str
    {
        &self.subscribe_key
    }

    /// Set the subscribe key.
    pub fn set_subscribe_key(&mut self, key: String) -> &mut Self
    {
        self.subscribe_key = key;
        self
    }

    /// Access the publish key, if any.
    pub fn publish_key(&self) -> Option<&str>
    {
        self.publish_key.as_deref()
    }

    /// Set or clear the publish key.
    pub fn set_publish_key(&mut self, key: Option<String>) -> &mut Self
    {
        self.publish_key = key;
        self
    }

    /// Access the secret key. Empty when unset.
    pub fn secret_key(&self) -> &str
    {
        &self.secret_key
    }

    /// Set the secret key.
    pub fn set_secret_key(&mut self, key: String) -> &mut Self
    {
        self.secret_key = key;
        self
    }

    /// Access the auth key. Empty when unset.
    pub fn auth_key(&self) -> &str
    {
        &self.auth_key
    }

    /// Set the auth key.
    pub fn set_auth_key(&mut self, key: String) -> &mut Self
    {
        self.auth_key = key;
        self
    }

    /// Access the cipher key, if any.
    pub fn cipher_key(&self) -> Option<&str>
    {
        self.cipher_key.as_deref()
    }

    /// Set or clear the cipher key.
    pub fn set_cipher_key(&mut self, key: Option<String>) -> &mut Self
    {
        self.cipher_key = key;
        self
    }

    /// Access this config's instance id.
    ///
    /// Generated when the config is constructed; distinguishes concurrent SDK instances independently of the
    /// user-facing uuid. There is no setter: the id is stable for the config's lifetime.
    pub fn instance_id(&self) -> Uuid
    {
        self.instance_id
    }

    /// Access the client uuid, if any.
    pub fn client_uuid(&self) -> Option<&str>
    {
        self.client_uuid.as_deref()
    }

    /// Set or clear the client uuid.
    pub fn set_client_uuid(&mut self, uuid: Option<String>) -> &mut Self
    {
        self.client_uuid = uuid;
        self
    }

    /// Access the base query parameters merged into every request.
    pub fn base_params(&self) -> &HashMap<String, String>
    {
        &self.base_params
    }

    /// Replace the base query parameters.
    pub fn set_base_params(&mut self, params: HashMap<String, String>) -> &mut Self
    {
        self.base_params = params;
        self
    }

    /// Check if the instance id is attached to outgoing requests.
    pub fn is_instance_id_enabled(&self) -> bool
    {
        self.use_instance_id
    }

    /// Set whether the instance id is attached to outgoing requests.
    pub fn set_instance_id_enabled(&mut self, enabled: bool) -> &mut Self
    {
        self.use_instance_id = enabled;
        self
    }

    /// Check if a fresh unique id is attached to each individual request.
    pub fn is_request_id_enabled(&self) -> bool
    {
        self.use_request_id
    }

    /// Set whether a fresh unique id is attached to each individual request.
    pub fn set_request_id_enabled(&mut self, enabled: bool) -> &mut Self
    {
        self.use_request_id = enabled;
        self
    }

    /// Check if presence leave events are suppressed.
    pub fn is_suppressing_leave_events(&self) -> bool
    {
        self.suppress_leave_events
    }

    /// Set whether presence leave events are suppressed.
    pub fn set_suppress_leave_events(&mut self, suppress: bool) -> &mut Self
    {
        self.suppress_leave_events = suppress;
        self
    }

    /// Check if the secure transport scheme is selected.
    pub fn is_ssl_enabled(&self) -> bool
    {
        self.ssl_enabled
    }

    /// Set whether the secure transport scheme is selected.
    pub fn set_ssl_enabled(&mut self, enabled: bool) -> &mut Self
    {
        self.ssl_enabled = enabled;
        self
    }

    /// Access the network endpoint host.
    pub fn origin(&self) -> &str
    {
        &self.custom_origin
    }

    /// Set the network endpoint host.
    pub fn set_origin(&mut self, origin: String) -> &mut Self
    {
        self.custom_origin = origin;
        self
    }

    /// Access the max wait for the long-poll subscribe call.
    pub fn subscribe_timeout(&self) -> Duration
    {
        self.subscribe_request_timeout
    }

    /// Set the max wait for the long-poll subscribe call.
    pub fn set_subscribe_timeout(&mut self, timeout: Duration) -> &mut Self
    {
        self.subscribe_request_timeout = timeout;
        self
    }

    /// Access the max wait for non-subscribe calls.
    pub fn transaction_timeout(&self) -> Duration
    {
        self.transactional_request_timeout
    }

    /// Set the max wait for non-subscribe calls.
    pub fn set_transaction_timeout(&mut self, timeout: Duration) -> &mut Self
    {
        self.transactional_request_timeout = timeout;
        self
    }

    /// Check if the unload-safe transport is used for the final leave signal.
    pub fn is_send_beacon_enabled(&self) -> bool
    {
        self.use_send_beacon
    }

    /// Set whether the unload-safe transport is used for the final leave signal.
    pub fn set_send_beacon_enabled(&mut self, enabled: bool) -> &mut Self
    {
        self.use_send_beacon = enabled;
        self
    }

    /// Access the presence timeout.
    pub fn presence_timeout(&self) -> Duration
    {
        self.presence_timeout
    }

    /// Set the presence timeout and rederive the announce interval from it.
    ///
    /// This is the one setter with a side effect beyond its own field: every call overwrites the announce
    /// interval with [`derive_announce_interval`] of the new timeout, including any interval previously pinned
    /// via [`set_presence_announce_interval`](Self::set_presence_announce_interval).
    pub fn set_presence_timeout(&mut self, timeout: Duration) -> &mut Self
    {
        self.presence_timeout = timeout;
        self.presence_announce_interval = derive_announce_interval(timeout);
        self
    }

    /// Access the presence announce interval.
    pub fn presence_announce_interval(&self) -> Duration
    {
        self.presence_announce_interval
    }

    /// Set the presence announce interval directly.
    ///
    /// The value pins until the next [`set_presence_timeout`](Self::set_presence_timeout) call rederives it; it
    /// is never recomputed on its own.
    pub fn set_presence_announce_interval(&mut self, interval: Duration) -> &mut Self
    {
        self.presence_announce_interval = interval;
        self
    }
}

impl Default for ClientConfig
{
    /// Equivalent to [`ClientConfig::new`] with an empty setup.
    fn default() -> ClientConfig
    {
        ClientConfig::new(ClientSetup::default())
    }
}

//-------------------------------------------------------------------------------------------------------------------
