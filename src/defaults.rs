//local shortcuts

//third-party shortcuts

//standard shortcuts
use std::time::Duration;

//-------------------------------------------------------------------------------------------------------------------

/// Well-known service origin used when a client setup does not specify one.
pub const DEFAULT_ORIGIN: &str = "pubsub.simplesub.net";

//-------------------------------------------------------------------------------------------------------------------

/// Default timeout for transactional requests (publish, history, etc.). Equals 15 seconds.
pub const DEFAULT_TRANSACTION_TIMEOUT: Duration = Duration::from_millis(15_000u64);

/// Default timeout for the long-poll subscribe request. Equals 310 seconds.
pub const DEFAULT_SUBSCRIBE_TIMEOUT: Duration = Duration::from_millis(310_000u64);

/// Default presence timeout: how long the server waits before declaring a silent client gone.
/// Equals 300 seconds.
pub const DEFAULT_PRESENCE_TIMEOUT: Duration = Duration::from_secs(300u64);

//-------------------------------------------------------------------------------------------------------------------

/// Derive a presence announce interval from a presence timeout: `(timeout / 2) - 1 second`.
///
/// Announcing at half the timeout minus a small margin keeps a healthy client comfortably inside the server's
/// presence window. Saturates at zero for sub-2-second timeouts.
pub fn derive_announce_interval(presence_timeout: Duration) -> Duration
{
    (presence_timeout / 2).saturating_sub(Duration::from_secs(1u64))
}

//-------------------------------------------------------------------------------------------------------------------
