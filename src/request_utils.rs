//local shortcuts
use crate::*;

//third-party shortcuts
use uuid::Uuid;

//standard shortcuts
use std::collections::HashMap;

//-------------------------------------------------------------------------------------------------------------------

/// Assemble the query parameters for one outgoing request.
///
/// Starts from the config's base params, overlays the per-call params (per-call wins on key collision), then
/// attaches identity parameters according to the config's flags: `instanceid` when the instance id is enabled, and
/// a fresh unique `requestid` when request ids are enabled.
///
/// Pure assembly: the config is only read. Attaching the auth key is left to the caller, since only the caller
/// knows which endpoints are access-controlled.
pub fn prepare_params(config: &ClientConfig, call_params: &HashMap<String, String>) -> HashMap<String, String>
{
    let mut params = config.base_params().clone();
    params.extend(call_params.iter().map(|(key, value)| (key.clone(), value.clone())));

    if config.is_instance_id_enabled()
    {
        params.insert(String::from("instanceid"), config.instance_id().to_string());
    }

    if config.is_request_id_enabled()
    {
        params.insert(String::from("requestid"), Uuid::new_v4().to_string());
    }

    tracing::trace!("prepared request params");
    params
}

//-------------------------------------------------------------------------------------------------------------------

/// Encode query parameters as a percent-encoded query string.
///
/// Pairs are sorted by key so the same parameter map always encodes to the same string.
pub fn encode_query(params: &HashMap<String, String>) -> String
{
    let mut pairs: Vec<(&String, &String)> = params.iter().collect();
    pairs.sort();

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs
    {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

//-------------------------------------------------------------------------------------------------------------------

/// Make the base url for requests: {http, https}://\[origin\].
///
/// The scheme follows the config's SSL flag.
pub fn make_base_url(config: &ClientConfig) -> Result<url::Url, ()>
{
    let scheme = match config.is_ssl_enabled() { true => "https", false => "http" };
    url::Url::parse(format!("{}://{}", scheme, config.origin()).as_str()).map_err(|_| ())
}

//-------------------------------------------------------------------------------------------------------------------
