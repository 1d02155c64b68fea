//local shortcuts

//third-party shortcuts

//standard shortcuts
use std::time::Duration;

//-------------------------------------------------------------------------------------------------------------------
//-------------------------------------------------------------------------------------------------------------------

#[test]
fn setup_from_json()
{
    // keys are camelCase; request timeouts are milliseconds, presence values are seconds
    let setup: simplesub_config::ClientSetup = serde_json::from_str(
            r#"{
                "subscribeKey": "sub",
                "publishKey": "pub",
                "secretKey": "sec",
                "authKey": "auth",
                "cipherKey": "cipher",
                "uuid": "device-9",
                "params": { "tier": "premium" },
                "useInstanceId": true,
                "useRequestId": true,
                "suppressLeaveEvents": true,
                "ssl": true,
                "origin": "pubsub.example.net",
                "transactionalRequestTimeout": 5000,
                "subscribeRequestTimeout": 60000,
                "useSendBeacon": false,
                "presenceTimeout": 200,
                "presenceAnnounceInterval": 50
            }"#
        ).unwrap();

    assert_eq!(setup.subscribe_key, "sub");
    assert_eq!(setup.publish_key, Some(String::from("pub")));
    assert_eq!(setup.secret_key, Some(String::from("sec")));
    assert_eq!(setup.auth_key, Some(String::from("auth")));
    assert_eq!(setup.cipher_key, Some(String::from("cipher")));
    assert_eq!(setup.uuid, Some(String::from("device-9")));
    assert_eq!(setup.params.as_ref().unwrap().get("tier"), Some(&String::from("premium")));
    assert_eq!(setup.use_instance_id, Some(true));
    assert_eq!(setup.use_request_id, Some(true));
    assert_eq!(setup.suppress_leave_events, Some(true));
    assert_eq!(setup.ssl, Some(true));
    assert_eq!(setup.origin, Some(String::from("pubsub.example.net")));
    assert_eq!(setup.transactional_request_timeout, Some(Duration::from_millis(5_000u64)));
    assert_eq!(setup.subscribe_request_timeout, Some(Duration::from_millis(60_000u64)));
    assert_eq!(setup.use_send_beacon, Some(false));
    assert_eq!(setup.presence_timeout, Some(Duration::from_secs(200u64)));
    assert_eq!(setup.presence_announce_interval, Some(Duration::from_secs(50u64)));
}

//-------------------------------------------------------------------------------------------------------------------

#[test]
fn setup_from_sparse_json()
{
    // omitted keys deserialize to unset knobs
    let setup: simplesub_config::ClientSetup =
        serde_json::from_str(r#"{ "subscribeKey": "sub" }"#).unwrap();

    assert_eq!(setup.subscribe_key, "sub");
    assert_eq!(setup.publish_key, None);
    assert_eq!(setup.params, None);
    assert_eq!(setup.use_send_beacon, None);
    assert_eq!(setup.presence_timeout, None);
    assert_eq!(setup.presence_announce_interval, None);

    // an entirely empty bundle is also fine; the subscribe key is required by convention only
    let setup: simplesub_config::ClientSetup = serde_json::from_str(r#"{}"#).unwrap();
    assert_eq!(setup.subscribe_key, "");
}

//-------------------------------------------------------------------------------------------------------------------

#[test]
fn setup_round_trip()
{
    let setup = simplesub_config::ClientSetup{
            subscribe_key    : String::from("sub"),
            ssl              : Some(true),
            presence_timeout : Some(Duration::from_secs(120u64)),
            ..Default::default()
        };

    let json = serde_json::to_string(&setup).unwrap();
    let recovered: simplesub_config::ClientSetup = serde_json::from_str(json.as_str()).unwrap();

    assert_eq!(recovered.subscribe_key, "sub");
    assert_eq!(recovered.ssl, Some(true));
    assert_eq!(recovered.presence_timeout, Some(Duration::from_secs(120u64)));
    assert_eq!(recovered.origin, None);

    // durations serialize as bare integers
    assert!(json.contains(r#""presenceTimeout":120"#));
}

//-------------------------------------------------------------------------------------------------------------------
