//! Wire format tests: event and field names must match the server exactly.

use serde_json::json;
use tictactoe_board::Mark;
use tictactoe_online::{InboundEvent, OutboundEvent, SyncError};

#[test]
fn test_decode_payloadless_events() {
    assert_eq!(
        InboundEvent::decode(r#"{"event":"waiting"}"#).unwrap(),
        InboundEvent::Waiting
    );
    assert_eq!(
        InboundEvent::decode(r#"{"event":"disconnect"}"#).unwrap(),
        InboundEvent::Disconnect
    );
    assert_eq!(
        InboundEvent::decode(r#"{"event":"connect"}"#).unwrap(),
        InboundEvent::Connect
    );
}

#[test]
fn test_decode_payloadless_events_with_empty_or_null_data() {
    assert_eq!(
        InboundEvent::decode(r#"{"event":"disconnect","data":{}}"#).unwrap(),
        InboundEvent::Disconnect
    );
    assert_eq!(
        InboundEvent::decode(r#"{"event":"waiting","data":{}}"#).unwrap(),
        InboundEvent::Waiting
    );
    assert_eq!(
        InboundEvent::decode(r#"{"event":"connect","data":null}"#).unwrap(),
        InboundEvent::Connect
    );
}

#[test]
fn test_decode_payloadless_event_rejects_non_empty_data() {
    let result = InboundEvent::decode(r#"{"event":"disconnect","data":{"reason":"x"}}"#);
    assert!(matches!(result, Err(SyncError::Protocol(_))));
}

#[test]
fn test_decode_match_found() {
    let event = InboundEvent::decode(r#"{"event":"match-found","data":{"room":"r1"}}"#).unwrap();
    assert_eq!(
        event,
        InboundEvent::MatchFound {
            room: "r1".to_string()
        }
    );
    assert_eq!(event.name(), "match-found");
}

#[test]
fn test_decode_game_start_uses_camel_case_opponent_id() {
    let event = InboundEvent::decode(
        r#"{"event":"game-start","data":{"mark":"O","opponentId":"sock-42"}}"#,
    )
    .unwrap();
    assert_eq!(
        event,
        InboundEvent::GameStart {
            mark: Mark::O,
            opponent_id: "sock-42".to_string()
        }
    );
}

#[test]
fn test_decode_opponent_move() {
    let event = InboundEvent::decode(r#"{"event":"opponent-move","data":{"index":8}}"#).unwrap();
    assert_eq!(event, InboundEvent::OpponentMove { index: 8 });
}

#[test]
fn test_decode_rejects_unknown_event() {
    let result = InboundEvent::decode(r#"{"event":"chat","data":{"text":"hi"}}"#);
    assert!(matches!(result, Err(SyncError::Protocol(_))));
}

#[test]
fn test_decode_rejects_bad_mark() {
    let result =
        InboundEvent::decode(r#"{"event":"game-start","data":{"mark":"Z","opponentId":"a"}}"#);
    assert!(matches!(result, Err(SyncError::Protocol(_))));
}

#[test]
fn test_encode_make_move() {
    let frame = OutboundEvent::new_make_move("r1".to_string(), 4)
        .encode()
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&frame).unwrap();
    assert_eq!(
        value,
        json!({"event": "make-move", "data": {"room": "r1", "index": 4}})
    );
}
