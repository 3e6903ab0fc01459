/// Integration tests for the JSON-RPC server
///
/// These tests require:
/// 1. The server running on localhost:8000
/// 2. Network access to the upstream provider
///
/// To run: cargo test --package crypto-rpc-server --test integration_test -- --ignored --nocapture
use serde_json::json;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpStream;
use std::time::Duration;

fn send_request(request: serde_json::Value) -> serde_json::Value {
    let mut stream = TcpStream::connect("127.0.0.1:8000")
        .expect("Failed to connect to server. Is it running?");
    stream
        .set_read_timeout(Some(Duration::from_secs(30)))
        .unwrap();

    let request_json = serde_json::to_string(&request).unwrap();
    stream.write_all(request_json.as_bytes()).unwrap();
    stream.write_all(b"\n").unwrap();
    stream.flush().unwrap();

    let mut reader = BufReader::new(stream);
    let mut response_line = String::new();
    reader.read_line(&mut response_line).unwrap();

    serde_json::from_str(&response_line).expect("Invalid JSON response")
}

#[test]
#[ignore] // Requires a running server and provider access
fn test_get_summary() {
    let response = send_request(json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "crypto.get_summary",
        "params": {"asset_id": "bitcoin"}
    }));

    let result = &response["result"];
    assert!(result.get("current_price").is_some());
    assert!(result.get("volatility_24h_ratio").is_some());
}

#[test]
#[ignore] // Requires a running server and provider access
fn test_symbol_normalization() {
    let response = send_request(json!({
        "jsonrpc": "2.0",
        "id": 2,
        "method": "crypto.get_summary",
        "params": {"asset_id": "  BITCOIN "}
    }));

    assert!(response["result"].get("current_price").is_some());
}

#[test]
#[ignore] // Requires a running server and provider access
fn test_get_history_enriched() {
    let response = send_request(json!({
        "jsonrpc": "2.0",
        "id": 3,
        "method": "crypto.get_history",
        "params": {"asset_id": "bitcoin", "days": 7, "include_pct_change": true}
    }));

    let points = response["result"]["points"]
        .as_array()
        .expect("Expected points array");
    assert!(!points.is_empty());
    assert!(points[0].get("timestamp").is_some());
    assert!(points[0].get("price").is_some());
    // The first point never carries a pct change
    assert!(points[0].get("pct_change").is_none());
}

#[test]
#[ignore] // Requires a running server and provider access
fn test_download_basic() {
    let response = send_request(json!({
        "jsonrpc": "2.0",
        "id": 4,
        "method": "crypto.download_basic",
        "params": {"asset_id": "bitcoin", "days": 7}
    }));

    let result = &response["result"];
    assert_eq!(result["filename"], "bitcoin_basic_history.csv");
    assert_eq!(result["media_type"], "text/csv");
    assert!(std::path::Path::new(result["path"].as_str().unwrap()).exists());
}

#[test]
#[ignore] // Requires a running server and provider access
fn test_download_full() {
    let response = send_request(json!({
        "jsonrpc": "2.0",
        "id": 5,
        "method": "crypto.download_full",
        "params": {"asset_id": "bitcoin", "days": 7}
    }));

    let result = &response["result"];
    assert_eq!(result["filename"], "bitcoin_full_history.csv");
    assert_eq!(result["media_type"], "text/csv");
}

#[test]
#[ignore] // Requires a running server
fn test_invalid_symbol() {
    let response = send_request(json!({
        "jsonrpc": "2.0",
        "id": 6,
        "method": "crypto.get_summary",
        "params": {"asset_id": "definitely_not_a_real_asset"}
    }));

    assert_eq!(response["error"]["code"], -32001);
}

#[test]
#[ignore] // Requires a running server
fn test_invalid_days() {
    let response = send_request(json!({
        "jsonrpc": "2.0",
        "id": 7,
        "method": "crypto.get_history",
        "params": {"asset_id": "bitcoin", "days": 400}
    }));

    assert_eq!(response["error"]["code"], -32602);
}
