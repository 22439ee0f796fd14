//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and either an expected parse result or the expected 400 message.

use todo_core::{ApiError, HttpRequest, HttpResponse, ItemAndId, ItemRequest, TodoClient};

const BASE_URL: &str = "http://localhost:9000";

fn client() -> TodoClient {
    TodoClient::new(BASE_URL)
}

fn load(raw: &str) -> Vec<serde_json::Value> {
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();
    vectors["cases"].as_array().unwrap().clone()
}

fn check_request(name: &str, req: &HttpRequest, expected: &serde_json::Value) {
    assert_eq!(req.method.as_str(), expected["method"].as_str().unwrap(), "{name}: method");
    assert_eq!(
        req.path,
        format!("{BASE_URL}{}", expected["path"].as_str().unwrap()),
        "{name}: path"
    );

    match expected.get("body") {
        Some(body) => {
            let req_body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
            assert_eq!(&req_body, body, "{name}: body");
        }
        None => assert!(req.body.is_none(), "{name}: body should be None"),
    }

    if let Some(headers) = expected.get("headers") {
        let expected_headers: Vec<(String, String)> = headers
            .as_array()
            .unwrap()
            .iter()
            .map(|h| {
                let arr = h.as_array().unwrap();
                (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
            })
            .collect();
        assert_eq!(req.headers, expected_headers, "{name}: headers");
    }
}

fn simulated(case: &serde_json::Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

fn check_result(name: &str, case: &serde_json::Value, result: Result<ItemAndId, ApiError>) {
    if let Some(expected_error) = case.get("expected_error") {
        match result.unwrap_err() {
            ApiError::InvalidRequest { message } => {
                assert_eq!(message, expected_error.as_str().unwrap(), "{name}: message")
            }
            other => panic!("{name}: expected InvalidRequest, got {other:?}"),
        }
    } else {
        let expected: ItemAndId = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(result.unwrap(), expected, "{name}: parsed result");
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[test]
fn create_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/create.json")) {
        let name = case["name"].as_str().unwrap();
        let input: ItemRequest = serde_json::from_value(case["input"].clone()).unwrap();

        let req = c.build_create_item(&input).unwrap();
        check_request(name, &req, &case["expected_request"]);
        check_result(name, &case, c.parse_create_item(simulated(&case)));
    }
}

// ---------------------------------------------------------------------------
// Read one
// ---------------------------------------------------------------------------

#[test]
fn read_item_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/read_item.json")) {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_i64().unwrap();

        let req = c.build_read_item(id);
        check_request(name, &req, &case["expected_request"]);
        check_result(name, &case, c.parse_read_item(simulated(&case)));
    }
}

// ---------------------------------------------------------------------------
// Delete one
// ---------------------------------------------------------------------------

#[test]
fn delete_item_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/delete_item.json")) {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_i64().unwrap();

        let req = c.build_delete_item(id);
        check_request(name, &req, &case["expected_request"]);
        check_result(name, &case, c.parse_delete_item(simulated(&case)));
    }
}
