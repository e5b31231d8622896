use crate::errors::ServerError;
use crate::router::{handle, MAX_UPDATE_BODY};
use crate::tests::utils::{city_dashboard, read_body};
use astra::Body;
use http::{Method, Request};
use serde_json::{json, Value};

fn post_update(body: String) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/update")
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn points(figure: &Value) -> usize {
    figure["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|trace| trace["x"].as_array().unwrap().len())
        .sum()
}

#[test]
fn update_returns_both_filtered_charts() {
    let dashboard = city_dashboard();
    let selection = json!({
        "neighbourhood_groups": ["Manhattan"],
        "room_types": ["Private room", "Shared room"],
    });

    let resp = handle(post_update(selection.to_string()), &dashboard).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "application/json"
    );

    let charts: Value = serde_json::from_str(&read_body(resp)).unwrap();
    assert_eq!(points(&charts["map"]), 4);
    assert_eq!(points(&charts["price_distance"]), 4);
    assert_eq!(charts["map"]["data"].as_array().unwrap().len(), 1);
    assert_eq!(charts["price_distance"]["data"].as_array().unwrap().len(), 2);
}

#[test]
fn update_with_everything_selected_plots_all_rows() {
    let dashboard = city_dashboard();
    let selection = json!({
        "neighbourhood_groups": dashboard.table().neighbourhood_groups(),
        "room_types": dashboard.table().room_types(),
    });

    let resp = handle(post_update(selection.to_string()), &dashboard).expect("Handler failed");
    let charts: Value = serde_json::from_str(&read_body(resp)).unwrap();

    assert_eq!(points(&charts["map"]), dashboard.table().len());
    assert_eq!(points(&charts["price_distance"]), dashboard.table().len());
}

#[test]
fn cleared_dropdown_yields_empty_charts() {
    let dashboard = city_dashboard();

    for body in [
        r#"{"neighbourhood_groups": [], "room_types": ["Private room"]}"#,
        r#"{"neighbourhood_groups": ["Queens"], "room_types": null}"#,
        r#"{}"#,
    ] {
        let resp = handle(post_update(body.to_string()), &dashboard).expect("Handler failed");
        assert_eq!(resp.status(), 200);

        let charts: Value = serde_json::from_str(&read_body(resp)).unwrap();
        assert_eq!(points(&charts["map"]), 0, "{body}");
        assert_eq!(points(&charts["price_distance"]), 0, "{body}");
        assert_eq!(
            charts["map"]["layout"]["title"]["text"],
            "Filtered Airbnb Listings in NYC"
        );
    }
}

#[test]
fn malformed_selection_is_bad_request() {
    let dashboard = city_dashboard();

    let result = handle(post_update("not json".to_string()), &dashboard);

    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn oversized_selection_is_cut_off_and_rejected() {
    let dashboard = city_dashboard();
    let huge = "Q".repeat(MAX_UPDATE_BODY as usize * 2);
    let body = json!({ "neighbourhood_groups": [huge], "room_types": [] }).to_string();

    let result = handle(post_update(body), &dashboard);

    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}
