use crate::errors::ServerError;
use crate::responses::error_response;
use crate::router::handle;
use crate::tests::utils::{city_dashboard, read_body};
use astra::Body;
use http::{Method, Request};

#[test]
fn dashboard_page_loads_with_filters_and_charts() {
    let dashboard = city_dashboard();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, &dashboard).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "text/html; charset=utf-8"
    );

    let body = read_body(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("Airbnb Listings in NYC"));
    assert!(body.contains("Select Neighbourhood Group:"));
    assert!(body.contains("Select Room Type:"));
    assert!(body.contains(r#"value="Brooklyn" checked"#));
    assert!(body.contains(r#"value="Shared room" checked"#));
    assert!(body.contains(r#"id="map-graph""#));
    assert!(body.contains(r#"id="price-distance-graph""#));
    assert!(body.contains("Top 10 Expensive Neighbourhoods (Avg. Price)"));
    assert!(body.contains("Distance to City Center by Neighbourhood Group"));
    assert!(body.contains("cdn.plot.ly"));
}

#[test]
fn dashboard_page_stacks_filtered_charts_above_grid_and_full_width_chart() {
    let dashboard = city_dashboard();

    let body = read_body(handle(get("/"), &dashboard).expect("Handler failed"));

    let map = body.find(r#"id="map-graph""#).expect("map graph missing");
    let price = body
        .find(r#"id="price-distance-graph""#)
        .expect("price/distance graph missing");
    let grid = body.find(r#"<div class="grid""#).expect("grid missing");
    let full_width = body
        .find(r#"id="distance-by-group""#)
        .expect("distance chart missing");

    assert!(map < price && price < grid && grid < full_width);
    assert_eq!(body.matches(r#"class="graph""#).count(), 11);

    // Everything opened inside the grid is closed before the full-width chart.
    let grid_section = &body[grid..full_width];
    assert_eq!(grid_section.matches(r#"class="graph""#).count(), 8);
    assert_eq!(
        grid_section.matches("<div").count(),
        grid_section.matches("</div>").count()
    );
    assert!(grid_section.find(r#"id="neighbourhood-share""#) < grid_section.find(r#"id="top-neighbourhoods""#));
}

#[test]
fn update_script_targets_the_filtered_chart_containers() {
    let dashboard = city_dashboard();

    let body = read_body(handle(get("/"), &dashboard).expect("Handler failed"));

    assert!(body.contains(r#"startDashboard("map-graph", "price-distance-graph");"#));
}

#[test]
fn static_charts_render_once() {
    let dashboard = city_dashboard();

    let first = read_body(handle(get("/"), &dashboard).expect("Handler failed"));
    let second = read_body(handle(get("/"), &dashboard).expect("Handler failed"));

    assert_eq!(first, second);
}

#[test]
fn unknown_path_is_not_found() {
    let dashboard = city_dashboard();

    let result = handle(get("/admin"), &dashboard);

    assert!(matches!(result, Err(ServerError::NotFound)));
}

#[test]
fn wrong_method_is_rejected() {
    let dashboard = city_dashboard();

    let result = handle(get("/update"), &dashboard);

    assert!(matches!(result, Err(ServerError::MethodNotAllowed)));
}

#[test]
fn errors_render_as_html_pages() {
    let resp = error_response(ServerError::NotFound);

    assert_eq!(resp.status(), 404);
    let body = read_body(resp);
    assert!(body.contains("Error 404"));
    assert!(body.contains("Not Found"));
}

#[test]
fn bad_request_and_wrong_method_render_their_statuses() {
    let bad = error_response(ServerError::BadRequest("invalid selection".into()));
    assert_eq!(bad.status(), 400);
    let body = read_body(bad);
    assert!(body.contains("Error 400"));
    assert!(body.contains("invalid selection"));

    let wrong_method = error_response(ServerError::MethodNotAllowed);
    assert_eq!(wrong_method.status(), 405);
    assert!(read_body(wrong_method).contains("Method Not Allowed"));
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}
