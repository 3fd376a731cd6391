use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

async fn resolver_for(server: &MockServer) -> FacilityResolver {
    let client = OverpassClient::with_base_url(5, &server.uri())
        .expect("client construction should not fail");
    FacilityResolver::new(client)
}

fn element(name: &str, lat: f64, lon: f64, extra: &[(&str, &str)]) -> serde_json::Value {
    let mut tags = serde_json::Map::new();
    tags.insert("name".into(), serde_json::Value::String(name.to_string()));
    for (k, v) in extra {
        tags.insert((*k).to_string(), serde_json::Value::String((*v).to_string()));
    }
    serde_json::json!({ "type": "node", "id": 1, "lat": lat, "lon": lon, "tags": tags })
}

#[tokio::test]
async fn resolve_ranks_real_results_by_distance_and_caps_at_eight() {
    let server = MockServer::start().await;
    // Ten named nodes at increasing latitude offsets, served shuffled.
    let offsets = [9, 2, 7, 1, 5, 10, 3, 8, 4, 6];
    let elements: Vec<serde_json::Value> = offsets
        .iter()
        .map(|i| {
            element(
                &format!("Center {i}"),
                22.72 + f64::from(*i) * 0.01,
                75.86,
                &[("amenity", "recycling")],
            )
        })
        .collect();
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "elements": elements })),
        )
        .mount(&server)
        .await;

    let facilities = resolver_for(&server)
        .await
        .resolve(22.72, 75.86, Category::Plastic, DEFAULT_RADIUS_M)
        .await;

    assert_eq!(facilities.len(), MAX_FACILITIES);
    assert_eq!(facilities[0].name, "Center 1");
    for window in facilities.windows(2) {
        assert!(window[0].distance <= window[1].distance);
    }
    // Offsets 9 and 10 are the farthest and must have been cut.
    assert!(facilities.iter().all(|f| f.name != "Center 9" && f.name != "Center 10"));
}

#[tokio::test]
async fn resolve_maps_tags_into_facility_fields() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "elements": [element(
            "Goodwill Depot",
            22.7301,
            75.8702,
            &[
                ("shop", "charity"),
                ("addr:street", "MG Road"),
                ("addr:city", "Indore"),
                ("contact:phone", "+91 7311234567")
            ]
        )]
    });
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let facilities = resolver_for(&server)
        .await
        .resolve(22.72, 75.86, Category::Fabric, DEFAULT_RADIUS_M)
        .await;

    assert_eq!(facilities.len(), 1);
    let f = &facilities[0];
    assert_eq!(f.facility_type, "NGO / Charity");
    assert_eq!(f.address, "MG Road, Indore");
    assert_eq!(f.phone, "+91 7311234567");
    assert!(f.is_open);
    assert!(f.distance > 0.0);
    assert_eq!(f.source_id.as_deref(), Some("1"));
}

#[tokio::test]
async fn nameless_and_coordinate_less_elements_are_dropped() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "elements": [
            { "type": "node", "id": 1, "lat": 22.73, "lon": 75.87, "tags": { "amenity": "recycling" } },
            { "type": "node", "id": 2, "tags": { "name": "Floating Center" } },
            element("Real Center", 22.74, 75.88, &[("amenity", "recycling")])
        ]
    });
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let facilities = resolver_for(&server)
        .await
        .resolve(22.72, 75.86, Category::Glass, DEFAULT_RADIUS_M)
        .await;

    assert_eq!(facilities.len(), 1);
    assert_eq!(facilities[0].name, "Real Center");
}

#[tokio::test]
async fn upstream_error_falls_back_to_exactly_five_synthetic_entries() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let facilities = resolver_for(&server)
        .await
        .resolve(22.72, 75.86, Category::Ewaste, DEFAULT_RADIUS_M)
        .await;

    assert_eq!(facilities.len(), 5);
    assert_eq!(facilities[0].name, "E-Waste Collection Center");
    assert!(facilities.iter().all(|f| f.facility_type == "E-waste Recycler"));
}

#[tokio::test]
async fn empty_result_set_also_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "elements": [] })))
        .mount(&server)
        .await;

    let facilities = resolver_for(&server)
        .await
        .resolve(22.72, 75.86, Category::Metal, DEFAULT_RADIUS_M)
        .await;

    assert_eq!(facilities.len(), 5);
    assert_eq!(facilities[0].name, "Shri Ram Scrap Dealers");
}
