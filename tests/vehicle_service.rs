//! End-to-end tests of the vehicle service against mocked HTTP providers.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;
use std::time::Duration;
use vehicle_aggregation::application::services::{EnrichmentConfig, VehicleService};
use vehicle_aggregation::config::{ProviderSettings, Settings};
use vehicle_aggregation::domain::entities::{Details, Manufacturer, Vehicle};
use vehicle_aggregation::domain::value_objects::{Condition, Location, PRICE_FALLBACK, VehicleId};
use vehicle_aggregation::infrastructure::persistence::VehicleRepository;
use vehicle_aggregation::infrastructure::persistence::in_memory::InMemoryVehicleRepository;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct Harness {
    pricing: MockServer,
    maps: MockServer,
    repo: Arc<InMemoryVehicleRepository>,
    service: VehicleService,
}

async fn harness(enrichment: EnrichmentConfig) -> Harness {
    let pricing = MockServer::start().await;
    let maps = MockServer::start().await;

    let settings = Settings {
        pricing: ProviderSettings {
            base_url: pricing.uri(),
            timeout_ms: 2000,
        },
        maps: ProviderSettings {
            base_url: maps.uri(),
            timeout_ms: 2000,
        },
        enrichment,
        ..Settings::default()
    };

    let repo = Arc::new(InMemoryVehicleRepository::new());
    let service = VehicleService::from_settings(&settings, repo.clone()).unwrap();

    Harness {
        pricing,
        maps,
        repo,
        service,
    }
}

async fn mount_price(server: &MockServer, id: u64, currency: &str, price: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/prices/{}", id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "currency": currency,
            "price": price,
            "vehicleId": id
        })))
        .mount(server)
        .await;
}

async fn mount_address(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/maps"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "address": "777 Brockton Avenue",
            "city": "Abington",
            "state": "MA",
            "zip": "2351"
        })))
        .mount(server)
        .await;
}

fn impala(lat: f64) -> Vehicle {
    Vehicle::new(
        Condition::Used,
        Details {
            body: "sedan".to_string(),
            model: "Impala".to_string(),
            manufacturer: Manufacturer::new(101, "Chevrolet"),
            number_of_doors: Some(4),
            ..Details::default()
        },
        Location::new(lat, -73.935242),
    )
}

#[tokio::test]
async fn find_by_id_formats_price_and_resolves_address() {
    let h = harness(EnrichmentConfig::default()).await;
    mount_price(&h.pricing, 1, "USD", 12000).await;
    mount_address(&h.maps).await;

    let created = h.service.save(&impala(40.73)).await.unwrap();
    assert_eq!(created.id(), Some(VehicleId::new(1)));

    let found = h.service.find_by_id(VehicleId::new(1)).await.unwrap();

    assert_eq!(found.price(), Some("USD 12000"));
    assert_eq!(found.location().address(), Some("777 Brockton Avenue"));
    assert_eq!(found.location().lat(), 40.73);
    assert_eq!(found.details().model, "Impala");
}

#[tokio::test]
async fn pricing_down_for_one_vehicle_degrades_only_that_vehicle() {
    let h = harness(EnrichmentConfig::default()).await;
    mount_price(&h.pricing, 1, "USD", 12000).await;
    Mock::given(path("/prices/2"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&h.pricing)
        .await;
    mount_price(&h.pricing, 3, "EUR", 9000).await;
    mount_address(&h.maps).await;

    for lat in [1.0, 2.0, 3.0] {
        h.service.save(&impala(lat)).await.unwrap();
    }

    let listed = h.service.list().await.unwrap();
    let prices: Vec<Option<&str>> = listed.iter().map(Vehicle::price).collect();

    assert_eq!(
        prices,
        vec![Some("USD 12000"), Some(PRICE_FALLBACK), Some("EUR 9000")]
    );
    assert!(listed.iter().all(|v| v.location().is_resolved()));

    let second = h.service.find_by_id(VehicleId::new(2)).await.unwrap();
    assert_eq!(second.price(), Some(PRICE_FALLBACK));
}

#[tokio::test]
async fn unreachable_providers_never_fail_reads() {
    let closed = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let settings = Settings {
        pricing: ProviderSettings {
            base_url: format!("http://{}", closed),
            timeout_ms: 500,
        },
        maps: ProviderSettings {
            base_url: format!("http://{}", closed),
            timeout_ms: 500,
        },
        ..Settings::default()
    };
    let service =
        VehicleService::from_settings(&settings, Arc::new(InMemoryVehicleRepository::new()))
            .unwrap();
    service.save(&impala(1.0)).await.unwrap();

    let found = service.find_by_id(VehicleId::new(1)).await.unwrap();

    assert_eq!(found.price(), Some(PRICE_FALLBACK));
    assert!(!found.location().is_resolved());
}

#[tokio::test]
async fn slow_pricing_is_cut_off_by_enrichment_deadline() {
    let h = harness(EnrichmentConfig::with_timeout(100)).await;
    Mock::given(path("/prices/1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "currency": "USD", "price": 1 }))
                .set_delay(Duration::from_secs(1)),
        )
        .mount(&h.pricing)
        .await;
    mount_address(&h.maps).await;
    h.service.save(&impala(1.0)).await.unwrap();

    let found = h.service.find_by_id(VehicleId::new(1)).await.unwrap();

    assert_eq!(found.price(), Some(PRICE_FALLBACK));
    assert!(found.location().is_resolved());
}

#[tokio::test]
async fn malformed_price_payload_uses_fallback() {
    let h = harness(EnrichmentConfig::default()).await;
    Mock::given(path("/prices/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&h.pricing)
        .await;
    mount_address(&h.maps).await;
    h.service.save(&impala(1.0)).await.unwrap();

    let found = h.service.find_by_id(VehicleId::new(1)).await.unwrap();
    assert_eq!(found.price(), Some(PRICE_FALLBACK));
}

#[tokio::test]
async fn lifecycle_create_update_delete() {
    let h = harness(EnrichmentConfig::default()).await;

    let created = h.service.save(&impala(1.0)).await.unwrap();
    let id = created.id().unwrap();

    let payload = Vehicle::new(
        Condition::New,
        created.details().clone(),
        Location::new(2.0, 3.0),
    )
    .with_id(id);
    let updated = h.service.save(&payload).await.unwrap();

    assert_eq!(updated.id(), Some(id));
    assert_eq!(updated.condition(), Condition::New);
    assert_eq!(updated.created_at(), created.created_at());
    assert_eq!(h.repo.count().await.unwrap(), 1);

    h.service.delete(id).await.unwrap();
    assert_eq!(h.repo.count().await.unwrap(), 0);

    assert!(h.service.delete(id).await.unwrap_err().is_not_found());
    assert!(h.service.find_by_id(id).await.unwrap_err().is_not_found());
    assert!(h.service.save(&payload).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn demo_seed_file_loads() {
    let repo = InMemoryVehicleRepository::from_seed_file(
        std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/vehicles.json"),
    )
    .await
    .unwrap();

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[1].details().manufacturer.name, "Volkswagen");
}
