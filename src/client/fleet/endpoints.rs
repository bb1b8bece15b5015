//! Endpoint bindings for [`FleetClient`]

use async_trait::async_trait;
use reqwest::Method;

use super::FleetClient;
use crate::cache::{CacheTtl, cache_key};
use crate::client::api::{
    AdminApi, DriverApi, InvoiceApi, PaymentApi, RouteApi, TransitApi, TripApi, VehicleApi,
};
use crate::client::models::{
    DispatchRequest, Driver, DriverCreate, DriverFilter, DriverStatus, Invoice, InvoiceCreate,
    InvoiceFilter, OptimizationResult, Payment, PaymentCreate, PaymentFilter, PublicService,
    RoleUpdate, RouteOptimizationRequest, ServiceCreate, ServiceFilter, StatusChange, Ticket,
    Trip, TripCreate, TripFilter, TripStatus, User, UserFilter, UserRole, Vehicle, VehicleCreate,
    VehicleFilter, VehicleStats, VehicleStatus,
};
use crate::client::pagination::{PaginationParams, with_pagination};
use crate::error::Result;

const VEHICLE_STATS: &str = "vehicle_stats";

#[async_trait]
impl VehicleApi for FleetClient {
    async fn list_vehicles(
        &self,
        filter: &VehicleFilter,
        pagination: Option<&PaginationParams>,
    ) -> Result<Vec<Vehicle>> {
        let query = with_pagination(filter.to_query_params(), pagination);
        self.get(&["vehicles"], &query).await
    }

    async fn get_vehicle(&self, vehicle_id: &str) -> Result<Vehicle> {
        self.get(&["vehicles", vehicle_id], &[]).await
    }

    async fn create_vehicle(&self, request: &VehicleCreate) -> Result<Vehicle> {
        self.send_json(Method::POST, &["vehicles"], request).await
    }

    async fn update_vehicle(&self, vehicle_id: &str, request: &VehicleCreate) -> Result<Vehicle> {
        self.send_json(Method::PUT, &["vehicles", vehicle_id], request).await
    }

    async fn delete_vehicle(&self, vehicle_id: &str) -> Result<()> {
        self.delete(&["vehicles", vehicle_id]).await
    }

    async fn set_vehicle_status(
        &self,
        vehicle_id: &str,
        change: &StatusChange<VehicleStatus>,
    ) -> Result<Vehicle> {
        self.send_json(Method::PATCH, &["vehicles", vehicle_id, "status"], change).await
    }

    async fn vehicle_stats(&self) -> Result<VehicleStats> {
        // Keyed by token so a cached entry never outlives its session
        let token = self.access_token()?;
        let key = cache_key(VEHICLE_STATS, self.base_url.as_str(), &token);

        if let Some(cache) = &self.stats_cache
            && let Some(cached) = cache.get::<VehicleStats>(&key)
        {
            log::debug!("Cache hit: {}", VEHICLE_STATS);
            return Ok(cached);
        }

        let stats: VehicleStats = self.get(&["vehicles", "stats"], &[]).await?;

        if let Some(cache) = &self.stats_cache {
            cache.put(&key, &stats, VEHICLE_STATS, CacheTtl::VEHICLE_STATS);
        }
        Ok(stats)
    }
}

#[async_trait]
impl DriverApi for FleetClient {
    async fn list_drivers(
        &self,
        filter: &DriverFilter,
        pagination: Option<&PaginationParams>,
    ) -> Result<Vec<Driver>> {
        let query = with_pagination(filter.to_query_params(), pagination);
        self.get(&["fleet", "drivers"], &query).await
    }

    async fn get_driver(&self, driver_id: &str) -> Result<Driver> {
        self.get(&["fleet", "drivers", driver_id], &[]).await
    }

    async fn create_driver(&self, request: &DriverCreate) -> Result<Driver> {
        self.send_json(Method::POST, &["fleet", "drivers"], request).await
    }

    async fn update_driver(&self, driver_id: &str, request: &DriverCreate) -> Result<Driver> {
        self.send_json(Method::PUT, &["fleet", "drivers", driver_id], request).await
    }

    async fn delete_driver(&self, driver_id: &str) -> Result<()> {
        self.delete(&["fleet", "drivers", driver_id]).await
    }

    async fn set_driver_status(
        &self,
        driver_id: &str,
        change: &StatusChange<DriverStatus>,
    ) -> Result<Driver> {
        self.send_json(Method::PATCH, &["fleet", "drivers", driver_id, "status"], change).await
    }
}

#[async_trait]
impl InvoiceApi for FleetClient {
    async fn list_invoices(
        &self,
        filter: &InvoiceFilter,
        pagination: Option<&PaginationParams>,
    ) -> Result<Vec<Invoice>> {
        let query = with_pagination(filter.to_query_params(), pagination);
        self.get(&["payments", "invoices"], &query).await
    }

    async fn get_invoice(&self, invoice_id: &str) -> Result<Invoice> {
        self.get(&["payments", "invoices", invoice_id], &[])
            .await
    }

    async fn create_invoice(&self, request: &InvoiceCreate) -> Result<Invoice> {
        self.send_json(Method::POST, &["payments", "invoices"], request)
            .await
    }

    async fn send_invoice(&self, invoice_id: &str) -> Result<Invoice> {
        self.post_action(&["payments", "invoices", invoice_id, "send"])
            .await
    }

    async fn cancel_invoice(&self, invoice_id: &str) -> Result<Invoice> {
        self.post_action(&["payments", "invoices", invoice_id, "cancel"])
            .await
    }
}

#[async_trait]
impl PaymentApi for FleetClient {
    async fn list_payments(
        &self,
        filter: &PaymentFilter,
        pagination: Option<&PaginationParams>,
    ) -> Result<Vec<Payment>> {
        let query = with_pagination(filter.to_query_params(), pagination);
        self.get(&["payments"], &query).await
    }

    async fn get_payment(&self, payment_id: &str) -> Result<Payment> {
        self.get(&["payments", payment_id], &[]).await
    }

    async fn record_payment(&self, request: &PaymentCreate) -> Result<Payment> {
        self.send_json(Method::POST, &["payments"], request).await
    }
}

#[async_trait]
impl TripApi for FleetClient {
    async fn list_trips(
        &self,
        filter: &TripFilter,
        pagination: Option<&PaginationParams>,
    ) -> Result<Vec<Trip>> {
        let query = with_pagination(filter.to_query_params(), pagination);
        self.get(&["trips"], &query).await
    }

    async fn get_trip(&self, trip_id: &str) -> Result<Trip> {
        self.get(&["trips", trip_id], &[]).await
    }

    async fn create_trip(&self, request: &TripCreate) -> Result<Trip> {
        self.send_json(Method::POST, &["trips"], request).await
    }

    async fn set_trip_status(
        &self,
        trip_id: &str,
        change: &StatusChange<TripStatus>,
    ) -> Result<Trip> {
        self.send_json(Method::PATCH, &["trips", trip_id, "status"], change).await
    }

    async fn dispatch_trip(&self, trip_id: &str, request: &DispatchRequest) -> Result<Trip> {
        self.send_json(Method::POST, &["trips", trip_id, "dispatch"], request).await
    }
}

#[async_trait]
impl RouteApi for FleetClient {
    async fn optimize_routes(
        &self,
        request: &RouteOptimizationRequest,
    ) -> Result<OptimizationResult> {
        self.send_json(Method::POST, &["route-optimization", "optimize"], request)
            .await
    }

    async fn list_optimizations(
        &self,
        pagination: Option<&PaginationParams>,
    ) -> Result<Vec<OptimizationResult>> {
        let query = with_pagination(Vec::new(), pagination);
        self.get(&["route-optimization"], &query).await
    }

    async fn get_optimization(&self, optimization_id: &str) -> Result<OptimizationResult> {
        self.get(&["route-optimization", optimization_id], &[])
            .await
    }
}

#[async_trait]
impl TransitApi for FleetClient {
    async fn list_services(
        &self,
        filter: &ServiceFilter,
        pagination: Option<&PaginationParams>,
    ) -> Result<Vec<PublicService>> {
        let query = with_pagination(filter.to_query_params(), pagination);
        self.get(&["services"], &query).await
    }

    async fn get_service(&self, service_id: &str) -> Result<PublicService> {
        self.get(&["services", service_id], &[]).await
    }

    async fn create_service(&self, request: &ServiceCreate) -> Result<PublicService> {
        self.send_json(Method::POST, &["services"], request).await
    }

    async fn update_service(
        &self,
        service_id: &str,
        request: &ServiceCreate,
    ) -> Result<PublicService> {
        self.send_json(Method::PUT, &["services", service_id], request).await
    }

    async fn list_service_tickets(
        &self,
        service_id: &str,
        pagination: Option<&PaginationParams>,
    ) -> Result<Vec<Ticket>> {
        let query = with_pagination(Vec::new(), pagination);
        self.get(&["services", service_id, "tickets"], &query)
            .await
    }
}

#[async_trait]
impl AdminApi for FleetClient {
    async fn list_users(
        &self,
        filter: &UserFilter,
        pagination: Option<&PaginationParams>,
    ) -> Result<Vec<User>> {
        let query = with_pagination(filter.to_query_params(), pagination);
        self.get(&["admin", "users"], &query).await
    }

    async fn get_user(&self, user_id: &str) -> Result<User> {
        self.get(&["admin", "users", user_id], &[]).await
    }

    async fn set_user_role(&self, user_id: &str, role: UserRole) -> Result<User> {
        self.send_json(Method::PATCH, &["admin", "users", user_id, "role"], &RoleUpdate { role })
            .await
    }

    async fn deactivate_user(&self, user_id: &str) -> Result<User> {
        self.post_action(&["admin", "users", user_id, "deactivate"])
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use mockito::Matcher;
    use serde_json::json;

    use super::*;
    use crate::cache::{CacheStorage, ManualClock, ResponseCache};
    use crate::client::models::Id;
    use crate::error::{ApiError, Error};
    use crate::session::{CredentialStore, MemorySession, Session};

    const STATS_BODY: &str = r#"{"total_vehicles": 5, "available_vehicles": 2, "utilization_rate": 0.6}"#;

    fn client_for(server: &mockito::ServerGuard) -> FleetClient {
        FleetClient::new(
            format!("{}/api/v1", server.url()),
            Arc::new(MemorySession::with_token("tok")),
        )
        .unwrap()
    }

    fn cached_client_for(server: &mockito::ServerGuard, clock: Arc<ManualClock>) -> FleetClient {
        cached_client_with(server, clock, Arc::new(MemorySession::with_token("tok")))
    }

    fn cached_client_with(
        server: &mockito::ServerGuard,
        clock: Arc<ManualClock>,
        session: Arc<MemorySession>,
    ) -> FleetClient {
        let storage = CacheStorage::open_in_memory(clock).unwrap();
        FleetClient::new(format!("{}/api/v1", server.url()), session)
            .unwrap()
            .with_stats_cache(ResponseCache::new(storage))
    }

    #[tokio::test]
    async fn test_vehicle_stats_passthrough() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/v1/vehicles/stats")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(STATS_BODY)
            .create_async()
            .await;

        let stats = client_for(&server).vehicle_stats().await.unwrap();

        assert_eq!(stats.total_vehicles(), Some(5));
        let original: serde_json::Value = serde_json::from_str(STATS_BODY).unwrap();
        assert_eq!(serde_json::to_value(&stats).unwrap(), original);
    }

    #[tokio::test]
    async fn test_vehicle_stats_cached_within_window() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/vehicles/stats")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(STATS_BODY)
            .expect(1)
            .create_async()
            .await;

        let clock = Arc::new(ManualClock::new());
        let client = cached_client_for(&server, clock.clone());

        let first = client.vehicle_stats().await.unwrap();
        clock.advance(Duration::from_secs(4 * 60));
        let second = client.vehicle_stats().await.unwrap();

        assert_eq!(first, second);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_vehicle_stats_refetched_after_window() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/vehicles/stats")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(STATS_BODY)
            .expect(2)
            .create_async()
            .await;

        let clock = Arc::new(ManualClock::new());
        let client = cached_client_for(&server, clock.clone());

        client.vehicle_stats().await.unwrap();
        clock.advance(Duration::from_secs(5 * 60 + 1));
        client.vehicle_stats().await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_vehicle_stats_failures_are_not_cached() {
        let mut server = mockito::Server::new_async().await;
        let failing = server
            .mock("GET", "/api/v1/vehicles/stats")
            .with_status(500)
            .expect(1)
            .create_async()
            .await;

        let clock = Arc::new(ManualClock::new());
        let client = cached_client_for(&server, clock);

        assert!(client.vehicle_stats().await.is_err());
        failing.assert_async().await;
        failing.remove_async().await;

        let ok = server
            .mock("GET", "/api/v1/vehicles/stats")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(STATS_BODY)
            .expect(1)
            .create_async()
            .await;

        assert!(client.vehicle_stats().await.is_ok());
        ok.assert_async().await;
    }

    #[tokio::test]
    async fn test_cached_stats_need_a_session() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/vehicles/stats")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(STATS_BODY)
            .expect(1)
            .create_async()
            .await;

        let session = Arc::new(MemorySession::with_token("tok"));
        let client = cached_client_with(&server, Arc::new(ManualClock::new()), session.clone());

        client.vehicle_stats().await.unwrap();
        session.clear().unwrap();
        let err = client.vehicle_stats().await.unwrap_err();

        assert!(matches!(err, Error::Api(ApiError::Unauthenticated)));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_cached_stats_are_scoped_to_the_token() {
        let mut server = mockito::Server::new_async().await;
        let first = server
            .mock("GET", "/api/v1/vehicles/stats")
            .match_header("authorization", "Bearer tok-a")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(STATS_BODY)
            .expect(1)
            .create_async()
            .await;
        let second = server
            .mock("GET", "/api/v1/vehicles/stats")
            .match_header("authorization", "Bearer tok-b")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"total_vehicles": 1}"#)
            .expect(1)
            .create_async()
            .await;

        let session = Arc::new(MemorySession::with_token("tok-a"));
        let client = cached_client_with(&server, Arc::new(ManualClock::new()), session.clone());

        assert_eq!(client.vehicle_stats().await.unwrap().total_vehicles(), Some(5));
        session
            .store(&Session {
                access_token: Some("tok-b".to_string()),
                current_user: None,
            })
            .unwrap();
        assert_eq!(client.vehicle_stats().await.unwrap().total_vehicles(), Some(1));

        first.assert_async().await;
        second.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_vehicles_sends_filters_and_pagination() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/vehicles")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("status".into(), "available".into()),
                Matcher::UrlEncoded("skip".into(), "20".into()),
                Matcher::UrlEncoded("limit".into(), "20".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"id": 1, "license_plate": "KBX 001A", "status": "available"}]"#)
            .create_async()
            .await;

        let filter = VehicleFilter {
            status: Some(VehicleStatus::Available),
            ..Default::default()
        };
        let page = PaginationParams::new().limit(20).page(1);
        let vehicles = client_for(&server)
            .list_vehicles(&filter, Some(&page))
            .await
            .unwrap();

        assert_eq!(vehicles.len(), 1);
        assert_eq!(vehicles[0].license_plate, "KBX 001A");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_delete_vehicle_accepts_empty_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/api/v1/vehicles/12")
            .with_status(204)
            .create_async()
            .await;

        client_for(&server).delete_vehicle("12").await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_set_driver_status_patches() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PATCH", "/api/v1/fleet/drivers/d-7/status")
            .match_body(Matcher::Json(json!({ "status": "off_duty", "reason": "shift ended" })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id": "d-7", "first_name": "Juma", "status": "off_duty"}"#)
            .create_async()
            .await;

        let driver = client_for(&server)
            .set_driver_status(
                "d-7",
                &StatusChange {
                    status: DriverStatus::OffDuty,
                    reason: Some("shift ended".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(driver.status, DriverStatus::OffDuty);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_send_invoice_posts_without_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1/payments/invoices/5/send")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id": 5, "status": "sent"}"#)
            .create_async()
            .await;

        let invoice = client_for(&server).send_invoice("5").await.unwrap();
        assert_eq!(invoice.status, crate::client::models::InvoiceStatus::Sent);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_record_payment() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1/payments")
            .match_body(Matcher::Json(
                json!({ "invoice_id": 5, "amount": 120.0, "method": "mobile_money" }),
            ))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id": 31, "invoice_id": 5, "amount": 120.0, "status": "completed"}"#)
            .create_async()
            .await;

        let payment = client_for(&server)
            .record_payment(&PaymentCreate {
                invoice_id: Id::Num(5),
                amount: 120.0,
                method: "mobile_money".to_string(),
                reference: None,
            })
            .await
            .unwrap();

        assert_eq!(payment.id, Id::Num(31));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_dispatch_trip() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1/trips/88/dispatch")
            .match_body(Matcher::Json(json!({ "driver_id": 3, "vehicle_id": "bus-9" })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"id": 88, "driver_id": 3, "vehicle_id": "bus-9", "status": "dispatched",
                    "origin": "Depot", "destination": "CBD"}"#,
            )
            .create_async()
            .await;

        let trip = client_for(&server)
            .dispatch_trip(
                "88",
                &DispatchRequest {
                    driver_id: Id::from("3"),
                    vehicle_id: Id::from("bus-9"),
                },
            )
            .await
            .unwrap();

        assert_eq!(trip.status, TripStatus::Dispatched);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_optimize_routes() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1/route-optimization/optimize")
            .match_body(Matcher::PartialJson(json!({ "vehicle_ids": [1] })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"id": "opt-3", "status": "completed", "total_distance_km": 12.5,
                    "routes": [{"vehicle_id": 1, "stops": [{"sequence": 1}, {"sequence": 2}]}]}"#,
            )
            .create_async()
            .await;

        let request: RouteOptimizationRequest = serde_json::from_value(json!({
            "vehicle_ids": [1],
            "stops": [
                { "location": { "latitude": -1.28, "longitude": 36.82 } },
                { "location": { "latitude": -1.30, "longitude": 36.78 } }
            ]
        }))
        .unwrap();

        let result = client_for(&server).optimize_routes(&request).await.unwrap();
        assert_eq!(result.routes[0].stops.len(), 2);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_service_tickets() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/services/4/tickets")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"id": 1, "passenger_name": "Wanjiru", "seat_number": "12A"}]"#)
            .create_async()
            .await;

        let tickets = client_for(&server)
            .list_service_tickets("4", None)
            .await
            .unwrap();
        assert_eq!(tickets[0].seat_number.as_deref(), Some("12A"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_set_user_role() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PATCH", "/api/v1/admin/users/17/role")
            .match_body(Matcher::Json(json!({ "role": "dispatcher" })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id": 17, "email": "k@example.com", "role": "dispatcher"}"#)
            .create_async()
            .await;

        let user = client_for(&server)
            .set_user_role("17", UserRole::Dispatcher)
            .await
            .unwrap();
        assert_eq!(user.role, UserRole::Dispatcher);
        mock.assert_async().await;
    }
}
