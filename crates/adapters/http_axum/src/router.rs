//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use energyhub_app::ports::{DeviceRepository, Notifier, PlanRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api` and adds a [`TraceLayer`] that logs each
/// HTTP request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<DR, ED, PR, N>(state: AppState<DR, ED, PR, N>) -> Router
where
    DR: DeviceRepository + Send + Sync + 'static,
    ED: DeviceRepository + Send + Sync + 'static,
    PR: PlanRepository + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use energyhub_app::notifier::InProcessNotifier;
    use energyhub_app::services::device_service::DeviceService;
    use energyhub_app::services::energy_monitor_service::EnergyMonitorService;
    use energyhub_domain::device::Device;
    use energyhub_domain::energy_plan::EnergyPlan;
    use energyhub_domain::error::EnergyHubError;
    use energyhub_domain::id::DeviceId;

    #[derive(Clone)]
    struct MemoryDevices(Arc<Mutex<Vec<Device>>>);

    struct MemoryPlan(Mutex<EnergyPlan>);

    impl DeviceRepository for MemoryDevices {
        async fn create(&self, device: Device) -> Result<Device, EnergyHubError> {
            self.0.lock().unwrap().push(device.clone());
            Ok(device)
        }
        async fn get_by_id(&self, id: DeviceId) -> Result<Option<Device>, EnergyHubError> {
            Ok(self.0.lock().unwrap().iter().find(|d| d.id == id).cloned())
        }
        async fn get_all(&self) -> Result<Vec<Device>, EnergyHubError> {
            Ok(self.0.lock().unwrap().clone())
        }
        async fn update(&self, device: Device) -> Result<Device, EnergyHubError> {
            let mut devices = self.0.lock().unwrap();
            if let Some(slot) = devices.iter_mut().find(|d| d.id == device.id) {
                *slot = device.clone();
            }
            Ok(device)
        }
    }

    impl PlanRepository for MemoryPlan {
        async fn get_current_plan(&self) -> Result<EnergyPlan, EnergyHubError> {
            Ok(self.0.lock().unwrap().clone())
        }
        async fn update_plan(&self, plan: EnergyPlan) -> Result<EnergyPlan, EnergyHubError> {
            *self.0.lock().unwrap() = plan.clone();
            Ok(plan)
        }
    }

    fn heater() -> Device {
        Device::builder(1)
            .name("Heater")
            .power_watts(2000.0)
            .build()
            .unwrap()
    }

    fn app(limit_kwh: f64) -> (Router, Arc<InProcessNotifier>) {
        let devices = MemoryDevices(Arc::new(Mutex::new(vec![heater()])));
        let plan = MemoryPlan(Mutex::new(EnergyPlan::new(limit_kwh).unwrap()));
        let notifier = Arc::new(InProcessNotifier::new(8));

        let state = AppState::new(
            DeviceService::new(devices.clone()),
            EnergyMonitorService::new(devices, plan, Arc::clone(&notifier)),
        );
        (build(state), notifier)
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let (app, _) = app(1.0);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_return_not_found_when_toggling_unknown_device() {
        let (app, _) = app(1.0);

        let response = app
            .oneshot(json_request("PUT", "/api/devices/99/power", r#"{"on":true}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_return_bad_request_when_device_id_is_not_numeric() {
        let (app, _) = app(1.0);

        let response = app
            .oneshot(json_request("PUT", "/api/devices/lamp/power", r#"{"on":true}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_return_resulting_state_when_toggled() {
        let (app, _) = app(1.0);

        let response = app
            .oneshot(json_request("PUT", "/api/devices/1/power", r#"{"on":true}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!({ "on": true }));
    }

    #[tokio::test]
    async fn should_alert_and_return_no_content_when_overloaded() {
        let (app, notifier) = app(1.0);
        let mut alerts = notifier.subscribe();

        let toggled = app
            .clone()
            .oneshot(json_request("PUT", "/api/devices/1/power", r#"{"on":true}"#))
            .await
            .unwrap();
        assert_eq!(toggled.status(), StatusCode::OK);

        let response = app
            .oneshot(json_request("POST", "/api/energy/check", ""))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(alerts.recv().await.unwrap().message.contains("exceeds"));
    }

    #[tokio::test]
    async fn should_report_usage_in_kwh() {
        let (app, _) = app(1.0);
        app.clone()
            .oneshot(json_request("PUT", "/api/devices/1/power", r#"{"on":true}"#))
            .await
            .unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/energy/usage")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["usage_kwh"], 2.0);
    }

    #[tokio::test]
    async fn should_reject_negative_limit() {
        let (app, _) = app(1.0);

        let response = app
            .oneshot(json_request(
                "PUT",
                "/api/energy/plan",
                r#"{"daily_limit_kwh":-1.0}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
