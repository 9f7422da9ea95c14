#![forbid(unsafe_code)]

use poem_openapi::{ OpenApi, payload::Json, Object };

use crate::utils::mb_utils::timestamp_str;

// ***************************************************************************
//                          Request/Response Definiions
// ***************************************************************************
pub struct HealthcheckApi;

#[derive(Object)]
struct RespHealthcheck
{
    status: String,
    time: String,
}

// ***************************************************************************
//                             OpenAPI Endpoint
// ***************************************************************************
#[OpenApi]
impl HealthcheckApi {
    #[oai(path = "/healthcheck", method = "get")]
    async fn get_healthcheck(&self) -> Json<RespHealthcheck> {
        Json(RespHealthcheck::new())
    }
}

// ***************************************************************************
//                          Request/Response Methods
// ***************************************************************************
impl RespHealthcheck {
    fn new() -> Self {
        Self {status: "UP".to_string(), time: timestamp_str()}
    }
}

// ***************************************************************************
//                                  Tests
// ***************************************************************************
#[cfg(test)]
mod tests {
    use poem::{test::TestClient, Route};
    use poem_openapi::OpenApiService;

    use super::HealthcheckApi;
    use crate::utils::mb_utils::timestamp_str_to_datetime;

    fn test_app() -> Route {
        let api_service = OpenApiService::new(HealthcheckApi, "MB Server", "0.1.0");
        Route::new().nest("/", api_service)
    }

    #[tokio::test]
    async fn healthcheck_reports_up() {
        let cli = TestClient::new(test_app());
        let resp = cli.get("/healthcheck").send().await;
        resp.assert_status_is_ok();

        let json = resp.json().await;
        let obj = json.value().object();
        obj.get("status").assert_string("UP");
        assert!(timestamp_str_to_datetime(obj.get("time").string()).is_ok());
    }
}
