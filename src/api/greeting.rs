#![forbid(unsafe_code)]

use poem::Request;
use poem_openapi::{ OpenApi, payload::PlainText };

use crate::utils::mb_utils::{debug_request, RequestDebug};

// ***************************************************************************
//                                Constants
// ***************************************************************************
// The fixed response body.
const GREETING : &str = "Hola Mibanco";

// ***************************************************************************
//                          Request/Response Definiions
// ***************************************************************************
pub struct GreetingApi;

// The greeting request carries no body or parameters.
struct ReqGreeting;

// Implement the debug record trait for logging.
impl RequestDebug for ReqGreeting {
    type Req = ReqGreeting;
    fn get_request_info(&self) -> String {
        "  Request body: none".to_string()
    }
}

// ***************************************************************************
//                             OpenAPI Endpoint
// ***************************************************************************
#[OpenApi]
impl GreetingApi {
    #[oai(path = "/", method = "get")]
    async fn get_greeting(&self, http_req: &Request) -> PlainText<String> {
        debug_request(http_req, &ReqGreeting);
        PlainText(GREETING.to_string())
    }
}

// ***************************************************************************
//                                  Tests
// ***************************************************************************
#[cfg(test)]
mod tests {
    use poem::{http::StatusCode, test::TestClient, Route};
    use poem_openapi::OpenApiService;

    use super::GreetingApi;

    // Build the routes the same way main does.
    fn test_app() -> Route {
        let api_service = OpenApiService::new(GreetingApi, "MB Server", "0.1.0");
        Route::new().nest("/", api_service)
    }

    #[tokio::test]
    async fn greeting_returns_fixed_body() {
        let cli = TestClient::new(test_app());
        let resp = cli.get("/").send().await;
        resp.assert_status_is_ok();
        resp.assert_text("Hola Mibanco").await;
    }

    #[tokio::test]
    async fn greeting_is_idempotent() {
        let cli = TestClient::new(test_app());
        for _ in 0..3 {
            let resp = cli.get("/").send().await;
            resp.assert_status_is_ok();
            resp.assert_text("Hola Mibanco").await;
        }
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let cli = TestClient::new(test_app());
        let resp = cli.get("/nonexistent").send().await;
        resp.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn wrong_method_is_rejected() {
        let cli = TestClient::new(test_app());
        let resp = cli.post("/").send().await;
        resp.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    }
}
