#![forbid(unsafe_code)]

use poem_openapi::{ OpenApi, payload::Json, Object };

// From cargo.toml.
const MB_VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

// ***************************************************************************
//                          Request/Response Definiions
// ***************************************************************************
pub struct VersionApi;

#[derive(Object)]
struct RespVersion
{
    result_code: String,
    result_msg: String,
    server_version: String,
    git_branch: String,
    git_commit: String,
    git_dirty: String,
    source_ts: String,
    rustc_version: String,
}

// ***************************************************************************
//                             OpenAPI Endpoint
// ***************************************************************************
#[OpenApi]
impl VersionApi {
    #[oai(path = "/version", method = "get")]
    async fn get_version(&self) -> Json<RespVersion> {
        Json(RespVersion::new())
    }
}

// ***************************************************************************
//                          Request/Response Methods
// ***************************************************************************
impl RespVersion {
    // The build metadata is stamped into the binary by build.rs, so
    // assembling the response cannot fail at runtime.
    fn new() -> Self {
        Self {result_code: "0".to_string(),
              result_msg: "success".to_string(),
              server_version: MB_VERSION.unwrap_or("unknown").to_string(),
              git_branch: env!("GIT_BRANCH").to_string(),
              git_commit: env!("GIT_COMMIT_SHORT").to_string(),
              git_dirty: env!("GIT_DIRTY").to_string(),
              source_ts: env!("SOURCE_TIMESTAMP").to_string(),
              rustc_version: env!("RUSTC_VERSION").to_string(),
        }
    }
}

// ***************************************************************************
//                                  Tests
// ***************************************************************************
#[cfg(test)]
mod tests {
    use poem::{test::TestClient, Route};
    use poem_openapi::OpenApiService;

    use super::VersionApi;

    fn test_app() -> Route {
        let api_service = OpenApiService::new(VersionApi, "MB Server", "0.1.0");
        Route::new().nest("/", api_service)
    }

    #[tokio::test]
    async fn version_reports_build_info() {
        let cli = TestClient::new(test_app());
        let resp = cli.get("/version").send().await;
        resp.assert_status_is_ok();

        let json = resp.json().await;
        let obj = json.value().object();
        obj.get("result_code").assert_string("0");
        obj.get("result_msg").assert_string("success");
        assert!(!obj.get("server_version").string().is_empty());
        assert!(!obj.get("rustc_version").string().is_empty());
    }
}
