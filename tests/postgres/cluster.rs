//! Server lifecycle for the `PostgreSQL` integration suite.
//!
//! Tests connect to `STAFFNET_TEST_DATABASE_URL` when it is set. Otherwise
//! the first test to ask starts an embedded server shared by the whole run.
//! A server that cannot be reached or started fails the test loudly.

use postgresql_embedded::{PostgreSQL, Status};
use tokio::sync::OnceCell;

/// Environment variable naming an existing test server.
pub const TEST_DATABASE_URL_VAR: &str = "STAFFNET_TEST_DATABASE_URL";

static SHARED_SERVER: OnceCell<TestServer> = OnceCell::const_new();

/// Connection details for the server used by this test run.
pub struct TestServer {
    url: String,
    // Held so the embedded server outlives every test.
    _embedded: Option<PostgreSQL>,
}

impl TestServer {
    /// Returns the connection URL of the `postgres` maintenance database.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn start() -> Result<Self, postgresql_embedded::Error> {
        if let Ok(url) = std::env::var(TEST_DATABASE_URL_VAR) {
            return Ok(Self {
                url,
                _embedded: None,
            });
        }

        let mut postgres = PostgreSQL::default();
        postgres.setup().await?;
        if !matches!(postgres.status(), Status::Started) {
            postgres.start().await?;
        }
        let url = postgres.settings().url("postgres");
        Ok(Self {
            url,
            _embedded: Some(postgres),
        })
    }
}

/// Returns the shared test server, starting it on first use.
///
/// # Panics
///
/// Panics with a `SKIP-TEST-CLUSTER` marker when no server is configured and
/// the embedded one cannot start (for example when running as root).
pub async fn shared_server() -> &'static TestServer {
    match SHARED_SERVER.get_or_try_init(TestServer::start).await {
        Ok(server) => server,
        Err(err) => panic!(
            "SKIP-TEST-CLUSTER: failed to start embedded PostgreSQL ({err}); \
             set {TEST_DATABASE_URL_VAR} to use an existing server"
        ),
    }
}
