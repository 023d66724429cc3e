//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`] which wires the webhook server to a wiremock
//! [`MockServer`] standing in for Overseerr, binding Axum on a random port
//! for HTTP-level testing.

use std::net::SocketAddr;
use std::sync::Arc;

use requestarr::config::{ApplySettings, Config, MatchCriteria, MediaKind, Rule};
use requestarr::overseerr::OverseerrClient;
use requestarr::processor::NotificationProcessor;
use requestarr::server::{create_router, AppContext};
use wiremock::MockServer;

pub struct TestHarness {
    /// Mock Overseerr instance; register expectations against this.
    pub overseerr: MockServer,
    /// Address the webhook server is listening on.
    pub addr: SocketAddr,
}

impl TestHarness {
    /// Start the webhook server with the given rules, wired to a fresh mock
    /// Overseerr instance.
    pub async fn with_rules(rules: Vec<Rule>) -> Self {
        let overseerr = MockServer::start().await;

        let config = Config {
            overseerr_baseurl: overseerr.uri(),
            overseerr_api_key: "test-key".to_string(),
            rules,
            ..Default::default()
        };

        let client = OverseerrClient::new(&config.overseerr_baseurl, &config.overseerr_api_key);
        let processor = Arc::new(NotificationProcessor::new(Arc::new(config), client));
        let app = create_router(AppContext { processor });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind random port");
        let addr = listener.local_addr().expect("failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Self { overseerr, addr }
    }

    pub fn webhook_url(&self) -> String {
        format!("http://{}/webhook", self.addr)
    }
}

/// Build a rule with the given criteria and a standard apply block.
pub fn make_rule(
    name: &str,
    media_type: MediaKind,
    criteria: MatchCriteria,
    approve: bool,
) -> Rule {
    Rule {
        name: Some(name.to_string()),
        media_type,
        match_criteria: criteria,
        apply: ApplySettings {
            root_folder: format!("/data/{}", name),
            server_id: 1,
            quality_profile_id: None,
            approve,
        },
    }
}
