/// Integration tests for the hook client
/// Only the response status matters: any 2xx succeeds, everything else
/// (including transport failures) collapses into SyncFailed.
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use synctrig::error::TriggerError;
use synctrig::hook::{HookClient, DEFAULT_HOOK_PATH};

#[tokio::test]
async fn test_trigger_succeeds_on_200() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path(DEFAULT_HOOK_PATH))
		.respond_with(ResponseTemplate::new(200))
		.mount(&server)
		.await;

	let client = HookClient::new(&server.uri());
	assert!(client.trigger().await.is_ok());
}

#[tokio::test]
async fn test_trigger_ignores_response_body() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path(DEFAULT_HOOK_PATH))
		.respond_with(ResponseTemplate::new(200).set_body_string("The database was updated."))
		.mount(&server)
		.await;

	let client = HookClient::new(&server.uri());
	assert!(client.trigger().await.is_ok());
}

#[tokio::test]
async fn test_trigger_fails_on_500() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path(DEFAULT_HOOK_PATH))
		.respond_with(ResponseTemplate::new(500))
		.mount(&server)
		.await;

	let client = HookClient::new(&server.uri());
	match client.trigger().await {
		Err(TriggerError::SyncFailed { detail }) => {
			assert!(detail.contains("500"), "detail should name the status: {}", detail);
		}
		other => panic!("Expected SyncFailed, got {:?}", other),
	}
}

#[tokio::test]
async fn test_trigger_fails_on_404() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path(DEFAULT_HOOK_PATH))
		.respond_with(ResponseTemplate::new(404))
		.mount(&server)
		.await;

	let client = HookClient::new(&server.uri());
	assert!(matches!(client.trigger().await, Err(TriggerError::SyncFailed { .. })));
}

#[tokio::test]
async fn test_trigger_fails_on_unreachable_server() {
	// Port 9 (discard) is not listening on the test machine
	let client = HookClient::new("http://127.0.0.1:9");
	assert!(matches!(client.trigger().await, Err(TriggerError::SyncFailed { .. })));
}

#[tokio::test]
async fn test_custom_hook_path() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/hooks/other"))
		.respond_with(ResponseTemplate::new(204))
		.mount(&server)
		.await;

	let client = HookClient::new(&server.uri()).with_hook_path("/hooks/other");
	assert!(client.trigger().await.is_ok());
}

#[test]
fn test_hook_url_trims_trailing_slash() {
	let client = HookClient::new("http://example.com/");
	assert_eq!(client.hook_url(), format!("http://example.com{}", DEFAULT_HOOK_PATH));
}

#[tokio::test]
async fn test_probe_reports_status_without_triggering() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/"))
		.respond_with(ResponseTemplate::new(302))
		.mount(&server)
		.await;

	let client = HookClient::new(&server.uri());
	let status = client.probe().await.expect("probe should reach the mock server");
	assert_eq!(status, 302);

	// The hook itself was never called
	let hook_hits = server
		.received_requests()
		.await
		.expect("mock server records requests")
		.iter()
		.filter(|r| r.url.path() == DEFAULT_HOOK_PATH)
		.count();
	assert_eq!(hook_hits, 0);
}

// vim: ts=4
