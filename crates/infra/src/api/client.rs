//! HTTP adapter for the remote scheduling service
//!
//! Implements the core's `SchedulingApi` port over reqwest with retry
//! and exponential backoff. Server errors and transport failures are
//! retried; 4xx responses are mapped straight onto the domain error
//! taxonomy and never retried.

use std::time::Duration;

use async_trait::async_trait;
use cadence_core::SchedulingApi;
use cadence_domain::{ApiConfig, CadenceError, ItemDraft, ItemPatch, Result, ScheduledItem};
use reqwest::{Client as ReqwestClient, RequestBuilder, Response, StatusCode};
use tracing::{debug, warn};
use url::Url;

use super::dto::{ItemDraftDto, ItemPatchDto, ScheduledItemDto};

/// Client for the content-scheduling service endpoints
#[derive(Clone)]
pub struct RemoteSchedulingClient {
    client: ReqwestClient,
    base_url: Url,
    max_attempts: usize,
    base_backoff: Duration,
}

impl RemoteSchedulingClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|err| CadenceError::Config(format!("invalid API base url: {err}")))?;
        let client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .no_proxy()
            .build()
            .map_err(|err| CadenceError::Config(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            client,
            base_url,
            max_attempts: config.max_attempts.max(1),
            base_backoff: Duration::from_millis(200),
        })
    }

    /// Override the retry backoff base (tests use a short one).
    pub fn with_base_backoff(mut self, backoff: Duration) -> Self {
        self.base_backoff = backoff;
        self
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    /// Execute the request with retry semantics: transient server
    /// errors and transport failures retry with exponential backoff,
    /// everything else settles immediately.
    async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let attempts = self.max_attempts;

        for attempt in 0..attempts {
            let cloned_builder = builder.try_clone().ok_or_else(|| {
                CadenceError::Internal(
                    "request body cannot be cloned; buffer the body to enable retries".into(),
                )
            })?;

            match cloned_builder.send().await {
                Ok(response) => {
                    let status = response.status();
                    debug!(attempt = attempt + 1, %status, "scheduling service responded");

                    if should_retry_status(status) && attempt + 1 < attempts {
                        self.sleep_with_backoff(attempt + 1).await;
                        continue;
                    }

                    return Ok(response);
                }
                Err(err) => {
                    debug!(attempt = attempt + 1, error = %err, "scheduling service request failed");

                    if attempt + 1 < attempts && should_retry_error(&err) {
                        self.sleep_with_backoff(attempt + 1).await;
                        continue;
                    }

                    return Err(CadenceError::ServiceUnavailable(format!(
                        "scheduling service request failed: {err}"
                    )));
                }
            }
        }

        Err(CadenceError::Internal(
            "http client exhausted retries without producing a result".into(),
        ))
    }

    async fn sleep_with_backoff(&self, retry_number: usize) {
        let shift = retry_number.saturating_sub(1).min(8) as u32;
        let delay = self.base_backoff.saturating_mul(1 << shift);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl SchedulingApi for RemoteSchedulingClient {
    async fn list_scheduled(&self) -> Result<Vec<ScheduledItem>> {
        let response = self.send(self.client.get(self.endpoint("scheduled"))).await?;
        let response = check_status(response).await?;
        let dtos: Vec<ScheduledItemDto> = parse_json(response).await?;

        // A single malformed item degrades to a warning instead of
        // blanking the whole calendar.
        let mut items = Vec::with_capacity(dtos.len());
        for dto in dtos {
            match dto.into_domain() {
                Ok(item) => items.push(item),
                Err(err) => warn!(error = %err, "skipping malformed scheduled item"),
            }
        }
        Ok(items)
    }

    async fn create_scheduled(&self, draft: ItemDraft) -> Result<ScheduledItem> {
        let body = ItemDraftDto::from(draft);
        let response =
            self.send(self.client.post(self.endpoint("scheduled")).json(&body)).await?;
        let response = check_status(response).await?;
        parse_item(response).await
    }

    async fn update_scheduled(&self, id: &str, patch: ItemPatch) -> Result<ScheduledItem> {
        let body = ItemPatchDto::from(patch);
        let response = self
            .send(self.client.patch(self.endpoint(&format!("scheduled/{id}"))).json(&body))
            .await?;
        let response = check_status(response).await?;
        parse_item(response).await
    }

    async fn delete_scheduled(&self, id: &str) -> Result<()> {
        let response =
            self.send(self.client.delete(self.endpoint(&format!("scheduled/{id}")))).await?;
        check_status(response).await?;
        Ok(())
    }

    async fn duplicate_scheduled(&self, source_id: &str, draft: ItemDraft) -> Result<ScheduledItem> {
        let body = ItemDraftDto::from(draft.clone());
        let response = self
            .send(
                self.client
                    .post(self.endpoint(&format!("scheduled/{source_id}/duplicate")))
                    .json(&body),
            )
            .await?;

        // Servers without a native duplicate endpoint answer 404/405/501
        // for the route itself; synthesize through a plain create.
        let status = response.status();
        if matches!(
            status,
            StatusCode::NOT_FOUND | StatusCode::METHOD_NOT_ALLOWED | StatusCode::NOT_IMPLEMENTED
        ) {
            debug!(%status, "duplicate endpoint unavailable; falling back to create");
            return self.create_scheduled(draft).await;
        }

        let response = check_status(response).await?;
        parse_item(response).await
    }
}

fn should_retry_error(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_request() || err.is_connect()
}

/// 5xx responses are transient except 501, which states the route
/// itself is missing and will not appear on a retry.
fn should_retry_status(status: StatusCode) -> bool {
    status.is_server_error() && status != StatusCode::NOT_IMPLEMENTED
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(map_status(status, &body))
}

fn map_status(status: StatusCode, body: &str) -> CadenceError {
    match status {
        StatusCode::NOT_FOUND => {
            CadenceError::NotFound(format!("scheduling service: {}", detail(body)))
        }
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            CadenceError::Validation(format!("scheduling service rejected the request: {}", detail(body)))
        }
        StatusCode::CONFLICT => {
            CadenceError::ConflictInProgress(format!("scheduling service: {}", detail(body)))
        }
        status => CadenceError::ServiceUnavailable(format!(
            "scheduling service returned {status}: {}",
            detail(body)
        )),
    }
}

fn detail(body: &str) -> &str {
    if body.trim().is_empty() {
        "no detail provided"
    } else {
        body
    }
}

async fn parse_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T> {
    response.json::<T>().await.map_err(|err| {
        CadenceError::Internal(format!("malformed response from scheduling service: {err}"))
    })
}

async fn parse_item(response: Response) -> Result<ScheduledItem> {
    parse_json::<ScheduledItemDto>(response).await?.into_domain()
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client_for(server: &MockServer) -> RemoteSchedulingClient {
        let config = ApiConfig {
            base_url: server.uri(),
            timeout_secs: 5,
            max_attempts: 3,
        };
        RemoteSchedulingClient::new(&config)
            .unwrap()
            .with_base_backoff(Duration::from_millis(5))
    }

    fn item_json(id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "title": "Launch teaser",
            "description": "",
            "platforms": ["twitter", "instagram"],
            "contentType": "post",
            "scheduledTime": "2025-01-28T09:00:00Z",
            "status": "scheduled",
            "priority": "high",
            "tags": []
        })
    }

    #[tokio::test]
    async fn list_parses_items_from_the_wire() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/scheduled"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([item_json("srv-1")])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let items = client_for(&server).list_scheduled().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "srv-1");
        assert_eq!(items[0].platforms.len(), 2);
    }

    #[tokio::test]
    async fn list_skips_malformed_items_instead_of_failing() {
        let server = MockServer::start().await;
        let mut bad = item_json("srv-2");
        bad["platforms"] = json!([]);
        Mock::given(method("GET"))
            .and(path("/scheduled"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([item_json("srv-1"), bad])),
            )
            .mount(&server)
            .await;

        let items = client_for(&server).list_scheduled().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "srv-1");
    }

    #[tokio::test]
    async fn list_retries_server_errors_until_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/scheduled"))
            .respond_with(ResponseTemplate::new(500))
            .up_to_n_times(2)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/scheduled"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let items = client_for(&server).list_scheduled().await.unwrap();
        assert!(items.is_empty());
        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 3);
    }

    #[tokio::test]
    async fn exhausted_retries_surface_service_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/scheduled"))
            .respond_with(ResponseTemplate::new(503))
            .expect(3)
            .mount(&server)
            .await;

        let err = client_for(&server).list_scheduled().await.unwrap_err();
        assert!(matches!(err, CadenceError::ServiceUnavailable(_)));
    }

    #[tokio::test]
    async fn unreachable_service_maps_to_service_unavailable() {
        let config = ApiConfig {
            // Nothing listens here.
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 1,
            max_attempts: 2,
        };
        let client = RemoteSchedulingClient::new(&config)
            .unwrap()
            .with_base_backoff(Duration::from_millis(1));

        let err = client.list_scheduled().await.unwrap_err();
        assert!(matches!(err, CadenceError::ServiceUnavailable(_)));
    }

    #[tokio::test]
    async fn create_posts_the_draft_and_parses_the_item() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/scheduled"))
            .and(body_partial_json(json!({ "title": "Launch teaser" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(item_json("srv-9")))
            .expect(1)
            .mount(&server)
            .await;

        let draft: ItemDraftDto =
            serde_json::from_value(item_json("ignored")).unwrap();
        let draft = ItemDraft {
            title: draft.title,
            description: draft.description,
            platforms: draft.platforms.into_iter().collect(),
            content_type: draft.content_type,
            scheduled_time: draft.scheduled_time,
            status: draft.status,
            priority: draft.priority,
            tags: draft.tags.into_iter().collect(),
        };
        let created = client_for(&server).create_scheduled(draft).await.unwrap();
        assert_eq!(created.id, "srv-9");
    }

    #[tokio::test]
    async fn validation_failures_are_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/scheduled"))
            .respond_with(ResponseTemplate::new(422).set_body_string("bad payload"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server).list_scheduled().await.unwrap_err();
        assert!(matches!(err, CadenceError::Validation(_)));
    }

    #[tokio::test]
    async fn update_of_a_missing_item_maps_to_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/scheduled/ghost"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .update_scheduled("ghost", ItemPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, CadenceError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_succeeds_on_no_content() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/scheduled/srv-1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server).delete_scheduled("srv-1").await.unwrap();
    }

    #[tokio::test]
    async fn not_implemented_settles_on_the_first_attempt() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/scheduled"))
            .respond_with(ResponseTemplate::new(501))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server).list_scheduled().await.unwrap_err();
        assert!(matches!(err, CadenceError::ServiceUnavailable(_)));
    }

    #[tokio::test]
    async fn duplicate_falls_back_to_create_when_unimplemented() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/scheduled/srv-1/duplicate"))
            .respond_with(ResponseTemplate::new(501))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/scheduled"))
            .respond_with(ResponseTemplate::new(201).set_body_json(item_json("srv-2")))
            .expect(1)
            .mount(&server)
            .await;

        let dto: ScheduledItemDto = serde_json::from_value(item_json("srv-1")).unwrap();
        let source = dto.into_domain().unwrap();
        let draft = ItemDraft {
            title: source.title.clone(),
            description: source.description.clone(),
            platforms: source.platforms.clone(),
            content_type: source.content_type,
            scheduled_time: source.scheduled_time,
            status: Some(source.status),
            priority: source.priority,
            tags: source.tags.clone(),
        };

        let copy = client_for(&server).duplicate_scheduled("srv-1", draft).await.unwrap();
        assert_eq!(copy.id, "srv-2");
    }
}
