//! Weight API client
//!
//! [`ApiGateway`] turns typed calls into [`ApiRequest`]s, stamps them with
//! the cache buster and default headers, and decodes the envelope. Every
//! failure is logged and handed to the [`Reporter`] before it is returned,
//! so callers only deal with the `Err` for control flow.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::dto::{
    CreateRecordRequest, DeleteRecordRequest, RecordPage, RemoteRecord, UpdateRecordRequest,
};
use super::envelope;
use super::error::{GatewayError, GatewayResult};
use super::report::Reporter;
use super::request::ApiRequest;
use super::transport::{HttpCall, RawResponse, Transport};
use crate::config::{ApiConfig, EndpointsConfig};
use crate::records::{RecordDraft, Weight};

pub const DELETE_TITLE: &str = "Delete this record?";
pub const DELETE_CONTENT: &str = "This cannot be undone";

/// Text of a confirmation dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub content: String,
}

impl ConfirmPrompt {
    pub fn delete_record() -> Self {
        Self {
            title: DELETE_TITLE.to_string(),
            content: DELETE_CONTENT.to_string(),
        }
    }
}

/// Asks the user to confirm a destructive action
#[async_trait(?Send)]
pub trait Confirm {
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool;
}

#[async_trait(?Send)]
impl<F> Confirm for F
where
    F: Fn(&ConfirmPrompt) -> bool,
{
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        self(prompt)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The user declined; nothing was sent
    Cancelled,
}

/// REST client for the weight endpoints
pub struct ApiGateway<T, R> {
    transport: T,
    reporter: R,
    config: ApiConfig,
    endpoints: EndpointsConfig,
}

impl<T: Transport, R: Reporter> ApiGateway<T, R> {
    pub fn new(transport: T, reporter: R, config: ApiConfig) -> Self {
        Self {
            transport,
            reporter,
            config,
            endpoints: EndpointsConfig::default(),
        }
    }

    /// Builder: override endpoint paths
    pub fn with_endpoints(mut self, endpoints: EndpointsConfig) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn endpoints(&self) -> &EndpointsConfig {
        &self.endpoints
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send a request and unwrap its envelope
    pub async fn call<D: DeserializeOwned>(&self, request: ApiRequest) -> GatewayResult<D> {
        let result = match self.send(request).await {
            Ok(response) => envelope::decode(&response.body),
            Err(e) => Err(e),
        };
        result.map_err(|e| self.fail(e))
    }

    /// Fetch one page of the current user's records
    pub async fn list_records(&self, page: usize, size: usize) -> GatewayResult<RecordPage> {
        let request = ApiRequest::get(&self.endpoints.records)
            .query("page", page)
            .query("size", size);
        self.call(request).await
    }

    /// Fetch every page, `size` records at a time
    pub async fn fetch_all_records(&self, size: usize) -> GatewayResult<Vec<RemoteRecord>> {
        let size = size.max(1);
        let mut records = Vec::new();
        let mut seen = 0u64;
        let mut skipped = 0;
        let mut page = 1;

        loop {
            let batch = self.list_records(page, size).await?;
            let received = batch.received();
            seen += received as u64;
            skipped += batch.skipped;
            records.extend(batch.list);

            if received == 0 || seen >= batch.total {
                break;
            }
            page += 1;
        }

        tracing::debug!(count = records.len(), skipped, pages = page, "Fetched all records");
        Ok(records)
    }

    /// Create a record; returns the server's copy when it sends one back
    pub async fn create_record(&self, draft: &RecordDraft) -> GatewayResult<Option<RemoteRecord>> {
        let request = self.with_body(
            ApiRequest::post(&self.endpoints.create),
            &CreateRecordRequest::from(draft),
        )?;
        let data: Value = self.call(request).await?;
        Ok(serde_json::from_value(data).ok())
    }

    pub async fn update_record(&self, id: &str, weight: Weight) -> GatewayResult<()> {
        let body = UpdateRecordRequest {
            update_id: id.to_string(),
            new_weight: weight.one_decimal(),
        };
        let request = self.with_body(ApiRequest::post(&self.endpoints.update), &body)?;
        let _: Value = self.call(request).await?;
        Ok(())
    }

    /// Delete a record once the user confirms
    pub async fn delete_record<C>(&self, id: &str, confirm: &C) -> GatewayResult<DeleteOutcome>
    where
        C: Confirm + ?Sized,
    {
        if !confirm.confirm(&ConfirmPrompt::delete_record()).await {
            tracing::debug!(record_id = %id, "Remote delete cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }

        let body = DeleteRecordRequest {
            del_id: id.to_string(),
        };
        let request = self.with_body(ApiRequest::post(&self.endpoints.delete), &body)?;
        let _: Value = self.call(request).await?;
        Ok(DeleteOutcome::Deleted)
    }

    /// POST to a download endpoint and return the raw payload
    pub async fn download(&self, path: &str, params: Option<&Value>) -> GatewayResult<Vec<u8>> {
        let mut request = ApiRequest::post(path);
        if let Some(params) = params {
            request = self.with_body(request, params)?;
        }

        match self.send(request).await {
            Ok(response) => Ok(response.body),
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Download the configured records export
    pub async fn export_records(&self) -> GatewayResult<Vec<u8>> {
        self.download(&self.endpoints.export, None).await
    }

    fn with_body<B: Serialize>(&self, request: ApiRequest, body: &B) -> GatewayResult<ApiRequest> {
        request
            .json(body)
            .map_err(|e| self.fail(GatewayError::Encode(e.to_string())))
    }

    async fn send(&self, request: ApiRequest) -> GatewayResult<RawResponse> {
        let request = request.with_cache_buster(chrono::Utc::now().timestamp_millis());
        let call = HttpCall {
            method: request.method,
            url: request.url(&self.config.base_url),
            body: request.body,
            headers: self.headers(),
        };

        tracing::debug!(method = %call.method, url = %call.url, "API request");
        let response = self.transport.execute(call).await?;

        if !response.is_success() {
            let message = envelope::server_message(&response.body).unwrap_or_else(|| {
                if response.status_text.is_empty() {
                    format!("Request failed with status code {}", response.status)
                } else {
                    response.status_text.clone()
                }
            });
            return Err(GatewayError::Http {
                status: response.status,
                message,
            });
        }

        Ok(response)
    }

    fn headers(&self) -> Vec<(String, String)> {
        vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            ("X-Custom-Header".to_string(), self.config.client_header.clone()),
        ]
    }

    fn fail(&self, err: GatewayError) -> GatewayError {
        tracing::warn!(kind = ?err.kind(), error = %err, "API request failed");
        self.reporter.report(err.report());
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::report::ErrorReport;
    use crate::gateway::request::Method;
    use crate::gateway::transport::mock::MockTransport;
    use crate::gateway::transport::TransportError;
    use crate::records::RecordForm;
    use chrono::NaiveDate;
    use serde_json::json;
    use std::cell::RefCell;

    type Reports = RefCell<Vec<ErrorReport>>;

    fn gateway<'a>(
        transport: MockTransport,
        reports: &'a Reports,
    ) -> ApiGateway<MockTransport, impl Fn(ErrorReport) + 'a> {
        ApiGateway::new(
            transport,
            move |r: ErrorReport| reports.borrow_mut().push(r),
            ApiConfig::default(),
        )
    }

    fn record_json(id: u64, day: &str, weight: &str) -> Value {
        json!({
            "id": id,
            "date": day,
            "weight": weight,
            "submitted_at": format!("{}T08:00:00Z", day),
            "updated_at": format!("{}T08:00:00Z", day),
        })
    }

    #[tokio::test]
    async fn test_list_records_decodes_envelope() {
        let reports = Reports::default();
        let transport = MockTransport::new().respond_json(json!({
            "code": 0,
            "data": { "list": [record_json(1, "2024-03-01", "65.0")], "total": 1 }
        }));
        let api = gateway(transport, &reports);

        let page = api.list_records(1, 10).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.list[0].id, "1");

        let call = api.transport().last_call();
        assert_eq!(call.method, Method::Get);
        assert!(call
            .url
            .starts_with("http://localhost:8000/api/weight/records?page=1&size=10&_t="));
        assert!(call.body.is_none());
        assert!(call
            .headers
            .contains(&("X-Custom-Header".to_string(), "weight-manager".to_string())));
        assert!(reports.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_business_error_reported() {
        let reports = Reports::default();
        let transport =
            MockTransport::new().respond_json(json!({ "code": 1, "msg": "Weight out of range" }));
        let api = gateway(transport, &reports);

        let err = api.update_record("5", Weight::from_kg(64.5).unwrap()).await.unwrap_err();
        assert_eq!(err.to_string(), "Weight out of range");
        assert_eq!(
            reports.borrow().as_slice(),
            &[ErrorReport::Notify("Weight out of range".into())]
        );

        let call = api.transport().last_call();
        let body = call.body.unwrap();
        assert_eq!(body["update_id"], "5");
        assert_eq!(body["new_weight"], "64.5");
        assert!(body["_t"].is_i64());
    }

    #[tokio::test]
    async fn test_http_error_prefers_server_message() {
        let reports = Reports::default();
        let transport = MockTransport::new()
            .respond(Ok(RawResponse::new(
                403,
                "Forbidden",
                json!({ "code": 403, "msg": "No permission to edit" }).to_string(),
            )))
            .respond(Ok(RawResponse::new(502, "Bad Gateway", "upstream down")));
        let api = gateway(transport, &reports);

        let err = api.list_records(1, 10).await.unwrap_err();
        assert_eq!(
            err,
            GatewayError::Http {
                status: 403,
                message: "No permission to edit".into()
            }
        );
        assert!(reports.borrow()[0].is_permission_denied());

        let err = api.list_records(1, 10).await.unwrap_err();
        assert_eq!(err.to_string(), "Bad Gateway");
        assert!(!reports.borrow()[1].is_permission_denied());
    }

    #[tokio::test]
    async fn test_transport_error_reported() {
        let reports = Reports::default();
        let transport = MockTransport::new().respond(Err(TransportError::Timeout));
        let api = gateway(transport, &reports);

        let err = api.list_records(1, 10).await.unwrap_err();
        assert_eq!(err, GatewayError::Transport(TransportError::Timeout));
        assert_eq!(reports.borrow()[0].message(), "Request timeout");
    }

    #[tokio::test]
    async fn test_delete_requires_confirmation() {
        let reports = Reports::default();
        let transport = MockTransport::new().respond_json(json!({ "code": 0 }));
        let api = gateway(transport, &reports);

        let asked = RefCell::new(Vec::new());
        let decline = |p: &ConfirmPrompt| {
            asked.borrow_mut().push(p.clone());
            false
        };
        let outcome = api.delete_record("7", &decline).await.unwrap();
        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert_eq!(api.transport().call_count(), 0);
        assert_eq!(asked.borrow()[0], ConfirmPrompt::delete_record());

        let accept = |_: &ConfirmPrompt| true;
        let outcome = api.delete_record("7", &accept).await.unwrap();
        assert_eq!(outcome, DeleteOutcome::Deleted);
        let body = api.transport().last_call().body.unwrap();
        assert_eq!(body["del_id"], "7");
    }

    #[tokio::test]
    async fn test_create_record_tolerates_any_data() {
        let reports = Reports::default();
        let transport = MockTransport::new()
            .respond_json(json!({ "code": 0, "data": record_json(9, "2024-03-05", "64.5") }))
            .respond_json(json!({ "code": 0, "data": { "id": 10 } }));
        let api = gateway(transport, &reports);
        let draft = RecordForm::new(NaiveDate::from_ymd_opt(2024, 3, 5), "64.5")
            .validate()
            .unwrap();

        let created = api.create_record(&draft).await.unwrap();
        assert_eq!(created.map(|r| r.id), Some("9".to_string()));
        let body = api.transport().last_call().body.unwrap();
        assert_eq!(body["date"], "2024-03-05");
        assert_eq!(body["weight"], 64.5);

        assert_eq!(api.create_record(&draft).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_fetch_all_records_follows_total() {
        let reports = Reports::default();
        let transport = MockTransport::new()
            .respond_json(json!({ "code": 0, "data": {
                "list": [record_json(1, "2024-03-01", "65"), record_json(2, "2024-03-02", "66")],
                "total": 3
            }}))
            .respond_json(json!({ "code": 0, "data": {
                "list": [record_json(3, "2024-03-03", "67")],
                "total": 3
            }}));
        let api = gateway(transport, &reports);

        let all = api.fetch_all_records(2).await.unwrap();
        let ids: Vec<&str> = all.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(api.transport().call_count(), 2);
    }

    #[tokio::test]
    async fn test_fetch_all_records_counts_skipped_rows() {
        let reports = Reports::default();
        let transport = MockTransport::new()
            .respond_json(json!({ "code": 0, "data": {
                "list": [record_json(1, "2024-03-01", "65"), record_json(2, "2024-03-02", "15")],
                "total": 3
            }}))
            .respond_json(json!({ "code": 0, "data": {
                "list": [record_json(3, "2024-03-03", "67")],
                "total": 3
            }}));
        let api = gateway(transport, &reports);

        let all = api.fetch_all_records(2).await.unwrap();
        let ids: Vec<&str> = all.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(api.transport().call_count(), 2);
        assert!(reports.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_download_returns_raw_bytes() {
        let reports = Reports::default();
        let transport =
            MockTransport::new().respond(Ok(RawResponse::new(200, "OK", b"a,b\n1,2\n".to_vec())));
        let api = gateway(transport, &reports);

        let bytes = api
            .download("/weight/export", Some(&json!({ "user": "user1" })))
            .await
            .unwrap();
        assert_eq!(bytes, b"a,b\n1,2\n");

        let call = api.transport().last_call();
        assert_eq!(call.method, Method::Post);
        assert_eq!(call.body.unwrap()["user"], "user1");
    }

    #[tokio::test]
    async fn test_export_records_uses_configured_path() {
        let reports = Reports::default();
        let transport =
            MockTransport::new().respond(Ok(RawResponse::new(200, "OK", b"seq,weight\n".to_vec())));
        let endpoints = EndpointsConfig {
            export: "/reports/weight.csv".to_string(),
            ..EndpointsConfig::default()
        };
        let api = gateway(transport, &reports).with_endpoints(endpoints);

        let bytes = api.export_records().await.unwrap();
        assert_eq!(bytes, b"seq,weight\n");

        let call = api.transport().last_call();
        assert_eq!(call.method, Method::Post);
        assert!(call.url.starts_with("http://localhost:8000/reports/weight.csv"));
    }
}
