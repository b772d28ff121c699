//! HTTP API Client
//!
//! Browser side of the gateway: a fetch-backed [`Transport`], the
//! confirmation dialog and file downloads.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use wasm_bindgen::JsCast;

use healthhub::blog::{fetch_blog_posts, BlogError, BlogPost, BlogQuery};
use healthhub::config::{default_base_url, ApiConfig, BlogConfig};
use healthhub::gateway::transport::HttpCall;
use healthhub::gateway::{
    ApiGateway, Confirm, ConfirmPrompt, Method, RawResponse, Transport, TransportError,
};

use crate::state::GlobalState;

const API_URL_KEY: &str = "healthhub_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .unwrap_or_else(default_base_url);
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_URL_KEY, url);
        }
    }
}

/// `fetch` transport; aborts the request once `timeout` elapses
#[derive(Debug, Clone, Copy)]
pub struct GlooTransport {
    timeout: Duration,
}

impl GlooTransport {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for GlooTransport {
    fn default() -> Self {
        Self::new(Duration::from_secs(ApiConfig::default().timeout_secs))
    }
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn execute(&self, call: HttpCall) -> Result<RawResponse, TransportError> {
        let controller = web_sys::AbortController::new()
            .map_err(|e| TransportError::Build(format!("{:?}", e)))?;

        let mut builder: RequestBuilder = match call.method {
            Method::Get => Request::get(&call.url),
            Method::Post => Request::post(&call.url),
        };
        for (name, value) in &call.headers {
            builder = builder.header(name, value);
        }
        builder = builder.abort_signal(Some(&controller.signal()));

        let request = match &call.body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| TransportError::Build(e.to_string()))?;

        let timed_out = Rc::new(Cell::new(false));
        let flag = timed_out.clone();
        let millis = u32::try_from(self.timeout.as_millis()).unwrap_or(u32::MAX);
        // Dropped (and cancelled) when this function returns
        let _timer = gloo_timers::callback::Timeout::new(millis, move || {
            flag.set(true);
            controller.abort();
        });

        let response = match request.send().await {
            Ok(response) => response,
            Err(_) if timed_out.get() => return Err(TransportError::Timeout),
            Err(e) => return Err(TransportError::Network(e.to_string())),
        };

        let status = response.status();
        let status_text = response.status_text();
        let body = match response.binary().await {
            Ok(body) => body,
            Err(_) if timed_out.get() => return Err(TransportError::Timeout),
            Err(e) => return Err(TransportError::Network(e.to_string())),
        };

        Ok(RawResponse::new(status, status_text, body))
    }

    async fn pause(&self, duration: Duration) {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::future::TimeoutFuture::new(millis).await;
    }
}

/// Gateway wired to the browser: errors surface through [`GlobalState`]
pub type Gateway = ApiGateway<GlooTransport, GlobalState>;

pub fn gateway(state: GlobalState) -> Gateway {
    let config = ApiConfig {
        base_url: get_api_base(),
        ..ApiConfig::default()
    };
    let transport = GlooTransport::new(Duration::from_secs(config.timeout_secs));
    ApiGateway::new(transport, state, config)
}

/// `window.confirm` dialog
pub struct BrowserConfirm;

#[async_trait(?Send)]
impl Confirm for BrowserConfirm {
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        confirm_now(prompt)
    }
}

/// Synchronous form for local-only deletes
pub fn confirm_now(prompt: &ConfirmPrompt) -> bool {
    web_sys::window()
        .and_then(|window| {
            window
                .confirm_with_message(&format!("{}\n{}", prompt.title, prompt.content))
                .ok()
        })
        .unwrap_or(false)
}

/// Hand `bytes` to the browser as a file download
pub fn save_download(bytes: &[u8], filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window")?;
    let document = window.document().ok_or("No document")?;

    let array = js_sys::Uint8Array::from(bytes);
    let blob = web_sys::Blob::new_with_u8_array_sequence(&js_sys::Array::of1(&array))
        .map_err(|e| format!("{:?}", e))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| format!("{:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("{:?}", e))?;
    let _ = anchor.set_attribute("href", &url);
    let _ = anchor.set_attribute("download", filename);
    if let Some(el) = anchor.dyn_ref::<web_sys::HtmlElement>() {
        el.click();
    }
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

/// Fetch a blog listing with the default retry policy
pub async fn load_blog_posts(query: BlogQuery) -> Result<Vec<BlogPost>, BlogError> {
    let retries = BlogConfig::default().retry_count;
    fetch_blog_posts(&GlooTransport::default(), &get_api_base(), &query, retries).await
}
