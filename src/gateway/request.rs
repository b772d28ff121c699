//! Outbound request description
//!
//! Every request carries a cache-busting `_t` parameter holding the send
//! time in epoch milliseconds: in the query string for GET, merged into the
//! JSON body otherwise.

use serde::Serialize;
use serde_json::{Map, Value};

/// Name of the cache-busting parameter
pub const CACHE_BUSTER: &str = "_t";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request relative to the API base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Append a query parameter
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Set the JSON body
    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, serde_json::Error> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Inject the cache-busting timestamp
    ///
    /// A POST without a body gets `{"_t": ..}`; a non-object body is left
    /// as it is.
    pub fn with_cache_buster(mut self, now_ms: i64) -> Self {
        match self.method {
            Method::Get => {
                self.query.retain(|(k, _)| k != CACHE_BUSTER);
                self.query.push((CACHE_BUSTER.to_string(), now_ms.to_string()));
            }
            Method::Post => match self.body {
                Some(Value::Object(ref mut map)) => {
                    map.insert(CACHE_BUSTER.to_string(), Value::from(now_ms));
                }
                Some(_) => {}
                None => {
                    let mut map = Map::new();
                    map.insert(CACHE_BUSTER.to_string(), Value::from(now_ms));
                    self.body = Some(Value::Object(map));
                }
            },
        }
        self
    }

    /// Absolute URL against `base`, query percent-encoded
    pub fn url(&self, base: &str) -> String {
        let base = base.trim_end_matches('/');
        let path = if self.path.starts_with('/') || self.path.is_empty() {
            self.path.clone()
        } else {
            format!("/{}", self.path)
        };

        let mut url = format!("{}{}", base, path);
        if !self.query.is_empty() {
            let query = self
                .query
                .iter()
                .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                .collect::<Vec<_>>()
                .join("&");
            url.push(if url.contains('?') { '&' } else { '?' });
            url.push_str(&query);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_cache_buster_in_query() {
        let req = ApiRequest::get("/api/weight/records")
            .query("page", 1)
            .query("size", 10)
            .with_cache_buster(1700000000000);

        assert!(req.body.is_none());
        assert_eq!(
            req.url("http://localhost:8000/"),
            "http://localhost:8000/api/weight/records?page=1&size=10&_t=1700000000000"
        );
    }

    #[test]
    fn test_cache_buster_replaced_not_duplicated() {
        let req = ApiRequest::get("/x").with_cache_buster(1).with_cache_buster(2);
        assert_eq!(req.query, vec![("_t".to_string(), "2".to_string())]);
    }

    #[test]
    fn test_post_cache_buster_in_body() {
        let req = ApiRequest::post("/weight/delete")
            .json(&json!({ "del_id": "7" }))
            .unwrap()
            .with_cache_buster(42);

        assert!(req.query.is_empty());
        assert_eq!(req.body, Some(json!({ "del_id": "7", "_t": 42 })));

        let empty = ApiRequest::post("/download").with_cache_buster(42);
        assert_eq!(empty.body, Some(json!({ "_t": 42 })));

        let list = ApiRequest::post("/bulk")
            .json(&json!([1, 2]))
            .unwrap()
            .with_cache_buster(42);
        assert_eq!(list.body, Some(json!([1, 2])));
    }

    #[test]
    fn test_url_encoding_and_relative_path() {
        let req = ApiRequest::get("api/blog").query("q", "a b&c");
        assert_eq!(req.url("http://h"), "http://h/api/blog?q=a%20b%26c");
    }
}
