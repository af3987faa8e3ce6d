//! Registry test utilities

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use mockito::{Mock, ServerGuard};
use serde_json::{Value, json};
use url::Url;

use npm_package_info::{Fetcher, RawResponse};

/// Fetcher answering from a fixed table, 404 for anything else
pub struct StubFetcher {
    responses: HashMap<String, RawResponse>,
    requested: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn with_response(mut self, url: &str, status: u16, body: Value) -> Self {
        self.responses.insert(
            url.to_string(),
            RawResponse {
                status,
                body: body.to_string(),
            },
        );
        self
    }

    /// URLs requested so far, in order
    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetcher for StubFetcher {
    async fn fetch(&self, url: &Url) -> Result<RawResponse, reqwest::Error> {
        self.requested.lock().unwrap().push(url.to_string());

        Ok(self
            .responses
            .get(url.as_str())
            .cloned()
            .unwrap_or(RawResponse {
                status: 404,
                body: r#"{"error":"Not found"}"#.to_string(),
            }))
    }
}

/// Registry document shaped like a real npm response
pub fn left_pad_document() -> Value {
    json!({
        "_id": "left-pad",
        "_rev": "65-7a2bd2ad4bf1d1a2a4cfb5b6a7f6e1f3",
        "name": "left-pad",
        "description": "String left pad",
        "dist-tags": { "latest": "1.3.0", "next": "2.0.0-beta.1" },
        "versions": {
            "0.0.9": { "name": "left-pad", "version": "0.0.9" },
            "1.0.0": { "name": "left-pad", "version": "1.0.0" },
            "1.1.3": { "name": "left-pad", "version": "1.1.3" },
            "1.3.0": {
                "name": "left-pad",
                "version": "1.3.0",
                "dist": { "tarball": "https://registry.npmjs.org/left-pad/-/left-pad-1.3.0.tgz" }
            },
            "1.2.0": { "name": "left-pad", "version": "1.2.0" },
            "2.0.0-beta.1": { "name": "left-pad", "version": "2.0.0-beta.1" }
        },
        "readme": "# left-pad\n",
        "homepage": "https://github.com/stevemao/left-pad#readme",
        "maintainers": [{ "name": "stevemao", "email": "maochenyan@gmail.com" }],
        "time": {
            "created": "2014-03-14T03:22:13.318Z",
            "modified": "2018-04-09T05:11:19.473Z",
            "1.3.0": "2018-04-09T05:11:17.470Z"
        },
        "author": { "name": "azer" },
        "repository": { "type": "git", "url": "git+ssh://git@github.com/stevemao/left-pad.git" },
        "license": "WTFPL",
        "keywords": ["leftpad", "left", "pad", "padding", "string", "repeat"]
    })
}

/// Register a GET mock for `path` on `server`
pub async fn mock_package(server: &mut ServerGuard, path: &str, status: usize, body: &Value) -> Mock {
    server
        .mock("GET", path)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}
