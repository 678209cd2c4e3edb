//! REST Client
//!
//! `reqwest` bindings for the exam API. Every collection lives under
//! `<api_base>/<base>` and follows the same verb/path table.

use std::marker::PhantomData;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{NetworkError, UploadError};
use crate::record::Record;
use crate::records::{AdminAccount, Resource};
use crate::remote::{RemoteCollection, UploadFile};

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Percent-encode one path segment.
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// Join the API base and path segments with single slashes.
pub fn join_url(base: &str, segments: &[&str]) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    for segment in segments {
        url.push('/');
        url.push_str(&encode_segment(segment));
    }
    url
}

/// Shared HTTP client bound to an API base URL
#[derive(Clone, Debug)]
pub struct RestClient {
    http: Client,
    api_base: String,
}

impl RestClient {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_base: api_base.into(),
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn url(&self, segments: &[&str]) -> String {
        join_url(&self.api_base, segments)
    }

    /// Collection client for a record type
    pub fn collection<T: Resource>(&self) -> RestCollection<T> {
        RestCollection::new(self.clone(), T::BASE)
    }

    /// GET an arbitrary path and decode the JSON body.
    pub async fn get_json<V: DeserializeOwned>(&self, segments: &[&str]) -> Result<V, NetworkError> {
        let url = self.url(segments);
        let response = self.send("GET", &url, self.http.get(&url)).await?;
        decode(&url, response).await
    }

    /// Permission names offered in the user dialog.
    pub async fn permission_menus(&self) -> Result<Vec<String>, NetworkError> {
        self.get_json(&["user-roles", "menus"]).await
    }

    /// The account the login form is checked against.
    pub async fn admin_account(&self, username: &str) -> Result<AdminAccount, NetworkError> {
        self.get_json(&["users", "username", username]).await
    }

    async fn send(
        &self,
        method: &'static str,
        url: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<Response, NetworkError> {
        log::debug!("{} {}", method, url);
        let response = request.send().await.map_err(|e| NetworkError::Transport {
            method,
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::Status {
                method,
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}

async fn decode<V: DeserializeOwned>(url: &str, response: Response) -> Result<V, NetworkError> {
    let body = response.text().await.map_err(|e| NetworkError::Decode {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    parse_body(url, &body)
}

fn parse_body<V: DeserializeOwned>(url: &str, body: &str) -> Result<V, NetworkError> {
    serde_json::from_str(body).map_err(|e| NetworkError::Decode {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

/// Body of a lookup endpoint: some return one object, some a list.
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

/// `RemoteCollection` over `<api_base>/<base>`
#[derive(Clone, Debug)]
pub struct RestCollection<T> {
    client: RestClient,
    base: String,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> RestCollection<T> {
    pub fn new(client: RestClient, base: impl Into<String>) -> Self {
        Self {
            client,
            base: base.into(),
            _record: PhantomData,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, rest: &[&str]) -> String {
        let mut segments = vec![self.base.as_str()];
        segments.extend_from_slice(rest);
        self.client.url(&segments)
    }
}

#[async_trait(?Send)]
impl<T: Record> RemoteCollection<T> for RestCollection<T> {
    async fn list(&self) -> Result<Vec<T>, NetworkError> {
        let url = self.url(&[]);
        let response = self
            .client
            .send("GET", &url, self.client.http.get(&url))
            .await?;
        decode(&url, response).await
    }

    async fn find_by(&self, field: &str, value: &str) -> Result<Vec<T>, NetworkError> {
        let url = self.url(&[field, value]);
        let response = self
            .client
            .send("GET", &url, self.client.http.get(&url))
            .await?;
        let found: OneOrMany<T> = decode(&url, response).await?;
        Ok(found.into_vec())
    }

    async fn create(&self, record: &T) -> Result<T, NetworkError> {
        let url = self.url(&[]);
        let response = self
            .client
            .send("POST", &url, self.client.http.post(&url).json(record))
            .await?;
        decode(&url, response).await
    }

    async fn update(&self, id: T::Id, record: &T) -> Result<T, NetworkError> {
        let id = id.to_string();
        let url = self.url(&[&id]);
        let response = self
            .client
            .send("PUT", &url, self.client.http.put(&url).json(record))
            .await?;
        decode(&url, response).await
    }

    async fn delete(&self, id: T::Id) -> Result<(), NetworkError> {
        let id = id.to_string();
        let url = self.url(&[&id]);
        self.client
            .send("DELETE", &url, self.client.http.delete(&url))
            .await?;
        Ok(())
    }

    async fn upload(&self, file: UploadFile) -> Result<(), UploadError> {
        let url = self.url(&["upload"]);
        let file_name = file.name.clone();
        let part = reqwest::multipart::Part::bytes(file.bytes)
            .file_name(file.name)
            .mime_str(&file.mime)
            .map_err(|e| UploadError::Rejected {
                file_name: file_name.clone(),
                source: NetworkError::Transport {
                    method: "POST",
                    url: url.clone(),
                    reason: e.to_string(),
                },
            })?;
        let form = reqwest::multipart::Form::new().part("file", part);
        self.client
            .send("POST", &url, self.client.http.post(&url).multipart(form))
            .await
            .map_err(|source| UploadError::Rejected { file_name, source })?;
        Ok(())
    }
}
