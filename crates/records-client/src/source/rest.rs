//! REST endpoint
//!
//! One collection URL: `GET` lists, `POST` creates, `GET {url}/{id}` looks up.

use std::fmt::Display;
use std::marker::PhantomData;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, Request};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use super::traits::{RecordSink, RecordSource};
use crate::domain::{ClientError, ClientResult, NewTodo, Person, Todo};

/// People backend: list `Person`, create by posting a `Person`
///
/// The people app only lists; lookup and create are library-only.
pub type PeopleEndpoint = RestEndpoint<Person, Person>;

/// Todo backend: list `Todo`, create by posting a `NewTodo`
pub type TodoEndpoint = RestEndpoint<Todo, NewTodo>;

/// Collection resource of `R` records accepting `D` drafts
pub struct RestEndpoint<R, D = ()> {
    client: Client,
    url: Url,
    _records: PhantomData<fn() -> (R, D)>,
}

impl<R, D> Clone for RestEndpoint<R, D> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            url: self.url.clone(),
            _records: PhantomData,
        }
    }
}

impl<R, D> std::fmt::Debug for RestEndpoint<R, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestEndpoint").field("url", &self.url.as_str()).finish()
    }
}

/// Lookup answer: the people backend replies with a bare string when the id is unknown
#[derive(Deserialize)]
#[serde(untagged)]
enum Lookup<R> {
    Found(R),
    Missing(String),
}

impl<R, D> RestEndpoint<R, D> {
    pub fn new(url: Url) -> Self {
        Self::with_client(Client::new(), url)
    }

    pub fn with_client(client: Client, url: Url) -> Self {
        Self {
            client,
            url,
            _records: PhantomData,
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    fn list_request(&self) -> ClientResult<Request> {
        Ok(self
            .client
            .get(self.url.clone())
            .header(ACCEPT, "application/json")
            .build()?)
    }

    fn item_url(&self, id: &dyn Display) -> ClientResult<Url> {
        let mut url = self.url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| ClientError::InvalidEndpoint {
                endpoint: self.url.to_string(),
                source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
            })?;
            segments.pop_if_empty().push(&id.to_string());
        }
        Ok(url)
    }

    /// Execute and return the body of a 2xx response
    async fn send(&self, request: Request) -> ClientResult<String> {
        let url = request.url().to_string();
        let method = request.method().clone();
        let response = self.client.execute(request).await?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("[rest] {method} {url} -> {status}");
            return Err(ClientError::Status {
                status: status.as_u16(),
                url,
            });
        }
        log::debug!("[rest] {method} {url} -> {status}");
        Ok(response.text().await?)
    }
}

impl<R: DeserializeOwned, D> RestEndpoint<R, D> {
    /// `GET {url}/{id}`; an unknown id yields `Ok(None)`
    ///
    /// Library-only: neither app looks records up by id.
    pub async fn fetch_one(&self, id: impl Display) -> ClientResult<Option<R>> {
        let request = self
            .client
            .get(self.item_url(&id)?)
            .header(ACCEPT, "application/json")
            .build()?;
        let body = self.send(request).await?;
        match serde_json::from_str::<Lookup<R>>(&body)? {
            Lookup::Found(record) => Ok(Some(record)),
            Lookup::Missing(message) => {
                log::debug!("[rest] lookup of {id} missed: {message}");
                Ok(None)
            }
        }
    }
}

impl<R, D: Serialize> RestEndpoint<R, D> {
    fn submit_request(&self, draft: &D) -> ClientResult<Request> {
        Ok(self.client.post(self.url.clone()).json(draft).build()?)
    }
}

#[async_trait(?Send)]
impl<R, D> RecordSource for RestEndpoint<R, D>
where
    R: DeserializeOwned + 'static,
    D: 'static,
{
    type Record = R;

    async fn fetch_all(&self) -> ClientResult<Vec<R>> {
        let body = self.send(self.list_request()?).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait(?Send)]
impl<R, D> RecordSink for RestEndpoint<R, D>
where
    R: 'static,
    D: Serialize + 'static,
{
    type Draft = D;

    async fn submit(&self, draft: &D) -> ClientResult<Value> {
        let body = self.send(self.submit_request(draft)?).await?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint(url: &str) -> TodoEndpoint {
        RestEndpoint::new(Url::parse(url).unwrap())
    }

    #[test]
    fn test_submit_request_body() {
        let todos = endpoint("http://localhost:8000/api/todo");
        let request = todos.submit_request(&NewTodo::new("Buy milk", "2%")).unwrap();

        assert_eq!(request.method(), reqwest::Method::POST);
        assert_eq!(request.url().as_str(), "http://localhost:8000/api/todo");
        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(body, br#"{"title":"Buy milk","description":"2%"}"#);
    }

    #[test]
    fn test_item_url() {
        let people = endpoint("http://localhost:8000/api");
        assert_eq!(people.item_url(&7).unwrap().as_str(), "http://localhost:8000/api/7");

        let trailing = endpoint("http://localhost:8000/api/");
        assert_eq!(trailing.item_url(&7).unwrap().as_str(), "http://localhost:8000/api/7");
    }

    #[test]
    fn test_item_url_on_opaque_url() {
        let opaque = endpoint("data:text/plain,people");
        assert!(matches!(
            opaque.item_url(&1),
            Err(ClientError::InvalidEndpoint { .. })
        ));
    }
}
