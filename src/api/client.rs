use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client as HttpClient, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::api::error::ApiError;
use crate::api::models::{Contact, ContactDraft};
use crate::api::ContactsApi;

/// Response payload of [`ApiClient::call`].
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Json(Value),
    Text(String),
}

impl Body {
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        match self {
            Body::Json(v) => Ok(serde_json::from_value(v)?),
            Body::Text(t) => Ok(serde_json::from_str(&t)?),
        }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    http: HttpClient,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        Url::parse(base_url)?;
        let mut builder = HttpClient::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        Ok(Self {
            http: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<Url, ApiError> {
        Ok(Url::parse(&format!("{}{}", self.base_url, endpoint))?)
    }

    /// Issues one request against the contacts API. Non-2xx answers are errors;
    /// the body is JSON when the server labels it so, raw text otherwise.
    pub async fn call(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&ContactDraft>,
    ) -> Result<Body, ApiError> {
        let url = self.endpoint_url(endpoint)?;
        log::debug!("{method} {url}");
        let mut req = self
            .http
            .request(method.clone(), url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(b) = body {
            req = req.body(serde_json::to_vec(b)?);
        }

        let resp = req.send().await.map_err(|e| {
            log::warn!("{method} {endpoint} failed: {e}");
            ApiError::from(e)
        })?;
        let status = resp.status();
        let is_json = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("json"));
        let text = resp.text().await?;

        if !status.is_success() {
            log::warn!("{method} {endpoint} returned HTTP {}", status.as_u16());
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: text,
            });
        }
        if is_json && !text.trim().is_empty() {
            Ok(Body::Json(serde_json::from_str(&text)?))
        } else {
            Ok(Body::Text(text))
        }
    }

    pub async fn list(&self) -> Result<Vec<Contact>, ApiError> {
        self.call(Method::GET, "/contacts", None).await?.decode()
    }

    pub async fn get(&self, id: i64) -> Result<Contact, ApiError> {
        self.call(Method::GET, &format!("/contacts/{id}"), None).await?.decode()
    }

    /// Any 2xx counts as saved; the list is re-fetched afterwards, so the
    /// echoed record (if any) is not read.
    pub async fn create(&self, draft: &ContactDraft) -> Result<(), ApiError> {
        self.call(Method::POST, "/contacts", Some(draft)).await?;
        Ok(())
    }

    pub async fn update(&self, id: i64, draft: &ContactDraft) -> Result<(), ApiError> {
        self.call(Method::PUT, &format!("/contacts/{id}"), Some(draft)).await?;
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.call(Method::DELETE, &format!("/contacts/{id}"), None).await?;
        Ok(())
    }
}

// reqwest needs a Tokio reactor, the UI awaits on the GLib loop: every call
// hops onto the shared runtime.
impl ContactsApi for ApiClient {
    async fn list_contacts(&self) -> Result<Vec<Contact>, ApiError> {
        let client = self.clone();
        crate::utils::on_runtime(async move { client.list().await }).await
    }

    async fn get_contact(&self, id: i64) -> Result<Contact, ApiError> {
        let client = self.clone();
        crate::utils::on_runtime(async move { client.get(id).await }).await
    }

    async fn create_contact(&self, draft: ContactDraft) -> Result<(), ApiError> {
        let client = self.clone();
        crate::utils::on_runtime(async move { client.create(&draft).await }).await
    }

    async fn update_contact(&self, id: i64, draft: ContactDraft) -> Result<(), ApiError> {
        let client = self.clone();
        crate::utils::on_runtime(async move { client.update(id, &draft).await }).await
    }

    async fn delete_contact(&self, id: i64) -> Result<(), ApiError> {
        let client = self.clone();
        crate::utils::on_runtime(async move { client.delete(id).await }).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Group;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn contact_json(id: i64, name: &str) -> Value {
        serde_json::json!({
            "id": id,
            "name": name,
            "phone": "555-0100",
            "email": null,
            "company": "Acme",
            "group": "business",
        })
    }

    async fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(&format!("{}/api", server.uri()), None).unwrap()
    }

    #[tokio::test]
    async fn list_sends_json_content_type_and_decodes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/contacts"))
            .and(header("content-type", "application/json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([contact_json(1, "Ada"), contact_json(2, "Bob")])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let contacts = client_for(&server).await.list().await.unwrap();
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[1].name, "Bob");
        assert_eq!(contacts[0].group, Group::Business);
    }

    #[tokio::test]
    async fn call_returns_text_for_non_json_bodies() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/contacts/7"))
            .respond_with(ResponseTemplate::new(200).set_body_string("deleted"))
            .mount(&server)
            .await;

        let body = client_for(&server)
            .await
            .call(Method::DELETE, "/contacts/7", None)
            .await
            .unwrap();
        assert_eq!(body, Body::Text("deleted".into()));
    }

    #[tokio::test]
    async fn delete_accepts_empty_body() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/contacts/3"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server).await.delete(3).await.unwrap();
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/contacts/9"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = client_for(&server).await.get(9).await.unwrap_err();
        match err {
            ApiError::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_and_update_send_the_draft() {
        let server = MockServer::start().await;
        let draft = ContactDraft {
            name: "Ada".into(),
            phone: "555".into(),
            email: Some("ada@example.com".into()),
            company: None,
            group: Group::Friends,
        };
        let expected = serde_json::to_value(&draft).unwrap();
        Mock::given(method("POST"))
            .and(path("/api/contacts"))
            .and(body_json(expected.clone()))
            .respond_with(ResponseTemplate::new(201).set_body_json(contact_json(10, "Ada")))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/api/contacts/10"))
            .and(body_json(expected))
            .respond_with(ResponseTemplate::new(200).set_body_json(contact_json(10, "Ada")))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        client.create(&draft).await.unwrap();
        client.update(10, &draft).await.unwrap();
    }

    #[tokio::test]
    async fn create_accepts_acknowledgement_bodies() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/contacts"))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(serde_json::json!({"message": "created", "id": 5})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let draft = ContactDraft {
            name: "Ada".into(),
            phone: "555".into(),
            email: None,
            company: None,
            group: Group::Other,
        };
        client_for(&server).await.create(&draft).await.unwrap();
    }

    #[tokio::test]
    async fn unreachable_server_is_a_transport_error() {
        // Nothing listens on the discard port.
        let client = ApiClient::new("http://127.0.0.1:9/api", None).unwrap();
        let err = client.list().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert!(err.user_message().contains("network"));
    }

    #[test]
    fn rejects_invalid_base_url() {
        assert!(matches!(ApiClient::new("not a url", None), Err(ApiError::InvalidUrl(_))));
    }

    #[test]
    fn contacts_api_runs_requests_on_the_shared_runtime() {
        let server = crate::utils::RUNTIME.block_on(MockServer::start());
        crate::utils::RUNTIME.block_on(
            Mock::given(method("GET"))
                .and(path("/api/contacts"))
                .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
                .mount(&server),
        );
        let client = ApiClient::new(&format!("{}/api", server.uri()), None).unwrap();

        // Driven from a bare current-thread runtime, like the GLib loop drives it.
        let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let contacts = rt.block_on(client.list_contacts()).unwrap();
        assert!(contacts.is_empty());
    }
}
