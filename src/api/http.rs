//! HTTP Store
//!
//! `AnimalStore` over a REST collection. On wasm32 reqwest rides on the
//! browser's `fetch`.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use super::AnimalStore;
use crate::config::ShelterConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{Animal, AnimalId, DonationPatch, NewAnimal};

/// Characters that cannot appear raw inside one path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
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

#[derive(Clone, Debug)]
pub struct HttpStore {
    client: Client,
    collection_url: String,
}

impl HttpStore {
    pub fn new(config: &ShelterConfig) -> Self {
        Self {
            client: Client::new(),
            collection_url: config.collection_url(),
        }
    }

    fn member_url(&self, id: &AnimalId) -> String {
        let id = id.to_string();
        format!("{}/{}", self.collection_url, utf8_percent_encode(&id, PATH_SEGMENT))
    }
}

/// Send a request and decode a JSON body from a 2xx response
async fn send_json<T: DeserializeOwned>(
    method: &'static str,
    url: String,
    request: RequestBuilder,
) -> ApiResult<T> {
    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Store {
            method,
            url,
            status: status.as_u16(),
        });
    }
    Ok(response.json::<T>().await?)
}

#[async_trait(?Send)]
impl AnimalStore for HttpStore {
    async fn list_all(&self) -> ApiResult<Vec<Animal>> {
        let url = self.collection_url.clone();
        send_json("GET", url.clone(), self.client.get(url)).await
    }

    async fn create(&self, draft: &NewAnimal) -> ApiResult<Animal> {
        let url = self.collection_url.clone();
        send_json("POST", url.clone(), self.client.post(url).json(draft)).await
    }

    async fn delete(&self, id: &AnimalId) -> ApiResult<serde_json::Value> {
        let url = self.member_url(id);
        send_json("DELETE", url.clone(), self.client.delete(url)).await
    }

    async fn update_donations(&self, id: &AnimalId, new_total: u32) -> ApiResult<Animal> {
        let url = self.member_url(id);
        let body = DonationPatch { donations: new_total };
        send_json("PATCH", url.clone(), self.client.patch(url).json(&body)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// What the loopback responder saw
    #[derive(Debug)]
    struct Captured {
        method: String,
        path: String,
        body: String,
    }

    impl Captured {
        fn json(&self) -> Value {
            serde_json::from_str(&self.body).expect("request body should be JSON")
        }
    }

    fn parse_request(raw: &[u8]) -> Option<Captured> {
        let text = std::str::from_utf8(raw).ok()?;
        let (head, body) = text.split_once("\r\n\r\n")?;
        let mut lines = head.lines();
        let mut start = lines.next()?.split_whitespace();
        let method = start.next()?.to_string();
        let path = start.next()?.to_string();
        let length = lines
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        if body.len() < length {
            return None;
        }
        Some(Captured {
            method,
            path,
            body: body.to_string(),
        })
    }

    /// Accept one connection, answer it with a canned response
    async fn respond_once(
        status: &'static str,
        body: &'static str,
    ) -> (ShelterConfig, oneshot::Receiver<Captured>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 1024];
            let captured = loop {
                let n = socket.read(&mut buf).await.unwrap();
                assert!(n > 0, "client closed before sending a full request");
                raw.extend_from_slice(&buf[..n]);
                if let Some(request) = parse_request(&raw) {
                    break request;
                }
            };
            let _ = tx.send(captured);

            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        (ShelterConfig::default().with_api_base(&base), rx)
    }

    #[tokio::test]
    async fn test_list_all() {
        let (config, seen) = respond_once(
            "200 OK",
            r#"[{"id":1,"name":"Fido","imageUrl":"x.png","description":"good boy","donations":0}]"#,
        )
        .await;
        let store = HttpStore::new(&config);

        let animals = store.list_all().await.expect("list failed");
        let request = seen.await.unwrap();

        assert_eq!(request.method, "GET");
        assert_eq!(request.path, "/animals");
        assert_eq!(animals.len(), 1);
        assert_eq!(animals[0].name, "Fido");
        assert_eq!(animals[0].id, AnimalId::Number(1));
    }

    #[tokio::test]
    async fn test_create_posts_full_draft() {
        let (config, seen) = respond_once(
            "201 Created",
            r#"{"id":7,"name":"Rex","imageUrl":"r.png","description":"big dog","donations":0}"#,
        )
        .await;
        let store = HttpStore::new(&config);

        let created = store
            .create(&NewAnimal::new("Rex", "r.png", "big dog"))
            .await
            .expect("create failed");
        let request = seen.await.unwrap();

        assert_eq!(request.method, "POST");
        assert_eq!(request.path, "/animals");
        assert_eq!(
            request.json(),
            json!({"name": "Rex", "imageUrl": "r.png", "description": "big dog", "donations": 0})
        );
        assert_eq!(created.id, AnimalId::Number(7));
    }

    #[tokio::test]
    async fn test_update_donations_sends_full_value() {
        let (config, seen) = respond_once(
            "200 OK",
            r#"{"id":5,"name":"Fido","imageUrl":"x.png","description":"good boy","donations":30}"#,
        )
        .await;
        let store = HttpStore::new(&config);

        let updated = store
            .update_donations(&AnimalId::Number(5), 30)
            .await
            .expect("patch failed");
        let request = seen.await.unwrap();

        assert_eq!(request.method, "PATCH");
        assert_eq!(request.path, "/animals/5");
        assert_eq!(request.json(), json!({"donations": 30}));
        assert_eq!(updated.donations, 30);
    }

    #[tokio::test]
    async fn test_delete_returns_confirmation() {
        let (config, seen) = respond_once("200 OK", "{}").await;
        let store = HttpStore::new(&config);

        let confirmation = store.delete(&AnimalId::Number(5)).await.expect("delete failed");
        let request = seen.await.unwrap();

        assert_eq!(request.method, "DELETE");
        assert_eq!(request.path, "/animals/5");
        assert_eq!(confirmation, json!({}));
    }

    #[tokio::test]
    async fn test_text_id_is_one_path_segment() {
        let (config, seen) = respond_once("200 OK", "{}").await;
        let store = HttpStore::new(&config);

        store
            .delete(&AnimalId::Text("a b/c".to_string()))
            .await
            .expect("delete failed");
        let request = seen.await.unwrap();

        assert_eq!(request.path, "/animals/a%20b%2Fc");
    }

    #[tokio::test]
    async fn test_non_success_status_is_store_error() {
        let (config, _seen) = respond_once("404 Not Found", "{}").await;
        let store = HttpStore::new(&config);

        let err = store.delete(&AnimalId::Number(5)).await.unwrap_err();
        match err {
            ApiError::Store { method, status, url } => {
                assert_eq!(method, "DELETE");
                assert_eq!(status, 404);
                assert!(url.ends_with("/animals/5"));
            }
            other => panic!("expected store error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_garbage_body_is_decode_error() {
        let (config, _seen) = respond_once("200 OK", "not json").await;
        let store = HttpStore::new(&config);

        let err = store.list_all().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_unreachable_store_is_network_error() {
        // Grab a free port, then close it again
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = ShelterConfig::default().with_api_base(&format!("http://{}", addr));
        let err = HttpStore::new(&config).list_all().await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)), "got {:?}", err);
    }
}
