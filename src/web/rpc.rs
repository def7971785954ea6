use async_trait::async_trait;
use futures::TryStreamExt;
use reqwest::header::CONTENT_LENGTH;
use reqwest::{Body, Client, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use std::sync::RwLock;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tokio_util::io::ReaderStream;

use super::types::{
    Empty, ListBucketsReply, ListObjectsArgs, ListObjectsReply, LoginArgs, LoginReply,
    PresignedGetArgs, PresignedGetReply, RemoveObjectArgs, RpcRequest, RpcResponse, UploadRequest,
    UrlTokenReply,
};
use super::{encode_key, ProgressCallback, Result, WebClient, WebError};

const RPC_PATH: &str = "minio/webrpc";
const UPLOAD_PATH: &str = "minio/upload";

/// JSON-RPC client for the server's browser API.
pub struct RpcClient {
    http: Client,
    base: Url,
    token: RwLock<Option<String>>,
}

impl RpcClient {
    pub fn new(endpoint: &str) -> Result<Self> {
        let mut base =
            Url::parse(endpoint).map_err(|_| WebError::InvalidEndpoint(endpoint.to_string()))?;
        if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
            return Err(WebError::InvalidEndpoint(endpoint.to_string()));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self {
            http: Client::new(),
            base,
            token: RwLock::new(None),
        })
    }

    pub fn with_token(self, token: impl Into<String>) -> Self {
        self.set_token(Some(token.into()));
        self
    }

    pub fn set_token(&self, token: Option<String>) {
        if let Ok(mut slot) = self.token.write() {
            *slot = token;
        }
    }

    fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|slot| slot.clone())
    }

    fn url(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .map_err(|_| WebError::InvalidEndpoint(format!("{}{path}", self.base)))
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn call<P, R>(&self, method: &str, params: P) -> Result<Option<R>>
    where
        P: Serialize + Send,
        R: DeserializeOwned + Send,
    {
        let method = format!("Web.{method}");
        let body = RpcRequest {
            id: 1,
            jsonrpc: "2.0",
            method: &method,
            params: [params],
        };

        tracing::debug!(%method, "rpc call");
        let request = self.authorize(self.http.post(self.url(RPC_PATH)?).json(&body));
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        let envelope: RpcResponse<R> = match serde_json::from_str(&text) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                return Err(WebError::Status {
                    status: status.as_u16(),
                    message: status_message(status, &text),
                })
            }
            Err(err) => return Err(err.into()),
        };

        if let Some(error) = envelope.error {
            tracing::warn!(%method, code = error.code, message = %error.message, "rpc error");
            return Err(WebError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        Ok(envelope.result)
    }

    async fn call_required<P, R>(&self, method: &str, params: P) -> Result<R>
    where
        P: Serialize + Send,
        R: DeserializeOwned + Send,
    {
        self.call(method, params)
            .await?
            .ok_or_else(|| WebError::EmptyResult(format!("Web.{method}")))
    }
}

fn status_message(status: reqwest::StatusCode, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
    } else {
        body.to_string()
    }
}

#[async_trait]
impl WebClient for RpcClient {
    fn logged_in(&self) -> bool {
        self.token().is_some()
    }

    fn origin(&self) -> String {
        self.base.as_str().trim_end_matches('/').to_string()
    }

    fn host(&self) -> String {
        let host = self.base.host_str().unwrap_or_default();
        match self.base.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        }
    }

    async fn login(&self, username: &str, password: &str) -> Result<LoginReply> {
        let reply: LoginReply = self
            .call_required(
                "Login",
                LoginArgs {
                    username: username.to_string(),
                    password: password.to_string(),
                },
            )
            .await?;
        self.set_token(Some(reply.token.clone()));
        tracing::info!(ui_version = %reply.ui_version, "logged in");
        Ok(reply)
    }

    async fn list_buckets(&self) -> Result<ListBucketsReply> {
        self.call_required("ListBuckets", Empty {}).await
    }

    async fn list_objects(&self, args: ListObjectsArgs) -> Result<ListObjectsReply> {
        self.call_required("ListObjects", args).await
    }

    async fn remove_object(&self, args: RemoveObjectArgs) -> Result<()> {
        self.call::<_, serde_json::Value>("RemoveObject", args)
            .await?;
        Ok(())
    }

    async fn presigned_get(&self, args: PresignedGetArgs) -> Result<PresignedGetReply> {
        self.call_required("PresignedGet", args).await
    }

    async fn create_url_token(&self) -> Result<UrlTokenReply> {
        self.call_required("CreateURLToken", Empty {}).await
    }

    async fn upload(&self, request: UploadRequest, progress: ProgressCallback) -> Result<()> {
        let file = File::open(&request.path).await?;
        let size = file.metadata().await?.len();
        let url = self.url(&format!(
            "{UPLOAD_PATH}/{}/{}",
            encode_key(&request.bucket),
            encode_key(&request.key)
        ))?;

        let mut loaded = 0u64;
        let stream = ReaderStream::new(file).inspect_ok(move |chunk| {
            loaded += chunk.len() as u64;
            progress(loaded);
        });

        let response = self
            .authorize(self.http.put(url))
            .header(CONTENT_LENGTH, size)
            .body(Body::wrap_stream(stream))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WebError::Status {
                status: status.as_u16(),
                message: status_message(status, &body),
            });
        }

        Ok(())
    }

    async fn download(&self, url: &str, dest: &Path) -> Result<u64> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WebError::Status {
                status: status.as_u16(),
                message: status_message(status, &body),
            });
        }

        if let Some(parent) = dest.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut file = File::create(dest).await?;
        let mut stream = response.bytes_stream();
        let mut written = 0u64;

        while let Some(bytes) = stream.try_next().await? {
            file.write_all(&bytes).await?;
            written += bytes.len() as u64;
        }

        file.flush().await?;
        Ok(written)
    }
}
