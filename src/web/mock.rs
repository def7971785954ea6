use super::*;
use crate::models::{Bucket, ObjectEntry};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum UploadOutcome {
    Succeed,
    FailWith(u16),
    Hang,
}

type Scripted<T> = std::result::Result<T, String>;

/// In-memory `WebClient` with scripted replies that records every call.
pub(crate) struct MockClient {
    logged_in: bool,
    list_replies: Mutex<VecDeque<(Duration, Scripted<ListObjectsReply>)>>,
    buckets: Mutex<Scripted<Vec<Bucket>>>,
    remove_error: Mutex<Option<String>>,
    presign_error: Mutex<Option<String>>,
    token_error: Mutex<Option<String>>,
    download_error: Mutex<Option<String>>,
    upload_outcome: Mutex<UploadOutcome>,
    pub list_calls: Mutex<Vec<ListObjectsArgs>>,
    pub remove_calls: Mutex<Vec<RemoveObjectArgs>>,
    pub presign_calls: Mutex<Vec<PresignedGetArgs>>,
    pub upload_calls: Mutex<Vec<UploadRequest>>,
    pub download_calls: Mutex<Vec<(String, PathBuf)>>,
}

fn rpc_error(message: &str) -> WebError {
    WebError::Rpc {
        code: -32000,
        message: message.to_string(),
    }
}

pub(crate) fn object(name: &str, size: u64) -> ObjectEntry {
    ObjectEntry {
        name: name.to_string(),
        size,
        content_type: "text/plain".to_string(),
        last_modified: None,
    }
}

pub(crate) fn listing(names: &[&str], marker: &str, truncated: bool) -> ListObjectsReply {
    ListObjectsReply {
        objects: Some(names.iter().map(|name| object(name, 1)).collect()),
        nextmarker: marker.to_string(),
        istruncated: truncated,
        writable: true,
    }
}

impl MockClient {
    pub fn new() -> Self {
        Self {
            logged_in: false,
            list_replies: Mutex::new(VecDeque::new()),
            buckets: Mutex::new(Ok(Vec::new())),
            remove_error: Mutex::new(None),
            presign_error: Mutex::new(None),
            token_error: Mutex::new(None),
            download_error: Mutex::new(None),
            upload_outcome: Mutex::new(UploadOutcome::Succeed),
            list_calls: Mutex::new(Vec::new()),
            remove_calls: Mutex::new(Vec::new()),
            presign_calls: Mutex::new(Vec::new()),
            upload_calls: Mutex::new(Vec::new()),
            download_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn logged_in(mut self) -> Self {
        self.logged_in = true;
        self
    }

    pub fn with_listing(self, reply: ListObjectsReply) -> Self {
        self.push_listing(Duration::ZERO, Ok(reply));
        self
    }

    pub fn with_delayed_listing(self, delay: Duration, reply: ListObjectsReply) -> Self {
        self.push_listing(delay, Ok(reply));
        self
    }

    pub fn with_failing_listing(self, message: &str) -> Self {
        self.push_listing(Duration::ZERO, Err(message.to_string()));
        self
    }

    pub fn with_delayed_failing_listing(self, delay: Duration, message: &str) -> Self {
        self.push_listing(delay, Err(message.to_string()));
        self
    }

    fn push_listing(&self, delay: Duration, reply: Scripted<ListObjectsReply>) {
        self.list_replies.lock().unwrap().push_back((delay, reply));
    }

    pub fn with_buckets(self, names: &[&str]) -> Self {
        *self.buckets.lock().unwrap() = Ok(names.iter().map(|name| Bucket::new(*name)).collect());
        self
    }

    pub fn with_failing_buckets(self, message: &str) -> Self {
        *self.buckets.lock().unwrap() = Err(message.to_string());
        self
    }

    pub fn with_failing_remove(self, message: &str) -> Self {
        *self.remove_error.lock().unwrap() = Some(message.to_string());
        self
    }

    pub fn with_failing_presign(self, message: &str) -> Self {
        *self.presign_error.lock().unwrap() = Some(message.to_string());
        self
    }

    pub fn with_failing_token(self, message: &str) -> Self {
        *self.token_error.lock().unwrap() = Some(message.to_string());
        self
    }

    pub fn with_failing_download(self, message: &str) -> Self {
        *self.download_error.lock().unwrap() = Some(message.to_string());
        self
    }

    pub fn with_upload_outcome(self, outcome: UploadOutcome) -> Self {
        *self.upload_outcome.lock().unwrap() = outcome;
        self
    }
}

#[async_trait]
impl WebClient for MockClient {
    fn logged_in(&self) -> bool {
        self.logged_in
    }

    fn origin(&self) -> String {
        "http://localhost:9000".to_string()
    }

    fn host(&self) -> String {
        "localhost:9000".to_string()
    }

    async fn login(&self, _username: &str, _password: &str) -> Result<LoginReply> {
        Ok(LoginReply {
            token: "jwt".to_string(),
            ui_version: "test".to_string(),
        })
    }

    async fn list_buckets(&self) -> Result<ListBucketsReply> {
        match self.buckets.lock().unwrap().clone() {
            Ok(buckets) => Ok(ListBucketsReply {
                buckets: Some(buckets),
            }),
            Err(message) => Err(rpc_error(&message)),
        }
    }

    async fn list_objects(&self, args: ListObjectsArgs) -> Result<ListObjectsReply> {
        self.list_calls.lock().unwrap().push(args);
        let scripted = self.list_replies.lock().unwrap().pop_front();
        let (delay, reply) = scripted.unwrap_or((Duration::ZERO, Ok(ListObjectsReply::default())));
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        reply.map_err(|message| rpc_error(&message))
    }

    async fn remove_object(&self, args: RemoveObjectArgs) -> Result<()> {
        self.remove_calls.lock().unwrap().push(args);
        match self.remove_error.lock().unwrap().clone() {
            Some(message) => Err(rpc_error(&message)),
            None => Ok(()),
        }
    }

    async fn presigned_get(&self, args: PresignedGetArgs) -> Result<PresignedGetReply> {
        let url = format!(
            "http://{}/{}/{}?X-Amz-Expires={}",
            args.host, args.bucket, args.object, args.expiry
        );
        self.presign_calls.lock().unwrap().push(args);
        match self.presign_error.lock().unwrap().clone() {
            Some(message) => Err(rpc_error(&message)),
            None => Ok(PresignedGetReply { url }),
        }
    }

    async fn create_url_token(&self) -> Result<UrlTokenReply> {
        match self.token_error.lock().unwrap().clone() {
            Some(message) => Err(rpc_error(&message)),
            None => Ok(UrlTokenReply {
                token: "url-token".to_string(),
            }),
        }
    }

    async fn upload(&self, request: UploadRequest, progress: ProgressCallback) -> Result<()> {
        self.upload_calls.lock().unwrap().push(request);
        let outcome = *self.upload_outcome.lock().unwrap();
        match outcome {
            UploadOutcome::Succeed => {
                progress(1);
                Ok(())
            }
            UploadOutcome::FailWith(status) => Err(WebError::Status {
                status,
                message: "rejected".to_string(),
            }),
            UploadOutcome::Hang => {
                progress(1);
                std::future::pending::<()>().await;
                Ok(())
            }
        }
    }

    async fn download(&self, url: &str, dest: &Path) -> Result<u64> {
        self.download_calls
            .lock()
            .unwrap()
            .push((url.to_string(), dest.to_path_buf()));
        match self.download_error.lock().unwrap().clone() {
            Some(message) => Err(WebError::Status {
                status: 403,
                message,
            }),
            None => Ok(7),
        }
    }
}
