mod error;
#[cfg(test)]
pub(crate) mod mock;
mod rpc;
mod types;

pub use error::WebError;
pub use rpc::RpcClient;
pub use types::{
    Empty, ListBucketsReply, ListObjectsArgs, ListObjectsReply, LoginArgs, LoginReply,
    PresignedGetArgs, PresignedGetReply, RemoveObjectArgs, UploadRequest, UrlTokenReply,
};

use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

pub type Result<T> = std::result::Result<T, WebError>;

/// Receives the running byte count of an upload.
pub type ProgressCallback = Arc<dyn Fn(u64) + Send + Sync>;

pub type SharedClient = Arc<dyn WebClient>;

/// Calls exposed by the storage server's browser API.
#[async_trait]
pub trait WebClient: Send + Sync {
    /// Whether a session token is held.
    fn logged_in(&self) -> bool;

    /// Scheme, host and base path the client talks to, without a trailing slash.
    fn origin(&self) -> String;

    /// `host[:port]` as presigned URLs should be scoped to.
    fn host(&self) -> String;

    async fn login(&self, username: &str, password: &str) -> Result<LoginReply>;

    async fn list_buckets(&self) -> Result<ListBucketsReply>;

    async fn list_objects(&self, args: ListObjectsArgs) -> Result<ListObjectsReply>;

    async fn remove_object(&self, args: RemoveObjectArgs) -> Result<()>;

    async fn presigned_get(&self, args: PresignedGetArgs) -> Result<PresignedGetReply>;

    async fn create_url_token(&self) -> Result<UrlTokenReply>;

    async fn upload(&self, request: UploadRequest, progress: ProgressCallback) -> Result<()>;

    /// Streams `url` into `dest`, returning the number of bytes written.
    async fn download(&self, url: &str, dest: &Path) -> Result<u64>;
}

/// Percent-encodes each `/`-separated segment of an object key.
pub fn encode_key(key: &str) -> String {
    key.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

pub fn download_url(origin: &str, bucket: &str, key: &str, token: &str) -> String {
    format!(
        "{origin}/minio/download/{bucket}/{}?token={token}",
        encode_key(key)
    )
}
