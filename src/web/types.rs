use crate::models::{Bucket, ObjectEntry};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Serialize)]
pub(crate) struct RpcRequest<'a, P: Serialize> {
    pub id: u64,
    pub jsonrpc: &'static str,
    pub method: &'a str,
    pub params: [P; 1],
}

#[derive(Debug, Deserialize)]
pub(crate) struct RpcResponse<R> {
    pub result: Option<R>,
    pub error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RpcErrorBody {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Empty {}

#[derive(Debug, Clone, Serialize)]
pub struct LoginArgs {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginReply {
    pub token: String,
    #[serde(default)]
    pub ui_version: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListBucketsReply {
    #[serde(default)]
    pub buckets: Option<Vec<Bucket>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListObjectsArgs {
    pub bucket_name: String,
    pub prefix: String,
    pub marker: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListObjectsReply {
    #[serde(default)]
    pub objects: Option<Vec<ObjectEntry>>,
    #[serde(default)]
    pub nextmarker: String,
    #[serde(default)]
    pub istruncated: bool,
    #[serde(default)]
    pub writable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveObjectArgs {
    pub bucket_name: String,
    pub objects: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresignedGetArgs {
    pub host: String,
    pub bucket: String,
    pub object: String,
    pub expiry: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PresignedGetReply {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UrlTokenReply {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadRequest {
    pub bucket: String,
    pub key: String,
    pub path: PathBuf,
}
