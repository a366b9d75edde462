use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::config::HiveConfig;

/// The two read operations the search needs from a Hive node.
///
/// Implementations must be safe to share across concurrent requests.
#[async_trait]
pub trait HiveApi: Send + Sync {
    /// Most recently created posts carrying `tag`, newest first, at most `limit` of them.
    async fn list_recent_by_tag(&self, tag: &str, limit: u32) -> Result<Vec<Post>, HiveError>;

    /// Account records for `names`. Unknown names are simply missing from the result.
    async fn fetch_accounts(&self, names: &[String]) -> Result<Vec<Account>, HiveError>;
}

#[derive(Debug, Error)]
pub enum HiveError {
    #[error("hive request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("hive node returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("hive rpc error {code}: {message}")]
    Rpc { code: i64, message: String },
    #[error("hive response missing result for {0}")]
    MissingResult(&'static str),
}

/// A post as returned by `condenser_api.get_discussions_by_created`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Post {
    pub author: String,
    pub permlink: String,
    #[serde(default)]
    pub title: String,
    /// Naive UTC timestamp exactly as the node sent it.
    pub created: String,
    /// Outer `None` when the node left the field out, `Some(None)` when it sent `null`.
    #[serde(default, deserialize_with = "deserialize_present")]
    pub net_votes: Option<Option<i64>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub pending_payout_value: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub total_pending_payout_value: Option<serde_json::Value>,
}

impl Post {
    /// Parses `created`; `None` when the node sent something unreadable.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        parse_hive_time(&self.created)
    }

    /// Missing and `null` vote counts both count as zero.
    pub fn net_votes_or_zero(&self) -> i64 {
        self.net_votes.flatten().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Account {
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_reputation")]
    pub reputation: Option<i64>,
}

/// Hive timestamps carry no offset (`2024-05-01T12:00:00`) and are always UTC.
pub fn parse_hive_time(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc());
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|value| value.with_timezone(&Utc))
}

// Only runs when the key is present, so an explicit `null` survives as `Some(..)`.
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

// Nodes send reputation as a number on most APIs but as a string on some.
fn deserialize_reputation<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawReputation {
        Int(i64),
        Float(f64),
        Text(String),
    }

    let raw = Option::<RawReputation>::deserialize(deserializer)?;
    Ok(match raw {
        None => None,
        Some(RawReputation::Int(value)) => Some(value),
        Some(RawReputation::Float(value)) => Some(value as i64),
        Some(RawReputation::Text(text)) => text.trim().parse::<i64>().ok(),
    })
}

/// JSON-RPC client for a single Hive API node.
#[derive(Clone)]
pub struct HiveClient {
    client: reqwest::Client,
    node_url: String,
}

#[derive(Serialize)]
struct RpcRequest<'a, P: Serialize> {
    jsonrpc: &'static str,
    method: &'a str,
    params: P,
    id: u64,
}

#[derive(Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorBody>,
}

#[derive(Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

#[derive(Serialize)]
struct DiscussionQuery<'a> {
    tag: &'a str,
    limit: u32,
}

impl HiveClient {
    pub fn from_config(config: &HiveConfig) -> Self {
        Self::new(config.node_url.clone())
    }

    pub fn new(node_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            node_url,
        }
    }

    pub fn node_url(&self) -> &str {
        &self.node_url
    }

    async fn call<P, T>(&self, method: &str, params: P) -> Result<Option<T>, HiveError>
    where
        P: Serialize + Send,
        T: DeserializeOwned,
    {
        let request = RpcRequest {
            jsonrpc: "2.0",
            method,
            params,
            id: 1,
        };

        let response = self.client.post(&self.node_url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HiveError::Status {
                status,
                body: body.trim().to_string(),
            });
        }

        let body: RpcResponse<T> = response.json().await?;
        if let Some(error) = body.error {
            return Err(HiveError::Rpc {
                code: error.code,
                message: error.message,
            });
        }
        Ok(body.result)
    }
}

#[async_trait]
impl HiveApi for HiveClient {
    async fn list_recent_by_tag(&self, tag: &str, limit: u32) -> Result<Vec<Post>, HiveError> {
        let posts: Option<Vec<Post>> = self
            .call(
                "condenser_api.get_discussions_by_created",
                [DiscussionQuery { tag, limit }],
            )
            .await?;
        Ok(posts.unwrap_or_default())
    }

    async fn fetch_accounts(&self, names: &[String]) -> Result<Vec<Account>, HiveError> {
        self.call("condenser_api.get_accounts", [names])
            .await?
            .ok_or(HiveError::MissingResult("condenser_api.get_accounts"))
    }
}
