#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use hive_spanish_search::{Account, HiveApi, HiveError, Post};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Reputation that displays as exactly 30.
pub const RAW_REP_30: i64 = 3_593_813_664;
/// Reputation that displays as exactly 10.
pub const RAW_REP_10: i64 = -46_415_888_336;

/// In-memory node that records every call it receives.
#[derive(Default)]
pub struct StubHive {
    pub posts: Vec<Post>,
    pub accounts: Vec<Account>,
    pub fail_posts: bool,
    pub fail_accounts: bool,
    list_calls: AtomicUsize,
    account_calls: AtomicUsize,
    last_limit: Mutex<Option<u32>>,
    requested_names: Mutex<Vec<Vec<String>>>,
}

impl StubHive {
    pub fn new(posts: Vec<Post>, accounts: Vec<Account>) -> Self {
        Self {
            posts,
            accounts,
            ..Self::default()
        }
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn account_calls(&self) -> usize {
        self.account_calls.load(Ordering::SeqCst)
    }

    pub fn last_limit(&self) -> Option<u32> {
        *self.last_limit.lock().unwrap()
    }

    pub fn requested_names(&self) -> Vec<Vec<String>> {
        self.requested_names.lock().unwrap().clone()
    }
}

#[async_trait]
impl HiveApi for StubHive {
    async fn list_recent_by_tag(&self, _tag: &str, limit: u32) -> Result<Vec<Post>, HiveError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_limit.lock().unwrap() = Some(limit);
        if self.fail_posts {
            return Err(HiveError::Rpc {
                code: -32000,
                message: "node unavailable".to_string(),
            });
        }
        Ok(self.posts.iter().take(limit as usize).cloned().collect())
    }

    async fn fetch_accounts(&self, names: &[String]) -> Result<Vec<Account>, HiveError> {
        self.account_calls.fetch_add(1, Ordering::SeqCst);
        self.requested_names.lock().unwrap().push(names.to_vec());
        if self.fail_accounts {
            return Err(HiveError::MissingResult("condenser_api.get_accounts"));
        }
        Ok(self
            .accounts
            .iter()
            .filter(|account| names.contains(&account.name))
            .cloned()
            .collect())
    }
}

pub fn hive_time(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%dT%H:%M:%S").to_string()
}

pub fn post(author: &str, permlink: &str, created: DateTime<Utc>, net_votes: Option<i64>) -> Post {
    Post {
        author: author.to_string(),
        permlink: permlink.to_string(),
        title: format!("Post {}", permlink),
        created: hive_time(created),
        net_votes: net_votes.map(Some),
        pending_payout_value: Some(serde_json::json!("0.000 HBD")),
        total_pending_payout_value: Some(serde_json::json!("0.000 HBD")),
    }
}

pub fn account(name: &str, reputation: Option<i64>) -> Account {
    Account {
        name: name.to_string(),
        reputation,
    }
}
