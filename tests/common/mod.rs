//! Scripted in-memory transport shared by the integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use projectx_sdk::error::HttpError;
use projectx_sdk::prelude::*;
use serde_json::{json, Value};

pub const BASE_URL: &str = "https://gateway.test/api";

/// One request as seen by the transport.
#[derive(Debug, Clone)]
pub struct Call {
    pub path: String,
    pub body: Value,
    pub bearer: Option<String>,
}

/// Replies are queued per endpoint path and popped in order. An endpoint
/// with an empty queue answers `500`.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<HashMap<String, VecDeque<Result<RawResponse, String>>>>,
    calls: Mutex<Vec<Call>>,
    yielding: bool,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Yields to the scheduler before recording a request and again before
    /// answering it, so concurrent callers interleave.
    pub fn yielding() -> Arc<Self> {
        Arc::new(Self {
            yielding: true,
            ..Self::default()
        })
    }

    pub fn reply(&self, path: &str, status: u16, body: Value) -> &Self {
        self.push(path, Ok(RawResponse::new(status, body.to_string())))
    }

    pub fn reply_raw(&self, path: &str, status: u16, body: &str) -> &Self {
        self.push(path, Ok(RawResponse::new(status, body)))
    }

    pub fn fail(&self, path: &str, message: &str) -> &Self {
        self.push(path, Err(message.to_string()))
    }

    /// Successful login handing out `token`.
    pub fn login_ok(&self, token: &str) -> &Self {
        self.reply(
            "/Auth/loginKey",
            200,
            json!({ "token": token, "success": true, "errorCode": 0, "errorMessage": null }),
        )
    }

    fn push(&self, path: &str, reply: Result<RawResponse, String>) -> &Self {
        self.replies
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_default()
            .push_back(reply);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, path: &str) -> Vec<Call> {
        self.calls().into_iter().filter(|c| c.path == path).collect()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn post_json(
        &self,
        url: &str,
        body: &Value,
        bearer: Option<&str>,
    ) -> Result<RawResponse, HttpError> {
        if self.yielding {
            tokio::task::yield_now().await;
        }
        let path = url.strip_prefix(BASE_URL).unwrap_or(url).to_string();
        self.calls.lock().unwrap().push(Call {
            path: path.clone(),
            body: body.clone(),
            bearer: bearer.map(str::to_string),
        });

        let next = self
            .replies
            .lock()
            .unwrap()
            .get_mut(&path)
            .and_then(VecDeque::pop_front);
        if self.yielding {
            tokio::task::yield_now().await;
        }
        match next {
            Some(Ok(resp)) => Ok(resp),
            Some(Err(message)) => Err(HttpError::Transport(message)),
            None => Ok(RawResponse::new(500, format!("no scripted reply for {}", path))),
        }
    }
}

pub fn client_with(transport: Arc<ScriptedTransport>) -> ProjectXClient {
    builder_with(transport).build().unwrap()
}

pub fn builder_with(transport: Arc<ScriptedTransport>) -> ProjectXClientBuilder {
    ProjectXClient::builder()
        .base_url(BASE_URL)
        .credentials(ApiCredentials::new("trader", "secret-key"))
        .transport(transport)
        .day_zone(DayZone::utc())
}

pub fn ok(mut payload: Value) -> Value {
    if let Value::Object(map) = &mut payload {
        map.insert("success".to_string(), json!(true));
        map.insert("errorCode".to_string(), json!(0));
        map.insert("errorMessage".to_string(), Value::Null);
    }
    payload
}

pub fn rejected(code: i64, message: &str) -> Value {
    json!({ "success": false, "errorCode": code, "errorMessage": message })
}

pub fn contract(id: &str, name: &str, active: bool) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": format!("{} description", name),
        "tickSize": 0.25,
        "tickValue": 5.0,
        "activeContract": active
    })
}

pub fn bar(t: &str, close: f64) -> Value {
    json!({ "t": t, "o": close, "h": close + 1.0, "l": close - 1.0, "c": close, "v": 10 })
}

pub fn account(id: i64, name: &str) -> Value {
    json!({ "id": id, "name": name, "balance": 50000.0, "canTrade": true, "isVisible": true })
}

pub fn trade(id: i64, account_id: i64, pnl: Option<f64>) -> Value {
    json!({
        "id": id,
        "accountId": account_id,
        "contractId": "CON.F.US.ENQ.M25",
        "creationTimestamp": "2025-05-08T14:30:00.000+00:00",
        "price": 21000.25,
        "profitAndLoss": pnl,
        "fees": 1.4,
        "side": 0,
        "size": 1,
        "voided": false,
        "orderId": id * 10
    })
}
