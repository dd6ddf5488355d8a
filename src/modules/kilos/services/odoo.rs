use chrono::NaiveDateTime;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::config::OdooConfig;
use crate::core::dates::ODOO_DATETIME_FORMAT;
use crate::core::{AppError, Result};
use crate::modules::kilos::models::{PosOrder, KILOS_FIELD};

/// Order states that count towards the kilos reports.
const COUNTED_STATES: [&str; 4] = ["done", "registered", "paid", "invoiced"];

/// Client for the Odoo JSON-RPC endpoint (`POST {url}/jsonrpc`).
///
/// Odoo exposes the same authenticate/execute_kw contract over JSON-RPC as
/// over XML-RPC, with `service: "common"` for the login handshake and
/// `service: "object"` for model queries.
pub struct OdooClient {
    http: Client,
    config: OdooConfig,
}

/// An authenticated, single-request query handle: the uid returned by the
/// `common.authenticate` step plus everything `object.execute_kw` needs.
/// Acquired at request start, dropped when the response has been shaped.
#[derive(Debug)]
pub struct OdooSession {
    http: Client,
    url: String,
    db: String,
    uid: i64,
    password: String,
}

enum RpcFailure {
    Transport(reqwest::Error),
    Fault(String),
}

#[derive(Deserialize)]
struct JsonRpcResponse {
    result: Option<Value>,
    error: Option<JsonRpcFault>,
}

#[derive(Deserialize)]
struct JsonRpcFault {
    message: String,
    data: Option<JsonRpcFaultData>,
}

#[derive(Deserialize)]
struct JsonRpcFaultData {
    message: Option<String>,
}

impl JsonRpcFault {
    /// Prefer the server-side exception message over the generic RPC one.
    fn describe(self) -> String {
        self.data
            .and_then(|d| d.message)
            .unwrap_or(self.message)
    }
}

async fn json_rpc(
    http: &Client,
    url: &str,
    service: &str,
    method: &str,
    args: Value,
) -> std::result::Result<Value, RpcFailure> {
    let body = json!({
        "jsonrpc": "2.0",
        "method": "call",
        "params": {
            "service": service,
            "method": method,
            "args": args,
        },
        "id": 1,
    });

    let response = http
        .post(format!("{url}/jsonrpc"))
        .json(&body)
        .send()
        .await
        .map_err(RpcFailure::Transport)?;

    let response: JsonRpcResponse = response.json().await.map_err(RpcFailure::Transport)?;

    if let Some(fault) = response.error {
        return Err(RpcFailure::Fault(fault.describe()));
    }

    Ok(response.result.unwrap_or(Value::Null))
}

impl OdooClient {
    pub fn new(config: &OdooConfig) -> Self {
        Self {
            http: Client::new(),
            config: config.clone(),
        }
    }

    /// Two-step handshake: `common.authenticate` must yield an integer uid,
    /// which then acts as the object-query handle for this request.
    pub async fn connect(&self) -> Result<OdooSession> {
        let args = json!([
            self.config.db,
            self.config.username,
            self.config.password,
            {},
        ]);

        let uid = json_rpc(&self.http, &self.config.url, "common", "authenticate", args)
            .await
            .map_err(|failure| match failure {
                RpcFailure::Transport(e) => {
                    AppError::connection(format!("Failed to reach Odoo: {e}"))
                }
                RpcFailure::Fault(msg) => {
                    AppError::connection(format!("Odoo login call failed: {msg}"))
                }
            })?;

        // Odoo answers `false` instead of a uid when credentials are bad
        let uid = match uid.as_i64() {
            Some(uid) if uid > 0 => uid,
            _ => {
                return Err(AppError::authentication(
                    "Odoo returned no valid session id; check ODOO_USERNAME/ODOO_PASSWORD",
                ))
            }
        };

        debug!(uid, "Authenticated against Odoo");

        Ok(OdooSession {
            http: self.http.clone(),
            url: self.config.url.clone(),
            db: self.config.db.clone(),
            uid,
            password: self.config.password.clone(),
        })
    }
}

impl OdooSession {
    /// `search_read` on `pos.order`, filtered to orders whose `date_order`
    /// falls within `[start, end]` and whose state counts towards the
    /// reports. Only the branch reference and the kilos field are fetched.
    pub async fn search_orders(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<PosOrder>> {
        let domain = json!([[
            ["date_order", ">=", start.format(ODOO_DATETIME_FORMAT).to_string()],
            ["date_order", "<=", end.format(ODOO_DATETIME_FORMAT).to_string()],
            ["state", "in", COUNTED_STATES],
        ]]);
        let args = json!([
            self.db,
            self.uid,
            self.password,
            "pos.order",
            "search_read",
            domain,
            { "fields": ["config_id", KILOS_FIELD] },
        ]);

        let result = json_rpc(&self.http, &self.url, "object", "execute_kw", args)
            .await
            .map_err(|failure| match failure {
                RpcFailure::Transport(e) => {
                    AppError::connection(format!("Failed to reach Odoo: {e}"))
                }
                RpcFailure::Fault(msg) => AppError::query(msg),
            })?;

        let orders: Vec<PosOrder> = serde_json::from_value(result)
            .map_err(|e| AppError::query(format!("Unexpected search_read payload: {e}")))?;

        debug!(count = orders.len(), "Fetched pos.order records");

        Ok(orders)
    }
}
