use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Wire name of the custom kilos field on `pos.order`.
pub const KILOS_FIELD: &str = "x_studio_float_field_1u1_1irfgb3un";

/// A branch (point-of-sale location) reference: remote id plus label.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchRef {
    pub id: i64,
    pub label: String,
}

/// One point-of-sale order as returned by `search_read` on `pos.order`.
///
/// Odoo serializes unset fields as JSON `false`, so both projected fields
/// come through custom deserializers that turn `false` into `None`.
#[derive(Debug, Clone, Deserialize)]
pub struct PosOrder {
    /// Branch reference, from the `config_id` many2one (`[id, label]`).
    #[serde(default, deserialize_with = "many2one")]
    pub config_id: Option<BranchRef>,

    /// The custom kilos quantity; `None` when unset on the order.
    #[serde(rename = "x_studio_float_field_1u1_1irfgb3un")]
    #[serde(default, deserialize_with = "falsy_float")]
    pub kilos: Option<f64>,
}

/// Odoo many2one convention: `[id, "label"]` when set, `false` when not.
fn many2one<'de, D>(deserializer: D) -> Result<Option<BranchRef>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => {
            let id = items
                .first()
                .and_then(Value::as_i64)
                .ok_or_else(|| D::Error::custom("many2one value without an integer id"))?;
            let label = items
                .get(1)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            Ok(Some(BranchRef { id, label }))
        }
        _ => Ok(None),
    }
}

fn falsy_float<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => Ok(n.as_f64()),
        _ => Ok(None),
    }
}
