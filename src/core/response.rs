//! Planka 回應外殼的型別化解碼。
//!
//! 單一資源回應為 `{ item, included? }`，集合回應為 `{ items, included? }`。
//! 解碼失敗回傳 [`ValidationError`]，由呼叫端決定要傳遞還是隔離。

use crate::utils::error::ValidationError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Deserialize)]
pub struct ItemResponse<T> {
    pub item: T,
    #[serde(default)]
    pub included: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemsResponse<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub included: Option<Map<String, Value>>,
}

pub fn decode_item<T: DeserializeOwned>(shape: &str, value: Value) -> Result<T, ValidationError> {
    serde_json::from_value::<ItemResponse<T>>(value)
        .map(|response| response.item)
        .map_err(|e| ValidationError::new(shape, e.to_string()))
}

pub fn decode_items<T: DeserializeOwned>(
    shape: &str,
    value: Value,
) -> Result<Vec<T>, ValidationError> {
    serde_json::from_value::<ItemsResponse<T>>(value)
        .map(|response| response.items)
        .map_err(|e| ValidationError::new(shape, e.to_string()))
}

/// 取出 `included.<key>` 陣列；任何結構不符都回傳 None
pub fn included_array<'a>(value: &'a Value, key: &str) -> Option<&'a Vec<Value>> {
    value
        .as_object()?
        .get("included")?
        .as_object()?
        .get(key)?
        .as_array()
}
