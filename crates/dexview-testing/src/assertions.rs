use anyhow::{anyhow, Context, Result};
use serde_json::Value;

/// Value at a JSON pointer, with the whole document in the error.
pub fn at<'a>(doc: &'a Value, pointer: &str) -> Result<&'a Value> {
    doc.pointer(pointer)
        .ok_or_else(|| anyhow!("pointer {pointer} missing in:\n{doc:#}"))
}

/// String values of `key` across an array of objects at `pointer`.
pub fn strings_at(doc: &Value, pointer: &str, key: &str) -> Result<Vec<String>> {
    let array = at(doc, pointer)?
        .as_array()
        .ok_or_else(|| anyhow!("pointer {pointer} is not an array in:\n{doc:#}"))?;

    array
        .iter()
        .map(|item| {
            item.get(key)
                .and_then(Value::as_str)
                .map(str::to_string)
                .with_context(|| format!("key {key} missing or not a string in:\n{item:#}"))
        })
        .collect()
}

/// Assert the objects at `pointer` carry exactly `expected` under `key`,
/// in order.
pub fn assert_strings_at(doc: &Value, pointer: &str, key: &str, expected: &[&str]) {
    let actual = strings_at(doc, pointer, key).unwrap_or_else(|err| panic!("{err:#}"));
    assert_eq!(actual, expected, "at {pointer}.{key} in:\n{doc:#}");
}
