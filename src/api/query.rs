//
//  opsmngr-client
//  api/query.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Merging typed options into a path's query string.
//!
//! Options are ordinary `Serialize` structs. The serde field name is the
//! query key, `#[serde(flatten)]` embeds shared options such as
//! [`ListOptions`](super::ListOptions), `None` fields are left out, and a
//! sequence becomes one `key=value` pair per element.
//!
//! ```rust
//! use opsmngr::api::{set_query_params, ListOptions};
//!
//! let options = ListOptions::page(2, 50);
//! let path = set_query_params("api/public/v1.0/groups?pageNum=1", Some(&options)).unwrap();
//! assert_eq!(path, "api/public/v1.0/groups?itemsPerPage=50&pageNum=2");
//! ```

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use tracing::trace;
use url::form_urlencoded;
use url::Url;

use super::common::ApiError;

type QueryValues = BTreeMap<String, Vec<String>>;

/// Returns `path` with the fields of `options` merged into its query string.
///
/// `None` returns the path untouched. Every key produced by `options`
/// replaces all existing values for that key; other keys are kept. The
/// resulting query string is sorted by key.
///
/// # Errors
///
/// - [`ApiError::InvalidUrl`] if `path` is not a valid relative reference
/// - [`ApiError::Query`] if `options` holds a value that has no query form
pub fn set_query_params<O>(path: &str, options: Option<&O>) -> Result<String, ApiError>
where
    O: Serialize + ?Sized,
{
    let Some(options) = options else {
        return Ok(path.to_string());
    };

    validate_reference(path)?;

    let (rest, fragment) = match path.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (path, None),
    };
    let (base, query) = rest.split_once('?').unwrap_or((rest, ""));

    let mut values = parse_query(query);
    let encoded = encode_options(options)?;
    trace!(keys = encoded.len(), "merging query options");
    for (key, vals) in encoded {
        values.insert(key, vals);
    }

    let mut out = base.to_string();
    if !values.is_empty() {
        out.push('?');
        out.push_str(&encode_query(&values));
    }
    if let Some(fragment) = fragment {
        out.push('#');
        out.push_str(fragment);
    }
    Ok(out)
}

fn validate_reference(path: &str) -> Result<(), ApiError> {
    let base = Url::parse("http://localhost/")?;
    base.join(path)?;
    Ok(())
}

fn parse_query(query: &str) -> QueryValues {
    let mut values = QueryValues::new();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        values
            .entry(key.into_owned())
            .or_default()
            .push(value.into_owned());
    }
    values
}

fn encode_query(values: &QueryValues) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, vals) in values {
        for value in vals {
            serializer.append_pair(key, value);
        }
    }
    serializer.finish()
}

fn encode_options<O>(options: &O) -> Result<QueryValues, ApiError>
where
    O: Serialize + ?Sized,
{
    let value = serde_json::to_value(options).map_err(ApiError::Encode)?;
    let Value::Object(fields) = value else {
        return Err(ApiError::Query(format!(
            "options must be a struct or map, got {}",
            kind(&value)
        )));
    };

    let mut values = QueryValues::new();
    for (key, field) in fields {
        match field {
            Value::Null => continue,
            Value::Array(items) => {
                let vals = items
                    .iter()
                    .map(|item| scalar(&key, item))
                    .collect::<Result<Vec<_>, _>>()?;
                if !vals.is_empty() {
                    values.insert(key, vals);
                }
            }
            other => {
                let val = scalar(&key, &other)?;
                values.insert(key, vec![val]);
            }
        }
    }
    Ok(values)
}

fn scalar(key: &str, value: &Value) -> Result<String, ApiError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(ApiError::Query(format!(
            "field {key:?} holds {}, which has no query form",
            kind(other)
        ))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
