//! Shaping of SPARQL JSON results into tool answers.
//!
//! Results follow the W3C SPARQL 1.1 results JSON layout:
//! `{ "head": {...}, "results": { "bindings": [ { var: { "value": ... } } ] } }`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{GeoconnexError, GeoconnexResult};

/// Returned by the river lookup when the query matched nothing.
pub const NO_PID_FOUND: &str = "No PID found";

const MAINSTEM_VARIABLE: &str = "mainstem";

/// One solution row: variable name to RDF term object, kept as received.
pub type Binding = Map<String, Value>;

/// The part of a SPARQL results document the shapers read; `head` and
/// link metadata are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SparqlResults {
    pub results: ResultSet,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultSet {
    pub bindings: Vec<Binding>,
}

/// Typed view of a single bound term. Only the lexical `value` is read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RdfTerm {
    pub value: String,
}

impl RdfTerm {
    /// Reads `variable` out of a binding.
    ///
    /// # Errors
    /// Returns [`GeoconnexError::MissingVariable`] when the variable is unbound and
    /// [`GeoconnexError::MalformedResults`] when the term has no string `value`.
    pub fn from_binding(binding: &Binding, variable: &str) -> GeoconnexResult<Self> {
        let term = binding
            .get(variable)
            .ok_or_else(|| GeoconnexError::MissingVariable(variable.to_string()))?;
        Self::deserialize(term).map_err(GeoconnexError::MalformedResults)
    }
}

/// Returns the first row's `mainstem` value, or `None` when there are no rows.
///
/// Later rows are ignored even when they are equally good matches.
///
/// # Panics
/// Panics when `result` is empty or has no `results` key; a conforming SPARQL
/// endpoint never produces either.
///
/// # Errors
/// Fails when the result set is structurally malformed or the first row does not
/// bind `mainstem`.
pub fn first_mainstem(result: &Value) -> GeoconnexResult<Option<String>> {
    let results = result_set(result)?;
    results
        .results
        .bindings
        .first()
        .map(|binding| RdfTerm::from_binding(binding, MAINSTEM_VARIABLE).map(|term| term.value))
        .transpose()
}

/// Returns every binding row unmodified, in endpoint order.
///
/// # Panics
/// Panics when `result` is empty or has no `results` key.
///
/// # Errors
/// Fails when the result set has no `bindings` array.
pub fn dataset_bindings(result: &Value) -> GeoconnexResult<Vec<Binding>> {
    Ok(result_set(result)?.results.bindings)
}

fn result_set(result: &Value) -> GeoconnexResult<SparqlResults> {
    assert!(is_truthy(result), "Geoconnex returned an empty query result");
    assert!(
        result.get("results").is_some(),
        "Geoconnex query result has no `results` key"
    );
    SparqlResults::deserialize(result).map_err(GeoconnexError::MalformedResults)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n.abs() > 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn mainstem(uri: &str) -> Value {
        json!({ "mainstem": { "type": "uri", "value": uri } })
    }

    #[test]
    fn first_mainstem_takes_first_row_only() {
        let result = json!({
            "head": { "vars": ["mainstem", "name", "wkt"] },
            "results": { "bindings": [
                mainstem("https://geoconnex.us/ref/mainstems/123"),
                mainstem("https://geoconnex.us/ref/mainstems/456"),
            ] }
        });

        let pid = first_mainstem(&result).expect("shape result");

        assert_eq!(pid.as_deref(), Some("https://geoconnex.us/ref/mainstems/123"));
    }

    #[test]
    fn first_mainstem_is_none_without_rows() {
        let result = json!({ "head": { "vars": [] }, "results": { "bindings": [] } });

        assert_eq!(first_mainstem(&result).expect("shape result"), None);
    }

    #[test]
    fn first_mainstem_reports_unbound_variable() {
        let result = json!({ "results": { "bindings": [ { "name": { "value": "Snake River" } } ] } });

        let err = first_mainstem(&result).expect_err("missing mainstem");

        assert!(matches!(err, GeoconnexError::MissingVariable(ref var) if var == "mainstem"));
    }

    #[test]
    fn term_without_value_is_malformed() {
        let result = json!({ "results": { "bindings": [ { "mainstem": { "type": "uri" } } ] } });

        let err = first_mainstem(&result).expect_err("term has no value");

        assert!(matches!(err, GeoconnexError::MalformedResults(_)));
    }

    #[test]
    fn missing_bindings_array_is_malformed() {
        let result = json!({ "results": { "distinct": true } });

        let err = dataset_bindings(&result).expect_err("no bindings");

        assert!(matches!(err, GeoconnexError::MalformedResults(_)));
    }

    #[test]
    #[should_panic(expected = "empty query result")]
    fn empty_result_is_fatal() {
        let _ = dataset_bindings(&json!({}));
    }

    #[test]
    #[should_panic(expected = "no `results` key")]
    fn result_without_results_key_is_fatal() {
        let _ = first_mainstem(&json!({ "boolean": true }));
    }

    #[test]
    fn dataset_bindings_are_returned_verbatim() {
        let rows = vec![
            json!({
                "siteName": { "type": "literal", "value": "Site A" },
                "datasetDescription": { "type": "literal", "value": "Water temperature", "xml:lang": "en" }
            }),
            json!({ "siteName": { "type": "literal", "value": "Site B" } }),
        ];
        let result = json!({ "results": { "bindings": rows.clone() } });

        let bindings = dataset_bindings(&result).expect("shape result");

        assert_eq!(bindings.len(), 2);
        let as_values: Vec<Value> = bindings.into_iter().map(Value::Object).collect();
        assert_eq!(as_values, rows);
    }

    #[test]
    fn rdf_term_reads_value_and_ignores_annotations() {
        let binding = json!({
            "temporalCoverage": {
                "type": "literal",
                "value": "2001-01-01/..",
                "datatype": "http://www.w3.org/2001/XMLSchema#string"
            }
        });
        let Value::Object(binding) = binding else {
            panic!("object literal");
        };

        let term = RdfTerm::from_binding(&binding, "temporalCoverage").expect("term");

        assert_eq!(term.value, "2001-01-01/..");
    }

    #[test]
    fn truthiness_follows_json_emptiness() {
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&json!([])));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!(0)));
        assert!(is_truthy(&json!({ "results": {} })));
    }
}
