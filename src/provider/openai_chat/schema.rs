use serde_json::{Map, Value};

use crate::error::ChatError;
use crate::types::SchemaSpec;

/// Translates a user-authored schema spec into the provider's
/// `response_format` envelope.
///
/// The schema tree is rebuilt node by node so that `properties` keys and the
/// `required` list keep their authored order, and every leaf keeps its JSON
/// type: booleans stay booleans, numbers stay numbers, strings stay strings.
pub(crate) fn to_response_format(spec: &SchemaSpec) -> Result<Value, ChatError> {
    if spec.name.trim().is_empty() {
        return Err(ChatError::validation(
            "schema spec requires a non-empty name",
        ));
    }
    let schema = translate_root(&spec.schema)?;

    let mut json_schema = Map::new();
    json_schema.insert("name".to_string(), Value::String(spec.name.clone()));
    json_schema.insert("strict".to_string(), Value::Bool(spec.strict));
    json_schema.insert("schema".to_string(), schema);

    let mut envelope = Map::new();
    envelope.insert("type".to_string(), Value::String("json_schema".to_string()));
    envelope.insert("json_schema".to_string(), Value::Object(json_schema));
    Ok(Value::Object(envelope))
}

fn translate_root(schema: &Value) -> Result<Value, ChatError> {
    let node = schema
        .as_object()
        .ok_or_else(|| ChatError::validation("schema spec requires a JSON object schema"))?;
    if !node.contains_key("type") {
        return Err(ChatError::validation(
            "schema top-level node must declare `type`",
        ));
    }
    Ok(translate_node(node))
}

fn translate_node(node: &Map<String, Value>) -> Value {
    let mut out = Map::new();
    for (key, value) in node {
        let translated = match key.as_str() {
            "properties" => translate_properties(value),
            "items" => translate_child(value),
            _ => value.clone(),
        };
        out.insert(key.clone(), translated);
    }
    Value::Object(out)
}

fn translate_properties(value: &Value) -> Value {
    match value.as_object() {
        Some(properties) => {
            let mut out = Map::new();
            for (name, child) in properties {
                out.insert(name.clone(), translate_child(child));
            }
            Value::Object(out)
        }
        None => value.clone(),
    }
}

fn translate_child(value: &Value) -> Value {
    match value.as_object() {
        Some(node) => translate_node(node),
        None => value.clone(),
    }
}
