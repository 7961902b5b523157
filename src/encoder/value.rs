//! Closed shape of a parameter value as the generic encoder sees it.

use std::borrow::Cow;

use serde_json::{Number, Value};

/// A single stringifiable value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    Text(&'a str),
    Number(&'a Number),
    Bool(bool),
}

impl Scalar<'_> {
    /// Canonical textual form of the scalar.
    pub fn to_text(&self) -> String {
        match self {
            Scalar::Text(text) => (*text).to_string(),
            Scalar::Number(number) => number_text(number),
            Scalar::Bool(flag) => flag.to_string(),
        }
    }
}

/// Fields of a record, each already reduced to text.
pub type Record<'a> = Vec<(Cow<'a, str>, String)>;

/// Element of a sequence parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ListItem<'a> {
    Scalar(Scalar<'a>),
    Record(Record<'a>),
}

/// Every shape a parameter value can take.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamShape<'a> {
    /// Explicitly empty, emits nothing
    Null,
    Scalar(Scalar<'a>),
    List(Vec<ListItem<'a>>),
    Record(Record<'a>),
}

impl<'a> ParamShape<'a> {
    /// Classifies a raw JSON value. Total over every JSON value.
    pub fn classify(value: &'a Value) -> Self {
        match value {
            Value::Null => ParamShape::Null,
            Value::Array(items) => ParamShape::List(items.iter().map(list_item).collect()),
            Value::Object(fields) => ParamShape::Record(
                fields
                    .iter()
                    .map(|(key, value)| (Cow::Borrowed(key.as_str()), value_text(value)))
                    .collect(),
            ),
            scalar => ParamShape::Scalar(scalar_of(scalar)),
        }
    }
}

fn list_item(value: &Value) -> ListItem<'_> {
    match value {
        Value::Object(fields) => ListItem::Record(
            fields
                .iter()
                .map(|(key, value)| (Cow::Borrowed(key.as_str()), value_text(value)))
                .collect(),
        ),
        // nested sequences are keyed by position
        Value::Array(items) => ListItem::Record(
            items
                .iter()
                .enumerate()
                .map(|(index, value)| (Cow::Owned(index.to_string()), value_text(value)))
                .collect(),
        ),
        Value::Null => ListItem::Scalar(Scalar::Text("null")),
        scalar => ListItem::Scalar(scalar_of(scalar)),
    }
}

fn scalar_of(value: &Value) -> Scalar<'_> {
    match value {
        Value::String(text) => Scalar::Text(text),
        Value::Number(number) => Scalar::Number(number),
        Value::Bool(flag) => Scalar::Bool(*flag),
        _ => Scalar::Text(""),
    }
}

/// Canonical text for any JSON value.
///
/// Sequences join their elements with `,` (a `null` element contributes
/// nothing); objects become compact JSON.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number_text(number),
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => value_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => value.to_string(),
    }
}

/// Decimal text for a number; integral floats drop their fractional part.
///
/// Magnitudes from `1e21` up or below `1e-6` use exponent form with an
/// explicit sign (`1e+21`, `1.5e-7`).
pub fn number_text(number: &Number) -> String {
    if number.is_i64() || number.is_u64() {
        return number.to_string();
    }
    match number.as_f64() {
        Some(float) if float == 0.0 => "0".to_string(),
        Some(float) if float.abs() >= 1e21 || float.abs() < 1e-6 => exponent_text(float),
        Some(float) if float.fract() == 0.0 => format!("{float:.0}"),
        Some(float) => float.to_string(),
        None => number.to_string(),
    }
}

fn exponent_text(float: f64) -> String {
    let text = format!("{float:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}
