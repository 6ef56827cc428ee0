//! Purpose: Validate one roster entry and hold its four typed fields.
//! Exports: `Record`, `Group`, `Debt`.
//! Role: The only place runtime JSON type inspection happens for record fields.
//! Invariants: A `Record` is fully valid or it does not exist; setters that
//! fail leave the previous value in place.
//! Invariants: Cell text is deterministic per field; rendering never inspects
//! JSON nodes again.
use serde_json::Value;

use crate::core::error::{Error, ErrorKind};

/// Group identifier; rosters mix free-form codes and plain numbers.
#[derive(Clone, Debug, PartialEq)]
pub enum Group {
    Code(String),
    Number(i64),
}

impl Group {
    pub fn cell_text(&self) -> String {
        match self {
            Group::Code(code) => code.clone(),
            Group::Number(n) => n.to_string(),
        }
    }
}

/// Outstanding debts; null means none, a string names one, an array several.
#[derive(Clone, Debug, PartialEq)]
pub enum Debt {
    None,
    One(String),
    Many(Vec<String>),
}

impl Debt {
    /// One deterministic cell per value: empty for no debt, the item itself,
    /// or comma-joined items (no space) for several.
    pub fn cell_text(&self) -> String {
        match self {
            Debt::None => String::new(),
            Debt::One(item) => item.clone(),
            Debt::Many(items) => items.join(","),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    name: String,
    group: Group,
    avg: f64,
    debt: Debt,
}

impl Record {
    /// Validates a JSON object node into a record. The first field that
    /// violates its rule aborts construction with a schema error naming it.
    pub fn from_value(value: &Value) -> Result<Self, Error> {
        let object = value.as_object().ok_or_else(|| {
            Error::new(ErrorKind::Schema).with_message("record is not a JSON object")
        })?;

        let name = parse_name(require(object, "name")?)?;
        let group = parse_group(require(object, "group")?)?;
        let avg = parse_avg(require(object, "avg")?)?;
        let debt = parse_debt(require(object, "debt")?)?;

        Ok(Self {
            name,
            group,
            avg,
            debt,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group(&self) -> &Group {
        &self.group
    }

    pub fn avg(&self) -> f64 {
        self.avg
    }

    pub fn debt(&self) -> &Debt {
        &self.debt
    }

    /// Replaces `name` after re-validating; the old value survives a failure.
    pub fn set_name(&mut self, value: &Value) -> Result<(), Error> {
        self.name = parse_name(value)?;
        Ok(())
    }

    pub fn set_group(&mut self, value: &Value) -> Result<(), Error> {
        self.group = parse_group(value)?;
        Ok(())
    }

    pub fn set_avg(&mut self, value: &Value) -> Result<(), Error> {
        self.avg = parse_avg(value)?;
        Ok(())
    }

    pub fn set_debt(&mut self, value: &Value) -> Result<(), Error> {
        self.debt = parse_debt(value)?;
        Ok(())
    }

    pub fn avg_cell_text(&self) -> String {
        self.avg.to_string()
    }
}

fn require<'v>(
    object: &'v serde_json::Map<String, Value>,
    key: &'static str,
) -> Result<&'v Value, Error> {
    object.get(key).ok_or_else(|| {
        Error::new(ErrorKind::Schema)
            .with_message(format!("required key `{key}` is missing"))
            .with_field(key)
    })
}

fn parse_name(value: &Value) -> Result<String, Error> {
    let name = value.as_str().ok_or_else(|| schema("name", "must be a string"))?;
    if name.is_empty() {
        return Err(schema("name", "must not be empty"));
    }
    Ok(name.to_string())
}

fn parse_group(value: &Value) -> Result<Group, Error> {
    match value {
        Value::String(code) => Ok(Group::Code(code.clone())),
        Value::Number(n) => n
            .as_i64()
            .map(Group::Number)
            .ok_or_else(|| schema("group", "numeric group must be an integer")),
        _ => Err(schema("group", "must be a string or an integer")),
    }
}

fn parse_avg(value: &Value) -> Result<f64, Error> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| schema("avg", "number is out of range")),
        Value::String(text) => {
            let parsed: f64 = text
                .parse()
                .map_err(|_| schema("avg", "string does not parse as a decimal number"))?;
            if !parsed.is_finite() {
                return Err(schema("avg", "string does not parse as a decimal number"));
            }
            Ok(parsed)
        }
        _ => Err(schema("avg", "must be a number or a numeric string")),
    }
}

fn parse_debt(value: &Value) -> Result<Debt, Error> {
    match value {
        Value::Null => Ok(Debt::None),
        Value::String(item) => Ok(Debt::One(item.clone())),
        Value::Array(items) => Ok(Debt::Many(items.iter().map(debt_item_text).collect())),
        _ => Err(schema("debt", "must be null, a string, or an array")),
    }
}

// Array elements are expected to be strings; anything else is kept as its
// compact JSON text rather than rejected.
fn debt_item_text(value: &Value) -> String {
    match value {
        Value::String(item) => item.clone(),
        other => other.to_string(),
    }
}

fn schema(field: &'static str, message: &str) -> Error {
    Error::new(ErrorKind::Schema)
        .with_message(format!("{field} {message}"))
        .with_field(field)
}
