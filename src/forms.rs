//! Descriptor-driven form contracts backing the Add/Edit/Delete modals.
//!
//! A form is a list of field descriptors; validation is deliberately minimal:
//! required fields must be present and non-empty, and numeric fields clamp
//! negative input to zero. The forms layer never talks to the store — pages
//! wire the validated output into whatever mutation they need, which keeps
//! the modal kind-agnostic.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::ServiceError;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Number,
    Select { options: Vec<String> },
    Datalist { options: Vec<String> },
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    #[serde(flatten)]
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldDescriptor {
    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
            required: true,
        }
    }

    pub fn number(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Number,
            required: true,
        }
    }

    pub fn select(name: &'static str, label: &'static str, options: Vec<String>) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Select { options },
            required: true,
        }
    }

    pub fn datalist(name: &'static str, label: &'static str, options: Vec<String>) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Datalist { options },
            required: true,
        }
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    fn is_number(&self) -> bool {
        matches!(self.kind, FieldKind::Number)
    }
}

/// Field list for one modal.
#[derive(Debug, Clone, Serialize)]
pub struct FormDefinition {
    pub fields: Vec<FieldDescriptor>,
}

impl FormDefinition {
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        Self { fields }
    }

    /// Add-modal validation: every required field present and non-empty.
    /// Returns the normalized value map (negatives clamped).
    pub fn validate_full(&self, values: &Map<String, Value>) -> Result<Map<String, Value>, ServiceError> {
        let missing: Vec<&str> = self
            .fields
            .iter()
            .filter(|f| f.required && is_blank(values.get(f.name)))
            .map(|f| f.name)
            .collect();
        if !missing.is_empty() {
            return Err(ServiceError::validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            )));
        }
        Ok(self.normalize(values))
    }

    /// Edit-modal validation: only the fields present are checked, and a
    /// required field that is present must not be blanked out.
    pub fn validate_partial(
        &self,
        values: &Map<String, Value>,
    ) -> Result<Map<String, Value>, ServiceError> {
        let blanked: Vec<&str> = self
            .fields
            .iter()
            .filter(|f| f.required && values.contains_key(f.name) && is_blank(values.get(f.name)))
            .map(|f| f.name)
            .collect();
        if !blanked.is_empty() {
            return Err(ServiceError::validation(format!(
                "required fields cannot be blank: {}",
                blanked.join(", ")
            )));
        }
        Ok(self.normalize(values))
    }

    /// Keep only declared fields; clamp negative numbers to zero.
    fn normalize(&self, values: &Map<String, Value>) -> Map<String, Value> {
        let mut out = Map::new();
        for field in &self.fields {
            let Some(value) = values.get(field.name) else {
                continue;
            };
            let value = if field.is_number() {
                clamp_non_negative(value)
            } else {
                value.clone()
            };
            out.insert(field.name.to_string(), value);
        }
        out
    }
}

/// Delete-modal contract: the callback runs only after explicit confirmation.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteConfirmation {
    pub label: String,
}

impl DeleteConfirmation {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Invoke `on_submit` only when the user confirmed. Returns whether the
    /// callback ran.
    pub fn submit(&self, confirmed: bool, on_submit: impl FnOnce()) -> bool {
        if confirmed {
            on_submit();
        }
        confirmed
    }
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

fn clamp_non_negative(value: &Value) -> Value {
    match value {
        Value::Number(n) => {
            if n.as_f64().map_or(false, |v| v < 0.0) {
                Value::from(0)
            } else {
                value.clone()
            }
        }
        // Numeric strings from text inputs get the same treatment.
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(v) if v < 0.0 => Value::from(0),
            Ok(_) => value.clone(),
            Err(_) => value.clone(),
        },
        _ => value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form() -> FormDefinition {
        FormDefinition::new(vec![
            FieldDescriptor::text("name", "Name"),
            FieldDescriptor::number("quantity", "Quantity"),
            FieldDescriptor::select(
                "warehouse",
                "Warehouse",
                vec!["Main".into(), "Annex".into()],
            ),
            FieldDescriptor::text("notes", "Notes").optional(),
        ])
    }

    fn obj(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn missing_required_field_blocks_submission() {
        let err = form()
            .validate_full(&obj(json!({ "name": "Widget", "quantity": 5 })))
            .unwrap_err();
        assert!(err.to_string().contains("warehouse"));
    }

    #[test]
    fn blank_string_counts_as_missing() {
        let err = form()
            .validate_full(&obj(json!({
                "name": "  ",
                "quantity": 5,
                "warehouse": "Main"
            })))
            .unwrap_err();
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn negative_numbers_clamp_to_zero() {
        let out = form()
            .validate_full(&obj(json!({
                "name": "Widget",
                "quantity": -4,
                "warehouse": "Main"
            })))
            .unwrap();
        assert_eq!(out["quantity"], json!(0));
    }

    #[test]
    fn partial_accepts_subset_but_rejects_blanked_required() {
        let form = form();
        let out = form
            .validate_partial(&obj(json!({ "quantity": -1 })))
            .unwrap();
        assert_eq!(out["quantity"], json!(0));
        assert!(!out.contains_key("name"));

        let err = form
            .validate_partial(&obj(json!({ "name": "" })))
            .unwrap_err();
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn undeclared_fields_are_dropped() {
        let out = form()
            .validate_full(&obj(json!({
                "name": "Widget",
                "quantity": 1,
                "warehouse": "Main",
                "injected": "nope"
            })))
            .unwrap();
        assert!(!out.contains_key("injected"));
    }

    #[test]
    fn delete_callback_only_runs_when_confirmed() {
        let confirm = DeleteConfirmation::new("Delete adjustment ADJ-001?");
        let mut ran = false;
        assert!(!confirm.submit(false, || ran = true));
        assert!(!ran);
        assert!(confirm.submit(true, || ran = true));
        assert!(ran);
    }
}
