//! Order form validation.
//!
//! Each field kind maps to one declarative [`FieldRule`]; the single-field
//! and whole-form validators both read the same table, so inline checks and
//! the submit-time check can never disagree. Values are trimmed before every
//! check, pattern checks included.

use crate::config::{ADDRESS_MIN_CHARS, NAME_MIN_CHARS};
use crate::locale::Messages;
use crate::order::{find_model, OrderSubmission};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

// Deliberately lax; they accept e.g. "a@b..c" and "((((((((((".
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[\d\s\-\(\)]{10,}$").unwrap());
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// The fields of the order form, in the order errors are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Name,
    Phone,
    Email,
    Model,
    Address,
    Consent,
}

impl FieldKind {
    pub const ALL: [FieldKind; 6] = [
        FieldKind::Name,
        FieldKind::Phone,
        FieldKind::Email,
        FieldKind::Model,
        FieldKind::Address,
        FieldKind::Consent,
    ];

    /// Identifier used for the input's `id`/`name` attributes.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Name => "name",
            FieldKind::Phone => "phone",
            FieldKind::Email => "email",
            FieldKind::Model => "model",
            FieldKind::Address => "address",
            FieldKind::Consent => "consent",
        }
    }

    /// Error text for this field in the given locale.
    pub fn error_message(self, messages: &Messages) -> &str {
        match self {
            FieldKind::Name => &messages.name_error,
            FieldKind::Phone => &messages.phone_error,
            FieldKind::Email => &messages.email_error,
            FieldKind::Model => &messages.model_error,
            FieldKind::Address => &messages.address_error,
            FieldKind::Consent => &messages.consent_error,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The predicate a field must satisfy.
#[derive(Debug, Clone, Copy)]
pub enum Check {
    /// At least this many characters.
    MinChars(usize),
    /// Whole value matches the pattern.
    Pattern(&'static Lazy<Regex>),
    /// An id from the product catalog.
    CatalogModel,
    /// A checkbox-style flag.
    Truthy,
}

impl Check {
    fn accepts(&self, trimmed: &str) -> bool {
        match self {
            Check::MinChars(min) => trimmed.chars().count() >= *min,
            Check::Pattern(regex) => regex.is_match(trimmed),
            Check::CatalogModel => find_model(trimmed).is_some(),
            Check::Truthy => is_truthy(trimmed),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub kind: FieldKind,
    pub check: Check,
}

/// One rule per field, in reporting order.
pub static RULES: [FieldRule; 6] = [
    FieldRule {
        kind: FieldKind::Name,
        check: Check::MinChars(NAME_MIN_CHARS),
    },
    FieldRule {
        kind: FieldKind::Phone,
        check: Check::Pattern(&PHONE_REGEX),
    },
    FieldRule {
        kind: FieldKind::Email,
        check: Check::Pattern(&EMAIL_REGEX),
    },
    FieldRule {
        kind: FieldKind::Model,
        check: Check::CatalogModel,
    },
    FieldRule {
        kind: FieldKind::Address,
        check: Check::MinChars(ADDRESS_MIN_CHARS),
    },
    FieldRule {
        kind: FieldKind::Consent,
        check: Check::Truthy,
    },
];

pub fn rule_for(kind: FieldKind) -> &'static FieldRule {
    // RULES is indexed in FieldKind::ALL order
    &RULES[kind as usize]
}

fn is_truthy(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "true" | "on" | "1" | "yes")
}

/// A field that failed its rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValidationError {
    pub field: FieldKind,
    pub message: String,
}

impl fmt::Display for FieldValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for FieldValidationError {}

/// Result of checking one field. `error` is empty when `valid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCheck {
    pub valid: bool,
    pub error: String,
}

impl FieldCheck {
    fn ok() -> Self {
        Self {
            valid: true,
            error: String::new(),
        }
    }

    /// Inline error text, if any.
    pub fn error(&self) -> Option<&str> {
        (!self.valid).then_some(self.error.as_str())
    }
}

/// Check a single field's current text.
pub fn validate_field(kind: FieldKind, value: &str, messages: &Messages) -> FieldCheck {
    let rule = rule_for(kind);
    if rule.check.accepts(value.trim()) {
        FieldCheck::ok()
    } else {
        FieldCheck {
            valid: false,
            error: kind.error_message(messages).to_string(),
        }
    }
}

fn bool_text(flag: bool) -> &'static str {
    if flag {
        "true"
    } else {
        "false"
    }
}

fn field_value(order: &OrderSubmission, kind: FieldKind) -> &str {
    match kind {
        FieldKind::Name => &order.name,
        FieldKind::Phone => &order.phone,
        FieldKind::Email => &order.email,
        FieldKind::Model => &order.model,
        FieldKind::Address => &order.address,
        FieldKind::Consent => bool_text(order.consent),
    }
}

/// Outcome of checking a whole order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<FieldValidationError>,
}

impl ValidationReport {
    /// Error messages in reporting order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.message.clone()).collect()
    }
}

/// Check every field of `order`; all failures are collected.
pub fn validate_order(order: &OrderSubmission, messages: &Messages) -> ValidationReport {
    let errors: Vec<FieldValidationError> = RULES
        .iter()
        .filter_map(|rule| {
            let check = validate_field(rule.kind, field_value(order, rule.kind), messages);
            (!check.valid).then(|| FieldValidationError {
                field: rule.kind,
                message: check.error,
            })
        })
        .collect();

    ValidationReport {
        valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_order() -> OrderSubmission {
        OrderSubmission {
            name: "Jo".into(),
            phone: "+1 234 567 8901".into(),
            email: "a@b.co".into(),
            model: "X1".into(),
            address: "123 Main Street".into(),
            consent: true,
        }
    }

    #[test]
    fn rules_follow_field_order() {
        for (rule, kind) in RULES.iter().zip(FieldKind::ALL) {
            assert_eq!(rule.kind, kind);
            assert_eq!(rule_for(kind).kind, kind);
        }
    }

    #[test]
    fn name_length_boundary() {
        let m = Messages::default();
        assert!(validate_field(FieldKind::Name, "Jo", &m).valid);
        assert!(validate_field(FieldKind::Name, "  Jo  ", &m).valid);
        assert!(validate_field(FieldKind::Name, "Я", &m).error().is_some());
        assert!(validate_field(FieldKind::Name, " J ", &m).error().is_some());
        assert!(validate_field(FieldKind::Name, "Ян", &m).valid);
    }

    #[test]
    fn address_length_boundary() {
        let m = Messages::default();
        assert!(validate_field(FieldKind::Address, "0123456789", &m).valid);
        assert!(!validate_field(FieldKind::Address, "012345678", &m).valid);
        assert!(!validate_field(FieldKind::Address, "   012345678   ", &m).valid);
    }

    #[test]
    fn phone_pattern() {
        let m = Messages::default();
        for ok in ["+7 (999) 123-45-67", "89991234567", "123-456-7890", " +1 234 567 8901 "] {
            assert!(validate_field(FieldKind::Phone, ok, &m).valid, "{ok}");
        }
        for bad in ["123", "+7 999 abc 45 67", "++79991234567", ""] {
            assert!(!validate_field(FieldKind::Phone, bad, &m).valid, "{bad}");
        }
    }

    #[test]
    fn email_pattern_is_lax() {
        let m = Messages::default();
        assert!(validate_field(FieldKind::Email, "a@b.co", &m).valid);
        assert!(validate_field(FieldKind::Email, "  a@b.co ", &m).valid);
        assert!(validate_field(FieldKind::Email, "a@b..co", &m).valid);
        assert!(!validate_field(FieldKind::Email, "bad", &m).valid);
        assert!(!validate_field(FieldKind::Email, "a b@c.d", &m).valid);
        assert!(!validate_field(FieldKind::Email, "a@bco", &m).valid);
    }

    #[test]
    fn model_and_consent() {
        let m = Messages::default();
        assert!(!validate_field(FieldKind::Model, "", &m).valid);
        assert!(!validate_field(FieldKind::Model, "  ", &m).valid);
        assert!(validate_field(FieldKind::Model, "X2", &m).valid);
        assert!(validate_field(FieldKind::Model, " X3 ", &m).valid);
        assert!(validate_field(FieldKind::Consent, "on", &m).valid);
        assert!(!validate_field(FieldKind::Consent, "", &m).valid);
    }

    #[test]
    fn model_outside_catalog_is_rejected() {
        let m = Messages::default();
        let check = validate_field(FieldKind::Model, "Z9-not-a-product", &m);
        assert!(!check.valid);
        assert_eq!(check.error, m.model_error);
        // ids are case-sensitive
        assert!(!validate_field(FieldKind::Model, "x1", &m).valid);

        let mut order = valid_order();
        order.model = "Z9-not-a-product".into();
        let report = validate_order(&order, &m);
        assert!(!report.valid);
        assert_eq!(report.messages(), vec![m.model_error.clone()]);
    }

    #[test]
    fn unticked_checkbox_value_is_an_inline_error() {
        // the consent checkbox reports its state as "true" / "false"
        let m = Messages::default();
        let check = validate_field(FieldKind::Consent, "false", &m);
        assert_eq!(check.error(), Some(m.consent_error.as_str()));
        assert!(validate_field(FieldKind::Consent, "true", &m).valid);
    }

    #[test]
    fn valid_field_has_empty_error() {
        let check = validate_field(FieldKind::Name, "Анна", &Messages::default());
        assert!(check.valid);
        assert!(check.error.is_empty());
        assert_eq!(check.error(), None);
    }

    #[test]
    fn report_reflects_each_failing_field() {
        let m = Messages::default();
        let mut order = valid_order();
        order.email = "nope".into();
        order.consent = false;

        let report = validate_order(&order, &m);
        assert!(!report.valid);
        let fields: Vec<_> = report.errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![FieldKind::Email, FieldKind::Consent]);
        assert_eq!(
            report.messages(),
            vec![m.email_error.clone(), m.consent_error.clone()]
        );
    }

    #[test]
    fn error_display_names_the_field() {
        let err = FieldValidationError {
            field: FieldKind::Phone,
            message: "bad phone".into(),
        };
        assert_eq!(err.to_string(), "phone: bad phone");
    }
}
