//! Column schema definitions and typed column values.
//!
//! A board declares its columns once ([`ColumnDefinition`]); every pulse then
//! carries one [`RawColumnValue`] per column. The definition is the
//! constructor for the value: [`ColumnDefinition::decode`] turns the raw JSON
//! into a [`ColumnData`] variant matching the declared type.
//!
//! The set of column types is closed. A schema declaring a type not listed in
//! [`ColumnKind`] fails to deserialize rather than being silently ignored.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::MONDAY_DATE_FORMAT;
use crate::{ColumnError, ColumnId, Timeline, User};

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// Unit attached to numeric and formula columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// Symbol displayed next to values, e.g. `"$"` or `"%"`.
    #[serde(default)]
    pub symbol: String,
}

/// Settings block of a formula column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaSettings {
    /// The formula text as written in Monday.
    pub formula: String,
}

/// The declared type of a column, with the per-type schema data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ColumnKind {
    /// The pulse name column.
    Name,
    /// A single assigned person.
    Person,
    /// An assigned team.
    Team,
    /// Status-style column. Values carry an index into `labels`.
    Color {
        /// Label table keyed by the index rendered as a string.
        #[serde(default)]
        labels: BTreeMap<String, String>,
    },
    /// A start/end date range.
    Timerange,
    /// Free-form tags.
    Tag,
    /// A single date.
    Date,
    /// A checkbox.
    Boolean,
    /// Attached files.
    File,
    /// A number with an optional unit.
    Numeric {
        /// Unit shown next to values.
        #[serde(default)]
        unit: Option<Unit>,
    },
    /// Free text.
    Text,
    /// Several assigned people.
    MultiplePerson,
    /// A value computed by Monday from other columns.
    Formula {
        /// The formula definition.
        settings: FormulaSettings,
        /// Unit shown next to computed values.
        #[serde(default)]
        unit: Option<Unit>,
    },
    /// A URL.
    Link,
    /// Vote counts.
    Votes,
}

impl ColumnKind {
    /// Returns the wire name of this column type.
    pub fn type_name(&self) -> &'static str {
        match self {
            ColumnKind::Name => "name",
            ColumnKind::Person => "person",
            ColumnKind::Team => "team",
            ColumnKind::Color { .. } => "color",
            ColumnKind::Timerange => "timerange",
            ColumnKind::Tag => "tag",
            ColumnKind::Date => "date",
            ColumnKind::Boolean => "boolean",
            ColumnKind::File => "file",
            ColumnKind::Numeric { .. } => "numeric",
            ColumnKind::Text => "text",
            ColumnKind::MultiplePerson => "multiple-person",
            ColumnKind::Formula { .. } => "formula",
            ColumnKind::Link => "link",
            ColumnKind::Votes => "votes",
        }
    }

    /// Returns the unit symbol for numeric and formula columns.
    ///
    /// Empty when the column has no unit or is of another type.
    pub fn unit_symbol(&self) -> &str {
        match self {
            ColumnKind::Numeric { unit: Some(unit) } | ColumnKind::Formula { unit: Some(unit), .. } => {
                &unit.symbol
            }
            _ => "",
        }
    }
}

/// One column in a board's schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    /// Column id, unique within the board.
    pub id: ColumnId,

    /// Human-readable title. Pulses key their values by this title.
    pub title: String,

    /// Declared type and its schema data.
    #[serde(flatten)]
    pub kind: ColumnKind,
}

impl std::fmt::Display for ColumnDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({}):{}", self.title, self.id, self.kind.type_name())?;
        match &self.kind {
            ColumnKind::Numeric { .. } => write!(f, " (Unit: {})", self.kind.unit_symbol()),
            ColumnKind::Formula { settings, .. } => write!(
                f,
                " (formula: {}, units: {})",
                settings.formula,
                self.kind.unit_symbol()
            ),
            _ => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Values
// ---------------------------------------------------------------------------

/// A column value exactly as it appears in a pulse listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawColumnValue {
    /// Id of the column this value belongs to.
    pub cid: ColumnId,

    /// Title of the column this value belongs to.
    pub title: String,

    /// Pulse name; only populated for the `name` column.
    #[serde(default)]
    pub name: Option<String>,

    /// Runtime type tag, when the API includes one.
    #[serde(rename = "type", default)]
    pub value_type: Option<String>,

    /// Type-specific payload; `null` when the cell is empty.
    #[serde(default)]
    pub value: Value,
}

impl RawColumnValue {
    /// Returns `true` if the cell holds no value.
    pub fn is_empty(&self) -> bool {
        self.value.is_null()
    }
}

/// Resolved value of a colour (status) column.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorValue {
    /// The index resolved to this label.
    Label(String),
    /// The value carried no index; kept as received.
    Raw(Value),
    /// The cell is empty.
    Unset,
}

impl ColorValue {
    /// Returns the resolved label, if any.
    pub fn label(&self) -> Option<&str> {
        match self {
            ColorValue::Label(label) => Some(label),
            _ => None,
        }
    }
}

/// A decoded column value, one variant per [`ColumnKind`].
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    /// The pulse name.
    Name(String),
    /// The assigned person; `None` when unassigned.
    Person(Option<User>),
    /// Raw team payload.
    Team(Value),
    /// Status label, resolved through the column's label table.
    Color(ColorValue),
    /// Date range; both ends absent when the cell is empty.
    Timeline(Timeline),
    /// Raw tag payload.
    Tag(Value),
    /// The date; `None` when the cell is empty.
    Date(Option<NaiveDate>),
    /// The checkbox state; `None` when the cell is empty.
    Boolean(Option<bool>),
    /// Raw file payload.
    File(Value),
    /// A number and the column's unit symbol.
    Numeric {
        /// The number; `None` when the cell is empty.
        value: Option<f64>,
        /// Unit symbol from the schema, empty when the column has none.
        unit_symbol: String,
    },
    /// The text; `None` when the cell is empty.
    Text(Option<String>),
    /// Raw payload of a multiple-person column.
    MultiplePerson(Value),
    /// A computed value with the formula that produced it.
    Formula {
        /// Formula text from the schema.
        formula: String,
        /// Unit symbol from the schema, empty when the column has none.
        unit_symbol: String,
        /// The computed value as received.
        value: Value,
    },
    /// Raw link payload.
    Link(Value),
    /// Raw votes payload.
    Votes(Value),
}

impl std::fmt::Display for ColumnData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnData::Name(name) => write!(f, "{name}"),
            ColumnData::Person(Some(user)) => write!(f, "{user}"),
            ColumnData::Color(ColorValue::Label(label)) => write!(f, "{label}"),
            ColumnData::Color(ColorValue::Raw(value)) => write!(f, "{value}"),
            ColumnData::Timeline(timeline) => write!(f, "{timeline}"),
            ColumnData::Date(Some(date)) => write!(f, "{}", date.format(MONDAY_DATE_FORMAT)),
            ColumnData::Boolean(Some(flag)) => write!(f, "{flag}"),
            ColumnData::Numeric {
                value: Some(value),
                unit_symbol,
            } => write!(f, "{value}{unit_symbol}"),
            ColumnData::Text(Some(text)) => write!(f, "{text}"),
            ColumnData::Formula { value, .. } if !value.is_null() => write!(f, "{value}"),
            ColumnData::Team(value)
            | ColumnData::Tag(value)
            | ColumnData::File(value)
            | ColumnData::MultiplePerson(value)
            | ColumnData::Link(value)
            | ColumnData::Votes(value)
                if !value.is_null() =>
            {
                write!(f, "{value}")
            }
            _ => write!(f, "None"),
        }
    }
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

impl ColumnDefinition {
    /// Decodes a raw pulse value using this column's declared type.
    ///
    /// # Errors
    ///
    /// - [`ColumnError::TypeMismatch`] if the value carries a type tag that
    ///   differs from the declared type.
    /// - [`ColumnError::UnknownLabel`] if a colour index is not in the label table.
    /// - [`ColumnError::InvalidValue`] if the payload does not have the shape
    ///   the declared type requires.
    pub fn decode(&self, raw: &RawColumnValue) -> Result<ColumnData, ColumnError> {
        let declared = self.kind.type_name();
        if let Some(actual) = raw.value_type.as_deref() {
            if actual != declared {
                return Err(ColumnError::TypeMismatch {
                    column: self.id.clone(),
                    declared,
                    actual: actual.to_string(),
                });
            }
        }

        let value = &raw.value;
        let data = match &self.kind {
            ColumnKind::Name => {
                let name = raw
                    .name
                    .clone()
                    .or_else(|| value.as_str().map(str::to_owned))
                    .ok_or_else(|| self.invalid("missing name"))?;
                ColumnData::Name(name)
            }
            ColumnKind::Person => {
                if value.is_null() {
                    ColumnData::Person(None)
                } else {
                    let user = serde_json::from_value::<User>(value.clone())
                        .map_err(|e| self.invalid(e.to_string()))?;
                    ColumnData::Person(Some(user))
                }
            }
            ColumnKind::Team => ColumnData::Team(value.clone()),
            ColumnKind::Color { labels } => ColumnData::Color(self.decode_color(labels, value)?),
            ColumnKind::Timerange => ColumnData::Timeline(self.decode_timeline(value)?),
            ColumnKind::Tag => ColumnData::Tag(value.clone()),
            ColumnKind::Date => ColumnData::Date(self.decode_date(value)?),
            ColumnKind::Boolean => ColumnData::Boolean(match value {
                Value::Null => None,
                Value::Bool(flag) => Some(*flag),
                Value::String(s) if s == "true" => Some(true),
                Value::String(s) if s == "false" => Some(false),
                other => return Err(self.invalid(format!("expected a boolean, got {other}"))),
            }),
            ColumnKind::File => ColumnData::File(value.clone()),
            ColumnKind::Numeric { .. } => ColumnData::Numeric {
                value: self.decode_number(value)?,
                unit_symbol: self.kind.unit_symbol().to_string(),
            },
            ColumnKind::Text => ColumnData::Text(match value {
                Value::Null => None,
                Value::String(s) => Some(s.clone()),
                other => return Err(self.invalid(format!("expected text, got {other}"))),
            }),
            ColumnKind::MultiplePerson => ColumnData::MultiplePerson(value.clone()),
            ColumnKind::Formula { settings, .. } => ColumnData::Formula {
                formula: settings.formula.clone(),
                unit_symbol: self.kind.unit_symbol().to_string(),
                value: value.clone(),
            },
            ColumnKind::Link => ColumnData::Link(value.clone()),
            ColumnKind::Votes => ColumnData::Votes(value.clone()),
        };
        Ok(data)
    }

    fn decode_color(
        &self,
        labels: &BTreeMap<String, String>,
        value: &Value,
    ) -> Result<ColorValue, ColumnError> {
        if value.is_null() {
            return Ok(ColorValue::Unset);
        }
        let index = match value.get("index") {
            None | Some(Value::Null) => return Ok(ColorValue::Raw(value.clone())),
            Some(Value::Number(n)) => n.as_u64(),
            Some(Value::String(s)) => s.parse::<u64>().ok(),
            Some(_) => None,
        }
        .ok_or_else(|| self.invalid(format!("index is not a label index: {value}")))?;

        labels
            .get(&index.to_string())
            .map(|label| ColorValue::Label(label.clone()))
            .ok_or_else(|| ColumnError::UnknownLabel {
                column: self.id.clone(),
                index,
            })
    }

    fn decode_timeline(&self, value: &Value) -> Result<Timeline, ColumnError> {
        if value.is_null() {
            return Ok(Timeline::default());
        }
        let end_of = |key: &str| -> Result<Option<NaiveDate>, ColumnError> {
            match value.get(key) {
                None | Some(Value::Null) => Ok(None),
                Some(Value::String(s)) => self.parse_date(s).map(Some),
                Some(other) => Err(self.invalid(format!("'{key}' is not a date: {other}"))),
            }
        };
        Ok(Timeline {
            start: end_of("from")?,
            end: end_of("to")?,
        })
    }

    fn decode_date(&self, value: &Value) -> Result<Option<NaiveDate>, ColumnError> {
        match value {
            Value::Null => Ok(None),
            Value::String(s) => self.parse_date(s).map(Some),
            Value::Object(map) => match map.get("date") {
                None | Some(Value::Null) => Ok(None),
                Some(Value::String(s)) => self.parse_date(s).map(Some),
                Some(other) => Err(self.invalid(format!("'date' is not a date: {other}"))),
            },
            other => Err(self.invalid(format!("expected a date, got {other}"))),
        }
    }

    fn decode_number(&self, value: &Value) -> Result<Option<f64>, ColumnError> {
        match value {
            Value::Null => Ok(None),
            Value::Number(n) => Ok(n.as_f64()),
            Value::String(s) if s.trim().is_empty() => Ok(None),
            Value::String(s) => s
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|e| self.invalid(format!("'{s}': {e}"))),
            other => Err(self.invalid(format!("expected a number, got {other}"))),
        }
    }

    fn parse_date(&self, s: &str) -> Result<NaiveDate, ColumnError> {
        NaiveDate::parse_from_str(s, MONDAY_DATE_FORMAT)
            .map_err(|e| self.invalid(format!("'{s}': {e}")))
    }

    fn invalid(&self, message: impl Into<String>) -> ColumnError {
        ColumnError::InvalidValue {
            column: self.id.clone(),
            kind: self.kind.type_name(),
            message: message.into(),
        }
    }
}
