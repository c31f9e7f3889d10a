//! JSON view of records
//!
//! Records serialize their known fields through serde. The unknown tail has
//! no JSON shape of its own, so the view wraps the record and carries the
//! tail as hex:
//!
//! ```text
//! {"record": {...}, "unknown_fields": {"count": 1, "hex": "a20603787878"}}
//! ```
//!
//! Reading accepts either that wrapper or a bare record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

use super::{Message, UnknownFields};

/// Hex rendering of a record's unknown tail
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnknownFieldsJson {
    pub count: usize,
    pub hex: String,
}

/// A record together with its unknown tail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordJson<M> {
    pub record: M,
    #[serde(default)]
    pub unknown_fields: UnknownFieldsJson,
}

impl<M: Message> RecordJson<M> {
    pub fn new(record: M) -> Self {
        let unknown = record.unknown_fields();
        let unknown_fields = UnknownFieldsJson {
            count: unknown.field_count(),
            hex: hex::encode(unknown.as_bytes()),
        };
        Self {
            record,
            unknown_fields,
        }
    }

    /// The record with its unknown tail restored
    pub fn into_record(self) -> Result<M> {
        let mut record = self.record;
        let raw = hex::decode(self.unknown_fields.hex.trim())?;
        *record.unknown_fields_mut() = UnknownFields::from_raw::<M>(raw)?;
        Ok(record)
    }
}

/// Render a record and its unknown tail as pretty-printed JSON
pub fn to_json<M>(record: &M) -> Result<String>
where
    M: Message + Serialize,
{
    Ok(serde_json::to_string_pretty(&RecordJson::new(record.clone()))?)
}

/// Parse a wrapped or bare JSON record
///
/// An object with a `record` key is read as the wrapper.
pub fn from_json<M>(input: &str) -> Result<M>
where
    M: Message + DeserializeOwned,
{
    let value: Value = serde_json::from_str(input)?;
    let wrapped = value.as_object().map_or(false, |object| object.contains_key("record"));
    if wrapped {
        let wrapped: RecordJson<M> = serde_json::from_value(value)?;
        wrapped.into_record()
    } else {
        Ok(serde_json::from_value(value)?)
    }
}
