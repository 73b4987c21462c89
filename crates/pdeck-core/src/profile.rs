//! The profile record and its repeatable row shapes.
//!
//! Field names mirror the profile service's wire format exactly
//! (`emailaddress`, `phonenumber`, `occupationFrom`, ...). A payload is
//! replaced wholesale on each read; missing arrays deserialize as empty
//! groups and unknown fields are ignored.

use serde::{Deserialize, Deserializer, Serialize};

use crate::group::{BoundedGroup, GroupRow};

/// The root profile record: identity fields plus five repeatable groups.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub firstname: String,

    #[serde(default)]
    pub middlename: String,

    #[serde(default)]
    pub lastname: String,

    #[serde(default)]
    pub dateofbirth: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,

    #[serde(default)]
    pub isofficer: bool,

    #[serde(default)]
    pub contacts: BoundedGroup<Address>,

    #[serde(default)]
    pub emails: BoundedGroup<EmailRecord>,

    #[serde(default)]
    pub phones: BoundedGroup<PhoneRecord>,

    #[serde(default)]
    pub identifications: BoundedGroup<IdentificationRecord>,

    #[serde(default)]
    pub occupations: BoundedGroup<OccupationRecord>,
}

impl Profile {
    /// Display name for the page header: "firstname lastname", falling back
    /// to the account email when both are blank.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.firstname, self.lastname);
        let full = full.trim();
        if full.is_empty() {
            self.email.clone()
        } else {
            full.to_string()
        }
    }
}

/// A postal address. `type` is an [`crate::codes::ADDRESS_KIND`] code.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub country: String,

    #[serde(default)]
    pub city: String,

    #[serde(default)]
    pub street: String,

    #[serde(default)]
    pub postalcode: String,

    #[serde(default, rename = "type")]
    pub kind: String,
}

impl GroupRow for Address {
    fn blank() -> Self {
        Self::default()
    }
}

/// An email contact. `type` is a [`crate::codes::CONTACT_KIND`] code;
/// `preferred` travels as `"true"`/`"false"` (bool accepted on input).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailRecord {
    #[serde(default)]
    pub emailaddress: String,

    #[serde(default, rename = "type")]
    pub kind: String,

    #[serde(default = "preferred_off", deserialize_with = "string_or_bool")]
    pub preferred: String,
}

impl GroupRow for EmailRecord {
    fn blank() -> Self {
        Self {
            emailaddress: String::new(),
            kind: String::new(),
            preferred: preferred_off(),
        }
    }
}

/// A phone contact, shaped like [`EmailRecord`] with a number instead of an
/// address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneRecord {
    #[serde(default)]
    pub phonenumber: String,

    #[serde(default, rename = "type")]
    pub kind: String,

    #[serde(default = "preferred_off", deserialize_with = "string_or_bool")]
    pub preferred: String,
}

impl GroupRow for PhoneRecord {
    fn blank() -> Self {
        Self {
            phonenumber: String::new(),
            kind: String::new(),
            preferred: preferred_off(),
        }
    }
}

/// An identification document. `idtype` is an [`crate::codes::ID_KIND`]
/// code; `idfile` holds an uploaded-document path or server-side marker.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IdentificationRecord {
    #[serde(default)]
    pub idtype: String,

    #[serde(default)]
    pub idexpiry: String,

    #[serde(default)]
    pub idfile: String,
}

impl GroupRow for IdentificationRecord {
    fn blank() -> Self {
        Self::default()
    }
}

/// One entry of the occupation history. `occupation` is an
/// [`crate::codes::OCCUPATION_KIND`] code; dates are ISO `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OccupationRecord {
    #[serde(default)]
    pub occupation: String,

    #[serde(default, rename = "occupationFrom")]
    pub occupation_from: String,

    #[serde(default, rename = "occupationTo")]
    pub occupation_to: String,
}

impl GroupRow for OccupationRecord {
    fn blank() -> Self {
        Self::default()
    }
}

fn preferred_off() -> String {
    "false".to_string()
}

/// Accept `preferred` as either a JSON bool or a string, normalizing bools
/// to their string form.
fn string_or_bool<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Text(String),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Bool(b) => b.to_string(),
        Raw::Text(s) => s,
    })
}
