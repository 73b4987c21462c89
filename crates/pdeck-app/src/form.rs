//! Form surface of the profile screen.
//!
//! One metadata table drives both rendering and validation: every field
//! path resolves to a [`FieldSpec`] (label, control kind, required flag).
//! The focusable surface of the form is the flattened [`FormEntry`] list --
//! basic fields, then each group's rows followed by its add-row action.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use pdeck_core::codes::CodeSet;
use pdeck_core::{BasicField, FieldPath, GroupKind, Profile, RowField};

/// File extensions accepted for an identification document.
pub const ID_FILE_EXTENSIONS: &[&str] = &["pdf", "jpg", "jpeg", "png"];

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles"));

/// What kind of control a field renders as in Edit mode.
#[derive(Debug, Clone, Copy)]
pub enum ControlKind {
    /// Free text input
    Text,
    /// Text input validated as an ISO `YYYY-MM-DD` date
    Date,
    /// Text input holding a document path, restricted by extension
    File,
    /// Enumerated select cycling through a codec's options
    Select(&'static CodeSet),
}

/// Display and validation metadata for one field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub label: &'static str,
    pub control: ControlKind,
    pub required: bool,
}

/// One focusable entry of the form surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormEntry {
    /// An editable field of the draft
    Field(FieldPath),
    /// The add-row action at the end of a group section
    AddRow(GroupKind),
}

/// A validation failure, keyed by the offending field's path.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub path: FieldPath,
    pub message: String,
}

/// Metadata for a field path.
pub fn spec_for(path: FieldPath) -> FieldSpec {
    match path {
        FieldPath::Basic(field) => basic_spec(field),
        FieldPath::Row { field, .. } => row_spec(field),
    }
}

fn basic_spec(field: BasicField) -> FieldSpec {
    match field {
        BasicField::Email => FieldSpec {
            label: "Email",
            control: ControlKind::Text,
            required: true,
        },
        BasicField::Firstname => FieldSpec {
            label: "First Name",
            control: ControlKind::Text,
            required: true,
        },
        BasicField::Middlename => FieldSpec {
            label: "Middle Name",
            control: ControlKind::Text,
            required: false,
        },
        BasicField::Lastname => FieldSpec {
            label: "Last Name",
            control: ControlKind::Text,
            required: false,
        },
        BasicField::Dateofbirth => FieldSpec {
            label: "Date of Birth",
            control: ControlKind::Date,
            required: false,
        },
        BasicField::Age => FieldSpec {
            label: "Age",
            control: ControlKind::Text,
            required: false,
        },
    }
}

fn row_spec(field: RowField) -> FieldSpec {
    let select = |set| ControlKind::Select(set);
    match field {
        RowField::Country => FieldSpec {
            label: "Country",
            control: ControlKind::Text,
            required: true,
        },
        RowField::City => FieldSpec {
            label: "City",
            control: ControlKind::Text,
            required: true,
        },
        RowField::Street => FieldSpec {
            label: "Street",
            control: ControlKind::Text,
            required: true,
        },
        RowField::Postalcode => FieldSpec {
            label: "Postal Code",
            control: ControlKind::Text,
            required: false,
        },
        RowField::AddressType => FieldSpec {
            label: "Type",
            control: select(&pdeck_core::ADDRESS_KIND),
            required: true,
        },
        RowField::EmailAddress => FieldSpec {
            label: "Email Address",
            control: ControlKind::Text,
            required: true,
        },
        RowField::EmailType => FieldSpec {
            label: "Type",
            control: select(&pdeck_core::CONTACT_KIND),
            required: true,
        },
        RowField::EmailPreferred => FieldSpec {
            label: "Preferred",
            control: select(&pdeck_core::PREFERRED),
            required: true,
        },
        RowField::PhoneNumber => FieldSpec {
            label: "Phone Number",
            control: ControlKind::Text,
            required: true,
        },
        RowField::PhoneType => FieldSpec {
            label: "Type",
            control: select(&pdeck_core::CONTACT_KIND),
            required: true,
        },
        RowField::PhonePreferred => FieldSpec {
            label: "Preferred",
            control: select(&pdeck_core::PREFERRED),
            required: true,
        },
        RowField::IdType => FieldSpec {
            label: "Type",
            control: select(&pdeck_core::ID_KIND),
            required: true,
        },
        RowField::IdExpiry => FieldSpec {
            label: "Expiry Date",
            control: ControlKind::Date,
            required: true,
        },
        RowField::IdFile => FieldSpec {
            label: "Document",
            control: ControlKind::File,
            required: true,
        },
        RowField::Occupation => FieldSpec {
            label: "Occupation",
            control: select(&pdeck_core::OCCUPATION_KIND),
            required: true,
        },
        RowField::OccupationFrom => FieldSpec {
            label: "From Date",
            control: ControlKind::Date,
            required: true,
        },
        RowField::OccupationTo => FieldSpec {
            label: "To Date",
            control: ControlKind::Date,
            required: false,
        },
    }
}

/// Flatten the focusable form surface for a profile: basic fields first,
/// then each group's rows followed by its add-row action.
pub fn form_entries(profile: &Profile) -> Vec<FormEntry> {
    let mut entries: Vec<FormEntry> = BasicField::ALL
        .iter()
        .map(|f| FormEntry::Field(FieldPath::Basic(*f)))
        .collect();

    for group in GroupKind::ALL {
        for index in 0..profile.group_len(group) {
            for field in group.row_fields() {
                entries.push(FormEntry::Field(FieldPath::Row {
                    group,
                    index,
                    field: *field,
                }));
            }
        }
        entries.push(FormEntry::AddRow(group));
    }

    entries
}

/// Every field path of a profile, in form order. Used by validation.
fn field_paths(profile: &Profile) -> Vec<FieldPath> {
    form_entries(profile)
        .into_iter()
        .filter_map(|entry| match entry {
            FormEntry::Field(path) => Some(path),
            FormEntry::AddRow(_) => None,
        })
        .collect()
}

/// Validate a draft before submission.
///
/// Required fields must be non-empty; email fields must look like an
/// address; date fields must parse as `YYYY-MM-DD`; the identification
/// document must carry an accepted extension. Errors are keyed by field
/// path for inline display.
pub fn validate(profile: &Profile) -> Vec<FieldError> {
    let mut errors = Vec::new();

    for path in field_paths(profile) {
        let spec = spec_for(path);
        let value = profile.field(path).unwrap_or_default();

        if value.is_empty() {
            if spec.required {
                errors.push(FieldError {
                    path,
                    message: format!("{} is required", spec.label),
                });
            }
            continue;
        }

        let is_email_field = matches!(
            path,
            FieldPath::Basic(BasicField::Email)
                | FieldPath::Row {
                    field: RowField::EmailAddress,
                    ..
                }
        );
        if is_email_field && !EMAIL_PATTERN.is_match(&value) {
            errors.push(FieldError {
                path,
                message: format!("{} must be a valid email address", spec.label),
            });
            continue;
        }

        match spec.control {
            ControlKind::Date => {
                if NaiveDate::parse_from_str(&value, "%Y-%m-%d").is_err() {
                    errors.push(FieldError {
                        path,
                        message: format!("{} must be a date (YYYY-MM-DD)", spec.label),
                    });
                }
            }
            ControlKind::File => {
                let ext = value.rsplit('.').next().unwrap_or("").to_ascii_lowercase();
                if !ID_FILE_EXTENSIONS.contains(&ext.as_str()) {
                    errors.push(FieldError {
                        path,
                        message: format!(
                            "{} must be one of: {}",
                            spec.label,
                            ID_FILE_EXTENSIONS.join(", ")
                        ),
                    });
                }
            }
            ControlKind::Text | ControlKind::Select(_) => {}
        }
    }

    errors
}

/// The error for a given path, if validation recorded one.
pub fn error_for(errors: &[FieldError], path: FieldPath) -> Option<&FieldError> {
    errors.iter().find(|e| e.path == path)
}
