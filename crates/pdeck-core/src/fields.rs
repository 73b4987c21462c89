//! Field addressing for the profile record.
//!
//! Every editable field of a [`Profile`] has a [`FieldPath`]: either one of
//! the basic identity fields or a `group.index.field` triple into a
//! repeatable group. Paths are how the form layer binds controls, commits
//! values, and keys validation errors.

use crate::codes::{CodeSet, ADDRESS_KIND, CONTACT_KIND, ID_KIND, OCCUPATION_KIND, PREFERRED};
use crate::profile::Profile;

/// One of the five repeatable groups of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    Contacts,
    Emails,
    Phones,
    Identifications,
    Occupations,
}

impl GroupKind {
    /// All groups in display order.
    pub const ALL: [GroupKind; 5] = [
        GroupKind::Contacts,
        GroupKind::Emails,
        GroupKind::Phones,
        GroupKind::Identifications,
        GroupKind::Occupations,
    ];

    /// Section card title.
    pub fn title(&self) -> &'static str {
        match self {
            GroupKind::Contacts => "Address",
            GroupKind::Emails => "Emails",
            GroupKind::Phones => "Phones",
            GroupKind::Identifications => "Identification Documents",
            GroupKind::Occupations => "Occupation",
        }
    }

    /// Label of the add-row action.
    pub fn add_label(&self) -> &'static str {
        match self {
            GroupKind::Contacts => "Add Address",
            GroupKind::Emails => "Add Email",
            GroupKind::Phones => "Add Phone",
            GroupKind::Identifications => "Add Identification",
            GroupKind::Occupations => "Add Occupation",
        }
    }

    /// Wire name of the group's array, used for path keys.
    pub fn key(&self) -> &'static str {
        match self {
            GroupKind::Contacts => "contacts",
            GroupKind::Emails => "emails",
            GroupKind::Phones => "phones",
            GroupKind::Identifications => "identifications",
            GroupKind::Occupations => "occupations",
        }
    }

    /// The row fields of this group, in display order.
    pub fn row_fields(&self) -> &'static [RowField] {
        match self {
            GroupKind::Contacts => &[
                RowField::Country,
                RowField::City,
                RowField::Street,
                RowField::Postalcode,
                RowField::AddressType,
            ],
            GroupKind::Emails => &[
                RowField::EmailAddress,
                RowField::EmailType,
                RowField::EmailPreferred,
            ],
            GroupKind::Phones => &[
                RowField::PhoneNumber,
                RowField::PhoneType,
                RowField::PhonePreferred,
            ],
            GroupKind::Identifications => {
                &[RowField::IdType, RowField::IdExpiry, RowField::IdFile]
            }
            GroupKind::Occupations => &[
                RowField::Occupation,
                RowField::OccupationFrom,
                RowField::OccupationTo,
            ],
        }
    }
}

/// Basic identity fields of the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasicField {
    Email,
    Firstname,
    Middlename,
    Lastname,
    Dateofbirth,
    Age,
}

impl BasicField {
    /// All basic fields in display order.
    pub const ALL: [BasicField; 6] = [
        BasicField::Email,
        BasicField::Firstname,
        BasicField::Middlename,
        BasicField::Lastname,
        BasicField::Dateofbirth,
        BasicField::Age,
    ];

    /// Wire name, used for path keys.
    pub fn key(&self) -> &'static str {
        match self {
            BasicField::Email => "email",
            BasicField::Firstname => "firstname",
            BasicField::Middlename => "middlename",
            BasicField::Lastname => "lastname",
            BasicField::Dateofbirth => "dateofbirth",
            BasicField::Age => "age",
        }
    }
}

/// A field within a repeatable group row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowField {
    // Address
    Country,
    City,
    Street,
    Postalcode,
    AddressType,
    // Email
    EmailAddress,
    EmailType,
    EmailPreferred,
    // Phone
    PhoneNumber,
    PhoneType,
    PhonePreferred,
    // Identification
    IdType,
    IdExpiry,
    IdFile,
    // Occupation
    Occupation,
    OccupationFrom,
    OccupationTo,
}

impl RowField {
    /// Wire name, used for path keys.
    pub fn key(&self) -> &'static str {
        match self {
            RowField::Country => "country",
            RowField::City => "city",
            RowField::Street => "street",
            RowField::Postalcode => "postalcode",
            RowField::AddressType | RowField::EmailType | RowField::PhoneType => "type",
            RowField::EmailAddress => "emailaddress",
            RowField::EmailPreferred | RowField::PhonePreferred => "preferred",
            RowField::PhoneNumber => "phonenumber",
            RowField::IdType => "idtype",
            RowField::IdExpiry => "idexpiry",
            RowField::IdFile => "idfile",
            RowField::Occupation => "occupation",
            RowField::OccupationFrom => "occupationFrom",
            RowField::OccupationTo => "occupationTo",
        }
    }

    /// The codec for an enumerated field, `None` for free-text fields.
    pub fn code_set(&self) -> Option<&'static CodeSet> {
        match self {
            RowField::AddressType => Some(&ADDRESS_KIND),
            RowField::EmailType | RowField::PhoneType => Some(&CONTACT_KIND),
            RowField::EmailPreferred | RowField::PhonePreferred => Some(&PREFERRED),
            RowField::IdType => Some(&ID_KIND),
            RowField::Occupation => Some(&OCCUPATION_KIND),
            _ => None,
        }
    }
}

/// Addresses one field of a [`Profile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldPath {
    Basic(BasicField),
    Row {
        group: GroupKind,
        index: usize,
        field: RowField,
    },
}

impl FieldPath {
    /// Dotted path key in the form layer's `group.index.field` notation,
    /// used to key validation errors and logs.
    pub fn key(&self) -> String {
        match self {
            FieldPath::Basic(field) => field.key().to_string(),
            FieldPath::Row {
                group,
                index,
                field,
            } => format!("{}.{}.{}", group.key(), index, field.key()),
        }
    }
}

impl Profile {
    /// Read the stored value at `path`. `None` when the path does not
    /// resolve (row out of range, field not part of the group).
    pub fn field(&self, path: FieldPath) -> Option<String> {
        match path {
            FieldPath::Basic(field) => Some(match field {
                BasicField::Email => self.email.clone(),
                BasicField::Firstname => self.firstname.clone(),
                BasicField::Middlename => self.middlename.clone(),
                BasicField::Lastname => self.lastname.clone(),
                BasicField::Dateofbirth => self.dateofbirth.clone(),
                BasicField::Age => self.age.map(|a| a.to_string()).unwrap_or_default(),
            }),
            FieldPath::Row {
                group,
                index,
                field,
            } => match group {
                GroupKind::Contacts => {
                    let row = self.contacts.get(index)?;
                    match field {
                        RowField::Country => Some(row.country.clone()),
                        RowField::City => Some(row.city.clone()),
                        RowField::Street => Some(row.street.clone()),
                        RowField::Postalcode => Some(row.postalcode.clone()),
                        RowField::AddressType => Some(row.kind.clone()),
                        _ => None,
                    }
                }
                GroupKind::Emails => {
                    let row = self.emails.get(index)?;
                    match field {
                        RowField::EmailAddress => Some(row.emailaddress.clone()),
                        RowField::EmailType => Some(row.kind.clone()),
                        RowField::EmailPreferred => Some(row.preferred.clone()),
                        _ => None,
                    }
                }
                GroupKind::Phones => {
                    let row = self.phones.get(index)?;
                    match field {
                        RowField::PhoneNumber => Some(row.phonenumber.clone()),
                        RowField::PhoneType => Some(row.kind.clone()),
                        RowField::PhonePreferred => Some(row.preferred.clone()),
                        _ => None,
                    }
                }
                GroupKind::Identifications => {
                    let row = self.identifications.get(index)?;
                    match field {
                        RowField::IdType => Some(row.idtype.clone()),
                        RowField::IdExpiry => Some(row.idexpiry.clone()),
                        RowField::IdFile => Some(row.idfile.clone()),
                        _ => None,
                    }
                }
                GroupKind::Occupations => {
                    let row = self.occupations.get(index)?;
                    match field {
                        RowField::Occupation => Some(row.occupation.clone()),
                        RowField::OccupationFrom => Some(row.occupation_from.clone()),
                        RowField::OccupationTo => Some(row.occupation_to.clone()),
                        _ => None,
                    }
                }
            },
        }
    }

    /// Write `value` at `path`, touching only that field of that row.
    ///
    /// Returns whether the write landed. Out-of-range rows, fields foreign
    /// to the group, and non-numeric ages are refused without side effects.
    pub fn set_field(&mut self, path: FieldPath, value: &str) -> bool {
        match path {
            FieldPath::Basic(field) => {
                match field {
                    BasicField::Email => self.email = value.to_string(),
                    BasicField::Firstname => self.firstname = value.to_string(),
                    BasicField::Middlename => self.middlename = value.to_string(),
                    BasicField::Lastname => self.lastname = value.to_string(),
                    BasicField::Dateofbirth => self.dateofbirth = value.to_string(),
                    BasicField::Age => {
                        if value.is_empty() {
                            self.age = None;
                        } else {
                            match value.parse::<u32>() {
                                Ok(age) => self.age = Some(age),
                                Err(_) => return false,
                            }
                        }
                    }
                }
                true
            }
            FieldPath::Row {
                group,
                index,
                field,
            } => match group {
                GroupKind::Contacts => self.contacts.edit_row(index, |row| match field {
                    RowField::Country => row.country = value.to_string(),
                    RowField::City => row.city = value.to_string(),
                    RowField::Street => row.street = value.to_string(),
                    RowField::Postalcode => row.postalcode = value.to_string(),
                    RowField::AddressType => row.kind = value.to_string(),
                    _ => {}
                }),
                GroupKind::Emails => self.emails.edit_row(index, |row| match field {
                    RowField::EmailAddress => row.emailaddress = value.to_string(),
                    RowField::EmailType => row.kind = value.to_string(),
                    RowField::EmailPreferred => row.preferred = value.to_string(),
                    _ => {}
                }),
                GroupKind::Phones => self.phones.edit_row(index, |row| match field {
                    RowField::PhoneNumber => row.phonenumber = value.to_string(),
                    RowField::PhoneType => row.kind = value.to_string(),
                    RowField::PhonePreferred => row.preferred = value.to_string(),
                    _ => {}
                }),
                GroupKind::Identifications => {
                    self.identifications.edit_row(index, |row| match field {
                        RowField::IdType => row.idtype = value.to_string(),
                        RowField::IdExpiry => row.idexpiry = value.to_string(),
                        RowField::IdFile => row.idfile = value.to_string(),
                        _ => {}
                    })
                }
                GroupKind::Occupations => self.occupations.edit_row(index, |row| match field {
                    RowField::Occupation => row.occupation = value.to_string(),
                    RowField::OccupationFrom => row.occupation_from = value.to_string(),
                    RowField::OccupationTo => row.occupation_to = value.to_string(),
                    _ => {}
                }),
            },
        }
    }

    /// Row count of a group.
    pub fn group_len(&self, group: GroupKind) -> usize {
        match group {
            GroupKind::Contacts => self.contacts.len(),
            GroupKind::Emails => self.emails.len(),
            GroupKind::Phones => self.phones.len(),
            GroupKind::Identifications => self.identifications.len(),
            GroupKind::Occupations => self.occupations.len(),
        }
    }

    /// Whether a group can take another row.
    pub fn can_add_row(&self, group: GroupKind) -> bool {
        match group {
            GroupKind::Contacts => self.contacts.can_add(),
            GroupKind::Emails => self.emails.can_add(),
            GroupKind::Phones => self.phones.can_add(),
            GroupKind::Identifications => self.identifications.can_add(),
            GroupKind::Occupations => self.occupations.can_add(),
        }
    }

    /// Append a blank row to a group. No-op at the cap.
    pub fn add_row(&mut self, group: GroupKind) -> bool {
        match group {
            GroupKind::Contacts => self.contacts.add_row(),
            GroupKind::Emails => self.emails.add_row(),
            GroupKind::Phones => self.phones.add_row(),
            GroupKind::Identifications => self.identifications.add_row(),
            GroupKind::Occupations => self.occupations.add_row(),
        }
    }

    /// Remove one row from a group, shifting subsequent rows down.
    pub fn remove_row(&mut self, group: GroupKind, index: usize) -> bool {
        match group {
            GroupKind::Contacts => self.contacts.remove_row(index),
            GroupKind::Emails => self.emails.remove_row(index),
            GroupKind::Phones => self.phones.remove_row(index),
            GroupKind::Identifications => self.identifications.remove_row(index),
            GroupKind::Occupations => self.occupations.remove_row(index),
        }
    }
}
