use serde::Serialize;
use std::fmt;

/// The normalized output columns, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalField {
    FullName,
    PhoneNumber,
    Email,
}

impl CanonicalField {
    /// Output order, which is also the alias matching priority.
    pub const ALL: [CanonicalField; 3] = [
        CanonicalField::FullName,
        CanonicalField::PhoneNumber,
        CanonicalField::Email,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CanonicalField::FullName => "full_name",
            CanonicalField::PhoneNumber => "phone_number",
            CanonicalField::Email => "email",
        }
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
