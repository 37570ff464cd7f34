use crate::domain::CanonicalField;
use crate::error::CoreError;

pub const NAME_ALIASES: &[&str] = &[
    "name",
    "full name",
    "full_name",
    "first name",
    "student name",
    "customer name",
];

pub const PHONE_ALIASES: &[&str] = &[
    "phone",
    "phone number",
    "phone_number",
    "mobile",
    "contact",
    "contact number",
    "cell",
];

pub const EMAIL_ALIASES: &[&str] = &["email", "email address", "email_address", "e-mail", "mail"];

/// Header spellings recognized for each canonical field, already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasSets {
    name: Vec<String>,
    phone: Vec<String>,
    email: Vec<String>,
}

impl Default for AliasSets {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AliasSets {
    pub fn builtin() -> Self {
        Self {
            name: to_owned(NAME_ALIASES),
            phone: to_owned(PHONE_ALIASES),
            email: to_owned(EMAIL_ALIASES),
        }
    }

    pub fn aliases(&self, field: CanonicalField) -> &[String] {
        match field {
            CanonicalField::FullName => &self.name,
            CanonicalField::PhoneNumber => &self.phone,
            CanonicalField::Email => &self.email,
        }
    }

    /// `normalized` must already have gone through [`normalize_header`].
    pub fn contains(&self, field: CanonicalField, normalized: &str) -> bool {
        self.aliases(field).iter().any(|alias| alias == normalized)
    }

    pub fn extend<I, S>(&mut self, field: CanonicalField, aliases: I) -> Result<(), CoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = Vec::new();
        for raw in aliases {
            let alias = normalize_header(raw.as_ref());
            if alias.is_empty() {
                return Err(CoreError::InvalidAlias);
            }
            added.push(alias);
        }

        let target = match field {
            CanonicalField::FullName => &mut self.name,
            CanonicalField::PhoneNumber => &mut self.phone,
            CanonicalField::Email => &mut self.email,
        };
        for alias in added {
            if !target.contains(&alias) {
                target.push(alias);
            }
        }
        Ok(())
    }
}

pub fn normalize_header(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn to_owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::{normalize_header, AliasSets};
    use crate::domain::CanonicalField;
    use crate::error::CoreError;

    #[test]
    fn normalize_header_trims_and_lowercases() {
        assert_eq!(normalize_header("  Phone Number "), "phone number");
    }

    #[test]
    fn builtin_sets_cover_common_headers() {
        let aliases = AliasSets::builtin();
        assert!(aliases.contains(CanonicalField::FullName, "student name"));
        assert!(aliases.contains(CanonicalField::PhoneNumber, "mobile"));
        assert!(aliases.contains(CanonicalField::Email, "e-mail"));
        assert!(!aliases.contains(CanonicalField::Email, "phone"));
    }

    #[test]
    fn extend_normalizes_and_dedupes() {
        let mut aliases = AliasSets {
            name: Vec::new(),
            phone: Vec::new(),
            email: Vec::new(),
        };
        aliases
            .extend(CanonicalField::PhoneNumber, [" WhatsApp ", "whatsapp"])
            .unwrap();
        assert_eq!(aliases.aliases(CanonicalField::PhoneNumber), ["whatsapp"]);
    }

    #[test]
    fn extend_rejects_blank_aliases() {
        let mut aliases = AliasSets::builtin();
        let err = aliases.extend(CanonicalField::Email, ["  "]).unwrap_err();
        assert_eq!(err, CoreError::InvalidAlias);
        assert_eq!(aliases, AliasSets::builtin());
    }
}
