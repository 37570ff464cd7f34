use crate::table::Cell;

pub fn clean_email(cell: &Cell) -> Cell {
    match cell.to_text() {
        Some(text) => Cell::Text(normalize_email(&text)),
        None => Cell::Missing,
    }
}

pub fn normalize_email(value: &str) -> String {
    value.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::{clean_email, normalize_email};
    use crate::table::Cell;

    #[test]
    fn normalize_email_trims_and_lowercases() {
        assert_eq!(normalize_email("  John@Example.COM "), "john@example.com");
    }

    #[test]
    fn clean_email_keeps_missing() {
        assert_eq!(clean_email(&Cell::Missing), Cell::Missing);
    }

    #[test]
    fn clean_email_does_not_validate() {
        assert_eq!(clean_email(&Cell::text(" Not An Email ")), Cell::text("not an email"));
        assert_eq!(clean_email(&Cell::text("   ")), Cell::text(""));
    }
}
