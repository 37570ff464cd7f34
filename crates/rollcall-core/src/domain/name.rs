use crate::table::Cell;

pub fn clean_name(cell: &Cell) -> Cell {
    match cell.to_text() {
        Some(text) => Cell::Text(normalize_name(&text)),
        None => Cell::Missing,
    }
}

/// Trims and title-cases plain ASCII names. Anything with a character outside
/// printable ASCII is only trimmed.
pub fn normalize_name(value: &str) -> String {
    let trimmed = value.trim();
    if !trimmed.chars().all(is_printable_ascii) {
        return trimmed.to_string();
    }
    title_case(trimmed)
}

fn is_printable_ascii(ch: char) -> bool {
    matches!(ch, ' '..='~')
}

fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut word_start = true;
    for ch in value.chars() {
        if ch.is_whitespace() {
            word_start = true;
            out.push(ch);
            continue;
        }
        if word_start {
            out.push(ch.to_ascii_uppercase());
        } else {
            out.push(ch.to_ascii_lowercase());
        }
        word_start = false;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{clean_name, normalize_name};
    use crate::table::Cell;

    #[test]
    fn normalize_name_trims_and_title_cases() {
        assert_eq!(normalize_name("  raj kumar  "), "Raj Kumar");
        assert_eq!(normalize_name("MARY  o'neil"), "Mary  O'neil");
    }

    #[test]
    fn normalize_name_leaves_non_ascii_untouched() {
        assert_eq!(normalize_name("अनु"), "अनु");
        assert_eq!(normalize_name("  josé garcía "), "josé garcía");
    }

    #[test]
    fn normalize_name_leaves_control_characters_untouched() {
        assert_eq!(normalize_name("raj\tkumar"), "raj\tkumar");
    }

    #[test]
    fn clean_name_keeps_missing() {
        assert_eq!(clean_name(&Cell::Missing), Cell::Missing);
    }

    #[test]
    fn clean_name_renders_numbers() {
        assert_eq!(clean_name(&Cell::Number(42.0)), Cell::text("42"));
    }
}
