pub mod email;
pub mod field;
pub mod name;
pub mod phone;

pub use email::{clean_email, normalize_email};
pub use field::CanonicalField;
pub use name::{clean_name, normalize_name};
pub use phone::{clean_phone, clean_phone_with, normalize_phone, PhoneRules, PhoneShape};

use crate::table::Cell;

pub fn clean_cell(field: CanonicalField, cell: &Cell, rules: &PhoneRules) -> Cell {
    match field {
        CanonicalField::FullName => clean_name(cell),
        CanonicalField::PhoneNumber => clean_phone_with(cell, rules),
        CanonicalField::Email => clean_email(cell),
    }
}

/// Cleans every cell of a column in place and returns how many values changed.
pub fn clean_column(field: CanonicalField, cells: &mut [Cell], rules: &PhoneRules) -> usize {
    let mut changed = 0;
    for cell in cells.iter_mut() {
        let cleaned = clean_cell(field, cell, rules);
        if cleaned != *cell {
            *cell = cleaned;
            changed += 1;
        }
    }
    changed
}
