const CANDIDATE_COUNT: usize = 5;

pub const CANDIDATE_DELIMITERS: [u8; CANDIDATE_COUNT] = [b',', b';', b'\t', b'|', b':'];
pub const DEFAULT_DELIMITER: u8 = b',';

const SAMPLE_LINES: usize = 20;

/// Guesses the field delimiter from the first non-blank lines.
///
/// A candidate that occurs the same number of times on every sampled line wins,
/// highest count first. Failing that, the candidate seen most on the header
/// line is used, and a text with no candidate at all is treated as a single
/// comma-separated column.
pub fn sniff_delimiter(text: &str) -> u8 {
    let counts: Vec<[usize; CANDIDATE_COUNT]> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .take(SAMPLE_LINES)
        .map(count_outside_quotes)
        .collect();
    let Some(header) = counts.first() else {
        return DEFAULT_DELIMITER;
    };

    let mut consistent: Option<(u8, usize)> = None;
    for (slot, &delimiter) in CANDIDATE_DELIMITERS.iter().enumerate() {
        let expected = header[slot];
        if expected == 0 || counts.iter().any(|line| line[slot] != expected) {
            continue;
        }
        if consistent.map_or(true, |(_, best)| expected > best) {
            consistent = Some((delimiter, expected));
        }
    }
    if let Some((delimiter, _)) = consistent {
        return delimiter;
    }

    let mut fallback: Option<(u8, usize)> = None;
    for (slot, &delimiter) in CANDIDATE_DELIMITERS.iter().enumerate() {
        let seen = header[slot];
        if seen > 0 && fallback.map_or(true, |(_, best)| seen > best) {
            fallback = Some((delimiter, seen));
        }
    }
    fallback.map_or(DEFAULT_DELIMITER, |(delimiter, _)| delimiter)
}

fn count_outside_quotes(line: &str) -> [usize; CANDIDATE_COUNT] {
    let mut counts = [0; CANDIDATE_COUNT];
    let mut quoted = false;
    for byte in line.bytes() {
        if byte == b'"' {
            quoted = !quoted;
            continue;
        }
        if quoted {
            continue;
        }
        if let Some(slot) = CANDIDATE_DELIMITERS.iter().position(|&d| d == byte) {
            counts[slot] += 1;
        }
    }
    counts
}
