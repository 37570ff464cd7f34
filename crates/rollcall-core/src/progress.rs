use std::fmt;
use std::path::PathBuf;

/// Observable milestones of one load-clean-write run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    Reading { path: PathBuf },
    TryingEncoding { encoding: &'static str },
    EncodingFailed { encoding: &'static str, reason: String },
    EncodingChosen { encoding: &'static str, delimiter: char },
    ReadingSheet { sheet: String },
    Cleaning,
    Saving { path: PathBuf },
    Done,
}

impl fmt::Display for ProgressEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressEvent::Reading { path } => write!(f, "Reading file: {}", path.display()),
            ProgressEvent::TryingEncoding { encoding } => {
                write!(f, "Attempting to read CSV with encoding: {encoding}")
            }
            ProgressEvent::EncodingFailed { encoding, reason } => {
                write!(f, "Failed with encoding {encoding}: {reason}")
            }
            ProgressEvent::EncodingChosen {
                encoding,
                delimiter,
            } => write!(
                f,
                "Successfully read CSV with encoding: {encoding} (delimiter {delimiter:?})"
            ),
            ProgressEvent::ReadingSheet { sheet } => write!(f, "Reading worksheet: {sheet}"),
            ProgressEvent::Cleaning => f.write_str("Cleaning data..."),
            ProgressEvent::Saving { path } => {
                write!(f, "Saving cleaned data to: {}", path.display())
            }
            ProgressEvent::Done => f.write_str("Done!"),
        }
    }
}

pub trait Progress {
    fn report(&mut self, event: ProgressEvent);
}

/// Drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Progress for Silent {
    fn report(&mut self, _event: ProgressEvent) {}
}

impl Progress for Vec<ProgressEvent> {
    fn report(&mut self, event: ProgressEvent) {
        self.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::{Progress, ProgressEvent};

    #[test]
    fn events_render_as_console_lines() {
        let chosen = ProgressEvent::EncodingChosen {
            encoding: "utf-8",
            delimiter: ';',
        };
        assert_eq!(
            chosen.to_string(),
            "Successfully read CSV with encoding: utf-8 (delimiter ';')"
        );
        assert_eq!(ProgressEvent::Done.to_string(), "Done!");
    }

    #[test]
    fn vec_collects_events() {
        let mut events = Vec::new();
        events.report(ProgressEvent::Cleaning);
        events.report(ProgressEvent::Done);
        assert_eq!(events, vec![ProgressEvent::Cleaning, ProgressEvent::Done]);
    }
}
