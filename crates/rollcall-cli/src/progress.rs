use rollcall_core::{Progress, ProgressEvent};

/// Prints each progress event as one line on stdout.
#[derive(Debug, Default)]
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn report(&mut self, event: ProgressEvent) {
        println!("{event}");
    }
}
