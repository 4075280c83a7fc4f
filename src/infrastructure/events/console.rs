//! Console Reporter
//!
//! Styled, human-readable lines: results on stdout, warnings and errors on stderr.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{Level, Reporter};
use crate::ui::format_line;

pub struct ConsoleReporter {
    color: bool,
    unicode: bool,
    verbose: bool,
    out: Mutex<Box<dyn Write + Send>>,
    err: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleReporter {
    pub fn new(color: bool, unicode: bool, verbose: bool) -> Self {
        Self::with_writers(color, unicode, verbose, io::stdout(), io::stderr())
    }

    pub fn with_writers<O, E>(color: bool, unicode: bool, verbose: bool, out: O, err: E) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            color,
            unicode,
            verbose,
            out: Mutex::new(Box::new(out)),
            err: Mutex::new(Box::new(err)),
        }
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, level: Level, message: &str) {
        if level == Level::Detail && !self.verbose {
            return;
        }

        let line = format_line(level, message, self.color, self.unicode);
        let target = match level {
            Level::Warning | Level::Error => &self.err,
            _ => &self.out,
        };
        if let Ok(mut writer) = target.lock() {
            if level == Level::Heading {
                let _ = writeln!(writer);
            }
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}
