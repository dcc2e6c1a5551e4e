//! Append-only run log, mirrored to the console.
//!
//! Every line is timestamped `[YYYY-MM-DD HH:MM:SS]`, printed to stdout, and
//! appended to the log file. The file is opened once per run in append mode
//! so successive runs accumulate in the same log.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use chrono::Local;

use mirrorcheck_core::LogSink;

pub struct RunLog {
    file: File,
}

impl RunLog {
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file })
    }
}

impl LogSink for RunLog {
    fn append(&mut self, line: &str) {
        let entry = format!("{} {line}", Local::now().format("[%Y-%m-%d %H:%M:%S]"));
        println!("{entry}");
        if let Err(err) = writeln!(self.file, "{entry}") {
            eprintln!("warning: could not write log file: {err}");
        }
    }
}
