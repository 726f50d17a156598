use std::io::Write;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::error::Result;

/// Wall-clock time spent in one named phase; repeated phases accumulate.
#[derive(Debug, Serialize)]
struct Phase {
    name: &'static str,
    calls: usize,
    #[serde(serialize_with = "as_millis")]
    elapsed: Duration,
}

fn as_millis<S: serde::Serializer>(d: &Duration, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64() * 1000.0)
}

/// Phase timings written by `--cpuprofile`.
#[derive(Debug, Default, Serialize)]
pub struct Profile {
    phases: Vec<Phase>,
    files: usize,
    lines: usize,
}

impl Profile {
    pub fn time<T>(&mut self, name: &'static str, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = f();
        let elapsed = start.elapsed();
        match self.phases.iter_mut().find(|p| p.name == name) {
            Some(phase) => {
                phase.calls += 1;
                phase.elapsed += elapsed;
            }
            None => self.phases.push(Phase {
                name,
                calls: 1,
                elapsed,
            }),
        }
        out
    }

    pub fn record_counts(&mut self, files: usize, lines: usize) {
        self.files = files;
        self.lines = lines;
    }

    pub fn write_to(&self, mut out: impl Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut out, self)?;
        writeln!(out)?;
        Ok(())
    }
}
