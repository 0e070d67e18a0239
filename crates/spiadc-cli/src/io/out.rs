// crates/spiadc-cli/src/io/out.rs

use std::io::Write;

use clap::ValueEnum;
use spiadc_core::signal::sample::to_volts;
use spiadc_core::Reading;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Mapped samples as `[a b c ...]`, one frame per line
    Text,
    /// Mapped samples as `{"i":N,"ch":[...]}`, one frame per line
    Jsonl,
    /// Raw samples converted to volts, `[v0 v1 ...]`
    Volts,
}

/// Renders readings to a writer (stdout in the CLI).
pub struct Printer<W: Write> {
    out: W,
    format: Format,
    vref: f64,
    raw: bool,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, format: Format, vref: f64, raw: bool) -> Self {
        Self {
            out,
            format,
            vref,
            raw,
        }
    }

    pub fn print(&mut self, r: &Reading<'_>) -> std::io::Result<()> {
        if self.raw {
            writeln!(self.out, "raw {}: {}", r.index, hex(r.frame))?;
            writeln!(self.out, "i24 {}: {}", r.index, list(r.samples))?;
        }
        match self.format {
            Format::Text => writeln!(self.out, "{}", list(r.mapped)),
            Format::Jsonl => writeln!(
                self.out,
                "{{\"i\":{},\"ch\":[{}]}}",
                r.index,
                join(r.mapped, ",")
            ),
            Format::Volts => {
                let volts: Vec<String> = r
                    .samples
                    .iter()
                    .map(|&s| format!("{:.6}", to_volts(s, self.vref)))
                    .collect();
                writeln!(self.out, "[{}]", volts.join(" "))
            }
        }
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.out.flush()
    }
}

fn list(xs: &[i32]) -> String {
    format!("[{}]", join(xs, " "))
}

fn join(xs: &[i32], sep: &str) -> String {
    xs.iter()
        .map(|x| x.to_string())
        .collect::<Vec<_>>()
        .join(sep)
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}
