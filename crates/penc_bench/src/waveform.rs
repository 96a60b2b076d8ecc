//! Waveform recording for bench runs.
//!
//! The [`WaveformRecorder`] trait abstracts waveform output. [`VcdRecorder`]
//! implements the IEEE 1364 Value Change Dump (VCD) format, producing text
//! files that can be viewed in GTKWave, Surfer, or other waveform viewers.

use std::io::Write;

use penc_common::LogicWord;

use crate::error::BenchError;

/// Trait for recording bench waveforms.
pub trait WaveformRecorder {
    /// Registers a signal for recording.
    fn register_signal(&mut self, name: &str, width: u32) -> Result<(), BenchError>;

    /// Opens a new scope (hierarchy level) in the waveform.
    fn begin_scope(&mut self, name: &str) -> Result<(), BenchError>;

    /// Closes the current scope.
    fn end_scope(&mut self) -> Result<(), BenchError>;

    /// Records a value change at the given time (in femtoseconds).
    fn record_change(&mut self, time_fs: u64, name: &str, value: &LogicWord)
        -> Result<(), BenchError>;

    /// Finalizes the waveform output (flush, write trailer, etc.).
    fn finalize(&mut self) -> Result<(), BenchError>;
}

/// VCD (Value Change Dump) format recorder following IEEE 1364.
///
/// Signal identifiers use printable ASCII characters starting from `!` (0x21).
pub struct VcdRecorder<W: Write> {
    writer: W,
    signals: Vec<(String, String, u32)>, // (name, id_code, width)
    header_written: bool,
    current_time: Option<u64>,
    dumpvars_open: bool,
}

impl<W: Write> VcdRecorder<W> {
    /// Creates a new VCD recorder writing to the given output.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            signals: Vec::new(),
            header_written: false,
            current_time: None,
            dumpvars_open: false,
        }
    }

    /// Consumes the recorder and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn ensure_header(&mut self) -> Result<(), BenchError> {
        if self.header_written {
            return Ok(());
        }
        writeln!(self.writer, "$version")?;
        writeln!(self.writer, "  penc bench")?;
        writeln!(self.writer, "$end")?;
        writeln!(self.writer, "$timescale")?;
        writeln!(self.writer, "  1fs")?;
        writeln!(self.writer, "$end")?;
        self.header_written = true;
        Ok(())
    }

    /// Generates a VCD identifier code from a sequential index.
    ///
    /// Multi-character codes are generated for indices >= 94.
    fn make_id_code(index: usize) -> String {
        let mut result = String::new();
        let mut idx = index;
        loop {
            result.push((b'!' + (idx % 94) as u8) as char);
            idx /= 94;
            if idx == 0 {
                break;
            }
            idx -= 1;
        }
        result
    }

    /// Closes the initial `$dumpvars` block if it is still open.
    fn close_dumpvars(&mut self) -> Result<(), BenchError> {
        if self.dumpvars_open {
            writeln!(self.writer, "$end")?;
            self.dumpvars_open = false;
        }
        Ok(())
    }

    /// Formats a word as a VCD value: scalar for 1 bit, `b...` otherwise.
    fn format_value(value: &LogicWord) -> String {
        if value.width() == 1 {
            value.get(0).to_char().to_string()
        } else {
            format!("b{value}")
        }
    }
}

impl<W: Write> WaveformRecorder for VcdRecorder<W> {
    fn register_signal(&mut self, name: &str, width: u32) -> Result<(), BenchError> {
        let id_code = Self::make_id_code(self.signals.len());
        writeln!(self.writer, "$var wire {width} {id_code} {name} $end")?;
        self.signals.push((name.to_string(), id_code, width));
        Ok(())
    }

    fn begin_scope(&mut self, name: &str) -> Result<(), BenchError> {
        self.ensure_header()?;
        writeln!(self.writer, "$scope module {} $end", scope_identifier(name))?;
        Ok(())
    }

    fn end_scope(&mut self) -> Result<(), BenchError> {
        writeln!(self.writer, "$upscope $end")?;
        Ok(())
    }

    fn record_change(
        &mut self,
        time_fs: u64,
        name: &str,
        value: &LogicWord,
    ) -> Result<(), BenchError> {
        self.ensure_header()?;

        // Values at the first timestamp form the `$dumpvars` block.
        match self.current_time {
            Some(t) if t == time_fs => {}
            Some(_) => {
                self.close_dumpvars()?;
                writeln!(self.writer, "#{time_fs}")?;
            }
            None => {
                writeln!(self.writer, "$enddefinitions $end")?;
                writeln!(self.writer, "#{time_fs}")?;
                writeln!(self.writer, "$dumpvars")?;
                self.dumpvars_open = true;
            }
        }
        self.current_time = Some(time_fs);

        let (_, id_code, width) = self
            .signals
            .iter()
            .find(|(n, _, _)| n == name)
            .ok_or_else(|| BenchError::UnregisteredSignal(name.to_string()))?;

        let val_str = Self::format_value(value);
        if *width == 1 {
            writeln!(self.writer, "{val_str}{id_code}")?;
        } else {
            writeln!(self.writer, "{val_str} {id_code}")?;
        }
        Ok(())
    }

    fn finalize(&mut self) -> Result<(), BenchError> {
        if self.current_time.is_none() {
            self.ensure_header()?;
            writeln!(self.writer, "$enddefinitions $end")?;
        }
        self.close_dumpvars()?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Makes `name` usable as a VCD scope identifier: whitespace becomes `_`.
fn scope_identifier(name: &str) -> String {
    let id: String = name
        .chars()
        .map(|c| if c.is_whitespace() || c.is_control() { '_' } else { c })
        .collect();
    if id.is_empty() {
        "_".to_string()
    } else {
        id
    }
}
