use std::io::Write;

use crate::{config::HeaderConfig, error::Result, types::XyPoint};

const NOTICE: &str =
    "// Notice: This file is auto-generated. Any changes will be over-written on re-generation";

/// Writes sequenced frames as a C header of `xyPoint_t` arrays.
///
/// Each frame becomes `frame<i>` with its size in `SIZE_FRAME_<i>`; empty
/// frames are declared as null pointers. `frames` and `frameSizes` tables
/// index all frames.
#[derive(Debug, Clone)]
pub struct HeaderWriter {
    pub guard: String,
    /// Entries per line, for point arrays and frame tables alike
    pub points_per_line: usize,
}

impl Default for HeaderWriter {
    fn default() -> Self {
        Self::from(&HeaderConfig::default())
    }
}

impl From<&HeaderConfig> for HeaderWriter {
    fn from(config: &HeaderConfig) -> Self {
        Self {
            guard: config.guard.clone(),
            points_per_line: config.points_per_line,
        }
    }
}

impl HeaderWriter {
    pub fn write<W: Write>(&self, writer: &mut W, frames: &[Vec<XyPoint>]) -> Result<()> {
        let per_line = self.points_per_line.max(1);

        write!(writer, "#ifndef {0}\n#define {0}\n{NOTICE}\n\n", self.guard)?;

        for (i, points) in frames.iter().enumerate() {
            if points.is_empty() {
                write!(writer, "#define SIZE_FRAME_{i} 0\nxyPoint_t* const frame{i} = NULL;\n\n")?;
                continue;
            }

            write!(
                writer,
                "#define SIZE_FRAME_{i} {}\nxyPoint_t frame{i}[SIZE_FRAME_{i}] = \n{{",
                points.len()
            )?;
            for line in points.chunks(per_line) {
                write!(writer, "\n    ")?;
                for p in line {
                    write!(writer, "{{{:>3}, {:>3}}}, ", p.x, p.y)?;
                }
            }
            write!(writer, "\n}};\n\n")?;
        }

        let names: Vec<String> = (0..frames.len()).map(|i| format!("frame{i}")).collect();
        let sizes: Vec<String> = (0..frames.len()).map(|i| format!("SIZE_FRAME_{i}")).collect();

        write!(writer, "#define FRAME_COUNT {}\nxyPoint_t* frames[FRAME_COUNT] = \n{{", frames.len())?;
        self.write_table(writer, &names)?;
        write!(writer, "uint16_t frameSizes[FRAME_COUNT] = \n{{")?;
        self.write_table(writer, &sizes)?;

        writeln!(writer, "#endif // {}", self.guard)?;
        Ok(())
    }

    fn write_table<W: Write>(&self, writer: &mut W, entries: &[String]) -> Result<()> {
        let per_line = self.points_per_line.max(1);
        let last = entries.len().saturating_sub(1);

        for (i, entry) in entries.iter().enumerate() {
            if i % per_line == 0 {
                write!(writer, "\n    ")?;
            }
            write!(writer, "{entry}")?;
            if i != last {
                write!(writer, ", ")?;
            }
        }
        write!(writer, "\n}};\n\n")?;
        Ok(())
    }
}
