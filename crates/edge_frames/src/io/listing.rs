//! Text listing exchanged between the extract and header stages.
//!
//! ```text
//! <frame count>
//! <point count of frame 0>
//! [(x, y), (x, y), ...]
//! <point count of frame 1>
//! []
//! ```

use std::io::Write;

use crate::{
    error::{EdgeFramesError, Result},
    traits::FrameSink,
    types::{FrameCoordinates, XyPoint},
};

/// Frame sink writing the text listing
#[derive(Debug)]
pub struct ListingWriter<W: Write> {
    writer: W,
}

impl<W: Write> ListingWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> FrameSink for ListingWriter<W> {
    fn begin(&mut self, total_frames: usize) -> Result<()> {
        writeln!(self.writer, "{total_frames}")?;
        Ok(())
    }

    fn write_frame(&mut self, frame: &FrameCoordinates) -> Result<()> {
        writeln!(self.writer, "{}", frame.len())?;
        writeln!(self.writer, "{}", frame.point_list())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

fn listing_error(msg: impl Into<String>) -> EdgeFramesError {
    EdgeFramesError::Listing(msg.into())
}

fn parse_int<T: std::str::FromStr>(text: &str, what: &str) -> Result<T> {
    text.trim()
        .parse()
        .map_err(|_| listing_error(format!("invalid {what}: {:?}", text.trim())))
}

fn parse_point_list(line: &str) -> Result<Vec<XyPoint>> {
    let inner = line
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| listing_error(format!("expected a bracketed point list, got {line:?}")))?
        .trim();

    if inner.is_empty() {
        return Ok(Vec::new());
    }

    inner
        .split("),")
        .map(|pair| -> Result<XyPoint> {
            let pair = pair.trim().trim_start_matches('(').trim_end_matches(')');
            let (x, y) = pair
                .split_once(',')
                .ok_or_else(|| listing_error(format!("expected an (x, y) pair, got {pair:?}")))?;
            Ok(XyPoint::new(parse_int(x, "x")?, parse_int(y, "y")?))
        })
        .collect()
}

/// Parse a listing back into per-frame point lists
pub fn parse_listing(input: &str) -> Result<Vec<Vec<XyPoint>>> {
    let mut lines = input.lines().map(str::trim).filter(|line| !line.is_empty());

    let header = lines.next().ok_or_else(|| listing_error("empty listing"))?;
    let frame_count: usize = parse_int(header, "frame count")?;

    let mut frames = Vec::with_capacity(frame_count);
    for frame in 0..frame_count {
        let count_line = lines
            .next()
            .ok_or_else(|| listing_error(format!("frame {frame}: missing point count")))?;
        let count: usize = parse_int(count_line, "point count")?;

        let list_line = lines
            .next()
            .ok_or_else(|| listing_error(format!("frame {frame}: missing point list")))?;
        let points = parse_point_list(list_line)?;

        if points.len() != count {
            return Err(listing_error(format!(
                "frame {frame}: declared {count} points but listed {}",
                points.len()
            )));
        }
        frames.push(points);
    }

    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FrameSlot;

    fn frame(ordinal: usize, coords: &[(i32, i32)]) -> FrameCoordinates {
        FrameCoordinates {
            slot: FrameSlot { ordinal, source_index: ordinal * 2 },
            points: coords.iter().map(|&(x, y)| XyPoint::new(x, y)).collect(),
        }
    }

    #[test]
    fn test_writer_output_format() {
        let mut sink = ListingWriter::new(Vec::new());
        sink.begin(2).expect("Should write header");
        sink.write_frame(&frame(0, &[(0, 224), (255, 33)])).expect("Should write frame");
        sink.write_frame(&frame(1, &[])).expect("Should write frame");
        sink.finish().expect("Should flush");

        let text = String::from_utf8(sink.into_inner()).expect("Should be UTF-8");
        assert_eq!(text, "2\n2\n[(0, 224), (255, 33)]\n0\n[]\n");
    }

    #[test]
    fn test_parse_written_listing() {
        let mut sink = ListingWriter::new(Vec::new());
        sink.begin(2).unwrap();
        sink.write_frame(&frame(0, &[(12, 200), (13, 199), (-1, 0)])).unwrap();
        sink.write_frame(&frame(1, &[])).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();

        let frames = parse_listing(&text).expect("Should parse");
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0], frame(0, &[(12, 200), (13, 199), (-1, 0)]).points);
        assert!(frames[1].is_empty());
    }

    #[test]
    fn test_parse_rejects_count_mismatch() {
        let err = parse_listing("1\n3\n[(1, 2), (3, 4)]\n").expect_err("Should reject");
        assert!(matches!(err, EdgeFramesError::Listing(_)));
    }

    #[test]
    fn test_parse_rejects_truncated_listing() {
        assert!(parse_listing("3\n1\n[(1, 2)]\n").is_err());
        assert!(parse_listing("").is_err());
        assert!(parse_listing("1\n1\n(1, 2)\n").is_err());
        assert!(parse_listing("1\n1\n[(1, x)]\n").is_err());
    }
}
