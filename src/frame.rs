use std::io::BufRead;

use serde_derive::{Deserialize, Serialize};

use crate::detection::Detection;
use crate::error::Error;

/// Detector output for one tick of the capture loop.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub timestamp: f64, // in seconds
    pub detection: Option<Detection>,
}

impl Frame {
    #[inline]
    pub fn new(timestamp: f64, detection: Option<Detection>) -> Self {
        Self {
            timestamp,
            detection,
        }
    }

    #[inline]
    pub fn detected(timestamp: f64, x: f64, y: f64, radius: u32) -> Self {
        Self::new(timestamp, Some(Detection::new(x, y, radius)))
    }

    #[inline]
    pub fn missed(timestamp: f64) -> Self {
        Self::new(timestamp, None)
    }

    /// Parses one replay line: `<seconds>:<detection json or null>`.
    pub fn parse_line(line_no: usize, line: &str) -> Result<Self, Error> {
        let (ts, json) = line.split_once(':').ok_or_else(|| Error::Parse {
            line: line_no,
            reason: "expected `:`".into(),
        })?;

        let timestamp: f64 = ts.trim().parse().map_err(|_| Error::Parse {
            line: line_no,
            reason: format!("bad timestamp `{}`", ts.trim()),
        })?;

        if !timestamp.is_finite() {
            return Err(Error::Parse {
                line: line_no,
                reason: "timestamp is not finite".into(),
            });
        }

        let detection = serde_json::from_str(json.trim()).map_err(|err| Error::Parse {
            line: line_no,
            reason: format!("bad detection: {}", err),
        })?;

        Ok(Self::new(timestamp, detection))
    }
}

/// Reads replay frames, one per line. Blank lines and `#` comments are skipped.
pub fn read_frames<R: BufRead>(reader: R) -> impl Iterator<Item = Result<Frame, Error>> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| match line {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    None
                } else {
                    Some(Frame::parse_line(idx + 1, line))
                }
            }
            Err(err) => Some(Err(err.into())),
        })
}
