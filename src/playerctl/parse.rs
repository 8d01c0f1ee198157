use std::time::Duration;

/// `--format` template passed to `playerctl metadata`.
pub const METADATA_FORMAT: &str = "{{title}}|{{artist}}|{{album}}|{{status}}";

const FIELD_SEPARATOR: char = '|';

/// Raw, trimmed fields of one metadata line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackFields {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub status: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Metadata {
    /// Nothing is playing.
    Empty,
    /// The line did not split into exactly four fields.
    Malformed,
    Track(TrackFields),
}

pub fn parse_metadata(out: &str) -> Metadata {
    let line = out.trim();
    if line.is_empty() {
        return Metadata::Empty;
    }

    let parts: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();
    let [title, artist, album, status] = parts.as_slice() else {
        return Metadata::Malformed;
    };

    Metadata::Track(TrackFields {
        title: title.to_string(),
        artist: artist.to_string(),
        album: album.to_string(),
        status: status.to_string(),
    })
}

/// Parse `mpris:length` (microseconds) down to whole seconds.
///
/// Anything unparsable counts as zero.
pub fn parse_length(out: &str) -> Duration {
    let raw = out.trim();
    let micros = raw
        .parse::<u64>()
        .ok()
        .or_else(|| {
            raw.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && *v >= 0.0)
                .map(|v| v as u64)
        })
        .unwrap_or(0);

    Duration::from_secs(micros / 1_000_000)
}

/// Parse `playerctl position` output (fractional seconds).
pub fn parse_position(out: &str) -> Duration {
    out.trim()
        .parse::<f64>()
        .ok()
        .and_then(|v| Duration::try_from_secs_f64(v).ok())
        .unwrap_or(Duration::ZERO)
}
