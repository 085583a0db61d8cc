use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use log::debug;

use super::{aftermath, biologic, IngestError, InstrumentSource, RawTable};

/// Decode a browser upload of the form `data:<mime>;base64,<payload>`.
///
/// A bare base64 payload without the `data:` prefix is accepted as well.
pub fn decode_data_url(contents: &str) -> Result<String, IngestError> {
    let contents = contents.trim();
    let payload = match contents.strip_prefix("data:") {
        Some(rest) => {
            let (header, payload) = rest
                .split_once(',')
                .ok_or_else(|| IngestError::InvalidDataUrl("missing ',' separator".to_string()))?;
            if !header.ends_with(";base64") {
                return Err(IngestError::InvalidDataUrl(format!(
                    "unsupported encoding in header {:?}",
                    header
                )));
            }
            payload
        }
        None => contents,
    };

    let bytes = STANDARD.decode(payload.trim())?;
    debug!("Decoded {} bytes from base64 upload", bytes.len());
    Ok(String::from_utf8(bytes)?)
}

/// Decode a base64 upload and dispatch to the loader for its instrument
pub fn from_base64(
    contents: &str,
    source: InstrumentSource,
    scan_rate_mv_s: Option<f64>,
) -> Result<RawTable, IngestError> {
    let text = decode_data_url(contents)?;
    match source {
        InstrumentSource::Biologic => biologic::from_reader(text.as_bytes()),
        InstrumentSource::Aftermath => aftermath::from_str(&text, scan_rate_mv_s),
    }
}
