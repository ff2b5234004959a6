#[derive(thiserror::Error, Debug)]
pub enum DocumentError {
    #[error("PDF data is missing")]
    Missing,
    #[error("PDF data is not valid base64")]
    InvalidEncoding(#[from] base64::DecodeError),
    #[error("PDF data is too short ({0} bytes)")]
    TooShort(usize),
    #[error("PDF data does not start with the %PDF- signature")]
    MissingSignature,
}

/// A decoded document whose leading bytes carry the PDF signature.
///
/// Only the signature is checked; the rest of the file is never parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfDocument(Vec<u8>);

impl PdfDocument {
    const SIGNATURE: &'static [u8] = b"%PDF-";

    /// Decodes either raw base64 or a `data:` URI carrying base64.
    pub fn parse(encoded: &str) -> Result<PdfDocument, DocumentError> {
        let payload: String = strip_data_uri_prefix(encoded)
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        let bytes = base64::decode(payload)?;

        if bytes.len() < PdfDocument::SIGNATURE.len() {
            return Err(DocumentError::TooShort(bytes.len()));
        }
        if !bytes.starts_with(PdfDocument::SIGNATURE) {
            return Err(DocumentError::MissingSignature);
        }
        Ok(Self(bytes))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for PdfDocument {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Drops everything up to and including the last comma.
pub fn strip_data_uri_prefix(encoded: &str) -> &str {
    match encoded.rfind(',') {
        Some(index) => &encoded[index + 1..],
        None => encoded,
    }
}
