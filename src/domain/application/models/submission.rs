use serde_json::Value;

/// Fields a browser submits along with the application form.
///
/// Fields that are missing or not strings are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub pdf_base64: Option<String>,
    pub student_email: Option<String>,
    pub student_name: Option<String>,
    pub file_name: Option<String>,
}

impl Submission {
    /// An empty body reads as `{}`. A JSON `null` is rejected like malformed
    /// JSON; any other value that is not an object carries no fields.
    pub fn from_body(body: &[u8]) -> Result<Submission, serde_json::Error> {
        if body.is_empty() {
            return Ok(Self::default());
        }
        match serde_json::from_slice(body)? {
            Value::Null => Err(serde::de::Error::custom("application payload is null")),
            value => Ok(Self::from_value(&value)),
        }
    }

    fn from_value(value: &Value) -> Submission {
        let field = |name: &str| value.get(name).and_then(Value::as_str).map(String::from);
        Self {
            pdf_base64: field("pdfBase64"),
            student_email: field("studentEmail"),
            student_name: field("studentName"),
            file_name: field("fileName"),
        }
    }
}
