use serde_json::{Map, Value};

/// Raw fields of one form submission.
///
/// Front-end forms post `application/x-www-form-urlencoded` bodies, while API clients may
/// post JSON objects; both decode into the same map so the submission pipeline does not
/// care which encoding was used. Url-encoded values are always strings, JSON values keep
/// their type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormPayload {
    fields: Map<String, Value>,
}

impl FormPayload {
    /// Builds a payload from decoded url-encoded pairs.
    ///
    /// A repeated field keeps its last value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let fields = pairs
            .into_iter()
            .map(|(name, value)| (name.into(), Value::String(value.into())))
            .collect();

        Self { fields }
    }

    /// Builds a payload from a JSON document.
    ///
    /// Anything other than an object carries no fields.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self { fields },
            _ => Self::default(),
        }
    }

    /// Decodes a request body according to its content type.
    ///
    /// JSON is used when the content type says so; every other body is parsed as url-encoded
    /// form data, which is what browsers send. An empty body yields an empty payload.
    ///
    /// # Arguments
    /// - `content_type` - Value of the `Content-Type` header, empty when absent
    /// - `body` - Raw request body
    ///
    /// # Returns
    /// - `Ok(FormPayload)` - Decoded fields
    /// - `Err(serde_json::Error)` - Body declared as JSON is not valid JSON
    pub fn decode(content_type: &str, body: &[u8]) -> Result<Self, serde_json::Error> {
        if body.is_empty() {
            return Ok(Self::default());
        }

        if content_type.to_ascii_lowercase().contains("application/json") {
            return serde_json::from_slice(body).map(Self::from_json);
        }

        Ok(Self::from_pairs(url::form_urlencoded::parse(body).into_owned()))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Whether the field carries a value.
    ///
    /// Absent fields, `null`, empty strings, `false`, zero and empty arrays or objects count
    /// as not filled.
    pub fn is_filled(&self, name: &str) -> bool {
        match self.fields.get(name) {
            None | Some(Value::Null) => false,
            Some(Value::String(text)) => !text.is_empty(),
            Some(Value::Bool(flag)) => *flag,
            Some(Value::Number(number)) => number.as_f64().is_some_and(|value| value != 0.0),
            Some(Value::Array(items)) => !items.is_empty(),
            Some(Value::Object(map)) => !map.is_empty(),
        }
    }
}
