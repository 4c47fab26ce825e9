use serde::{Deserialize, Deserializer};

// ids and scores arrive both as JSON numbers and as strings (values of <select>
// elements), so accept either
#[derive(Deserialize)]
#[serde(untagged)]
pub enum IntOrString {
    Int(i64),
    Str(String),
}

impl IntOrString {
    fn into_i64(self) -> Result<i64, String> {
        match self {
            IntOrString::Int(v) => Ok(v),
            IntOrString::Str(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| format!("Wrong value {s}, can not parse to i64")),
        }
    }
}

pub fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IntOrString>::deserialize(deserializer)? {
        Some(IntOrString::Str(s)) if s.trim().is_empty() => Ok(None),
        Some(raw) => raw.into_i64().map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// The category a quiz is drawn from. `0` and `"all"` select every category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "IntOrString")]
pub enum CategorySelection {
    All,
    Id(i64),
}

impl TryFrom<IntOrString> for CategorySelection {
    type Error = String;

    fn try_from(value: IntOrString) -> Result<Self, Self::Error> {
        if let IntOrString::Str(s) = &value {
            if s.trim().eq_ignore_ascii_case("all") {
                return Ok(CategorySelection::All);
            }
        }
        match value.into_i64()? {
            0 => Ok(CategorySelection::All),
            id => Ok(CategorySelection::Id(id)),
        }
    }
}

impl CategorySelection {
    pub fn category_id(self) -> Option<i64> {
        match self {
            CategorySelection::All => None,
            CategorySelection::Id(id) => Some(id),
        }
    }
}
