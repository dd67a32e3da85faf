// Numbers typed into admin forms are sometimes stored as strings.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    String(String),
}

impl NumberOrString {
    fn into_f64(self) -> Option<f64> {
        let n = match self {
            Self::Number(n) => Some(n),
            Self::String(s) => s.trim().parse().ok(),
        };
        n.filter(|n: &f64| n.is_finite())
    }
}

pub fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberOrString>::deserialize(deserializer)?;
    Ok(value.and_then(NumberOrString::into_f64))
}

pub fn opt_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberOrString>::deserialize(deserializer)?;
    Ok(value
        .and_then(NumberOrString::into_f64)
        .filter(|n| *n >= 0.0 && *n <= f64::from(u32::MAX))
        .map(|n| n.round() as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Form {
        #[serde(default, deserialize_with = "opt_f64")]
        kg: Option<f64>,
        #[serde(default, deserialize_with = "opt_u32")]
        points: Option<u32>,
    }

    fn form(json: &str) -> Form {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn numbers_and_numeric_strings() {
        let p = form(r#"{"kg":2.5,"points":"120"}"#);
        assert_eq!(p.kg, Some(2.5));
        assert_eq!(p.points, Some(120));
        let p = form(r#"{"kg":" 7 ","points":3}"#);
        assert_eq!(p.kg, Some(7.0));
        assert_eq!(p.points, Some(3));
    }

    #[test]
    fn missing_null_or_garbage_is_none() {
        let p = form(r#"{}"#);
        assert!(p.kg.is_none() && p.points.is_none());
        let p = form(r#"{"kg":null,"points":"lots"}"#);
        assert!(p.kg.is_none() && p.points.is_none());
        let p = form(r#"{"points":-4}"#);
        assert!(p.points.is_none());
    }
}
