//! Custom serde helpers for backend wire formats.

/// Serializes a `NaiveDate` as `yyyy-MM-dd`.
///
/// Used for KYC date of birth, which the API accepts only in this form.
pub mod date_only {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, FORMAT)
            .map_err(|e| serde::de::Error::custom(format!("Invalid date '{}': {}", s, e)))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct Holder {
        #[serde(with = "super::date_only")]
        date: NaiveDate,
    }

    #[test]
    fn test_date_only_pads_month_and_day() {
        let holder = Holder {
            date: NaiveDate::from_ymd_opt(1990, 3, 7).unwrap(),
        };
        let json = serde_json::to_string(&holder).unwrap();
        assert_eq!(json, r#"{"date":"1990-03-07"}"#);
    }

    #[test]
    fn test_date_only_rejects_other_formats() {
        let result: Result<Holder, _> = serde_json::from_str(r#"{"date":"07/03/1990"}"#);
        assert!(result.is_err());
    }
}
