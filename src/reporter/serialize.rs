pub mod xray_date {
    use crate::time::XRAY_DATE_FORMAT;
    use chrono::{DateTime, Utc};
    use serde::Serializer;

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format(XRAY_DATE_FORMAT))
    }
}

pub mod optional_xray_date {
    use chrono::{DateTime, Utc};
    use serde::Serializer;

    pub fn serialize<S>(date: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => super::xray_date::serialize(date, serializer),
            None => serializer.serialize_none(),
        }
    }
}
