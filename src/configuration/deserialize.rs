pub mod duration {
    use crate::time::timeunit::DurationUnit;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};
    use std::time::Duration;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(v) => v
                .parse::<DurationUnit>()
                .map(|value| Some(value.into()))
                .map_err(|err| D::Error::custom(err.to_string())),
            None => Ok(None),
        }
    }
}
