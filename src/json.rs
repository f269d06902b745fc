use core::fmt::Debug;
use core::fmt::Display;

use serde::Serialize;

/// Renders the wrapped value as JSON wherever it is formatted, including
/// `{:?}`. Wrap an error in `Json` to get its fields in
/// [`Result::unwrap`](crate::Result::unwrap) panic messages.
///
/// Values that fail to serialize fall back to their own `Debug` output.
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
#[derive(Hash)]
#[derive(Default)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Serialize + Debug> Debug for Json<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match serde_json::to_string(&self.0) {
            | Ok(json) => f.write_str(&json),
            | Err(_) => Debug::fmt(&self.0, f),
        }
    }
}

impl<T: Serialize + Debug> Display for Json<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        Debug::fmt(self, f)
    }
}

impl<T> From<T> for Json<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::format;

    use super::Json;
    use crate::prelude::*;

    #[derive(serde::Serialize, Debug)]
    struct Rejected {
        message: &'static str,
        code: u16,
    }

    #[test]
    fn test_formats_as_json() {
        let rejected = Json(Rejected {
            message: "bad",
            code: 400,
        });
        assert_eq!(format!("{rejected:?}"), r#"{"message":"bad","code":400}"#);
        assert_eq!(format!("{rejected}"), r#"{"message":"bad","code":400}"#);
    }

    #[test]
    #[should_panic(expected = r#"Tried to unwrap Error: {"message":"bad","code":400}"#)]
    fn test_unwrap_panic_message() {
        let result: Result<i32, _> = Err(Json(Rejected {
            message: "bad",
            code: 400,
        }));
        result.unwrap();
    }

    #[test]
    fn test_flat_map_to_json_payload() {
        let result = Ok::<i32, &str>(1).flat_map(|v| Ok::<_, &str>(Ok::<_, &str>(Json(v + 1))));
        assert_eq!(result, Ok(Json(2)));
    }

    #[test]
    fn test_falls_back_to_debug() {
        // tuple keys are not valid JSON object keys
        let mut map = BTreeMap::new();
        map.insert((1u8, 2u8), 3u8);
        assert_eq!(format!("{:?}", Json(map)), "{(1, 2): 3}");
    }
}
