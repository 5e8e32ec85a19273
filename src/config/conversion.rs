use std::collections::HashMap;

use indexmap::IndexMap;

use crate::{JiniError, Value};

fn type_error(message: String, hint: &str, code: u32) -> JiniError {
    JiniError::TypeError {
        message,
        line: 0,
        hint: Some(hint.into()),
        code: Some(code),
    }
}

impl TryFrom<Value> for String {
    type Error = JiniError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(type_error(
                format!("Expected string, got {:?}", value),
                "String values must be double-quoted",
                401,
            )),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = JiniError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(b),
            _ => Err(type_error(
                format!("Expected boolean, got {:?}", value),
                "Use true or false",
                404,
            )),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = JiniError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Float(n) => Ok(n),
            Value::Int(n) => Ok(n as f64),
            _ => Err(type_error(
                format!("Expected number, got {:?}", value),
                "Use a number value in your config",
                402,
            )),
        }
    }
}

impl TryFrom<Value> for f32 {
    type Error = JiniError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        f64::try_from(value).map(|n| n as f32)
    }
}

impl TryFrom<Value> for i64 {
    type Error = JiniError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(n) => Ok(n),
            Value::Float(n) => Err(type_error(
                format!("Expected integer, got float {}", n),
                "Use a whole number",
                403,
            )),
            _ => Err(type_error(
                format!("Expected integer, got {:?}", value),
                "Use a number value in your config",
                402,
            )),
        }
    }
}

macro_rules! int_conversion {
    ($ty:ty, $code:expr) => {
        impl TryFrom<Value> for $ty {
            type Error = JiniError;

            fn try_from(value: Value) -> Result<Self, Self::Error> {
                let n = i64::try_from(value)?;
                <$ty>::try_from(n).map_err(|_| {
                    type_error(
                        format!("Number {} out of range for {}", n, stringify!($ty)),
                        concat!("Use a number that fits in ", stringify!($ty)),
                        $code,
                    )
                })
            }
        }
    };
}

int_conversion!(i32, 405);
int_conversion!(u8, 406);
int_conversion!(u16, 407);
int_conversion!(u32, 408);
int_conversion!(u64, 409);
int_conversion!(usize, 410);

impl<T> TryFrom<Value> for Vec<T>
where
    T: TryFrom<Value, Error = JiniError>,
{
    type Error = JiniError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) => {
                let mut result = Vec::with_capacity(items.len());
                for item in items {
                    result.push(T::try_from(item)?);
                }
                Ok(result)
            }
            _ => Err(type_error(
                format!("Expected array, got {:?}", value),
                "Use an array [...] in your config",
                411,
            )),
        }
    }
}

impl<T> TryFrom<Value> for Option<T>
where
    T: TryFrom<Value, Error = JiniError>,
{
    type Error = JiniError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(None),
            v => Ok(Some(T::try_from(v)?)),
        }
    }
}

impl TryFrom<Value> for IndexMap<String, Value> {
    type Error = JiniError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(entries) => Ok(entries),
            _ => Err(type_error(
                format!("Expected object, got {:?}", value),
                "Use an object {...} in your config",
                412,
            )),
        }
    }
}

impl TryFrom<Value> for HashMap<String, Value> {
    type Error = JiniError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        IndexMap::<String, Value>::try_from(value).map(|entries| entries.into_iter().collect())
    }
}

impl TryFrom<Value> for HashMap<String, String> {
    type Error = JiniError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let entries = IndexMap::<String, Value>::try_from(value)?;
        let mut map = HashMap::with_capacity(entries.len());
        for (key, val) in entries {
            map.insert(key, String::try_from(val)?);
        }
        Ok(map)
    }
}
