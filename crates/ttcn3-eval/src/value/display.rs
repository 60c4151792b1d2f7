//! Display implementations for Value

use std::fmt;

use super::*;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Literal source form; error messages embed this verbatim
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Error(e) => write!(f, "error: {}", e),
            Value::Absent => write!(f, "absent"),
        }
    }
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_literals() {
        assert_eq!(Value::Integer(Integer::from(1)).to_string(), "1");
        assert_eq!(Value::Integer(Integer::from(-10)).to_string(), "-10");
        assert_eq!(Value::Boolean(true).to_string(), "true");
        assert_eq!(Value::Boolean(false).to_string(), "false");
        assert_eq!(Value::Absent.to_string(), "absent");
    }

    #[test]
    fn test_display_error() {
        let v = Value::Error(ErrorValue::new("boom"));
        assert_eq!(v.to_string(), "error: boom");
        assert_eq!(ErrorValue::new("boom").to_string(), "boom");
    }
}
