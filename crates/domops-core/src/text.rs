//! Value coercion for text content and attribute values.
//!
//! Callers hand over "anything displayable"; the DOM wants a string. The rule is
//! that absent values (`None`, `false`, `NaN`) and empty strings both write `""`,
//! while every other value writes its plain string form. Numeric zero is a real
//! value and writes `"0"`.

use std::borrow::Cow;

use crate::constants::{NEGATIVE_INFINITY_TEXT, POSITIVE_INFINITY_TEXT};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TextValue {
    /// No value at all (`None`, `false`, `NaN`).
    #[default]
    Absent,
    /// An explicitly empty string.
    Empty,
    Value(String),
}

impl TextValue {
    #[inline]
    pub fn is_blank(&self) -> bool {
        !matches!(self, TextValue::Value(_))
    }

    /// Borrowed text form; blank values read as `""`.
    #[inline]
    pub fn as_text(&self) -> &str {
        match self {
            TextValue::Value(s) => s,
            TextValue::Absent | TextValue::Empty => "",
        }
    }

    /// Owned text form; blank values become `""`.
    pub fn into_text(self) -> String {
        match self {
            TextValue::Value(s) => s,
            TextValue::Absent | TextValue::Empty => String::new(),
        }
    }
}

impl From<String> for TextValue {
    fn from(s: String) -> Self {
        if s.is_empty() {
            TextValue::Empty
        } else {
            TextValue::Value(s)
        }
    }
}

impl From<&str> for TextValue {
    fn from(s: &str) -> Self {
        TextValue::from(s.to_owned())
    }
}

impl From<&String> for TextValue {
    fn from(s: &String) -> Self {
        TextValue::from(s.as_str())
    }
}

impl From<Cow<'_, str>> for TextValue {
    fn from(s: Cow<'_, str>) -> Self {
        TextValue::from(s.into_owned())
    }
}

impl From<char> for TextValue {
    fn from(c: char) -> Self {
        TextValue::Value(c.to_string())
    }
}

impl From<bool> for TextValue {
    fn from(b: bool) -> Self {
        if b {
            TextValue::Value("true".to_string())
        } else {
            TextValue::Absent
        }
    }
}

impl From<f64> for TextValue {
    fn from(n: f64) -> Self {
        if n.is_nan() {
            return TextValue::Absent;
        }
        TextValue::Value(number_text(n))
    }
}

impl From<f32> for TextValue {
    fn from(n: f32) -> Self {
        TextValue::from(f64::from(n))
    }
}

impl<T: Into<TextValue>> From<Option<T>> for TextValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(TextValue::Absent, Into::into)
    }
}

macro_rules! text_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for TextValue {
                fn from(n: $t) -> Self {
                    TextValue::Value(n.to_string())
                }
            }
        )*
    };
}

text_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// Number-to-string as a browser's `String(n)`: shortest round-trip digits,
// plain notation for decimal exponents in [-7, 21), exponent form outside it.
fn number_text(n: f64) -> String {
    if n.is_infinite() {
        let s = if n > 0.0 {
            POSITIVE_INFINITY_TEXT
        } else {
            NEGATIVE_INFINITY_TEXT
        };
        return s.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    // `{:e}` yields the shortest round-trip digits as "d.ddde<exp>"
    let sci = format!("{:e}", n.abs());
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let k = digits.len() as i32;
    // decimal point position relative to the digit string
    let point = exp.parse::<i32>().unwrap_or(0) + 1;

    let mut out = String::new();
    if n < 0.0 {
        out.push('-');
    }
    if k <= point && point <= 21 {
        out.push_str(&digits);
        out.extend(std::iter::repeat('0').take((point - k) as usize));
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        out.push_str(int);
        out.push('.');
        out.push_str(frac);
    } else if -6 < point && point <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat('0').take(point.unsigned_abs() as usize));
        out.push_str(&digits);
    } else {
        let (lead, rest) = digits.split_at(1);
        out.push_str(lead);
        if !rest.is_empty() {
            out.push('.');
            out.push_str(rest);
        }
        let e = point - 1;
        out.push('e');
        out.push(if e < 0 { '-' } else { '+' });
        out.push_str(&e.unsigned_abs().to_string());
    }
    out
}
