use serde::Serialize;

/// число, разобранное из значения числового свойства ("5", "1/2")
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number
{
    Integer(i64),
    Float(f64),
}

impl Number
{
    /// "NaN" и пустые строки значениями не считаются, дробь вида a/b превращается в float,
    /// нераспознанное целое - в 0
    pub fn parse(source: &str) -> Option<Self>
    {
        if source.is_empty() || source == "NaN" {
            return None;
        }

        if let Some((numerator, denominator)) = source.split_once('/') {
            let numerator: f64 = numerator.trim().parse().ok()?;
            let denominator: f64 = denominator.trim().parse().ok()?;

            return Some(Number::Float(numerator / denominator));
        }

        Some(Number::Integer(source.parse().unwrap_or(0)))
    }
}

/// значение свойства в результате
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value
{
    Text(String),
    Flag(bool),
    Integer(i64),
    IntegerList(Vec<i64>),
    Numbers(Vec<Number>),
    TextList(Vec<String>),
}

impl Value
{
    /// пустое значение: пустая строка или список, false, 0
    pub fn is_blank(&self) -> bool
    {
        match self {
            Value::Text(s) => s.is_empty(),
            Value::Flag(f) => !f,
            Value::Integer(i) => *i == 0,
            Value::IntegerList(l) => l.is_empty(),
            Value::Numbers(l) => l.is_empty(),
            Value::TextList(l) => l.is_empty(),
        }
    }

    pub fn as_str(&self) -> Option<&str>
    {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool>
    {
        match self {
            Value::Flag(f) => Some(*f),
            _ => None,
        }
    }

    /// строковое значение содержит подстроку
    #[inline]
    pub fn contains(&self, needle: &str) -> bool
    {
        self.as_str().map_or(false, |s| s.contains(needle))
    }
}

impl From<String> for Value
{
    fn from(value: String) -> Self
    {
        Value::Text(value)
    }
}

impl From<&str> for Value
{
    fn from(value: &str) -> Self
    {
        Value::Text(value.to_owned())
    }
}

impl From<bool> for Value
{
    fn from(value: bool) -> Self
    {
        Value::Flag(value)
    }
}

impl From<i64> for Value
{
    fn from(value: i64) -> Self
    {
        Value::Integer(value)
    }
}

impl From<Vec<String>> for Value
{
    fn from(value: Vec<String>) -> Self
    {
        Value::TextList(value)
    }
}
