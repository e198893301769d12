use crate::ds::function_object::Function;
use crate::ds::value::Value;

/// Result of looking a member name up on a container.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Callable(Function),
    Data(Value),
    Missing,
}

impl Member {
    pub fn from_lookup(value: Option<Value>) -> Self {
        match value {
            None => Member::Missing,
            Some(Value::Function(f)) => Member::Callable(f),
            Some(v) => Member::Data(v),
        }
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Member::Callable(_))
    }

    pub fn into_callable(self) -> Option<Function> {
        match self {
            Member::Callable(f) => Some(f),
            _ => None,
        }
    }
}
