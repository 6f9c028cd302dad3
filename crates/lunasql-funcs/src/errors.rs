use lunasql_types::SqlValue;

#[derive(Debug, Clone, PartialEq)]
pub enum FunctionError {
    /// Function name, arity, or argument form is not supported.
    UnsupportedFeature(String),
    /// A value of the wrong type reached a function argument.
    TypeMismatch {
        left: SqlValue,
        op: String,
        right: SqlValue,
    },
    /// An extracted field could not be cast to the expected integer type.
    /// This indicates an internal contract violation, not bad user data.
    InvalidArgument {
        function: String,
        detail: String,
    },
}

impl std::fmt::Display for FunctionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FunctionError::UnsupportedFeature(msg) => write!(f, "Unsupported: {}", msg),
            FunctionError::TypeMismatch { left, op, right } => {
                write!(f, "Type mismatch: {} {} {}", left, op, right)
            }
            FunctionError::InvalidArgument { function, detail } => {
                write!(f, "Invalid argument to {}: {}", function, detail)
            }
        }
    }
}

impl std::error::Error for FunctionError {}
