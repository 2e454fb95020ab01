use argsmith_core::ArgType;

/// Parse a Yes/No column. Only the exact token `Yes` is true.
pub fn parse_flag(token: &str) -> bool {
    token == "Yes"
}

/// One declared command-line argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentSpec {
    /// Argument name, used for the field, accessors and the `-name` key
    pub name: String,
    /// Type token as written in the argument list
    pub type_token: String,
    pub is_mandatory: bool,
    pub check_existing: bool,
    pub check_read_access: bool,
    pub check_write_access: bool,
}

impl ArgumentSpec {
    /// Create an argument with every check disabled.
    pub fn new(name: impl Into<String>, type_token: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_token: type_token.into(),
            is_mandatory: false,
            check_existing: false,
            check_read_access: false,
            check_write_access: false,
        }
    }

    pub fn mandatory(mut self, value: bool) -> Self {
        self.is_mandatory = value;
        self
    }

    pub fn existing(mut self, value: bool) -> Self {
        self.check_existing = value;
        self
    }

    pub fn readable(mut self, value: bool) -> Self {
        self.check_read_access = value;
        self
    }

    pub fn writable(mut self, value: bool) -> Self {
        self.check_write_access = value;
        self
    }

    /// The resolved semantic type.
    pub fn arg_type(&self) -> ArgType {
        ArgType::from_token(&self.type_token)
    }

    /// Literal key matched by the generated dispatch table.
    pub fn dispatch_key(&self) -> String {
        format!("-{}", self.name)
    }

    /// Whether any filesystem check is requested.
    pub fn has_filesystem_checks(&self) -> bool {
        self.check_existing || self.check_read_access || self.check_write_access
    }
}
