pub struct Error {
    code: u16,
    position: Option<usize>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, at $pos:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).at_position($pos)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, at $pos:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .at_position($pos)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            position: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        ErrorCode::from_u16(self.code)
    }

    pub fn position(&self) -> Option<usize> {
        self.position
    }

    pub fn at_position(self, position: usize) -> Error {
        debug_assert!(self.position.is_none());
        Error {
            position: Some(position),
            ..self
        }
    }

    pub fn message(self, message: &str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            message: message.to_string(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    EmptySource = 1,
    NotCompiled = 2,
    OutOfRangeCharacter = 3,
    FileNotFound = 53,
    DiskIoError = 57,
    BadFileName = 64,
    InternalError = 51,
}

impl ErrorCode {
    fn from_u16(code: u16) -> ErrorCode {
        use ErrorCode::*;
        match code {
            1 => EmptySource,
            2 => NotCompiled,
            3 => OutOfRangeCharacter,
            53 => FileNotFound,
            57 => DiskIoError,
            64 => BadFileName,
            _ => InternalError,
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            1 => "EMPTY CODE SPACE",
            2 => "NOT COMPILED",
            3 => "OUT OF RANGE CHARACTER",
            51 => "INTERNAL ERROR",
            53 => "FILE NOT FOUND",
            57 => "DISK I/O ERROR",
            64 => "BAD FILE NAME",
            _ => "",
        };
        let mut suffix = String::new();
        if let Some(position) = self.position {
            suffix.push_str(&format!(" AT {}", position));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if code_str.is_empty() {
            write!(f, "PROGRAM ERROR {}{}", self.code, suffix)
        } else {
            write!(f, "{}{}", code_str, suffix)
        }
    }
}

impl std::error::Error for Error {}
