use super::LineNumber;

pub struct Error {
    code: u16,
    line_number: Option<LineNumber>,
    message: &'static str,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            line_number: None,
            message: "",
        }
    }

    pub fn in_line_number(self, line: LineNumber) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            line_number: Some(line),
            ..self
        }
    }

    pub fn message(self, message: &'static str) -> Error {
        debug_assert!(self.message.is_empty());
        Error { message, ..self }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn line_number(&self) -> Option<LineNumber> {
        self.line_number
    }
}

pub enum ErrorCode {
    BadOpCode = 1,
    UndefinedLabel = 2,
    DivisionByZero = 3,
    AddressOutOfRange = 4,
    LineBufferOverflow = 5,
    OutOfMemory = 6,
    IoError = 7,
    InternalError = 8,
}

impl From<std::io::Error> for Error {
    fn from(_: std::io::Error) -> Error {
        Error::new(ErrorCode::IoError)
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
            1 => "BAD OP CODE",
            2 => "UNDEFINED LABEL",
            3 => "DIVISION BY ZERO",
            4 => "ADDRESS OUT OF RANGE",
            5 => "LINE BUFFER OVERFLOW",
            6 => "OUT OF MEMORY",
            7 => "I/O ERROR",
            8 => "INTERNAL ERROR",
            _ => "",
        };
        if code_str.is_empty() {
            write!(f, "PROGRAM ERROR {}", self.code)?;
        } else {
            write!(f, "{}", code_str)?;
        }
        if let Some(line_number) = self.line_number {
            write!(f, " IN LINE {}", line_number)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        Ok(())
    }
}
