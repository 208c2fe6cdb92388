use std::convert::From;
use std::error;
use std::fmt;
use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: Option<String>,
}

#[derive(Debug)]
pub enum ErrorKind {
    InvalidLayout,
    InvalidMonth,
    InvalidIcon,
    ConfigParse,
    Template,
    IOError(io::Error),
}

impl Error {
    pub fn new(kind: ErrorKind, msg: &str) -> Self {
        Error {
            kind,
            message: Some(msg.to_owned()),
        }
    }

    pub fn with_msg(mut self, message: &str) -> Self {
        self.message = Some(message.to_owned());
        self
    }

    pub fn is_invalid_layout(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidLayout)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            kind,
            message: None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(io_error: io::Error) -> Error {
        Error::from(ErrorKind::IOError(io_error))
    }
}

impl From<toml::de::Error> for Error {
    fn from(parse_error: toml::de::Error) -> Error {
        Error::new(ErrorKind::ConfigParse, &parse_error.to_string())
    }
}

impl From<tera::Error> for Error {
    fn from(tera_error: tera::Error) -> Error {
        // tera wraps the interesting part in `source`
        let mut msg = tera_error.to_string();
        let mut source = error::Error::source(&tera_error);
        while let Some(cause) = source {
            msg = format!("{}: {}", msg, cause);
            source = cause.source();
        }
        Error::new(ErrorKind::Template, &msg)
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err.kind {
            ErrorKind::IOError(io_error) => io_error,
            kind => io::Error::new(
                io::ErrorKind::InvalidInput,
                match err.message {
                    Some(msg) => msg,
                    None => kind.as_str(),
                },
            ),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "{}: {}", self.kind.as_str(), msg),
            None => write!(f, "{}", self.kind.as_str()),
        }
    }
}

impl error::Error for Error {}

impl ErrorKind {
    pub fn as_str(&self) -> String {
        match self {
            ErrorKind::InvalidLayout => "invalid month layout".to_owned(),
            ErrorKind::InvalidMonth => "invalid month".to_owned(),
            ErrorKind::InvalidIcon => "invalid icon key".to_owned(),
            ErrorKind::ConfigParse => "invalid configuration".to_owned(),
            ErrorKind::Template => "template error".to_owned(),
            ErrorKind::IOError(err) => err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_with_message() {
        let err = Error::new(ErrorKind::InvalidLayout, "leading offset 7 out of range 0..=6");
        assert_eq!(
            err.to_string(),
            "invalid month layout: leading offset 7 out of range 0..=6"
        );
    }

    #[test]
    fn display_without_message() {
        let err = Error::from(ErrorKind::InvalidIcon);
        assert_eq!(err.to_string(), "invalid icon key");
    }

    #[test]
    fn io_roundtrip_keeps_kind() {
        let err = Error::from(io::Error::from(io::ErrorKind::NotFound));
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);

        let io_err: io::Error = Error::from(ErrorKind::InvalidLayout).into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn io_conversion_carries_message_or_kind() {
        let io_err: io::Error = Error::new(ErrorKind::InvalidMonth, "month 13").into();
        assert_eq!(io_err.to_string(), "month 13");

        let io_err: io::Error = Error::from(ErrorKind::InvalidLayout).into();
        assert_eq!(io_err.to_string(), "invalid month layout");
    }
}
