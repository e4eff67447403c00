// Code generated by "enumerator -i tests/child_module_unit.rs -t Level --child-module --serde -o tests/child_module_unit/level_enum.rs"; DO NOT EDIT.
// An "index out of bounds" error in the `const _` block below means the constants of `Level` changed since this file was generated; re-run the command.

use super::*;
impl ::std::fmt::Display for Level {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let l = self.0;
        match l {
            1 => f.write_str("LOW"),
            255 => f.write_str("HIGH"),
            _ => ::std::write!(f, "Level({})", l),
        }
    }
}
impl Level {
    /// Returns the rendered name as bytes.
    pub fn bytes(&self) -> ::std::vec::Vec<u8> {
        let l = self.0;
        match l {
            1 => ::std::vec![b'L', b'O', b'W'],
            255 => ::std::vec![b'H', b'I', b'G', b'H'],
            _ => ::std::format!("Level({})", l).into_bytes(),
        }
    }
}
impl Level {
    /// Returns whether the value is one of the declared constants.
    pub fn is_defined(&self) -> bool {
        let l = self.0;
        ::std::matches!(l, 1 | 255)
    }
}
impl ::std::str::FromStr for Level {
    type Err = LevelError;
    fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
        match s {
            "LOW" => ::std::result::Result::Ok(LOW),
            "HIGH" => ::std::result::Result::Ok(HIGH),
            _ => ::std::result::Result::Err(LevelError::UnknownLiteral(s.to_string())),
        }
    }
}
impl Level {
    /// Reads one whitespace-delimited token from `reader` and parses it.
    ///
    /// Leading whitespace is skipped and the delimiter after the token is left unread.
    pub fn scan<R: ::std::io::BufRead + ?Sized>(
        &mut self,
        reader: &mut R,
    ) -> ::std::io::Result<()> {
        let mut token = ::std::vec::Vec::new();
        loop {
            let buf = reader.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            let mut used = 0;
            let mut done = false;
            for &b in buf {
                if b.is_ascii_whitespace() {
                    if token.is_empty() {
                        used += 1;
                        continue;
                    }
                    done = true;
                    break;
                }
                token.push(b);
                used += 1;
            }
            reader.consume(used);
            if done {
                break;
            }
        }
        if token.is_empty() {
            return ::std::result::Result::Err(
                ::std::io::Error::new(
                    ::std::io::ErrorKind::UnexpectedEof,
                    "expected a Level value",
                ),
            );
        }
        let text = ::std::str::from_utf8(&token)
            .map_err(|e| ::std::io::Error::new(::std::io::ErrorKind::InvalidData, e))?;
        *self = text
            .parse()
            .map_err(|e: LevelError| ::std::io::Error::new(
                ::std::io::ErrorKind::InvalidData,
                e,
            ))?;
        ::std::result::Result::Ok(())
    }
}
impl Level {
    /// Returns the next declared constant, wrapping from the last back to the first.
    ///
    /// Values that are not declared constants map to the first constant.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// assert_eq!(HIGH.next(), LOW);
    /// ```
    pub fn next(&self) -> Self {
        let l = self.0;
        match l {
            1 => HIGH,
            255 => LOW,
            _ => LOW,
        }
    }
}
const _: () = {
    let x = [(); 1];
    let _ = x[((LOW.0 - (1)) != 0) as usize];
    let _ = x[((HIGH.0 - (255)) != 0) as usize];
};
impl Level {
    /// Encodes the value as a JSON string.
    pub fn encode_json(&self) -> ::std::vec::Vec<u8> {
        let mut raw = ::std::vec::Vec::new();
        raw.push(b'"');
        raw.extend_from_slice(&self.bytes());
        raw.push(b'"');
        raw
    }
}
impl Level {
    /// Decodes a JSON string produced by [`Self::encode_json`].
    pub fn decode_json(&mut self, raw: &[u8]) -> ::std::result::Result<(), LevelError> {
        *self = match raw {
            b"\"LOW\"" => LOW,
            b"\"HIGH\"" => HIGH,
            _ => {
                return ::std::result::Result::Err(
                    LevelError::DecodeMismatch(raw.to_vec()),
                );
            }
        };
        ::std::result::Result::Ok(())
    }
}
/// Error returned when text or JSON does not name a `Level` constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    /// The token is not the name of any constant.
    UnknownLiteral(::std::string::String),
    /// The JSON input is not a quoted constant name.
    DecodeMismatch(::std::vec::Vec<u8>),
}
impl ::std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        match self {
            Self::UnknownLiteral(token) => {
                ::std::write!(f, "unknown Level value: {}", token)
            }
            Self::DecodeMismatch(raw) => {
                ::std::write!(
                    f, "failed to parse value {:?} into Level",
                    ::std::string::String::from_utf8_lossy(raw)
                )
            }
        }
    }
}
impl ::std::error::Error for LevelError {}
impl ::serde::Serialize for Level {
    fn serialize<S: ::serde::Serializer>(
        &self,
        serializer: S,
    ) -> ::std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
impl<'de> ::serde::Deserialize<'de> for Level {
    fn deserialize<D: ::serde::Deserializer<'de>>(
        deserializer: D,
    ) -> ::std::result::Result<Self, D::Error> {
        let text = <::std::string::String as ::serde::Deserialize>::deserialize(
            deserializer,
        )?;
        text.parse().map_err(::serde::de::Error::custom)
    }
}
