// Code generated by "enumerator -i src/example/mod.rs -t StrKind"; DO NOT EDIT.
// An "index out of bounds" error in the `const _` block below means the constants of `StrKind` changed since this file was generated; re-run the command.

impl ::std::fmt::Display for StrKind {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.0)
    }
}
impl StrKind {
    /// Returns the rendered name as bytes.
    pub fn bytes(&self) -> ::std::vec::Vec<u8> {
        self.0.as_bytes().to_vec()
    }
}
impl StrKind {
    /// Returns whether the value is one of the declared constants.
    pub fn is_defined(&self) -> bool {
        let s = self.0;
        ::std::matches!(s, "Hello" | "World")
    }
}
impl ::std::str::FromStr for StrKind {
    type Err = StrKindError;
    fn from_str(_s: &str) -> ::std::result::Result<Self, Self::Err> {
        match _s {
            "Hello" => ::std::result::Result::Ok(StrKind::Hello),
            "World" => ::std::result::Result::Ok(StrKind::World),
            _ => ::std::result::Result::Err(StrKindError::UnknownLiteral(_s.to_string())),
        }
    }
}
impl StrKind {
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
                    "expected a StrKind value",
                ),
            );
        }
        let text = ::std::str::from_utf8(&token)
            .map_err(|e| ::std::io::Error::new(::std::io::ErrorKind::InvalidData, e))?;
        *self = text
            .parse()
            .map_err(|e: StrKindError| ::std::io::Error::new(
                ::std::io::ErrorKind::InvalidData,
                e,
            ))?;
        ::std::result::Result::Ok(())
    }
}
impl StrKind {
    /// Returns the next declared constant, wrapping from the last back to the first.
    ///
    /// Values that are not declared constants map to the first constant.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// assert_eq!(StrKind::World.next(), StrKind::Hello);
    /// ```
    pub fn next(&self) -> Self {
        let s = self.0;
        match s {
            "Hello" => StrKind::World,
            "World" => StrKind::Hello,
            _ => StrKind::Hello,
        }
    }
}
const _: () = {
    let x = [(); 1];
    let _ = x[StrKind::Hello.0.len() - 5];
    let _ = x[(b'H' as i64 - StrKind::Hello.0.as_bytes()[0] as i64) as usize];
    let _ = x[(b'e' as i64 - StrKind::Hello.0.as_bytes()[1] as i64) as usize];
    let _ = x[(b'l' as i64 - StrKind::Hello.0.as_bytes()[2] as i64) as usize];
    let _ = x[(b'l' as i64 - StrKind::Hello.0.as_bytes()[3] as i64) as usize];
    let _ = x[(b'o' as i64 - StrKind::Hello.0.as_bytes()[4] as i64) as usize];
    let _ = x[StrKind::World.0.len() - 5];
    let _ = x[(b'W' as i64 - StrKind::World.0.as_bytes()[0] as i64) as usize];
    let _ = x[(b'o' as i64 - StrKind::World.0.as_bytes()[1] as i64) as usize];
    let _ = x[(b'r' as i64 - StrKind::World.0.as_bytes()[2] as i64) as usize];
    let _ = x[(b'l' as i64 - StrKind::World.0.as_bytes()[3] as i64) as usize];
    let _ = x[(b'd' as i64 - StrKind::World.0.as_bytes()[4] as i64) as usize];
};
impl StrKind {
    /// Encodes the value as a JSON string.
    pub fn encode_json(&self) -> ::std::vec::Vec<u8> {
        let mut raw = ::std::vec::Vec::new();
        raw.push(b'"');
        raw.extend_from_slice(&self.bytes());
        raw.push(b'"');
        raw
    }
}
impl StrKind {
    /// Decodes a JSON string produced by [`Self::encode_json`].
    pub fn decode_json(&mut self, raw: &[u8]) -> ::std::result::Result<(), StrKindError> {
        *self = match raw {
            b"\"Hello\"" => StrKind::Hello,
            b"\"World\"" => StrKind::World,
            _ => {
                return ::std::result::Result::Err(
                    StrKindError::DecodeMismatch(raw.to_vec()),
                );
            }
        };
        ::std::result::Result::Ok(())
    }
}
/// Error returned when text or JSON does not name a `StrKind` constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrKindError {
    /// The token is not the name of any constant.
    UnknownLiteral(::std::string::String),
    /// The JSON input is not a quoted constant name.
    DecodeMismatch(::std::vec::Vec<u8>),
}
impl ::std::fmt::Display for StrKindError {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        match self {
            Self::UnknownLiteral(token) => {
                ::std::write!(f, "unknown StrKind value: {}", token)
            }
            Self::DecodeMismatch(raw) => {
                ::std::write!(
                    f, "failed to parse value {:?} into StrKind",
                    ::std::string::String::from_utf8_lossy(raw)
                )
            }
        }
    }
}
impl ::std::error::Error for StrKindError {}
