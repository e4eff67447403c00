// Code generated by "enumerator -i src/example/mod.rs -t Kind"; DO NOT EDIT.
// An "index out of bounds" error in the `const _` block below means the constants of `Kind` changed since this file was generated; re-run the command.

impl ::std::fmt::Display for Kind {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let k = self.0;
        match k {
            0 => f.write_str("Kind1"),
            1 => f.write_str("Kind2"),
            _ => ::std::write!(f, "Kind({})", k),
        }
    }
}
impl Kind {
    /// Returns the rendered name as bytes.
    pub fn bytes(&self) -> ::std::vec::Vec<u8> {
        let k = self.0;
        match k {
            0 => ::std::vec![b'K', b'i', b'n', b'd', b'1'],
            1 => ::std::vec![b'K', b'i', b'n', b'd', b'2'],
            _ => ::std::format!("Kind({})", k).into_bytes(),
        }
    }
}
impl Kind {
    /// Returns whether the value is one of the declared constants.
    pub fn is_defined(&self) -> bool {
        let k = self.0;
        ::std::matches!(k, 0 | 1)
    }
}
impl ::std::str::FromStr for Kind {
    type Err = KindError;
    fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
        match s {
            "Kind1" => ::std::result::Result::Ok(Kind1),
            "Kind2" => ::std::result::Result::Ok(Kind2),
            _ => ::std::result::Result::Err(KindError::UnknownLiteral(s.to_string())),
        }
    }
}
impl Kind {
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
                    "expected a Kind value",
                ),
            );
        }
        let text = ::std::str::from_utf8(&token)
            .map_err(|e| ::std::io::Error::new(::std::io::ErrorKind::InvalidData, e))?;
        *self = text
            .parse()
            .map_err(|e: KindError| ::std::io::Error::new(
                ::std::io::ErrorKind::InvalidData,
                e,
            ))?;
        ::std::result::Result::Ok(())
    }
}
impl Kind {
    /// Returns the next declared constant, wrapping from the last back to the first.
    ///
    /// Values that are not declared constants map to the first constant.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// assert_eq!(Kind2.next(), Kind1);
    /// ```
    pub fn next(&self) -> Self {
        let k = self.0;
        match k {
            0 => Kind2,
            1 => Kind1,
            _ => Kind1,
        }
    }
}
const _: () = {
    let x = [(); 1];
    let _ = x[((Kind1.0 - (0)) != 0) as usize];
    let _ = x[((Kind2.0 - (1)) != 0) as usize];
};
impl Kind {
    /// Encodes the value as a JSON string.
    pub fn encode_json(&self) -> ::std::vec::Vec<u8> {
        let mut raw = ::std::vec::Vec::new();
        raw.push(b'"');
        raw.extend_from_slice(&self.bytes());
        raw.push(b'"');
        raw
    }
}
impl Kind {
    /// Decodes a JSON string produced by [`Self::encode_json`].
    pub fn decode_json(&mut self, raw: &[u8]) -> ::std::result::Result<(), KindError> {
        *self = match raw {
            b"\"Kind1\"" => Kind1,
            b"\"Kind2\"" => Kind2,
            _ => {
                return ::std::result::Result::Err(
                    KindError::DecodeMismatch(raw.to_vec()),
                );
            }
        };
        ::std::result::Result::Ok(())
    }
}
/// Error returned when text or JSON does not name a `Kind` constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KindError {
    /// The token is not the name of any constant.
    UnknownLiteral(::std::string::String),
    /// The JSON input is not a quoted constant name.
    DecodeMismatch(::std::vec::Vec<u8>),
}
impl ::std::fmt::Display for KindError {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        match self {
            Self::UnknownLiteral(token) => {
                ::std::write!(f, "unknown Kind value: {}", token)
            }
            Self::DecodeMismatch(raw) => {
                ::std::write!(
                    f, "failed to parse value {:?} into Kind",
                    ::std::string::String::from_utf8_lossy(raw)
                )
            }
        }
    }
}
impl ::std::error::Error for KindError {}
