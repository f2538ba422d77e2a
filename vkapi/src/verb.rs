use std::fmt;
use std::str::FromStr;

use crate::Error;

/// HTTP verb used to dispatch a method call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verb {
    /// Parameters travel in the URL query string.
    Get,
    /// Parameters travel in a form-encoded body.
    Post,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("get") {
            Ok(Verb::Get)
        } else if s.eq_ignore_ascii_case("post") {
            Ok(Verb::Post)
        } else {
            Err(Error::InvalidVerb(s.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_verbs() {
        assert_eq!("GET".parse::<Verb>().unwrap(), Verb::Get);
        assert_eq!("post".parse::<Verb>().unwrap(), Verb::Post);
        assert_eq!("Post".parse::<Verb>().unwrap(), Verb::Post);
    }

    #[test]
    fn rejects_other_verbs() {
        for s in ["PUT", "DELETE", "", "0", "GETX"] {
            assert!(matches!(s.parse::<Verb>(), Err(Error::InvalidVerb(_))), "{}", s);
        }
    }

    #[test]
    fn display_round_trips() {
        assert_eq!(Verb::Post.to_string().parse::<Verb>().unwrap(), Verb::Post);
    }
}
