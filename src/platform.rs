use std::fmt;

/// Execution capability selected at startup. `Browser` has the persistent
/// store and outbound network available; on `Headless` the bootstrap is a
/// no-op and the key holder stays unset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Platform {
    #[default]
    Browser,
    Headless,
}

impl Platform {
    pub fn detect(headless: bool) -> Self {
        if headless {
            Self::Headless
        } else {
            Self::Browser
        }
    }

    pub fn is_headless(&self) -> bool {
        matches!(self, Self::Headless)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Browser => write!(f, "browser"),
            Platform::Headless => write!(f, "headless"),
        }
    }
}
