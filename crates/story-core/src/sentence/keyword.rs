use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Categoría de una oración y, a la vez, de un handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Keyword {
    Given,
    When,
    Then,
}

impl Keyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Given => "Given",
            Keyword::When => "When",
            Keyword::Then => "Then",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Keyword {
    type Err = ();

    // Sensible a mayúsculas: "given" no es una keyword válida.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Given" => Ok(Keyword::Given),
            "When" => Ok(Keyword::When),
            "Then" => Ok(Keyword::Then),
            _ => Err(()),
        }
    }
}
