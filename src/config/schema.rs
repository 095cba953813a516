use serde::{Deserialize, Serialize};

use crate::input::FormInput;

#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scenarios: Vec<Scenario>,
}

/// A named what-if case, holding raw form values as typed by the user.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub form: FormInput,
}
