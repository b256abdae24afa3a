use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub email: String,
    pub display_name: String,
    pub domain: String,
}

impl User {
    pub fn new(
        email: impl Into<String>,
        display_name: impl Into<String>,
        domain: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            display_name: display_name.into(),
            domain: domain.into(),
        }
    }
}
