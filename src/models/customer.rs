use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub is_vip: bool,
}

impl Customer {
    pub fn new(name: &str, is_vip: bool) -> Self {
        Self {
            name: name.to_string(),
            is_vip,
        }
    }
}
