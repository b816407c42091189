use serde::Serialize;

use super::health::SERVICE_VERSION;

// Existing monitors match on this exact string.
pub const FRAMEWORK: &str = "Django 5.2.7";

/// Body of `GET /info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoResponse {
    pub name: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub framework: &'static str,
}

impl InfoResponse {
    pub fn current() -> Self {
        Self {
            name: "Dokploy Django Template",
            description: "Minimal Django template for Dokploy deployment",
            version: SERVICE_VERSION,
            framework: FRAMEWORK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_in_wire_order() {
        let json = serde_json::to_string(&InfoResponse::current()).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Dokploy Django Template","description":"Minimal Django template for Dokploy deployment","version":"1.0.0","framework":"Django 5.2.7"}"#
        );
    }
}
