use serde::{Deserialize, Serialize};

/// Contact details rendered in the hero social row and the contact section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub whatsapp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

impl ContactInfo {
    /// Digits-only phone number, the form `wa.me` expects.
    pub fn whatsapp_digits(&self) -> String {
        self.whatsapp
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect()
    }

    pub fn whatsapp_link(&self) -> String {
        format!("https://wa.me/{}", self.whatsapp_digits())
    }

    pub fn mailto_link(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_number_is_stripped_to_digits() {
        let info = ContactInfo {
            email: "dev@example.com".to_string(),
            whatsapp: "+57 313-539-9868".to_string(),
            github: None,
            linkedin: None,
            twitter: None,
            instagram: None,
        };
        assert_eq!(info.whatsapp_digits(), "573135399868");
        assert_eq!(info.whatsapp_link(), "https://wa.me/573135399868");
        assert_eq!(info.mailto_link(), "mailto:dev@example.com");
    }
}
