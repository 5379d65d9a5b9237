//! Contact card payloads.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A contact card. A `contacts` message carries one or more of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: ContactName,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<ContactAddress>,
    /// Serialized as `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<ContactEmail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org: Option<ContactOrg>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phones: Vec<ContactPhone>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<ContactUrl>,
}

impl Contact {
    /// Create a contact with only a name block.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            addresses: Vec::new(),
            birthday: None,
            emails: Vec::new(),
            org: None,
            phones: Vec::new(),
            urls: Vec::new(),
        }
    }

    pub fn with_birthday(mut self, birthday: NaiveDate) -> Self {
        self.birthday = Some(birthday);
        self
    }

    pub fn with_org(mut self, org: ContactOrg) -> Self {
        self.org = Some(org);
        self
    }

    pub fn with_address(mut self, address: ContactAddress) -> Self {
        self.addresses.push(address);
        self
    }

    pub fn with_email(mut self, email: ContactEmail) -> Self {
        self.emails.push(email);
        self
    }

    pub fn with_phone(mut self, phone: ContactPhone) -> Self {
        self.phones.push(phone);
        self
    }

    pub fn with_url(mut self, url: ContactUrl) -> Self {
        self.urls.push(url);
        self
    }
}

/// Name block of a contact card. Every part is sent, even when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactName {
    pub formatted_name: String,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    pub suffix: String,
    pub prefix: String,
}

impl ContactName {
    /// Build a name from first and last name, deriving `formatted_name`.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let formatted_name = match (first_name.is_empty(), last_name.is_empty()) {
            (false, false) => format!("{} {}", first_name, last_name),
            (false, true) => first_name.clone(),
            _ => last_name.clone(),
        };
        Self {
            formatted_name,
            first_name,
            last_name,
            ..Default::default()
        }
    }
}

/// Postal address on a contact card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    /// Label such as `HOME` or `WORK`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEmail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactOrg {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPhone {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// WhatsApp id, enables the "Message" button on the card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wa_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactUrl {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}
