//! Address request messages.
//!
//! The accepted address fields differ per country, so the parameters are an
//! enum tagged by `country`. Each arm only admits the value and
//! validation-error keys of its own region.

use serde::{Deserialize, Serialize};

use crate::interactive::InteractiveBody;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractiveAddress {
    pub body: InteractiveBody,
    pub action: AddressAction,
}

impl InteractiveAddress {
    pub fn new(body: impl Into<String>, parameters: AddressParameters) -> Self {
        Self {
            body: InteractiveBody::new(body),
            action: AddressAction::AddressMessage { parameters },
        }
    }

    /// Ask for an Indian address.
    pub fn india(body: impl Into<String>, parameters: IndiaAddressParameters) -> Self {
        Self::new(body, AddressParameters::India(parameters))
    }

    /// Ask for a Singaporean address.
    pub fn singapore(body: impl Into<String>, parameters: SingaporeAddressParameters) -> Self {
        Self::new(body, AddressParameters::Singapore(parameters))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum AddressAction {
    AddressMessage { parameters: AddressParameters },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "country")]
pub enum AddressParameters {
    #[serde(rename = "IN")]
    India(IndiaAddressParameters),
    #[serde(rename = "SG")]
    Singapore(SingaporeAddressParameters),
}

impl AddressParameters {
    /// ISO country code sent as `country`.
    pub fn country(&self) -> &'static str {
        match self {
            Self::India(_) => "IN",
            Self::Singapore(_) => "SG",
        }
    }
}

/// Prefill, validation feedback and saved addresses for one region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionAddressParameters<V, E> {
    /// Values prefilled in the address form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<V>,
    /// Per-field error messages shown after a failed submission.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<E>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub saved_addresses: Vec<SavedAddress<V>>,
}

pub type IndiaAddressParameters = RegionAddressParameters<IndiaAddress, IndiaValidationErrors>;
pub type SingaporeAddressParameters =
    RegionAddressParameters<SingaporeAddress, SingaporeValidationErrors>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedAddress<V> {
    pub id: String,
    pub value: V,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndiaAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_pin_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landmark_area: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

/// One message per Indian address field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndiaValidationErrors {
    pub name: String,
    pub phone_number: String,
    pub in_pin_code: String,
    pub floor_number: String,
    pub building_name: String,
    pub address: String,
    pub landmark_area: String,
    pub city: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingaporeAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sg_pin_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

/// One message per Singaporean address field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingaporeValidationErrors {
    pub name: String,
    pub phone_number: String,
    pub sg_pin_code: String,
    pub address: String,
    pub unit_number: String,
    pub city: String,
}
