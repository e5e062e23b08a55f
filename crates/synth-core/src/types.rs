//! Field type catalogue for synthgen.
//!
//! This module defines `FieldType`, the closed set of semantic kinds a schema
//! field can declare. The field type decides which generator runs for the
//! column; the three custom kinds (`list`, `pattern`, `template`) additionally
//! read their parameters from the field's `FieldConfig`.
//!
//! # YAML Format
//!
//! Field types are written by their camelCase name:
//! ```yaml
//! type: firstName
//! type: bloodPressure
//! type: pattern
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Broad grouping of field types, used for listing and documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldCategory {
    Personal,
    Location,
    Business,
    Numeric,
    Internet,
    Temporal,
    Text,
    Health,
    Custom,
}

impl FieldCategory {
    /// Lowercase display name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Location => "location",
            Self::Business => "business",
            Self::Numeric => "numeric",
            Self::Internet => "internet",
            Self::Temporal => "temporal",
            Self::Text => "text",
            Self::Health => "health",
            Self::Custom => "custom",
        }
    }
}

/// Error returned when a string does not name a known field type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown field type: '{0}'")]
pub struct UnknownFieldType(pub String);

macro_rules! define_field_types {
    ( $( ($variant:ident, $name:literal, $category:ident) ),* $(,)? ) => {
        /// Semantic kind of a generated column.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum FieldType {
            $( $variant, )*
        }

        impl FieldType {
            /// Every field type, in catalogue order.
            pub const ALL: &'static [FieldType] = &[ $( FieldType::$variant, )* ];

            /// The name used in schemas and `{{token}}` templates.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $name, )*
                }
            }

            /// The category this type belongs to.
            pub fn category(&self) -> FieldCategory {
                match self {
                    $( Self::$variant => FieldCategory::$category, )*
                }
            }

            /// Look up a field type by its schema name.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $( $name => Some(Self::$variant), )*
                    _ => None,
                }
            }
        }
    };
}

define_field_types! {
    // Personal
    (FirstName, "firstName", Personal),
    (LastName, "lastName", Personal),
    (FullName, "fullName", Personal),
    (Email, "email", Personal),
    (Phone, "phone", Personal),
    (Username, "username", Personal),
    (Gender, "gender", Personal),
    (DateOfBirth, "dateOfBirth", Personal),
    (Age, "age", Personal),
    (Ssn, "ssn", Personal),

    // Location
    (Address, "address", Location),
    (StreetAddress, "streetAddress", Location),
    (City, "city", Location),
    (State, "state", Location),
    (ZipCode, "zipCode", Location),
    (Country, "country", Location),
    (Latitude, "latitude", Location),
    (Longitude, "longitude", Location),

    // Business
    (Company, "company", Business),
    (JobTitle, "jobTitle", Business),
    (Department, "department", Business),
    (ProductName, "productName", Business),
    (Price, "price", Business),
    (Currency, "currency", Business),
    (Sku, "sku", Business),
    (OrderStatus, "orderStatus", Business),
    (AccountNumber, "accountNumber", Business),
    (CreditCard, "creditCard", Business),

    // Numeric
    (Integer, "integer", Numeric),
    (Float, "float", Numeric),
    (Boolean, "boolean", Numeric),
    (Percentage, "percentage", Numeric),
    (Rating, "rating", Numeric),

    // Internet
    (Uuid, "uuid", Internet),
    (Url, "url", Internet),
    (Domain, "domain", Internet),
    (IpAddress, "ipAddress", Internet),
    (MacAddress, "macAddress", Internet),
    (HexColor, "hexColor", Internet),

    // Temporal
    (Date, "date", Temporal),
    (Timestamp, "timestamp", Temporal),
    (Time, "time", Temporal),

    // Text
    (Word, "word", Text),
    (Sentence, "sentence", Text),
    (Paragraph, "paragraph", Text),
    (Title, "title", Text),

    // Health
    (Mrn, "mrn", Health),
    (Npi, "npi", Health),
    (Icd10Code, "icd10Code", Health),
    (Diagnosis, "diagnosis", Health),
    (Medication, "medication", Health),
    (Dosage, "dosage", Health),
    (BloodType, "bloodType", Health),
    (BloodPressure, "bloodPressure", Health),
    (HeartRate, "heartRate", Health),
    (Temperature, "temperature", Health),
    (Spo2, "spo2", Health),
    (Bmi, "bmi", Health),
    (Height, "height", Health),
    (Weight, "weight", Health),
    (Allergy, "allergy", Health),
    (InsuranceProvider, "insuranceProvider", Health),
    (ClaimNumber, "claimNumber", Health),
    (ClaimStatus, "claimStatus", Health),
    (ClaimAmount, "claimAmount", Health),
    (RxNumber, "rxNumber", Health),
    (LabOrderId, "labOrderId", Health),
    (LabTest, "labTest", Health),
    (CptCode, "cptCode", Health),
    (Provider, "provider", Health),

    // Custom kinds (parameterized by FieldConfig)
    (List, "list", Custom),
    (Pattern, "pattern", Custom),
    (Template, "template", Custom),
}

impl FieldType {
    /// Whether this is one of the user-parameterized custom kinds.
    pub fn is_custom(&self) -> bool {
        self.category() == FieldCategory::Custom
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = UnknownFieldType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownFieldType(s.to_string()))
    }
}

impl Serialize for FieldType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FieldType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{Error, Visitor};

        struct FieldTypeVisitor;

        impl Visitor<'_> for FieldTypeVisitor {
            type Value = FieldType;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a field type name such as \"firstName\" or \"pattern\"")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: Error,
            {
                FieldType::from_name(value)
                    .ok_or_else(|| E::custom(format!("unknown field type: {value}")))
            }
        }

        deserializer.deserialize_str(FieldTypeVisitor)
    }
}
