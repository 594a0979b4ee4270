use crate::hs_code::HsCode;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    #[serde(rename = "DGFT")]
    Dgft,
    TradePortal,
    Synthetic,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Dgft => "DGFT",
            Source::TradePortal => "TradePortal",
            Source::Synthetic => "Synthetic",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Scraped,
    Realistic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BusinessRole {
    Exporter,
    Importer,
}

impl BusinessRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessRole::Exporter => "Exporter",
            BusinessRole::Importer => "Importer",
        }
    }
}

impl fmt::Display for BusinessRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRecord {
    company_name: String,
    source: Source,
    data_type: DataType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    iec_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    state: Option<String>,
    hs_code: HsCode,
    business_type: BusinessRole,
}

impl CompanyRecord {
    pub fn new(
        company_name: &str,
        source: Source,
        data_type: DataType,
        hs_code: HsCode,
        business_type: BusinessRole,
    ) -> Result<Self, CompanyValidationError> {
        let company_name = company_name.trim();
        if company_name.is_empty() {
            return Err(CompanyValidationError::EmptyName);
        }

        Ok(Self {
            company_name: company_name.to_string(),
            source,
            data_type,
            iec_code: None,
            city: None,
            state: None,
            hs_code,
            business_type,
        })
    }

    pub fn with_iec_code(mut self, iec_code: Option<&str>) -> Self {
        self.iec_code = non_blank(iec_code);
        self
    }

    pub fn with_city(mut self, city: Option<&str>) -> Self {
        self.city = non_blank(city);
        self
    }

    pub fn with_state(mut self, state: Option<&str>) -> Self {
        self.state = non_blank(state);
        self
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    /// Case-folded name used for cross-source identity.
    pub fn name_key(&self) -> String {
        self.company_name.to_lowercase()
    }

    pub fn source(&self) -> Source {
        self.source
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn iec_code(&self) -> Option<&str> {
        self.iec_code.as_deref()
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn hs_code(&self) -> &HsCode {
        &self.hs_code
    }

    pub fn business_type(&self) -> BusinessRole {
        self.business_type
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CompanyValidationError {
    #[error("Company name cannot be empty")]
    EmptyName,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hs() -> HsCode {
        HsCode::new("0904").unwrap()
    }

    #[test]
    fn test_name_is_trimmed() {
        let record = CompanyRecord::new(
            "  Acme Exports  ",
            Source::Dgft,
            DataType::Scraped,
            hs(),
            BusinessRole::Exporter,
        )
        .unwrap();

        assert_eq!(record.company_name(), "Acme Exports");
        assert_eq!(record.name_key(), "acme exports");
    }

    #[test]
    fn test_blank_name_rejected() {
        let result = CompanyRecord::new(
            "   ",
            Source::TradePortal,
            DataType::Scraped,
            hs(),
            BusinessRole::Importer,
        );

        assert_eq!(result, Err(CompanyValidationError::EmptyName));
    }

    #[test]
    fn test_blank_optional_fields_are_dropped() {
        let record = CompanyRecord::new(
            "Acme Exports",
            Source::Dgft,
            DataType::Scraped,
            hs(),
            BusinessRole::Exporter,
        )
        .unwrap()
        .with_city(Some(" Mumbai "))
        .with_state(Some(""))
        .with_iec_code(None);

        assert_eq!(record.city(), Some("Mumbai"));
        assert_eq!(record.state(), None);
        assert_eq!(record.iec_code(), None);
    }

    #[test]
    fn test_serializes_camel_case() {
        let record = CompanyRecord::new(
            "Acme Exports",
            Source::Dgft,
            DataType::Scraped,
            hs(),
            BusinessRole::Exporter,
        )
        .unwrap()
        .with_city(Some("Mumbai"));

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["companyName"], "Acme Exports");
        assert_eq!(json["source"], "DGFT");
        assert_eq!(json["dataType"], "scraped");
        assert_eq!(json["hsCode"], "0904");
        assert_eq!(json["businessType"], "Exporter");
        assert_eq!(json["city"], "Mumbai");
        assert!(json.get("state").is_none());
    }
}
