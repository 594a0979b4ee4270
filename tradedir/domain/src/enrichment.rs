//! Derived trade attributes attached to each company after merging.
//!
//! Every value here is a deterministic estimate computed from the record's
//! city, name and merged position; none of it comes from a trade registry.

use crate::company::{BusinessRole, CompanyRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

struct VolumeProfile {
    base: u64,
    step: u64,
    city_increments: [(&'static str, u64); 4],
}

const EXPORT_VOLUME: VolumeProfile = VolumeProfile {
    base: 500_000,
    step: 100_000,
    city_increments: [
        ("mumbai", 2_000_000),
        ("delhi", 1_500_000),
        ("chennai", 1_000_000),
        ("bangalore", 800_000),
    ],
};

const IMPORT_VOLUME: VolumeProfile = VolumeProfile {
    base: 200_000,
    step: 50_000,
    city_increments: [
        ("mumbai", 800_000),
        ("delhi", 600_000),
        ("chennai", 400_000),
        ("bangalore", 300_000),
    ],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplianceStatus {
    Verified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplianceRating {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B+")]
    BPlus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedCompany {
    #[serde(flatten)]
    record: CompanyRecord,
    volume_estimate: u64,
    certifications: Vec<String>,
    compliance_status: ComplianceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    compliance_rating: Option<ComplianceRating>,
    risk_score: u32,
    last_updated: DateTime<Utc>,
}

impl EnrichedCompany {
    pub fn record(&self) -> &CompanyRecord {
        &self.record
    }

    pub fn company_name(&self) -> &str {
        self.record.company_name()
    }

    pub fn volume_estimate(&self) -> u64 {
        self.volume_estimate
    }

    pub fn certifications(&self) -> &[String] {
        &self.certifications
    }

    pub fn compliance_status(&self) -> ComplianceStatus {
        self.compliance_status
    }

    pub fn compliance_rating(&self) -> Option<ComplianceRating> {
        self.compliance_rating
    }

    /// Always zero; no risk model exists yet.
    pub fn risk_score(&self) -> u32 {
        self.risk_score
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }
}

/// Attaches derived fields to an already merged and truncated list.
/// `ordinal` in the volume estimate is each record's index in `records`.
pub fn enrich(
    records: Vec<CompanyRecord>,
    role: BusinessRole,
    now: DateTime<Utc>,
) -> Vec<EnrichedCompany> {
    records
        .into_iter()
        .enumerate()
        .map(|(ordinal, record)| {
            let volume_estimate = estimate_volume(role, record.city(), ordinal);
            let (certifications, compliance_rating) = match role {
                BusinessRole::Exporter => (export_certifications(record.company_name()), None),
                BusinessRole::Importer => (Vec::new(), Some(import_rating(record.city()))),
            };

            EnrichedCompany {
                record,
                volume_estimate,
                certifications,
                compliance_status: ComplianceStatus::Verified,
                compliance_rating,
                risk_score: 0,
                last_updated: now,
            }
        })
        .collect()
}

pub fn estimate_volume(role: BusinessRole, city: Option<&str>, ordinal: usize) -> u64 {
    let profile = match role {
        BusinessRole::Exporter => &EXPORT_VOLUME,
        BusinessRole::Importer => &IMPORT_VOLUME,
    };

    let city = city.unwrap_or_default().to_lowercase();
    let city_bonus: u64 = profile
        .city_increments
        .iter()
        .filter(|(name, _)| city.contains(name))
        .map(|(_, increment)| increment)
        .sum();

    profile.base + city_bonus + (ordinal as u64) * profile.step
}

pub fn estimate_export_volume(city: Option<&str>, ordinal: usize) -> u64 {
    estimate_volume(BusinessRole::Exporter, city, ordinal)
}

pub fn estimate_import_volume(city: Option<&str>, ordinal: usize) -> u64 {
    estimate_volume(BusinessRole::Importer, city, ordinal)
}

pub fn export_certifications(company_name: &str) -> Vec<String> {
    let name = company_name.to_lowercase();
    let mut certifications = vec!["FSSAI".to_string()];

    if name.contains("organic") {
        certifications.push("Organic".to_string());
        certifications.push("NPOP".to_string());
    }
    if name.contains("spice") {
        certifications.push("HACCP".to_string());
    }

    certifications
}

pub fn import_rating(city: Option<&str>) -> ComplianceRating {
    let city = city.unwrap_or_default().to_lowercase();

    if city.contains("mumbai") || city.contains("delhi") {
        ComplianceRating::APlus
    } else if city.contains("chennai") || city.contains("bangalore") {
        ComplianceRating::A
    } else {
        ComplianceRating::BPlus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DataType, HsCode, Source};
    use chrono::TimeZone;

    fn record(name: &str, city: Option<&str>, role: BusinessRole) -> CompanyRecord {
        CompanyRecord::new(
            name,
            Source::Synthetic,
            DataType::Realistic,
            HsCode::new("0904").unwrap(),
            role,
        )
        .unwrap()
        .with_city(city)
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_export_volume_mumbai_first() {
        assert_eq!(estimate_export_volume(Some("Mumbai"), 0), 2_500_000);
    }

    #[test]
    fn test_export_volume_adds_ordinal_step() {
        assert_eq!(estimate_export_volume(Some("New Delhi"), 3), 500_000 + 1_500_000 + 300_000);
        assert_eq!(estimate_export_volume(Some("Kochi"), 2), 700_000);
        assert_eq!(estimate_export_volume(None, 0), 500_000);
    }

    #[test]
    fn test_import_volume() {
        assert_eq!(estimate_import_volume(Some("CHENNAI"), 0), 600_000);
        assert_eq!(estimate_import_volume(Some("Bangalore"), 4), 200_000 + 300_000 + 200_000);
    }

    #[test]
    fn test_every_recognized_city_contributes() {
        assert_eq!(
            estimate_export_volume(Some("Mumbai / Delhi"), 0),
            500_000 + 2_000_000 + 1_500_000
        );
    }

    #[test]
    fn test_export_certifications() {
        assert_eq!(export_certifications("Acme Traders"), vec!["FSSAI"]);
        assert_eq!(
            export_certifications("Organic Spice Farms"),
            vec!["FSSAI", "Organic", "NPOP", "HACCP"]
        );
        assert_eq!(export_certifications("Kerala SPICES Ltd"), vec!["FSSAI", "HACCP"]);
    }

    #[test]
    fn test_import_rating() {
        assert_eq!(import_rating(Some("Mumbai")), ComplianceRating::APlus);
        assert_eq!(import_rating(Some("New Delhi")), ComplianceRating::APlus);
        assert_eq!(import_rating(Some("Chennai")), ComplianceRating::A);
        assert_eq!(import_rating(Some("Bangalore")), ComplianceRating::A);
        assert_eq!(import_rating(Some("Kolkata")), ComplianceRating::BPlus);
        assert_eq!(import_rating(None), ComplianceRating::BPlus);
    }

    #[test]
    fn test_enrich_exporters() {
        let enriched = enrich(
            vec![
                record("Organic Spice Farms", Some("Mumbai"), BusinessRole::Exporter),
                record("Acme Traders", Some("Kochi"), BusinessRole::Exporter),
            ],
            BusinessRole::Exporter,
            fixed_now(),
        );

        assert_eq!(enriched[0].volume_estimate(), 2_500_000);
        assert_eq!(enriched[1].volume_estimate(), 600_000);
        assert_eq!(enriched[1].certifications(), ["FSSAI".to_string()]);
        assert!(enriched.iter().all(|c| c.compliance_rating().is_none()));
        assert!(enriched
            .iter()
            .all(|c| c.compliance_status() == ComplianceStatus::Verified && c.risk_score() == 0));
    }

    #[test]
    fn test_enrich_importers_get_rating_not_certifications() {
        let enriched = enrich(
            vec![record("Global Imports", Some("Chennai"), BusinessRole::Importer)],
            BusinessRole::Importer,
            fixed_now(),
        );

        assert_eq!(enriched[0].compliance_rating(), Some(ComplianceRating::A));
        assert!(enriched[0].certifications().is_empty());
        assert_eq!(enriched[0].last_updated(), fixed_now());
    }

    #[test]
    fn test_enrich_is_pure_apart_from_timestamp() {
        let input = vec![
            record("Organic Spice Farms", Some("Mumbai"), BusinessRole::Exporter),
            record("Delhi Masala House", Some("Delhi"), BusinessRole::Exporter),
        ];

        let first = enrich(input.clone(), BusinessRole::Exporter, fixed_now());
        let second = enrich(input, BusinessRole::Exporter, Utc::now());

        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.volume_estimate(), b.volume_estimate());
            assert_eq!(a.certifications(), b.certifications());
            assert_eq!(a.compliance_rating(), b.compliance_rating());
            assert_eq!(a.record(), b.record());
        }
    }

    #[test]
    fn test_serialized_shape() {
        let enriched = enrich(
            vec![record("Global Imports", Some("Mumbai"), BusinessRole::Importer)],
            BusinessRole::Importer,
            fixed_now(),
        );

        let json = serde_json::to_value(&enriched[0]).unwrap();
        assert_eq!(json["companyName"], "Global Imports");
        assert_eq!(json["volumeEstimate"], 1_000_000);
        assert_eq!(json["complianceStatus"], "Verified");
        assert_eq!(json["complianceRating"], "A+");
        assert_eq!(json["riskScore"], 0);
        assert!(json["lastUpdated"].is_string());
    }
}
