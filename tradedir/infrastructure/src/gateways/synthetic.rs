//! Deterministic placeholder directory.
//!
//! These rosters are fixed sample data standing in for a trade registry feed.
//! They are not sourced from any registry and exist so the aggregator always
//! has a non-empty, reproducible last-priority source.

use shaku::Component;
use tradedir_application::SyntheticGenerator;
use tradedir_domain::{BusinessRole, CompanyRecord, DataType, HsCode, ProductCategory, Source};

const GENERAL_EXPORTER_COUNT: usize = 5;
const IMPORTER_COUNT: usize = 8;

struct RosterEntry {
    name: &'static str,
    city: &'static str,
    state: &'static str,
}

const fn entry(name: &'static str, city: &'static str, state: &'static str) -> RosterEntry {
    RosterEntry { name, city, state }
}

static SPICE_EXPORTERS: [RosterEntry; 6] = [
    entry("Kerala Spices Exports Ltd", "Kochi", "Kerala"),
    entry("Malabar Organic Spice Company", "Kozhikode", "Kerala"),
    entry("Mumbai Masala Traders", "Mumbai", "Maharashtra"),
    entry("Guntur Chilli Exporters", "Guntur", "Andhra Pradesh"),
    entry("Idukki Cardamom Estates", "Idukki", "Kerala"),
    entry("Delhi Spice Bazaar Exports", "Delhi", "Delhi"),
];

static TEXTILE_EXPORTERS: [RosterEntry; 5] = [
    entry("Tiruppur Knitwear Exports", "Tiruppur", "Tamil Nadu"),
    entry("Surat Silk Mills", "Surat", "Gujarat"),
    entry("Ludhiana Woollen Exports", "Ludhiana", "Punjab"),
    entry("Mumbai Cotton Corporation", "Mumbai", "Maharashtra"),
    entry("Panipat Handloom House", "Panipat", "Haryana"),
];

static ELECTRONICS_EXPORTERS: [RosterEntry; 5] = [
    entry("Bangalore Circuit Systems", "Bangalore", "Karnataka"),
    entry("Noida Electronics Manufacturing", "Noida", "Uttar Pradesh"),
    entry("Chennai Components Ltd", "Chennai", "Tamil Nadu"),
    entry("Pune Power Devices", "Pune", "Maharashtra"),
    entry("Hyderabad Semiconductor Works", "Hyderabad", "Telangana"),
];

static PHARMA_EXPORTERS: [RosterEntry; 5] = [
    entry("Hyderabad Bulk Drugs Ltd", "Hyderabad", "Telangana"),
    entry("Ahmedabad Pharma Exports", "Ahmedabad", "Gujarat"),
    entry("Mumbai Generics Corporation", "Mumbai", "Maharashtra"),
    entry("Baddi Healthcare Pvt Ltd", "Baddi", "Himachal Pradesh"),
    entry("Vizag Active Ingredients", "Visakhapatnam", "Andhra Pradesh"),
];

static AGRICULTURE_EXPORTERS: [RosterEntry; 5] = [
    entry("Punjab Basmati Exports", "Amritsar", "Punjab"),
    entry("Nashik Grape Growers Cooperative", "Nashik", "Maharashtra"),
    entry("Karnal Rice Mills", "Karnal", "Haryana"),
    entry("Organic Farms of Sikkim", "Gangtok", "Sikkim"),
    entry("Andhra Marine Produce", "Kakinada", "Andhra Pradesh"),
];

static GENERIC_EXPORTERS: [RosterEntry; 8] = [
    entry("Bharat Export House Ltd", "Mumbai", "Maharashtra"),
    entry("Hindustan Overseas Trading Co", "Delhi", "Delhi"),
    entry("Coromandel Global Exports", "Chennai", "Tamil Nadu"),
    entry("Deccan International Ltd", "Hyderabad", "Telangana"),
    entry("Western India Exports Corporation", "Ahmedabad", "Gujarat"),
    entry("Eastern Trade Links", "Kolkata", "West Bengal"),
    entry("Garden City Exports", "Bangalore", "Karnataka"),
    entry("Konkan Commercial Exports", "Panaji", "Goa"),
];

static GENERIC_IMPORTERS: [RosterEntry; 10] = [
    entry("Gateway Imports Pvt Ltd", "Mumbai", "Maharashtra"),
    entry("Capital Trading Company", "Delhi", "Delhi"),
    entry("Marina Import House", "Chennai", "Tamil Nadu"),
    entry("Silicon Plateau Importers", "Bangalore", "Karnataka"),
    entry("Hooghly Trade Imports", "Kolkata", "West Bengal"),
    entry("Sabarmati Trading Corporation", "Ahmedabad", "Gujarat"),
    entry("Charminar Global Imports", "Hyderabad", "Telangana"),
    entry("Kandla Port Traders", "Gandhidham", "Gujarat"),
    entry("Cochin Harbour Importers", "Kochi", "Kerala"),
    entry("Vizag Sea Trade", "Visakhapatnam", "Andhra Pradesh"),
];

#[derive(Component)]
#[shaku(interface = SyntheticGenerator)]
pub struct RosterSyntheticGenerator {}

impl RosterSyntheticGenerator {
    pub fn new() -> Self {
        Self {}
    }

    fn exporter_roster(category: ProductCategory) -> &'static [RosterEntry] {
        match category {
            ProductCategory::Spices => &SPICE_EXPORTERS,
            ProductCategory::Textiles => &TEXTILE_EXPORTERS,
            ProductCategory::Electronics => &ELECTRONICS_EXPORTERS,
            ProductCategory::Pharmaceuticals => &PHARMA_EXPORTERS,
            ProductCategory::Agriculture => &AGRICULTURE_EXPORTERS,
            ProductCategory::General => &GENERIC_EXPORTERS[..GENERAL_EXPORTER_COUNT],
        }
    }
}

impl Default for RosterSyntheticGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntheticGenerator for RosterSyntheticGenerator {
    fn generate(&self, hs_code: &HsCode, role: BusinessRole) -> Vec<CompanyRecord> {
        match role {
            BusinessRole::Exporter => {
                let category = hs_code.category();
                Self::exporter_roster(category)
                    .iter()
                    .enumerate()
                    .filter_map(|(position, entry)| {
                        let iec = synthetic_iec(hs_code, category, position);
                        to_record(entry, hs_code, role).map(|r| r.with_iec_code(Some(&iec)))
                    })
                    .collect()
            }
            BusinessRole::Importer => GENERIC_IMPORTERS
                .iter()
                .take(IMPORTER_COUNT)
                .filter_map(|entry| to_record(entry, hs_code, role))
                .collect(),
        }
    }
}

fn to_record(entry: &RosterEntry, hs_code: &HsCode, role: BusinessRole) -> Option<CompanyRecord> {
    CompanyRecord::new(
        entry.name,
        Source::Synthetic,
        DataType::Realistic,
        hs_code.clone(),
        role,
    )
    .ok()
    .map(|record| {
        record
            .with_city(Some(entry.city))
            .with_state(Some(entry.state))
    })
}

/// Ten-digit IEC-shaped identifier: four code digits (zero padded), the
/// category number, then the one-based roster position.
fn synthetic_iec(hs_code: &HsCode, category: ProductCategory, position: usize) -> String {
    let mut digits: String = hs_code
        .as_str()
        .chars()
        .filter(char::is_ascii_digit)
        .take(4)
        .collect();
    while digits.len() < 4 {
        digits.push('0');
    }

    format!("{}{:02}{:04}", digits, category.code(), position + 1)
}
