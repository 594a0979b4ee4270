pub mod company;
pub mod dedup;
pub mod enrichment;
pub mod hs_code;
pub mod name_filter;

pub use company::{BusinessRole, CompanyRecord, CompanyValidationError, DataType, Source};
pub use dedup::merge_unique;
pub use enrichment::{
    enrich, estimate_export_volume, estimate_import_volume, estimate_volume,
    export_certifications, import_rating, ComplianceRating, ComplianceStatus, EnrichedCompany,
};
pub use hs_code::{HsCode, HsCodeError, ProductCategory};
pub use name_filter::{is_plausible_company_name, normalize_whitespace};
