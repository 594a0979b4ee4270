use tradedir_application::{ParseContext, ParseError, RecordParser};
use tradedir_domain::{CompanyRecord, Source};

use super::{TableExtractor, TableLayout};

/// Reads the DGFT portal's IEC directory tables. Exporters and importers are
/// served from the same page and only differ in which table holds them.
pub struct DgftParser {
    extractor: TableExtractor,
}

impl DgftParser {
    pub fn new(layout: TableLayout) -> Self {
        Self {
            extractor: TableExtractor::new(Source::Dgft, layout),
        }
    }

    pub fn default_layout() -> TableLayout {
        TableLayout {
            exporter_rows: vec![
                "table#exporterList tbody tr".to_string(),
                "table.exporter-list tr".to_string(),
                ".exporter-details tr".to_string(),
                "table.table tbody tr".to_string(),
            ],
            importer_rows: vec![
                "table#importerList tbody tr".to_string(),
                "table.importer-list tr".to_string(),
                ".importer-details tr".to_string(),
                "table.table tbody tr".to_string(),
            ],
            name_cell: "td:nth-child(1)".to_string(),
            iec_cell: Some("td:nth-child(2)".to_string()),
            city_cell: Some("td:nth-child(3)".to_string()),
            state_cell: Some("td:nth-child(4)".to_string()),
        }
    }
}

impl Default for DgftParser {
    fn default() -> Self {
        Self::new(Self::default_layout())
    }
}

impl RecordParser for DgftParser {
    fn source(&self) -> Source {
        Source::Dgft
    }

    fn parse(
        &self,
        body: &str,
        context: &ParseContext<'_>,
    ) -> Result<Vec<CompanyRecord>, ParseError> {
        self.extractor.extract(body, context)
    }
}
