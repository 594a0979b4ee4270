use tradedir_application::{ParseContext, ParseError, RecordParser};
use tradedir_domain::{CompanyRecord, Source};

use super::{TableExtractor, TableLayout};

/// Reads Indian Trade Portal search results, which render either as
/// company cards or as a plain results table.
pub struct TradePortalParser {
    extractor: TableExtractor,
}

impl TradePortalParser {
    pub fn new(layout: TableLayout) -> Self {
        Self {
            extractor: TableExtractor::new(Source::TradePortal, layout),
        }
    }

    pub fn default_layout() -> TableLayout {
        TableLayout {
            exporter_rows: vec![
                ".exporter-list .company-item".to_string(),
                "table.exporters tbody tr".to_string(),
                ".company-list .company-item".to_string(),
                "table.result tbody tr".to_string(),
            ],
            importer_rows: vec![
                ".importer-list .company-item".to_string(),
                "table.importers tbody tr".to_string(),
                ".company-list .company-item".to_string(),
                "table.result tbody tr".to_string(),
            ],
            name_cell: ".company-name, td:nth-child(1)".to_string(),
            iec_cell: None,
            city_cell: Some(".company-city, td:nth-child(2)".to_string()),
            state_cell: Some(".company-state, td:nth-child(3)".to_string()),
        }
    }
}

impl Default for TradePortalParser {
    fn default() -> Self {
        Self::new(Self::default_layout())
    }
}

impl RecordParser for TradePortalParser {
    fn source(&self) -> Source {
        Source::TradePortal
    }

    fn parse(
        &self,
        body: &str,
        context: &ParseContext<'_>,
    ) -> Result<Vec<CompanyRecord>, ParseError> {
        self.extractor.extract(body, context)
    }
}
