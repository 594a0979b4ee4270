pub mod dgft;
pub mod trade_portal;

pub use dgft::DgftParser;
pub use trade_portal::TradePortalParser;

use once_cell::sync::OnceCell;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;
use tradedir_application::{ParseContext, ParseError};
use tradedir_domain::{
    is_plausible_company_name, normalize_whitespace, BusinessRole, CompanyRecord, DataType, Source,
};

/// CSS selectors describing where a directory page keeps its listings.
///
/// Row selectors are tried in order and the first one matching any element
/// wins. Cell selectors are evaluated relative to each row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    pub exporter_rows: Vec<String>,
    pub importer_rows: Vec<String>,
    pub name_cell: String,
    pub iec_cell: Option<String>,
    pub city_cell: Option<String>,
    pub state_cell: Option<String>,
}

impl TableLayout {
    fn rows_for(&self, role: BusinessRole) -> &[String] {
        match role {
            BusinessRole::Exporter => &self.exporter_rows,
            BusinessRole::Importer => &self.importer_rows,
        }
    }
}

struct CompiledLayout {
    exporter_rows: Vec<Selector>,
    importer_rows: Vec<Selector>,
    name_cell: Selector,
    iec_cell: Option<Selector>,
    city_cell: Option<Selector>,
    state_cell: Option<Selector>,
}

impl CompiledLayout {
    fn compile(origin: Source, layout: &TableLayout) -> Result<Self, ParseError> {
        let compile_all = |selectors: &[String]| -> Result<Vec<Selector>, ParseError> {
            selectors.iter().map(|s| compile(origin, s)).collect()
        };
        let compile_opt = |selector: &Option<String>| -> Result<Option<Selector>, ParseError> {
            selector.as_deref().map(|s| compile(origin, s)).transpose()
        };

        Ok(Self {
            exporter_rows: compile_all(layout.rows_for(BusinessRole::Exporter))?,
            importer_rows: compile_all(layout.rows_for(BusinessRole::Importer))?,
            name_cell: compile(origin, &layout.name_cell)?,
            iec_cell: compile_opt(&layout.iec_cell)?,
            city_cell: compile_opt(&layout.city_cell)?,
            state_cell: compile_opt(&layout.state_cell)?,
        })
    }

    fn rows_for(&self, role: BusinessRole) -> &[Selector] {
        match role {
            BusinessRole::Exporter => &self.exporter_rows,
            BusinessRole::Importer => &self.importer_rows,
        }
    }
}

fn compile(origin: Source, selector: &str) -> Result<Selector, ParseError> {
    Selector::parse(selector).map_err(|_| ParseError::InvalidSelector {
        origin,
        selector: selector.to_string(),
    })
}

/// Shared row/cell extraction behind the per-source parsers. Selectors are
/// compiled on first use and reused for every later document.
pub(crate) struct TableExtractor {
    origin: Source,
    layout: TableLayout,
    compiled: OnceCell<Result<CompiledLayout, ParseError>>,
}

impl TableExtractor {
    pub(crate) fn new(origin: Source, layout: TableLayout) -> Self {
        Self {
            origin,
            layout,
            compiled: OnceCell::new(),
        }
    }

    pub(crate) fn extract(
        &self,
        body: &str,
        context: &ParseContext<'_>,
    ) -> Result<Vec<CompanyRecord>, ParseError> {
        let compiled = self
            .compiled
            .get_or_init(|| CompiledLayout::compile(self.origin, &self.layout))
            .as_ref()
            .map_err(Clone::clone)?;

        let document = Html::parse_document(body);

        let Some(rows) = compiled
            .rows_for(context.role)
            .iter()
            .map(|selector| document.select(selector).collect::<Vec<_>>())
            .find(|rows| !rows.is_empty())
        else {
            debug!("{}: no listing rows found for {}", self.origin, context.role);
            return Ok(Vec::new());
        };

        let records: Vec<CompanyRecord> = rows
            .into_iter()
            .filter_map(|row| self.read_row(row, compiled, context))
            .collect();

        debug!(
            "{}: accepted {} {} rows",
            self.origin,
            records.len(),
            context.role
        );
        Ok(records)
    }

    fn read_row(
        &self,
        row: ElementRef<'_>,
        compiled: &CompiledLayout,
        context: &ParseContext<'_>,
    ) -> Option<CompanyRecord> {
        // Length is judged on the trimmed cell as rendered, before inner
        // whitespace is collapsed.
        let raw_name: String = row.select(&compiled.name_cell).next()?.text().collect();
        if !is_plausible_company_name(&raw_name) {
            return None;
        }
        let name = normalize_whitespace(&raw_name);

        let optional = |selector: &Option<Selector>| {
            selector.as_ref().and_then(|s| cell_text(row, s))
        };

        CompanyRecord::new(
            &name,
            self.origin,
            DataType::Scraped,
            context.hs_code.clone(),
            context.role,
        )
        .ok()
        .map(|record| {
            record
                .with_iec_code(optional(&compiled.iec_cell).as_deref())
                .with_city(optional(&compiled.city_cell).as_deref())
                .with_state(optional(&compiled.state_cell).as_deref())
        })
    }
}

fn cell_text(row: ElementRef<'_>, selector: &Selector) -> Option<String> {
    row.select(selector)
        .next()
        .map(|cell| normalize_whitespace(&cell.text().collect::<String>()))
}
