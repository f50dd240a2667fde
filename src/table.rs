//! Generic table projection: search plus pagination over any record slice.
//!
//! Pure function of its inputs — never mutates the data it is given. Rows
//! are rendered through caller-supplied column descriptors; free-text search
//! is a case-insensitive substring match across all rendered cell text.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Record;

/// Page sizes the dashboard may select from.
pub const PAGE_SIZE_OPTIONS: [u64; 4] = [10, 25, 50, 100];
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Column descriptor: stable key, display label, and how to render one cell.
pub struct Column<T> {
    pub key: &'static str,
    pub label: &'static str,
    render: Box<dyn Fn(&T) -> String + Send + Sync>,
}

impl<T> Column<T> {
    pub fn new(
        key: &'static str,
        label: &'static str,
        render: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            key,
            label,
            render: Box::new(render),
        }
    }

    pub fn render(&self, record: &T) -> String {
        (self.render)(record)
    }
}

/// List-endpoint query parameters. `per_page` is optional; the caller
/// supplies the table's configured default page size.
#[derive(Debug, Clone, Deserialize)]
pub struct TableQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default)]
    pub per_page: Option<u64>,
}

fn default_page() -> u64 {
    1
}

impl Default for TableQuery {
    fn default() -> Self {
        Self {
            search: None,
            page: default_page(),
            per_page: None,
        }
    }
}

impl TableQuery {
    /// Requested page size constrained to the fixed option set; anything
    /// else falls back to the table's default, floored at one row so a
    /// misconfigured default can never divide by zero.
    pub fn effective_per_page(&self, default_page_size: u64) -> u64 {
        match self.per_page {
            Some(per_page) if PAGE_SIZE_OPTIONS.contains(&per_page) => per_page,
            _ => default_page_size.max(1),
        }
    }
}

/// Standard pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl PaginationMeta {
    pub fn new(page: u64, per_page: u64, total: u64) -> Self {
        let total_pages = if total == 0 {
            0
        } else {
            (total + per_page - 1) / per_page
        };
        Self {
            page,
            per_page,
            total,
            total_pages,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnHeader {
    pub key: &'static str,
    pub label: &'static str,
}

/// One rendered row; keeps the record id so row actions can target it.
#[derive(Debug, Clone, Serialize)]
pub struct RowView {
    pub id: Uuid,
    pub cells: Vec<String>,
}

/// One page of a searched, paginated table.
#[derive(Debug, Clone, Serialize)]
pub struct TablePage {
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<RowView>,
    pub pagination: PaginationMeta,
}

/// Project records through the given columns, filter by the query's search
/// text, and slice out the requested page.
pub fn project<T: Record>(
    data: &[T],
    columns: &[Column<T>],
    query: &TableQuery,
    default_page_size: u64,
) -> TablePage {
    let needle = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    let filtered: Vec<RowView> = data
        .iter()
        .map(|record| RowView {
            id: record.id(),
            cells: columns.iter().map(|c| c.render(record)).collect(),
        })
        .filter(|row| match &needle {
            Some(needle) => row
                .cells
                .iter()
                .any(|cell| cell.to_lowercase().contains(needle)),
            None => true,
        })
        .collect();

    let per_page = query.effective_per_page(default_page_size);
    let page = query.page.max(1);
    let total = filtered.len() as u64;
    let offset = (page - 1).saturating_mul(per_page) as usize;

    let rows = filtered
        .into_iter()
        .skip(offset)
        .take(per_page as usize)
        .collect();

    TablePage {
        columns: columns
            .iter()
            .map(|c| ColumnHeader {
                key: c.key,
                label: c.label,
            })
            .collect(),
        rows,
        pagination: PaginationMeta::new(page, per_page, total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AuditInfo, Item, RecordStatus};

    fn item(name: &str, warehouse: &str) -> Item {
        Item {
            id: Uuid::new_v4(),
            reference: format!("ITM-{}", name),
            name: name.to_string(),
            category: "General".into(),
            unit: "pcs".into(),
            quantity: 10,
            reorder_level: 2,
            warehouse: warehouse.to_string(),
            supplier: "Acme".into(),
            status: RecordStatus::Active,
            audit: AuditInfo::created("system"),
        }
    }

    fn columns() -> Vec<Column<Item>> {
        vec![
            Column::new("name", "Name", |i: &Item| i.name.clone()),
            Column::new("warehouse", "Warehouse", |i: &Item| i.warehouse.clone()),
        ]
    }

    #[test]
    fn search_is_case_insensitive_substring_across_columns() {
        let data = vec![item("Widget", "Main"), item("Gadget", "Annex")];
        let query = TableQuery {
            search: Some("aNNe".into()),
            ..Default::default()
        };
        let page = project(&data, &columns(), &query, DEFAULT_PAGE_SIZE);
        assert_eq!(page.rows.len(), 1);
        assert_eq!(page.rows[0].cells[0], "Gadget");
        assert_eq!(page.pagination.total, 1);
    }

    #[test]
    fn unique_match_is_found_regardless_of_page() {
        // 25 rows, the needle sits on what would be page 3 unfiltered.
        let mut data: Vec<Item> = (0..24).map(|i| item(&format!("Item{i}"), "Main")).collect();
        data.push(item("Needle", "Main"));
        let query = TableQuery {
            search: Some("needle".into()),
            ..Default::default()
        };
        let page = project(&data, &columns(), &query, DEFAULT_PAGE_SIZE);
        assert_eq!(page.rows.len(), 1);
        assert_eq!(page.rows[0].cells[0], "Needle");
    }

    #[test]
    fn pages_split_ten_ten_five_without_overlap() {
        let data: Vec<Item> = (0..25).map(|i| item(&format!("Item{i}"), "Main")).collect();
        let cols = columns();

        let mut seen = std::collections::HashSet::new();
        let sizes: Vec<usize> = (1..=3)
            .map(|p| {
                let page = project(
                    &data,
                    &cols,
                    &TableQuery {
                        search: None,
                        page: p,
                        per_page: Some(10),
                    },
                    DEFAULT_PAGE_SIZE,
                );
                assert_eq!(page.pagination.total, 25);
                assert_eq!(page.pagination.total_pages, 3);
                for row in &page.rows {
                    assert!(seen.insert(row.id), "row appeared on two pages");
                }
                page.rows.len()
            })
            .collect();
        assert_eq!(sizes, vec![10, 10, 5]);
    }

    #[test]
    fn unknown_page_size_falls_back_to_default() {
        let query = TableQuery {
            search: None,
            page: 1,
            per_page: Some(37),
        };
        assert_eq!(query.effective_per_page(DEFAULT_PAGE_SIZE), DEFAULT_PAGE_SIZE);
        assert_eq!(TableQuery::default().effective_per_page(25), 25);
    }

    #[test]
    fn zero_default_page_size_still_pages() {
        let data = vec![item("Widget", "Main")];
        let page = project(&data, &columns(), &TableQuery::default(), 0);
        assert_eq!(page.pagination.per_page, 1);
        assert_eq!(page.pagination.total_pages, 1);
        assert_eq!(page.rows.len(), 1);
    }

    #[test]
    fn page_serializes_as_response_view() {
        let data = vec![item("Widget", "Main")];
        let page = project(&data, &columns(), &TableQuery::default(), DEFAULT_PAGE_SIZE);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["columns"][0]["key"], "name");
        assert_eq!(json["columns"][1]["label"], "Warehouse");
        assert_eq!(json["rows"][0]["cells"][0], "Widget");
        assert_eq!(json["pagination"]["per_page"], 10);
    }

    #[test]
    fn insertion_order_is_the_only_order() {
        let data = vec![item("Zeta", "Main"), item("Alpha", "Main")];
        let page = project(&data, &columns(), &TableQuery::default(), DEFAULT_PAGE_SIZE);
        assert_eq!(page.rows[0].cells[0], "Zeta");
        assert_eq!(page.rows[1].cells[0], "Alpha");
    }
}
