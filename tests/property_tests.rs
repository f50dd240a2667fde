//! Property-based tests over the core pure machinery: reference code
//! generation, table projection invariants, and form normalization.

use proptest::prelude::*;
use uuid::Uuid;

use warehouse_admin_api::forms::{FieldDescriptor, FormDefinition};
use warehouse_admin_api::models::{AuditInfo, EntityKind, Item, RecordStatus};
use warehouse_admin_api::store::EntityStore;
use warehouse_admin_api::table::{self, Column, TableQuery, PAGE_SIZE_OPTIONS};

fn kind_strategy() -> impl Strategy<Value = EntityKind> {
    prop_oneof![
        Just(EntityKind::Item),
        Just(EntityKind::Adjustment),
        Just(EntityKind::Withdrawal),
        Just(EntityKind::Transfer),
        Just(EntityKind::Order),
        Just(EntityKind::CustomerReturn),
        Just(EntityKind::PickerTask),
    ]
}

fn item(name: &str) -> Item {
    Item {
        id: Uuid::new_v4(),
        reference: format!("ITM-{name}"),
        name: name.to_string(),
        category: "General".into(),
        unit: "pcs".into(),
        quantity: 1,
        reorder_level: 0,
        warehouse: "Main".into(),
        supplier: "Acme".into(),
        status: RecordStatus::Active,
        audit: AuditInfo::created("system"),
    }
}

fn columns() -> Vec<Column<Item>> {
    vec![Column::new("name", "Name", |i: &Item| i.name.clone())]
}

proptest! {
    #[test]
    fn reference_codes_are_unique_and_well_formed(kind in kind_strategy(), count in 1usize..60) {
        let mut store = EntityStore::new();
        let mut seen = std::collections::HashSet::new();
        for i in 1..=count {
            let reference = store.next_reference(kind);
            let expected = format!(
                "{}-{:0width$}",
                kind.reference_prefix(),
                i,
                width = kind.reference_width()
            );
            prop_assert_eq!(&reference, &expected);
            prop_assert!(seen.insert(reference));
        }
    }

    #[test]
    fn pages_partition_the_data(count in 0usize..120, per_page_idx in 0usize..4) {
        let per_page = PAGE_SIZE_OPTIONS[per_page_idx];
        let data: Vec<Item> = (0..count).map(|i| item(&format!("Item{i:03}"))).collect();
        let cols = columns();

        let first = table::project(
            &data,
            &cols,
            &TableQuery { search: None, page: 1, per_page: Some(per_page) },
            10,
        );
        let total_pages = first.pagination.total_pages.max(1);

        let mut seen = std::collections::HashSet::new();
        for page in 1..=total_pages {
            let view = table::project(
                &data,
                &cols,
                &TableQuery { search: None, page, per_page: Some(per_page) },
                10,
            );
            prop_assert!(view.rows.len() as u64 <= per_page);
            prop_assert_eq!(view.pagination.total, count as u64);
            for row in view.rows {
                prop_assert!(seen.insert(row.id), "row on two pages");
            }
        }
        prop_assert_eq!(seen.len(), count);
    }

    #[test]
    fn search_results_are_a_subset_in_order(needle in "[a-zA-Z0-9]{0,4}", count in 0usize..40) {
        let data: Vec<Item> = (0..count).map(|i| item(&format!("Item{i:03}"))).collect();
        let view = table::project(
            &data,
            &columns(),
            &TableQuery { search: Some(needle.clone()), page: 1, per_page: Some(100) },
            10,
        );
        let ids: Vec<Uuid> = data.iter().map(|i| i.id).collect();
        let mut last_index = 0usize;
        for row in &view.rows {
            let index = ids.iter().position(|id| *id == row.id);
            prop_assert!(index.is_some(), "search invented a row");
            let index = index.unwrap();
            prop_assert!(index >= last_index, "search reordered rows");
            last_index = index;
            prop_assert!(row.cells[0].to_lowercase().contains(&needle.to_lowercase()));
        }
    }

    #[test]
    fn number_fields_never_stay_negative(quantity in i64::MIN / 2..i64::MAX / 2) {
        let form = FormDefinition::new(vec![FieldDescriptor::number("quantity", "Quantity")]);
        let mut values = serde_json::Map::new();
        values.insert("quantity".to_string(), serde_json::json!(quantity));
        let out = form.validate_full(&values).unwrap();
        let normalized = out["quantity"].as_i64().unwrap();
        prop_assert!(normalized >= 0);
        if quantity >= 0 {
            prop_assert_eq!(normalized, quantity);
        }
    }
}
