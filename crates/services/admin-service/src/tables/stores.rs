//! Stores table declaration.

use super::{
    created_at_column, id_column, status_column, updated_at_column, FilterKind, FilterLayout,
    FormDefinition, FormField, InputKind, ListColumn, SqlType, TableDefinition, ADMIN_PAGE_SIZE,
};

pub fn table() -> TableDefinition {
    TableDefinition {
        name: domain::STORES_COLLECTION,
        title: "Stores Management",
        description: "Create, Read, Update, and Delete Stores",
        default_page_size: ADMIN_PAGE_SIZE,
        filter_layout: FilterLayout::TwoColumn,
        columns: vec![
            id_column(),
            ListColumn::new("Name", "name", SqlType::Varchar, 150)
                .filter(FilterKind::Like)
                .sortable(),
            ListColumn::new("Address", "address", SqlType::Text, 200).filter(FilterKind::Like),
            ListColumn::new("Phone", "phone", SqlType::Varchar, 120).filter(FilterKind::Like),
            ListColumn::new("Email", "email", SqlType::Varchar, 180)
                .filter(FilterKind::Like)
                .sortable(),
            status_column(),
            created_at_column(),
            updated_at_column(),
        ],
        form: FormDefinition {
            title: "Store Form",
            description: "Add or Edit Store Information",
            fields: vec![
                FormField::id(),
                FormField::new("Name", "name", SqlType::Varchar, InputKind::Text)
                    .required()
                    .placeholder("Enter store name")
                    .help("Name of the store"),
                FormField::new("Address", "address", SqlType::Text, InputKind::Textarea)
                    .placeholder("Enter store address")
                    .help("Physical address of the store"),
                FormField::new("Phone", "phone", SqlType::Varchar, InputKind::Text)
                    .placeholder("+1234567890")
                    .help("Store contact phone number"),
                FormField::new("Email", "email", SqlType::Varchar, InputKind::Email)
                    .placeholder("store@example.com")
                    .help("Store email address"),
                FormField::status(),
                FormField::created_at(),
                FormField::updated_at(),
            ],
        },
    }
}
