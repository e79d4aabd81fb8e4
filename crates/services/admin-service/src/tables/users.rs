//! Users table declaration.

use super::{
    created_at_column, id_column, status_column, updated_at_column, FilterKind, FilterLayout,
    FormDefinition, FormField, InputKind, ListColumn, SqlType, TableDefinition, ADMIN_PAGE_SIZE,
};

pub fn table() -> TableDefinition {
    TableDefinition {
        name: domain::USERS_COLLECTION,
        title: "Users Management",
        description: "Create, Read, Update, and Delete Users",
        default_page_size: ADMIN_PAGE_SIZE,
        filter_layout: FilterLayout::TwoColumn,
        columns: vec![
            id_column(),
            ListColumn::new("Name", "name", SqlType::Varchar, 150)
                .filter(FilterKind::Like)
                .sortable(),
            ListColumn::new("Email", "email", SqlType::Varchar, 200)
                .filter(FilterKind::Like)
                .sortable(),
            ListColumn::new("Phone", "phone", SqlType::Varchar, 120).filter(FilterKind::Like),
            status_column(),
            created_at_column(),
            updated_at_column(),
        ],
        form: FormDefinition {
            title: "User Form",
            description: "Add or Edit User Information",
            fields: vec![
                FormField::id(),
                FormField::new("Name", "name", SqlType::Varchar, InputKind::Text)
                    .required()
                    .placeholder("Enter user name")
                    .help("Full name of the user"),
                FormField::new("Email", "email", SqlType::Varchar, InputKind::Email)
                    .required()
                    .placeholder("user@example.com")
                    .help("Valid email address"),
                FormField::new("Phone", "phone", SqlType::Varchar, InputKind::Text)
                    .placeholder("+1234567890")
                    .help("Contact phone number"),
                FormField::status(),
                FormField::created_at(),
                FormField::updated_at(),
            ],
        },
    }
}
