//! Brands table declaration.

use super::{
    created_at_column, id_column, status_column, updated_at_column, FilterKind, FilterLayout,
    FormDefinition, FormField, Formatter, InputKind, ListColumn, SqlType, TableDefinition,
    ADMIN_PAGE_SIZE,
};

pub fn table() -> TableDefinition {
    TableDefinition {
        name: domain::BRANDS_COLLECTION,
        title: "Brands Management",
        description: "Create, Read, Update, and Delete Brands",
        default_page_size: ADMIN_PAGE_SIZE,
        filter_layout: FilterLayout::TwoColumn,
        columns: vec![
            id_column(),
            ListColumn::new("Logo", "logo", SqlType::Varchar, 100).display(Formatter::LogoImage),
            ListColumn::new("Name", "name", SqlType::Varchar, 180)
                .filter(FilterKind::Like)
                .sortable(),
            ListColumn::new("Description", "description", SqlType::Text, 250)
                .display(Formatter::Truncate),
            status_column(),
            created_at_column(),
            updated_at_column(),
        ],
        form: FormDefinition {
            title: "Brand Form",
            description: "Add or Edit Brand Information",
            fields: vec![
                FormField::id(),
                FormField::new("Name", "name", SqlType::Varchar, InputKind::Text)
                    .required()
                    .placeholder("Enter brand name")
                    .help("Name of the brand"),
                FormField::new("Description", "description", SqlType::Text, InputKind::Textarea)
                    .placeholder("Enter brand description")
                    .help("Detailed description of the brand"),
                FormField::new("Logo", "logo", SqlType::Varchar, InputKind::Url)
                    .placeholder("https://example.com/logo.png")
                    .help("URL of the brand logo image"),
                FormField::status(),
                FormField::created_at(),
                FormField::updated_at(),
            ],
        },
    }
}
