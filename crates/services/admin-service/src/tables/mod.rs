//! Table declarations for an external admin panel renderer.
//!
//! Describes, per catalog table, which columns the listing shows and how,
//! and which inputs the create/edit form offers. Nothing here touches the
//! database; the declarations are static data served as JSON.

mod brands;
mod formatters;
mod stores;
mod users;

use serde::Serialize;

use domain::{STATUS_ACTIVE, STATUS_INACTIVE};

pub use formatters::{format_logo, format_status, truncate_description, Formatter};

/// Default rows per page in the admin listing
pub const ADMIN_PAGE_SIZE: u64 = 10;

/// Full declaration of one admin table.
#[derive(Debug, Clone, Serialize)]
pub struct TableDefinition {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub default_page_size: u64,
    pub filter_layout: FilterLayout,
    pub columns: Vec<ListColumn>,
    pub form: FormDefinition,
}

impl TableDefinition {
    /// Look up a listing column by field name.
    pub fn column(&self, field: &str) -> Option<&ListColumn> {
        self.columns.iter().find(|c| c.field == field)
    }
}

/// Arrangement of the listing filter form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterLayout {
    TwoColumn,
}

/// SQL type of a field, as the renderer needs it for filters and inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SqlType {
    Int,
    Varchar,
    Text,
    Datetime,
}

/// How a listing column may be filtered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    Like,
    DatetimeRange,
}

/// A column in the admin listing.
#[derive(Debug, Clone, Serialize)]
pub struct ListColumn {
    pub header: &'static str,
    pub field: &'static str,
    pub sql_type: SqlType,
    pub sortable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<FilterKind>,
    pub width: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatter: Option<Formatter>,
}

impl ListColumn {
    fn new(header: &'static str, field: &'static str, sql_type: SqlType, width: u16) -> Self {
        Self {
            header,
            field,
            sql_type,
            sortable: false,
            filter: None,
            width,
            formatter: None,
        }
    }

    fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    fn filter(mut self, kind: FilterKind) -> Self {
        self.filter = Some(kind);
        self
    }

    fn display(mut self, formatter: Formatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Render a raw cell value for display.
    pub fn render(&self, raw: &str) -> String {
        match self.formatter {
            Some(formatter) => formatter.apply(raw),
            None => raw.to_string(),
        }
    }
}

/// Form widget used for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Default,
    Text,
    Textarea,
    Email,
    Url,
    Select,
    Datetime,
}

/// One choice of a select input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub text: &'static str,
    pub value: &'static str,
}

/// A field in the create/edit form.
#[derive(Debug, Clone, Serialize)]
pub struct FormField {
    pub header: &'static str,
    pub field: &'static str,
    pub sql_type: SqlType,
    pub input: InputKind,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<&'static str>,
    pub allow_add: bool,
    pub allow_edit: bool,
    pub now_on_insert: bool,
    pub now_on_update: bool,
}

impl FormField {
    fn new(header: &'static str, field: &'static str, sql_type: SqlType, input: InputKind) -> Self {
        Self {
            header,
            field,
            sql_type,
            input,
            required: false,
            placeholder: None,
            help: None,
            options: Vec::new(),
            default: None,
            allow_add: true,
            allow_edit: true,
            now_on_insert: false,
            now_on_update: false,
        }
    }

    fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn placeholder(mut self, text: &'static str) -> Self {
        self.placeholder = Some(text);
        self
    }

    fn help(mut self, text: &'static str) -> Self {
        self.help = Some(text);
        self
    }

    fn read_only(mut self) -> Self {
        self.allow_add = false;
        self.allow_edit = false;
        self
    }

    /// Server-managed `id` field
    fn id() -> Self {
        Self::new("ID", "id", SqlType::Int, InputKind::Default).read_only()
    }

    /// Required active/inactive select, defaulting to active
    fn status() -> Self {
        let mut field = Self::new("Status", "status", SqlType::Varchar, InputKind::Select).required();
        field.options = vec![
            SelectOption {
                text: "Active",
                value: STATUS_ACTIVE,
            },
            SelectOption {
                text: "Inactive",
                value: STATUS_INACTIVE,
            },
        ];
        field.default = Some(STATUS_ACTIVE);
        field
    }

    fn created_at() -> Self {
        let mut field =
            Self::new("Created At", "created_at", SqlType::Datetime, InputKind::Datetime).read_only();
        field.now_on_insert = true;
        field
    }

    fn updated_at() -> Self {
        let mut field =
            Self::new("Updated At", "updated_at", SqlType::Datetime, InputKind::Datetime).read_only();
        field.now_on_update = true;
        field
    }
}

/// Create/edit form of a table.
#[derive(Debug, Clone, Serialize)]
pub struct FormDefinition {
    pub title: &'static str,
    pub description: &'static str,
    pub fields: Vec<FormField>,
}

// Columns every table lists the same way

fn id_column() -> ListColumn {
    ListColumn::new("ID", "id", SqlType::Int, 80).sortable()
}

fn status_column() -> ListColumn {
    ListColumn::new("Status", "status", SqlType::Varchar, 100)
        .filter(FilterKind::Like)
        .display(Formatter::StatusLabel)
}

fn created_at_column() -> ListColumn {
    ListColumn::new("Created At", "created_at", SqlType::Datetime, 150)
        .filter(FilterKind::DatetimeRange)
        .sortable()
}

fn updated_at_column() -> ListColumn {
    ListColumn::new("Updated At", "updated_at", SqlType::Datetime, 150).sortable()
}

/// All table declarations, in menu order.
pub fn all_tables() -> Vec<TableDefinition> {
    vec![users::table(), stores::table(), brands::table()]
}

/// Find a table declaration by name.
pub fn find_table(name: &str) -> Option<TableDefinition> {
    match name {
        "users" => Some(users::table()),
        "stores" => Some(stores::table()),
        "brands" => Some(brands::table()),
        _ => None,
    }
}
