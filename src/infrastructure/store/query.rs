use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

impl Order {
    fn as_str(&self) -> &'static str {
        match self {
            Order::Ascending => "asc",
            Order::Descending => "desc",
        }
    }
}

/// A row filter against one table of the content store, rendered as
/// PostgREST query parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    table: &'static str,
    params: Vec<(String, String)>,
}

impl Query {
    pub fn table_rows(table: &'static str) -> Self {
        Query {
            table,
            params: vec![("select".to_string(), "*".to_string())],
        }
    }

    pub fn eq(mut self, column: &str, value: impl fmt::Display) -> Self {
        self.params.push((column.to_string(), format!("eq.{}", value)));
        self
    }

    pub fn order(mut self, column: &str, order: Order) -> Self {
        self.params.push(("order".to_string(), format!("{}.{}", column, order.as_str())));
        self
    }

    pub fn limit(mut self, count: usize) -> Self {
        self.params.push(("limit".to_string(), count.to_string()));
        self
    }

    pub fn table(&self) -> &'static str {
        self.table
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }
}
