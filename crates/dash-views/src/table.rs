//! Typed table model: columns with accessors and a stable row key

/// One column of a table: a header and a function producing the cell text
/// for a row. Accessors are plain function pointers so column sets can be
/// declared as constants.
pub struct Column<T> {
    pub header: &'static str,
    pub accessor: fn(&T) -> String,
}

impl<T> Column<T> {
    pub fn new(header: &'static str, accessor: fn(&T) -> String) -> Self {
        Self { header, accessor }
    }
}

/// A table definition for row type `T`. The row key uniquely identifies a
/// row across refetches so a frontend can reconcile updates.
pub struct TableModel<T> {
    columns: Vec<Column<T>>,
    row_key: fn(&T) -> String,
}

impl<T> TableModel<T> {
    pub fn new(columns: Vec<Column<T>>, row_key: fn(&T) -> String) -> Self {
        Self { columns, row_key }
    }

    pub fn headers(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.header).collect()
    }

    pub fn row_key(&self, row: &T) -> String {
        (self.row_key)(row)
    }

    pub fn render_row(&self, row: &T) -> Vec<String> {
        self.columns.iter().map(|c| (c.accessor)(row)).collect()
    }

    pub fn render(&self, rows: &[T]) -> Vec<Vec<String>> {
        rows.iter().map(|row| self.render_row(row)).collect()
    }
}
