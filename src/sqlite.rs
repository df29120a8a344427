use log::{debug, info};
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::path::Path;

use crate::config::ExampleConfig;
use crate::error::Result;

/// A row of the `students` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

/// Rows print as tuples, e.g. `(1, 'Bob', 21)`.
impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, '{}', {})", self.id, self.name, self.age)
    }
}

/// A row to insert; the id is assigned by SQLite
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
    pub name: String,
    pub age: i64,
}

impl NewStudent {
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableDefinition {
    pub name: String,
    pub columns: Vec<ColumnDefinition>,
}

impl TableDefinition {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            columns: Vec::new(),
        }
    }

    pub fn with_column(mut self, column: ColumnDefinition) -> Self {
        self.columns.push(column);
        self
    }

    /// `CREATE TABLE IF NOT EXISTS` statement for this table
    pub fn create_sql(&self) -> String {
        let columns: Vec<String> = self.columns.iter().map(ColumnDefinition::sql).collect();
        format!(
            "CREATE TABLE IF NOT EXISTS {} ({})",
            self.name,
            columns.join(", ")
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDefinition {
    pub name: String,
    pub data_type: DataType,
    pub constraints: Vec<ColumnConstraint>,
}

impl ColumnDefinition {
    pub fn new(name: &str, data_type: DataType) -> Self {
        Self {
            name: name.to_string(),
            data_type,
            constraints: Vec::new(),
        }
    }

    pub fn with_constraint(mut self, constraint: ColumnConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    fn sql(&self) -> String {
        let mut sql = format!("{} {}", self.name, self.data_type.as_sql());
        for constraint in &self.constraints {
            sql.push(' ');
            sql.push_str(constraint.as_sql());
        }
        sql
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DataType {
    Integer,
    Text,
}

impl DataType {
    fn as_sql(self) -> &'static str {
        match self {
            DataType::Integer => "INTEGER",
            DataType::Text => "TEXT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnConstraint {
    PrimaryKey,
}

impl ColumnConstraint {
    fn as_sql(self) -> &'static str {
        match self {
            ColumnConstraint::PrimaryKey => "PRIMARY KEY",
        }
    }
}

/// The `students` table both example programs use.
pub fn students_table() -> TableDefinition {
    TableDefinition::new("students")
        .with_column(
            ColumnDefinition::new("id", DataType::Integer)
                .with_constraint(ColumnConstraint::PrimaryKey),
        )
        .with_column(ColumnDefinition::new("name", DataType::Text))
        .with_column(ColumnDefinition::new("age", DataType::Integer))
}

/// One open connection to a students database file.
pub struct StudentStore {
    conn: Connection,
}

impl StudentStore {
    /// Open the database file, creating it if it does not exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("opening sqlite database at {}", path.display());
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    pub fn ensure_schema(&self) -> Result<()> {
        let sql = students_table().create_sql();
        debug!("ensuring schema: {}", sql);
        self.conn.execute(&sql, [])?;
        Ok(())
    }

    /// Insert a row and commit. Returns the new row id.
    ///
    /// There is no duplicate check: inserting the same student twice yields
    /// two rows.
    pub fn insert(&mut self, student: &NewStudent) -> Result<i64> {
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO students (name, age) VALUES (?1, ?2)",
            params![student.name, student.age],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        debug!("inserted student {} with id {}", student.name, id);
        Ok(id)
    }

    /// Every row, in id order.
    pub fn all(&self) -> Result<Vec<Student>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, age FROM students ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(Student {
                id: row.get(0)?,
                name: row.get(1)?,
                age: row.get(2)?,
            })
        })?;
        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }

    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, err)| err)?;
        debug!("sqlite connection closed");
        Ok(())
    }
}

/// Run one example program: open, ensure the table, insert the configured
/// row, print every row to `out`, close. Returns the rows printed.
pub fn run_example<W: Write>(config: &ExampleConfig, out: &mut W) -> Result<Vec<Student>> {
    let mut store = StudentStore::open(&config.db_path)?;
    store.ensure_schema()?;
    store.insert(&config.student)?;
    let rows = store.all()?;
    for row in &rows {
        writeln!(out, "{row}")?;
    }
    store.close()?;
    info!(
        "{} now holds {} student row(s)",
        config.db_path.display(),
        rows.len()
    );
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn students_table_sql() {
        assert_eq!(
            students_table().create_sql(),
            "CREATE TABLE IF NOT EXISTS students (id INTEGER PRIMARY KEY, name TEXT, age INTEGER)"
        );
    }

    #[test]
    fn student_displays_as_tuple() {
        let s = Student {
            id: 1,
            name: "Bob".to_string(),
            age: 21,
        };
        assert_eq!(s.to_string(), "(1, 'Bob', 21)");
    }

    #[test]
    fn in_memory_insert_and_read() -> Result<()> {
        let mut store = StudentStore::open_in_memory()?;
        store.ensure_schema()?;
        store.ensure_schema()?;
        assert_eq!(store.insert(&NewStudent::new("Bob", 21))?, 1);
        assert_eq!(store.insert(&NewStudent::new("Eve", 23))?, 2);
        let names: Vec<String> = store.all()?.into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Bob", "Eve"]);
        Ok(())
    }
}
