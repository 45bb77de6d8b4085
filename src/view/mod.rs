//! Plain-text rendering of page state. Rendering is read-only; user input
//! goes back to the page as events.

mod project;
mod team;
mod work_details;

use crate::pages::Notice;
use std::fmt;

/// Produce a fresh view of the current state.
pub trait Render {
    fn render(&self) -> PageView;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageView {
    pub title: String,
    pub notice: Option<Notice>,
    pub sections: Vec<Section>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Section {
    Form(Form),
    Table(Table),
    /// Collection still waiting for its first fetch.
    Loading(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Form {
    pub title: String,
    pub fields: Vec<(String, String)>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    pub title: String,
    pub headers: Vec<String>,
    /// First cell is the row key (index or id) the row's actions refer to.
    pub rows: Vec<Vec<String>>,
}

impl PageView {
    pub fn new(title: impl Into<String>, notice: Option<&Notice>) -> Self {
        Self {
            title: title.into(),
            notice: notice.cloned(),
            sections: Vec::new(),
        }
    }

    pub fn push(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    pub fn table(&self, title: &str) -> Option<&Table> {
        self.sections.iter().find_map(|s| match s {
            Section::Table(t) if t.title == title => Some(t),
            _ => None,
        })
    }

    pub fn form(&self, title: &str) -> Option<&Form> {
        self.sections.iter().find_map(|s| match s {
            Section::Form(f) if f.title == title => Some(f),
            _ => None,
        })
    }

    pub fn is_loading(&self, title: &str) -> bool {
        self.sections
            .iter()
            .any(|s| matches!(s, Section::Loading(t) if t == title))
    }
}

impl Form {
    pub fn new<'a, I>(title: &str, fields: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self {
            title: title.to_string(),
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn value(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == label)
            .map(|(_, v)| v.as_str())
    }
}

impl Table {
    pub fn new(title: &str, headers: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn row<I, C>(&mut self, cells: I)
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }
}

/// Loaded collection as a table, or a loading placeholder.
pub(crate) fn table_or_loading<T, F>(
    title: &str,
    headers: &[&str],
    rows: Option<&Vec<T>>,
    mut cells: F,
) -> Section
where
    F: FnMut(usize, &T) -> Vec<String>,
{
    match rows {
        Some(rows) => {
            let mut table = Table::new(title, headers);
            for (i, row) in rows.iter().enumerate() {
                table.row(cells(i, row));
            }
            Section::Table(table)
        }
        None => Section::Loading(title.to_string()),
    }
}

pub(crate) fn id_cell(id: Option<crate::models::RecordId>) -> String {
    id.map(|id| id.to_string()).unwrap_or_else(|| "-".into())
}

impl fmt::Display for PageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.title)?;
        match &self.notice {
            Some(Notice::Success(m)) => writeln!(f, "[ok] {}", m)?,
            Some(Notice::Error(m)) => writeln!(f, "[error] {}", m)?,
            None => {}
        }
        for section in &self.sections {
            writeln!(f)?;
            write!(f, "{}", section)?;
        }
        Ok(())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Form(form) => {
                writeln!(f, "-- {} --", form.title)?;
                let width = form.fields.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
                for (label, value) in &form.fields {
                    writeln!(f, "{:<width$} : {}", label, value, width = width)?;
                }
                Ok(())
            }
            Section::Table(table) => {
                writeln!(f, "-- {} --", table.title)?;
                let mut widths: Vec<usize> = table.headers.iter().map(|h| h.len()).collect();
                for row in &table.rows {
                    for (i, cell) in row.iter().enumerate() {
                        if let Some(w) = widths.get_mut(i) {
                            *w = (*w).max(cell.chars().count());
                        }
                    }
                }
                write_row(f, &table.headers, &widths)?;
                let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
                write_row(f, &rule, &widths)?;
                for row in &table.rows {
                    write_row(f, row, &widths)?;
                }
                if table.rows.is_empty() {
                    writeln!(f, "(empty)")?;
                }
                Ok(())
            }
            Section::Loading(title) => writeln!(f, "-- {} --\nloading...", title),
        }
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, cells: &[String], widths: &[usize]) -> fmt::Result {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(c, w)| format!("{:<width$}", c, width = *w))
        .collect();
    writeln!(f, "{}", line.join(" | ").trim_end())
}
