//! Rendering query rows as an aligned table or as JSON.

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use serde::Serialize;

use movie_sql_db::{BadActorCount, CastMember, FilmLead, FilmTitle, YearCount};

use crate::CliError;

/// A record that can be shown as one table row.
pub(crate) trait TableRow {
    fn headers() -> &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

impl TableRow for FilmTitle {
    fn headers() -> &'static [&'static str] {
        &["title"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.title.clone()]
    }
}

impl TableRow for CastMember {
    fn headers() -> &'static [&'static str] {
        &["name"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.name.clone()]
    }
}

impl TableRow for YearCount {
    fn headers() -> &'static [&'static str] {
        &["yr", "count"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.yr.to_string(), self.count.to_string()]
    }
}

impl TableRow for FilmLead {
    fn headers() -> &'static [&'static str] {
        &["title", "name"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.title.clone(), self.name.clone()]
    }
}

impl TableRow for BadActorCount {
    fn headers() -> &'static [&'static str] {
        &["num_bad_actors"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.num_bad_actors.to_string()]
    }
}

/// Print `rows` through the logger, as a JSON array or as a table.
pub(crate) fn print_rows<T: TableRow + Serialize>(rows: &[T], json: bool) -> Result<(), CliError> {
    if json {
        log::info!("{}", to_json(rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        log::info!("{}", "(no rows)".if_supports_color(Stdout, |t| t.dimmed()));
        return Ok(());
    }

    let cells: Vec<Vec<String>> = rows.iter().map(T::cells).collect();
    let widths = column_widths(T::headers(), &cells);

    let header = format_line(T::headers().iter().copied(), &widths);
    log::info!("{}", header.if_supports_color(Stdout, |t| t.bold()));
    for row in &cells {
        log::info!("{}", format_line(row.iter().map(String::as_str), &widths));
    }
    log::info!(
        "{}",
        format!("({} row{})", rows.len(), if rows.len() == 1 { "" } else { "s" })
            .if_supports_color(Stdout, |t| t.dimmed()),
    );
    Ok(())
}

/// Print a single aggregate record. JSON mode emits the object itself.
pub(crate) fn print_record<T: TableRow + Serialize>(record: &T, json: bool) -> Result<(), CliError> {
    if json {
        log::info!("{}", to_json(record)?);
        return Ok(());
    }
    print_rows(std::slice::from_ref(record), false)
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| CliError::output(format!("Failed to serialize rows: {}", e)))
}

fn column_widths(headers: &[&str], cells: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            cells
                .iter()
                .filter_map(|row| row.get(i))
                .map(|c| c.chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect()
}

fn format_line<'a>(values: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    values
        .zip(widths)
        .map(|(v, w)| format!("{:<width$}", v, width = w))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_cover_header_and_cells() {
        let cells = vec![
            vec!["Tommy Boy".to_string(), "Chris Farley".to_string()],
            vec!["Black Sheep".to_string(), "Chris Farley".to_string()],
        ];
        assert_eq!(column_widths(FilmLead::headers(), &cells), vec![11, 12]);
    }

    #[test]
    fn lines_are_padded_and_trimmed() {
        let line = format_line(["yr", "count"].into_iter(), &[4, 5]);
        assert_eq!(line, "yr    count");
        let line = format_line(["1990", "3"].into_iter(), &[4, 5]);
        assert_eq!(line, "1990  3");
    }

    #[test]
    fn widths_count_characters_not_bytes() {
        let cells = vec![vec!["Amélie".to_string()]];
        assert_eq!(column_widths(FilmTitle::headers(), &cells), vec![6]);
    }

    #[test]
    fn aggregate_serializes_as_object() {
        let count = BadActorCount { num_bad_actors: 3 };
        assert_eq!(to_json(&count).unwrap(), "{\n  \"num_bad_actors\": 3\n}");
    }

    #[test]
    fn rows_serialize_as_array() {
        let rows = vec![FilmTitle {
            title: "Heat".to_string(),
        }];
        assert_eq!(
            to_json(rows.as_slice()).unwrap(),
            "[\n  {\n    \"title\": \"Heat\"\n  }\n]"
        );
    }
}
