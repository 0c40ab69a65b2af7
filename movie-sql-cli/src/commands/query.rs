use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use movie_sql_db::{MovieDatabase, QueryError};

use crate::output::{print_record, print_rows};
use crate::settings::resolve_db_path;
use crate::CliError;

/// One of the fixed analytical questions, with its target bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Question {
    Films(String),
    Cast(String),
    BusyYears(String),
    Supporting(String),
    Leads(i32),
    BadActors,
    Starring(i64),
    CoStars(String),
}

impl Question {
    /// Heading printed above the result rows.
    pub(crate) fn heading(&self) -> String {
        match self {
            Self::Films(actor) => format!("Films featuring {}", actor),
            Self::Cast(title) => format!("Cast of {}", title),
            Self::BusyYears(actor) => format!("Years with more than two films for {}", actor),
            Self::Supporting(actor) => format!("Films where {} is not the lead", actor),
            Self::Leads(year) => format!("Lead actors of {} films", year),
            Self::BadActors => "Actors with no roles".to_string(),
            Self::Starring(count) => format!("Actors with exactly {} lead roles", count),
            Self::CoStars(actor) => format!("Leads of films featuring {}", actor),
        }
    }
}

pub(crate) fn run_query(
    question: Question,
    db_path: Option<PathBuf>,
    json: bool,
) -> Result<(), CliError> {
    let (db_path, source) = resolve_db_path(db_path);
    log::debug!("Using database {} ({})", db_path.display(), source);

    let db = MovieDatabase::open(&db_path);

    if !json {
        log::info!(
            "{}",
            question.heading().if_supports_color(Stdout, |t| t.bold()),
        );
        crate::log_blank();
    }

    let failed = |e: QueryError| {
        CliError::database(format!("Query against {} failed: {}", db_path.display(), e))
    };

    match question {
        Question::Films(actor) => print_rows(&db.films_with_actor(&actor).map_err(failed)?, json),
        Question::Cast(title) => {
            print_rows(&db.cast_list_for_movie(&title).map_err(failed)?, json)
        }
        Question::BusyYears(actor) => {
            print_rows(&db.busiest_years_for_actor(&actor).map_err(failed)?, json)
        }
        Question::Supporting(actor) => {
            print_rows(&db.non_starring_films(&actor).map_err(failed)?, json)
        }
        Question::Leads(year) => print_rows(&db.lead_actors_for_year(year).map_err(failed)?, json),
        Question::BadActors => {
            let count = db.count_actors_with_no_roles().map_err(failed)?;
            print_record(&count, json)
        }
        Question::Starring(count) => print_rows(
            &db.actors_with_exact_starring_count(count).map_err(failed)?,
            json,
        ),
        Question::CoStars(actor) => print_rows(&db.lead_co_stars_of(&actor).map_err(failed)?, json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_name_the_target() {
        assert_eq!(
            Question::Films("Chuck Norris".to_string()).heading(),
            "Films featuring Chuck Norris"
        );
        assert_eq!(Question::Leads(1908).heading(), "Lead actors of 1908 films");
        assert_eq!(
            Question::Starring(20).heading(),
            "Actors with exactly 20 lead roles"
        );
    }

    #[test]
    fn missing_database_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_query(
            Question::BadActors,
            Some(dir.path().join("missing.db")),
            true,
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Database(_)));
    }
}
