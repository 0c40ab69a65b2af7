use movie_sql_db::*;

const SAMPLE: &str = r#"
movies:
  - { id: 1, title: Zombies of the Stratosphere, yr: 1952 }
  - { id: 2, title: "Satan's Satellites", yr: 1958 }
actors:
  - { id: 1, name: Leonard Nimoy }
  - { id: 2, name: Ghost Actor }
castings:
  - { movie_id: 1, actor_id: 1, ord: 1 }
  - { movie_id: 2, actor_id: 1, ord: 3 }
"#;

#[test]
fn insert_and_read_back_movie() {
    let conn = open_memory().unwrap();
    insert_movie(
        &conn,
        &Movie {
            id: 7,
            title: "Road House".to_string(),
            yr: 1989,
        },
    )
    .unwrap();

    let (title, yr): (String, i32) = conn
        .query_row("SELECT title, yr FROM movies WHERE id = 7", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .unwrap();
    assert_eq!(title, "Road House");
    assert_eq!(yr, 1989);
}

#[test]
fn duplicate_movie_id_is_an_error() {
    let conn = open_memory().unwrap();
    let movie = Movie {
        id: 1,
        title: "Twice".to_string(),
        yr: 2000,
    };
    insert_movie(&conn, &movie).unwrap();
    let err = insert_movie(&conn, &movie).unwrap_err();
    assert!(matches!(err, OperationError::Sqlite(_)));
}

#[test]
fn parse_yaml_dataset() {
    let dataset = Dataset::from_yaml_str(SAMPLE).unwrap();
    assert_eq!(dataset.movies.len(), 2);
    assert_eq!(dataset.movies[1].title, "Satan's Satellites");
    assert_eq!(dataset.actors[1].name, "Ghost Actor");
    assert_eq!(
        dataset.castings[1],
        Casting {
            movie_id: 2,
            actor_id: 1,
            ord: 3
        }
    );
}

#[test]
fn missing_sections_default_to_empty() {
    let dataset = Dataset::from_yaml_str("actors:\n  - { id: 1, name: Alone }\n").unwrap();
    assert!(dataset.movies.is_empty());
    assert!(dataset.castings.is_empty());
    assert_eq!(dataset.actors.len(), 1);
}

#[test]
fn malformed_yaml_is_an_error() {
    let err = Dataset::from_yaml_str("movies: [ { id: one } ]").unwrap_err();
    assert!(matches!(err, OperationError::Yaml(_)));
}

#[test]
fn load_dataset_counts_rows_and_answers_queries() {
    let conn = open_memory().unwrap();
    let dataset = Dataset::from_yaml_str(SAMPLE).unwrap();
    let stats = load_dataset(&conn, &dataset).unwrap();
    assert_eq!(
        stats,
        LoadStats {
            movies: 2,
            actors: 2,
            castings: 2
        }
    );

    let cast = cast_list_for_movie(&conn, "Zombies of the Stratosphere").unwrap();
    assert_eq!(cast.len(), 1);
    assert_eq!(cast[0].name, "Leonard Nimoy");
    assert_eq!(count_actors_with_no_roles(&conn).unwrap().num_bad_actors, 1);
}

#[test]
fn load_from_file_then_open_read_only() {
    let dir = tempfile::tempdir().unwrap();
    let yaml_path = dir.path().join("movies.yaml");
    std::fs::write(&yaml_path, SAMPLE).unwrap();
    let db_path = dir.path().join("movie.db");

    let dataset = Dataset::load(&yaml_path).unwrap();
    let conn = create_database(&db_path).unwrap();
    load_dataset(&conn, &dataset).unwrap();
    drop(conn);

    let conn = open_database(&db_path).unwrap();
    let films = films_with_actor(&conn, "Leonard Nimoy").unwrap();
    let titles: Vec<_> = films.iter().map(|f| f.title.as_str()).collect();
    assert_eq!(titles, ["Satan's Satellites", "Zombies of the Stratosphere"]);
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Dataset::load(&dir.path().join("nope.yaml")).unwrap_err();
    assert!(matches!(err, OperationError::Io(_)));
}
