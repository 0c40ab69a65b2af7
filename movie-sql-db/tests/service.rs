use movie_sql_db::*;

fn populated_file(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("movie.db");
    let conn = create_database(&path).unwrap();
    let dataset = Dataset {
        movies: vec![Movie {
            id: 1,
            title: "Zombies of the Stratosphere".to_string(),
            yr: 1952,
        }],
        actors: vec![
            Actor {
                id: 1,
                name: "Leonard Nimoy".to_string(),
            },
            Actor {
                id: 2,
                name: "Ghost Actor".to_string(),
            },
        ],
        castings: vec![Casting {
            movie_id: 1,
            actor_id: 1,
            ord: 1,
        }],
    };
    load_dataset(&conn, &dataset).unwrap();
    path
}

#[test]
fn connection_opens_lazily_and_is_reused() {
    let dir = tempfile::tempdir().unwrap();
    let path = populated_file(dir.path());

    let manager = ConnectionManager::new(&path);
    assert!(!manager.is_open());
    assert_eq!(manager.path(), Some(path.as_path()));

    let first = manager.connection().unwrap() as *const _;
    assert!(manager.is_open());
    let second = manager.connection().unwrap() as *const _;
    assert_eq!(first, second);
}

#[test]
fn failed_open_leaves_manager_closed() {
    let dir = tempfile::tempdir().unwrap();
    let manager = ConnectionManager::new(dir.path().join("missing.db"));
    assert!(manager.connection().is_err());
    assert!(!manager.is_open());
}

#[test]
fn service_answers_every_query() {
    let dir = tempfile::tempdir().unwrap();
    let db = MovieDatabase::open(populated_file(dir.path()));
    assert!(!db.manager().is_open());

    let films = db.films_with_actor("Leonard Nimoy").unwrap();
    assert_eq!(films[0].title, "Zombies of the Stratosphere");
    assert!(db.manager().is_open());

    let cast = db.cast_list_for_movie("Zombies of the Stratosphere").unwrap();
    assert_eq!(cast[0].name, "Leonard Nimoy");
    assert!(db.busiest_years_for_actor("Leonard Nimoy").unwrap().is_empty());
    assert!(db.non_starring_films("Leonard Nimoy").unwrap().is_empty());

    let leads = db.lead_actors_for_year(1952).unwrap();
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0].name, "Leonard Nimoy");

    assert_eq!(
        db.count_actors_with_no_roles().unwrap(),
        BadActorCount { num_bad_actors: 1 }
    );

    let one_lead = db.actors_with_exact_starring_count(1).unwrap();
    assert_eq!(one_lead.len(), 1);
    assert!(db.actors_with_exact_starring_count(20).unwrap().is_empty());

    let co_stars = db.lead_co_stars_of("Leonard Nimoy").unwrap();
    assert_eq!(
        co_stars,
        vec![FilmLead {
            title: "Zombies of the Stratosphere".to_string(),
            name: "Leonard Nimoy".to_string()
        }]
    );
}

#[test]
fn service_surfaces_connectivity_errors() {
    let dir = tempfile::tempdir().unwrap();
    let db = MovieDatabase::open(dir.path().join("missing.db"));
    let err = db.films_with_actor("Anyone").unwrap_err();
    assert!(matches!(err, QueryError::Connect(SchemaError::NotFound(_))));
}

#[test]
fn service_over_memory_connection() {
    let conn = open_memory().unwrap();
    insert_actor(
        &conn,
        &Actor {
            id: 1,
            name: "Nobody".to_string(),
        },
    )
    .unwrap();
    let db = MovieDatabase::with_connection(conn);
    assert!(db.manager().is_open());
    assert_eq!(db.count_actors_with_no_roles().unwrap().num_bad_actors, 1);
    assert!(db.films_with_actor("Nobody").unwrap().is_empty());
}
