//! Integration tests for relational operators over the movie database.

use minirel_core::{tuple, KeyType, Tuple, Value};
use minirel_table::{Catalog, EngineConfig, IndexSetting, Table, TableError, Validation};
use std::collections::HashSet;
use std::sync::Arc;

/// Helper to create the movie table.
fn movie_table(catalog: &Arc<Catalog>) -> Table {
    let mut movie = catalog
        .create_table(
            "movie",
            "title year length genre studioName producerNo",
            "String Integer Integer String String Integer",
            "title year",
        )
        .unwrap();
    movie.insert(tuple!["Star_Wars", 1977, 124, "sciFi", "Fox", 12345]).unwrap();
    movie.insert(tuple!["Star_Wars_2", 1980, 124, "sciFi", "Fox", 12345]).unwrap();
    movie.insert(tuple!["Rocky", 1985, 200, "action", "Universal", 12125]).unwrap();
    movie.insert(tuple!["Rambo", 1978, 100, "action", "Universal", 32355]).unwrap();
    movie
}

/// Helper to create the cinema table, sharing two rows with movie.
fn cinema_table(catalog: &Arc<Catalog>) -> Table {
    let mut cinema = catalog
        .create_table(
            "cinema",
            "title year length genre studioName producerNo",
            "String Integer Integer String String Integer",
            "title year",
        )
        .unwrap();
    cinema.insert(tuple!["Rocky", 1985, 200, "action", "Universal", 12125]).unwrap();
    cinema.insert(tuple!["Rambo", 1978, 100, "action", "Universal", 32355]).unwrap();
    cinema.insert(tuple!["Galaxy_Quest", 1999, 104, "comedy", "DreamWorks", 67890]).unwrap();
    cinema
}

/// Helper to create the studio table.
fn studio_table(catalog: &Arc<Catalog>) -> Table {
    let mut studio = catalog
        .create_table("studio", "name address presNo", "String String Integer", "name")
        .unwrap();
    studio.insert(tuple!["Fox", "Los_Angeles", 7777]).unwrap();
    studio.insert(tuple!["Universal", "Universal_City", 8888]).unwrap();
    studio.insert(tuple!["DreamWorks", "Universal_City", 9999]).unwrap();
    studio
}

fn catalog_with(index: IndexSetting) -> Arc<Catalog> {
    Catalog::new(EngineConfig::default().with_index(index))
}

fn tuple_set(table: &Table) -> HashSet<Tuple> {
    table.tuples().iter().cloned().collect()
}

// ============================================================================
// Project
// ============================================================================

#[test]
fn test_project_columns() {
    let catalog = Catalog::with_defaults();
    let movie = movie_table(&catalog);
    let projected = movie.project("title year").unwrap();

    assert_eq!(projected.col("title"), Some(0));
    assert_eq!(projected.col("year"), Some(1));
    assert_eq!(projected.col("length"), None);
    assert_eq!(projected.key(), movie.key());
}

#[test]
fn test_project_all_is_identity() {
    let catalog = Catalog::with_defaults();
    let movie = movie_table(&catalog);
    let all = movie.attributes().join(" ");
    let projected = movie.project(&all).unwrap();

    assert_eq!(projected.attributes(), movie.attributes());
    assert_eq!(projected.domains(), movie.domains());
    assert_eq!(projected.tuples(), movie.tuples());
}

#[test]
fn test_project_unknown_attribute() {
    let catalog = Catalog::with_defaults();
    let movie = movie_table(&catalog);
    assert!(movie.project("title budget").is_none());
}

// ============================================================================
// Select
// ============================================================================

#[test]
fn test_select_key_tree_backend() {
    let catalog = catalog_with(IndexSetting::Tree);
    let movie = movie_table(&catalog);
    let selected = movie.select_key(&KeyType::single("Star_Wars"));

    assert_eq!(selected.len(), 1);
    assert_eq!(selected.tuple(0).unwrap()[0], Value::from("Star_Wars"));
}

#[test]
fn test_select_key_composite_hash_backend() {
    let catalog = Catalog::with_defaults();
    let movie = movie_table(&catalog);
    let key = KeyType::new(vec![Value::from("Rambo"), Value::Int32(1978)]);
    let selected = movie.select_key(&key);

    assert_eq!(selected.len(), 1);
    assert_eq!(selected.tuple(0).unwrap()[4], Value::from("Universal"));
}

#[test]
fn test_nested_select_equals_conjunction() {
    let catalog = Catalog::with_defaults();
    let movie = movie_table(&catalog);
    let year = movie.col("year").unwrap();
    let studio = movie.col("studioName").unwrap();

    let early = |t: &Tuple| t[year] < Value::Int32(1980);
    let universal = |t: &Tuple| t[studio] == Value::from("Universal");

    let nested = movie.select(early).select(universal);
    let conjunction = movie.select(|t| early(t) && universal(t));
    assert_eq!(tuple_set(&nested), tuple_set(&conjunction));
    assert_eq!(nested.len(), 1);
}

#[test]
fn test_select_range_over_range_index() {
    let catalog = catalog_with(IndexSetting::Range);
    let movie = movie_table(&catalog);
    let low = KeyType::new(vec![Value::from("Rambo"), Value::Int32(1978)]);
    let high = KeyType::new(vec![Value::from("Star_Wars"), Value::Int32(1977)]);
    let selected = movie.select_range(&low, &high);

    let titles: Vec<&str> = selected.tuples().iter().filter_map(|t| t[0].as_str()).collect();
    assert_eq!(titles, vec!["Rambo", "Rocky", "Star_Wars"]);
}

// ============================================================================
// Union / Minus
// ============================================================================

#[test]
fn test_union() {
    let catalog = Catalog::with_defaults();
    let movie = movie_table(&catalog);
    let cinema = cinema_table(&catalog);
    let union = movie.union(&cinema).unwrap();
    assert_eq!(union.len(), 5);
}

#[test]
fn test_minus() {
    let catalog = Catalog::with_defaults();
    let movie = movie_table(&catalog);
    let cinema = cinema_table(&catalog);
    let minus = movie.minus(&cinema).unwrap();
    assert_eq!(minus.len(), 2);
    assert!(minus.tuples().iter().all(|t| t[4] == Value::from("Fox")));
}

#[test]
fn test_minus_both_ways_disjoint() {
    let catalog = Catalog::with_defaults();
    let movie = movie_table(&catalog);
    let cinema = cinema_table(&catalog);
    let a_minus_b = tuple_set(&movie.minus(&cinema).unwrap());
    let b_minus_a = tuple_set(&cinema.minus(&movie).unwrap());
    assert!(a_minus_b.is_disjoint(&b_minus_a));
    assert_eq!(b_minus_a.len(), 1);
}

#[test]
fn test_incompatible_set_operators() {
    let catalog = Catalog::with_defaults();
    let movie = movie_table(&catalog);
    let studio = studio_table(&catalog);
    assert!(movie.union(&studio).is_none());
    assert!(movie.minus(&studio).is_none());
}

// ============================================================================
// Joins
// ============================================================================

#[test]
fn test_equi_join() {
    let catalog = Catalog::with_defaults();
    let movie = movie_table(&catalog);
    let studio = studio_table(&catalog);
    let joined = movie.join("studioName", "name", &studio).unwrap();

    assert_eq!(joined.len(), 4);
    let studio_name = joined.col("studioName").unwrap();
    let name = joined.col("name").unwrap();
    for t in joined.tuples() {
        assert_eq!(t[studio_name], t[name]);
    }
}

#[test]
fn test_natural_join() {
    let catalog = Catalog::with_defaults();
    let movie = movie_table(&catalog);
    let cinema = cinema_table(&catalog);
    let joined = movie.natural_join(&cinema);

    assert_eq!(joined.len(), 2);
    assert_eq!(joined.attributes(), movie.attributes());
}

#[test]
fn test_hash_join_miss_row() {
    let catalog = Catalog::with_defaults();
    let cinema = cinema_table(&catalog);
    let mut studio = catalog
        .create_table("studio", "name address presNo", "String String Integer", "name")
        .unwrap();
    studio.insert(tuple!["Universal", "Universal_City", 8888]).unwrap();

    let joined = cinema.hash_join("studioName", "name", &studio).unwrap();
    assert_eq!(joined.len(), 3);
    let galaxy = joined
        .tuples()
        .iter()
        .find(|t| t[0] == Value::from("Galaxy_Quest"))
        .unwrap();
    let address = joined.col("address").unwrap();
    assert!(galaxy[address].is_null());
    assert!(galaxy[address + 1].is_null());
}

#[test]
fn test_operators_name_results_from_catalog() {
    let catalog = Catalog::with_defaults();
    let movie = movie_table(&catalog);
    let first = movie.project("title").unwrap();
    let second = movie.select(|_| true);
    assert_eq!(first.name(), "movie0");
    assert_eq!(second.name(), "movie1");
}

// ============================================================================
// Validation / Persistence
// ============================================================================

#[test]
fn test_strict_validation() {
    let catalog = Catalog::new(EngineConfig::default().with_validation(Validation::Strict));
    let mut studio = studio_table(&catalog);
    assert!(studio.insert(tuple!["Pixar", "Emeryville", "many"]).is_err());
    assert!(studio.insert(tuple!["Pixar", "Emeryville"]).is_err());
    assert_eq!(studio.len(), 3);
}

#[test]
fn test_persistence_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = Catalog::new(EngineConfig::default().with_store_dir(dir.path()));
    let movie = movie_table(&catalog);
    catalog.save(&movie).unwrap();

    let loaded = catalog.load("movie").unwrap();
    assert_eq!(loaded.tuples(), movie.tuples());
    assert_eq!(loaded.schema(), movie.schema());
    let key = KeyType::new(vec![Value::from("Rocky"), Value::Int32(1985)]);
    assert!(loaded.index().unwrap().get(&key).is_some());

    let err = catalog.load("cinema").unwrap_err();
    assert!(matches!(err, TableError::TableNotFound(_)));
}
