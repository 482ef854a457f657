use ledgerdesk_core::db::open_db_in_memory;
use ledgerdesk_core::repo::country_repo::{ALL_COUNTRIES, COUNTRY_CODE_BY_NAME};
use ledgerdesk_core::{Country, CountryRepository, RepoError, SqliteCountryRepository};

#[test]
fn get_default_country_returns_first_row_by_code() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCountryRepository::try_new(&conn).unwrap();

    repo.create_country(&country(2, "Germany", "DEU")).unwrap();
    repo.create_country(&country(1, "United Arab Emirates", "ARE"))
        .unwrap();

    let default = repo.get_default_country().unwrap().unwrap();
    assert_eq!(default.country_code, 1);
}

#[test]
fn get_default_country_returns_none_when_empty() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCountryRepository::try_new(&conn).unwrap();

    assert!(repo.get_default_country().unwrap().is_none());
}

#[test]
fn list_countries_orders_by_country_code() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCountryRepository::try_new(&conn).unwrap();

    repo.create_country(&country(3, "Thailand", "THA")).unwrap();
    repo.create_country(&country(1, "United Arab Emirates", "ARE"))
        .unwrap();
    repo.create_country(&country(2, "Germany", "DEU")).unwrap();

    let codes: Vec<i64> = repo
        .list_countries()
        .unwrap()
        .into_iter()
        .map(|item| item.country_code)
        .collect();
    assert_eq!(codes, vec![1, 2, 3]);
}

#[test]
fn country_code_by_name_matches_exact_name() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCountryRepository::try_new(&conn).unwrap();

    repo.create_country(&country(1, "United Arab Emirates", "ARE"))
        .unwrap();
    repo.create_country(&country(2, "Germany", "DEU")).unwrap();

    assert_eq!(repo.country_code_by_name("Germany").unwrap(), Some(2));
}

#[test]
fn country_code_by_name_ignores_case_and_surrounding_whitespace() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCountryRepository::try_new(&conn).unwrap();

    repo.create_country(&country(1, "United Arab Emirates", "ARE"))
        .unwrap();

    assert_eq!(
        repo.country_code_by_name("united arab emirates").unwrap(),
        Some(1)
    );
    assert_eq!(
        repo.country_code_by_name("  United Arab Emirates  ").unwrap(),
        Some(1)
    );
}

#[test]
fn country_code_by_name_returns_none_for_unknown_name() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCountryRepository::try_new(&conn).unwrap();

    repo.create_country(&country(1, "United Arab Emirates", "ARE"))
        .unwrap();

    assert!(repo.country_code_by_name("Atlantis").unwrap().is_none());
}

#[test]
fn update_country_merges_description() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCountryRepository::try_new(&conn).unwrap();

    repo.create_country(&country(1, "United Arab Emirates", "ARE"))
        .unwrap();

    let mut revised = country(1, "United Arab Emirates", "ARE");
    revised.description = Some("head office jurisdiction".to_string());
    let persisted = repo.update_country(&revised).unwrap();

    assert_eq!(persisted, revised);
    let loaded = repo.find_country(1).unwrap().unwrap();
    assert_eq!(
        loaded.description.as_deref(),
        Some("head office jurisdiction")
    );
}

#[test]
fn update_country_strict_rejects_missing_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCountryRepository::try_new(&conn).unwrap();

    let err = repo
        .update_country_strict(&country(8, "Atlantis", "ATL"))
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::NotFound {
            table: "countries",
            ..
        }
    ));
    assert!(repo.find_country(8).unwrap().is_none());
}

#[test]
fn query_identifiers_are_stable() {
    assert_eq!(ALL_COUNTRIES.name(), "all_countries");
    assert_eq!(COUNTRY_CODE_BY_NAME.name(), "country_code_by_name");
}

fn country(code: i64, name: &str, iso_alpha3: &str) -> Country {
    Country::new(code, name, iso_alpha3)
}
