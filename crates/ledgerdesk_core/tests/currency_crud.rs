use ledgerdesk_core::db::open_db_in_memory;
use ledgerdesk_core::repo::currency_repo::{
    ALL_ACTIVE_CURRENCIES, ALL_COMPANY_CURRENCIES, ALL_CURRENCIES, ALL_CURRENCIES_PROFILE,
    CURRENCIES_EXCLUDING,
};
use ledgerdesk_core::{
    Company, CompanyRepository, Currency, CurrencyRepository, SqliteCompanyRepository,
    SqliteCurrencyRepository,
};

#[test]
fn get_default_currency_respects_display_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCurrencyRepository::try_new(&conn).unwrap();

    let mut dirham = currency(1, "Dirham", "AED");
    dirham.display_order = 2;
    let mut euro = currency(2, "Euro", "EUR");
    euro.display_order = 1;
    repo.create_currency(&dirham).unwrap();
    repo.create_currency(&euro).unwrap();

    let default = repo.get_default_currency().unwrap().unwrap();
    assert_eq!(default.currency_code, 2);
}

#[test]
fn get_default_currency_returns_none_when_empty() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCurrencyRepository::try_new(&conn).unwrap();

    assert!(repo.get_default_currency().unwrap().is_none());
}

#[test]
fn list_currencies_breaks_display_order_ties_by_code() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCurrencyRepository::try_new(&conn).unwrap();

    repo.create_currency(&currency(2, "Euro", "EUR")).unwrap();
    repo.create_currency(&currency(1, "Dirham", "AED")).unwrap();

    let codes: Vec<i64> = repo
        .list_currencies()
        .unwrap()
        .into_iter()
        .map(|item| item.currency_code)
        .collect();
    assert_eq!(codes, vec![1, 2]);
}

#[test]
fn update_currency_merges_description() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCurrencyRepository::try_new(&conn).unwrap();

    repo.create_currency(&currency(1, "Dirham", "AED")).unwrap();

    let mut revised = currency(1, "Dirham", "AED");
    revised.description = Some("Updated Currency".to_string());
    let persisted = repo.update_currency(&revised).unwrap();

    assert_eq!(persisted, revised);
    let loaded = repo.find_currency(1).unwrap().unwrap();
    assert_eq!(loaded.description.as_deref(), Some("Updated Currency"));
}

#[test]
fn update_currency_inserts_row_when_key_is_absent() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCurrencyRepository::try_new(&conn).unwrap();

    let merged = repo.update_currency(&currency(9, "Baht", "THB")).unwrap();

    assert_eq!(merged.currency_code, 9);
    assert!(repo.find_currency(9).unwrap().is_some());
}

#[test]
fn profile_listing_excludes_deleted_and_orders_by_name() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCurrencyRepository::try_new(&conn).unwrap();

    repo.create_currency(&currency(1, "Dirham", "AED")).unwrap();
    repo.create_currency(&currency(2, "baht", "THB")).unwrap();
    let mut retired = currency(3, "Euro", "EUR");
    retired.soft_delete();
    repo.create_currency(&retired).unwrap();

    let names: Vec<String> = repo
        .list_profile_currencies()
        .unwrap()
        .into_iter()
        .map(|item| item.currency_name)
        .collect();
    assert_eq!(names, vec!["baht".to_string(), "Dirham".to_string()]);
}

#[test]
fn active_listing_excludes_deleted_and_keeps_display_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCurrencyRepository::try_new(&conn).unwrap();

    let mut dirham = currency(1, "Dirham", "AED");
    dirham.display_order = 2;
    let mut euro = currency(2, "Euro", "EUR");
    euro.display_order = 1;
    let mut retired = currency(3, "Baht", "THB");
    retired.soft_delete();
    repo.create_currency(&dirham).unwrap();
    repo.create_currency(&euro).unwrap();
    repo.create_currency(&retired).unwrap();

    let codes: Vec<i64> = repo
        .list_active_currencies()
        .unwrap()
        .into_iter()
        .map(|item| item.currency_code)
        .collect();
    assert_eq!(codes, vec![2, 1]);
}

#[test]
fn company_listing_returns_only_referenced_currencies() {
    let conn = open_db_in_memory().unwrap();
    let currencies = SqliteCurrencyRepository::try_new(&conn).unwrap();
    let companies = SqliteCompanyRepository::try_new(&conn).unwrap();

    currencies.create_currency(&currency(1, "Dirham", "AED")).unwrap();
    currencies.create_currency(&currency(2, "Euro", "EUR")).unwrap();
    currencies.create_currency(&currency(3, "Baht", "THB")).unwrap();

    let mut first = Company::new(1, "First", 1_700_000_000_000);
    first.currency_code = Some(2);
    let mut second = Company::new(2, "Second", 1_700_000_000_000);
    second.currency_code = Some(3);
    let third = Company::new(3, "Third", 1_700_000_000_000);
    companies.create_company(&first).unwrap();
    companies.create_company(&second).unwrap();
    companies.create_company(&third).unwrap();

    let codes: Vec<i64> = currencies
        .list_company_currencies()
        .unwrap()
        .into_iter()
        .map(|item| item.currency_code)
        .collect();
    assert_eq!(codes, vec![2, 3]);
}

#[test]
fn exclusion_listing_omits_matching_iso_code_and_deleted_rows() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCurrencyRepository::try_new(&conn).unwrap();

    let dirham = currency(1, "Dirham", "AED");
    repo.create_currency(&dirham).unwrap();
    repo.create_currency(&currency(2, "Euro", "EUR")).unwrap();
    let mut retired = currency(3, "Dollar", "USD");
    retired.soft_delete();
    repo.create_currency(&retired).unwrap();

    let codes: Vec<i64> = repo
        .currencies_excluding(&dirham)
        .unwrap()
        .into_iter()
        .map(|item| item.currency_code)
        .collect();
    assert_eq!(codes, vec![2]);
}

#[test]
fn query_identifiers_are_stable() {
    assert_eq!(ALL_CURRENCIES.name(), "all_currencies");
    assert_eq!(ALL_CURRENCIES_PROFILE.name(), "all_currencies_profile");
    assert_eq!(ALL_COMPANY_CURRENCIES.name(), "all_company_currencies");
    assert_eq!(ALL_ACTIVE_CURRENCIES.name(), "all_active_currencies");
    assert_eq!(CURRENCIES_EXCLUDING.name(), "currencies_excluding");
}

fn currency(code: i64, name: &str, iso_code: &str) -> Currency {
    Currency::new(code, name, iso_code, 1_700_000_000_000)
}
