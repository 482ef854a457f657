use ledgerdesk_core::db::open_db_in_memory;
use ledgerdesk_core::{Company, CompanyRepository, SqliteCompanyRepository};

#[test]
fn create_and_find_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCompanyRepository::try_new(&conn).unwrap();

    let mut original = company(1, "Acme Trading LLC");
    original.registration_number = Some("REG123".to_string());
    original.vat_number = Some("VAT456".to_string());
    original.email_address = Some("office@acme.example".to_string());
    original.currency_code = Some(7);
    original.country_code = Some(3);
    repo.create_company(&original).unwrap();

    let loaded = repo.find_company(1).unwrap().unwrap();
    assert_eq!(loaded, original);
    assert_eq!(loaded.registration_number.as_deref(), Some("REG123"));
    assert_eq!(loaded.vat_number.as_deref(), Some("VAT456"));
}

#[test]
fn find_company_returns_none_for_unknown_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCompanyRepository::try_new(&conn).unwrap();

    repo.create_company(&company(1, "First")).unwrap();
    repo.create_company(&company(2, "Second")).unwrap();
    repo.create_company(&company(3, "Third")).unwrap();

    assert!(repo.find_company(999).unwrap().is_none());
}

#[test]
fn get_company_returns_first_row_by_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCompanyRepository::try_new(&conn).unwrap();

    repo.create_company(&company(2, "Second")).unwrap();
    repo.create_company(&company(1, "First")).unwrap();

    let active = repo.get_company().unwrap().unwrap();
    assert_eq!(active.company_id, 1);
}

#[test]
fn get_company_returns_none_when_empty() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCompanyRepository::try_new(&conn).unwrap();

    assert!(repo.get_company().unwrap().is_none());
}

#[test]
fn dropdown_pairs_company_id_with_name() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCompanyRepository::try_new(&conn).unwrap();

    repo.create_company(&company(1, "Beta Works")).unwrap();
    repo.create_company(&company(2, "acme Labs")).unwrap();

    let entries = repo.companies_for_dropdown().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].value, 2);
    assert_eq!(entries[0].label, "acme Labs");
    assert_eq!(entries[1].value, 1);
    assert_eq!(entries[1].label, "Beta Works");
}

#[test]
fn dropdown_on_empty_store_is_empty() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCompanyRepository::try_new(&conn).unwrap();

    assert!(repo.companies_for_dropdown().unwrap().is_empty());
}

#[test]
fn dropdown_excludes_soft_deleted_companies() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCompanyRepository::try_new(&conn).unwrap();

    let mut retired = company(1, "Retired LLC");
    retired.soft_delete();
    repo.create_company(&retired).unwrap();
    repo.create_company(&company(2, "Active LLC")).unwrap();

    let entries = repo.companies_for_dropdown().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].value, 2);
}

#[test]
fn update_company_merges_contact_fields() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCompanyRepository::try_new(&conn).unwrap();

    repo.create_company(&company(1, "Acme Trading LLC")).unwrap();

    let mut revised = company(1, "Acme Trading LLC");
    revised.phone_number = Some("+971-4-0000000".to_string());
    revised.website = Some("https://acme.example".to_string());
    let persisted = repo.update_company(&revised).unwrap();

    assert_eq!(persisted, revised);
    let loaded = repo.find_company(1).unwrap().unwrap();
    assert_eq!(loaded.phone_number.as_deref(), Some("+971-4-0000000"));
    assert_eq!(loaded.website.as_deref(), Some("https://acme.example"));
}

#[test]
fn probe_storage_reports_presence_of_rows() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCompanyRepository::try_new(&conn).unwrap();

    assert!(repo.probe_storage().unwrap().is_none());

    repo.create_company(&company(1, "Acme Trading LLC")).unwrap();
    assert_eq!(repo.probe_storage().unwrap(), Some(1));
}

fn company(company_id: i64, company_name: &str) -> Company {
    Company::new(company_id, company_name, 1_700_000_000_000)
}
