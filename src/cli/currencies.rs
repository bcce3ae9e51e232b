use tabled::{Table, Tabled};

use crate::services::catalog;

#[derive(Tabled)]
struct CatalogRow {
    code: &'static str,
    currency: &'static str,
}

pub fn list_currencies() {
    let rows: Vec<CatalogRow> = catalog::all()
        .iter()
        .map(|(code, name)| CatalogRow {
            code,
            currency: name,
        })
        .collect();

    let table = Table::new(&rows).to_string();
    println!("\n{}", table);
}
