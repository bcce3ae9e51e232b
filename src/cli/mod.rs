pub mod convert;
pub mod currencies;
pub mod history;
pub mod shared;

use convert::convert;
use currencies::list_currencies;
use history::show_history;
use shared::prompt;

use crate::database::HistoryStore;
use crate::services::market_data::rates::RateClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    ListCurrencies,
    Convert,
    History,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::ListCurrencies),
            "2" => Some(MenuChoice::Convert),
            "3" => Some(MenuChoice::History),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

fn print_menu() {
    println!("\nCurrency Converter Menu:");
    println!("1. List supported currencies");
    println!("2. Convert currency");
    println!("3. View conversion history");
    println!("4. Exit");
}

pub async fn cli(
    store: &HistoryStore,
    rates: &RateClient,
    history_limit: i64,
) -> anyhow::Result<()> {
    loop {
        print_menu();
        let input = prompt("\nEnter your choice (1-4): ")?;

        let Some(choice) = MenuChoice::parse(&input) else {
            println!("Invalid choice. Please try again.");
            continue;
        };

        match choice {
            MenuChoice::ListCurrencies => list_currencies(),
            MenuChoice::Convert => convert(store, rates).await?,
            MenuChoice::History => show_history(store, history_limit).await?,
            MenuChoice::Exit => break,
        }
    }
    Ok(())
}
