use owo_colors::{OwoColorize, Style};
use spinners_rs::{Spinner, Spinners};
use tracing::info;

use crate::cli::currencies::list_currencies;
use crate::cli::shared::{format_amount, format_rate, parse_amount, prompt};
use crate::database::models::conversion::NewConversion;
use crate::database::HistoryStore;
use crate::services::catalog;
use crate::services::market_data::rates::{RateClient, RateError};

/// One conversion flow: prompts, validation, a single rate fetch, one store
/// write. Any failure abandons the flow with no record written and returns
/// to the menu.
pub async fn convert(store: &HistoryStore, rates: &RateClient) -> anyhow::Result<()> {
    list_currencies();

    let from_currency = prompt("\nEnter from currency code: ")?.to_uppercase();
    let to_currency = prompt("Enter to currency code: ")?.to_uppercase();

    if !catalog::is_supported(&from_currency) || !catalog::is_supported(&to_currency) {
        println!("Error: Please choose from supported currencies only.");
        return Ok(());
    }

    let Some(amount) = parse_amount(&prompt("Enter amount: ")?) else {
        println!("Error: Please enter a valid positive number.");
        return Ok(());
    };

    let mut sp = Spinner::new(Spinners::Point, "Fetching the latest exchange rate...");
    sp.start();
    let fetched = rates.fetch_rate(&from_currency, &to_currency).await;
    sp.stop();
    println!();

    let rate = match fetched {
        Ok(rate) => rate,
        Err(err @ RateError::Network(_)) => {
            println!("Error: {}. Please check your connection and try again.", err);
            return Ok(());
        }
        Err(err @ RateError::Auth) => {
            println!("Error: {}. Please check your API_KEY.", err);
            return Ok(());
        }
        Err(err @ RateError::InvalidResponse(_)) => {
            println!("Error: {}.", err);
            return Ok(());
        }
    };

    let converted_amount = amount * rate;

    let result_style = Style::new().black().on_white().bold();
    println!("\nConversion Result:");
    println!(
        "{}",
        format!(
            "{} {} = {} {} (rate {})",
            format_amount(amount),
            from_currency,
            format_amount(converted_amount),
            to_currency,
            format_rate(rate)
        )
        .style(result_style)
    );

    let record = NewConversion {
        from_currency,
        to_currency,
        amount,
        converted_amount,
        rate,
    };
    match store.append(record).await {
        Ok(id) => info!(id, "conversion recorded"),
        Err(err) => println!("Warning: conversion was not recorded in history: {}", err),
    }
    Ok(())
}
