use tabled::Table;

use crate::{charts, info, types::CountryTableRow};

pub fn countries() {
    let rows: Vec<CountryTableRow> = charts::COUNTRY_CHARTS
        .iter()
        .map(|(country, playlist)| CountryTableRow {
            country: country.to_string(),
            playlist: playlist.to_string(),
        })
        .collect();

    info!("{} chart playlists", rows.len());

    let table = Table::new(rows);
    println!("{}", table);
}
