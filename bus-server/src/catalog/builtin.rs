//! Built-in default network.
//!
//! The Mangalore city bus network the application ships with, used when
//! no catalog file is configured.

use crate::domain::{Line, LineId};

use super::Catalog;

fn line(id: &str, label: &str, description: &str, stops: &[&str]) -> Option<Line> {
    let id = LineId::parse(id).ok()?;
    Some(Line {
        id,
        label: label.to_string(),
        description: description.to_string(),
        stops: stops.iter().map(|s| s.to_string()).collect(),
    })
}

/// The default Mangalore city network.
pub fn mangalore_network() -> Catalog {
    let lines = [
        line(
            "1",
            "15",
            "Statebank to KPT",
            &["Statebank", "Hampankatta", "PVS", "MG Road", "KPT"],
        ),
        line(
            "2",
            "45G",
            "Statebank to Surathkal",
            &[
                "Statebank",
                "Lalbagh",
                "Bejai",
                "Kottara Chowki",
                "Kulur",
                "Surathkal",
            ],
        ),
        line(
            "3",
            "2C",
            "Kavoor to Statebank",
            &["Kavoor", "Bondel", "Yeyyadi", "Kuntikan", "Statebank"],
        ),
        line(
            "4",
            "19",
            "Statebank to Mangaladevi",
            &["Statebank", "Clock Tower", "Falnir", "Kankanady", "Mangaladevi"],
        ),
        line(
            "5",
            "52",
            "Mangalore University to Statebank",
            &[
                "Mangalore University",
                "Konaje",
                "Thokottu",
                "Pumpwell",
                "Statebank",
            ],
        ),
        line(
            "6",
            "33",
            "Statebank to Bajpe Airport",
            &["Statebank", "Kavoor", "Maravoor", "Kenjar", "Bajpe Airport"],
        ),
        line(
            "7",
            "27",
            "Statebank to Cascia",
            &["Statebank", "Hampankatta", "Jyothi", "Balmatta", "Cascia"],
        ),
        line(
            "8",
            "6B",
            "Shaktinagar to Statebank",
            &["Shaktinagar", "Nanthoor", "Bikarnakatte", "Kankanady", "Statebank"],
        ),
    ];

    Catalog::new(lines.into_iter().flatten().collect())
}
