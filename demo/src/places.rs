//! Few common places in the city of Wrocław, used in the example app.

use teardrop::{PointAnnotation, lon_lat};

pub fn annotations() -> Vec<PointAnnotation> {
    vec![
        // https://en.wikipedia.org/wiki/Wroc%C5%82aw_G%C5%82%C3%B3wny_railway_station
        PointAnnotation::new(lon_lat(17.03664, 51.09916)).with_title("Wrocław Główny"),
        // Taking a public bus (line 106) is probably the cheapest option to get from the train
        // station to the airport.
        PointAnnotation::new(lon_lat(17.03940, 51.10005)).with_title("Dworcowa"),
        // https://www.teatr-capitol.pl/
        PointAnnotation::new(lon_lat(17.03018, 51.10073)).with_title("Capitol"),
        // Shopping center, and the main intercity bus station.
        PointAnnotation::new(lon_lat(17.03471, 51.09648)).with_title("Wroclavia"),
        PointAnnotation::new(lon_lat(17.03213, 51.10964)).with_title("Rynek"),
        // No title, shows just the pin.
        PointAnnotation::new(lon_lat(17.04470, 51.10436)),
        PointAnnotation::new(lon_lat(17.07517, 51.10447)).with_title("ZOO"),
    ]
}
