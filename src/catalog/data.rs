//! Bundled seed dataset.
//!
//! A compact curated set covering the city center plus oblast day trips,
//! kept intentionally small so the demo is easy to run.

use super::{Poi, Region};

fn poi(
    id: &str,
    name: &str,
    region: Region,
    lat: f64,
    lon: f64,
    tags: &[&str],
    short: &str,
) -> Poi {
    Poi {
        id: id.to_string(),
        name: name.to_string(),
        region,
        lat,
        lon,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        short: short.to_string(),
    }
}

pub(super) fn seed_pois() -> Vec<Poi> {
    vec![
        poi(
            "hermitage",
            "Hermitage (Winter Palace)",
            Region::Spb,
            59.939832,
            30.31456,
            &["classic", "art", "history", "rain_ok"],
            "The city's main museum: art and history right in the center.",
        ),
        poi(
            "palace-square",
            "Palace Square",
            Region::Spb,
            59.939095,
            30.315868,
            &["classic", "walk", "architecture", "views", "budget"],
            "Heart of the historic center, key sights within a short walk.",
        ),
        poi(
            "isaac",
            "Saint Isaac's Cathedral",
            Region::Spb,
            59.934158,
            30.306096,
            &["classic", "architecture", "views", "history", "rain_ok"],
            "Monumental cathedral with great views from the colonnade.",
        ),
        poi(
            "church-savior",
            "Church of the Savior on Spilled Blood",
            Region::Spb,
            59.940075,
            30.328657,
            &["classic", "architecture", "history", "rain_ok"],
            "One of the most recognizable churches, mosaics inside.",
        ),
        poi(
            "russian-museum",
            "Russian Museum (Mikhailovsky Palace)",
            Region::Spb,
            59.9389,
            30.3326,
            &["art", "classic", "rain_ok"],
            "Large collection of Russian art in a handsome palace.",
        ),
        poi(
            "summer-garden",
            "Summer Garden",
            Region::Spb,
            59.9499,
            30.3315,
            &["walk", "classic", "views", "budget"],
            "A stroll among sculptures and alleys, perfect for a breather.",
        ),
        poi(
            "nevsky",
            "Nevsky Prospect (walk)",
            Region::Spb,
            59.9323,
            30.344,
            &["walk", "classic", "food", "coffee", "budget"],
            "The main street: architecture, shopfronts, cafes, atmosphere.",
        ),
        poi(
            "new-holland",
            "New Holland Island",
            Region::Spb,
            59.9319,
            30.2916,
            &["walk", "food", "coffee", "kids", "budget"],
            "Island park with cafes, playgrounds and a modern city vibe.",
        ),
        poi(
            "sevkabel",
            "Sevkabel Port",
            Region::Spb,
            59.9259,
            30.2395,
            &["views", "food", "coffee", "walk", "night", "budget"],
            "Gulf of Finland embankment, sunsets, food courts, events.",
        ),
        poi(
            "petropavlovka",
            "Peter and Paul Fortress",
            Region::Spb,
            59.9506,
            30.3162,
            &["classic", "history", "walk", "views", "budget"],
            "Where the city began; walls to walk along and Neva views.",
        ),
        poi(
            "vsm",
            "Kunstkamera",
            Region::Spb,
            59.9413,
            30.3076,
            &["history", "rain_ok"],
            "Old museum with unusual exhibits and a history of science.",
        ),
        poi(
            "strelka",
            "Spit of Vasilyevsky Island",
            Region::Spb,
            59.9434,
            30.3062,
            &["views", "walk", "classic", "budget"],
            "Postcard views of the Neva and the center, best at sunset.",
        ),
        poi(
            "kazansky",
            "Kazan Cathedral",
            Region::Spb,
            59.9342,
            30.3246,
            &["architecture", "classic", "history", "rain_ok", "budget"],
            "Imperial architecture and a grand colonnade on Nevsky.",
        ),
        poi(
            "faberge",
            "Faberge Museum",
            Region::Spb,
            59.9295,
            30.3467,
            &["art", "rain_ok"],
            "Elegant museum with the imperial eggs and jewellery art.",
        ),
        poi(
            "loft-etagi",
            "Loft Project Etagi",
            Region::Spb,
            59.9166,
            30.3492,
            &["views", "coffee", "rain_ok", "budget"],
            "Contemporary space with a rooftop viewpoint (when open).",
        ),
        poi(
            "planetarium",
            "Planetarium No. 1",
            Region::Spb,
            59.9215,
            30.3082,
            &["rain_ok", "kids"],
            "Immersive shows, a great evening or rainy-day option.",
        ),
        poi(
            "zoo",
            "Leningrad Zoo",
            Region::Spb,
            59.9526,
            30.3084,
            &["kids", "walk"],
            "Classic family activity next to the Petrogradsky side.",
        ),
        poi(
            "peterhof",
            "Peterhof (fountains and parks)",
            Region::Spb,
            59.8845,
            29.9169,
            &["classic", "daytrip", "nature", "walk", "views"],
            "Palaces and parks by the gulf; best as a half or full day.",
        ),
        poi(
            "tsarskoye",
            "Tsarskoye Selo (Pushkin)",
            Region::Spb,
            59.716,
            30.396,
            &["classic", "daytrip", "history", "architecture"],
            "Palace-and-park ensemble, well suited to a one-day trip.",
        ),
        poi(
            "kronstadt",
            "Kronstadt",
            Region::Spb,
            59.9936,
            29.7667,
            &["daytrip", "history", "views", "walk", "budget"],
            "Naval history, the dam, sea views and an unhurried pace.",
        ),
        poi(
            "vyborg",
            "Vyborg (old town)",
            Region::Lenobl,
            60.7133,
            28.7328,
            &["daytrip", "history", "walk", "views"],
            "Scandinavian feel, narrow lanes and medieval touches.",
        ),
        poi(
            "vyborg-castle",
            "Vyborg Castle",
            Region::Lenobl,
            60.7164,
            28.7292,
            &["daytrip", "history", "views", "rain_ok"],
            "Symbol of Vyborg; museum and tower views (check hours).",
        ),
        poi(
            "monrepo",
            "Mon Repos Park (Vyborg)",
            Region::Lenobl,
            60.7366,
            28.7156,
            &["daytrip", "nature", "walk", "views"],
            "Cliffs, trails and the bay, Vyborg's best nature spot.",
        ),
        poi(
            "oreshek",
            "Oreshek Fortress (Shlisselburg)",
            Region::Lenobl,
            59.9567,
            31.0333,
            &["daytrip", "history", "views"],
            "Island fortress at the source of the Neva, dense history.",
        ),
        poi(
            "gatchina",
            "Gatchina (palace and park)",
            Region::Lenobl,
            59.5673,
            30.1315,
            &["daytrip", "classic", "walk", "nature", "history", "rain_ok"],
            "Big park plus palace, a convenient one-day trip.",
        ),
        poi(
            "priyutino",
            "Priyutino Estate",
            Region::Lenobl,
            60.0197,
            30.6757,
            &["daytrip", "history", "rain_ok", "budget"],
            "Small estate museum near the city, a quiet format.",
        ),
        poi(
            "lindulovskaya",
            "Lindulovskaya Grove (Roshchino)",
            Region::Lenobl,
            60.243,
            29.602,
            &["daytrip", "nature", "walk", "budget"],
            "Nature-and-fresh-air route, a proper anti-city day.",
        ),
        poi(
            "repino",
            "Repino (coast and walk)",
            Region::Lenobl,
            60.172,
            29.87,
            &["daytrip", "nature", "walk", "views", "budget"],
            "The gulf, pines and an easy walk; works in almost any weather.",
        ),
        poi(
            "sestroretsk",
            "Sestroretsk (park, beach, gulf)",
            Region::Spb,
            60.092,
            29.956,
            &["nature", "walk", "views", "budget"],
            "Waterside nature time within city limits.",
        ),
    ]
}
