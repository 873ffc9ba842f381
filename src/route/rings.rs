//! Regional cruising rings and region inference
//!
//! A ring is a hand-curated ordered list of stop names forming a plausible
//! closed cruising circuit for a region. Rings are reference data, not
//! derived; auto-routing rotates and walks them (see [`crate::route`]).
//!
//! `auto_pick_region` is a coarse keyword heuristic for the convenience
//! default; explicit user region selection always overrides it.

use crate::catalog::Region;

/// The curated cruising ring for a region, in circuit order
pub fn ring(region: Region) -> &'static [&'static str] {
    match region {
        Region::Saronic => &[
            "Alimos", "Aegina", "Agistri", "Epidavros", "Poros", "Hydra", "Ermioni", "Spetses",
            "Perdika",
        ],
        Region::Cyclades => &[
            "Lavrion", "Kea", "Kythnos", "Syros", "Mykonos", "Paros", "Naxos", "Ios", "Milos",
            "Sifnos", "Serifos",
        ],
        Region::Ionian => &[
            "Corfu", "Paxos", "Preveza", "Lefkada", "Nydri", "Meganisi", "Fiskardo", "Ithaca",
            "Zakynthos", "Sivota",
        ],
        Region::Dodecanese => &[
            "Kos", "Nisyros", "Symi", "Rhodes", "Kalymnos", "Leros", "Patmos",
        ],
        Region::Sporades => &["Volos", "Trikeri", "Skiathos", "Skopelos", "Alonissos"],
        Region::NorthAegean => &["Myrina", "Mytilene", "Chios", "Samos"],
        Region::Crete => &["Chania", "Rethymno", "Heraklion", "Agios Nikolaos"],
    }
}

/// Keyword tables for region inference, checked in order
///
/// A name containing any keyword implies the region. Saronic is checked
/// last among the explicit tables because Athens-area home ports appear in
/// trips to every region.
const REGION_KEYWORDS: &[(Region, &[&str])] = &[
    (
        Region::Ionian,
        &[
            "corfu", "kerkyra", "gouvia", "paxos", "gaios", "preveza", "lefkada", "lefkas",
            "nydri", "nidri", "meganisi", "kefalonia", "fiskardo", "ithaca", "ithaki",
            "zakynthos", "zante", "sivota", "syvota",
        ],
    ),
    (
        Region::Dodecanese,
        &[
            "kos", "kalymnos", "pothia", "leros", "lakki", "patmos", "symi", "nisyros",
            "rhodes", "rodos",
        ],
    ),
    (
        Region::Sporades,
        &["volos", "trikeri", "skiathos", "skopelos", "alonissos"],
    ),
    (
        Region::NorthAegean,
        &["lesvos", "mytilene", "mytilini", "chios", "samos", "pythagorio", "limnos", "myrina"],
    ),
    (
        Region::Crete,
        &["crete", "chania", "hania", "rethymno", "heraklion", "iraklio", "agios nikolaos"],
    ),
    (
        Region::Saronic,
        &[
            "alimos", "kalamaki", "athens", "aegina", "aigina", "agistri", "poros", "hydra",
            "ydra", "spetses", "ermioni", "epidavros", "perdika",
        ],
    ),
];

/// Infer a region from start/end names by keyword matching
///
/// Defaults to Cyclades when nothing matches. Intentionally coarse; a
/// convenience default only.
pub fn auto_pick_region(start: &str, end: &str) -> Region {
    let haystack = format!(
        "{} {}",
        crate::catalog::normalize::normalize(start),
        crate::catalog::normalize::normalize(end)
    );
    let words: Vec<&str> = haystack.split_whitespace().collect();
    for (region, keywords) in REGION_KEYWORDS {
        for kw in *keywords {
            // Short keywords match whole words only ("kos" must not fire
            // on "mykonos"); longer ones may match inside a word.
            let hit = if kw.len() < 5 && !kw.contains(' ') {
                words.iter().any(|w| w == kw)
            } else {
                haystack.contains(kw)
            };
            if hit {
                return *region;
            }
        }
    }
    Region::Cyclades
}
