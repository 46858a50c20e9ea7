//! Neighbourhood reference data
//!
//! Desks are grouped in clusters named like `6.A01`; each seat of a cluster is
//! a desk called `Desk 6.A01.<seat>`.

use serde::Serialize;
use utoipa::ToSchema;

/// A fixed set of desks on one floor
#[derive(Debug)]
pub struct Neighbourhood {
    pub floor: &'static str,
    pub name: &'static str,
    /// (cluster, seat count)
    clusters: &'static [(&'static str, u8)],
}

impl Neighbourhood {
    /// Desk identifiers in listing order
    pub fn desk_ids(&self) -> Vec<String> {
        self.clusters
            .iter()
            .flat_map(|(cluster, seats)| (1..=*seats).map(move |seat| format!("Desk {}.{}", cluster, seat)))
            .collect()
    }
}

const LEVEL_6: &str = "Level 6";

pub static NEIGHBOURHOODS: &[Neighbourhood] = &[
    Neighbourhood {
        floor: LEVEL_6,
        name: "A (Station)",
        clusters: &[
            ("6.A01", 8), ("6.A02", 4), ("6.A03", 4), ("6.A04", 4), ("6.A05", 4),
            ("6.A06", 8), ("6.A07", 8), ("6.A08", 8), ("6.A09", 8), ("6.A10", 4),
            ("6.A11", 4), ("6.A12", 8), ("6.A21", 8), ("6.A22", 8),
        ],
    },
    Neighbourhood {
        floor: LEVEL_6,
        name: "A (City)",
        clusters: &[
            ("6.A13", 8), ("6.A14", 8), ("6.A15", 4), ("6.A16", 8),
            ("6.A17", 8), ("6.A18", 4), ("6.A19", 8), ("6.A20", 8),
        ],
    },
    Neighbourhood {
        floor: LEVEL_6,
        name: "B (Station)",
        clusters: &[
            ("6.B01", 4), ("6.B02", 4), ("6.B03", 8), ("6.B04", 8), ("6.B05", 4),
            ("6.B06", 4), ("6.B07", 4), ("6.B08", 4), ("6.B17", 8), ("6.B18", 8),
        ],
    },
    Neighbourhood {
        floor: LEVEL_6,
        name: "B (City)",
        clusters: &[
            ("6.B09", 8), ("6.B10", 8), ("6.B11", 8), ("6.B12", 4),
            ("6.B13", 4), ("6.B14", 8), ("6.B15", 8), ("6.B16", 8),
        ],
    },
    Neighbourhood {
        floor: LEVEL_6,
        name: "C (Station)",
        clusters: &[
            ("6.C01", 8), ("6.C02", 4), ("6.C03", 4), ("6.C04", 4), ("6.C05", 4),
            ("6.C06", 8), ("6.C07", 4), ("6.C08", 4), ("6.C09", 8), ("6.C10", 8),
        ],
    },
    Neighbourhood {
        floor: LEVEL_6,
        name: "D (Station)",
        clusters: &[
            ("6.D01", 8), ("6.D02", 4), ("6.D03", 4), ("6.D04", 8), ("6.D05", 8),
            ("6.D06", 4), ("6.D07", 4), ("6.D08", 8), ("6.D16", 8), ("6.D17", 8),
        ],
    },
    Neighbourhood {
        floor: LEVEL_6,
        name: "D (City)",
        clusters: &[
            ("6.D09", 8), ("6.D10", 4), ("6.D11", 8), ("6.D12", 8),
            ("6.D13", 4), ("6.D14", 8), ("6.D15", 8),
        ],
    },
];

pub fn find(floor: &str, name: &str) -> Option<&'static Neighbourhood> {
    NEIGHBOURHOODS
        .iter()
        .find(|n| n.floor == floor && n.name == name)
}

/// Floors with their neighbourhood names, in listing order
#[derive(Debug, Serialize, ToSchema)]
pub struct FloorNeighbourhoods {
    pub floor: String,
    pub neighbourhoods: Vec<String>,
}

pub fn by_floor() -> Vec<FloorNeighbourhoods> {
    let mut floors: Vec<FloorNeighbourhoods> = Vec::new();
    for n in NEIGHBOURHOODS {
        match floors.iter_mut().find(|f| f.floor == n.floor) {
            Some(entry) => entry.neighbourhoods.push(n.name.to_string()),
            None => floors.push(FloorNeighbourhoods {
                floor: n.floor.to_string(),
                neighbourhoods: vec![n.name.to_string()],
            }),
        }
    }
    floors
}
