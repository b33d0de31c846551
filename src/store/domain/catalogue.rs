//! Default store catalogue and par levels for the operation.

use super::SupplyQuantities;

/// One store of the default catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogueEntry {
    /// Department number.
    pub department_number: &'static str,
    /// Store name.
    pub store_name: &'static str,
    /// Default par levels.
    pub levels: SupplyQuantities,
}

/// Levels are listed as sleeves, caps, canvases, totes, hardlines raw,
/// softlines raw.
const fn entry(
    department_number: &'static str,
    store_name: &'static str,
    levels: [u32; 6],
) -> CatalogueEntry {
    let [sleeves, caps, canvases, totes, hardlines_raw, softlines_raw] = levels;
    CatalogueEntry {
        department_number,
        store_name,
        levels: SupplyQuantities {
            sleeves,
            caps,
            canvases,
            totes,
            hardlines_raw,
            softlines_raw,
        },
    }
}

const CATALOGUE: [CatalogueEntry; 20] = [
    entry("9011", "Tri-County", [40, 80, 12, 21, 20, 45]),
    entry("9012", "Cheviot", [10, 20, 13, 12, 5, 5]),
    entry("9014", "Independence", [11, 22, 11, 13, 10, 10]),
    entry("9015", "Hamilton", [10, 20, 22, 22, 12, 12]),
    entry("9016", "Oakley", [21, 42, 21, 34, 20, 20]),
    entry("9017", "Lebanon", [20, 40, 34, 33, 17, 17]),
    entry("9018", "Loveland", [30, 60, 32, 24, 20, 20]),
    entry("9019", "Bellevue", [26, 52, 22, 26, 15, 15]),
    entry("9020", "Harrison", [32, 64, 35, 55, 12, 12]),
    entry("9021", "Florence", [34, 68, 54, 20, 20, 13]),
    entry("9023", "Batesville", [32, 64, 38, 45, 12, 12]),
    entry("9024", "Fairfield", [33, 66, 86, 12, 20, 20]),
    entry("9025", "Mason", [46, 92, 54, 11, 6, 6]),
    entry("9026", "Beechmont", [4, 8, 76, 25, 18, 18]),
    entry("9027", "Mt. Washington", [3, 6, 54, 56, 6, 6]),
    entry("9029", "Montgomery", [44, 88, 57, 47, 6, 6]),
    entry("9030", "Oxford", [56, 112, 56, 56, 6, 6]),
    entry("9031", "West Chester", [43, 86, 46, 37, 14, 14]),
    entry("9032", "Lawrenceburg", [12, 24, 28, 38, 10, 10]),
    entry("9033", "Deerfield", [45, 90, 51, 19, 20, 20]),
];

/// Returns the stores served by the warehouse, ordered by department number.
#[must_use]
pub const fn default_catalogue() -> &'static [CatalogueEntry] {
    &CATALOGUE
}
