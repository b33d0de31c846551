//! Conversions between [`SupplyQuantities`] and `integer` columns.
//!
//! Shared by every adapter that stores the six supply counts.

use crate::store::domain::SupplyQuantities;
use std::num::TryFromIntError;

/// The six supply columns in storage order: sleeves, caps, canvases, totes,
/// hardlines raw, softlines raw.
pub(crate) type SupplyColumns = [i32; 6];

/// Converts quantities into column values.
pub(crate) fn to_columns(quantities: &SupplyQuantities) -> Result<SupplyColumns, TryFromIntError> {
    Ok([
        i32::try_from(quantities.sleeves)?,
        i32::try_from(quantities.caps)?,
        i32::try_from(quantities.canvases)?,
        i32::try_from(quantities.totes)?,
        i32::try_from(quantities.hardlines_raw)?,
        i32::try_from(quantities.softlines_raw)?,
    ])
}

/// Converts column values back into quantities. Negative values are rejected.
pub(crate) fn from_columns(columns: SupplyColumns) -> Result<SupplyQuantities, TryFromIntError> {
    let [sleeves, caps, canvases, totes, hardlines_raw, softlines_raw] = columns;
    Ok(SupplyQuantities {
        sleeves: u32::try_from(sleeves)?,
        caps: u32::try_from(caps)?,
        canvases: u32::try_from(canvases)?,
        totes: u32::try_from(totes)?,
        hardlines_raw: u32::try_from(hardlines_raw)?,
        softlines_raw: u32::try_from(softlines_raw)?,
    })
}
