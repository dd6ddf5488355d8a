use serde::Serialize;

/// One row of the per-day report: a single matching order.
///
/// The day endpoint intentionally does not collapse orders of the same
/// branch into one row; only the monthly report aggregates.
#[derive(Debug, Clone, Serialize)]
pub struct OrderKilos {
    pub fecha: String,
    pub sucursal: String,
    pub kilos_total_orden: f64,
}

/// One row of the monthly report: total kilos for one normalized branch.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyKilos {
    pub mes: u32,
    pub anio: i32,
    pub sucursal: String,
    pub kilos_total_mes: f64,
}
