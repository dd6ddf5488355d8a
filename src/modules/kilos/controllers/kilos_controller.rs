use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::{error, info};

use crate::config::{Config, OdooConfig};
use crate::core::dates;
use crate::core::{AppError, Result};
use crate::modules::kilos::models::{MonthlyKilos, OrderKilos};
use crate::modules::kilos::services::{aggregate_kilos, OdooClient};

/// Query parameters for the per-day report.
///
/// Extracted as options so a missing parameter yields our own 400 message
/// instead of actix's generic extractor rejection.
#[derive(Debug, Deserialize)]
pub struct DayQuery {
    pub fecha: Option<String>,
}

/// Query parameters for the monthly report.
#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub mes: Option<String>,
    pub anio: Option<String>,
}

/// GET /api/kilos_por_orden/csv
///
/// One row per matching order for the requested day. Orders of the same
/// branch are not collapsed here; that is the monthly report's job.
pub async fn kilos_por_orden(
    config: web::Data<Config>,
    query: web::Query<DayQuery>,
) -> Result<HttpResponse> {
    let fecha = query.fecha.as_deref().ok_or_else(|| {
        AppError::validation("Missing required query parameter 'fecha' (YYYY-MM-DD)")
    })?;
    let (start, end) = dates::resolve_day(fecha)?;
    let odoo = odoo_config(&config)?;

    info!(fecha, "Fetching kilos per order");

    let session = OdooClient::new(odoo).connect().await.inspect_err(|e| {
        error!("Odoo handshake failed: {e}");
    })?;
    let orders = session.search_orders(start, end).await.inspect_err(|e| {
        error!("pos.order query failed: {e}");
    })?;

    let rows: Vec<OrderKilos> = orders
        .iter()
        .filter_map(|order| {
            let branch = order.config_id.as_ref()?;
            let kilos = order.kilos.unwrap_or(0.0);
            (kilos > 0.0).then(|| OrderKilos {
                fecha: fecha.to_string(),
                sucursal: branch.label.clone(),
                kilos_total_orden: kilos,
            })
        })
        .collect();

    info!(fecha, rows = rows.len(), "Kilos per order report ready");

    Ok(HttpResponse::Ok().json(rows))
}

/// GET /api/kilos_por_mes/csv
///
/// Total kilos per normalized branch across the requested month.
pub async fn kilos_por_mes(
    config: web::Data<Config>,
    query: web::Query<MonthQuery>,
) -> Result<HttpResponse> {
    let (Some(mes_raw), Some(anio_raw)) = (query.mes.as_deref(), query.anio.as_deref()) else {
        return Err(AppError::validation(
            "Missing required query parameters 'mes' and/or 'anio' (e.g. mes=5&anio=2025)",
        ));
    };
    let mes: u32 = mes_raw.parse().map_err(|_| {
        AppError::validation(format!("Invalid 'mes' value '{mes_raw}', expected 1-12"))
    })?;
    let anio: i32 = anio_raw.parse().map_err(|_| {
        AppError::validation(format!("Invalid 'anio' value '{anio_raw}', expected 1900-2100"))
    })?;
    let (start, end) = dates::resolve_month(mes, anio)?;
    let odoo = odoo_config(&config)?;

    info!(mes, anio, "Fetching kilos per branch for the month");

    let session = OdooClient::new(odoo).connect().await.inspect_err(|e| {
        error!("Odoo handshake failed: {e}");
    })?;
    let orders = session.search_orders(start, end).await.inspect_err(|e| {
        error!("pos.order query failed: {e}");
    })?;

    let totals = aggregate_kilos(&orders, true);
    let rows: Vec<MonthlyKilos> = totals
        .into_iter()
        .map(|(sucursal, kilos)| MonthlyKilos {
            mes,
            anio,
            sucursal,
            kilos_total_mes: kilos,
        })
        .collect();

    info!(mes, anio, branches = rows.len(), "Monthly kilos report ready");

    Ok(HttpResponse::Ok().json(rows))
}

fn odoo_config(config: &Config) -> Result<&OdooConfig> {
    config.odoo.as_ref().ok_or_else(|| {
        AppError::configuration(
            "Odoo credentials are not configured (ODOO_URL, ODOO_DB, ODOO_USERNAME, ODOO_PASSWORD)",
        )
    })
}

/// Configure kilos report routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/kilos_por_orden/csv", web::get().to(kilos_por_orden))
            .route("/kilos_por_mes/csv", web::get().to(kilos_por_mes)),
    );
}
