use dealer_finance::config::FinancingConfig;
use dealer_finance::financing::{CatalogError, FinancingService, LenderCatalog};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Catalog from the configured path, or the reference catalog when none is set.
pub(crate) fn load_catalog(config: &FinancingConfig) -> Result<LenderCatalog, CatalogError> {
    let Some(path) = &config.catalog_path else {
        let catalog = LenderCatalog::reference();
        info!(lenders = catalog.len(), "using reference lender catalog");
        return Ok(catalog);
    };

    let catalog = LenderCatalog::from_path(path)?;
    info!(
        path = %path.display(),
        lenders = catalog.len(),
        "lender catalog loaded"
    );
    Ok(catalog)
}

pub(crate) fn financing_service(
    config: &FinancingConfig,
) -> Result<Arc<FinancingService>, CatalogError> {
    let catalog = Arc::new(load_catalog(config)?);
    Ok(Arc::new(FinancingService::new(catalog, config.matcher())))
}

/// Apply command-line overrides on top of the environment configuration.
pub(crate) fn with_overrides(
    mut config: FinancingConfig,
    catalog: Option<PathBuf>,
    reference_year: Option<i32>,
) -> FinancingConfig {
    if catalog.is_some() {
        config.catalog_path = catalog;
    }
    if reference_year.is_some() {
        config.reference_year = reference_year;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_catalog_backs_unconfigured_service() {
        let service = financing_service(&FinancingConfig::default()).expect("service builds");
        assert_eq!(service.catalog().len(), 5);
    }

    #[test]
    fn overrides_replace_only_supplied_values() {
        let base = FinancingConfig {
            catalog_path: Some(PathBuf::from("lenders.json")),
            quote_term_months: 72,
            reference_year: Some(2023),
        };

        let merged = with_overrides(base.clone(), None, Some(2025));
        assert_eq!(merged.catalog_path, base.catalog_path);
        assert_eq!(merged.reference_year, Some(2025));
        assert_eq!(merged.quote_term_months, 72);
    }

    #[test]
    fn missing_catalog_file_fails_service_construction() {
        let config = FinancingConfig {
            catalog_path: Some(PathBuf::from("does-not-exist/lenders.csv")),
            ..FinancingConfig::default()
        };
        assert!(matches!(
            financing_service(&config),
            Err(CatalogError::Io(_))
        ));
    }
}
