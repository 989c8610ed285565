use course_advisor::recommendations::{CatalogError, CourseCatalog};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Built-in courses unless a CSV catalog path is given.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<CourseCatalog, CatalogError> {
    match path {
        Some(path) => {
            let catalog = CourseCatalog::from_path(path)?;
            info!(
                path = %path.display(),
                version = catalog.version(),
                courses = catalog.len(),
                "loaded course catalog"
            );
            Ok(catalog)
        }
        None => Ok(CourseCatalog::standard()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use course_advisor::recommendations::STANDARD_CATALOG_VERSION;

    #[test]
    fn no_path_means_the_standard_catalog() {
        let catalog = load_catalog(None).expect("standard catalog");
        assert_eq!(catalog.version(), STANDARD_CATALOG_VERSION);
        assert_eq!(catalog.len(), 6);
    }

    #[test]
    fn missing_file_is_reported() {
        let err = load_catalog(Some(Path::new("/no/such/catalog.csv"))).expect_err("missing");
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
