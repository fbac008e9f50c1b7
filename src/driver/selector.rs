use tracing::{debug, info};
use super::error::{DriverError, Result};
use super::params::DriverSelection;
use super::registry::DriverRegistry;
use super::traits::Driver;
use super::types::DriverType;

/// Instantiate and start one driver of `driver_type`
///
/// An explicit name must be registered and must start. Without a name the
/// factories are probed in priority order and the first that starts wins;
/// priority 0 factories are skipped. Probe failures are logged and
/// swallowed.
pub fn select_driver<D>(
    registry: &DriverRegistry<D>,
    driver_type: DriverType,
    selection: &DriverSelection,
) -> Result<Box<D>>
where
    D: Driver + ?Sized,
{
    if let Some(name) = selection.name.as_deref() {
        let factory = registry
            .find_by_name(driver_type, name)
            .ok_or_else(|| DriverError::UnknownDriver {
                driver_type,
                name: name.to_string(),
            })?;

        let mut driver = factory.create_instance();
        driver
            .start(&selection.params)
            .map_err(|e| DriverError::StartFailure {
                driver_type,
                name: factory.name().to_string(),
                message: e.to_string(),
            })?;

        info!("Successfully loaded {} driver '{}'", driver_type, factory.name());
        return Ok(driver);
    }

    let mut last_error = None;
    for factory in registry.list_available(driver_type) {
        if factory.priority() == 0 {
            debug!("Skipping {} driver '{}': explicit selection only", driver_type, factory.name());
            continue;
        }

        debug!("Probing {} driver '{}'", driver_type, factory.name());
        let mut driver = factory.create_instance();
        match driver.start(&selection.params) {
            Ok(()) => {
                info!("Successfully probed {} driver '{}'", driver_type, factory.name());
                return Ok(driver);
            }
            Err(e) => {
                debug!(
                    "Probing {} driver '{}' failed with error: {}",
                    driver_type,
                    factory.name(),
                    e
                );
                last_error = Some(format!("{}: {}", factory.name(), e));
            }
        }
    }

    Err(DriverError::NoDriverAvailable {
        driver_type,
        last_error,
    })
}
