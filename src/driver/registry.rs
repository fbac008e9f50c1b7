use std::cmp::Reverse;
use std::fmt;
use super::traits::MusicDriver;
use super::types::DriverType;

/// Constructor stored in a factory
pub type DriverConstructor<D> = Box<dyn Fn() -> Box<D> + Send + Sync>;

/// Factory producing music drivers
pub type MusicDriverFactory = DriverFactory<dyn MusicDriver>;

/// Immutable registration record for one backend
pub struct DriverFactory<D: ?Sized> {
    driver_type: DriverType,
    priority: i32,
    name: String,
    description: String,
    constructor: DriverConstructor<D>,
}

impl<D: ?Sized> DriverFactory<D> {
    pub fn new<F>(
        driver_type: DriverType,
        priority: i32,
        name: impl Into<String>,
        description: impl Into<String>,
        constructor: F,
    ) -> Self
    where
        F: Fn() -> Box<D> + Send + Sync + 'static,
    {
        Self {
            driver_type,
            priority,
            name: name.into(),
            description: description.into(),
            constructor: Box::new(constructor),
        }
    }

    pub fn driver_type(&self) -> DriverType {
        self.driver_type
    }

    /// Higher is preferred during autoprobe; 0 means explicit selection only
    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Create a new, not yet started, driver instance
    pub fn create_instance(&self) -> Box<D> {
        (self.constructor)()
    }
}

impl MusicDriverFactory {
    pub fn music<F>(
        priority: i32,
        name: impl Into<String>,
        description: impl Into<String>,
        constructor: F,
    ) -> Self
    where
        F: Fn() -> Box<dyn MusicDriver> + Send + Sync + 'static,
    {
        Self::new(DriverType::Music, priority, name, description, constructor)
    }
}

impl<D: ?Sized> fmt::Debug for DriverFactory<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DriverFactory")
            .field("driver_type", &self.driver_type)
            .field("priority", &self.priority)
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Catalogue of driver factories, filled once at startup
///
/// Entries keep registration order, which breaks ties between equal
/// priorities. Names are unique per category, compared ASCII
/// case-insensitively.
pub struct DriverRegistry<D: ?Sized> {
    factories: Vec<DriverFactory<D>>,
}

pub type MusicDriverRegistry = DriverRegistry<dyn MusicDriver>;

impl<D: ?Sized> DriverRegistry<D> {
    pub fn new() -> Self {
        Self {
            factories: Vec::new(),
        }
    }

    /// Add a factory
    ///
    /// # Panics
    /// If a factory with the same category and name is already registered.
    pub fn register(&mut self, factory: DriverFactory<D>) {
        if let Some(existing) = self.find_by_name(factory.driver_type, &factory.name) {
            panic!(
                "duplicate {} driver '{}' registered",
                existing.driver_type, existing.name
            );
        }
        self.factories.push(factory);
    }

    /// Factories of `driver_type`, highest priority first
    pub fn list_available(&self, driver_type: DriverType) -> Vec<&DriverFactory<D>> {
        let mut available: Vec<_> = self
            .factories
            .iter()
            .filter(|f| f.driver_type == driver_type)
            .collect();
        // stable sort keeps registration order among equal priorities
        available.sort_by_key(|f| Reverse(f.priority));
        available
    }

    pub fn find_by_name(&self, driver_type: DriverType, name: &str) -> Option<&DriverFactory<D>> {
        self.factories
            .iter()
            .find(|f| f.driver_type == driver_type && f.name.eq_ignore_ascii_case(name))
    }

    /// Names of all factories of `driver_type`, in priority order
    pub fn list_drivers(&self, driver_type: DriverType) -> Vec<String> {
        self.list_available(driver_type)
            .into_iter()
            .map(|f| f.name.clone())
            .collect()
    }

    /// Help text listing the drivers of `driver_type`
    pub fn describe(&self, driver_type: DriverType) -> String {
        let available = self.list_available(driver_type);
        let width = available.iter().map(|f| f.name.len()).max().unwrap_or(0);

        let mut out = format!("List of {} drivers:\n", driver_type);
        for factory in available {
            out.push_str(&format!(
                "  {:>width$}: {}\n",
                factory.name,
                factory.description,
                width = width
            ));
        }
        out
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl<D: ?Sized> Default for DriverRegistry<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl MusicDriverRegistry {
    /// Registry holding every music driver built into this target
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        crate::drivers::register_music_drivers(&mut registry);
        registry
    }
}
