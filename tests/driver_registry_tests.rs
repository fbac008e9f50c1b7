use musicdrv::driver::*;
use musicdrv::drivers::NullMusicDriver;

fn null_factory(priority: i32, name: &str) -> MusicDriverFactory {
    MusicDriverFactory::music(priority, name, format!("{} driver", name), || {
        Box::new(NullMusicDriver::new())
    })
}

#[test]
fn test_registry_register_and_list() {
    let mut registry = MusicDriverRegistry::new();

    // Initially empty
    assert!(registry.is_empty());
    assert!(registry.list_available(DriverType::Music).is_empty());

    registry.register(null_factory(1, "null"));
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.list_drivers(DriverType::Music), vec!["null".to_string()]);
}

#[test]
fn test_list_available_sorted_by_priority() {
    let mut registry = MusicDriverRegistry::new();
    registry.register(null_factory(1, "low"));
    registry.register(null_factory(10, "high"));
    registry.register(null_factory(5, "mid-a"));
    registry.register(null_factory(5, "mid-b"));
    registry.register(null_factory(5, "mid-c"));

    let available = registry.list_available(DriverType::Music);
    let priorities: Vec<i32> = available.iter().map(|f| f.priority()).collect();
    assert!(priorities.windows(2).all(|w| w[0] >= w[1]));

    // equal priorities keep registration order
    let names: Vec<&str> = available.iter().map(|f| f.name()).collect();
    assert_eq!(names, vec!["high", "mid-a", "mid-b", "mid-c", "low"]);
}

#[test]
fn test_list_available_filters_category() {
    let mut registry = MusicDriverRegistry::new();
    registry.register(null_factory(1, "null"));
    registry.register(MusicDriverFactory::new(
        DriverType::Sound,
        1,
        "null",
        "Null Sound Driver",
        || Box::new(NullMusicDriver::new()),
    ));

    assert_eq!(registry.list_available(DriverType::Music).len(), 1);
    assert_eq!(registry.list_available(DriverType::Sound).len(), 1);
    assert!(registry.list_available(DriverType::Video).is_empty());
}

#[test]
fn test_find_by_name() {
    let mut registry = MusicDriverRegistry::new();
    registry.register(null_factory(3, "extmidi"));
    registry.register(null_factory(1, "null"));

    let factory = registry.find_by_name(DriverType::Music, "extmidi").unwrap();
    assert_eq!(factory.name(), "extmidi");
    assert_eq!(factory.priority(), 3);
    assert_eq!(factory.description(), "extmidi driver");

    assert_eq!(registry.find_by_name(DriverType::Music, "NULL").unwrap().name(), "null");
    assert!(registry.find_by_name(DriverType::Music, "ext").is_none());
    assert!(registry.find_by_name(DriverType::Music, "").is_none());
    assert!(registry.find_by_name(DriverType::Sound, "null").is_none());
}

#[test]
#[should_panic(expected = "duplicate music driver 'null'")]
fn test_duplicate_registration_panics() {
    let mut registry = MusicDriverRegistry::new();
    registry.register(null_factory(1, "null"));
    registry.register(null_factory(2, "Null"));
}

#[test]
fn test_factory_creates_fresh_instances() {
    let factory = null_factory(1, "null");

    let mut first = factory.create_instance();
    first.set_volume(10);
    let second = factory.create_instance();

    assert_eq!(first.volume(), 10);
    assert_eq!(second.volume(), DEFAULT_MUSIC_VOLUME);
}

#[test]
fn test_describe_lists_drivers_in_priority_order() {
    let mut registry = MusicDriverRegistry::new();
    registry.register(null_factory(1, "null"));
    registry.register(null_factory(3, "extmidi"));

    let help = registry.describe(DriverType::Music);
    assert_eq!(
        help,
        "List of music drivers:\n  extmidi: extmidi driver\n     null: null driver\n"
    );
}

#[test]
fn test_registry_default_drivers() {
    let registry = MusicDriverRegistry::with_defaults();

    let drivers = registry.list_drivers(DriverType::Music);
    assert!(drivers.contains(&"null".to_string()));
    assert!(drivers.contains(&"extmidi".to_string()));
    // null is the last resort
    assert_eq!(drivers.last().map(String::as_str), Some("null"));
}
