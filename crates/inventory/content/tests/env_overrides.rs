//! Process-environment overrides. Kept to a single test so no other test in
//! this binary observes the mutated environment.

use std::io::Write;

use inventory_content::ConfigLoader;
use inventory_content::loaders::config::BASE_CAPACITY_ENV;
use inventory_core::InventoryConfig;

#[test]
fn environment_overrides_defaults_and_files() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "base_capacity = 80").unwrap();

    // SAFETY: this is the only test in this binary, so no other thread reads
    // the environment concurrently.
    unsafe { std::env::remove_var(BASE_CAPACITY_ENV) };
    assert_eq!(ConfigLoader::from_env(), InventoryConfig::default());
    assert_eq!(ConfigLoader::load_with_env(file.path()).unwrap().base_capacity, 80);

    // SAFETY: as above.
    unsafe { std::env::set_var(BASE_CAPACITY_ENV, "33") };
    assert_eq!(ConfigLoader::from_env().base_capacity, 33);
    assert_eq!(ConfigLoader::load_with_env(file.path()).unwrap().base_capacity, 33);
}
