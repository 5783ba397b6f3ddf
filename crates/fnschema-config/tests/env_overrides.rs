//! Layering tests for `FnschemaConfig::figment()`.
//!
//! Uses `figment::Jail` so env vars and the working directory are sandboxed.

use figment::Jail;
use fnschema_config::FnschemaConfig;
use fnschema_core::{CyclePolicy, DuplicatePolicy};
use pretty_assertions::assert_eq;

fn isolate_user_config(jail: &mut Jail) {
    let dir = jail.directory().join("xdg");
    jail.set_env("XDG_CONFIG_HOME", dir.display());
}

#[test]
fn defaults_without_files_or_env() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        let config = FnschemaConfig::load().expect("config loads");
        assert_eq!(config, FnschemaConfig::default());
        Ok(())
    });
}

#[test]
fn project_file_sets_policies() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.create_file(
            ".fnschema.toml",
            r#"
[source]
include_tests = true

[schema]
cycles = "error"
duplicates = "error"
"#,
        )?;

        let config = FnschemaConfig::load().expect("config loads");
        assert!(config.load_options().include_tests);
        assert_eq!(config.translate_options().cycles, CyclePolicy::Error);
        assert_eq!(config.translate_options().duplicates, DuplicatePolicy::Error);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.create_file(
            ".fnschema.toml",
            "[schema]\ncycles = \"error\"\nduplicates = \"first\"\n",
        )?;
        jail.set_env("FNSCHEMA_SCHEMA__DUPLICATES", "error");
        jail.set_env("FNSCHEMA_SOURCE__INCLUDE_TESTS", "true");

        let config = FnschemaConfig::load().expect("config loads");
        assert_eq!(config.schema.cycles, CyclePolicy::Error);
        assert_eq!(config.schema.duplicates, DuplicatePolicy::Error);
        assert!(config.source.include_tests);
        Ok(())
    });
}

#[test]
fn project_file_beats_user_file() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        std::fs::create_dir_all(jail.directory().join("xdg").join("fnschema"))
            .expect("user config dir");
        jail.create_file(
            "xdg/fnschema/config.toml",
            "[schema]\ncycles = \"error\"\nduplicates = \"error\"\n",
        )?;
        jail.create_file(".fnschema.toml", "[schema]\nduplicates = \"first\"\n")?;

        let config = FnschemaConfig::load().expect("config loads");
        assert_eq!(config.schema.cycles, CyclePolicy::Error);
        assert_eq!(config.schema.duplicates, DuplicatePolicy::First);
        Ok(())
    });
}

#[test]
fn log_filter_variable_is_not_a_config_key() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.set_env("FNSCHEMA_LOG", "debug");
        assert_eq!(FnschemaConfig::load().expect("config loads"), FnschemaConfig::default());
        Ok(())
    });
}

#[test]
fn unknown_policy_is_rejected() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.set_env("FNSCHEMA_SCHEMA__CYCLES", "explode");
        assert!(FnschemaConfig::load().is_err());
        Ok(())
    });
}
