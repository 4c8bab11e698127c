mod helper;

use tempfile::TempDir;

use helper::{create_test_repository, install_library, write_browsercache};
use tc_library::config::ScanConfig;
use tc_library::library::scan_repository_with_config;
use tc_library::{
    Library, LibraryError, LibraryReference, PathRegistry, find_latest, scan_repository,
};

#[test]
fn scan_repository_of_missing_root_is_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let registry = PathRegistry::new();

    let err = scan_repository(&temp_dir.path().join("missing"), &registry).unwrap_err();

    assert!(matches!(err, LibraryError::FileNotFound { .. }));
}

#[test]
fn scan_repository_without_browsercache_files_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir_all(temp_dir.path().join("Beckhoff").join("Tc2_Standard")).unwrap();
    std::fs::write(temp_dir.path().join("readme.txt"), "nothing here").unwrap();
    let registry = PathRegistry::new();

    let libraries = scan_repository(temp_dir.path(), &registry).unwrap();

    assert!(libraries.is_empty());
}

#[test]
fn scan_repository_finds_every_installed_library() {
    let temp_dir = create_test_repository();
    let registry = PathRegistry::new();

    let libraries = scan_repository(temp_dir.path(), &registry).unwrap();

    let mut names: Vec<String> = libraries.iter().map(ToString::to_string).collect();
    names.sort();
    assert_eq!(
        names,
        vec![
            "Tc2_Standard, 3.3.10.0 (Beckhoff Automation GmbH)",
            "Tc2_Standard, 3.3.3.0 (Beckhoff Automation GmbH)",
            "Tc2_Standard, 3.3.9.0 (Beckhoff Automation GmbH)",
            "Tc2_System, 3.4.26.0 (Beckhoff Automation GmbH)",
        ]
    );
    assert_eq!(registry.len(), 4);
}

#[test]
fn scan_repository_fails_on_invalid_browsercache() {
    let temp_dir = create_test_repository();
    write_browsercache(&temp_dir.path().join("Broken"), "not a library");
    let registry = PathRegistry::new();

    let err = scan_repository(temp_dir.path(), &registry).unwrap_err();

    assert!(matches!(err, LibraryError::InvalidLibrary { .. }));
    assert!(registry.is_empty());
}

#[test]
fn scan_repository_rejects_folders_held_by_live_libraries() {
    let temp_dir = TempDir::new().unwrap();
    let folder = install_library(temp_dir.path(), "Tc2_Standard", "3.3.3.0", "Beckhoff Automation GmbH");
    let registry = PathRegistry::new();
    let _held = Library::from_repository_folder(&folder, &registry).unwrap();

    let err = scan_repository(temp_dir.path(), &registry).unwrap_err();

    assert!(matches!(err, LibraryError::DuplicatePath { .. }));
}

#[test]
fn scan_repository_with_config_uses_configured_root() {
    let temp_dir = create_test_repository();
    let registry = PathRegistry::new();

    let config: ScanConfig = serde_json::from_value(serde_json::json!({
        "repositoryPath": temp_dir.path()
    }))
    .unwrap();
    let libraries = scan_repository_with_config(&config, &registry).unwrap();

    assert_eq!(libraries.len(), 4);
}

#[test]
fn find_latest_picks_newest_matching_version() {
    let temp_dir = create_test_repository();
    let registry = PathRegistry::new();
    let libraries = scan_repository(temp_dir.path(), &registry).unwrap();

    let wanted: LibraryReference = "TC2_STANDARD, * (Beckhoff Automation GmbH)".parse().unwrap();
    let latest = find_latest(&libraries, &wanted).unwrap();

    assert_eq!(latest.to_string(), "Tc2_Standard, 3.3.10.0 (Beckhoff Automation GmbH)");
}

#[test]
fn find_latest_with_fixed_version_returns_exact_match() {
    let temp_dir = create_test_repository();
    let registry = PathRegistry::new();
    let libraries = scan_repository(temp_dir.path(), &registry).unwrap();

    let wanted: LibraryReference = "Tc2_Standard, 3.3.9.0 (Beckhoff Automation GmbH)".parse().unwrap();
    let latest = find_latest(&libraries, &wanted).unwrap();

    assert_eq!(latest.version().to_string(), "3.3.9.0");
}

#[test]
fn find_latest_without_match_is_none() {
    let temp_dir = create_test_repository();
    let registry = PathRegistry::new();
    let libraries = scan_repository(temp_dir.path(), &registry).unwrap();

    let wanted: LibraryReference = "Tc3_Module, * (Beckhoff Automation GmbH)".parse().unwrap();

    assert!(find_latest(&libraries, &wanted).is_none());
}

#[test]
fn select_latest_over_scanned_family() {
    let temp_dir = create_test_repository();
    let registry = PathRegistry::new();
    let libraries = scan_repository(temp_dir.path(), &registry).unwrap();

    let standard: Vec<Library> = libraries
        .into_iter()
        .filter(|library| library.title() == "Tc2_Standard")
        .collect();
    let latest = LibraryReference::select_latest(&standard).unwrap().unwrap();

    assert_eq!(latest.version().to_string(), "3.3.10.0");
}

#[test]
fn select_latest_over_mixed_repository_is_mismatched() {
    let temp_dir = create_test_repository();
    let registry = PathRegistry::new();
    let libraries = scan_repository(temp_dir.path(), &registry).unwrap();

    assert!(matches!(
        LibraryReference::select_latest(&libraries),
        Err(LibraryError::MismatchedLibrary)
    ));
}

#[cfg(unix)]
#[test]
fn scan_repository_reads_symlinked_browsercache() {
    let temp_dir = TempDir::new().unwrap();
    let shared = write_browsercache(
        &temp_dir.path().join("shared"),
        "Tc2_Utilities, 3.3.59.0 (Beckhoff Automation GmbH)",
    );
    let repository = temp_dir.path().join("repository");
    let folder = repository.join("Tc2_Utilities").join("3.3.59.0");
    std::fs::create_dir_all(&folder).unwrap();
    std::os::unix::fs::symlink(&shared, folder.join("browsercache")).unwrap();
    let registry = PathRegistry::new();

    let libraries = scan_repository(&repository, &registry).unwrap();

    assert_eq!(libraries.len(), 1);
    assert_eq!(libraries[0].title(), "Tc2_Utilities");
    assert_eq!(libraries[0].path(), std::fs::canonicalize(&folder).unwrap());
}
