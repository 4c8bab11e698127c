//! Library repository fixtures

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Write a `browsercache` file whose root carries `name`
pub fn write_browsercache(folder: &Path, name: &str) -> PathBuf {
    std::fs::create_dir_all(folder).unwrap();
    let path = folder.join("browsercache");
    std::fs::write(
        &path,
        format!(
            r#"<?xml version="1.0" encoding="utf-8"?>
<LibraryBrowserCache Name="{name}">
  <Entries />
</LibraryBrowserCache>"#
        ),
    )
    .unwrap();
    path
}

/// Create a library folder laid out like the Managed Libraries tree:
/// `<root>/<company>/<title>/<version>/browsercache`
pub fn install_library(root: &Path, title: &str, version: &str, company: &str) -> PathBuf {
    let folder = root.join(company).join(title).join(version);
    write_browsercache(&folder, &format!("{title}, {version} ({company})"));
    folder
}

/// Write a `.plcproj` file with the given property values
pub fn write_plcproj(dir: &Path, file_name: &str, title: &str, version: &str, company: &str) -> PathBuf {
    let path = dir.join(file_name);
    std::fs::write(
        &path,
        format!(
            r#"<?xml version="1.0" encoding="utf-8"?>
<Project DefaultTargets="Build" xmlns="http://schemas.microsoft.com/developer/msbuild/2003">
  <PropertyGroup>
    <FileVersion>1.0.0.0</FileVersion>
    <Name>{title}</Name>
    <Title>{title}</Title>
    <ProjectVersion>{version}</ProjectVersion>
    <Company>{company}</Company>
  </PropertyGroup>
</Project>"#
        ),
    )
    .unwrap();
    path
}

/// Repository with three Tc2_Standard versions and one Tc2_System
pub fn create_test_repository() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    install_library(root, "Tc2_Standard", "3.3.3.0", "Beckhoff Automation GmbH");
    install_library(root, "Tc2_Standard", "3.3.10.0", "Beckhoff Automation GmbH");
    install_library(root, "Tc2_Standard", "3.3.9.0", "Beckhoff Automation GmbH");
    install_library(root, "Tc2_System", "3.4.26.0", "Beckhoff Automation GmbH");
    temp_dir
}
