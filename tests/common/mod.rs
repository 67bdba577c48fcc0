//! Shared testing utilities for habitat-tasks CLI tests.

use assert_cmd::Command;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::ffi::OsString;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tar::{Builder, EntryType, Header};
use tempfile::TempDir;

/// A Habitat `last_build.env` as written by `hab pkg build`.
pub const LAST_BUILD_ENV: &str = "\
pkg_origin=core
pkg_name=redis
pkg_version=4.0.14
pkg_release=20190319155852
pkg_target=x86_64-linux
pkg_ident=core/redis/4.0.14/20190319155852
pkg_artifact=core-redis-4.0.14-20190319155852-x86_64-linux.hart
pkg_sha256sum=5f1e0b1d0c2a
pkg_blake2bsum=9a7c3e44b1f0
pkg_build_secret=do-not-publish
";

/// Inputs a host may have exported into the test runner's own environment.
const HOST_ENV: &[&str] = &[
    "GITHUB_ACTIONS",
    "GITHUB_ENV",
    "GITHUB_OUTPUT",
    "HABITAT_TASKS_CONFIG",
    "HABITAT_TASKS_DOWNLOADER",
    "HABITAT_TASKS_LOG",
    "INPUT_HABITATLASTBUILDENVPATH",
    "INPUT_HABITATSETBUILDNUMBER",
    "INPUT_HABITATSETIMAGENAMES",
    "INPUT_HABITATIMAGENAMES",
    "INPUT_HABITATIMAGENAMESFILENAME",
    "INPUT_SCRIPTURL",
    "INPUT_HABITATPATH",
    "INPUT_DOWNLOADPATH",
    "INPUT_UNPACKPATH",
];

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Path to the directory used as the CLI's working directory.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for the compiled binary, reporting to Azure Pipelines.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("habitat-tasks").expect("Failed to locate binary");
        cmd.current_dir(&self.work_dir);
        for name in HOST_ENV {
            cmd.env_remove(name);
        }
        cmd.env("HABITAT_TASKS_HOST", "azure");
        cmd
    }

    /// Write `last_build.env` under `results/` and return its path.
    pub fn write_last_build(&self, content: &str) -> PathBuf {
        let results = self.work_dir.join("results");
        fs::create_dir_all(&results).expect("Failed to create results dir");
        let path = results.join("last_build.env");
        fs::write(&path, content).expect("Failed to write last_build.env");
        path
    }

    /// Build a Habitat-shaped release tarball and return its path.
    pub fn release_tarball(&self) -> PathBuf {
        let path = self.root.path().join("hab-x86_64-linux.tar.gz");
        let file = fs::File::create(&path).expect("Failed to create tarball");
        let mut builder = Builder::new(GzEncoder::new(file, Compression::default()));

        let mut dir = Header::new_gnu();
        dir.set_entry_type(EntryType::Directory);
        dir.set_size(0);
        dir.set_mode(0o755);
        dir.set_cksum();
        builder
            .append_data(&mut dir, "hab-1.6.0-20200420200029-x86_64-linux/", std::io::empty())
            .unwrap();

        let data: &[u8] = b"#!/bin/sh\necho hab 1.6.0\n";
        let mut file = Header::new_gnu();
        file.set_size(data.len() as u64);
        file.set_mode(0o755);
        file.set_cksum();
        builder.append_data(&mut file, "hab-1.6.0-20200420200029-x86_64-linux/hab", data).unwrap();

        builder.into_inner().unwrap().finish().unwrap();
        path
    }
}

/// A `curl` stand-in placed first on `PATH`.
///
/// Logs its arguments and copies a fixture to the `--output` destination.
#[allow(dead_code)]
pub struct FakeCurl {
    pub root: TempDir,
    pub bin_dir: PathBuf,
    pub log_file: PathBuf,
}

#[allow(dead_code)]
impl FakeCurl {
    /// Serve `fixture` and exit with `exit_code`.
    pub fn new(fixture: &Path, exit_code: i32) -> Self {
        let root = TempDir::new().expect("Failed to create temp dir for fake curl");
        let bin_dir = root.path().join("bin");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");
        let log_file = root.path().join("curl.log");

        let script = format!(
            r#"#!/bin/sh
echo "$@" >> "{log}"
if [ {code} -ne 0 ]; then
    echo "curl: (22) The requested URL returned error: 404" >&2
    exit {code}
fi
out=""
prev=""
for arg in "$@"; do
    if [ "$prev" = "--output" ]; then
        out="$arg"
    fi
    prev="$arg"
done
cp "{fixture}" "$out"
"#,
            log = log_file.display(),
            code = exit_code,
            fixture = fixture.display(),
        );

        let path = bin_dir.join("curl");
        fs::write(&path, script).expect("Failed to write fake curl");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to chmod fake curl");

        Self { root, bin_dir, log_file }
    }

    /// `PATH` value with the fake first.
    pub fn path_env(&self) -> OsString {
        let mut paths = vec![self.bin_dir.clone()];
        if let Some(existing) = std::env::var_os("PATH") {
            paths.extend(std::env::split_paths(&existing));
        }
        std::env::join_paths(paths).expect("Failed to join PATH")
    }

    pub fn invocations(&self) -> Vec<String> {
        fs::read_to_string(&self.log_file)
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}
