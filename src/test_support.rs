use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not
        // thread-safe. Lock it so tests don't race even if a #[serial]
        // annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// A workspace with a profile document and a build description, the typical
/// starting state of a real firmware project.
pub(crate) fn create_test_workspace() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    std::fs::write(
        path.join("platform.json"),
        r#"{
    "linux": {
        "toolchain_gcc": "/opt/tools/gcc-arm/bin/arm-none-eabi-gcc",
        "gdb": "/opt/tools/gcc-arm/bin/arm-none-eabi-gdb",
        "openocd": "/usr/bin/openocd",
        "build_dir": "build",
        "svd_file": "STM32L476.svd"
    },
    "windows": {
        "toolchain_gcc": "C:/tools/gcc-arm/bin/arm-none-eabi-gcc.exe",
        "gdb": "C:/tools/gcc-arm/bin/arm-none-eabi-gdb.exe",
        "openocd": "C:/tools/openocd/bin/openocd.exe"
    }
}
"#,
    )
    .unwrap();

    std::fs::write(
        path.join("CMakeLists.txt"),
        "cmake_minimum_required(VERSION 3.22)\nset(CMAKE_PROJECT_NAME stepper-fw)\nproject(${CMAKE_PROJECT_NAME})\n",
    )
    .unwrap();

    temp_dir
}
